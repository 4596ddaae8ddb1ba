//! Core types for the canvas

use serde::{Serialize, Deserialize};

/// RGB color (0-255 per channel)
///
/// Canvas draws are opaque overwrites, so there is no alpha channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const GRAY: Color = Color { r: 128, g: 128, b: 128 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };
    pub const YELLOW: Color = Color { r: 255, g: 255, b: 0 };
    pub const CYAN: Color = Color { r: 0, g: 255, b: 255 };
    pub const PURPLE: Color = Color { r: 255, g: 0, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from an RGBA quad, dropping alpha (truncation, no blending)
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self { r: rgba[0], g: rgba[1], b: rgba[2] }
    }

    /// Convert to [u8; 3] in RGB order
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to [u8; 3] in BGR order (TGA pixel layout)
    pub fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Build from BGR bytes (TGA pixel layout)
    pub fn from_bgr(b: u8, g: u8, r: u8) -> Self {
        Self { r, g, b }
    }
}

/// How a shape's outline and interior are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    pub border_color: Color,
    /// Number of concentric 1-pixel border rings (rectangles only, clamped to >= 1)
    pub border_width: i32,
    /// Interior color, None = outline only
    pub fill: Option<Color>,
}

impl ShapeStyle {
    /// Outline only
    pub fn outline(border_color: Color, border_width: i32) -> Self {
        Self {
            border_color,
            border_width,
            fill: None,
        }
    }

    /// Same outline, interior painted with `fill`
    pub fn filled(self, fill: Color) -> Self {
        Self {
            fill: Some(fill),
            ..self
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::outline(Color::WHITE, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_channel_order() {
        let c = Color::new(10, 20, 30);
        assert_eq!(c.to_bytes(), [10, 20, 30]);
        assert_eq!(c.to_bgr(), [30, 20, 10]);
        assert_eq!(Color::from_bgr(30, 20, 10), c);
        assert_eq!(Color::from_rgba([10, 20, 30, 0]), c);
    }

    #[test]
    fn test_shape_style_filled() {
        let style = ShapeStyle::outline(Color::WHITE, 3).filled(Color::RED);
        assert_eq!(style.border_color, Color::WHITE);
        assert_eq!(style.border_width, 3);
        assert_eq!(style.fill, Some(Color::RED));
    }
}
