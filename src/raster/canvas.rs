//! Pixel storage for software painting

use super::types::Color;

/// Owned RGB pixel grid, row-major, origin top-left
///
/// `pixels.len() == width * height` always holds. `Clone` is a full deep copy,
/// so a snapshot never aliases the canvas it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Canvas {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Create a canvas with every pixel zeroed (black)
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Color::BLACK; width * height],
            width,
            height,
        }
    }

    /// Wrap an existing row-major pixel vector
    ///
    /// Returns None if the length does not match the dimensions.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self { pixels, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Read a pixel. The caller guarantees `x < width && y < height`.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Write a pixel. The caller guarantees `x < width && y < height`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }

    /// Write a pixel, silently dropping it if it falls outside the canvas
    ///
    /// Every rasterizer goes through this, so off-canvas geometry is clipped
    /// rather than reported.
    #[inline]
    pub fn write_clipped(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Change size keeping the old content in the top-left corner
    ///
    /// Newly exposed pixels are black.
    pub fn resize(&mut self, width: usize, height: usize) {
        let mut new_pixels = vec![Color::BLACK; width * height];
        let min_width = self.width.min(width);
        let min_height = self.height.min(height);

        for y in 0..min_height {
            let src = y * self.width;
            let dst = y * width;
            new_pixels[dst..dst + min_width].copy_from_slice(&self.pixels[src..src + min_width]);
        }

        self.pixels = new_pixels;
        self.width = width;
        self.height = height;
    }

    /// Change size and resample the content (nearest neighbor)
    pub fn scale(&mut self, width: usize, height: usize) {
        // Nothing to sample from
        if self.pixels.is_empty() {
            *self = Canvas::new(width, height);
            return;
        }

        let mut new_pixels = Vec::with_capacity(width * height);

        for y in 0..height {
            let sy = (self.height as f32 * (y as f32 / height as f32)) as usize;
            let sy = sy.min(self.height - 1);
            for x in 0..width {
                // Float rounding can land exactly on the edge for huge sizes
                let sx = (self.width as f32 * (x as f32 / width as f32)) as usize;
                let sx = sx.min(self.width - 1);
                new_pixels.push(self.get_pixel(sx, sy));
            }
        }

        self.pixels = new_pixels;
        self.width = width;
        self.height = height;
    }

    /// Copy out a `width x height` region starting at (x, y)
    ///
    /// Parts of the region that fall outside this canvas stay black.
    pub fn area(&self, x: usize, y: usize, width: usize, height: usize) -> Canvas {
        let mut result = Canvas::new(width, height);
        for ry in 0..height {
            for rx in 0..width {
                let (sx, sy) = (x + rx, y + ry);
                if sx < self.width && sy < self.height {
                    result.set_pixel(rx, ry, self.get_pixel(sx, sy));
                }
            }
        }
        result
    }

    /// Mirror the canvas vertically in place (row y swaps with row height-1-y)
    pub fn flip_y(&mut self) {
        let width = self.width;
        let height = self.height;
        for y in 0..height / 2 {
            let (top, bottom) = self.pixels.split_at_mut((height - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
    }
}
