//! Shape rasterization
//! Lines (DDA), bordered rectangles, scanline-filled triangles and image blits
//!
//! Shapes that leave the canvas are clipped silently, at any coordinate.

use super::canvas::Canvas;
use super::math::Vec2;
use super::types::{Color, ShapeStyle};

/// DDA walk from (x0, y0) to (x1, y1), inclusive of both end points
///
/// Takes `max(|dx|, |dy|) + 1` samples, each floored to integer pixel
/// coordinates. Consecutive samples are 8-connected. A zero-length line
/// yields its single point.
///
/// Sample `i` is computed as `x0 + dx * i / steps` instead of by repeated
/// addition, so the last sample is always exactly (x1, y1).
#[derive(Debug, Clone)]
pub struct LineSteps {
    x0: i64,
    y0: i64,
    dx: i64,
    dy: i64,
    steps: i64,
    i: i64,
}

impl LineSteps {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = x1 as i64 - x0 as i64;
        let dy = y1 as i64 - y0 as i64;
        Self {
            x0: x0 as i64,
            y0: y0 as i64,
            dx,
            dy,
            steps: dx.abs().max(dy.abs()),
            i: 0,
        }
    }
}

impl Iterator for LineSteps {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.i > self.steps {
            return None;
        }

        // Single point
        if self.steps == 0 {
            self.i += 1;
            return Some((self.x0 as i32, self.y0 as i32));
        }

        let t = self.i as f64 / self.steps as f64;
        let x = (self.x0 as f64 + self.dx as f64 * t).floor();
        let y = (self.y0 as f64 + self.dy as f64 * t).floor();
        self.i += 1;

        Some((x as i32, y as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1 - self.i).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineSteps {}

/// Per-row horizontal extent collected while walking triangle edges
#[derive(Debug, Clone, Copy)]
struct Cell {
    min_x: i32,
    max_x: i32,
}

impl Cell {
    const EMPTY: Cell = Cell { min_x: i32::MAX, max_x: i32::MIN };

    fn include(&mut self, x: i32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
    }
}

/// Walk one edge with the line stepper and widen each touched row's extent
fn scan_edge(x0: i32, y0: i32, x1: i32, y1: i32, table: &mut [Cell]) {
    for (x, y) in LineSteps::new(x0, y0, x1, y1) {
        if y >= 0 && (y as usize) < table.len() {
            table[y as usize].include(x);
        }
    }
}

impl Canvas {
    /// Draw a 1-pixel line using DDA stepping
    pub fn draw_line_dda(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        for (x, y) in LineSteps::new(x0, y0, x1, y1) {
            self.write_clipped(x, y, color);
        }
    }

    /// Draw a rectangle with `style.border_width` concentric border rings
    ///
    /// Negative `w`/`h` extend left/up from (x, y). The interior is filled
    /// first, then the border is painted on top.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, style: &ShapeStyle) {
        let (mut x, mut y, mut w, mut h) = (x as i64, y as i64, w as i64, h as i64);
        if w < 0 {
            x += w + 1;
            w = -w;
        }
        if h < 0 {
            y += h + 1;
            h = -h;
        }
        self.fill_rect_rings(x, y, w, h, style);
    }

    /// Rectangle spanning two drag corners: from the smaller corner, `|x1 - x0|`
    /// wide and `|y1 - y0|` tall
    pub fn draw_rect_between(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: &ShapeStyle) {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        self.fill_rect_rings(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs(), style);
    }

    /// Normalized rectangle body; i64 so off-canvas extremes cannot overflow
    fn fill_rect_rings(&mut self, x: i64, y: i64, w: i64, h: i64, style: &ShapeStyle) {
        let (cw, ch) = (self.width() as i64, self.height() as i64);

        if let Some(fill) = style.fill {
            for j in y.max(0)..(y + h).min(ch) {
                self.hline(x, x + w, j, fill);
            }
        }

        // Rings past the middle draw nothing
        let rings = (style.border_width.max(1) as i64).min((w.max(h) + 1) / 2);
        let color = style.border_color;

        // Each side only visits the rings whose row/column lands on the canvas
        for bw in (-y).max(0)..rings.min(ch - y) {
            self.hline(x + bw, x + w - bw, y + bw, color);
        }
        for bw in (y + h - ch).max(0)..rings.min(y + h) {
            self.hline(x + bw, x + w - bw, y + h - 1 - bw, color);
        }
        for bw in (-x).max(0)..rings.min(cw - x) {
            self.vline(x + bw, y + bw, y + h - bw, color);
        }
        for bw in (x + w - cw).max(0)..rings.min(x + w) {
            self.vline(x + w - 1 - bw, y + bw, y + h - bw, color);
        }
    }

    /// Pixels [x0, x1) of row y, clipped
    fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Color) {
        if y < 0 || y >= self.height() as i64 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width() as i64);
        for x in x0..x1 {
            self.set_pixel(x as usize, y as usize, color);
        }
    }

    /// Pixels [y0, y1) of column x, clipped
    fn vline(&mut self, x: i64, y0: i64, y1: i64, color: Color) {
        if x < 0 || x >= self.width() as i64 {
            return;
        }
        let y0 = y0.max(0);
        let y1 = y1.min(self.height() as i64);
        for y in y0..y1 {
            self.set_pixel(x as usize, y as usize, color);
        }
    }

    /// Draw a triangle, filled through a per-row min/max edge table
    ///
    /// Vertices are truncated to integer pixels. The table is built by walking
    /// the three edges with `LineSteps`, the same stepper the border uses, so
    /// fill and outline meet without seams. Any winding works. The border is
    /// always drawn in `style.border_color`; `style.border_width` is ignored.
    pub fn draw_triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, style: &ShapeStyle) {
        let (x0, y0) = p0.to_pixel();
        let (x1, y1) = p1.to_pixel();
        let (x2, y2) = p2.to_pixel();

        if let Some(fill) = style.fill {
            let mut table = vec![Cell::EMPTY; self.height()];
            scan_edge(x0, y0, x1, y1, &mut table);
            scan_edge(x1, y1, x2, y2, &mut table);
            scan_edge(x2, y2, x0, y0, &mut table);

            for (y, cell) in table.iter().enumerate() {
                // Untouched rows keep min > max and are skipped
                self.hline(cell.min_x as i64, cell.max_x as i64 + 1, y as i64, fill);
            }
        }

        let color = style.border_color;
        self.draw_line_dda(x0, y0, x1, y1, color);
        self.draw_line_dda(x1, y1, x2, y2, color);
        self.draw_line_dda(x2, y2, x0, y0, color);
    }

    /// Copy every pixel of `image` with its top-left corner at (x, y)
    pub fn draw_image(&mut self, image: &Canvas, x: i32, y: i32) {
        let (width, height) = (self.width() as i64, self.height() as i64);
        for iy in 0..image.height() {
            let dy = y as i64 + iy as i64;
            if dy < 0 || dy >= height {
                continue;
            }
            for ix in 0..image.width() {
                let dx = x as i64 + ix as i64;
                if dx >= 0 && dx < width {
                    self.set_pixel(dx as usize, dy as usize, image.get_pixel(ix, iy));
                }
            }
        }
    }
}
