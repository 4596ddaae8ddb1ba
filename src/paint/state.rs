//! Paint session state
//!
//! Two canvases: `working` is what the user sees, `snapshot` is the last
//! committed state. Preview tools redraw from the snapshot on every drag and
//! commit on release; cancelling restores the snapshot wholesale.

use std::path::PathBuf;
use serde::{Serialize, Deserialize};
use crate::config::PaintConfig;
use crate::raster::{Canvas, Color, ImageError, ShapeStyle, Vec2};

/// The available drawing tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Pencil = 0,
    Eraser = 1,
    Line = 2,
    Rect = 3,
    Triangle = 4,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Pencil,
        Tool::Eraser,
        Tool::Line,
        Tool::Rect,
        Tool::Triangle,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rect => "Rectangle",
            Tool::Triangle => "Triangle",
        }
    }

    pub fn from_index(i: usize) -> Option<Tool> {
        Tool::ALL.get(i).copied()
    }

    /// Tools that draw continuously while dragging
    fn is_freehand(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }
}

/// Toolbar actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Clear,
    /// Load a PNG (None = configured default)
    Load(Option<PathBuf>),
    /// Save a TGA (None = configured default)
    Save(Option<PathBuf>),
    SelectTool(Tool),
    SelectColor(Color),
}

/// An in-progress pointer drag
#[derive(Debug, Clone, Copy)]
struct Drag {
    start: Vec2,
    /// Previous freehand position (None until the first move)
    last: Option<Vec2>,
}

/// Paint session: tool state plus the working/snapshot canvas pair
pub struct PaintSession {
    working: Canvas,
    snapshot: Canvas,

    pub tool: Tool,
    pub color: Color,
    pub filled: bool,
    border_width: i32,

    drag: Option<Drag>,
    /// Vertices collected so far for the triangle tool
    triangle_points: Vec<Vec2>,

    config: PaintConfig,
}

impl PaintSession {
    pub fn new(config: PaintConfig) -> Self {
        let working = Canvas::new(config.width, config.height);
        let snapshot = working.clone();
        let border_width = config
            .border_width
            .clamp(config.min_border_width, config.max_border_width.max(config.min_border_width));

        Self {
            working,
            snapshot,
            tool: Tool::Pencil,
            color: config.color,
            filled: config.filled,
            border_width,
            drag: None,
            triangle_points: Vec::with_capacity(3),
            config,
        }
    }

    /// The canvas as currently displayed (including any preview)
    pub fn canvas(&self) -> &Canvas {
        &self.working
    }

    /// The last committed canvas
    pub fn snapshot(&self) -> &Canvas {
        &self.snapshot
    }

    pub fn border_width(&self) -> i32 {
        self.border_width
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn pending_triangle_points(&self) -> &[Vec2] {
        &self.triangle_points
    }

    /// Resize both canvases (window resize), keeping the top-left content
    pub fn resize(&mut self, width: usize, height: usize) {
        self.working.resize(width, height);
        self.snapshot.resize(width, height);
    }

    pub fn toggle_fill(&mut self) {
        self.filled = !self.filled;
        log::debug!("fill {}", if self.filled { "on" } else { "off" });
    }

    /// Grow or shrink the rectangle border, clamped to the configured range
    pub fn adjust_border_width(&mut self, delta: i32) {
        let min = self.config.min_border_width;
        let max = self.config.max_border_width.max(min);
        self.border_width = self.border_width.saturating_add(delta).clamp(min, max);
        log::debug!("border width {}", self.border_width);
    }

    /// Handle a toolbar action
    pub fn apply(&mut self, action: &Action) -> Result<(), ImageError> {
        match action {
            Action::SelectTool(tool) => {
                self.tool = *tool;
                self.triangle_points.clear();
                log::debug!("tool: {}", tool.label());
            }
            Action::SelectColor(color) => {
                self.color = *color;
                log::debug!("color: {:?}", color);
            }
            Action::Clear => {
                self.working.fill(Color::BLACK);
                self.commit();
            }
            Action::Load(path) => {
                let path = path.as_ref().unwrap_or(&self.config.load_path);
                self.working.load_png(path, false)?;
                self.commit();
            }
            Action::Save(path) => {
                let path = path.as_ref().unwrap_or(&self.config.save_path);
                self.snapshot.save_tga(path)?;
            }
        }
        Ok(())
    }

    /// Pointer pressed at `pos`: start a drag
    pub fn press(&mut self, pos: Vec2) {
        self.drag = Some(Drag { start: pos, last: None });
        self.snapshot.clone_from(&self.working);
    }

    /// Pointer moved to `pos` while pressed
    pub fn drag(&mut self, pos: Vec2) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        if self.tool.is_freehand() {
            let color = if self.tool == Tool::Eraser { Color::BLACK } else { self.color };

            // First move just sets the stroke start
            let Some(last) = drag.last.replace(pos) else {
                return;
            };

            let (x0, y0) = last.to_pixel();
            let (x1, y1) = pos.to_pixel();
            self.working.draw_line_dda(x0, y0, x1, y1, color);
            self.snapshot.clone_from(&self.working);
            return;
        }

        let start = drag.start;
        match self.tool {
            Tool::Line | Tool::Rect => {
                self.working.clone_from(&self.snapshot);
                self.draw_shape(start, pos);
            }
            _ => {}
        }
    }

    /// Pointer released at `pos`: finish the current action
    pub fn release(&mut self, pos: Vec2) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        match self.tool {
            Tool::Line | Tool::Rect => {
                self.working.clone_from(&self.snapshot);
                self.draw_shape(drag.start, pos);
                self.commit();
            }
            Tool::Triangle => {
                self.triangle_points.push(pos);
                log::trace!("triangle vertex {} at {:?}", self.triangle_points.len(), pos);

                if let [p0, p1, p2] = self.triangle_points[..] {
                    // Filled triangles get a white outline so the shape stays visible
                    let border = if self.filled { Color::WHITE } else { self.color };
                    let mut style = ShapeStyle::outline(border, 1);
                    if self.filled {
                        style = style.filled(self.color);
                    }
                    self.working.draw_triangle(p0, p1, p2, &style);
                    self.triangle_points.clear();
                    self.commit();
                }
            }
            Tool::Pencil | Tool::Eraser => self.commit(),
        }
    }

    /// Drop any preview and pending input, back to the last commit
    pub fn cancel(&mut self) {
        self.working.clone_from(&self.snapshot);
        self.triangle_points.clear();
        self.drag = None;
    }

    fn commit(&mut self) {
        self.snapshot.clone_from(&self.working);
    }

    /// Line or rectangle between two drag points onto the working canvas
    fn draw_shape(&mut self, start: Vec2, end: Vec2) {
        let (x0, y0) = start.to_pixel();
        let (x1, y1) = end.to_pixel();

        match self.tool {
            Tool::Line => self.working.draw_line_dda(x0, y0, x1, y1, self.color),
            Tool::Rect => {
                let mut style = ShapeStyle::outline(self.color, self.border_width);
                if self.filled {
                    style = style.filled(self.color);
                }
                self.working.draw_rect_between(x0, y0, x1, y1, &style);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(width: usize, height: usize) -> PaintSession {
        PaintSession::new(PaintConfig {
            width,
            height,
            ..Default::default()
        })
    }

    fn count(canvas: &Canvas, color: Color) -> usize {
        canvas.pixels().iter().filter(|&&c| c == color).count()
    }

    #[test]
    fn test_tool_lookup() {
        assert_eq!(Tool::from_index(3), Some(Tool::Rect));
        assert_eq!(Tool::from_index(5), None);
        for (i, tool) in Tool::ALL.iter().enumerate() {
            assert_eq!(*tool as usize, i);
        }
        assert_eq!(Tool::Rect.label(), "Rectangle");
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session(16, 8);
        assert_eq!((s.canvas().width(), s.canvas().height()), (16, 8));
        assert_eq!(count(s.canvas(), Color::BLACK), 16 * 8);
        assert_eq!(s.canvas(), s.snapshot());
        assert_eq!(s.tool, Tool::Pencil);
        assert_eq!(s.color, Color::WHITE);
        assert_eq!(s.border_width(), 2);
    }

    #[test]
    fn test_pencil_first_move_only_sets_start() {
        let mut s = session(20, 20);
        s.press(Vec2::new(2.0, 2.0));
        s.drag(Vec2::new(5.0, 2.0));
        assert_eq!(count(s.canvas(), Color::WHITE), 0);

        s.drag(Vec2::new(9.0, 2.0));
        assert_eq!(count(s.canvas(), Color::WHITE), 5);
        assert_eq!(s.canvas().get_pixel(5, 2), Color::WHITE);
        assert_eq!(s.canvas().get_pixel(9, 2), Color::WHITE);
        // Freehand strokes commit as they go
        assert_eq!(s.canvas(), s.snapshot());

        s.release(Vec2::new(9.0, 2.0));
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_eraser_paints_black() {
        let mut s = session(10, 10);
        s.apply(&Action::SelectColor(Color::RED)).unwrap();
        s.tool = Tool::Rect;
        s.filled = true;
        s.press(Vec2::new(0.0, 0.0));
        s.release(Vec2::new(10.0, 10.0));
        assert_eq!(count(s.canvas(), Color::RED), 100);

        s.apply(&Action::SelectTool(Tool::Eraser)).unwrap();
        s.press(Vec2::new(0.0, 4.0));
        s.drag(Vec2::new(0.0, 4.0));
        s.drag(Vec2::new(9.0, 4.0));
        s.release(Vec2::new(9.0, 4.0));
        assert_eq!(count(s.canvas(), Color::BLACK), 10);
    }

    #[test]
    fn test_line_preview_then_commit() {
        let mut s = session(20, 20);
        s.apply(&Action::SelectTool(Tool::Line)).unwrap();
        s.press(Vec2::new(1.0, 1.0));

        s.drag(Vec2::new(15.0, 1.0));
        assert_eq!(count(s.canvas(), Color::WHITE), 15);
        assert_eq!(count(s.snapshot(), Color::WHITE), 0);

        // Previews do not accumulate
        s.drag(Vec2::new(1.0, 10.0));
        assert_eq!(count(s.canvas(), Color::WHITE), 10);
        assert_eq!(s.canvas().get_pixel(15, 1), Color::BLACK);

        s.release(Vec2::new(5.0, 1.0));
        assert_eq!(count(s.canvas(), Color::WHITE), 5);
        assert_eq!(s.canvas(), s.snapshot());
    }

    #[test]
    fn test_rect_from_reversed_drag() {
        let mut s = session(50, 50);
        s.apply(&Action::SelectTool(Tool::Rect)).unwrap();
        s.press(Vec2::new(30.0, 25.0));
        s.release(Vec2::new(10.0, 10.0));

        let mut expected = Canvas::new(50, 50);
        expected.draw_rect(10, 10, 20, 15, &ShapeStyle::outline(Color::WHITE, 2));
        assert_eq!(s.canvas(), &expected);
    }

    #[test]
    fn test_rect_drag_beyond_i32_range() {
        let mut s = session(12, 12);
        s.tool = Tool::Rect;
        s.filled = true;
        s.press(Vec2::new(-3e9, 5.0));
        s.drag(Vec2::new(3e9, 7.0));
        s.release(Vec2::new(3e9, 8.0));

        // Corners saturate to i32::MIN/i32::MAX; rows 5..=7 cover the full width
        assert_eq!(count(s.canvas(), Color::WHITE), 12 * 3);
        for y in 5..8 {
            for x in 0..12 {
                assert_eq!(s.canvas().get_pixel(x, y), Color::WHITE);
            }
        }
        assert_eq!(s.canvas(), s.snapshot());
    }

    #[test]
    fn test_cancel_restores_snapshot() {
        let mut s = session(20, 20);
        s.apply(&Action::SelectTool(Tool::Rect)).unwrap();
        s.press(Vec2::new(2.0, 2.0));
        s.drag(Vec2::new(12.0, 12.0));
        assert!(count(s.canvas(), Color::WHITE) > 0);

        s.cancel();
        assert_eq!(count(s.canvas(), Color::WHITE), 0);
        assert!(!s.is_dragging());
        // Release after cancel is ignored
        s.release(Vec2::new(12.0, 12.0));
        assert_eq!(count(s.canvas(), Color::WHITE), 0);
    }

    #[test]
    fn test_triangle_needs_three_clicks() {
        let mut s = session(40, 40);
        s.apply(&Action::SelectTool(Tool::Triangle)).unwrap();
        s.apply(&Action::SelectColor(Color::BLUE)).unwrap();
        s.toggle_fill();

        let points = [Vec2::new(5.0, 5.0), Vec2::new(35.0, 8.0), Vec2::new(12.0, 34.0)];
        for (i, p) in points.iter().enumerate() {
            s.press(*p);
            s.release(*p);
            if i < 2 {
                assert_eq!(s.pending_triangle_points().len(), i + 1);
                assert_eq!(count(s.canvas(), Color::BLACK), 40 * 40);
            }
        }

        assert!(s.pending_triangle_points().is_empty());
        assert_eq!(s.canvas().get_pixel(5, 5), Color::WHITE);
        assert_eq!(s.canvas().get_pixel(17, 15), Color::BLUE);
        assert_eq!(s.canvas(), s.snapshot());
    }

    #[test]
    fn test_triangle_outline_uses_drawing_color() {
        let mut s = session(40, 40);
        s.apply(&Action::SelectTool(Tool::Triangle)).unwrap();
        s.apply(&Action::SelectColor(Color::YELLOW)).unwrap();
        for p in [Vec2::new(5.0, 5.0), Vec2::new(35.0, 8.0), Vec2::new(12.0, 34.0)] {
            s.press(p);
            s.release(p);
        }
        assert_eq!(s.canvas().get_pixel(5, 5), Color::YELLOW);
        assert_eq!(s.canvas().get_pixel(17, 15), Color::BLACK);
        assert_eq!(count(s.canvas(), Color::WHITE), 0);
    }

    #[test]
    fn test_tool_change_drops_triangle_points() {
        let mut s = session(10, 10);
        s.apply(&Action::SelectTool(Tool::Triangle)).unwrap();
        s.press(Vec2::new(1.0, 1.0));
        s.release(Vec2::new(1.0, 1.0));
        assert_eq!(s.pending_triangle_points().len(), 1);
        s.apply(&Action::SelectTool(Tool::Triangle)).unwrap();
        assert!(s.pending_triangle_points().is_empty());
    }

    #[test]
    fn test_border_width_clamped() {
        let mut s = session(4, 4);
        s.adjust_border_width(100);
        assert_eq!(s.border_width(), 64);
        s.adjust_border_width(-1000);
        assert_eq!(s.border_width(), 1);
        s.adjust_border_width(i32::MAX);
        assert_eq!(s.border_width(), 64);
    }

    #[test]
    fn test_clear_commits_black() {
        let mut s = session(8, 8);
        s.apply(&Action::SelectTool(Tool::Line)).unwrap();
        s.press(Vec2::new(0.0, 0.0));
        s.release(Vec2::new(7.0, 7.0));
        s.apply(&Action::Clear).unwrap();
        assert_eq!(count(s.canvas(), Color::BLACK), 64);
        assert_eq!(s.canvas(), s.snapshot());
    }

    #[test]
    fn test_save_and_load_actions() {
        let dir = std::env::temp_dir();
        let tga = dir.join(format!("sketchpad_session_{}.tga", std::process::id()));
        let png = dir.join(format!("sketchpad_session_{}.png", std::process::id()));

        let mut s = session(12, 6);
        s.apply(&Action::SelectTool(Tool::Line)).unwrap();
        s.press(Vec2::new(0.0, 0.0));
        s.release(Vec2::new(11.0, 5.0));
        s.apply(&Action::Save(Some(tga.clone()))).unwrap();

        let mut reloaded = Canvas::new(1, 1);
        reloaded.load_tga(&tga, false).unwrap();
        assert_eq!(&reloaded, s.canvas());

        let mut image = Canvas::new(3, 2);
        image.fill(Color::CYAN);
        image.save_png(&png).unwrap();
        s.apply(&Action::Load(Some(png.clone()))).unwrap();
        assert_eq!(s.canvas(), &image);
        assert_eq!(s.snapshot(), &image);

        std::fs::remove_file(&tga).ok();
        std::fs::remove_file(&png).ok();
    }

    #[test]
    fn test_failed_load_keeps_both_canvases() {
        let mut s = session(6, 6);
        s.apply(&Action::SelectTool(Tool::Line)).unwrap();
        s.press(Vec2::new(0.0, 0.0));
        s.release(Vec2::new(5.0, 0.0));
        let before = s.canvas().clone();

        let missing = std::env::temp_dir().join("sketchpad_definitely_missing.png");
        assert!(s.apply(&Action::Load(Some(missing))).is_err());
        assert_eq!(s.canvas(), &before);
        assert_eq!(s.snapshot(), &before);
    }

    #[test]
    fn test_resize_both_canvases() {
        let mut s = session(10, 10);
        s.apply(&Action::SelectTool(Tool::Line)).unwrap();
        s.press(Vec2::new(0.0, 0.0));
        s.release(Vec2::new(3.0, 0.0));
        s.resize(20, 5);
        assert_eq!(s.canvas().width(), 20);
        assert_eq!(s.snapshot().height(), 5);
        assert_eq!(s.canvas().get_pixel(3, 0), Color::WHITE);
    }
}
