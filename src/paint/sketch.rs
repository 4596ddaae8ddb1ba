//! Sketch scripts: recorded pointer and toolbar input, replayable on a session
//!
//! Uses RON for human-readable sketch files.

use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::raster::{ImageError, Vec2};
use crate::ron_file::{read_ron, write_ron, RonFileError};
use super::state::{Action, PaintSession};

/// One recorded input step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SketchStep {
    Action(Action),
    Press(Vec2),
    Drag(Vec2),
    Release(Vec2),
    ToggleFill,
    /// Relative border width change
    BorderWidth(i32),
    Cancel,
}

/// A sequence of input steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    pub steps: Vec<SketchStep>,
}

/// Error type for sketch loading
pub type SketchError = RonFileError;

/// Load a sketch from a RON file
pub fn load_sketch<P: AsRef<Path>>(path: P) -> Result<Sketch, SketchError> {
    read_ron(path)
}

/// Load a sketch from a RON string
pub fn load_sketch_from_str(s: &str) -> Result<Sketch, SketchError> {
    Ok(ron::from_str(s)?)
}

/// Save a sketch to a RON file
pub fn save_sketch<P: AsRef<Path>>(sketch: &Sketch, path: P) -> Result<(), SketchError> {
    write_ron(sketch, path, 3)
}

impl PaintSession {
    /// Feed a single step into the session
    pub fn step(&mut self, step: &SketchStep) -> Result<(), ImageError> {
        match step {
            SketchStep::Action(action) => self.apply(action)?,
            SketchStep::Press(pos) => self.press(*pos),
            SketchStep::Drag(pos) => self.drag(*pos),
            SketchStep::Release(pos) => self.release(*pos),
            SketchStep::ToggleFill => self.toggle_fill(),
            SketchStep::BorderWidth(delta) => self.adjust_border_width(*delta),
            SketchStep::Cancel => self.cancel(),
        }
        Ok(())
    }

    /// Replay every step, stopping at the first load/save failure
    pub fn replay(&mut self, sketch: &Sketch) -> Result<(), ImageError> {
        for (i, step) in sketch.steps.iter().enumerate() {
            if let Err(e) = self.step(step) {
                log::warn!("sketch step {} failed: {}", i, e);
                return Err(e);
            }
        }
        log::debug!("replayed {} sketch steps", sketch.steps.len());
        Ok(())
    }
}
