//! Sketchpad: toolbar-style raster paint tool
//!
//! - CPU canvas with DDA lines, bordered rectangles and scanline triangles
//! - PNG and uncompressed TGA load/save
//! - Working/snapshot canvas pair for preview-then-commit shape tools
//! - RON config and replayable RON sketch scripts

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod raster;
pub mod paint;
pub mod config;
pub mod ron_file;
pub mod logging;
