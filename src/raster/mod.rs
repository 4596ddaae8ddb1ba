//! CPU raster canvas
//!
//! Features:
//! - Owned RGB pixel grid with value-copy semantics
//! - Silent clipping for every shape write
//! - DDA lines, bordered rectangles, edge-table filled triangles
//! - Image blits, resize (crop/pad) and nearest-neighbor scale
//! - PNG read/write, uncompressed TGA read/write

mod math;
mod types;
mod canvas;
mod draw;
mod codec;

pub use math::*;
pub use types::*;
pub use canvas::*;
pub use draw::*;
pub use codec::*;
