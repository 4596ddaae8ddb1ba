//! Image file I/O for the canvas
//!
//! PNG goes through the `image` crate; TGA (uncompressed true-color only) is
//! read and written by hand.
//!
//! Canvas memory is top-down. TGA files are bottom-up (descriptor 0), so both
//! the encoder and the decoder reverse row order and a save/load round trip
//! reproduces the canvas exactly.

use std::fs;
use std::path::Path;
use image::GenericImageView;
use super::canvas::Canvas;
use super::types::Color;

/// Fixed prefix of an uncompressed true-color TGA header (image type 2)
const TGA_HEADER: [u8; 12] = [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0];
/// Prefix plus width, height, bit depth and descriptor
const TGA_HEADER_LEN: usize = 18;

/// Error type for image loading and saving
#[derive(Debug)]
pub enum ImageError {
    IoError(std::io::Error),
    /// File exists but holds no bytes
    Empty,
    DecodeError(image::ImageError),
    EncodeError(image::ImageError),
    /// Header is not an uncompressed true-color TGA
    UnsupportedTga,
    UnsupportedBitDepth(u8),
    InvalidDimensions { width: usize, height: usize },
    /// Pixel data ends early
    Truncated { expected: usize, actual: usize },
    /// Dimensions do not fit the 16-bit TGA header fields
    TooLarge { width: usize, height: usize },
}

impl From<std::io::Error> for ImageError {
    fn from(e: std::io::Error) -> Self {
        ImageError::IoError(e)
    }
}

impl From<image::ImageError> for ImageError {
    fn from(e: image::ImageError) -> Self {
        ImageError::DecodeError(e)
    }
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::IoError(e) => write!(f, "IO error: {}", e),
            ImageError::Empty => write!(f, "file is empty"),
            ImageError::DecodeError(e) => write!(f, "Decode error: {}", e),
            ImageError::EncodeError(e) => write!(f, "Encode error: {}", e),
            ImageError::UnsupportedTga => write!(f, "not an uncompressed true-color TGA"),
            ImageError::UnsupportedBitDepth(bpp) => write!(f, "unsupported TGA bit depth {}", bpp),
            ImageError::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions {}x{}", width, height)
            }
            ImageError::Truncated { expected, actual } => {
                write!(f, "truncated data: expected {} bytes, got {}", expected, actual)
            }
            ImageError::TooLarge { width, height } => {
                write!(f, "{}x{} is too large for TGA", width, height)
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::IoError(e) => Some(e),
            ImageError::DecodeError(e) | ImageError::EncodeError(e) => Some(e),
            _ => None,
        }
    }
}

/// Decode PNG bytes into an RGB canvas
///
/// Alpha is dropped by truncation, never blended against anything.
pub fn decode_png(bytes: &[u8]) -> Result<Canvas, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }

    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?;
    let (width, height) = img.dimensions();

    let pixels: Vec<Color> = if img.color().has_alpha() {
        img.to_rgba8().pixels().map(|p| Color::from_rgba(p.0)).collect()
    } else {
        img.to_rgb8().pixels().map(|p| Color::new(p[0], p[1], p[2])).collect()
    };

    Canvas::from_pixels(width as usize, height as usize, pixels).ok_or(
        ImageError::InvalidDimensions {
            width: width as usize,
            height: height as usize,
        },
    )
}

/// Encode the canvas as an 8-bit RGB PNG
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, ImageError> {
    let bytes: Vec<u8> = canvas.pixels().iter().flat_map(|c| c.to_bytes()).collect();
    let img = image::RgbImage::from_raw(canvas.width() as u32, canvas.height() as u32, bytes)
        .ok_or(ImageError::InvalidDimensions {
            width: canvas.width(),
            height: canvas.height(),
        })?;

    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(ImageError::EncodeError)?;
    Ok(out.into_inner())
}

/// Decode an uncompressed 24/32-bit TGA
pub fn decode_tga(bytes: &[u8]) -> Result<Canvas, ImageError> {
    if bytes.len() < TGA_HEADER.len() || bytes[..TGA_HEADER.len()] != TGA_HEADER {
        return Err(ImageError::UnsupportedTga);
    }
    if bytes.len() < TGA_HEADER_LEN {
        return Err(ImageError::Truncated {
            expected: TGA_HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let info = &bytes[TGA_HEADER.len()..TGA_HEADER_LEN];
    let width = u16::from_le_bytes([info[0], info[1]]) as usize;
    let height = u16::from_le_bytes([info[2], info[3]]) as usize;
    let bpp = info[4];

    if width == 0 || height == 0 {
        return Err(ImageError::InvalidDimensions { width, height });
    }
    if bpp != 24 && bpp != 32 {
        return Err(ImageError::UnsupportedBitDepth(bpp));
    }

    let bytes_per_pixel = bpp as usize / 8;
    let row_size = width * bytes_per_pixel;
    let image_size = row_size * height;
    let data = &bytes[TGA_HEADER_LEN..];
    if data.len() < image_size {
        return Err(ImageError::Truncated {
            expected: image_size,
            actual: data.len(),
        });
    }

    let mut canvas = Canvas::new(width, height);
    // File rows run bottom to top
    for (y, row) in data[..image_size].chunks_exact(row_size).enumerate() {
        for (x, px) in row.chunks_exact(bytes_per_pixel).enumerate() {
            canvas.set_pixel(x, height - 1 - y, Color::from_bgr(px[0], px[1], px[2]));
        }
    }

    Ok(canvas)
}

/// Encode the canvas as an uncompressed 24-bit TGA (bottom-left origin)
pub fn encode_tga(canvas: &Canvas) -> Result<Vec<u8>, ImageError> {
    let (width, height) = (canvas.width(), canvas.height());
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidDimensions { width, height });
    }
    if width > u16::MAX as usize || height > u16::MAX as usize {
        return Err(ImageError::TooLarge { width, height });
    }

    let mut out = Vec::with_capacity(TGA_HEADER_LEN + width * height * 3);
    out.extend_from_slice(&TGA_HEADER);
    out.extend_from_slice(&(width as u16).to_le_bytes());
    out.extend_from_slice(&(height as u16).to_le_bytes());
    out.push(24);
    out.push(0);

    for y in (0..height).rev() {
        for x in 0..width {
            out.extend_from_slice(&canvas.get_pixel(x, y).to_bgr());
        }
    }

    Ok(out)
}

fn read_file(path: &Path) -> Result<Vec<u8>, ImageError> {
    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    Ok(bytes)
}

impl Canvas {
    /// Replace this canvas with a PNG file's content
    ///
    /// On failure the canvas is left untouched.
    pub fn load_png<P: AsRef<Path>>(&mut self, path: P, flip_y: bool) -> Result<(), ImageError> {
        let path = path.as_ref();
        let result = read_file(path).and_then(|bytes| decode_png(&bytes));
        self.finish_load(path, result, flip_y)
    }

    /// Replace this canvas with a TGA file's content
    ///
    /// On failure the canvas is left untouched.
    pub fn load_tga<P: AsRef<Path>>(&mut self, path: P, flip_y: bool) -> Result<(), ImageError> {
        let path = path.as_ref();
        let result = read_file(path).and_then(|bytes| decode_tga(&bytes));
        self.finish_load(path, result, flip_y)
    }

    pub fn save_tga<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageError> {
        let path = path.as_ref();
        let result = encode_tga(self).and_then(|bytes| fs::write(path, bytes).map_err(ImageError::from));
        self.finish_save(path, result)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageError> {
        let path = path.as_ref();
        let result = encode_png(self).and_then(|bytes| fs::write(path, bytes).map_err(ImageError::from));
        self.finish_save(path, result)
    }

    fn finish_load(
        &mut self,
        path: &Path,
        result: Result<Canvas, ImageError>,
        flip_y: bool,
    ) -> Result<(), ImageError> {
        match result {
            Ok(mut canvas) => {
                if flip_y {
                    canvas.flip_y();
                }
                log::info!("loaded {} ({}x{})", path.display(), canvas.width(), canvas.height());
                *self = canvas;
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    fn finish_save(&self, path: &Path, result: Result<(), ImageError>) -> Result<(), ImageError> {
        match &result {
            Ok(()) => log::info!("saved {} ({}x{})", path.display(), self.width(), self.height()),
            Err(e) => log::warn!("failed to save {}: {}", path.display(), e),
        }
        result
    }
}
