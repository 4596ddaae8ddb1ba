//! Paint tool configuration
//!
//! Uses RON (Rusty Object Notation) for human-readable config files. Every
//! field has a default, so a config file only needs the fields it changes.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use crate::raster::Color;
use crate::ron_file::{write_ron, RonFileError};

/// Startup settings for a paint session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Canvas size in pixels
    pub width: usize,
    pub height: usize,
    /// Initial rectangle border width
    pub border_width: i32,
    pub min_border_width: i32,
    pub max_border_width: i32,
    /// Initial drawing color
    pub color: Color,
    /// Whether rectangles and triangles start filled
    pub filled: bool,
    /// PNG opened by the Load action when it names no file
    pub load_path: PathBuf,
    /// TGA written by the Save action when it names no file
    pub save_path: PathBuf,
    /// `env_logger` filter; falls back to RUST_LOG
    pub log_filter: Option<String>,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            border_width: 2,
            min_border_width: 1,
            max_border_width: 64,
            color: Color::WHITE,
            filled: false,
            load_path: PathBuf::from("images/fruits.png"),
            save_path: PathBuf::from("images/out.tga"),
            log_filter: None,
        }
    }
}

/// Error type for config loading
pub type ConfigError = RonFileError;

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PaintConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Load a config from a RON string
pub fn load_config_from_str(s: &str) -> Result<PaintConfig, ConfigError> {
    let mut config: PaintConfig = ron::from_str(s)?;

    // Keep the border range usable even if the file swaps the bounds
    if config.min_border_width < 1 {
        config.min_border_width = 1;
    }
    if config.max_border_width < config.min_border_width {
        config.max_border_width = config.min_border_width;
    }
    config.border_width = config
        .border_width
        .clamp(config.min_border_width, config.max_border_width);

    Ok(config)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &PaintConfig, path: P) -> Result<(), ConfigError> {
    write_ron(config, path, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = load_config_from_str("(width: 320, height: 240, filled: true)").unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert!(config.filled);
        assert_eq!(config.border_width, 2);
        assert_eq!(config.color, Color::WHITE);
        assert_eq!(config.save_path, PathBuf::from("images/out.tga"));
    }

    #[test]
    fn test_config_color_and_border_clamp() {
        let config = load_config_from_str(
            "(color: (r: 255, g: 0, b: 0), border_width: 500, min_border_width: 0, max_border_width: 10)",
        )
        .unwrap();
        assert_eq!(config.color, Color::RED);
        assert_eq!(config.min_border_width, 1);
        assert_eq!(config.border_width, 10);
    }

    #[test]
    fn test_bundled_config() {
        let config = load_config_from_str(include_str!("../assets/config.ron")).unwrap();
        assert_eq!((config.width, config.height), (320, 240));
        assert_eq!(config.save_path, PathBuf::from("out.tga"));
    }

    #[test]
    fn test_config_parse_error() {
        assert!(matches!(load_config_from_str("(width: \"wide\")"), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_file_round_trip() {
        let path = std::env::temp_dir().join(format!("sketchpad_config_{}.ron", std::process::id()));
        let config = PaintConfig {
            width: 64,
            log_filter: Some("debug".to_string()),
            ..Default::default()
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
        fs::remove_file(&path).ok();

        assert!(matches!(load_config(&path), Err(ConfigError::IoError(_))));
    }
}
