//! RON file helpers shared by configs and sketches

use std::fs;
use std::path::Path;
use serde::{de::DeserializeOwned, Serialize};

/// Error type for reading and writing RON files
#[derive(Debug)]
pub enum RonFileError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for RonFileError {
    fn from(e: std::io::Error) -> Self {
        RonFileError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for RonFileError {
    fn from(e: ron::error::SpannedError) -> Self {
        RonFileError::ParseError(e)
    }
}

impl From<ron::Error> for RonFileError {
    fn from(e: ron::Error) -> Self {
        RonFileError::SerializeError(e)
    }
}

impl std::fmt::Display for RonFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RonFileError::IoError(e) => write!(f, "IO error: {}", e),
            RonFileError::ParseError(e) => write!(f, "Parse error: {}", e),
            RonFileError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for RonFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RonFileError::IoError(e) => Some(e),
            RonFileError::ParseError(e) => Some(e),
            RonFileError::SerializeError(e) => Some(e),
        }
    }
}

/// Read and parse a RON file
pub fn read_ron<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, RonFileError> {
    let contents = fs::read_to_string(path)?;
    Ok(ron::from_str(&contents)?)
}

/// Pretty-print `value` into a RON file, nesting up to `depth` levels
pub fn write_ron<T: Serialize, P: AsRef<Path>>(
    value: &T,
    path: P,
    depth: usize,
) -> Result<(), RonFileError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(depth)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(value, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}
