// src/rewrite/file_io.rs

use crate::errors::{encoding_error_with_path, io_error_with_path};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Reads the entire content of a file into a String.
///
/// The bytes are decoded as UTF-8. A missing or unreadable file yields
/// `AppError::IoError`; undecodable bytes yield `AppError::EncodingError`.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| io_error_with_path(e, path))
        .with_context(|| format!("Failed to read file content: {}", path.display()))?;
    String::from_utf8(bytes)
        .map_err(|e| encoding_error_with_path(e, path))
        .with_context(|| format!("Failed to decode file content: {}", path.display()))
}

/// Overwrites `path` with `content`.
///
/// Not atomic: an interruption mid-write can leave the file truncated.
pub fn write_source(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| io_error_with_path(e, path))
        .with_context(|| format!("Failed to write file content: {}", path.display()))
}
