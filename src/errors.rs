//! Defines application-specific error types.
//!
//! This module provides the `AppError` enum, which categorizes the failures a
//! rewrite can run into, offering more context than a bare `std::io::Error`.

use std::path::Path;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Application-specific errors used throughout `fix-images`.
#[derive(Error, Debug)]
pub enum AppError {
    // --- I/O Errors ---
    /// Error occurring while reading or writing the target file.
    #[error("I/O error accessing path '{path}': {source}")]
    IoError {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Decoding Errors ---
    /// The target file's bytes are not valid UTF-8.
    #[error("File '{path}' is not valid UTF-8: {source}")]
    EncodingError {
        /// The path of the undecodable file.
        path: String,
        /// The underlying decode error.
        #[source]
        source: FromUtf8Error,
    },

    // --- Configuration Errors ---
    /// Invalid configuration settings, detected when building a `Config`.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns `true` for failures caused by accessing the file (missing, denied, etc.).
    pub fn is_file_access(&self) -> bool {
        matches!(self, AppError::IoError { .. })
    }
}

/// Helper function to create an `AppError::IoError` with path context.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::IoError {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `AppError::EncodingError` with path context.
pub fn encoding_error_with_path<P: AsRef<Path>>(source: FromUtf8Error, path: P) -> AppError {
    AppError::EncodingError {
        path: path.as_ref().display().to_string(),
        source,
    }
}
