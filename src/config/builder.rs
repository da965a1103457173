// src/config/builder.rs

use super::Config;
use crate::cli::Cli;
use crate::constants::DEFAULT_TARGET_PATH;
use crate::errors::AppError;
use anyhow::Result;
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically.
///
/// # Examples
///
/// ```
/// use fix_images::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .target_path("web/src/Gallery.js")
///     .dry_run(true)
///     .build()
///     .unwrap();
///
/// assert!(config.dry_run);
/// assert_eq!(config.target_path.to_str(), Some("web/src/Gallery.js"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    target_path: Option<String>,
    dry_run: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new builder; unset options fall back to their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            target_path: cli.path,
            dry_run: Some(cli.dry_run),
        }
    }

    /// Sets the file to rewrite. Defaults to [`DEFAULT_TARGET_PATH`].
    pub fn target_path(mut self, path: impl Into<String>) -> Self {
        self.target_path = Some(path.into());
        self
    }

    /// Enables or disables dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Validates the options and produces a `Config`.
    ///
    /// # Errors
    /// Returns `AppError::ConfigError` if the target path is empty.
    pub fn build(self) -> Result<Config> {
        let target_path = self
            .target_path
            .unwrap_or_else(|| DEFAULT_TARGET_PATH.to_string());
        if target_path.is_empty() {
            return Err(AppError::ConfigError("target path must not be empty".to_string()).into());
        }
        log::debug!("Target path resolved to '{}'", target_path);

        Ok(Config {
            target_path: PathBuf::from(target_path),
            dry_run: self.dry_run.unwrap_or(false),
        })
    }
}
