//! Defines the `Config` struct that drives a rewrite run.
//!
//! Settings come from the CLI (via [`ConfigBuilder::from_cli`]) or are set
//! programmatically, and are validated once in [`ConfigBuilder::build`].

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// Validated settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The file whose placeholder URLs are rewritten in place.
    pub target_path: PathBuf,
    /// If `true`, count the replacements but leave the file untouched.
    pub dry_run: bool,
}

impl Config {
    /// Creates a `Config` pointing at `path`, for tests and doc tests.
    #[doc(hidden)]
    pub fn new_for_test(path: impl Into<PathBuf>) -> Self {
        Self {
            target_path: path.into(),
            dry_run: false,
        }
    }
}
