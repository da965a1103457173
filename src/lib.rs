//! `fix-images` is a library and command-line tool that swaps placeholder
//! image URLs in a source file for numbered `picsum.photos` URLs.
//!
//! Every single-quoted `'https://via.placeholder.com/...'` literal is replaced,
//! left to right, with `'https://picsum.photos/300/300?random=N'`, where `N`
//! starts at 1. The file is then written back in place.
//!
//! A run is linear:
//! 1.  **Load**: read the target file and decode it as UTF-8.
//! 2.  **Rewrite**: replace the placeholder literals in memory.
//! 3.  **Store**: overwrite the file (skipped for dry runs).
//!
//! # Example: Library Usage
//!
//! ```
//! use fix_images::{run, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! let shop = temp_dir.path().join("Shop.js");
//! fs::write(&shop, "img: 'https://via.placeholder.com/300x300?text=Mug',").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .target_path(shop.to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let report = run(&config).unwrap();
//! assert_eq!(report.replacements, 1);
//! assert_eq!(
//!     fs::read_to_string(&shop).unwrap(),
//!     "img: 'https://picsum.photos/300/300?random=1',"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod output;
pub mod prelude;
pub mod rewrite;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{Rewrite, RewriteReport};
pub use errors::AppError;

use anyhow::Result;
use rewrite::file_io::{read_source, write_source};
use rewrite::rewrite_placeholders;

/// Rewrites the placeholder URLs in the file named by `config`.
///
/// The file is read in full, rewritten in memory, and written back over the
/// original, even when no placeholder URLs were found. Nothing is written
/// when `config.dry_run` is set.
///
/// # Errors
/// Returns `AppError::IoError` if the file cannot be read or written, and
/// `AppError::EncodingError` if it is not valid UTF-8. A missing file is never
/// created.
pub fn run(config: &Config) -> Result<RewriteReport> {
    let path = config.target_path.as_path();
    log::info!("Rewriting placeholder image URLs in '{}'", path.display());

    let source = read_source(path)?;
    let rewrite = rewrite_placeholders(&source);

    if config.dry_run {
        log::info!("Dry run: leaving '{}' unchanged", path.display());
    } else {
        write_source(path, &rewrite.content)?;
        log::debug!("Wrote {} bytes to '{}'", rewrite.content.len(), path.display());
    }

    Ok(RewriteReport {
        path: config.target_path.clone(),
        replacements: rewrite.replacements,
        dry_run: config.dry_run,
    })
}
