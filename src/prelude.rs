//! The `fix-images` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use fix_images::prelude::*;
//!
//! let rewrite = rewrite_placeholders("src: 'https://via.placeholder.com/40'");
//! assert_eq!(rewrite.content, format!("src: {}", replacement_url(1)));
//! ```

pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{Rewrite, RewriteReport};
pub use crate::errors::AppError;
pub use crate::output::write_report;
pub use crate::rewrite::file_io::{read_source, write_source};
pub use crate::rewrite::{replacement_url, rewrite_placeholders};
pub use crate::run;
