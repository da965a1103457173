//! Defines the data structures passed between the rewrite stages.
//!
//! `Rewrite` is the in-memory result of the transformation, and
//! `RewriteReport` is what gets reported to the operator once the run is done.

use std::path::PathBuf;

/// The result of rewriting a buffer in memory.
///
/// # Examples
///
/// ```
/// use fix_images::rewrite::rewrite_placeholders;
///
/// let rewrite = rewrite_placeholders("img = 'https://via.placeholder.com/150';");
/// assert_eq!(rewrite.replacements, 1);
/// assert!(rewrite.changed());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten text.
    pub content: String,
    /// How many placeholder URLs were replaced.
    pub replacements: usize,
}

impl Rewrite {
    /// Returns `true` if at least one placeholder URL was replaced.
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    /// The file that was processed.
    pub path: PathBuf,
    /// Number of replacements made (or that would be made, for a dry run).
    pub replacements: usize,
    /// Whether the file was left untouched because of `--dry-run`.
    pub dry_run: bool,
}
