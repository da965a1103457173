//! Renders the operator-facing report line.

use crate::core_types::RewriteReport;
use anyhow::Result;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Writes the single report line for a finished run.
///
/// The file is named by its basename, e.g. `Fixed 12 image URLs in Shop.js`.
pub fn write_report(writer: &mut dyn Write, report: &RewriteReport) -> Result<()> {
    debug!("Writing report: {:?}", report);
    let name = display_name(&report.path);
    if report.dry_run {
        writeln!(
            writer,
            "Dry run: would fix {} image URLs in {}",
            report.replacements, name
        )?;
    } else {
        writeln!(writer, "Fixed {} image URLs in {}", report.replacements, name)?;
    }
    writer.flush()?;
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
