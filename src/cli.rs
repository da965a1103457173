// src/cli.rs

use clap::Parser;

/// Rewrites placeholder image URLs in a source file.
///
/// Every single-quoted 'https://via.placeholder.com/...' literal in the file is
/// replaced, in order of appearance, with 'https://picsum.photos/300/300?random=N'
/// where N counts up from 1. The file is overwritten in place.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to rewrite [default: src/components/Shop.js]
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Count the URLs that would be replaced without modifying the file.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let cli = Cli::parse_from(["fix-images"]);
        assert!(cli.path.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_long_dry_run_flag() {
        let cli = Cli::parse_from(["fix-images", "--dry-run", "Shop.js"]);
        assert_eq!(cli.path.as_deref(), Some("Shop.js"));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["fix-images", "--prefix", "x"]).is_err());
    }
}
