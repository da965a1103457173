//! Replaces placeholder image URLs with numbered `picsum.photos` URLs.
//!
//! The transformation itself is pure: [`rewrite_placeholders`] takes text and
//! returns the rewritten text plus a count. Reading and writing the target file
//! lives in [`file_io`].

use crate::constants::{
    PLACEHOLDER_PREFIX, REPLACEMENT_HOST, REPLACEMENT_PATH, REPLACEMENT_QUERY_KEY,
};
use crate::core_types::Rewrite;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

pub mod file_io;

/// Single-quoted literal starting with the placeholder prefix, at least one
/// non-quote character, then the closing quote.
static PLACEHOLDER_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("'{}[^']+?'", regex::escape(PLACEHOLDER_PREFIX))).unwrap()
});

/// Builds the quoted replacement literal for the `index`-th match (1-based).
///
/// # Examples
///
/// ```
/// use fix_images::rewrite::replacement_url;
///
/// assert_eq!(replacement_url(7), "'https://picsum.photos/300/300?random=7'");
/// ```
pub fn replacement_url(index: usize) -> String {
    format!(
        "'{}{}?{}={}'",
        REPLACEMENT_HOST, REPLACEMENT_PATH, REPLACEMENT_QUERY_KEY, index
    )
}

/// Rewrites every placeholder URL literal in `content`.
///
/// Matches are taken left to right without overlap; the i-th match becomes
/// `replacement_url(i)`. Everything between matches is copied unchanged.
///
/// # Examples
///
/// ```
/// use fix_images::rewrite::rewrite_placeholders;
///
/// let input = "const a = 'https://via.placeholder.com/300x300'; \
///              const b = 'https://via.placeholder.com/150x150';";
/// let rewrite = rewrite_placeholders(input);
///
/// assert_eq!(rewrite.replacements, 2);
/// assert_eq!(
///     rewrite.content,
///     "const a = 'https://picsum.photos/300/300?random=1'; \
///      const b = 'https://picsum.photos/300/300?random=2';"
/// );
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(bytes = content.len()))]
pub fn rewrite_placeholders(content: &str) -> Rewrite {
    let mut output = String::with_capacity(content.len());
    let mut last_end = 0;
    let mut replacements = 0;

    for (index, m) in PLACEHOLDER_URL_RE.find_iter(content).enumerate() {
        let counter = index + 1;
        output.push_str(&content[last_end..m.start()]);
        output.push_str(&replacement_url(counter));
        last_end = m.end();
        replacements = counter;
    }
    output.push_str(&content[last_end..]);

    debug!("Replaced {} placeholder URL(s)", replacements);
    Rewrite {
        content: output,
        replacements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_url_format() {
        assert_eq!(
            replacement_url(1),
            "'https://picsum.photos/300/300?random=1'"
        );
        assert_eq!(
            replacement_url(42),
            "'https://picsum.photos/300/300?random=42'"
        );
    }

    #[test]
    fn test_two_constants_scenario() {
        let input = "const a = 'https://via.placeholder.com/300x300'; const b = 'https://via.placeholder.com/150x150';";
        let expected = "const a = 'https://picsum.photos/300/300?random=1'; const b = 'https://picsum.photos/300/300?random=2';";
        let rewrite = rewrite_placeholders(input);
        assert_eq!(rewrite.content, expected);
        assert_eq!(rewrite.replacements, 2);
    }

    #[test]
    fn test_no_match_leaves_content_identical() {
        let input = "const a = 'https://example.com/img.png';";
        let rewrite = rewrite_placeholders(input);
        assert_eq!(rewrite.content, input);
        assert_eq!(rewrite.replacements, 0);
        assert!(!rewrite.changed());
    }

    #[test]
    fn test_empty_input() {
        let rewrite = rewrite_placeholders("");
        assert_eq!(rewrite, Rewrite::default());
    }

    #[test]
    fn test_counter_follows_scan_order() {
        let input = "[\n  { image: 'https://via.placeholder.com/1?text=A' },\n  { image: 'https://via.placeholder.com/2?text=B' },\n  { image: 'https://via.placeholder.com/3?text=C' },\n]\n";
        let rewrite = rewrite_placeholders(input);
        assert_eq!(rewrite.replacements, 3);

        let first = rewrite.content.find("random=1'").unwrap();
        let second = rewrite.content.find("random=2'").unwrap();
        let third = rewrite.content.find("random=3'").unwrap();
        assert!(first < second && second < third);
        assert!(!rewrite.content.contains("via.placeholder.com"));
    }

    #[test]
    fn test_unmatched_spans_are_preserved() {
        let input = "héllo 'https://via.placeholder.com/a' wörld\n\t'https://via.placeholder.com/b'!";
        let rewrite = rewrite_placeholders(input);
        let second_url = replacement_url(2);
        let unmatched: Vec<&str> = rewrite
            .content
            .split(&replacement_url(1))
            .flat_map(|part| part.split(second_url.as_str()))
            .collect();
        assert_eq!(unmatched, vec!["héllo ", " wörld\n\t", "!"]);
    }

    #[test]
    fn test_empty_suffix_does_not_match() {
        let input = "x = 'https://via.placeholder.com/';";
        let rewrite = rewrite_placeholders(input);
        assert_eq!(rewrite.content, input);
        assert_eq!(rewrite.replacements, 0);
    }

    #[test]
    fn test_double_quoted_and_unquoted_urls_do_not_match() {
        let input = "a = \"https://via.placeholder.com/300\"; // https://via.placeholder.com/300";
        let rewrite = rewrite_placeholders(input);
        assert_eq!(rewrite.content, input);
        assert_eq!(rewrite.replacements, 0);
    }

    #[test]
    fn test_other_placeholder_hosts_do_not_match() {
        // The '.' in the prefix is literal, not a wildcard.
        let input = "a = 'https://viaxplaceholder.com/300';";
        assert_eq!(rewrite_placeholders(input).replacements, 0);
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        let input = "a = 'https://via.placeholder.com/300'; b = 'https://via.placeholder.com/400';";
        let first = rewrite_placeholders(input);
        let second = rewrite_placeholders(&first.content);
        assert_eq!(second.replacements, 0);
        assert_eq!(second.content, first.content);
    }

    #[test]
    fn test_match_stops_at_first_closing_quote() {
        let input = "f('https://via.placeholder.com/300', 'alt text')";
        let rewrite = rewrite_placeholders(input);
        assert_eq!(
            rewrite.content,
            "f('https://picsum.photos/300/300?random=1', 'alt text')"
        );
    }
}
