//! Compiled regex patterns and CSS selectors for segmentation and cleaning.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Whitespace Normalization Patterns
// =============================================================================

/// Matches runs of one or more line breaks, bare or carriage-return-prefixed.
pub static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r?\n)+").expect("LINE_BREAKS regex"));

/// Matches runs of one or more horizontal whitespace characters (space/tab).
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("HORIZONTAL_WHITESPACE regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Selector for primary region nodes: elements carrying the component-name
/// marker for section or interactive-demo units.
pub const SECTION_MARKER_SELECTOR: &str =
    r#"[data-component-name="Section"], [data-component-name="InteractiveDemo"]"#;

/// Selector for the Open Graph preview image meta tag.
pub const OG_IMAGE_SELECTOR: &str = r#"meta[property="og:image"]"#;

/// Selector for the Twitter-card preview image meta tag.
pub const TWITTER_IMAGE_SELECTOR: &str = r#"meta[name="twitter:image"]"#;

/// Selector for the first same-page fragment anchor within a region.
pub const FRAGMENT_ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Tags whose subtrees carry no indexable text content.
pub const NON_CONTENT_TAGS: &[&str] = &["script", "style", "svg", "path"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_breaks_matches_mixed_sequences() {
        assert!(LINE_BREAKS.is_match("a\nb"));
        assert!(LINE_BREAKS.is_match("a\r\n\r\nb"));
        assert!(!LINE_BREAKS.is_match("a b"));
    }

    #[test]
    fn horizontal_whitespace_excludes_line_breaks() {
        let result = HORIZONTAL_WHITESPACE.replace_all("a \t b\nc", " ");
        assert_eq!(result, "a b\nc");
    }
}
