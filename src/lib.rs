//! # pagesift
//!
//! Extracts structured, indexable page records from rendered HTML for
//! downstream search ingestion.
//!
//! A document is partitioned into region nodes (primary component-marked
//! sections, or a caller-supplied fallback selector when none exist), and
//! each region becomes one [`PageRecord`] carrying body text, an inferred
//! title, an optional in-page anchor destination, and an optional preview
//! image with alt text. A standalone cleaning primitive strips non-content
//! markup and normalizes whitespace for any selector-chosen region.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagesift::extract_pages_from_html;
//!
//! let html = r##"<html><body>
//! <main><h1>Guide</h1><a href="#setup">setup</a><p>Welcome.</p></main>
//! </body></html>"##;
//!
//! let pages = extract_pages_from_html(html, "main")?;
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].title.as_deref(), Some("Guide"));
//! assert_eq!(pages[0].destination_url.as_deref(), Some("#setup"));
//! # Ok::<(), pagesift::Error>(())
//! ```
//!
//! Segmentation returns raw inner text; use [`clean_region`] or
//! [`normalize_whitespace`] when normalized text is wanted. Field
//! derivation is pluggable via [`FieldPolicy`] for callers with custom
//! record schemas.

mod error;
mod record;
mod segmenter;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Text cleaning primitives (whitespace normalization, node removal).
pub mod normalize;

/// Compiled regex patterns and CSS selectors.
pub mod patterns;

// Public API - re-exports
pub use dom_query::{Document, Selection};
pub use error::{Error, Result};
pub use normalize::{clean_region, normalize_whitespace, remove_nodes_of_type};
pub use record::PageRecord;
pub use segmenter::{DefaultFieldPolicy, FieldPolicy, Segmenter};

/// Extracts one record per region node using the standard field rules.
///
/// Primary component-marked regions are used when present; otherwise
/// `fallback_selector` chooses the regions. Returns an empty vector when
/// neither query matches anything.
pub fn extract_pages(doc: &Document, fallback_selector: &str) -> Result<Vec<PageRecord>> {
    Segmenter::new().extract_pages(doc, fallback_selector)
}

/// Parses `html` and extracts page records from it.
///
/// Convenience over [`extract_pages`] for callers holding the document
/// source rather than a parsed [`Document`].
pub fn extract_pages_from_html(html: &str, fallback_selector: &str) -> Result<Vec<PageRecord>> {
    extract_pages(&Document::from(html), fallback_selector)
}

/// Extracts page records from raw HTML bytes with automatic encoding
/// detection.
///
/// The charset is sniffed from meta declarations in the document head and
/// the input transcoded to UTF-8 before parsing; undeclared input is
/// treated as UTF-8.
pub fn extract_pages_bytes(html: &[u8], fallback_selector: &str) -> Result<Vec<PageRecord>> {
    let html = encoding::decode_to_utf8(html);
    extract_pages_from_html(&html, fallback_selector)
}
