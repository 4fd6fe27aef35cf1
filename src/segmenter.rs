//! Document segmentation: partitions a parsed document into region nodes
//! and derives one [`PageRecord`] per region.
//!
//! Regions come from a primary structural query (the component-name marker
//! for section and interactive-demo units). When that query matches nothing,
//! the caller-supplied fallback selector is used instead; the two sets are
//! never merged.

use dom_query::{Document, Matcher, Selection};

use crate::error::{Error, Result};
use crate::patterns;
use crate::record::PageRecord;

/// Per-region field derivation, pluggable so callers can customize a single
/// field without reimplementing segmentation.
///
/// The default method bodies implement the standard rules; override only
/// what differs.
pub trait FieldPolicy {
    /// Raw inner text of the region, not whitespace-normalized.
    fn content(&self, region: &Selection) -> String {
        region.text().to_string()
    }

    /// Text of the first descendant `h1`, else the first `h2`, else `None`.
    /// First match in document order wins within each level.
    fn title(&self, region: &Selection) -> Option<String> {
        for level in ["h1", "h2"] {
            let heading = region.select_single(level);
            if !heading.is_empty() {
                return Some(heading.text().to_string());
            }
        }
        None
    }

    /// Raw `href` of the first descendant anchor linking to a same-page
    /// fragment, taken verbatim without resolving the target.
    fn destination(&self, region: &Selection) -> Option<String> {
        let anchor = region.select_single(patterns::FRAGMENT_ANCHOR_SELECTOR);
        anchor.attr("href").map(|href| href.to_string())
    }

    /// `(image_preview_url, alt_text)` for the region.
    ///
    /// A region-local `img` always wins, even with an empty `src`, and sets
    /// both fields (empty string for missing attributes). Otherwise a
    /// non-empty `page_preview` fills the URL with no alt text; otherwise
    /// neither field is set.
    fn image(
        &self,
        region: &Selection,
        page_preview: Option<&str>,
    ) -> (Option<String>, Option<String>) {
        let img = region.select_single("img");
        if !img.is_empty() {
            let src = img.attr("src").map_or_else(String::new, |s| s.to_string());
            let alt = img.attr("alt").map_or_else(String::new, |s| s.to_string());
            return (Some(src), Some(alt));
        }
        match page_preview {
            Some(url) if !url.is_empty() => (Some(url.to_string()), None),
            _ => (None, None),
        }
    }
}

/// The standard field derivation rules, unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFieldPolicy;

impl FieldPolicy for DefaultFieldPolicy {}

/// Splits a document into page units and extracts their fields.
pub struct Segmenter<P: FieldPolicy = DefaultFieldPolicy> {
    primary_selector: String,
    policy: P,
}

impl Segmenter<DefaultFieldPolicy> {
    /// Creates a segmenter with the standard field rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(DefaultFieldPolicy)
    }
}

impl Default for Segmenter<DefaultFieldPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FieldPolicy> Segmenter<P> {
    /// Creates a segmenter with a custom field policy.
    pub fn with_policy(policy: P) -> Self {
        Self {
            primary_selector: patterns::SECTION_MARKER_SELECTOR.to_string(),
            policy,
        }
    }

    /// Replaces the primary region query. The fallback selector passed to
    /// [`Self::extract_pages`] is still consulted only when this query
    /// matches nothing.
    #[must_use]
    pub fn primary_selector(mut self, selector: impl Into<String>) -> Self {
        self.primary_selector = selector.into();
        self
    }

    /// Extracts one [`PageRecord`] per region node, in document order.
    ///
    /// Queries for primary-marked regions first; only when that set is empty
    /// is `fallback_selector` queried instead. A document matching neither
    /// yields an empty vector. `Err` only on a malformed selector.
    pub fn extract_pages(
        &self,
        doc: &Document,
        fallback_selector: &str,
    ) -> Result<Vec<PageRecord>> {
        let primary = Matcher::new(&self.primary_selector)
            .map_err(|_| Error::Selector(self.primary_selector.clone()))?;
        let fallback = Matcher::new(fallback_selector)
            .map_err(|_| Error::Selector(fallback_selector.to_string()))?;

        let page_preview = page_preview_image(doc);

        let mut regions = doc.select_matcher(&primary);
        if regions.is_empty() {
            regions = doc.select_matcher(&fallback);
        }

        let mut records = Vec::with_capacity(regions.nodes().len());
        for node in regions.nodes() {
            let region = Selection::from(*node);
            let (image_preview_url, alt_text) =
                self.policy.image(&region, page_preview.as_deref());
            records.push(PageRecord {
                content: self.policy.content(&region),
                title: self.policy.title(&region),
                destination_url: self.policy.destination(&region),
                image_preview_url,
                alt_text,
            });
        }
        Ok(records)
    }
}

/// Document-level preview image: og:image content, else twitter:image
/// content, else `None`. Used as the last-resort image source for regions
/// without a local image.
fn page_preview_image(doc: &Document) -> Option<String> {
    if let Some(content) = doc.select(patterns::OG_IMAGE_SELECTOR).attr("content") {
        return Some(content.to_string());
    }
    doc.select(patterns::TWITTER_IMAGE_SELECTOR)
        .attr("content")
        .map(|content| content.to_string())
}
