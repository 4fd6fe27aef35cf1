//! Text cleaning primitives: whitespace normalization and non-content
//! node removal.
//!
//! `clean_region` and `remove_nodes_of_type` mutate the document in place.
//! The removed subtrees are gone for good; callers that still need them
//! must clean a separate parse of the input.

use dom_query::{Document, Matcher, Selection};

use crate::error::{Error, Result};
use crate::patterns;

/// Collapses whitespace runs in `text`.
///
/// Every maximal run of line breaks (`\n` or `\r\n`) becomes a single `\n`,
/// then every maximal run of spaces and tabs becomes a single space. The
/// two passes use disjoint character classes, so the order is fixed but the
/// passes never interact. Idempotent.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = patterns::LINE_BREAKS.replace_all(text, "\n");
    patterns::HORIZONTAL_WHITESPACE
        .replace_all(&collapsed, " ")
        .into_owned()
}

/// Removes every element matching any of `tags` from the whole document,
/// subtrees included.
///
/// `Err` on a tag name that does not form a valid selector; nothing is
/// removed in that case.
pub fn remove_nodes_of_type(doc: &Document, tags: &[&str]) -> Result<()> {
    if tags.is_empty() {
        return Ok(());
    }
    let combined = tags.join(", ");
    let matcher = Matcher::new(&combined).map_err(|_| Error::Selector(combined.clone()))?;
    doc.select_matcher(&matcher).remove();
    Ok(())
}

/// Strips non-content nodes (script, style, svg, path) from the *entire*
/// document, then returns the normalized inner text of the first node
/// matching `selector`, or `Ok(None)` when nothing matches.
///
/// The strip is a document-wide side effect, not scoped to the selected
/// region. A malformed selector returns `Err` before any node is removed.
pub fn clean_region(doc: &Document, selector: &str) -> Result<Option<String>> {
    let matcher = Matcher::new(selector).map_err(|_| Error::Selector(selector.to_string()))?;

    remove_nodes_of_type(doc, patterns::NON_CONTENT_TAGS)?;

    let matched = doc.select_matcher(&matcher);
    let Some(node) = matched.nodes().first() else {
        return Ok(None);
    };
    let text = Selection::from(*node).text();
    Ok(Some(normalize_whitespace(&text)))
}
