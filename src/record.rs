//! Output record types handed off to the search-ingestion stage.

use serde::{Deserialize, Serialize};

/// One indexable page unit extracted from a document region.
///
/// Field names in the serialized form match the ingestion schema
/// (`content`, `title`, `destinationURL`, `imagePreviewUrl`, `altText`);
/// absent optional fields are omitted entirely rather than written as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Raw inner text of the region node, not whitespace-normalized.
    pub content: String,

    /// Text of the region's first `h1`, else its first `h2`, else absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Raw `href` of the region's first same-page fragment anchor
    /// (`href` starting with `#`), taken verbatim.
    #[serde(rename = "destinationURL", skip_serializing_if = "Option::is_none")]
    pub destination_url: Option<String>,

    /// `src` of the region's first `img`, or the document-level preview
    /// image (og:image / twitter:image) when no local image exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_preview_url: Option<String>,

    /// `alt` of the region's first `img`. Set if and only if
    /// `image_preview_url` came from a region-local image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}
