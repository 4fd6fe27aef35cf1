//! Error types for pagesift.
//!
//! Absence of content is never an error here; the only failure this crate
//! surfaces is a malformed caller-supplied selector.

/// Error type for segmentation and cleaning operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied CSS selector failed to parse.
    #[error("invalid selector: {0}")]
    Selector(String),
}

/// Result type alias for segmentation and cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;
