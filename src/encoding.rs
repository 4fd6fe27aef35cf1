//! Character encoding detection and transcoding for crawler-supplied bytes.
//!
//! Rendered pages arrive from the fetch layer as raw bytes. This module
//! sniffs the charset declaration from the document head and converts to
//! UTF-8 before parsing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches any `charset=...` declaration, covering both
/// `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([a-zA-Z0-9._:-]+)"#).expect("CHARSET_DECL regex")
});

/// Only the document head is examined for charset declarations.
const SNIFF_WINDOW: usize = 1024;

/// Detects the character encoding declared in `html`, defaulting to UTF-8
/// when no usable declaration is found.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(head);

    CHARSET_DECL
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcodes `html` to a UTF-8 string using the sniffed encoding.
///
/// Invalid sequences become the Unicode replacement character rather than
/// an error.
#[must_use]
pub fn decode_to_utf8(html: &[u8]) -> String {
    let encoding = sniff_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
