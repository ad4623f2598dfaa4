//! Utility functions.

use std::borrow::Cow;

/// Decode raw file bytes to text.
///
/// Tries UTF-8 first (BOM handled automatically by encoding_rs); malformed
/// input falls back to Windows-1252, which digitized books from the
/// pre-Unicode era commonly use (superset of ISO-8859-1).
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}
