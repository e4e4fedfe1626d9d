//! Line-ending normalization applied to text golden files

use std::borrow::Cow;

/// Normalize line endings
///
/// Only `\r\n` pairs are rewritten; a lone `\r` is content.
pub fn normalize_lines(data: &str) -> Cow<'_, str> {
    if data.contains("\r\n") {
        Cow::Owned(data.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(data)
    }
}

/// Normalize line endings in raw bytes, see [`normalize_lines`]
pub fn normalize_line_bytes(data: &[u8]) -> Cow<'_, [u8]> {
    if !data.windows(2).any(|w| w == b"\r\n") {
        return Cow::Borrowed(data);
    }

    let mut normalized = Vec::with_capacity(data.len());
    let mut iter = data.iter().copied().peekable();
    while let Some(byte) = iter.next() {
        if byte == b'\r' && iter.peek() == Some(&b'\n') {
            continue;
        }
        normalized.push(byte);
    }
    Cow::Owned(normalized)
}
