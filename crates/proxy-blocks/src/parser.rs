//! Locating marker-delimited blocks in file content.
//!
//! Content is raw bytes: a file does not have to be valid UTF-8 to be
//! patched. A block begins at the first occurrence of its marker and ends just
//! after the line terminator that precedes the next blank line, or at end of
//! content:
//!
//! ```text
//! A\n
//! # marker\n      <- span start
//! key=value\n     <- span end (exclusive) is after this newline
//! \n              <- blank line, not part of the block
//! B\n
//! ```

use std::ops::Range;

/// Literal sequence that terminates a block.
pub const BLANK_LINE: &[u8] = b"\n\n";

/// Position of the first occurrence of `needle` in `haystack`.
pub(crate) fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Returns the byte range of the block that starts at `marker`.
///
/// Only the first occurrence of `marker` is considered. The search for the
/// terminating blank line starts at the marker itself, so a marker that is
/// immediately followed by a blank line yields a block of just the marker line.
///
/// # Example
/// ```
/// use proxy_blocks::parser::find_span;
///
/// let content = b"A\n# m\nx=1\n\nB\n";
/// let span = find_span(content, "# m").unwrap();
/// assert_eq!(&content[span], b"# m\nx=1\n");
/// ```
pub fn find_span(content: &[u8], marker: &str) -> Option<Range<usize>> {
    let start = find_bytes(content, marker.as_bytes())?;
    let end = match find_bytes(&content[start..], BLANK_LINE) {
        // Keep the newline that ends the block's last line.
        Some(offset) => start + offset + 1,
        None => content.len(),
    };

    Some(start..end)
}

/// Returns the bytes of the block that starts at `marker`, unmodified.
///
/// # Example
/// ```
/// use proxy_blocks::parser::extract_block;
///
/// let content = b"export PATH=$PATH:~/bin\n# proxyctl\nexport http_proxy=http://h:1\n";
/// assert_eq!(
///     extract_block(content, "# proxyctl"),
///     Some(&b"# proxyctl\nexport http_proxy=http://h:1\n"[..])
/// );
/// assert_eq!(extract_block(content, "# other"), None);
/// ```
pub fn extract_block<'a>(content: &'a [u8], marker: &str) -> Option<&'a [u8]> {
    find_span(content, marker).map(|span| &content[span])
}

/// Checks if a block starting at `marker` exists in the content.
pub fn has_block(content: &[u8], marker: &str) -> bool {
    find_span(content, marker).is_some()
}
