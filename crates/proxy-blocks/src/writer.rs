//! Block writing functionality for managed blocks.
//!
//! Provides functions to upsert and remove marker-delimited blocks in file
//! content. The block text is opaque: callers format it, including the marker
//! line itself. Bytes outside the block are copied through untouched.

use crate::parser::{BLANK_LINE, find_span};

/// Appends `block_text` to the end of the content.
///
/// A newline separator is inserted only when the content is non-empty and does
/// not already end with one.
fn append_block(content: &[u8], block_text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + block_text.len() + 1);
    out.extend_from_slice(content);
    if !content.is_empty() && !content.ends_with(b"\n") {
        out.push(b'\n');
    }
    out.extend_from_slice(block_text);
    out
}

/// Inserts a new block or replaces the existing one.
///
/// If `marker` occurs in `content`, the block starting at its first occurrence
/// is replaced by `block_text`. Otherwise `block_text` is appended.
///
/// When the replaced block was terminated by a blank line, the blank line is
/// kept: a `block_text` without a trailing newline gets one so the following
/// content does not run into it.
///
/// # Example
/// ```
/// use proxy_blocks::writer::upsert_block;
///
/// let first = upsert_block(b"A\nB\n\nC\n", "X", "X\nval=1\n");
/// assert_eq!(first, b"A\nB\n\nC\nX\nval=1\n");
///
/// let second = upsert_block(&first, "X", "X\nval=2\n");
/// assert_eq!(second, b"A\nB\n\nC\nX\nval=2\n");
/// ```
pub fn upsert_block(content: &[u8], marker: &str, block_text: &str) -> Vec<u8> {
    let block_text = block_text.as_bytes();
    let Some(span) = find_span(content, marker) else {
        return append_block(content, block_text);
    };

    let before = &content[..span.start];
    let after = &content[span.end..];

    let mut out = Vec::with_capacity(before.len() + block_text.len() + 1 + after.len());
    out.extend_from_slice(before);
    out.extend_from_slice(block_text);
    if !after.is_empty() && !block_text.ends_with(b"\n") {
        out.push(b'\n');
    }
    out.extend_from_slice(after);
    out
}

/// Removes the block starting at `marker`.
///
/// Returns `None` if the marker does not occur. When the block sits at the start
/// of the content or directly after a blank line, the blank line that terminated
/// it is removed as well so no run of empty lines is left behind.
///
/// A newline that [`upsert_block`] inserted before an appended block is not
/// removed: `"A"` becomes `"A\n"` after an append and remove.
///
/// # Example
/// ```
/// use proxy_blocks::writer::remove_block;
///
/// let content = b"A\nB\n\nC\nX\nval=1\n";
/// assert_eq!(remove_block(content, "X").as_deref(), Some(&b"A\nB\n\nC\n"[..]));
/// assert_eq!(remove_block(content, "Y"), None);
/// ```
pub fn remove_block(content: &[u8], marker: &str) -> Option<Vec<u8>> {
    let span = find_span(content, marker)?;

    let before = &content[..span.start];
    let mut end = span.end;
    if end < content.len() && (before.is_empty() || before.ends_with(BLANK_LINE)) {
        end += 1;
    }

    let mut out = before.to_vec();
    out.extend_from_slice(&content[end..]);
    Some(out)
}
