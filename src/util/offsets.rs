// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Code point indices versus byte offsets.
//!
//! The LCS table is built over `char`s, so the backtrack produces code point
//! indices. Everything that leaves the engine is a byte offset, because that
//! is what `&str` slicing takes. Mixing the two is the classic CJK bug: "框"
//! is one code point but three bytes. The conversion lives here and nowhere
//! else.

use std::ops::Range;

/// Map ascending code point indices to the byte offsets where those code
/// points start in `text`.
///
/// Single pass over `text`. Indices past the end of `text` are dropped.
/// Input must be sorted ascending; output is then sorted ascending too.
pub fn char_indices_to_byte_offsets(text: &str, char_positions: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(char_positions.len());
    let mut wanted = char_positions.iter().copied().peekable();

    for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
        match wanted.peek() {
            None => break,
            Some(&next) if next == char_idx => {
                offsets.push(byte_idx);
                wanted.next();
                // Duplicate indices collapse onto the same offset
                while wanted.peek() == Some(&char_idx) {
                    wanted.next();
                }
            }
            Some(_) => {}
        }
    }

    offsets
}

/// Byte range of the first occurrence of `needle` in `haystack`.
pub fn substring_byte_range(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .find(needle)
        .map(|start| start..start + needle.len())
}

/// Every byte offset of a range, in order.
pub fn byte_span(range: Range<usize>) -> Vec<usize> {
    range.collect()
}

/// Positions of `query` inside `original`, compared case-insensitively.
///
/// This is plain containment: a query that only matches as a scattered
/// subsequence gets no positions at all. Offsets index the lower-cased text
/// and may not line up with `original` when lower-casing changes a
/// character's width (the Kelvin sign `K` is three bytes, its lower case
/// `k` is one). Offsets at or past `original.len()` are dropped.
pub fn original_text_matches(original: &str, query: &str) -> Vec<usize> {
    let lowered = original.to_lowercase();
    let query = query.to_lowercase();

    match substring_byte_range(&lowered, &query) {
        Some(range) => {
            let limit = original.len();
            byte_span(range).into_iter().filter(|&b| b < limit).collect()
        }
        None => Vec::new(),
    }
}
