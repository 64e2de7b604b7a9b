// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query and field normalization.
//!
//! Matching is case-insensitive and nothing else: no diacritic folding, no
//! whitespace collapsing inside the text. Both sides go through the same
//! `to_lowercase` so that a byte-for-byte comparison is a case-insensitive one.

/// Trim and lower-case a raw query.
///
/// Returns `None` when nothing is left, which callers treat as "no results"
/// rather than an error.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Lower-case a field for comparison. Surrounding whitespace is kept.
pub fn normalize_field(text: &str) -> String {
    text.to_lowercase()
}
