// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest common subsequence with a continuity-aware score.
//!
//! O(|query| × |text|) time and space per comparison. Quiz fields are a few
//! dozen characters, so the full table is cheap; this is not meant for
//! document-length text. The table is allocated per call and never shared.
//!
//! # Backtrack tie-break
//!
//! When the current characters differ, the walk moves along the query axis
//! only if `dp[i-1][j] > dp[i][j-1]`. Equal neighbours move along the text
//! axis. This is a fixed policy: it picks one witness consistently, not the
//! most contiguous or the leftmost one.

use crate::scoring::{continuity_adjusted, continuity_bonus};
use crate::types::FieldScore;
use crate::util::offsets::char_indices_to_byte_offsets;

/// Dense `(rows + 1) × (cols + 1)` LCS length table, row-major.
#[derive(Debug, Clone)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// LCS length of `query[..i]` and `text[..j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * (self.cols + 1) + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * (self.cols + 1) + j] = value;
    }

    /// LCS length of the full inputs.
    pub fn lcs_len(&self) -> u32 {
        self.get(self.rows, self.cols)
    }
}

/// Build the LCS table for two code point sequences.
pub fn lcs_table(query: &[char], text: &[char]) -> LcsTable {
    let rows = query.len();
    let cols = text.len();
    let mut table = LcsTable {
        rows,
        cols,
        cells: vec![0; (rows + 1) * (cols + 1)],
    };

    for i in 1..=rows {
        for j in 1..=cols {
            let value = if query[i - 1] == text[j - 1] {
                table.get(i - 1, j - 1) + 1
            } else {
                table.get(i - 1, j).max(table.get(i, j - 1))
            };
            table.set(i, j, value);
        }
    }

    table
}

/// Recover one LCS witness as ascending code point indices into `text`.
pub fn backtrack(table: &LcsTable, query: &[char], text: &[char]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(table.lcs_len() as usize);
    let (mut i, mut j) = (query.len(), text.len());

    while i > 0 && j > 0 {
        if query[i - 1] == text[j - 1] {
            positions.push(j - 1);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) > table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    // Walked from the end
    positions.reverse();
    positions
}

/// Subsequence score of `query` against `text`, both lower-cased.
///
/// `recall = lcs / |query|` (in code points), then discounted by
/// [`continuity_adjusted`]. Contiguity is judged on code point indices, so
/// two adjacent CJK characters count as adjacent even though they are three
/// bytes apart. Returned positions are byte offsets into `text`.
pub fn fuzzy_score(query: &str, text: &str) -> FieldScore {
    let query_chars: Vec<char> = query.chars().collect();
    let text_chars: Vec<char> = text.chars().collect();

    if query_chars.is_empty() || text_chars.is_empty() {
        return FieldScore::zero();
    }

    let table = lcs_table(&query_chars, &text_chars);
    let lcs_len = table.lcs_len();
    if lcs_len == 0 {
        return FieldScore::zero();
    }

    let char_positions = backtrack(&table, &query_chars, &text_chars);
    let recall = f64::from(lcs_len) / query_chars.len() as f64;
    let score = continuity_adjusted(recall, continuity_bonus(&char_positions));

    tracing::trace!(
        query,
        text,
        lcs_len,
        score,
        "subsequence fallback"
    );

    FieldScore {
        score,
        positions: char_indices_to_byte_offsets(text, &char_positions),
    }
}
