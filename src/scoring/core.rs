// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind field scores.
//!
//! Every score lives in `[0, 1]`. Substring hits land in `(0.8, 1.0)`, exact
//! hits are exactly `1.0`, and subsequence hits are their recall discounted by
//! how scattered the matched characters are.
//!
//! # Constants
//!
//! | Name                 | Value | Role                                         |
//! |----------------------|-------|----------------------------------------------|
//! | `SUBSTRING_FLOOR`    | 0.8   | Minimum score for a contiguous hit           |
//! | `SUBSTRING_SPAN`     | 0.2   | Scaled by query/text length ratio            |
//! | `CONTINUITY_FLOOR`   | 0.6   | Fraction of recall kept by a scattered match |
//! | `CONTINUITY_WEIGHT`  | 0.4   | Extra fraction earned by full contiguity     |
//! | `OPTION_WEIGHT`      | 0.8   | Options are weaker evidence than answers     |

use crate::fuzzy::fuzzy_score;
use crate::types::FieldScore;
use crate::util::offsets::{byte_span, substring_byte_range};

/// Score for `query == text`.
pub const EXACT_SCORE: f64 = 1.0;

/// Lower bound of the substring tier (exclusive).
pub const SUBSTRING_FLOOR: f64 = 0.8;

/// Width of the substring tier; multiplied by `len(query) / len(text)`.
pub const SUBSTRING_SPAN: f64 = 0.2;

/// Share of raw recall a fuzzy match keeps with zero contiguity.
pub const CONTINUITY_FLOOR: f64 = 0.6;

/// Share of raw recall unlocked by a fully contiguous fuzzy match.
pub const CONTINUITY_WEIGHT: f64 = 0.4;

/// Multiplier applied to option fields.
pub const OPTION_WEIGHT: f64 = 0.8;

/// Ceiling every reported score is clamped to.
pub const MAX_SCORE: f64 = 1.0;

/// Score one field against the query.
///
/// Both arguments must already be lower-cased. Positions in the returned
/// `FieldScore` are byte offsets into `text`.
///
/// Tier order is fixed: exact, then substring, then LCS. A later tier is
/// never consulted once an earlier one hits.
pub fn overlap_score(query: &str, text: &str) -> FieldScore {
    if query.is_empty() || text.is_empty() {
        return FieldScore::zero();
    }

    if query == text {
        return FieldScore {
            score: EXACT_SCORE,
            positions: byte_span(0..text.len()),
        };
    }

    if let Some(range) = substring_byte_range(text, query) {
        return FieldScore {
            score: substring_score(query.len(), text.len()),
            positions: byte_span(range),
        };
    }

    fuzzy_score(query, text)
}

/// `0.8 + (query_len / text_len) * 0.2`, lengths in bytes.
pub fn substring_score(query_len: usize, text_len: usize) -> f64 {
    if text_len == 0 {
        return 0.0;
    }
    let ratio = query_len as f64 / text_len as f64;
    SUBSTRING_FLOOR + ratio * SUBSTRING_SPAN
}

/// Fraction of adjacent matched pairs that are exactly one step apart.
///
/// Fewer than two positions have no pairs, so no bonus.
pub fn continuity_bonus(positions: &[usize]) -> f64 {
    if positions.len() <= 1 {
        return 0.0;
    }

    let continuous = positions
        .windows(2)
        .filter(|pair| pair[1] == pair[0] + 1)
        .count();

    continuous as f64 / (positions.len() - 1) as f64
}

/// Discount raw recall by contiguity.
pub fn continuity_adjusted(recall: f64, bonus: f64) -> f64 {
    recall * (CONTINUITY_FLOOR + bonus * CONTINUITY_WEIGHT)
}

/// Keep a score inside `[0, MAX_SCORE]`.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, MAX_SCORE)
}
