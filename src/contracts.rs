// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on search output.
//!
//! Debug-mode assertions for the properties every emitted result must have.
//! They are zero-cost in release builds (`debug_assert!`) and fail early
//! during development and under the fuzzer.
//!
//! | Contract function             | Property                                        |
//! |-------------------------------|-------------------------------------------------|
//! | `check_score_in_range`        | Reported score is in `(0, 1]`                   |
//! | `check_matches_well_formed`   | Offsets strictly increase and fit the field     |
//! | `check_result_well_formed`    | Both of the above, against the winning field    |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    use crate::scoring::{
        CONTINUITY_FLOOR, CONTINUITY_WEIGHT, MAX_SCORE, OPTION_WEIGHT, SUBSTRING_FLOOR,
        SUBSTRING_SPAN,
    };
    const EPS: f64 = 1e-12;

    // Substring tier tops out exactly at the exact-match score
    const SUBSTRING_TOP: f64 = SUBSTRING_FLOOR + SUBSTRING_SPAN;
    assert!(SUBSTRING_TOP - MAX_SCORE < EPS && MAX_SCORE - SUBSTRING_TOP < EPS);

    // A fully contiguous fuzzy match keeps all of its recall
    const CONTINUITY_TOP: f64 = CONTINUITY_FLOOR + CONTINUITY_WEIGHT;
    assert!(CONTINUITY_TOP - 1.0 < EPS && 1.0 - CONTINUITY_TOP < EPS);

    // Options are strictly weaker than questions and answers
    assert!(OPTION_WEIGHT > 0.0 && OPTION_WEIGHT < 1.0);
};

use crate::types::SearchResult;

/// Check that a reported score is positive and clamped.
///
/// # Panics (debug builds only)
/// Panics if `score` is not in `(0, 1]` or is not finite.
#[inline]
pub fn check_score_in_range(score: f64) {
    debug_assert!(
        score.is_finite() && score > 0.0 && score <= 1.0,
        "Contract violation: reported score {} outside (0, 1]",
        score
    );
}

/// Check that match offsets are strictly increasing and inside `text`.
///
/// # Panics (debug builds only)
/// Panics on the first out-of-order or out-of-bounds offset.
#[inline]
pub fn check_matches_well_formed(matches: &[usize], text: &str) {
    for (i, pair) in matches.windows(2).enumerate() {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: matches[{}] = {} >= matches[{}] = {}",
            i,
            pair[0],
            i + 1,
            pair[1]
        );
    }

    if let Some(&last) = matches.last() {
        debug_assert!(
            last < text.len(),
            "Contract violation: match offset {} >= field length {}",
            last,
            text.len()
        );
    }
}

/// Check every property of an emitted result.
#[inline]
pub fn check_result_well_formed(result: &SearchResult<'_>) {
    check_score_in_range(result.score);
    check_matches_well_formed(&result.matches, result.field_text());
}
