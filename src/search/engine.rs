// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-level search over a question bank.
//!
//! Stateless: every call owns its tables and buffers, so concurrent callers
//! need no coordination. Output order is input order; ranking is the
//! caller's job (see [`crate::scoring::ranking`]).
//!
//! # Reported positions
//!
//! `matches` is not the witness the winning scorer found. It is recomputed by
//! case-insensitive containment against the winning field's original text.
//! A field that won through the subsequence tier therefore reports no
//! positions, even though it has a score. `matched` is always the normalized
//! query. Renderers rely on both behaviours.

use tracing::debug;

use crate::contracts::check_result_well_formed;
use crate::scoring::clamp_score;
use crate::types::{AnswerItem, SearchResult};
use crate::util::normalize::normalize_query;
use crate::util::offsets::original_text_matches;

use super::fields::best_field;

/// Search `items` for `query`.
///
/// A blank query returns no results. Items whose best field scores zero are
/// skipped. Nothing is sorted, deduplicated, or capped.
pub fn search<'a>(items: &'a [AnswerItem], query: &str) -> Vec<SearchResult<'a>> {
    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match_item(item, &query))
        .collect()
}

/// Same output as [`search`], with items scored on the rayon pool.
///
/// Order is preserved: `collect` on an indexed parallel iterator keeps input
/// order.
#[cfg(feature = "parallel")]
pub fn search_parallel<'a>(items: &'a [AnswerItem], query: &str) -> Vec<SearchResult<'a>> {
    use rayon::prelude::*;

    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };

    items
        .par_iter()
        .filter_map(|item| match_item(item, &query))
        .collect()
}

/// Score one item against an already-normalized query.
pub fn match_item<'a>(item: &'a AnswerItem, query: &str) -> Option<SearchResult<'a>> {
    let best = best_field(item, query)?;
    let score = clamp_score(best.score);
    if score <= 0.0 {
        return None;
    }

    let matches = original_text_matches(best.text, query);
    debug!(
        question = %item.question,
        field = best.kind.label(),
        score,
        ?matches,
        "search hit"
    );

    let result = SearchResult {
        item,
        score,
        matched: query.to_string(),
        matches,
        field: best.kind,
        field_index: best.index,
    };
    check_result_well_formed(&result);
    Some(result)
}
