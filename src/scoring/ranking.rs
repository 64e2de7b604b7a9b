// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking for callers that want it.
//!
//! The engine reports results in bank order. Display layers usually want the
//! strongest hits first; these helpers give them a deterministic order
//! without touching the engine's output contract.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two results for ranking.
///
/// Sort order:
/// 1. **Score** - higher first
/// 2. **Bank position** - earlier first, so equal scores keep input order
///
/// `a_pos` and `b_pos` are the results' indices in the engine output.
pub fn compare_results(
    a: &SearchResult<'_>,
    a_pos: usize,
    b: &SearchResult<'_>,
    b_pos: usize,
) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a_pos.cmp(&b_pos),
    }
}

/// Sort results by descending score, stable on ties, and keep at most `limit`.
pub fn rank_results<'a>(results: Vec<SearchResult<'a>>, limit: Option<usize>) -> Vec<SearchResult<'a>> {
    let mut indexed: Vec<(usize, SearchResult<'a>)> = results.into_iter().enumerate().collect();
    indexed.sort_by(|(ap, a), (bp, b)| compare_results(a, *ap, b, *bp));

    let limit = limit.unwrap_or(indexed.len());
    indexed.into_iter().take(limit).map(|(_, r)| r).collect()
}
