// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best-field selection for one item.
//!
//! An item is scored field by field: the question, each answer, each option.
//! Options are multiplied by [`OPTION_WEIGHT`](crate::scoring::OPTION_WEIGHT)
//! before comparison. The winner is the first field to reach the maximum, so
//! a question beats an answer with the same score, and an answer beats an
//! option.

use crate::scoring::overlap_score;
use crate::types::{AnswerItem, FieldKind, FieldMatch};
use crate::util::normalize::normalize_field;

/// Every scoreable field of `item`, in evaluation order.
pub fn item_fields(item: &AnswerItem) -> impl Iterator<Item = (FieldKind, usize, &str)> {
    let question = std::iter::once((FieldKind::Question, 0, item.question.as_str()));
    let answers = item
        .answer
        .iter()
        .enumerate()
        .map(|(i, a)| (FieldKind::Answer, i, a.as_str()));
    let options = item
        .options
        .iter()
        .enumerate()
        .map(|(i, o)| (FieldKind::Option, i, o.as_str()));

    question.chain(answers).chain(options)
}

/// Weighted score of a single field. `query` must already be normalized.
pub fn field_score(query: &str, kind: FieldKind, text: &str) -> f64 {
    overlap_score(query, &normalize_field(text)).score * kind.weight()
}

/// Highest-scoring field of `item`, or `None` when nothing scores above zero.
///
/// The returned score is weighted but not clamped.
pub fn best_field<'a>(item: &'a AnswerItem, query: &str) -> Option<FieldMatch<'a>> {
    let mut best: Option<FieldMatch<'a>> = None;
    let mut max_score = 0.0;

    for (kind, index, text) in item_fields(item) {
        let score = field_score(query, kind, text);
        if score > max_score {
            max_score = score;
            best = Some(FieldMatch {
                kind,
                index,
                text,
                score,
            });
        }
    }

    best
}
