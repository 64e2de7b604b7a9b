// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the engine.
//!
//! `AnswerItem` comes in from whatever imported the question bank, and
//! `SearchResult` goes out to whatever renders it. Both are plain data; the
//! engine never mutates an item, it only borrows it for the lifetime of the
//! result set.

use serde::{Deserialize, Serialize};

/// One entry of a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnswerItem {
    /// Free-form category label ("single choice", "判断题", ...). Never scored.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Primary searchable text.
    pub question: String,
    /// Alternative answers, in presentation order.
    #[serde(default)]
    pub options: Vec<String>,
    /// Correct answers, in presentation order.
    #[serde(default)]
    pub answer: Vec<String>,
}

/// Which part of an item produced the winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Question,
    Answer,
    Option,
}

impl FieldKind {
    /// Multiplier applied to a raw field score before fields are compared.
    pub fn weight(self) -> f64 {
        match self {
            FieldKind::Question | FieldKind::Answer => 1.0,
            FieldKind::Option => crate::scoring::OPTION_WEIGHT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Question => "question",
            FieldKind::Answer => "answer",
            FieldKind::Option => "option",
        }
    }
}

/// Score and positions for one (query, field text) comparison.
///
/// `positions` are byte offsets into the text that was scored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldScore {
    pub score: f64,
    pub positions: Vec<usize>,
}

impl FieldScore {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// The best-scoring field of one item, after weighting.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch<'a> {
    pub kind: FieldKind,
    /// Position inside `answer` or `options`; always 0 for the question.
    pub index: usize,
    /// Original-case text of the field.
    pub text: &'a str,
    /// Weighted score, not yet clamped.
    pub score: f64,
}

/// One matching item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    pub item: &'a AnswerItem,
    /// Best weighted field score, clamped to `(0.0, 1.0]`.
    pub score: f64,
    /// The trimmed, lower-cased query. Not the substring that was found.
    pub matched: String,
    /// Byte offsets into the winning field's text. Empty when the winning
    /// field only matched fuzzily.
    pub matches: Vec<usize>,
    /// Winning field, for callers that want to render it.
    #[serde(skip)]
    pub field: FieldKind,
    #[serde(skip)]
    pub field_index: usize,
}

impl SearchResult<'_> {
    /// Original-case text of the winning field.
    pub fn field_text(&self) -> &str {
        match self.field {
            FieldKind::Question => &self.item.question,
            FieldKind::Answer => &self.item.answer[self.field_index],
            FieldKind::Option => &self.item.options[self.field_index],
        }
    }
}
