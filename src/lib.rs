// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Continuity-aware fuzzy search over quiz question banks.
//!
//! Given a free-text query (typically OCR output from a screenshot of an exam
//! question) and a bank of items, find the items whose question, answers, or
//! options best match. Matching is purely character-sequence based: no
//! tokenization, no stemming, no learned relevance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ fuzzy::lcs   │───▶│ scoring      │───▶│ search::     │───▶│ search::     │
//! │ (LCS table,  │    │ (exact >     │    │ fields       │    │ engine       │
//! │  backtrack)  │    │  substring > │    │ (best field, │    │ (filter,     │
//! │              │    │  fuzzy)      │    │  option ×0.8)│    │  positions)  │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//!                             │
//!                             ▼
//!                    ┌──────────────────┐
//!                    │ util::offsets    │
//!                    │ (code points ↔   │
//!                    │  byte offsets)   │
//!                    └──────────────────┘
//! ```
//!
//! The engine is pure: no I/O, no shared state, no failure modes on valid
//! UTF-8. [`import`] is the only fallible part and sits outside the engine.
//!
//! # Usage
//!
//! ```
//! use quizseek::{search, AnswerItem};
//!
//! let items = vec![AnswerItem {
//!     kind: "single".into(),
//!     question: "Vue.js是什么框架".into(),
//!     options: vec!["前端".into(), "后端".into()],
//!     answer: vec!["前端框架".into()],
//! }];
//!
//! let results = search(&items, "vue");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].matches, vec![0, 1, 2]);
//! ```

pub mod contracts;
pub mod fuzzy;
pub mod import;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod util;

// Re-exports for public API
pub use fuzzy::{backtrack, fuzzy_score, lcs_table, LcsTable};
pub use import::{load_items, load_items_from_path, parse_separator, ImportConfig, ImportError};
pub use scoring::ranking::{compare_results, rank_results};
pub use scoring::{continuity_bonus, overlap_score, OPTION_WEIGHT};
pub use search::{best_field, match_item, search};
#[cfg(feature = "parallel")]
pub use search::search_parallel;
pub use types::{AnswerItem, FieldKind, FieldMatch, FieldScore, SearchResult};
pub use util::offsets::{char_indices_to_byte_offsets, original_text_matches};
