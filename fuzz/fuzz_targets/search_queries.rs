// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end search.
//!
//! Arbitrary banks and queries must never panic, and every emitted result
//! must be non-zero, in bank order, with matches that index its field.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quizseek::{search, AnswerItem};

#[derive(Arbitrary, Debug)]
struct RawItem {
    question: String,
    options: Vec<String>,
    answer: Vec<String>,
}

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    items: Vec<RawItem>,
}

fn clip(s: String) -> String {
    s.chars().take(48).collect()
}

fuzz_target!(|input: Input| {
    let bank: Vec<AnswerItem> = input
        .items
        .into_iter()
        .take(16)
        .map(|raw| AnswerItem {
            kind: String::new(),
            question: clip(raw.question),
            options: raw.options.into_iter().take(4).map(clip).collect(),
            answer: raw.answer.into_iter().take(4).map(clip).collect(),
        })
        .collect();
    let query = clip(input.query);

    let results = search(&bank, &query);

    let mut last_index = None;
    for result in &results {
        assert!(result.score > 0.0 && result.score <= 1.0, "score {}", result.score);
        assert_eq!(result.matched, query.trim().to_lowercase());

        let index = bank
            .iter()
            .position(|item| std::ptr::eq(item, result.item))
            .expect("result must borrow from the bank");
        if let Some(prev) = last_index {
            assert!(index > prev, "results out of bank order");
        }
        last_index = Some(index);

        let text = result.field_text();
        for &m in &result.matches {
            assert!(m < text.len(), "match {} past field of {} bytes", m, text.len());
        }
    }
});
