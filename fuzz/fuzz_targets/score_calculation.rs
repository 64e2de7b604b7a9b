// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for field scoring invariants.
//!
//! Scores must be finite, inside [0, 1], and deterministic. Positions must be
//! ascending byte offsets that land on character boundaries of the text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quizseek::{fuzzy_score, overlap_score};

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    text: String,
}

fuzz_target!(|input: Input| {
    // The LCS table is |query| x |text|; keep it small enough to stay fast
    let query: String = input.query.chars().take(64).collect();
    let text: String = input.text.chars().take(256).collect();

    let first = overlap_score(&query, &text);
    let second = overlap_score(&query, &text);

    // INVARIANT 1: deterministic
    assert_eq!(first, second, "same inputs scored differently");

    // INVARIANT 2: finite and bounded
    assert!(first.score.is_finite(), "non-finite score {}", first.score);
    assert!(
        (0.0..=1.0).contains(&first.score),
        "score {} out of range",
        first.score
    );

    // INVARIANT 3: zero score means no positions
    if first.score == 0.0 {
        assert!(first.positions.is_empty());
    }

    // INVARIANT 4: positions are ascending, in bounds, and on char boundaries
    for pair in first.positions.windows(2) {
        assert!(pair[0] < pair[1], "positions not ascending: {:?}", first.positions);
    }
    for &p in &first.positions {
        assert!(p < text.len() && text.is_char_boundary(p), "bad offset {}", p);
    }

    // INVARIANT 5: without containment the subsequence tier decides alone
    let fuzzy = fuzzy_score(&query, &text);
    assert!(fuzzy.score <= 1.0);
    if !text.contains(query.as_str()) {
        assert_eq!(first.score, fuzzy.score);
    }
});
