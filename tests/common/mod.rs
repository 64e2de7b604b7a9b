//! Shared test utilities and fixtures.

#![allow(dead_code)]

use quizseek::{AnswerItem, SearchResult};

// Re-export canonical test utilities from quizseek::testing
pub use quizseek::testing::{make_item, make_item_simple, sample_bank};

/// Tolerance for comparing computed scores against hand-derived values.
pub const EPS: f64 = 1e-12;

/// `0.8 + (query_bytes / text_bytes) * 0.2`
pub fn expected_substring_score(query: &str, text: &str) -> f64 {
    0.8 + (query.len() as f64 / text.len() as f64) * 0.2
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Index of `result.item` inside `items`, by address.
pub fn position_in(items: &[AnswerItem], result: &SearchResult<'_>) -> usize {
    items
        .iter()
        .position(|item| std::ptr::eq(item, result.item))
        .expect("result item not from this bank")
}

/// Assert every structural property an emitted result must have.
pub fn assert_result_well_formed(result: &SearchResult<'_>) {
    assert!(result.score > 0.0 && result.score <= 1.0, "score {}", result.score);
    let text = result.field_text();
    for pair in result.matches.windows(2) {
        assert!(pair[0] < pair[1], "matches not increasing: {:?}", result.matches);
    }
    if let Some(&last) = result.matches.last() {
        assert!(last < text.len(), "offset {} past field {:?}", last, text);
    }
    assert_eq!(result.matched, result.matched.trim().to_lowercase());
}
