//! Reported positions: recomputed by containment on the original text.

use crate::common::{assert_result_well_formed, make_item};
use quizseek::{overlap_score, search};

#[test]
fn test_positions_are_original_case_bytes() {
    let items = vec![make_item("Learn TypeScript Generics", &[], &[])];
    let results = search(&items, "SCRIPT");
    assert_eq!(results[0].matches, (10..16).collect::<Vec<_>>());
    assert_eq!(&items[0].question[10..16], "Script");
}

#[test]
fn test_fuzzy_winner_reports_empty_positions() {
    let items = vec![make_item("b-o-r-r-o-w", &[], &[])];
    let results = search(&items, "borrow");
    assert_eq!(results.len(), 1);
    assert!(results[0].score > 0.0);
    assert!(results[0].matches.is_empty());

    // The scorer itself did find a witness
    let scored = overlap_score("borrow", "b-o-r-r-o-w");
    assert_eq!(scored.positions.len(), 6);
}

#[test]
fn test_matched_is_query_not_substring() {
    let items = vec![make_item("Rust Ownership", &[], &[])];
    let results = search(&items, "  OWNER ");
    assert_eq!(results[0].matched, "owner");
    assert_eq!(&items[0].question[5..10], "Owner");
}

#[test]
fn test_first_occurrence_only() {
    let items = vec![make_item("ab ab ab", &[], &[])];
    let results = search(&items, "ab");
    assert_eq!(results[0].matches, vec![0, 1]);
}

#[test]
fn test_cjk_positions_cover_every_byte() {
    let items = vec![make_item("什么是闭包", &[], &[])];
    let results = search(&items, "闭包");
    assert_eq!(results[0].matches, (9..15).collect::<Vec<_>>());
    assert_result_well_formed(&results[0]);
}

#[test]
fn test_results_in_sample_bank_are_well_formed() {
    let bank = crate::common::sample_bank();
    for query in ["vue", "闭包", "let", "404", "握手", "前端", "rust binding", "xyz"] {
        for result in search(&bank, query) {
            assert_result_well_formed(&result);
        }
    }
}
