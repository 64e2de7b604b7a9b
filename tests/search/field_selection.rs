//! Which field wins, and how options are weighted.

use crate::common::{assert_close, expected_substring_score, make_item};
use quizseek::{best_field, overlap_score, search, FieldKind, OPTION_WEIGHT};

#[test]
fn test_option_exact_hit_is_capped_at_weight() {
    let items = vec![make_item("闭包是什么", &["词法作用域"], &[])];
    let results = search(&items, "词法作用域");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].field, FieldKind::Option);
    assert_close(results[0].score, OPTION_WEIGHT);
}

#[test]
fn test_option_weight_applies_to_substring() {
    let items = vec![make_item("空", &["lexical scope"], &[])];
    let results = search(&items, "scope");
    assert_eq!(results.len(), 1);
    assert_close(
        results[0].score,
        expected_substring_score("scope", "lexical scope") * OPTION_WEIGHT,
    );
}

#[test]
fn test_weaker_answer_beats_weighted_option() {
    // Answer: substring (> 0.8). Option: exact but weighted to 0.8.
    let items = vec![make_item("空", &["rust"], &["rust lang"])];
    let results = search(&items, "rust");
    assert_eq!(results[0].field, FieldKind::Answer);
    assert!(results[0].score > OPTION_WEIGHT);
}

#[test]
fn test_later_field_must_be_strictly_better() {
    let item = make_item("go", &[], &["go"]);
    let best = best_field(&item, "go").unwrap();
    assert_eq!(best.kind, FieldKind::Question);
}

#[test]
fn test_second_answer_can_win() {
    let item = make_item("空", &[], &["unrelated", "borrow checker"]);
    let best = best_field(&item, "borrow").unwrap();
    assert_eq!(best.kind, FieldKind::Answer);
    assert_eq!(best.index, 1);
    assert_eq!(best.text, "borrow checker");
}

#[test]
fn test_best_field_score_matches_direct_scoring() {
    let item = make_item("Ownership and Borrowing", &[], &[]);
    let best = best_field(&item, "borrow").unwrap();
    let direct = overlap_score("borrow", "ownership and borrowing");
    assert_close(best.score, direct.score);
}
