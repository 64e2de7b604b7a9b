//! Search result property tests.
//!
//! Whatever the bank and query, results must be non-zero, in bank order,
//! and carry positions that index the winning field.

use crate::common::{assert_result_well_formed, position_in};
use proptest::prelude::*;
use quizseek::{search, AnswerItem};

fn field() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-fA-F什么是闭包 ]{0,12}").unwrap()
}

fn item_strategy() -> impl Strategy<Value = AnswerItem> {
    (
        field(),
        prop::collection::vec(field(), 0..4),
        prop::collection::vec(field(), 0..3),
    )
        .prop_map(|(question, options, answer)| AnswerItem {
            kind: "generated".to_string(),
            question,
            options,
            answer,
        })
}

fn bank_strategy() -> impl Strategy<Value = Vec<AnswerItem>> {
    prop::collection::vec(item_strategy(), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Property: no result ever has a zero score, and every result is well-formed.
    #[test]
    fn prop_results_well_formed(bank in bank_strategy(), query in "[a-fA-F什么 ]{0,6}") {
        for result in search(&bank, &query) {
            assert_result_well_formed(&result);
        }
    }

    /// Property: results appear in bank order.
    #[test]
    fn prop_bank_order_preserved(bank in bank_strategy(), query in "[a-f什么]{1,4}") {
        let results = search(&bank, &query);
        let order: Vec<usize> = results.iter().map(|r| position_in(&bank, r)).collect();
        for pair in order.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Property: the reported query is the trimmed, lower-cased input.
    #[test]
    fn prop_matched_is_normalized_query(bank in bank_strategy(), query in " {0,2}[a-fA-F]{1,4} {0,2}") {
        let expected = query.trim().to_lowercase();
        for result in search(&bank, &query) {
            prop_assert_eq!(&result.matched, &expected);
        }
    }

    /// Property: blank queries return nothing.
    #[test]
    fn prop_blank_query_empty(bank in bank_strategy(), query in "[ \t\n]{0,4}") {
        prop_assert!(search(&bank, &query).is_empty());
    }

    /// Property: when matches are reported, they spell the query in the
    /// winning field (case-insensitively, for ASCII).
    #[test]
    fn prop_matches_spell_query(bank in bank_strategy(), query in "[a-fA-F]{1,3}") {
        for result in search(&bank, &query) {
            if let (Some(&first), Some(&last)) = (result.matches.first(), result.matches.last()) {
                let span = &result.field_text()[first..=last];
                prop_assert_eq!(span.to_lowercase(), query.to_lowercase());
            }
        }
    }

    /// Property: parallel search returns exactly what sequential search does.
    #[cfg(feature = "parallel")]
    #[test]
    fn prop_parallel_equivalent(bank in bank_strategy(), query in "[a-f什么]{1,4}") {
        prop_assert_eq!(search(&bank, &query), quizseek::search_parallel(&bank, &query));
    }
}
