//! Worked examples against hand-derived scores.

use crate::common::{assert_close, expected_substring_score, make_item};
use quizseek::{search, FieldKind};

#[test]
fn test_vue_question_substring() {
    let items = vec![make_item(
        "Vue.js是什么框架",
        &["前端", "后端"],
        &["前端框架"],
    )];
    let results = search(&items, "vue");

    assert_eq!(results.len(), 1);
    let r = &results[0];
    // 3 query bytes against a 21 byte question
    assert_close(r.score, expected_substring_score("vue", "vue.js是什么框架"));
    assert_close(r.score, 0.8 + (3.0 / 21.0) * 0.2);
    assert_eq!(r.field, FieldKind::Question);
    assert_eq!(r.matched, "vue");
    assert_eq!(r.matches, vec![0, 1, 2]);
    assert_eq!(&items[0].question[..3], "Vue");
}

#[test]
fn test_no_shared_code_points() {
    let items = vec![make_item("什么是闭包", &[], &["函数作用域"])];
    assert!(search(&items, "xyz").is_empty());
}

#[test]
fn test_exact_answer_hit() {
    let items = vec![make_item("HTTP 状态码 404 表示什么", &["未找到", "服务器错误"], &["未找到"])];
    let results = search(&items, "未找到");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 1.0);
    // The answer is evaluated before the identical option
    assert_eq!(results[0].field, FieldKind::Answer);
    assert_eq!(results[0].matches, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_ocr_style_noise_still_matches() {
    // OCR dropped a character and inserted a space
    let items = vec![make_item("TCP 三次握手的目的", &[], &["同步序列号"])];
    let results = search(&items, "tcp三次 握手目的");
    assert_eq!(results.len(), 1);
    let r = &results[0];
    // lcs = 9 of 10; 6 of the 8 witness gaps are adjacent code points
    assert_close(r.score, 0.9 * (0.6 + 0.75 * 0.4));
    assert!(r.matches.is_empty());
}

#[test]
fn test_fuzzy_score_value() {
    // lcs("ac", "abc") = 2 of 2, positions 0 and 2 are not adjacent
    let items = vec![make_item("abc", &[], &[])];
    let results = search(&items, "ac");
    assert_eq!(results.len(), 1);
    assert_close(results[0].score, 0.6);
}

#[test]
fn test_bank_order_not_score_order() {
    let items = vec![
        make_item("a question that mentions closures in passing", &[], &[]),
        make_item("closures", &[], &[]),
    ];
    let results = search(&items, "closures");
    assert_eq!(results.len(), 2);
    assert!(results[0].score < results[1].score);
    assert_eq!(results[1].score, 1.0);
}
