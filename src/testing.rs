//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::AnswerItem;

/// Create a test item from string slices.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(question: &str, options: &[&str], answer: &[&str]) -> AnswerItem {
    AnswerItem {
        kind: "single".to_string(),
        question: question.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        answer: answer.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create a test item with only a question.
pub fn make_item_simple(question: &str) -> AnswerItem {
    make_item(question, &[], &[])
}

/// A small mixed-script bank used by integration tests and benches.
pub fn sample_bank() -> Vec<AnswerItem> {
    vec![
        make_item("Vue.js是什么框架", &["前端", "后端"], &["前端框架"]),
        make_item("什么是闭包", &[], &["函数作用域"]),
        make_item(
            "Which keyword declares an immutable binding in Rust?",
            &["let", "mut", "const"],
            &["let"],
        ),
        make_item("HTTP 状态码 404 表示什么", &["未找到", "服务器错误"], &["未找到"]),
        make_item("TCP 三次握手的目的", &[], &["同步序列号", "确认双方收发能力"]),
    ]
}
