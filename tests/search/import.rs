//! Loading a bank from JSON and searching it.

use quizseek::{load_items, search, ImportConfig, ImportError};

const BANK: &str = r#"[
    {"type": "单选", "question": "Vue.js是什么框架", "options": "前端|后端", "answer": "前端框架"},
    {"type": "判断", "question": "什么是闭包", "options": [], "answer": ["函数作用域"]},
    {"type": "多选", "question": "Rust 的智能指针", "options": "Box\nRc\nArc", "answer": "Box\nRc"}
]"#;

#[test]
fn test_load_and_search() {
    let config = ImportConfig {
        option_separator: "|".to_string(),
        answer_separator: "|".to_string(),
    };
    let items = load_items(BANK.as_bytes(), &config).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].options, vec!["前端", "后端"]);

    let results = search(&items, "框架");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.kind, "单选");
}

#[test]
fn test_escaped_newline_separators() {
    let config = ImportConfig {
        option_separator: "\\n".to_string(),
        answer_separator: "\\n".to_string(),
    };
    let items = load_items(BANK.as_bytes(), &config).unwrap();
    assert_eq!(items[2].options, vec!["Box", "Rc", "Arc"]);
    assert_eq!(items[2].answer, vec!["Box", "Rc"]);

    let results = search(&items, "arc");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].field_text(), "Arc");
}

#[test]
fn test_malformed_bank_is_an_error() {
    let err = load_items("[{\"question\": 1}]".as_bytes(), &ImportConfig::default()).unwrap_err();
    assert!(matches!(err, ImportError::Json(_)));
}

#[test]
fn test_blank_question_item_found_by_answer() {
    let json = r#"[
        {"question": "Vue.js是什么框架", "options": ["前端", "后端"], "answer": ["前端框架"]},
        {"question": "", "answer": ["函数作用域"]}
    ]"#;
    let items = load_items(json.as_bytes(), &ImportConfig::default()).unwrap();
    assert_eq!(items.len(), 2);

    let results = search(&items, "作用域");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.answer, vec!["函数作用域"]);
    assert_eq!(results[0].matches, (6..15).collect::<Vec<_>>());
}
