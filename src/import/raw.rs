// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::types::AnswerItem;

/// How delimited option/answer strings are split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportConfig {
    /// Separator between options. Empty keeps the whole string as one option.
    pub option_separator: String,
    /// Separator between correct answers. Empty keeps the whole string.
    pub answer_separator: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            option_separator: "|".to_string(),
            answer_separator: "|".to_string(),
        }
    }
}

/// Resolve the escape spellings people type into config fields.
///
/// `\n`, `\t`, `\r` and `\s` become newline, tab, carriage return and space.
/// Anything else is used verbatim.
pub fn parse_separator(raw: &str) -> &str {
    match raw {
        "\\n" => "\n",
        "\\t" => "\t",
        "\\r" => "\r",
        "\\s" => " ",
        other => other,
    }
}

/// A list field as it appears in input: already split, or one delimited string.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldList {
    Many(Vec<String>),
    Delimited(String),
}

impl Default for FieldList {
    fn default() -> Self {
        FieldList::Many(Vec::new())
    }
}

/// Input shape of an item before separators are applied.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RawItem {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: FieldList,
    #[serde(default)]
    pub answer: FieldList,
}

impl RawItem {
    /// Apply `config` and produce the engine's item.
    ///
    /// Delimited options are always split, so an empty string yields one
    /// empty option. A delimited answer that is empty yields no answers.
    pub fn into_item(self, config: &ImportConfig) -> AnswerItem {
        let options = match self.options {
            FieldList::Many(options) => options,
            FieldList::Delimited(raw) => split_field(&raw, &config.option_separator),
        };

        let answer = match self.answer {
            FieldList::Many(answer) => answer,
            FieldList::Delimited(raw) if raw.is_empty() => Vec::new(),
            FieldList::Delimited(raw) => split_field(&raw, &config.answer_separator),
        };

        AnswerItem {
            kind: self.kind.trim().to_string(),
            question: self.question.trim().to_string(),
            options,
            answer,
        }
    }
}

fn split_field(raw: &str, separator: &str) -> Vec<String> {
    let separator = parse_separator(separator);
    if separator.is_empty() {
        return vec![raw.to_string()];
    }
    raw.split(separator).map(str::to_string).collect()
}
