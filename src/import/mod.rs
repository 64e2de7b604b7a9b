// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a question bank.
//!
//! The engine only sees decoded `AnswerItem`s. This module turns a JSON array
//! into them, applying separator rules to options and answers that arrive as
//! single delimited strings (the shape spreadsheet exports tend to produce).
//!
//! Input must be UTF-8. Any decoding from legacy encodings happens before
//! bytes reach this layer.

mod raw;

pub use raw::{parse_separator, FieldList, ImportConfig, RawItem};

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::types::AnswerItem;

/// Why a bank could not be loaded.
#[derive(Debug)]
pub enum ImportError {
    /// The input could not be read.
    Io(io::Error),
    /// The input is not a JSON array of items.
    Json(serde_json::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Io(e) => write!(f, "failed to read question bank: {}", e),
            ImportError::Json(e) => write!(f, "invalid question bank: {}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(e) => Some(e),
            ImportError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(e: io::Error) -> Self {
        ImportError::Io(e)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        ImportError::Json(e)
    }
}

/// Parse a JSON array of items from `reader`.
///
/// Items with a blank question are kept; their answers and options are
/// still searchable.
pub fn load_items<R: Read>(reader: R, config: &ImportConfig) -> Result<Vec<AnswerItem>, ImportError> {
    let raw: Vec<RawItem> = serde_json::from_reader(reader)?;

    let items: Vec<AnswerItem> = raw
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let item = raw.into_item(config);
            if item.question.is_empty() {
                warn!(index, "item has an empty question");
            }
            item
        })
        .collect();

    info!(count = items.len(), "loaded question bank");
    Ok(items)
}

/// Load from a file path, or from stdin when `path` is `-`.
pub fn load_items_from_path(
    path: impl AsRef<Path>,
    config: &ImportConfig,
) -> Result<Vec<AnswerItem>, ImportError> {
    let path = path.as_ref();
    if path == Path::new("-") {
        return load_items(io::stdin().lock(), config);
    }
    let file = File::open(path)?;
    load_items(BufReader::new(file), config)
}
