// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quizseek command-line interface.
//!
//! Two subcommands: `search` to look a query up in a question bank, and
//! `inspect` to summarise what a bank contains. Both read a JSON array from
//! a file, or from stdin when the path is `-`.

pub mod display;

use clap::{Args, Parser, Subcommand};
use quizseek::ImportConfig;

#[derive(Parser)]
#[command(
    name = "quizseek",
    about = "Continuity-aware fuzzy search over quiz question banks",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Separator flags shared by every command that loads a bank.
#[derive(Args, Clone, Debug)]
pub struct ImportArgs {
    /// Separator for options given as one string (`\n`, `\t`, `\r`, `\s` accepted)
    #[arg(long, default_value = "|")]
    pub option_sep: String,

    /// Separator for answers given as one string (`\n`, `\t`, `\r`, `\s` accepted)
    #[arg(long, default_value = "|")]
    pub answer_sep: String,
}

impl ImportArgs {
    pub fn config(&self) -> ImportConfig {
        ImportConfig {
            option_separator: self.option_sep.clone(),
            answer_separator: self.answer_sep.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a question bank and display matching items
    Search {
        /// Path to a JSON question bank, or `-` for stdin
        file: String,

        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Sort by score instead of bank order
        #[arg(long)]
        ranked: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        import: ImportArgs,
    },

    /// Summarise a question bank
    Inspect {
        /// Path to a JSON question bank, or `-` for stdin
        file: String,

        #[command(flatten)]
        import: ImportArgs,
    },
}
