// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::env;
use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quizseek::{
    load_items_from_path, rank_results, search, AnswerItem, FieldKind, ImportConfig, SearchResult,
};

mod cli;
use cli::display::{
    field_label, highlight, row, score_value, section_bot, section_mid, section_top, themed,
    truncate_path, truncate_to_width, visible_len, BOLD, BOX_WIDTH, DIM, GRAY,
};
use cli::{Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            ranked,
            json,
            import,
        } => run_search(&file, &query, limit, ranked, json, &import.config()),
        Commands::Inspect { file, import } => run_inspect(&file, &import.config()),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUIZSEEK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("quizseek=warn"));

    let format = env::var("QUIZSEEK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn load(file: &str, config: &ImportConfig) -> anyhow::Result<Vec<AnswerItem>> {
    load_items_from_path(file, config).with_context(|| format!("loading {}", file))
}

fn run_search(
    file: &str,
    query: &str,
    limit: Option<usize>,
    ranked: bool,
    json: bool,
    config: &ImportConfig,
) -> anyhow::Result<()> {
    let items = load(file, config)?;
    let results = search(&items, query);
    let total = results.len();

    let results = if ranked {
        rank_results(results, limit)
    } else {
        match limit {
            Some(n) => results.into_iter().take(n).collect(),
            None => results,
        }
    };

    if json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &results).context("writing results")?;
        writeln!(stdout)?;
        return Ok(());
    }

    print_results(file, query, total, &results);
    Ok(())
}

fn print_results(file: &str, query: &str, total: usize, results: &[SearchResult<'_>]) {
    section_top("SEARCH");
    row(&format!("  Bank:    {}", truncate_path(file, BOX_WIDTH - 12)));
    row(&format!("  Query:   {}", truncate_to_width(query.trim(), BOX_WIDTH - 12)));
    row(&format!(
        "  Matches: {} (showing {})",
        total,
        results.len()
    ));

    for (i, result) in results.iter().enumerate() {
        section_mid(&format!("#{}", i + 1));
        row(&format!(
            "  {}  {}",
            score_value(result.score),
            field_label(result.field.label())
        ));

        // Highlight only fits on untruncated text; long fields fall back to plain
        let text = result.field_text();
        let shown = if visible_len(text) <= BOX_WIDTH - 4 {
            highlight(text, &result.matches)
        } else {
            truncate_to_width(text, BOX_WIDTH - 4)
        };
        row(&format!("  {}", shown));

        if result.field != FieldKind::Question {
            row(&format!(
                "  {}",
                themed(GRAY, &[DIM], &truncate_to_width(&result.item.question, BOX_WIDTH - 4))
            ));
        }
        if !result.item.answer.is_empty() {
            let answers = result.item.answer.join(" / ");
            row(&format!(
                "  {} {}",
                themed(GRAY, &[BOLD], "answer:"),
                truncate_to_width(&answers, BOX_WIDTH - 12)
            ));
        }
    }

    section_bot();
}

fn run_inspect(file: &str, config: &ImportConfig) -> anyhow::Result<()> {
    let items = load(file, config)?;

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for item in &items {
        let kind = if item.kind.is_empty() { "(none)" } else { item.kind.as_str() };
        *kinds.entry(kind).or_default() += 1;
    }

    let options: usize = items.iter().map(|i| i.options.len()).sum();
    let answers: usize = items.iter().map(|i| i.answer.len()).sum();
    let unanswered = items.iter().filter(|i| i.answer.is_empty()).count();
    let longest = items
        .iter()
        .map(|i| i.question.chars().count())
        .max()
        .unwrap_or(0);

    section_top("QUESTION BANK");
    row(&format!("  File:        {}", truncate_path(file, BOX_WIDTH - 16)));
    row(&format!("  Items:       {:>8}", items.len()));
    row(&format!("  Options:     {:>8}", options));
    row(&format!("  Answers:     {:>8}", answers));
    row(&format!("  Unanswered:  {:>8}", unanswered));
    row(&format!("  Longest q:   {:>8} chars", longest));
    section_mid("KINDS");
    for (kind, count) in &kinds {
        row(&kind_row(kind, *count));
    }
    section_bot();
    Ok(())
}

/// One `inspect` line: the kind padded to 20 terminal columns, then the count.
fn kind_row(kind: &str, count: usize) -> String {
    let label = truncate_to_width(kind, 20);
    let pad = 20usize.saturating_sub(visible_len(&label));
    format!("  {}{}{:>8}", label, " ".repeat(pad), count)
}
