//! The `quizbot scores` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizbot_core::config::load_config_from;
use quizbot_report::{read_score_log, summarize, ALL_LABEL};

pub fn execute(
    score_log: Option<PathBuf>,
    limit: usize,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = score_log.unwrap_or(config.score_log);

    let records = read_score_log(&path)?;
    if records.is_empty() {
        println!("No scores recorded yet in {}.", path.display());
        return Ok(());
    }

    let mut recent = Table::new();
    recent.set_header(vec!["When", "Category", "Difficulty", "Questions", "Score"]);
    let skip = records.len().saturating_sub(limit);
    for r in records.iter().skip(skip) {
        recent.add_row(vec![
            Cell::new(r.at.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(r.category.as_deref().unwrap_or(ALL_LABEL)),
            Cell::new(r.difficulty.as_deref().unwrap_or(ALL_LABEL)),
            Cell::new(r.questions),
            Cell::new(format!("{} / {}", r.correct, r.auto_total)),
        ]);
    }
    println!("{recent}");

    let summary = summarize(&records);

    let mut by_category = Table::new();
    by_category.set_header(vec!["Category", "Sessions", "Correct", "Accuracy", "Best"]);
    for (category, stats) in &summary.per_category {
        by_category.add_row(vec![
            Cell::new(category),
            Cell::new(stats.sessions),
            Cell::new(format!("{} / {}", stats.correct, stats.auto_total)),
            Cell::new(percent(stats.accuracy())),
            Cell::new(percent(stats.best_accuracy)),
        ]);
    }
    println!("\n{by_category}");

    println!(
        "\n{} session(s), {} / {} correct overall ({})",
        summary.sessions,
        summary.correct,
        summary.auto_total,
        percent(summary.accuracy())
    );

    Ok(())
}

fn percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.1}%", r * 100.0),
        None => "-".to_string(),
    }
}
