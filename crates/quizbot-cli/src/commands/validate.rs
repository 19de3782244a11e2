//! The `quizbot validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizbot_core::parser::{bank_warnings, parse_question_file};

pub fn execute(questions: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::config_with_questions(questions, config_path.as_deref())?;
    let bank = parse_question_file(&config.questions)?;

    let open_ended = bank.iter().filter(|q| !q.is_auto_graded()).count();
    println!(
        "Question bank: {} ({} questions, {} open-ended)",
        config.questions.display(),
        bank.len(),
        open_ended
    );

    let warnings = bank_warnings(&bank);
    for w in &warnings {
        let prefix = w
            .position
            .map(|pos| format!("  [#{pos}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
