//! The `quizbot facets` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizbot_core::filter::available_values;
use quizbot_core::model::{Difficulty, QuestionBank};
use quizbot_core::parser::parse_question_file;

pub fn execute(questions: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::config_with_questions(questions, config_path.as_deref())?;
    let bank = parse_question_file(&config.questions)?;

    let (categories, difficulties) = available_values(&bank);
    println!("Categories: {}", categories.join(", "));
    println!(
        "Difficulties: {}",
        difficulties
            .iter()
            .map(Difficulty::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("\n{}", facet_table(&bank, &categories, &difficulties));

    Ok(())
}

fn facet_table(bank: &QuestionBank, categories: &[String], difficulties: &[Difficulty]) -> Table {
    let mut table = Table::new();
    let mut header = vec!["Category".to_string()];
    header.extend(difficulties.iter().map(|d| d.to_string()));
    header.push("Auto-graded".into());
    header.push("Total".into());
    table.set_header(header);

    for category in categories {
        let in_category: Vec<_> = bank.iter().filter(|q| &q.category == category).collect();

        let mut row = vec![Cell::new(category)];
        for d in difficulties {
            let n = in_category.iter().filter(|q| q.difficulty == *d).count();
            row.push(Cell::new(n));
        }
        row.push(Cell::new(
            in_category.iter().filter(|q| q.is_auto_graded()).count(),
        ));
        row.push(Cell::new(in_category.len()));
        table.add_row(row);
    }

    table
}
