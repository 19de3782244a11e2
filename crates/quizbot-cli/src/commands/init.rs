//! The `quizbot init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizbot.toml
    if std::path::Path::new("quizbot.toml").exists() {
        println!("quizbot.toml already exists, skipping.");
    } else {
        std::fs::write("quizbot.toml", SAMPLE_CONFIG)?;
        println!("Created quizbot.toml");
    }

    // Create starter question bank
    let questions_path = std::path::Path::new("questions.json");
    if questions_path.exists() {
        println!("questions.json already exists, skipping.");
    } else {
        std::fs::write(questions_path, SAMPLE_QUESTIONS)?;
        println!("Created questions.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own questions to questions.json");
    println!("  2. Run: quizbot validate");
    println!("  3. Run: quizbot play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbot configuration

questions = "questions.json"
score_log = "scores.jsonl"
shuffle = true
record_scores = true
# seed = 42
"#;

const SAMPLE_QUESTIONS: &str = r#"[
  {"category": "Math", "question": "What is 2 + 2?", "answer": "4"},
  {"category": "Math", "question": "What is 7 x 8?", "answer": "56", "difficulty": "medium"},
  {"category": "CS", "question": "Time complexity of binary search?", "answer": "O(log n)", "difficulty": "medium"},
  {"category": "Geography", "question": "Capital of France?", "answer": "Paris"},
  {"category": "Geography", "question": "Longest river in Africa?", "answer": "Nile", "difficulty": "hard"},
  {"category": "Trivia", "question": "What's your favorite color?"}
]
"#;
