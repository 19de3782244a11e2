//! Question document parser.
//!
//! Loads question banks from JSON (or TOML) documents and validates every
//! record before anything is handed back to a caller.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::error::{QuizError, ValidationIssue};
use crate::model::{Difficulty, Question, QuestionBank};
use crate::normalize::normalize;

/// Build a validated bank from an already-parsed document.
///
/// The document must be an array of objects. Each object needs non-empty
/// string `category` and `question` fields; `answer` defaults to open-ended
/// and `difficulty` to easy. The first bad record aborts the whole load.
pub fn load_questions(source: &Value) -> Result<QuestionBank, QuizError> {
    let items = source.as_array().ok_or_else(|| {
        QuizError::Format(format!(
            "expected an array of question records, found {}",
            json_kind(source)
        ))
    })?;

    let questions = items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_record(i + 1, item))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = questions.len(), "validated question records");
    Ok(QuestionBank::new(questions))
}

fn parse_record(position: usize, item: &Value) -> Result<Question, QuizError> {
    let record = item
        .as_object()
        .ok_or_else(|| QuizError::validation(position, ValidationIssue::NotARecord))?;

    let category = required_str(position, record, "category")?;
    let question = required_str(position, record, "question")?;

    let answer = match record.get("answer") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(QuizError::validation(
                position,
                ValidationIssue::WrongType {
                    field: "answer",
                    expected: "a string or null",
                },
            ))
        }
    };

    let difficulty = match record.get("difficulty") {
        None => Difficulty::default(),
        Some(Value::String(s)) => Difficulty::from_literal(s).ok_or_else(|| {
            QuizError::validation(position, ValidationIssue::InvalidDifficulty(s.clone()))
        })?,
        Some(other) => {
            return Err(QuizError::validation(
                position,
                ValidationIssue::InvalidDifficulty(other.to_string()),
            ))
        }
    };

    Ok(Question {
        category,
        question,
        answer,
        difficulty,
    })
}

fn required_str(
    position: usize,
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<String, QuizError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(QuizError::validation(
            position,
            ValidationIssue::MissingField(field),
        )),
        Some(Value::String(s)) if s.trim().is_empty() => Err(QuizError::validation(
            position,
            ValidationIssue::EmptyField(field),
        )),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(QuizError::validation(
            position,
            ValidationIssue::WrongType {
                field,
                expected: "a string",
            },
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a question document from a string.
///
/// Files ending in `.toml` are read as TOML with the records under a
/// top-level `questions` array; everything else is read as JSON.
pub fn parse_question_bank_str(
    content: &str,
    source_path: &Path,
) -> Result<QuestionBank, QuizError> {
    let is_toml = source_path.extension().is_some_and(|ext| ext == "toml");

    let document = if is_toml {
        let mut table: toml::Table = toml::from_str(content)
            .map_err(|e| QuizError::Format(format!("{}: {e}", source_path.display())))?;
        let questions = table.remove("questions").ok_or_else(|| {
            QuizError::Format(format!(
                "{}: missing top-level `questions` array",
                source_path.display()
            ))
        })?;
        serde_json::to_value(questions)
            .map_err(|e| QuizError::Format(format!("{}: {e}", source_path.display())))?
    } else {
        serde_json::from_str::<Value>(content)
            .map_err(|e| QuizError::Format(format!("{}: {e}", source_path.display())))?
    };

    load_questions(&document)
}

/// Read and validate a question file.
pub fn parse_question_file(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;

    let bank = parse_question_bank_str(&content, path)
        .with_context(|| format!("failed to load questions from {}", path.display()))?;

    tracing::info!("loaded {} questions from {}", bank.len(), path.display());
    Ok(bank)
}

/// A non-fatal problem found in an otherwise valid bank.
#[derive(Debug, Clone)]
pub struct BankWarning {
    /// 1-based record position (if applicable).
    pub position: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Lint a loaded bank for issues that do not prevent playing.
pub fn bank_warnings(bank: &QuestionBank) -> Vec<BankWarning> {
    let mut warnings = Vec::new();

    if bank.is_empty() {
        warnings.push(BankWarning {
            position: None,
            message: "question bank is empty".into(),
        });
    }

    // Same prompt twice in one category
    let mut seen: HashMap<(String, String), usize> = HashMap::new();
    for (i, q) in bank.iter().enumerate() {
        let key = (q.category.to_lowercase(), normalize(&q.question));
        if let Some(first) = seen.get(&key) {
            warnings.push(BankWarning {
                position: Some(i + 1),
                message: format!("duplicate of question #{first} in category {}", q.category),
            });
        } else {
            seen.insert(key, i + 1);
        }
    }

    // An answer with no letters or digits matches a blank submission
    for (i, q) in bank.iter().enumerate() {
        if let Some(answer) = &q.answer {
            if normalize(answer).is_empty() {
                warnings.push(BankWarning {
                    position: Some(i + 1),
                    message: format!(
                        "answer {answer:?} has no letters or digits; any blank reply will be graded correct"
                    ),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    const VALID_JSON: &str = r#"[
  {"category": "Math", "question": "2+2?", "answer": "4"},
  {"category": "Math", "question": "Capital of France?", "answer": "Paris", "difficulty": "medium"},
  {"category": "Trivia", "question": "Your favorite color?"}
]"#;

    fn issue(err: QuizError) -> (usize, ValidationIssue) {
        match err {
            QuizError::Validation { position, issue } => (position, issue),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn parse_valid_json() {
        let bank = parse_question_bank_str(VALID_JSON, &PathBuf::from("q.json")).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.questions()[0].category, "Math");
        assert_eq!(bank.questions()[1].difficulty, Difficulty::Medium);
        assert_eq!(bank.questions()[2].question, "Your favorite color?");
    }

    #[test]
    fn applies_defaults() {
        let bank = load_questions(&json!([{"category": "Trivia", "question": "Why?"}])).unwrap();
        let q = &bank.questions()[0];
        assert_eq!(q.answer, None);
        assert_eq!(q.difficulty, Difficulty::Easy);
    }

    #[test]
    fn null_answer_is_open_ended() {
        let bank = load_questions(&json!([{"category": "A", "question": "Q", "answer": null}]))
            .unwrap();
        assert_eq!(bank.questions()[0].answer, None);
    }

    #[test]
    fn rejects_null_difficulty() {
        let err = load_questions(&json!([
            {"category": "A", "question": "Q", "difficulty": null}
        ]))
        .unwrap_err();
        assert_eq!(
            issue(err),
            (1, ValidationIssue::InvalidDifficulty("null".into()))
        );
    }

    #[test]
    fn rejects_missing_category_with_position() {
        let err = load_questions(&json!([
            {"category": "A", "question": "ok"},
            {"question": "no category"}
        ]))
        .unwrap_err();
        assert_eq!(issue(err), (2, ValidationIssue::MissingField("category")));
    }

    #[test]
    fn rejects_missing_question_with_position() {
        let err = load_questions(&json!([{"category": "A"}])).unwrap_err();
        assert_eq!(issue(err), (1, ValidationIssue::MissingField("question")));
    }

    #[test]
    fn rejects_blank_required_field() {
        let err = load_questions(&json!([{"category": "  ", "question": "Q"}])).unwrap_err();
        assert_eq!(issue(err), (1, ValidationIssue::EmptyField("category")));
    }

    #[test]
    fn rejects_invalid_difficulty() {
        let err = load_questions(&json!([
            {"category": "A", "question": "Q", "difficulty": "impossible"}
        ]))
        .unwrap_err();
        assert_eq!(
            issue(err),
            (1, ValidationIssue::InvalidDifficulty("impossible".into()))
        );
    }

    #[test]
    fn difficulty_literal_must_be_lowercase() {
        let err = load_questions(&json!([
            {"category": "A", "question": "Q", "difficulty": "Hard"}
        ]))
        .unwrap_err();
        assert!(matches!(issue(err).1, ValidationIssue::InvalidDifficulty(_)));
    }

    #[test]
    fn rejects_non_string_answer() {
        let err = load_questions(&json!([{"category": "A", "question": "Q", "answer": 4}]))
            .unwrap_err();
        assert!(matches!(
            issue(err).1,
            ValidationIssue::WrongType { field: "answer", .. }
        ));
    }

    #[test]
    fn rejects_non_object_item() {
        let err = load_questions(&json!([{"category": "A", "question": "Q"}, "oops"]))
            .unwrap_err();
        assert_eq!(issue(err), (2, ValidationIssue::NotARecord));
    }

    #[test]
    fn rejects_non_array_document() {
        let err = load_questions(&json!({"questions": []})).unwrap_err();
        assert!(matches!(err, QuizError::Format(_)));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn malformed_json_is_format_error() {
        let err = parse_question_bank_str("[{ not json", &PathBuf::from("bad.json")).unwrap_err();
        assert!(matches!(err, QuizError::Format(_)));
    }

    #[test]
    fn ignores_unknown_fields() {
        let bank = load_questions(&json!([
            {"category": "A", "question": "Q", "hint": "think", "points": 3}
        ]))
        .unwrap();
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn empty_array_is_valid() {
        let bank = load_questions(&json!([])).unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn parse_toml_document() {
        let toml = r#"
[[questions]]
category = "Science"
question = "Chemical symbol for gold?"
answer = "Au"
difficulty = "medium"

[[questions]]
category = "Trivia"
question = "Best pizza topping?"
"#;
        let bank = parse_question_bank_str(toml, &PathBuf::from("q.toml")).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[0].answer.as_deref(), Some("Au"));
        assert_eq!(bank.questions()[1].answer, None);
    }

    #[test]
    fn toml_without_questions_is_format_error() {
        let err = parse_question_bank_str("title = \"x\"", &PathBuf::from("q.toml")).unwrap_err();
        assert!(matches!(err, QuizError::Format(_)));
    }

    #[test]
    fn load_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, VALID_JSON).unwrap();

        let bank = parse_question_file(&path).unwrap();
        assert_eq!(bank.len(), 3);
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = parse_question_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(format!("{err:#}").contains("exist.json"));
    }

    #[test]
    fn warns_about_duplicates_and_blank_answers() {
        let bank = load_questions(&json!([
            {"category": "Math", "question": "2+2?", "answer": "4"},
            {"category": "math", "question": "2 + 2 ?", "answer": "4"},
            {"category": "Misc", "question": "Punctuation?", "answer": "?!"}
        ]))
        .unwrap();
        let warnings = bank_warnings(&bank);
        assert!(warnings
            .iter()
            .any(|w| w.position == Some(2) && w.message.contains("duplicate")));
        assert!(warnings
            .iter()
            .any(|w| w.position == Some(3) && w.message.contains("no letters")));
    }

    #[test]
    fn clean_bank_has_no_warnings() {
        let bank = parse_question_bank_str(VALID_JSON, &PathBuf::from("q.json")).unwrap();
        assert!(bank_warnings(&bank).is_empty());
    }
}
