//! Core data model types for quizbot.
//!
//! These are the fundamental types the whole system passes around: questions,
//! the bank they are loaded into, and the filter a player selects with.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::parser::load_questions;

/// How hard a question is. Ordering is the canonical facet order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in canonical order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Exact match against the literal used in question documents.
    /// Case-sensitive: `"Easy"` is not a valid document value.
    pub fn from_literal(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validated trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Category the question belongs to (e.g. "Math").
    pub category: String,
    /// The prompt shown to the player.
    pub question: String,
    /// Canonical answer. `None` marks an open-ended question that is never
    /// auto-graded.
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Question {
    /// Whether this question contributes to the auto-graded score.
    pub fn is_auto_graded(&self) -> bool {
        self.answer.is_some()
    }
}

/// An ordered, validated collection of questions.
///
/// Order is the order of the source document. Once built, a bank is never
/// mutated; share it behind an `Arc` if several sessions need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub(crate) fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Serialize for QuestionBank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.questions.serialize(serializer)
    }
}

/// Deserializing goes through [`load_questions`], with the same validation
/// and errors as loading a question file.
impl<'de> Deserialize<'de> for QuestionBank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = serde_json::Value::deserialize(deserializer)?;
        load_questions(&document).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// Facet constraints chosen by the player. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionFilter {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl SelectionFilter {
    pub fn new(category: Option<String>, difficulty: Option<String>) -> Self {
        Self {
            category,
            difficulty,
        }
    }

    /// A filter that matches every question.
    pub fn any() -> Self {
        Self::default()
    }
}
