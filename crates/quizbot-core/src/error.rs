//! Question bank loading errors.
//!
//! Loading is all-or-nothing: any of these aborts the load and no partial
//! bank is returned. Grading and filtering never fail, so they have no
//! error type.

use thiserror::Error;

/// Errors raised while turning a question document into a [`QuestionBank`].
///
/// [`QuestionBank`]: crate::model::QuestionBank
#[derive(Debug, Error)]
pub enum QuizError {
    /// The document is not a sequence of records, or could not be parsed.
    #[error("invalid question document: {0}")]
    Format(String),

    /// A single record failed validation. `position` is 1-based.
    #[error("item #{position}: {issue}")]
    Validation {
        position: usize,
        issue: ValidationIssue,
    },
}

/// Why a single record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("not an object")]
    NotARecord,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// Holds the offending literal as written in the source.
    #[error("invalid difficulty {0:?} (expected easy, medium or hard)")]
    InvalidDifficulty(String),
}

impl QuizError {
    pub(crate) fn validation(position: usize, issue: ValidationIssue) -> Self {
        QuizError::Validation { position, issue }
    }

    /// The 1-based position of the offending record, if this is a
    /// per-record error.
    pub fn position(&self) -> Option<usize> {
        match self {
            QuizError::Validation { position, .. } => Some(*position),
            QuizError::Format(_) => None,
        }
    }
}
