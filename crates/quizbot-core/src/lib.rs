//! quizbot-core — Question bank loading, selection, grading and scoring.
//!
//! This crate holds the quiz session engine. It performs no I/O beyond
//! reading question files and config; hosts (the console CLI, or any other
//! front end) drive it through the functions re-exported here.

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod session;
pub mod traits;

pub use error::{QuizError, ValidationIssue};
pub use filter::{available_values, filter_questions, resolve_facet, FacetChoice};
pub use model::{Difficulty, Question, QuestionBank, SelectionFilter};
pub use normalize::normalize;
pub use parser::{load_questions, parse_question_file};
pub use report::{build_score_record, ScoreRecord};
pub use session::{
    grade_one, grade_session, prepare_session, score_session, session_rng, Answers, GradeOutcome,
    QuizSession, ScoreResult,
};
pub use traits::{Clock, FixedClock, ScoreSink, SystemClock};
