//! quizbot-report — Score persistence and history summaries.
//!
//! Implements the `ScoreSink` seam from `quizbot-core` as an append-only
//! JSON-lines file, and aggregates the recorded history.

pub mod score_log;
pub mod summary;

pub use score_log::{read_score_log, JsonlScoreLog};
pub use summary::{summarize, CategoryStats, HistorySummary, ALL_LABEL};
