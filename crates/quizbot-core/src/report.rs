//! Score records for completed sessions.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::model::SelectionFilter;
use crate::session::{QuizSession, ScoreResult};
use crate::traits::Clock;

/// One completed play-through, as written to the score log.
///
/// `None` filters mean the player chose "all" for that facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// When the session was scored (UTC, whole seconds).
    pub at: DateTime<Utc>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    /// Number of questions in the session, open-ended included.
    pub questions: usize,
    /// Number of auto-graded questions.
    pub auto_total: usize,
    pub correct: usize,
}

impl ScoreRecord {
    pub fn score(&self) -> ScoreResult {
        ScoreResult {
            correct: self.correct,
            total_auto_graded: self.auto_total,
        }
    }
}

/// Package a session outcome into a record stamped by `clock`.
pub fn build_score_record(
    filter: &SelectionFilter,
    session: &QuizSession,
    result: &ScoreResult,
    clock: &dyn Clock,
) -> ScoreRecord {
    ScoreRecord {
        at: clock.now().trunc_subsecs(0),
        category: filter.category.clone(),
        difficulty: filter.difficulty.clone(),
        questions: session.len(),
        auto_total: result.total_auto_graded,
        correct: result.correct,
    }
}
