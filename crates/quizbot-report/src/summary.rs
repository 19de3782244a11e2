//! Aggregate statistics over a score history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quizbot_core::report::ScoreRecord;

/// Label used for a facet the player left unconstrained.
pub const ALL_LABEL: &str = "ALL";

/// Totals across every recorded session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of completed sessions.
    pub sessions: usize,
    /// Questions asked, open-ended included.
    pub questions: usize,
    pub auto_total: usize,
    pub correct: usize,
    pub first_played: Option<DateTime<Utc>>,
    pub last_played: Option<DateTime<Utc>>,
    /// Keyed by category filter; [`ALL_LABEL`] for unfiltered sessions.
    pub per_category: BTreeMap<String, CategoryStats>,
}

/// Totals for sessions played under one category filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub sessions: usize,
    pub auto_total: usize,
    pub correct: usize,
    /// Best single-session accuracy.
    pub best_accuracy: Option<f64>,
}

impl HistorySummary {
    /// Overall fraction correct, or `None` if nothing was auto-graded.
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.correct, self.auto_total)
    }
}

impl CategoryStats {
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.correct, self.auto_total)
    }
}

fn ratio(correct: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(correct as f64 / total as f64)
    }
}

/// Summarize a score history.
pub fn summarize(records: &[ScoreRecord]) -> HistorySummary {
    let mut summary = HistorySummary::default();

    for r in records {
        summary.sessions += 1;
        summary.questions += r.questions;
        summary.auto_total += r.auto_total;
        summary.correct += r.correct;
        summary.first_played = Some(summary.first_played.map_or(r.at, |t| t.min(r.at)));
        summary.last_played = Some(summary.last_played.map_or(r.at, |t| t.max(r.at)));

        let key = r.category.clone().unwrap_or_else(|| ALL_LABEL.to_string());
        let stats = summary.per_category.entry(key).or_default();
        stats.sessions += 1;
        stats.auto_total += r.auto_total;
        stats.correct += r.correct;
        if let Some(acc) = r.score().accuracy() {
            stats.best_accuracy = Some(stats.best_accuracy.map_or(acc, |best| best.max(acc)));
        }
    }

    summary
}
