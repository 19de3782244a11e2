//! Seams between the engine and its host: time and score persistence.
//!
//! The engine never reads the wall clock or touches storage directly; hosts
//! pass these in.

use chrono::{DateTime, Utc};

use crate::report::ScoreRecord;

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of "now" for score records.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real UTC wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Score sink
// ---------------------------------------------------------------------------

/// Append-only destination for completed-session records.
pub trait ScoreSink {
    /// Append one record. Records are never rewritten.
    fn append(&mut self, record: &ScoreRecord) -> anyhow::Result<()>;
}

/// In-memory sink.
impl ScoreSink for Vec<ScoreRecord> {
    fn append(&mut self, record: &ScoreRecord) -> anyhow::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
