//! Quiz sessions: ordering, grading and scoring one play-through.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use crate::model::Question;
use crate::normalize::answers_match;

/// The questions for one play-through, in presentation order.
///
/// A session is owned by whoever prepared it. Hosts that keep sessions
/// between requests can key their storage by [`QuizSession::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: Uuid,
    questions: Vec<Question>,
}

impl QuizSession {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions with a canonical answer.
    pub fn auto_graded_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_auto_graded()).count()
    }
}

/// Build a session from a selection, shuffling it if asked.
///
/// The shuffle is Fisher–Yates driven by `rng`, and the session id is drawn
/// from the same `rng`, so a seeded rng reproduces the whole session.
pub fn prepare_session<R: Rng + ?Sized>(
    mut subset: Vec<Question>,
    shuffle: bool,
    rng: &mut R,
) -> QuizSession {
    if shuffle {
        subset.shuffle(rng);
    }
    let session = QuizSession {
        id: Builder::from_random_bytes(rng.gen()).into_uuid(),
        questions: subset,
    };
    tracing::info!(
        session = %session.id,
        questions = session.len(),
        shuffled = shuffle,
        "prepared quiz session"
    );
    session
}

/// Random source for [`prepare_session`]: seeded when a seed is given,
/// OS entropy otherwise.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Result of grading a single reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GradeOutcome {
    /// The question has no canonical answer; the reply is acknowledged only.
    OpenEnded,
    Correct,
    /// Carries the canonical answer for display.
    Incorrect { expected: String },
}

impl GradeOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, GradeOutcome::Correct)
    }

    pub fn is_auto_graded(&self) -> bool {
        !matches!(self, GradeOutcome::OpenEnded)
    }
}

/// Grade one reply. Never fails; any input, including empty, gets an outcome.
pub fn grade_one(question: &Question, input: &str) -> GradeOutcome {
    match &question.answer {
        None => GradeOutcome::OpenEnded,
        Some(expected) if answers_match(input, expected) => GradeOutcome::Correct,
        Some(expected) => GradeOutcome::Incorrect {
            expected: expected.clone(),
        },
    }
}

/// Player replies keyed by 0-based session position.
///
/// A position with no reply is graded as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<usize, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replies given in session order, starting at position 0.
    pub fn from_ordered<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            replies
                .into_iter()
                .enumerate()
                .map(|(i, r)| (i, r.into()))
                .collect(),
        )
    }

    pub fn insert(&mut self, position: usize, reply: impl Into<String>) {
        self.0.insert(position, reply.into());
    }

    pub fn get(&self, position: usize) -> &str {
        self.0.get(&position).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Auto-graded score for a completed session.
///
/// Always `correct <= total_auto_graded <= session length`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub correct: usize,
    pub total_auto_graded: usize,
}

impl ScoreResult {
    /// Fold a set of outcomes. Order does not matter.
    pub fn tally<'a>(outcomes: impl IntoIterator<Item = &'a GradeOutcome>) -> Self {
        outcomes
            .into_iter()
            .fold(ScoreResult::default(), |mut acc, outcome| {
                if outcome.is_auto_graded() {
                    acc.total_auto_graded += 1;
                }
                if outcome.is_correct() {
                    acc.correct += 1;
                }
                acc
            })
    }

    /// Fraction correct, or `None` when nothing was auto-graded.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total_auto_graded == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total_auto_graded as f64)
        }
    }
}

/// Grade every question once, in session order.
pub fn grade_session(session: &QuizSession, answers: &Answers) -> Vec<GradeOutcome> {
    session
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| grade_one(q, answers.get(i)))
        .collect()
}

/// Grade a session and aggregate its score.
pub fn score_session(session: &QuizSession, answers: &Answers) -> ScoreResult {
    let outcomes = grade_session(session, answers);
    let result = ScoreResult::tally(&outcomes);
    tracing::info!(
        session = %session.id,
        correct = result.correct,
        total = result.total_auto_graded,
        "scored quiz session"
    );
    result
}
