//! Facet discovery and question selection.

use std::collections::BTreeSet;

use crate::model::{Difficulty, Question, QuestionBank, SelectionFilter};

/// Distinct categories (sorted) and difficulties (canonical order) present
/// in the bank.
pub fn available_values(bank: &QuestionBank) -> (Vec<String>, Vec<Difficulty>) {
    let categories: BTreeSet<&str> = bank.iter().map(|q| q.category.as_str()).collect();
    let difficulties: BTreeSet<Difficulty> = bank.iter().map(|q| q.difficulty).collect();

    (
        categories.into_iter().map(str::to_string).collect(),
        difficulties.into_iter().collect(),
    )
}

/// Select the questions matching `filter`, keeping bank order.
///
/// Each facet compares case-insensitively; a `None` facet matches anything.
/// An empty result is a normal outcome, not an error.
pub fn filter_questions(bank: &QuestionBank, filter: &SelectionFilter) -> Vec<Question> {
    let selected: Vec<Question> = bank
        .iter()
        .filter(|q| {
            facet_matches(filter.category.as_deref(), &q.category)
                && facet_matches(filter.difficulty.as_deref(), q.difficulty.as_str())
        })
        .cloned()
        .collect();

    tracing::debug!(
        category = ?filter.category,
        difficulty = ?filter.difficulty,
        matched = selected.len(),
        "filtered question bank"
    );
    selected
}

fn facet_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None => true,
        Some(v) => v.to_lowercase() == actual.to_lowercase(),
    }
}

/// How a free-text facet choice from a player resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetChoice {
    /// Blank input: no constraint.
    Any,
    /// Matched a known value; holds the value as spelled in the bank.
    Exact(String),
    /// Matched nothing. Hosts fall back to no constraint and should tell the
    /// player so.
    NoMatch,
}

impl FacetChoice {
    /// The value to put in a [`SelectionFilter`] facet.
    pub fn into_filter_value(self) -> Option<String> {
        match self {
            FacetChoice::Exact(v) => Some(v),
            FacetChoice::Any | FacetChoice::NoMatch => None,
        }
    }
}

/// Resolve player input against the known values of one facet.
pub fn resolve_facet<S: AsRef<str>>(input: &str, options: &[S]) -> FacetChoice {
    let input = input.trim();
    if input.is_empty() {
        return FacetChoice::Any;
    }
    let wanted = input.to_lowercase();
    options
        .iter()
        .map(AsRef::as_ref)
        .find(|opt| opt.to_lowercase() == wanted)
        .map(|opt| FacetChoice::Exact(opt.to_string()))
        .unwrap_or(FacetChoice::NoMatch)
}
