use serde::{Deserialize, Serialize};

/// A recorded search term and its cumulative frequency score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermScore {
    pub term: String,
    pub score: f64,
}

impl TermScore {
    #[must_use]
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self { term: term.into(), score }
    }

    /// Score rounded to the nearest integer for display.
    #[must_use]
    pub fn display_score(&self) -> String {
        format!("{:.0}", self.score)
    }
}

/// Popular term as shown on the statistics page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTerm {
    pub term: String,
    pub score: String,
}

impl From<&TermScore> for DisplayTerm {
    fn from(value: &TermScore) -> Self {
        Self { term: value.term.clone(), score: value.display_score() }
    }
}

/// Everything the statistics page renders, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub total_searches: String,
    pub indexed_items: String,
    pub top_terms: Vec<DisplayTerm>,
}
