use crate::query::SearchQuery;
use serde::{Deserialize, Serialize};

/// How a completed search narrowed the card list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Nothing matched
    NoMatches,
    /// Every card matched, so the filter had no effect
    AllMatched,
    /// Some cards matched
    Partial,
}

/// Result counts of one search, ready for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub query: SearchQuery,
    pub found: usize,
    pub total: usize,
}

impl SearchSummary {
    pub fn new(query: SearchQuery, found: usize, total: usize) -> Self {
        Self {
            query,
            found,
            total,
        }
    }

    /// Classify the counts. Zero matches wins over "all matched" for an empty list.
    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        if self.found == 0 {
            SearchOutcome::NoMatches
        } else if self.found >= self.total {
            SearchOutcome::AllMatched
        } else {
            SearchOutcome::Partial
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        let text = self.query.text();
        match self.outcome() {
            SearchOutcome::NoMatches => format!(
                "No cards found matching \"{text}\" in {}",
                self.query.kind
            ),
            SearchOutcome::AllMatched => {
                format!("All {} cards match \"{text}\"", self.total)
            }
            SearchOutcome::Partial => format!(
                "Found {} of {} cards matching \"{text}\"",
                self.found, self.total
            ),
        }
    }
}
