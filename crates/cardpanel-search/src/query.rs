use cardpanel_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a search query is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Card identifier, in any notation
    #[default]
    Id,
    /// Card name
    Name,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchKind::Id => write!(f, "Card ID"),
            SearchKind::Name => write!(f, "Name"),
        }
    }
}

impl std::str::FromStr for SearchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SearchKind::Id),
            "name" => Ok(SearchKind::Name),
            other => Err(Error::Validation(format!("Unknown search type: {other}"))),
        }
    }
}

/// A search as typed by the operator.
///
/// The text is trimmed on construction; a query with no text means "no
/// filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    pub kind: SearchKind,
    text: String,
}

impl SearchQuery {
    pub fn new(kind: SearchKind, text: &str) -> Self {
        Self {
            kind,
            text: text.trim().to_string(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
