use cardpanel_core::{Error, constants::SUCCESS_STATUS_HIDE_MS};
use cardpanel_search::{SearchOutcome, SearchSummary};
use std::fmt;
use std::time::Duration;

/// Visual weight of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Error,
    Info,
}

/// One line of operator feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    /// Success messages disappear on their own; everything else stays until replaced.
    #[must_use]
    pub fn auto_hide(&self) -> Option<Duration> {
        match self.level {
            StatusLevel::Success => Some(Duration::from_millis(SUCCESS_STATUS_HIDE_MS)),
            StatusLevel::Error | StatusLevel::Info => None,
        }
    }
}

impl From<&Error> for StatusMessage {
    fn from(err: &Error) -> Self {
        StatusMessage::error(err.to_string())
    }
}

impl From<&SearchSummary> for StatusMessage {
    fn from(summary: &SearchSummary) -> Self {
        let text = summary.message();
        match summary.outcome() {
            SearchOutcome::NoMatches => StatusMessage::error(text),
            SearchOutcome::AllMatched => StatusMessage::info(text),
            SearchOutcome::Partial => StatusMessage::success(text),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
