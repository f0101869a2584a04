use crate::{
    Result,
    codec::{FormattedId, format_identifier, parse_identifier},
    constants::{ADMIN_CARD_ID, MAX_CARD_ID, MAX_CARD_NAME_LENGTH, MIN_CARD_ID, UNKNOWN_TIMESTAMP},
    error::Error,
};
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card identifier (32-bit, never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u32")]
pub struct CardId(u32);

impl CardId {
    /// Create a card ID with range validation.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if the value is outside 1-4294967295.
    pub fn new(value: u64) -> Result<Self> {
        if !(MIN_CARD_ID..=MAX_CARD_ID).contains(&value) {
            return Err(Error::OutOfRange { value });
        }
        // Range checked above.
        Ok(CardId(value as u32))
    }

    /// Parse and validate a user-entered identifier.
    ///
    /// # Errors
    /// Returns `Error::Validation` for blank input, `Error::Parse` for malformed
    /// text and `Error::OutOfRange` for values outside 1-4294967295.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardpanel_core::CardId;
    ///
    /// let id = CardId::parse("0x3039").unwrap();
    /// assert_eq!(id.as_u32(), 12345);
    /// assert!(CardId::parse("0").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(Error::Validation("Please enter a Card ID".to_string()));
        }
        CardId::new(parse_identifier(raw)?)
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Both display forms of this identifier.
    #[must_use]
    pub fn formatted(&self) -> FormattedId {
        format_identifier(self.0)
    }

    /// Returns `true` for the reserved administrator card.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.0 == ADMIN_CARD_ID
    }
}

impl TryFrom<u64> for CardId {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        CardId::new(value)
    }
}

impl From<CardId> for u32 {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl std::str::FromStr for CardId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CardId::parse(s)
    }
}

/// Card label (1-31 bytes of UTF-8)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardName(String);

impl CardName {
    /// Create a card name with validation.
    ///
    /// The name is trimmed before validation. Length is counted in UTF-8 bytes,
    /// since the device truncates anything that does not fit its name buffer.
    ///
    /// # Errors
    /// Returns `Error::Validation` if the name is blank or longer than 31 bytes.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::Validation("Please enter a card name".to_string()));
        }

        if name.len() > MAX_CARD_NAME_LENGTH {
            return Err(Error::Validation(format!(
                "Card name must be {MAX_CARD_NAME_LENGTH} characters or less"
            )));
        }

        Ok(CardName(name.to_string()))
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CardName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CardName::new(s)
    }
}

/// A registered credential as reported by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub active: bool,

    /// Seconds since the Unix epoch, if the device knows when the card was stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl CardRecord {
    /// `Active` or `Inactive`.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }

    /// Local calendar date of the timestamp, or `Unknown`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.timestamp
            .filter(|ts| *ts != 0)
            .and_then(|ts| Local.timestamp_opt(ts, 0).single())
            .map_or_else(
                || UNKNOWN_TIMESTAMP.to_string(),
                |dt| dt.format("%Y-%m-%d").to_string(),
            )
    }
}

/// Which listing endpoint a set of cards came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSource {
    /// Factory/reset card set
    #[default]
    Defaults,
    /// Every stored card
    All,
}

impl CardSource {
    /// The other view.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            CardSource::Defaults => CardSource::All,
            CardSource::All => CardSource::Defaults,
        }
    }
}

impl fmt::Display for CardSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CardSource::Defaults => write!(f, "defaults"),
            CardSource::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for CardSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "defaults" | "default" => Ok(CardSource::Defaults),
            "all" => Ok(CardSource::All),
            other => Err(Error::Config(format!("Invalid card view: {other}"))),
        }
    }
}

/// Cards returned by one listing call, tagged with their source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardListing {
    pub source: CardSource,
    pub cards: Vec<CardRecord>,
}

impl CardListing {
    #[must_use]
    pub fn new(source: CardSource, cards: Vec<CardRecord>) -> Self {
        Self { source, cards }
    }

    /// Records of a defaults listing are the default cards.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.source == CardSource::Defaults
    }
}
