use cardpanel_core::{CardListing, CardRecord, CardSource};
use cardpanel_search::{SearchQuery, SearchSummary, filter};

/// What the panel should currently display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// Listing the rows were taken from
    pub source: CardSource,

    /// Rows to show, in device order
    pub cards: Vec<CardRecord>,

    /// Set when the rows are the result of a search
    pub search: Option<SearchSummary>,
}

impl PanelView {
    /// Show a listing as-is.
    pub fn unfiltered(listing: CardListing) -> Self {
        Self {
            source: listing.source,
            cards: listing.cards,
            search: None,
        }
    }

    /// Show the cards of `listing` that match `query`.
    pub fn filtered(listing: &CardListing, query: &SearchQuery) -> Self {
        let cards: Vec<CardRecord> = filter(&listing.cards, query).into_iter().cloned().collect();
        let summary = SearchSummary::new(query.clone(), cards.len(), listing.cards.len());

        Self {
            source: listing.source,
            cards,
            search: Some(summary),
        }
    }

    /// Rows of the defaults view get a `DEFAULT` badge.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.source == CardSource::Defaults
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
