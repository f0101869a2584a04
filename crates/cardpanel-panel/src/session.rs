//! Explicit panel session state.
//!
//! The session records which listing the operator is looking at, the search
//! they have typed, and the last listing fetched from the device. Searches
//! are numbered; a search result is only applied while its number is still
//! the latest one issued, so a slow reply can never overwrite a newer query.

use cardpanel_core::{CardListing, CardSource};
use cardpanel_search::SearchQuery;

/// Proof that a search was issued, checked again when its result arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: SearchQuery,
}

impl SearchTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

#[derive(Debug, Clone, Default)]
pub struct PanelSession {
    view: CardSource,
    search: Option<SearchQuery>,
    seq: u64,
    last_listing: Option<CardListing>,
}

impl PanelSession {
    pub fn new(view: CardSource) -> Self {
        Self {
            view,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn view(&self) -> CardSource {
        self.view
    }

    /// Switch listings. The cached listing belongs to the old view and is dropped.
    pub fn set_view(&mut self, view: CardSource) {
        if self.view != view {
            self.last_listing = None;
        }
        self.view = view;
    }

    /// The search currently typed, if any.
    #[must_use]
    pub fn active_search(&self) -> Option<&SearchQuery> {
        self.search.as_ref()
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Record a new search and invalidate every earlier ticket.
    ///
    /// An empty query clears the search.
    pub fn begin_search(&mut self, query: SearchQuery) -> SearchTicket {
        self.seq += 1;
        self.search = (!query.is_empty()).then(|| query.clone());
        SearchTicket {
            seq: self.seq,
            query,
        }
    }

    /// Drop the active search and invalidate outstanding tickets.
    pub fn clear_search(&mut self) {
        self.seq += 1;
        self.search = None;
    }

    /// Returns `true` if no search was issued or cleared after `ticket`.
    #[must_use]
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.seq
    }

    /// Keep the listing for re-filtering without another fetch.
    pub fn remember(&mut self, listing: CardListing) {
        self.last_listing = Some(listing);
    }

    #[must_use]
    pub fn last_listing(&self) -> Option<&CardListing> {
        self.last_listing.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardpanel_search::SearchKind;

    #[test]
    fn test_newer_search_invalidates_older_ticket() {
        let mut session = PanelSession::new(CardSource::All);
        let first = session.begin_search(SearchQuery::new(SearchKind::Name, "jo"));
        let second = session.begin_search(SearchQuery::new(SearchKind::Name, "joh"));

        assert!(!session.is_current(&first));
        assert!(session.is_current(&second));
        assert_eq!(session.active_search().unwrap().text(), "joh");
        assert!(second.seq() > first.seq());
    }

    #[test]
    fn test_empty_query_clears_search() {
        let mut session = PanelSession::default();
        session.begin_search(SearchQuery::new(SearchKind::Id, "12"));
        assert!(session.is_searching());

        let ticket = session.begin_search(SearchQuery::new(SearchKind::Id, " "));
        assert!(!session.is_searching());
        assert!(session.is_current(&ticket));
    }

    #[test]
    fn test_clear_search_invalidates_ticket() {
        let mut session = PanelSession::default();
        let ticket = session.begin_search(SearchQuery::new(SearchKind::Id, "12"));
        session.clear_search();

        assert!(!session.is_current(&ticket));
        assert!(session.active_search().is_none());
    }

    #[test]
    fn test_view_change_drops_cached_listing() {
        let mut session = PanelSession::new(CardSource::Defaults);
        session.remember(CardListing::new(CardSource::Defaults, vec![]));

        session.set_view(CardSource::Defaults);
        assert!(session.last_listing().is_some());

        session.set_view(CardSource::All);
        assert!(session.last_listing().is_none());
        assert_eq!(session.view(), CardSource::All);
    }
}
