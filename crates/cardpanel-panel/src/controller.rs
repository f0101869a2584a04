//! Panel operations composed from validation, the device client and search.
//!
//! Every operator action goes through [`PanelController`]. Input is validated
//! here, before any request is sent: a malformed identifier, an over-long name
//! or an attempt to remove the admin card never reaches the device.

use crate::{session::PanelSession, session::SearchTicket, status::StatusMessage, view::PanelView};
use cardpanel_core::{
    CardId, CardListing, CardName, CardSource, Error, Result, ensure_removable,
};
use cardpanel_network::CardService;
use cardpanel_search::SearchQuery;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Shown for any identifier that does not parse or is out of range.
pub const INVALID_CARD_ID_MESSAGE: &str =
    "Card ID must be between 1 and 4294967295 (0x00000001 to 0xFFFFFFFF)";

/// Confirmation question asked before a reset.
pub const RESET_PROMPT: &str = "Are you sure you want to reset the RFID database to default cards? \
     This will remove all custom cards and restore the original default cards.";

/// Confirmation question asked before removing `id`.
#[must_use]
pub fn removal_prompt(id: CardId) -> String {
    let formatted = id.formatted();
    format!(
        "Are you sure you want to remove card ID {} ({})?",
        formatted.hex, formatted.decimal
    )
}

pub struct PanelController<S> {
    service: Arc<S>,
    session: PanelSession,
}

impl<S: CardService> PanelController<S> {
    pub fn new(service: Arc<S>, view: CardSource) -> Self {
        Self {
            service,
            session: PanelSession::new(view),
        }
    }

    /// Shared handle to the device client, e.g. for a [`LiveSearch`](crate::LiveSearch).
    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    pub fn session(&self) -> &PanelSession {
        &self.session
    }

    /// Number of cards stored on the device.
    pub async fn count(&self) -> Result<u32> {
        self.service.card_count().await
    }

    /// Switch to `source` without fetching it. Any active search is dropped.
    pub fn select_view(&mut self, source: CardSource) {
        self.session.set_view(source);
        self.session.clear_search();
    }

    /// Switch to `source` and show it unfiltered.
    pub async fn show(&mut self, source: CardSource) -> Result<PanelView> {
        self.select_view(source);
        self.refresh().await
    }

    /// Switch between the defaults and the full listing.
    pub async fn toggle_view(&mut self) -> Result<PanelView> {
        let next = self.session.view().toggled();
        self.show(next).await
    }

    /// Fetch the current listing again, keeping any active search applied.
    ///
    /// On failure the session is left as it was.
    pub async fn refresh(&mut self) -> Result<PanelView> {
        let listing = self.fetch(self.session.view()).await?;

        let view = match self.session.active_search() {
            Some(query) => PanelView::filtered(&listing, query),
            None => PanelView::unfiltered(listing.clone()),
        };
        self.session.remember(listing);
        Ok(view)
    }

    /// Fetch the current listing and filter it with `query`.
    ///
    /// An empty query shows the listing unfiltered.
    pub async fn search(&mut self, query: SearchQuery) -> Result<PanelView> {
        let ticket = self.begin_search(query);
        let listing = self.fetch(self.session.view()).await?;

        // The controller is borrowed mutably for the whole call, so no newer
        // search can have been issued meanwhile.
        Ok(self
            .apply_search(&ticket, listing.clone())
            .unwrap_or_else(|| PanelView::unfiltered(listing)))
    }

    /// Register a search without fetching, for callers that fetch on their own.
    pub fn begin_search(&mut self, query: SearchQuery) -> SearchTicket {
        let ticket = self.session.begin_search(query);
        debug!(seq = ticket.seq(), query = ticket.query().text(), "Search started");
        ticket
    }

    /// Apply a fetched listing to the search `ticket` was issued for.
    ///
    /// Returns `None` if a newer search was started or the search was cleared
    /// since; the listing is then discarded.
    pub fn apply_search(&mut self, ticket: &SearchTicket, listing: CardListing) -> Option<PanelView> {
        if !self.session.is_current(ticket) {
            warn!(seq = ticket.seq(), "Discarding stale search result");
            return None;
        }

        let view = if ticket.query().is_empty() {
            PanelView::unfiltered(listing.clone())
        } else {
            PanelView::filtered(&listing, ticket.query())
        };
        self.session.remember(listing);
        Some(view)
    }

    /// Filter the last fetched listing again without contacting the device.
    pub fn refilter(&mut self, query: SearchQuery) -> Option<PanelView> {
        let ticket = self.session.begin_search(query);
        let listing = self.session.last_listing()?.clone();
        self.apply_search(&ticket, listing)
    }

    /// Drop the active search and show the current listing again.
    pub async fn clear_search(&mut self) -> Result<PanelView> {
        self.session.clear_search();
        self.refresh().await
    }

    /// Validate and register a card.
    pub async fn add_card(&self, raw_id: &str, raw_name: &str) -> StatusMessage {
        if raw_id.trim().is_empty() || raw_name.trim().is_empty() {
            return StatusMessage::error("Please fill in both Card ID and Name");
        }

        let id = match CardId::parse(raw_id) {
            Ok(id) => id,
            Err(err) => return rejected_id(raw_id, &err),
        };

        let name = match CardName::new(raw_name) {
            Ok(name) => name,
            Err(err) => return StatusMessage::from(&err),
        };

        match self.service.add_card(id, &name).await {
            Ok(()) => {
                info!(card_id = %id, name = %name, "Card added");
                StatusMessage::success("Card added successfully!")
            }
            Err(err) => {
                error!(card_id = %id, error = %err, "Failed to add card");
                StatusMessage::from(&err)
            }
        }
    }

    /// Validate and remove a card.
    ///
    /// `confirm` is asked only once the input has passed validation and the
    /// admin-card check. Returns `None` if it declines.
    pub async fn remove_card<F>(&self, raw_id: &str, confirm: F) -> Option<StatusMessage>
    where
        F: FnOnce(CardId) -> bool,
    {
        if raw_id.trim().is_empty() {
            return Some(StatusMessage::error("Please enter a Card ID to remove"));
        }

        let id = match CardId::parse(raw_id) {
            Ok(id) => id,
            Err(err) => return Some(rejected_id(raw_id, &err)),
        };

        if let Err(err) = ensure_removable(raw_id) {
            warn!(input = raw_id, "Refusing to remove admin card");
            return Some(StatusMessage::from(&err));
        }

        if !confirm(id) {
            debug!(card_id = %id, "Removal cancelled");
            return None;
        }

        let status = match self.service.remove_card(id).await {
            Ok(()) => {
                info!(card_id = %id, "Card removed");
                StatusMessage::success("Card removed successfully!")
            }
            Err(err) => {
                error!(card_id = %id, error = %err, "Failed to remove card");
                StatusMessage::from(&err)
            }
        };
        Some(status)
    }

    /// Restore the default card set after `confirm` agrees.
    pub async fn reset<F>(&self, confirm: F) -> Option<StatusMessage>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            debug!("Reset cancelled");
            return None;
        }

        let status = match self.service.reset_cards().await {
            Ok(()) => {
                info!("Card database reset to defaults");
                StatusMessage::success("Database reset to defaults successfully!")
            }
            Err(err) => {
                error!(error = %err, "Failed to reset card database");
                StatusMessage::error(format!("Failed to reset database: {err}"))
            }
        };
        Some(status)
    }

    /// Returns `true` if the device knows the card `raw_id` refers to.
    pub async fn check_card(&self, raw_id: &str) -> Result<bool> {
        let id = CardId::parse(raw_id)?;
        self.service.card_exists(id).await
    }

    async fn fetch(&self, source: CardSource) -> Result<CardListing> {
        self.service.list_cards(source).await.inspect_err(|err| {
            error!(source = %source, error = %err, "Failed to load cards");
        })
    }
}

fn rejected_id(raw_id: &str, err: &Error) -> StatusMessage {
    warn!(input = raw_id, error = %err, "Rejected card ID");
    match err {
        Error::Parse { .. } | Error::OutOfRange { .. } => StatusMessage::error(INVALID_CARD_ID_MESSAGE),
        other => StatusMessage::from(other),
    }
}
