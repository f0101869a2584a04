use cardpanel_core::{CardId, CardListing, CardName, CardSource, Result};
use std::future::Future;

/// Remote card storage operations the panel depends on.
///
/// Implementations perform no client-side validation: identifiers and names
/// arrive already validated, and admin-card protection is enforced by the
/// caller before [`remove_card`](CardService::remove_card) is reached.
///
/// Futures are `Send` so searches can run on spawned tasks.
pub trait CardService: Send + Sync {
    /// Number of stored cards. A device that omits the count reports 0.
    fn card_count(&self) -> impl Future<Output = Result<u32>> + Send;

    /// Fetch the default card set or every stored card.
    fn list_cards(&self, source: CardSource) -> impl Future<Output = Result<CardListing>> + Send;

    /// Register a new card.
    fn add_card(&self, id: CardId, name: &CardName) -> impl Future<Output = Result<()>> + Send;

    /// Remove a card by identifier.
    fn remove_card(&self, id: CardId) -> impl Future<Output = Result<()>> + Send;

    /// Returns `true` if the device knows the card.
    fn card_exists(&self, id: CardId) -> impl Future<Output = Result<bool>> + Send;

    /// Restore the default card set, discarding custom cards.
    fn reset_cards(&self) -> impl Future<Output = Result<()>> + Send;
}
