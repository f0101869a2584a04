//! In-memory card service for tests and offline development.
//!
//! [`MockCardService`] behaves like a device with a fixed default card set
//! plus any cards added at runtime. Every call is recorded so tests can assert
//! which requests reached the "device" and which were stopped by validation.

use cardpanel_core::{CardId, CardListing, CardName, CardRecord, CardSource, Error, Result};
use cardpanel_network::CardService;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

/// A request that reached the mock device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Count,
    List(CardSource),
    Add { id: CardId, name: String },
    Remove(CardId),
    Exists(CardId),
    Reset,
}

#[derive(Debug, Default)]
struct MockState {
    factory: Vec<CardRecord>,
    defaults: Vec<CardRecord>,
    custom: Vec<CardRecord>,
    calls: Vec<MockCall>,
    fail_next: Option<Error>,
    delay: Option<Duration>,
}

impl MockState {
    fn all(&self) -> Vec<CardRecord> {
        self.defaults.iter().chain(&self.custom).cloned().collect()
    }

    fn contains(&self, id: CardId) -> bool {
        self.defaults.iter().chain(&self.custom).any(|card| card.id == id)
    }
}

/// Simulated card storage device.
///
/// # Examples
///
/// ```
/// use cardpanel_core::{CardId, CardRecord};
/// use cardpanel_panel::mock::MockCardService;
///
/// let device = MockCardService::with_defaults(vec![CardRecord {
///     id: CardId::new(1).unwrap(),
///     name: "Front desk".into(),
///     active: true,
///     timestamp: None,
/// }]);
/// assert!(device.calls().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MockCardService {
    state: Mutex<MockState>,
}

impl MockCardService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a device whose default set (and reset target) is `defaults`.
    pub fn with_defaults(defaults: Vec<CardRecord>) -> Self {
        Self {
            state: Mutex::new(MockState {
                factory: defaults.clone(),
                defaults,
                ..Default::default()
            }),
        }
    }

    /// Make the next request fail with `err` instead of touching the cards.
    pub fn fail_next(&self, err: Error) {
        self.lock().fail_next = Some(err);
    }

    /// Delay every response by `delay`.
    pub fn set_delay(&self, delay: Duration) {
        self.lock().delay = Some(delay);
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    /// Cards added after construction.
    pub fn custom_cards(&self) -> Vec<CardRecord> {
        self.lock().custom.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not hide the state from the others.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record `call`, wait out the configured delay, then apply `op`.
    async fn handle<T>(
        &self,
        call: MockCall,
        op: impl FnOnce(&mut MockState) -> Result<T>,
    ) -> Result<T> {
        let delay = {
            let mut state = self.lock();
            debug!(?call, "Mock device request");
            state.calls.push(call);
            state.delay
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        if let Some(err) = state.fail_next.take() {
            return Err(err);
        }
        op(&mut state)
    }
}

impl CardService for MockCardService {
    async fn card_count(&self) -> Result<u32> {
        self.handle(MockCall::Count, |state| {
            let count = state.defaults.len() + state.custom.len();
            Ok(u32::try_from(count).unwrap_or(u32::MAX))
        })
        .await
    }

    async fn list_cards(&self, source: CardSource) -> Result<CardListing> {
        self.handle(MockCall::List(source), |state| {
            let cards = match source {
                CardSource::Defaults => state.defaults.clone(),
                CardSource::All => state.all(),
            };
            Ok(CardListing::new(source, cards))
        })
        .await
    }

    async fn add_card(&self, id: CardId, name: &CardName) -> Result<()> {
        let call = MockCall::Add {
            id,
            name: name.to_string(),
        };

        self.handle(call, |state| {
            if state.contains(id) {
                return Err(Error::Transport {
                    status: Some(400),
                    message: "Card already exists".to_string(),
                });
            }
            state.custom.push(CardRecord {
                id,
                name: name.to_string(),
                active: true,
                timestamp: None,
            });
            Ok(())
        })
        .await
    }

    async fn remove_card(&self, id: CardId) -> Result<()> {
        self.handle(MockCall::Remove(id), |state| {
            let before = state.custom.len() + state.defaults.len();
            state.custom.retain(|card| card.id != id);
            state.defaults.retain(|card| card.id != id);

            if state.custom.len() + state.defaults.len() == before {
                return Err(Error::Transport {
                    status: Some(404),
                    message: "Card not found".to_string(),
                });
            }
            Ok(())
        })
        .await
    }

    async fn card_exists(&self, id: CardId) -> Result<bool> {
        self.handle(MockCall::Exists(id), |state| Ok(state.contains(id)))
            .await
    }

    async fn reset_cards(&self) -> Result<()> {
        self.handle(MockCall::Reset, |state| {
            state.custom.clear();
            state.defaults.clone_from(&state.factory);
            Ok(())
        })
        .await
    }
}
