//! Debounced type-ahead search.
//!
//! Each keystroke is passed to [`LiveSearch::input`]. Once the input has been
//! quiet for the debounce window, the current listing is fetched and filtered
//! on a background task and the result is delivered through
//! [`LiveSearch::next_result`].
//!
//! Every input gets a sequence number. A result is dropped, both before it is
//! sent and when it is received, unless its number is still the latest, so
//! results arrive in input order or not at all.

use crate::{debounce::Debouncer, view::PanelView};
use cardpanel_core::{CardSource, Result};
use cardpanel_network::CardService;
use cardpanel_search::SearchQuery;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Outcome of one debounced search.
#[derive(Debug)]
pub struct LiveResult {
    pub seq: u64,
    pub query: SearchQuery,

    /// A failed fetch leaves the previous display in place
    pub result: Result<PanelView>,
}

pub struct LiveSearch<S> {
    service: Arc<S>,
    source: CardSource,
    debouncer: Debouncer,
    latest: Arc<AtomicU64>,
    tx: mpsc::UnboundedSender<LiveResult>,
    rx: mpsc::UnboundedReceiver<LiveResult>,
}

impl<S> LiveSearch<S>
where
    S: CardService + 'static,
{
    pub fn new(service: Arc<S>, source: CardSource, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            service,
            source,
            debouncer: Debouncer::new(debounce),
            latest: Arc::new(AtomicU64::new(0)),
            tx,
            rx,
        }
    }

    /// Search within a different listing from the next input on.
    pub fn set_source(&mut self, source: CardSource) {
        self.source = source;
    }

    /// Sequence number of the most recent input.
    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Feed the current contents of the search box.
    ///
    /// Restarts the debounce window. An empty query cancels the pending search
    /// and produces no result; the caller shows the unfiltered listing.
    pub fn input(&mut self, query: SearchQuery) -> u64 {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        if query.is_empty() {
            debug!(seq, "Search input cleared");
            self.debouncer.cancel();
            return seq;
        }

        let service = Arc::clone(&self.service);
        let latest = Arc::clone(&self.latest);
        let tx = self.tx.clone();
        let source = self.source;

        self.debouncer.schedule(async move {
            debug!(seq, query = query.text(), source = %source, "Running debounced search");

            let result = service
                .list_cards(source)
                .await
                .map(|listing| PanelView::filtered(&listing, &query));

            if latest.load(Ordering::SeqCst) != seq {
                warn!(seq, "Search superseded before delivery");
                return;
            }

            if tx.send(LiveResult { seq, query, result }).is_err() {
                debug!(seq, "Search result receiver dropped");
            }
        });

        seq
    }

    /// Abandon the pending search, if any.
    pub fn cancel(&mut self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.debouncer.cancel();
    }

    /// Returns `true` while a search is waiting out its window or fetching.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Wait for the result of the latest input.
    ///
    /// Does not return while nothing is pending; callers select on it
    /// alongside their input source.
    pub async fn next_result(&mut self) -> Option<LiveResult> {
        while let Some(result) = self.rx.recv().await {
            if result.seq == self.latest_seq() {
                return Some(result);
            }
            warn!(seq = result.seq, latest = self.latest_seq(), "Discarding stale search result");
        }
        None
    }

    /// Take the result of the latest input if it has already arrived.
    pub fn try_next_result(&mut self) -> Option<LiveResult> {
        while let Ok(result) = self.rx.try_recv() {
            if result.seq == self.latest_seq() {
                return Some(result);
            }
            warn!(seq = result.seq, latest = self.latest_seq(), "Discarding stale search result");
        }
        None
    }
}
