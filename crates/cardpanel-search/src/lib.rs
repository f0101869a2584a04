//! Client-side card search for the management panel.
//!
//! Searching never goes back to the device: the panel fetches a listing once
//! and this crate narrows it down, marks the matched text and summarizes the
//! outcome for the status line.
//!
//! # Components
//!
//! - [`filter`]: select cards by identifier or name
//! - [`highlight`]: split text into matched and unmatched segments
//! - [`SearchSummary`]: classify a completed search for display
//!
//! # Example
//!
//! ```
//! use cardpanel_core::{CardId, CardRecord};
//! use cardpanel_search::{SearchKind, SearchQuery, filter, highlight};
//!
//! let cards = vec![CardRecord {
//!     id: CardId::new(12345).unwrap(),
//!     name: "John Doe".to_string(),
//!     active: true,
//!     timestamp: None,
//! }];
//!
//! let query = SearchQuery::new(SearchKind::Name, "john");
//! assert_eq!(filter(&cards, &query).len(), 1);
//!
//! let segments: Vec<_> = highlight("John Doe", "Jo").collect();
//! assert_eq!(segments[0].text, "Jo");
//! assert!(segments[0].is_match);
//! ```

mod filter;
mod highlight;
mod query;
mod summary;

pub use filter::{filter, matches};
pub use highlight::{Highlight, IdHighlight, Segment, highlight, highlight_id};
pub use query::{SearchKind, SearchQuery};
pub use summary::{SearchOutcome, SearchSummary};
