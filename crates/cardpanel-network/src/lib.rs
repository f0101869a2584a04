//! Device communication layer for the card panel
//!
//! This crate talks to the card storage API exposed by the access-control
//! device. The [`CardService`] trait is the seam the panel depends on;
//! [`HttpCardService`] implements it over HTTP/JSON.
//!
//! # Components
//!
//! - **CardService**: count, list, add, remove, check and reset operations
//! - **HttpCardService**: reqwest-based implementation against the device
//!
//! # Example
//!
//! ```no_run
//! use cardpanel_core::{CardId, CardName, CardSource};
//! use cardpanel_network::{CardService, HttpCardService, HttpCardServiceConfig};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpCardServiceConfig {
//!     base_url: "http://192.168.4.1".to_string(),
//!     timeout: Duration::from_millis(3000),
//! };
//!
//! let service = HttpCardService::new(config)?;
//! service.add_card(CardId::parse("0x3039")?, &CardName::new("John Doe")?).await?;
//! let listing = service.list_cards(CardSource::All).await?;
//! println!("{} cards", listing.cards.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod service;

pub use client::{HttpCardService, HttpCardServiceConfig};
pub use error::ServiceError;
pub use service::CardService;
