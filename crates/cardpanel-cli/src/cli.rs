//! Command-line arguments.

use cardpanel_core::CardSource;
use cardpanel_search::SearchKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage the cards stored on an RFID access device.
#[derive(Debug, Parser)]
#[command(name = "cardpanel", version, about)]
pub struct Cli {
    /// Device base URL (overrides the config file)
    #[arg(long, env = "CARDPANEL_URL", global = true)]
    pub url: Option<String>,

    /// Config file path (toml)
    #[arg(short, long, env = "CARDPANEL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Log level override (e.g. "info", "debug", "trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show how many cards are stored
    Count,

    /// List cards
    List {
        /// Every stored card instead of the default set
        #[arg(long, conflicts_with = "defaults")]
        all: bool,

        /// Only the default card set
        #[arg(long)]
        defaults: bool,
    },

    /// Register a card (ID in decimal, hex, or 0x-prefixed hex)
    Add { id: String, name: String },

    /// Remove a card
    Remove {
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Restore the default card set, removing every custom card
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Filter the card listing by ID or name
    Search {
        query: String,

        /// Field to match: id or name
        #[arg(long, default_value = "id")]
        by: SearchKind,

        /// Search every stored card instead of the default set
        #[arg(long)]
        all: bool,
    },

    /// Type-ahead search: every line read from stdin replaces the query
    ///
    /// `:view` switches listings and `:by id|name` changes the search type.
    Live {
        /// Field to match: id or name
        #[arg(long, default_value = "id")]
        by: SearchKind,

        /// Search every stored card instead of the default set
        #[arg(long)]
        all: bool,
    },

    /// Ask the device whether it knows a card
    Check { id: String },

    /// Show an identifier in hex and decimal form
    ShowId { id: String },
}

impl Command {
    /// Listing the command works on, given the configured default.
    #[must_use]
    pub fn source(&self, default_view: CardSource) -> CardSource {
        match self {
            Command::List { all: true, .. }
            | Command::Search { all: true, .. }
            | Command::Live { all: true, .. } => CardSource::All,
            Command::List { defaults: true, .. } => CardSource::Defaults,
            _ => default_view,
        }
    }
}
