//! `cardpanel` command-line front end.
//!
//! The binary in `main.rs` only parses arguments, sets up logging and builds
//! the device client; everything it runs lives here so it can be tested
//! against an in-memory device.

pub mod cli;
pub mod commands;
pub mod config;
pub mod prompt;
pub mod render;

pub use cli::{Cli, Command};
pub use commands::{run_command, run_live};
pub use config::PanelConfig;
