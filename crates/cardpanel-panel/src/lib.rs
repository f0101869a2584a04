//! Card panel presentation state.
//!
//! This crate holds everything between the device client and whatever draws
//! the panel: the session (current view, active search, last listing), the
//! controller that validates operator input before calling the device, and
//! the debounced live search.
//!
//! Nothing here is global: a front end owns one [`PanelController`] (and, for
//! type-ahead search, one [`LiveSearch`]) and passes it around explicitly.

pub mod controller;
pub mod debounce;
pub mod live;
pub mod mock;
pub mod session;
pub mod status;
pub mod view;

pub use controller::PanelController;
pub use debounce::Debouncer;
pub use live::{LiveResult, LiveSearch};
pub use session::{PanelSession, SearchTicket};
pub use status::{StatusLevel, StatusMessage};
pub use view::PanelView;
