pub mod codec;
pub mod constants;
pub mod error;
pub mod guard;
pub mod types;

pub use codec::{FormattedId, format_identifier, parse_identifier};
pub use error::{Error, Result};
pub use guard::{ensure_removable, is_admin_card};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
