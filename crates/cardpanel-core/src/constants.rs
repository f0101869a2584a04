//! Core constants for the card management panel.
//!
//! This module centralizes the limits and reserved values shared by the
//! identifier codec, the admin guard, the search engine and the device client.
//! The values mirror what the device firmware enforces, so changing them
//! silently breaks compatibility with deployed readers.
//!
//! # Usage
//!
//! ```
//! use cardpanel_core::constants::*;
//!
//! fn in_range(id: u64) -> bool {
//!     (MIN_CARD_ID..=MAX_CARD_ID).contains(&id)
//! }
//!
//! assert!(in_range(1));
//! assert!(!in_range(0));
//! assert_eq!(ADMIN_CARD_ID, 0x1234_5678);
//! ```

// ============================================================================
// Card Identifiers
// ============================================================================

/// Smallest identifier the device accepts.
///
/// Identifier `0` is used by the firmware as "missing" and is always rejected.
pub const MIN_CARD_ID: u64 = 1;

/// Largest identifier the device accepts (32-bit unsigned).
pub const MAX_CARD_ID: u64 = u32::MAX as u64;

/// Prefix that forces hexadecimal interpretation of an identifier.
///
/// Matching is done on the case-folded input, so `0X3039` is accepted too.
pub const HEX_PREFIX: &str = "0x";

/// Maximum length of an unprefixed identifier that may still be read as hex.
///
/// Eight hex digits cover the full 32-bit range; anything longer is parsed as
/// decimal.
pub const MAX_UNPREFIXED_HEX_DIGITS: usize = 8;

// ============================================================================
// Administrator Card
// ============================================================================

/// Reserved identifier of the administrator card.
///
/// The administrator card can never be removed from the panel, whatever form
/// the identifier is typed in.
///
/// # Examples
///
/// ```
/// use cardpanel_core::constants::{ADMIN_CARD_HEX, ADMIN_CARD_ID};
///
/// assert_eq!(ADMIN_CARD_ID, 305_419_896);
/// assert_eq!(format!("0x{ADMIN_CARD_ID:08X}"), ADMIN_CARD_HEX);
/// ```
pub const ADMIN_CARD_ID: u32 = 0x1234_5678;

/// Canonical hex form of [`ADMIN_CARD_ID`].
pub const ADMIN_CARD_HEX: &str = "0x12345678";

/// Literal inputs that always denote the admin card, after trimming and case folding.
///
/// `12345678` is included on purpose: it is the admin hex value typed without
/// prefix, which the codec would otherwise read as decimal.
pub const ADMIN_CARD_LITERALS: [&str; 2] = ["0x12345678", "12345678"];

// ============================================================================
// Card Names
// ============================================================================

/// Maximum card name length in bytes.
///
/// The firmware stores names in a 32-byte buffer including the terminator.
pub const MAX_CARD_NAME_LENGTH: usize = 31;

// ============================================================================
// Device API
// ============================================================================

/// Card count endpoint.
pub const PATH_CARD_COUNT: &str = "/cards/count";

/// Default card listing endpoint.
pub const PATH_CARDS_DEFAULTS: &str = "/cards/defaults";

/// Full card listing endpoint.
pub const PATH_CARDS_ALL: &str = "/cards/get";

/// Card creation endpoint.
pub const PATH_CARD_ADD: &str = "/cards/add";

/// Card removal endpoint (takes `?id=`).
pub const PATH_CARD_REMOVE: &str = "/cards/remove";

/// Card existence check endpoint.
pub const PATH_CARD_CHECK: &str = "/cards/check";

/// Card database reset endpoint.
pub const PATH_CARDS_RESET: &str = "/cards/reset";

/// Default device address when the panel runs against the access point.
pub const DEFAULT_DEVICE_URL: &str = "http://192.168.4.1";

/// Default timeout for device requests in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 3000;

// ============================================================================
// Search & Status
// ============================================================================

/// Quiet window before a live search is executed, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// How long a success status stays visible, in milliseconds.
pub const SUCCESS_STATUS_HIDE_MS: u64 = 3000;

/// Text shown for records without a timestamp.
pub const UNKNOWN_TIMESTAMP: &str = "Unknown";
