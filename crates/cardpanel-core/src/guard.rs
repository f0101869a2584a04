//! Administrator card protection.
//!
//! The admin card must survive every removal attempt. The check is done on
//! the raw input, before any request leaves the panel, and does not rely on
//! the device refusing the request.

use crate::{
    Result,
    codec::{format_identifier, parse_identifier},
    constants::{ADMIN_CARD_ID, ADMIN_CARD_LITERALS},
    error::Error,
};

/// Returns `true` if `raw` refers to the administrator card in any notation.
///
/// Matches when the parsed value equals [`ADMIN_CARD_ID`], or when the
/// normalized text is one of [`ADMIN_CARD_LITERALS`]. The literal match covers
/// `12345678`, which the codec reads as decimal.
///
/// # Examples
///
/// ```
/// use cardpanel_core::is_admin_card;
///
/// assert!(is_admin_card("305419896"));
/// assert!(is_admin_card("0x12345678"));
/// assert!(is_admin_card("12345678"));
/// assert!(!is_admin_card("1"));
/// ```
#[must_use]
pub fn is_admin_card(raw: &str) -> bool {
    if parse_identifier(raw).is_ok_and(|id| id == u64::from(ADMIN_CARD_ID)) {
        return true;
    }

    let normalized = raw.trim().to_lowercase();
    ADMIN_CARD_LITERALS.contains(&normalized.as_str())
}

/// Reject removal of the administrator card.
///
/// # Errors
/// Returns `Error::ProtectedCard` if `raw` refers to the admin card.
pub fn ensure_removable(raw: &str) -> Result<()> {
    if is_admin_card(raw) {
        let formatted = format_identifier(ADMIN_CARD_ID);
        return Err(Error::ProtectedCard {
            hex: formatted.hex,
            decimal: ADMIN_CARD_ID,
        });
    }
    Ok(())
}
