//! Card identifier parsing and formatting.
//!
//! Operators type identifiers the way they read them off a badge or a
//! reader log: `12345`, `3039` or `0x3039`. This module turns that text into
//! a number and renders numbers back in both notations.
//!
//! # Parsing Rules
//!
//! The input is trimmed and case-folded, then:
//!
//! 1. `0x` prefix: the remainder is read as base-16.
//! 2. 1-8 characters, all hex digits: read as hex when the text contains a
//!    letter `a`-`f`, or when the hex value fits in 32 bits and the decimal
//!    value does not. Otherwise read as decimal.
//! 3. Anything else: read as base-10.
//!
//! Under rule 2 `99999999` stays decimal even though it is also valid hex,
//! while `3039` is decimal 3039 and `30a9` is hex.
//!
//! Parsing does not range-check. Use [`CardId::parse`](crate::CardId::parse)
//! to get a validated identifier.

use crate::{
    Result,
    constants::{HEX_PREFIX, MAX_CARD_ID, MAX_UNPREFIXED_HEX_DIGITS},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;

/// Parse a user-entered identifier in decimal or hexadecimal form.
///
/// Values too large for `u64` saturate to `u64::MAX` so callers report them
/// as out of range rather than as malformed.
///
/// # Errors
/// Returns `Error::Parse` if the text is empty or contains characters that are
/// not valid digits for the selected base.
///
/// # Examples
///
/// ```
/// use cardpanel_core::parse_identifier;
///
/// assert_eq!(parse_identifier("0x3039").unwrap(), 12345);
/// assert_eq!(parse_identifier("abcd").unwrap(), 0xABCD);
/// assert_eq!(parse_identifier(" 12345 ").unwrap(), 12345);
/// assert!(parse_identifier("12g4").is_err());
/// ```
pub fn parse_identifier(raw: &str) -> Result<u64> {
    let normalized = raw.trim().to_lowercase();

    if let Some(digits) = normalized.strip_prefix(HEX_PREFIX) {
        return parse_digits(raw, digits, 16);
    }

    if is_short_hex(&normalized) {
        let hex = parse_digits(raw, &normalized, 16)?;
        if normalized.bytes().any(|b| matches!(b, b'a'..=b'f')) {
            return Ok(hex);
        }

        let decimal = parse_digits(raw, &normalized, 10)?;
        return Ok(if hex <= MAX_CARD_ID && decimal > MAX_CARD_ID {
            hex
        } else {
            decimal
        });
    }

    parse_digits(raw, &normalized, 10)
}

/// Format an identifier as `0x`-prefixed 8-digit uppercase hex and as decimal.
///
/// # Examples
///
/// ```
/// use cardpanel_core::format_identifier;
///
/// let formatted = format_identifier(12345);
/// assert_eq!(formatted.hex, "0x00003039");
/// assert_eq!(formatted.decimal, "12345");
/// ```
#[must_use]
pub fn format_identifier(id: u32) -> FormattedId {
    FormattedId {
        hex: format!("{HEX_PREFIX}{id:08X}"),
        decimal: id.to_string(),
    }
}

/// Both display forms of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormattedId {
    /// `0x` followed by eight uppercase hex digits.
    pub hex: String,

    /// Plain base-10 form.
    pub decimal: String,
}

impl fmt::Display for FormattedId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.hex, self.decimal)
    }
}

fn is_short_hex(s: &str) -> bool {
    (1..=MAX_UNPREFIXED_HEX_DIGITS).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_digits(raw: &str, digits: &str, radix: u32) -> Result<u64> {
    if digits.is_empty() {
        return Err(Error::parse(raw, "no digits"));
    }

    // `from_str_radix` tolerates a leading '+', the device does not.
    if let Some(bad) = digits.chars().find(|c| !c.is_digit(radix)) {
        let base = if radix == 16 { "hexadecimal" } else { "decimal" };
        return Err(Error::parse(
            raw,
            format!("'{bad}' is not a valid {base} digit"),
        ));
    }

    match u64::from_str_radix(digits, radix) {
        Ok(value) => Ok(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        Err(e) => Err(Error::parse(raw, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0x3039", 12345)]
    #[case("0X3039", 12345)]
    #[case("  0x3039\t", 12345)]
    #[case("0x00003039", 12345)]
    #[case("0xffffffff", 0xFFFF_FFFF)]
    #[case("0x1", 1)]
    fn test_parse_prefixed_hex(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_identifier(input).unwrap(), expected);
    }

    #[rstest]
    #[case("abcd", 0xABCD)]
    #[case("ABCD", 0xABCD)]
    #[case("1a", 0x1A)]
    #[case("deadbeef", 0xDEAD_BEEF)]
    fn test_parse_unprefixed_hex_with_letters(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_identifier(input).unwrap(), expected);
    }

    #[rstest]
    #[case("3039", 3039)]
    #[case("12345", 12345)]
    #[case("99999999", 99_999_999)]
    #[case("00000001", 1)]
    #[case("0", 0)]
    fn test_parse_all_digits_short_prefers_decimal(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_identifier(input).unwrap(), expected);
    }

    #[rstest]
    #[case("305419896", 305_419_896)]
    #[case("4294967295", 4_294_967_295)]
    #[case("4294967296", 4_294_967_296)]
    fn test_parse_long_decimal(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_identifier(input).unwrap(), expected);
    }

    #[test]
    fn test_parse_huge_values_saturate() {
        assert_eq!(parse_identifier("99999999999999999999999").unwrap(), u64::MAX);
        assert_eq!(parse_identifier("0xffffffffffffffffff").unwrap(), u64::MAX);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("0x")]
    #[case("0xzz")]
    #[case("0x12 34")]
    #[case("12g4")]
    #[case("abcdef123")] // too long for unprefixed hex, not decimal either
    #[case("-5")]
    #[case("+5")]
    #[case("1.5")]
    fn test_parse_invalid(#[case] input: &str) {
        let err = parse_identifier(input).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "unexpected error: {err:?}");
    }

    #[test]
    fn test_parse_error_keeps_raw_input() {
        match parse_identifier("0xZZ") {
            Err(Error::Parse { input, .. }) => assert_eq!(input, "0xZZ"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[rstest]
    #[case(1, "0x00000001", "1")]
    #[case(12345, "0x00003039", "12345")]
    #[case(0x1234_5678, "0x12345678", "305419896")]
    #[case(u32::MAX, "0xFFFFFFFF", "4294967295")]
    #[case(0, "0x00000000", "0")]
    fn test_format_identifier(#[case] id: u32, #[case] hex: &str, #[case] decimal: &str) {
        let formatted = format_identifier(id);
        assert_eq!(formatted.hex, hex);
        assert_eq!(formatted.decimal, decimal);
    }

    #[test]
    fn test_formatted_display() {
        assert_eq!(format_identifier(255).to_string(), "0x000000FF (255)");
    }
}
