//! Property-based tests for identifier parsing and formatting.
//!
//! Every identifier the panel displays must parse back to itself, whichever
//! of the two rendered forms the operator copies.

use cardpanel_core::{CardId, format_identifier, is_admin_card, parse_identifier};
use proptest::prelude::*;

/// Strategy for identifiers the device accepts (1-4294967295).
fn valid_card_id() -> impl Strategy<Value = u32> {
    1u32..=u32::MAX
}

proptest! {
    /// Property: the decimal rendering parses back to the same identifier.
    #[test]
    fn prop_decimal_roundtrip(id in valid_card_id()) {
        let formatted = format_identifier(id);
        prop_assert_eq!(parse_identifier(&formatted.decimal).unwrap(), u64::from(id));
    }

    /// Property: the `0x` rendering parses back to the same identifier.
    #[test]
    fn prop_hex_roundtrip(id in valid_card_id()) {
        let formatted = format_identifier(id);
        prop_assert_eq!(parse_identifier(&formatted.hex).unwrap(), u64::from(id));
    }

    /// Property: lower-case hex with prefix is accepted the same as upper-case.
    #[test]
    fn prop_hex_case_insensitive(id in valid_card_id()) {
        let lower = format!("0x{id:x}");
        let upper = format!("0X{id:X}");
        prop_assert_eq!(parse_identifier(&lower).unwrap(), parse_identifier(&upper).unwrap());
    }

    /// Property: validated identifiers keep their value.
    #[test]
    fn prop_card_id_parse(id in valid_card_id()) {
        let parsed = CardId::parse(&format_identifier(id).hex).unwrap();
        prop_assert_eq!(parsed.as_u32(), id);
    }

    /// Property: only the reserved value (or its bare hex literal) is the admin card.
    #[test]
    fn prop_admin_guard_by_value(id in valid_card_id()) {
        let formatted = format_identifier(id);
        let expected = id == 0x1234_5678 || formatted.decimal == "12345678";
        prop_assert_eq!(is_admin_card(&formatted.decimal), expected);
        prop_assert_eq!(is_admin_card(&formatted.hex), id == 0x1234_5678);
    }

    /// Property: arbitrary text never panics the parser.
    #[test]
    fn prop_parse_never_panics(input in ".{0,24}") {
        let _ = parse_identifier(&input);
        let _ = is_admin_card(&input);
    }
}
