use crate::query::{SearchKind, SearchQuery};
use cardpanel_core::{CardRecord, parse_identifier};

/// Select the cards matching `query`, preserving their order.
///
/// An empty query selects every card.
///
/// Identifier searches match when the query parses to exactly the card's id,
/// or when it appears inside the decimal, bare hex or `0x` hex form of the id.
/// A query that does not parse as an identifier only loses the exact match;
/// it is never an error.
pub fn filter<'a>(cards: &'a [CardRecord], query: &SearchQuery) -> Vec<&'a CardRecord> {
    if query.is_empty() {
        return cards.iter().collect();
    }

    match query.kind {
        SearchKind::Id => {
            let needle = query.text().to_lowercase();
            let exact = parse_identifier(query.text()).ok();
            cards
                .iter()
                .filter(|card| id_matches(card, exact, &needle))
                .collect()
        }
        SearchKind::Name => {
            let needle = query.text().to_lowercase();
            cards
                .iter()
                .filter(|card| name_matches(card, &needle))
                .collect()
        }
    }
}

/// Returns `true` if a single card matches `query`.
#[must_use]
pub fn matches(card: &CardRecord, query: &SearchQuery) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.text().to_lowercase();
    match query.kind {
        SearchKind::Id => id_matches(card, parse_identifier(query.text()).ok(), &needle),
        SearchKind::Name => name_matches(card, &needle),
    }
}

fn id_matches(card: &CardRecord, exact: Option<u64>, needle: &str) -> bool {
    let id = card.id.as_u32();
    if exact == Some(u64::from(id)) {
        return true;
    }

    let hex = format!("{id:x}");
    id.to_string().contains(needle) || hex.contains(needle) || format!("0x{hex}").contains(needle)
}

fn name_matches(card: &CardRecord, needle: &str) -> bool {
    card.name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardpanel_core::CardId;
    use rstest::rstest;

    fn card(id: u32, name: &str) -> CardRecord {
        CardRecord {
            id: CardId::new(u64::from(id)).unwrap(),
            name: name.to_string(),
            active: true,
            timestamp: None,
        }
    }

    fn sample_cards() -> Vec<CardRecord> {
        vec![
            card(12345, "John Doe"),
            card(0x30390, "johnny"),
            card(3039, "Jane"),
            card(1, "Reader test"),
            card(0x1234_5678, "Admin"),
        ]
    }

    fn ids(cards: &[&CardRecord]) -> Vec<u32> {
        cards.iter().map(|c| c.id.as_u32()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let cards = sample_cards();
        let result = filter(&cards, &SearchQuery::new(SearchKind::Id, ""));
        assert_eq!(result.len(), cards.len());
        assert!(result.iter().zip(&cards).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_empty_card_list() {
        let cards: Vec<CardRecord> = Vec::new();
        assert!(filter(&cards, &SearchQuery::new(SearchKind::Id, "3039")).is_empty());
        assert!(filter(&cards, &SearchQuery::new(SearchKind::Name, "john")).is_empty());
    }

    #[test]
    fn test_id_search_matches_hex_and_decimal_substrings() {
        let cards = sample_cards();
        let result = filter(&cards, &SearchQuery::new(SearchKind::Id, "3039"));
        // 12345 is 0x3039, 0x30390 contains "3039", 3039 matches exactly.
        assert_eq!(ids(&result), vec![12345, 0x30390, 3039]);
    }

    #[test]
    fn test_id_search_prefixed_hex() {
        let cards = sample_cards();
        let result = filter(&cards, &SearchQuery::new(SearchKind::Id, "0x3039"));
        // Exact match on 12345, plus "0x3039" inside "0x30390".
        assert_eq!(ids(&result), vec![12345, 0x30390]);
    }

    #[test]
    fn test_id_search_case_insensitive_hex() {
        let cards = sample_cards();
        let result = filter(&cards, &SearchQuery::new(SearchKind::Id, "0X12345678"));
        assert_eq!(ids(&result), vec![0x1234_5678]);
    }

    #[test]
    fn test_id_search_unparseable_falls_back_to_substring() {
        let cards = sample_cards();
        let result = filter(&cards, &SearchQuery::new(SearchKind::Id, "x303"));
        assert_eq!(ids(&result), vec![12345, 0x30390]);

        let none = filter(&cards, &SearchQuery::new(SearchKind::Id, "zzz"));
        assert!(none.is_empty());
    }

    #[rstest]
    #[case("john", vec![12345, 0x30390])]
    #[case("JOHN", vec![12345, 0x30390])]
    #[case("doe", vec![12345])]
    #[case("jane", vec![3039])]
    #[case("nobody", vec![])]
    fn test_name_search(#[case] text: &str, #[case] expected: Vec<u32>) {
        let cards = sample_cards();
        let result = filter(&cards, &SearchQuery::new(SearchKind::Name, text));
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_name_search_ignores_ids() {
        let cards = sample_cards();
        assert!(filter(&cards, &SearchQuery::new(SearchKind::Name, "3039")).is_empty());
    }

    #[test]
    fn test_matches_single_card() {
        let john = card(12345, "John Doe");
        assert!(matches(&john, &SearchQuery::new(SearchKind::Name, "doe")));
        assert!(matches(&john, &SearchQuery::new(SearchKind::Id, "12345")));
        assert!(!matches(&john, &SearchQuery::new(SearchKind::Id, "999")));
        assert!(matches(&john, &SearchQuery::default()));
    }
}
