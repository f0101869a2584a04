//! Terminal output for card listings, identifiers and status lines.

use cardpanel_core::{CardId, CardRecord, is_admin_card, parse_identifier};
use cardpanel_panel::{PanelView, StatusLevel, StatusMessage};
use cardpanel_search::{Highlight, SearchKind, SearchQuery, highlight, highlight_id};
use std::io::{self, Write};

/// Badge appended to names in the defaults view.
pub const DEFAULT_BADGE: &str = "[DEFAULT]";

/// Render highlighted text with matched spans wrapped in `[` `]`.
pub fn marked(segments: Highlight<'_>) -> String {
    segments
        .map(|segment| {
            if segment.is_match {
                format!("[{}]", segment.text)
            } else {
                segment.text.to_string()
            }
        })
        .collect()
}

/// One table row: identifier, name, status and date, tab separated.
pub fn card_row(card: &CardRecord, is_default: bool, query: Option<&SearchQuery>) -> String {
    let formatted = card.id.formatted();

    let (hex, decimal, name) = match query.filter(|q| !q.is_empty()) {
        Some(query) if query.kind == SearchKind::Id => {
            let marks = highlight_id(card.id, query.text());
            (marked(marks.hex()), marked(marks.decimal()), card.name.clone())
        }
        Some(query) => {
            let marks = highlight(&card.name, query.text());
            let name = if marks.has_match() {
                marked(marks)
            } else {
                card.name.clone()
            };
            (formatted.hex, formatted.decimal, name)
        }
        None => (formatted.hex, formatted.decimal, card.name.clone()),
    };

    let badge = if is_default {
        format!(" {DEFAULT_BADGE}")
    } else {
        String::new()
    };

    format!(
        "{hex} ({decimal})\t{name}{badge}\t{}\t{}",
        card.status_label(),
        card.date_label()
    )
}

pub fn write_view(w: &mut impl Write, view: &PanelView) -> io::Result<()> {
    let query = view.search.as_ref().map(|summary| &summary.query);

    if view.is_empty() {
        if view.search.is_none() {
            writeln!(w, "No cards registered")?;
        }
    } else {
        writeln!(w, "Showing {} cards", view.source)?;
        for card in &view.cards {
            writeln!(w, "{}", card_row(card, view.is_default(), query))?;
        }
    }

    if let Some(summary) = &view.search {
        write_status(w, &StatusMessage::from(summary))?;
    }
    Ok(())
}

pub fn write_status(w: &mut impl Write, status: &StatusMessage) -> io::Result<()> {
    let tag = match status.level {
        StatusLevel::Success => "ok",
        StatusLevel::Error => "error",
        StatusLevel::Info => "info",
    };
    writeln!(w, "[{tag}] {status}")
}

/// Both forms of an identifier and whether it is the protected admin card.
pub fn write_identifier(w: &mut impl Write, raw: &str) -> anyhow::Result<()> {
    let value = parse_identifier(raw)?;
    let id = CardId::new(value)?;
    let formatted = id.formatted();

    writeln!(w, "  Hex:      {}", formatted.hex)?;
    writeln!(w, "  Decimal:  {}", formatted.decimal)?;
    writeln!(
        w,
        "  Admin:    {}",
        if is_admin_card(raw) { "yes (protected)" } else { "no" }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardpanel_core::{CardListing, CardSource};
    use rstest::rstest;

    fn card(id: u64, name: &str) -> CardRecord {
        CardRecord {
            id: CardId::new(id).unwrap(),
            name: name.to_string(),
            active: true,
            timestamp: None,
        }
    }

    fn render(view: &PanelView) -> String {
        let mut out = Vec::new();
        write_view(&mut out, view).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case("John Doe", "jo", "[Jo]hn Doe")]
    #[case("John Doe", "", "John Doe")]
    #[case("a.b.c", ".", "a[.]b[.]c")]
    fn test_marked(#[case] text: &str, #[case] query: &str, #[case] expected: &str) {
        assert_eq!(marked(highlight(text, query)), expected);
    }

    #[test]
    fn test_row_with_badge() {
        let row = card_row(&card(255, "Front desk"), true, None);
        assert_eq!(row, "0x000000FF (255)\tFront desk [DEFAULT]\tActive\tUnknown");
    }

    #[test]
    fn test_row_marks_id_match() {
        let query = SearchQuery::new(SearchKind::Id, "ff");
        let row = card_row(&card(255, "Front desk"), false, Some(&query));
        assert!(row.starts_with("0x000000[FF] (255)\tFront desk"));
    }

    #[test]
    fn test_row_marks_name_match() {
        let query = SearchQuery::new(SearchKind::Name, "desk");
        let row = card_row(&card(255, "Front desk"), false, Some(&query));
        assert!(row.contains("Front [desk]"));
    }

    #[test]
    fn test_empty_listing() {
        let view = PanelView::unfiltered(CardListing::new(CardSource::All, vec![]));
        assert_eq!(render(&view), "No cards registered\n");
    }

    #[test]
    fn test_search_without_matches() {
        let listing = CardListing::new(CardSource::All, vec![card(1, "Jane")]);
        let view = PanelView::filtered(&listing, &SearchQuery::new(SearchKind::Name, "bob"));
        assert_eq!(
            render(&view),
            "[error] No cards found matching \"bob\" in Name\n"
        );
    }

    #[test]
    fn test_write_identifier() {
        let mut out = Vec::new();
        write_identifier(&mut out, "12345678").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Hex:      0x00BC614E"));
        assert!(text.contains("Decimal:  12345678"));
        assert!(text.contains("Admin:    yes (protected)"));
    }

    #[test]
    fn test_write_identifier_rejects_zero() {
        let mut out = Vec::new();
        assert!(write_identifier(&mut out, "0").is_err());
    }
}
