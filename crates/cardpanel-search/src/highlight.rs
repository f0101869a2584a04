//! Match highlighting.
//!
//! A [`Highlight`] walks a piece of text and yields consecutive [`Segment`]s
//! that together cover the whole text, each tagged with whether it matched
//! the query. The query is always escaped before it is compiled, so operator
//! input such as `a.b` or `(1)` is matched literally.

use cardpanel_core::{CardId, FormattedId};
use regex::{Regex, RegexBuilder};

/// A slice of highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    pub text: &'t str,
    pub is_match: bool,
}

impl<'t> Segment<'t> {
    fn plain(text: &'t str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    fn matched(text: &'t str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

/// Lazy iterator over the segments of `text` for one query.
///
/// Cloning a `Highlight` (or calling [`Highlight::restart`]) yields the same
/// sequence again from the beginning.
#[derive(Debug, Clone)]
pub struct Highlight<'t> {
    text: &'t str,
    pattern: Option<Regex>,
    pos: usize,
}

/// Split `text` into matched and unmatched segments for `query`, ignoring case.
///
/// An empty query produces a single unmatched segment; empty text produces
/// no segments.
///
/// # Examples
///
/// ```
/// use cardpanel_search::highlight;
///
/// let parts: Vec<(&str, bool)> = highlight("John Doe", "jo")
///     .map(|s| (s.text, s.is_match))
///     .collect();
/// assert_eq!(parts, vec![("Jo", true), ("hn Doe", false)]);
/// ```
pub fn highlight<'t>(text: &'t str, query: &str) -> Highlight<'t> {
    let pattern = if query.is_empty() {
        None
    } else {
        // An escaped literal only fails to compile when it exceeds the size
        // limit; such a query cannot match anything displayable anyway.
        RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok()
    };

    Highlight {
        text,
        pattern,
        pos: 0,
    }
}

impl<'t> Highlight<'t> {
    /// Rewind to the start of the text.
    pub fn restart(&mut self) {
        self.pos = 0;
    }

    /// Returns `true` if the query occurs anywhere in the text.
    #[must_use]
    pub fn has_match(&self) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|re| re.is_match(self.text))
    }
}

impl<'t> Iterator for Highlight<'t> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        let next_match = self
            .pattern
            .as_ref()
            .and_then(|re| re.find_at(self.text, start));

        match next_match {
            Some(m) if m.start() == start => {
                self.pos = m.end();
                Some(Segment::matched(m.as_str()))
            }
            Some(m) => {
                self.pos = m.start();
                Some(Segment::plain(&self.text[start..m.start()]))
            }
            None => {
                self.pos = self.text.len();
                Some(Segment::plain(&self.text[start..]))
            }
        }
    }
}

impl std::iter::FusedIterator for Highlight<'_> {}

/// Highlighting for both display forms of a card identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdHighlight {
    formatted: FormattedId,
    query: String,
}

/// Prepare identifier highlighting: the hex and decimal forms are matched
/// independently against the raw query.
pub fn highlight_id(id: CardId, query: &str) -> IdHighlight {
    IdHighlight {
        formatted: id.formatted(),
        query: query.to_string(),
    }
}

impl IdHighlight {
    #[must_use]
    pub fn hex(&self) -> Highlight<'_> {
        highlight(&self.formatted.hex, &self.query)
    }

    #[must_use]
    pub fn decimal(&self) -> Highlight<'_> {
        highlight(&self.formatted.decimal, &self.query)
    }

    #[must_use]
    pub fn formatted(&self) -> &FormattedId {
        &self.formatted
    }
}
