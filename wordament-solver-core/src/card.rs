//! The content of a grid cell.
//!
//! A raw card such as `"qu"`, `"-ing"`, `"un-"` or `"a/e"` is parsed once
//! into one [Card](Card) per alternative, so the search never has to look
//! at the markers again.

use smartstring::{LazyCompact, SmartString};

/// The character marking a head or tail card.
pub const MARKER: char = '-';

/// The character separating the alternatives of a multi-alternative cell.
pub const ALTERNATIVE_SEPARATOR: char = '/';

/// Where the letters of a card may be placed in a word.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardKind {
    /// The letters can be present anywhere (`"xyz"`).
    Normal,
    /// The letters have to be the first ones of the word (`"xyz-"`).
    Head,
    /// The letters have to be the last ones of the word (`"-xyz"`).
    Tail,
}

/// One alternative of a cell: its lowercase letters and where they may be placed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub kind: CardKind,
    pub letters: SmartString<LazyCompact>,
}

impl Card {
    /// Parse a single alternative (without any separator).
    ///
    /// Return None if no letter is left once the marker is removed,
    /// or if anything else than an ASCII letter remains.
    pub fn parse(raw: &str) -> Option<Self> {
        let (kind, letters) = if let Some(letters) = raw.strip_prefix(MARKER) {
            (CardKind::Tail, letters)
        } else if let Some(letters) = raw.strip_suffix(MARKER) {
            (CardKind::Head, letters)
        } else {
            (CardKind::Normal, raw)
        };

        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        Some(Self {
            kind,
            letters: letters.to_ascii_lowercase().into(),
        })
    }

    /// Parse every alternative of a raw cell content.
    /// Return None if the content or any of its alternatives is invalid.
    pub fn parse_alternatives(raw: &str) -> Option<Vec<Self>> {
        raw.split(ALTERNATIVE_SEPARATOR).map(Self::parse).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn card(kind: CardKind, letters: &str) -> Card {
        Card {
            kind,
            letters: letters.into(),
        }
    }

    #[test]
    fn parse_kinds() {
        assert_eq!(Card::parse("qu"), Some(card(CardKind::Normal, "qu")));
        assert_eq!(Card::parse("-ing"), Some(card(CardKind::Tail, "ing")));
        assert_eq!(Card::parse("un-"), Some(card(CardKind::Head, "un")));
    }

    #[test]
    fn parse_single_letter_markers() {
        assert_eq!(Card::parse("-s"), Some(card(CardKind::Tail, "s")));
        assert_eq!(Card::parse("s-"), Some(card(CardKind::Head, "s")));
    }

    #[test]
    fn parse_lowercases() {
        assert_eq!(Card::parse("QU"), Some(card(CardKind::Normal, "qu")));
        assert_eq!(Card::parse("-InG"), Some(card(CardKind::Tail, "ing")));
    }

    #[test]
    fn parse_invalid() {
        for raw in &["", "-", "--", "-ing-", "a-b", "a b", "é", "4", "a/b"] {
            assert_eq!(Card::parse(raw), None, "{:?}", raw);
        }
    }

    #[test]
    fn parse_alternatives() {
        assert_eq!(
            Card::parse_alternatives("a/-ed/re-"),
            Some(vec![
                card(CardKind::Normal, "a"),
                card(CardKind::Tail, "ed"),
                card(CardKind::Head, "re"),
            ])
        );
        assert_eq!(
            Card::parse_alternatives("th"),
            Some(vec![card(CardKind::Normal, "th")])
        );
    }

    #[test]
    fn parse_invalid_alternatives() {
        for raw in &["", "/", "a/", "/a", "a//b", "a/-", "a/4"] {
            assert_eq!(Card::parse_alternatives(raw), None, "{:?}", raw);
        }
    }
}
