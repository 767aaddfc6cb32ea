//! Fill a [Trie](crate::Trie) from word lists.
//!
//! Besides reading raw word lists, regular nouns and verbs can be added with
//! their inflected forms, derived with the usual English spelling rules.
//! These rules are heuristics: irregular words must be listed explicitly.

use crate::{error::*, Trie};
use log::debug;
use snafu::*;
use std::io::BufRead;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Return the last three letters of a word, from the last one.
fn tail(word: &str) -> (Option<char>, Option<char>, Option<char>) {
    let mut rev = word.chars().rev();
    (rev.next(), rev.next(), rev.next())
}

/// Return the word without its last letter.
fn without_last(word: &str) -> &str {
    word.char_indices().last().map_or(word, |(i, _)| &word[..i])
}

/// Whether the word ends with a consonant-vowel-consonant pattern
/// whose final consonant is doubled before a suffix (cut -> cutting).
fn doubles_final_consonant(word: &str) -> bool {
    match tail(word) {
        (Some(last), Some(second), third) => {
            is_consonant(last)
                && !matches!(last, 'w' | 'x' | 'y')
                && is_vowel(second)
                && third.map_or(true, is_consonant)
        }
        _ => false,
    }
}

/// Return the plural of a regular noun, also the third person of a regular verb.
///
/// ```
/// use wordament_solver_core::lexicon::plural;
/// assert_eq!(plural("leaf"), "leaves");
/// assert_eq!(plural("city"), "cities");
/// assert_eq!(plural("day"), "days");
/// ```
pub fn plural(word: &str) -> String {
    match tail(word) {
        (Some('f'), Some('f'), _) => format!("{}s", word),
        (Some('f'), _, _) => format!("{}ves", without_last(word)),
        (Some('s'), _, _) | (Some('x'), _, _) | (Some('z'), _, _) => format!("{}es", word),
        (Some('h'), Some('c'), _) | (Some('h'), Some('s'), _) => format!("{}es", word),
        (Some('y'), Some(second), _) if is_consonant(second) => {
            format!("{}ies", without_last(word))
        }
        _ => format!("{}s", word),
    }
}

/// Return the present participle of a regular verb.
///
/// ```
/// use wordament_solver_core::lexicon::present_participle;
/// assert_eq!(present_participle("crave"), "craving");
/// assert_eq!(present_participle("cut"), "cutting");
/// assert_eq!(present_participle("coat"), "coating");
/// ```
pub fn present_participle(word: &str) -> String {
    match tail(word) {
        (Some('e'), Some(second), _) if is_consonant(second) => {
            format!("{}ing", without_last(word))
        }
        (Some(last), _, _) if doubles_final_consonant(word) => format!("{}{}ing", word, last),
        _ => format!("{}ing", word),
    }
}

/// Return the past tense of a regular verb.
///
/// ```
/// use wordament_solver_core::lexicon::past_tense;
/// assert_eq!(past_tense("continue"), "continued");
/// assert_eq!(past_tense("carry"), "carried");
/// assert_eq!(past_tense("stop"), "stopped");
/// ```
pub fn past_tense(word: &str) -> String {
    match tail(word) {
        (Some('e'), _, _) => format!("{}d", word),
        (Some('y'), Some(second), _) if is_consonant(second) => {
            format!("{}ied", without_last(word))
        }
        (Some(last), _, _) if doubles_final_consonant(word) => format!("{}{}ed", word, last),
        _ => format!("{}ed", word),
    }
}

impl Trie {
    /// Create a trie holding every word of a word list, see [grab](Trie::grab).
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut trie = Self::new();
        trie.grab(reader)?;
        Ok(trie)
    }

    /// Insert every word read from the stream.
    ///
    /// A word is a run of letters, anything else separates words.
    /// Words with a letter outside of the ASCII alphabet are skipped.
    ///
    /// Return the number of words inserted, duplicates included.
    pub fn grab<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut nb_inserted = 0;
        for line in reader.lines() {
            let line = line.context(WordRead)?;
            for word in line.split(|c: char| !c.is_alphabetic()) {
                if word.is_empty() {
                    continue;
                }
                match self.insert(word) {
                    Ok(()) => nb_inserted += 1,
                    Err(e) => debug!("Skipped word list entry: {}", e),
                }
            }
        }
        Ok(nb_inserted)
    }

    /// Insert a regular noun and its plural.
    pub fn add_regular_noun(&mut self, word: &str) -> Result<()> {
        let word = word.to_ascii_lowercase();
        self.insert(&word)?;
        self.insert(&plural(&word))
    }

    /// Insert a regular verb, its third person, present participle and past tense.
    pub fn add_regular_verb(&mut self, word: &str) -> Result<()> {
        let word = word.to_ascii_lowercase();
        self.insert(&word)?;
        self.insert(&plural(&word))?;
        self.insert(&present_participle(&word))?;
        self.insert(&past_tense(&word))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plurals() {
        let cases = [
            ("cat", "cats"),
            ("leaf", "leaves"),
            ("cliff", "cliffs"),
            ("bus", "buses"),
            ("box", "boxes"),
            ("church", "churches"),
            ("dish", "dishes"),
            ("month", "months"),
            ("city", "cities"),
            ("day", "days"),
            ("a", "as"),
        ];
        for (word, expected) in &cases {
            assert_eq!(&plural(word), expected);
        }
    }

    #[test]
    fn present_participles() {
        let cases = [
            ("click", "clicking"),
            ("stuff", "stuffing"),
            ("coat", "coating"),
            ("cut", "cutting"),
            ("crave", "craving"),
            ("shoe", "shoeing"),
            ("go", "going"),
            ("play", "playing"),
            ("fix", "fixing"),
            ("up", "upping"),
        ];
        for (word, expected) in &cases {
            assert_eq!(&present_participle(word), expected);
        }
    }

    #[test]
    fn past_tenses() {
        let cases = [
            ("click", "clicked"),
            ("coat", "coated"),
            ("stop", "stopped"),
            ("continue", "continued"),
            ("carry", "carried"),
            ("play", "played"),
            ("show", "showed"),
        ];
        for (word, expected) in &cases {
            assert_eq!(&past_tense(word), expected);
        }
    }

    #[test]
    fn non_ascii_words() {
        assert_eq!(plural("café"), "cafés");
        assert_eq!(plural("naïf"), "naïves");
        assert_eq!(present_participle("né"), "néing");
        assert_eq!(present_participle("über"), "überring");
        assert_eq!(past_tense("öy"), "öyed");
        assert_eq!(past_tense("café"), "caféed");
        assert_eq!(plural(""), "s");
    }

    #[test]
    fn grab_splits_on_non_letters() {
        let list = "cat, dog\nmouse's  moose\n\n  laptop\ncafé 42 x1y";
        let mut trie = Trie::new();
        let nb = trie.grab(list.as_bytes()).unwrap();

        // "café" is skipped, "mouse's" is split in two words
        assert_eq!(nb, 8);
        for word in &["cat", "dog", "mouse", "s", "moose", "laptop", "x", "y"] {
            assert!(trie.contains(word), "{}", word);
        }
        assert!(!trie.contains("caf"));
    }

    #[test]
    fn from_reader() {
        let trie = Trie::from_reader("Quit\nquite\nQUITE\n".as_bytes()).unwrap();
        assert_eq!(trie.len(), 2);
        assert!(trie.contains("quit"));
    }

    #[test]
    fn regular_noun() {
        let mut trie = Trie::new();
        trie.add_regular_noun("Wolf").unwrap();
        assert!(trie.contains("wolf"));
        assert!(trie.contains("wolves"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn regular_verb() {
        let mut trie = Trie::new();
        trie.add_regular_verb("hop").unwrap();
        for word in &["hop", "hops", "hopping", "hopped"] {
            assert!(trie.contains(word), "{}", word);
        }
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn invalid_noun() {
        let mut trie = Trie::new();
        assert!(trie.add_regular_noun("").is_err());
        assert!(trie.add_regular_verb("sk8").is_err());
        assert!(trie.is_empty());
    }
}
