//! Define the letter index wrapper used to access the children of a branch.
//! If instead a letter was converted to a raw integer everywhere, any integer
//! could be used to index the children table.
//! Here, the only way to get an index is from a letter, and the inner integer
//! is kept private, so indexing a branch can never go out of bounds.

/// The number of letters in the alphabet handled by the trie.
pub const ALPHABET_LEN: usize = 26;

/// Represent a valid index in the children table of a [Branch](crate::Branch).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LetterIndex {
    index: u8,
}

impl LetterIndex {
    /// Case-insensitively convert an ASCII letter to its index.
    /// Return None for any other character.
    pub fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_alphabetic() {
            let index = letter.to_ascii_lowercase() as u8 - b'a';
            Some(Self { index })
        } else {
            None
        }
    }
}

impl From<LetterIndex> for usize {
    fn from(value: LetterIndex) -> Self {
        value.index as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn letters_are_case_insensitive() {
        let lower = LetterIndex::from_letter('q').unwrap();
        let upper = LetterIndex::from_letter('Q').unwrap();
        assert_eq!(lower, upper);
        assert_eq!(usize::from(lower), 16);
    }

    #[test]
    fn bounds() {
        assert_eq!(usize::from(LetterIndex::from_letter('a').unwrap()), 0);
        assert_eq!(
            usize::from(LetterIndex::from_letter('z').unwrap()),
            ALPHABET_LEN - 1
        );
    }

    #[test]
    fn non_letters_are_rejected() {
        for c in &['-', '/', ' ', '0', 'é', 'ß'] {
            assert!(LetterIndex::from_letter(*c).is_none(), "{:?}", c);
        }
    }
}
