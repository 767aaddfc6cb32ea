pub mod index;
pub mod trie_node;

use crate::error::*;
use index::LetterIndex;
use snafu::*;
use trie_node::TrieNode;

/// A prefix tree over the 26 ASCII letters, holding the dictionary words.
///
/// The trie is filled once (or incrementally) with [insert](Trie::insert)
/// and then only queried while searching a grid, starting from its
/// [root](Trie::root) and moving one letter at a time with
/// [transition](TrieNode::transition).
///
/// Nodes are never removed. A [Terminal](TrieNode::Terminal) node is promoted
/// to a [Branch](TrieNode::Branch) the first time a longer word needs it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Trie {
    root: TrieNode,
    nb_words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie, whose root is a branch without any child.
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            nb_words: 0,
        }
    }

    /// Return the starting node of any word, always a branch.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Return the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.nb_words
    }

    pub fn is_empty(&self) -> bool {
        self.nb_words == 0
    }

    /// Insert a word in the trie, case-insensitively.
    /// Inserting an already present word does nothing.
    ///
    /// Return an error if the word is empty or contains anything else than ASCII letters.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let indices = word
            .chars()
            .map(LetterIndex::from_letter)
            .collect::<Option<Vec<_>>>()
            .context(InvalidWord { word })?;
        let (&last, prefix) = indices.split_last().context(InvalidWord { word })?;

        // Walk the prefix, creating the missing branches
        let mut node = &mut self.root;
        for &index in prefix {
            node = &mut **node
                .promote()
                .child_slot(index)
                .get_or_insert_with(|| Box::new(TrieNode::default()));
        }

        // A new last letter only needs a terminal node
        let slot = node.promote().child_slot(last);
        let added = match slot {
            Some(child) => child.mark_end(),
            None => {
                *slot = Some(Box::new(TrieNode::Terminal));
                true
            }
        };

        if added {
            self.nb_words += 1;
        }
        Ok(())
    }

    /// Return whether the word is in the trie, case-insensitively.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.find(word).map_or(false, TrieNode::may_terminate)
    }

    /// Return the node reached by following every letter of the prefix from the root.
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, letter| node.transition(letter))
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    /// Insert every valid word, skipping the invalid ones.
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            if let Err(e) = self.insert(word.as_ref()) {
                log::debug!("Skipped dictionary entry: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(matches!(trie.root(), TrieNode::Branch(_)));
        assert!(!trie.root().may_terminate());
        assert!(trie.root().transition('a').is_none());
    }

    #[test]
    fn insert_one_word() {
        let trie = trie_of(&["cat"]);
        assert_eq!(trie.len(), 1);

        let c = trie.root().transition('c').unwrap();
        let a = c.transition('a').unwrap();
        let t = a.transition('t').unwrap();
        assert!(!c.may_terminate());
        assert!(!a.may_terminate());
        assert_eq!(t, &TrieNode::Terminal);
        assert!(t.may_terminate());
    }

    #[test]
    fn insert_continuation_word() {
        let trie = trie_of(&["cat", "cats"]);
        assert_eq!(trie.len(), 2);

        // The terminal of "cat" has been promoted and kept its end status
        let t = trie.find("cat").unwrap();
        assert!(matches!(t, TrieNode::Branch(_)));
        assert!(t.may_terminate());
        assert_eq!(trie.find("cats"), Some(&TrieNode::Terminal));
    }

    #[test]
    fn insert_in_already_word() {
        let trie = trie_of(&["cats", "cat"]);
        assert_eq!(trie.len(), 2);
        assert!(trie.contains("cat"));
        assert!(trie.contains("cats"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("catsup"));
    }

    #[test]
    fn insert_is_idempotent() {
        let once = trie_of(&["quit", "quite"]);
        let twice = trie_of(&["quit", "quite", "quit", "QUITE"]);
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 2);
    }

    #[test]
    fn insert_is_case_insensitive() {
        let trie = trie_of(&["WoRd"]);
        assert!(trie.contains("word"));
        assert!(trie.contains("WORD"));
        assert!(trie.find("w").is_some());
        assert!(trie.root().transition('W').is_some());
    }

    #[test]
    fn invalid_words() {
        let mut trie = Trie::new();
        assert!(matches!(trie.insert(""), Err(Error::InvalidWord { .. })));
        assert!(matches!(trie.insert("don't"), Err(Error::InvalidWord { .. })));
        assert!(matches!(trie.insert("café"), Err(Error::InvalidWord { .. })));
        assert_eq!(trie, Trie::new());
    }

    #[test]
    fn single_letter_words() {
        let trie = trie_of(&["a", "at"]);
        let a = trie.root().transition('a').unwrap();
        assert!(a.may_terminate());
        assert!(a.transition('t').unwrap().may_terminate());
        assert!(!trie.contains(""));
    }

    #[test]
    fn extend_skips_invalid_words() {
        let mut trie = Trie::new();
        trie.extend(vec!["one", "", "tw0", "three"]);
        assert_eq!(trie.len(), 2);
        assert!(trie.contains("one"));
        assert!(trie.contains("three"));
    }
}
