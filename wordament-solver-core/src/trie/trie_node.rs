use super::index::{LetterIndex, ALPHABET_LEN};

/// A [Trie](crate::Trie) node which can be continued by other letters.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Branch {
    /// The children of the node, indexed by their letter.
    /// A child is exclusively owned by its parent.
    children: [Option<Box<TrieNode>>; ALPHABET_LEN],

    /// Whether the prefix ending at this node is a complete word.
    can_end: bool,
}

impl Branch {
    /// Create a branch without any child.
    pub(crate) fn new(can_end: bool) -> Self {
        Self {
            can_end,
            ..Self::default()
        }
    }

    /// Get the child reached by a letter, if any.
    pub fn child(&self, index: LetterIndex) -> Option<&TrieNode> {
        self.children[usize::from(index)].as_deref()
    }

    /// Get the slot of a child, to be filled by the insertion.
    pub(crate) fn child_slot(&mut self, index: LetterIndex) -> &mut Option<Box<TrieNode>> {
        &mut self.children[usize::from(index)]
    }

    /// Whether the prefix ending at this node is a complete word.
    pub fn can_end(&self) -> bool {
        self.can_end
    }
}

/// A node of a [Trie](crate::Trie).
/// Can be of different structure depending on the situation to save memory.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TrieNode {
    /// Node with a full children table.
    /// Needed as soon as a prefix is continued by at least one letter.
    Branch(Branch),

    /// Node ending a word that no other word continues.
    /// Avoids allocating a children table for the many suffix-less positions.
    Terminal,
}

impl Default for TrieNode {
    fn default() -> Self {
        TrieNode::Branch(Branch::default())
    }
}

impl TrieNode {
    /// Return the node reached by the letter from this node,
    /// or None if no dictionary word continues this way.
    ///
    /// The letter is case-insensitive. A non-letter character never matches.
    pub fn transition(&self, letter: char) -> Option<&TrieNode> {
        match self {
            TrieNode::Branch(branch) => branch.child(LetterIndex::from_letter(letter)?),
            TrieNode::Terminal => None,
        }
    }

    /// Return whether the prefix ending at this node is a complete word.
    pub fn may_terminate(&self) -> bool {
        match self {
            TrieNode::Branch(branch) => branch.can_end(),
            TrieNode::Terminal => true,
        }
    }

    /// Turn a terminal into a branch keeping its end status, and return the branch.
    pub(crate) fn promote(&mut self) -> &mut Branch {
        if let TrieNode::Terminal = self {
            *self = TrieNode::Branch(Branch::new(true));
        }

        match self {
            TrieNode::Branch(branch) => branch,
            TrieNode::Terminal => unreachable!("a terminal has just been promoted"),
        }
    }

    /// Mark the prefix ending at this node as a complete word.
    /// Return whether it was not already the case.
    pub(crate) fn mark_end(&mut self) -> bool {
        match self {
            TrieNode::Branch(branch) => !std::mem::replace(&mut branch.can_end, true),
            TrieNode::Terminal => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn index(c: char) -> LetterIndex {
        LetterIndex::from_letter(c).unwrap()
    }

    #[test]
    fn terminal_has_no_children() {
        let node = TrieNode::Terminal;
        assert!(node.may_terminate());
        for c in (b'a'..=b'z').map(char::from) {
            assert!(node.transition(c).is_none());
        }
    }

    #[test]
    fn branch_transition() {
        let mut branch = Branch::new(false);
        *branch.child_slot(index('c')) = Some(Box::new(TrieNode::Terminal));
        let node = TrieNode::Branch(branch);

        assert!(!node.may_terminate());
        assert_eq!(node.transition('c'), Some(&TrieNode::Terminal));
        assert_eq!(node.transition('C'), Some(&TrieNode::Terminal));
        assert!(node.transition('d').is_none());
        assert!(node.transition('-').is_none());
    }

    #[test]
    fn promote_keeps_end_status() {
        let mut node = TrieNode::Terminal;
        let branch = node.promote();
        assert!(branch.can_end());
        assert!(branch.children.iter().all(Option::is_none));
        assert!(node.may_terminate());

        let mut node = TrieNode::Branch(Branch::new(false));
        node.promote();
        assert!(!node.may_terminate());
    }

    #[test]
    fn mark_end() {
        let mut node = TrieNode::default();
        assert!(node.mark_end());
        assert!(!node.mark_end());
        assert!(node.may_terminate());
        assert!(!TrieNode::Terminal.mark_end());
    }
}
