//! Prefix tree over Morse code strings.
//!
//! Each node owns its children outright; there is no sharing and no cycles.
//! Inserting the same code twice leaves a single path, so symbols that share a
//! code are counted once during decoding.

use std::collections::BTreeMap;

/// A node in the trie
#[derive(Clone, Debug, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    end: bool,
}

impl TrieNode {
    /// Child reached by `c`, if any
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// True if the path to this node spells a complete code
    pub fn is_end(&self) -> bool {
        self.end
    }
}

/// Trie of code strings
#[derive(Clone, Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code. Returns false if it was already present.
    pub fn insert(&mut self, code: &str) -> bool {
        let mut node = &mut self.root;
        for c in code.chars() {
            node = node.children.entry(c).or_default();
        }

        if node.end {
            return false;
        }
        node.end = true;
        self.len += 1;
        true
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// True if `code` is a complete code in the trie
    pub fn contains(&self, code: &str) -> bool {
        let mut node = &self.root;
        for c in code.chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.end
    }

    /// Number of distinct codes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lengths of every code that is a prefix of `input`, shortest first
    ///
    /// The walk stops at the first character with no matching edge.
    pub fn prefix_matches<'a>(&'a self, input: &'a [char]) -> PrefixMatches<'a> {
        PrefixMatches {
            node: Some(&self.root),
            input,
            pos: 0,
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for code in iter {
            trie.insert(code);
        }
        trie
    }
}

/// Iterator returned by [`Trie::prefix_matches`]
#[derive(Debug)]
pub struct PrefixMatches<'a> {
    node: Option<&'a TrieNode>,
    input: &'a [char],
    pos: usize,
}

impl Iterator for PrefixMatches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            let node = self.node?;
            let Some(&c) = self.input.get(self.pos) else {
                self.node = None;
                return None;
            };

            let Some(child) = node.child(c) else {
                self.node = None;
                return None;
            };

            self.pos += 1;
            self.node = Some(child);
            if child.is_end() {
                return Some(self.pos);
            }
        }
    }
}
