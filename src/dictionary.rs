//! Valid submission lookup

use std::collections::{BTreeSet, HashSet};

/// Answers whether a candidate string is an accepted submission
pub trait Dictionary {
    fn contains(&self, candidate: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn contains(&self, candidate: &str) -> bool {
        HashSet::contains(self, candidate)
    }
}

impl Dictionary for BTreeSet<String> {
    fn contains(&self, candidate: &str) -> bool {
        BTreeSet::contains(self, candidate)
    }
}

/// Precomputed set of words (full words and their anagram sub-words)
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Dictionary for WordList {
    fn contains(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }
}
