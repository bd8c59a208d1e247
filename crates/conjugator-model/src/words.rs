use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

/// Deduplicated set of conjugated word forms.
///
/// Words are stored in NFC form so that precomposed and decomposed
/// spellings of the same form (e.g., "é" vs. "e\u{0301}") collapse into
/// one entry. Iteration is in code point order, which is the order the
/// words are written out in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordSet(BTreeSet<String>);

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.0.insert(word.nfc().collect())
    }

    /// Split a piece of text on whitespace and insert every token.
    ///
    /// Compound forms such as "ai parlé" become two words.
    /// Returns the number of tokens seen, new or not.
    pub fn insert_text(&mut self, text: &str) -> usize {
        let mut tokens = 0;
        for word in text.split_whitespace() {
            self.insert(word);
            tokens += 1;
        }
        tokens
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: WordSet) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, word: &str) -> bool {
        let normalized: String = word.nfc().collect();
        self.0.contains(&normalized)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = WordSet::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}
