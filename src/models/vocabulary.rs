use crate::types::{Token, TokenRef, WordIndex};
use std::collections::HashMap;

/// Ordered set of word types. Indices are assigned in first-seen order and never change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    word_map: HashMap<Token, WordIndex>,
    words: Vec<Token>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word if it doesn't exist and returns its index
    pub fn upsert_word(&mut self, word: &TokenRef) -> WordIndex {
        if let Some(&index) = self.word_map.get(word) {
            index
        } else {
            let index = self.words.len();
            self.word_map.insert(word.to_string(), index);
            self.words.push(word.to_string());
            index
        }
    }

    /// Gets the index for a word, or None if the word is not present
    pub fn get_word_index(&self, word: &TokenRef) -> Option<WordIndex> {
        self.word_map.get(word).copied()
    }

    pub fn get_word(&self, index: WordIndex) -> Option<&TokenRef> {
        self.words.get(index).map(|word| word.as_str())
    }

    pub fn contains(&self, word: &TokenRef) -> bool {
        self.word_map.contains_key(word)
    }

    /// Gets the total number of unique words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Token] {
        &self.words
    }
}

impl<'a> FromIterator<&'a str> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut vocabulary = Vocabulary::new();
        for word in iter {
            vocabulary.upsert_word(word);
        }
        vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_indices_are_stable() {
        let mut vocabulary = Vocabulary::new();
        assert_eq!(vocabulary.upsert_word("the"), 0);
        assert_eq!(vocabulary.upsert_word("cat"), 1);
        assert_eq!(vocabulary.upsert_word("the"), 0);
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.get_word(1), Some("cat"));
        assert_eq!(vocabulary.get_word_index("dog"), None);
    }
}
