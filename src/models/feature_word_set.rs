use crate::models::Corpus;
use crate::types::{Token, TokenRef};
use crate::utils::{count_token_frequencies, sort_by_frequency};
use log::{debug, warn};
use std::collections::HashMap;

/// The frequent words used as context dimensions.
///
/// Tokens are ranked by frequency (ties in first-seen order). The top `stopword_cutoff` ranks are
/// treated as function words and skipped; the next `feature_word_count` ranks are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureWordSet {
    words: Vec<Token>,
    positions: HashMap<Token, usize>,
}

impl FeatureWordSet {
    pub fn select(corpus: &Corpus, stopword_cutoff: usize, feature_word_count: usize) -> Self {
        let ranked = sort_by_frequency(count_token_frequencies(corpus.tokens()));

        let available = ranked.len().saturating_sub(stopword_cutoff);
        if available < feature_word_count {
            warn!(
                "Only {} word type(s) remain after skipping the top {}; wanted {} feature words",
                available, stopword_cutoff, feature_word_count
            );
        }

        let feature_words = ranked
            .into_iter()
            .skip(stopword_cutoff)
            .take(feature_word_count)
            .map(|(word, _)| word);

        let feature_word_set = Self::from_words(feature_words);

        debug!("Selected {} feature word(s)", feature_word_set.len());

        feature_word_set
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Token>,
    {
        let mut feature_word_set = Self::default();
        for word in words {
            let word = word.into();
            if !feature_word_set.positions.contains_key(&word) {
                feature_word_set
                    .positions
                    .insert(word.clone(), feature_word_set.words.len());
                feature_word_set.words.push(word);
            }
        }
        feature_word_set
    }

    /// Position of a feature word within the set, used as its dimension offset.
    pub fn position(&self, word: &TokenRef) -> Option<usize> {
        self.positions.get(word).copied()
    }

    pub fn words(&self) -> &[Token] {
        &self.words
    }

    /// `N`
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Dimensionality of the feature space (`2N`).
    pub fn dimensions(&self) -> usize {
        self.words.len() * 2
    }
}
