use crate::models::{Tokenizer, Vocabulary};
use crate::types::{Token, WordIndex};
use crate::utils::read_text_lines;
use crate::Error;
use log::debug;
use std::path::Path;

/// A raw training corpus: sentences (one per input line), the flattened token stream, and the
/// vocabulary built over that stream.
#[derive(Debug, Clone)]
pub struct Corpus {
    sentences: Vec<Vec<Token>>,
    tokens: Vec<Token>,
    token_indices: Vec<WordIndex>,
    vocabulary: Vocabulary,
}

impl Corpus {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sentences = Tokenizer::corpus_parser().tokenize_lines(lines);

        let tokens: Vec<Token> = sentences.iter().flatten().cloned().collect();

        let mut vocabulary = Vocabulary::new();
        let token_indices: Vec<WordIndex> = tokens
            .iter()
            .map(|token| vocabulary.upsert_word(token))
            .collect();

        debug!(
            "Corpus: {} sentence(s), {} token(s), {} word type(s)",
            sentences.len(),
            tokens.len(),
            vocabulary.len()
        );

        Self {
            sentences,
            tokens,
            token_indices,
            vocabulary,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let lines = read_text_lines(path.as_ref())?;
        Ok(Self::from_lines(lines))
    }

    pub fn sentences(&self) -> &[Vec<Token>] {
        &self.sentences
    }

    /// The flattened token stream. Sentence boundaries are not represented.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Vocabulary index of every token in the flattened stream.
    pub fn token_indices(&self) -> &[WordIndex] {
        &self.token_indices
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_vocabulary_and_stream() {
        let corpus = Corpus::from_text("the cat sat\nthe dog ran\n");

        assert_eq!(corpus.sentences().len(), 2);
        assert_eq!(corpus.tokens(), &["the", "cat", "sat", "the", "dog", "ran"]);
        assert_eq!(
            corpus.vocabulary().words(),
            &["the", "cat", "sat", "dog", "ran"]
        );
        assert_eq!(corpus.token_indices(), &[0, 1, 2, 0, 3, 4]);
    }

    #[test]
    fn test_blank_lines_are_empty_sentences() {
        let corpus = Corpus::from_text("a b\n\n  \nc");
        assert_eq!(corpus.sentences().len(), 4);
        assert!(corpus.sentences()[1].is_empty());
        assert_eq!(corpus.tokens().len(), 3);
    }
}
