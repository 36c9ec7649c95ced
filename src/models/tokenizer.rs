use crate::types::{Token, TokenRef};

#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Configuration for raw corpus and test sentence parsing. Case is preserved so that
    /// scripts without case (and proper nouns in scripts with it) keep their identity.
    pub fn corpus_parser() -> Self {
        Self
    }

    /// Splits a single line into whitespace-separated tokens. Empty tokens never appear.
    pub fn tokenize(self, line: &TokenRef) -> Vec<Token> {
        line.split_whitespace().map(str::to_string).collect()
    }

    /// Tokenizes each line independently, keeping sentence boundaries.
    pub fn tokenize_lines<I, S>(self, lines: I) -> Vec<Vec<Token>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.tokenize(line.as_ref()))
            .collect()
    }
}
