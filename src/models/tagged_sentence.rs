use crate::constants::TAGGED_SENTENCE_TERMINATOR;
use crate::types::Token;

/// Ordered `(word, tag label)` pairs for one decoded sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaggedSentence {
    pub pairs: Vec<(Token, String)>,
}

impl TaggedSentence {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(word, _)| word.as_str())
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, tag)| tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders `word_TAG ` for every pair followed by the ` ._.` terminator and a newline.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for (word, tag) in &self.pairs {
            rendered.push_str(word);
            rendered.push('_');
            rendered.push_str(tag);
            rendered.push(' ');
        }
        rendered.push_str(TAGGED_SENTENCE_TERMINATOR);
        rendered.push('\n');
        rendered
    }
}
