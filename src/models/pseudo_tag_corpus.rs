use crate::constants::{EXCLUSION_MARKERS, SENTENCE_END_LINE, SENTENCE_START_LINE};
use crate::models::{Clustering, Corpus, TagSet};
use crate::types::{TagIndex, Token};
use crate::utils::read_text_lines;
use crate::Error;
use std::path::Path;

/// One line of a pseudo-tagged training corpus.
#[derive(Debug, Clone, PartialEq)]
pub enum PseudoTagLine {
    /// `<s> START`, `</s> END`, or any line led by an exclusion marker
    Boundary,
    Observation { word: Token, tag: TagIndex },
    /// Anything else; treated like a boundary by the trainer
    Malformed,
}

impl PseudoTagLine {
    pub fn parse(line: &str, tag_set: &TagSet) -> Self {
        let mut fields = line.split_whitespace();

        let (word, tag) = match (fields.next(), fields.next(), fields.next()) {
            (Some(word), _, _) if EXCLUSION_MARKERS.contains(&word) => return Self::Boundary,
            (Some(word), Some(tag), None) => (word, tag),
            _ => return Self::Malformed,
        };

        match tag_set.index_of(tag) {
            Some(tag) => Self::Observation {
                word: word.to_string(),
                tag,
            },
            None => Self::Malformed,
        }
    }
}

/// A corpus rewritten as `word tag` lines, each sentence wrapped in start/end markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PseudoTagCorpus {
    lines: Vec<String>,
}

impl PseudoTagCorpus {
    /// Rewrites every sentence of `corpus`, labelling each word with the pseudo-tag of the
    /// cluster holding its vocabulary index.
    pub fn generate(corpus: &Corpus, clustering: &Clustering, tag_set: &TagSet) -> Self {
        let mut lines = Vec::with_capacity(corpus.tokens().len() + 2 * corpus.sentences().len());

        for sentence in corpus.sentences() {
            lines.push(SENTENCE_START_LINE.to_string());

            for word in sentence {
                let label = corpus
                    .vocabulary()
                    .get_word_index(word)
                    .and_then(|word_index| clustering.cluster_of(word_index))
                    .and_then(|cluster_index| tag_set.label(cluster_index));

                if let Some(label) = label {
                    lines.push(format!("{} {}", word, label));
                }
            }

            lines.push(SENTENCE_END_LINE.to_string());
        }

        Self { lines }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(Self::from_lines(read_text_lines(path.as_ref())?))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn parsed_lines<'a>(
        &'a self,
        tag_set: &'a TagSet,
    ) -> impl Iterator<Item = PseudoTagLine> + 'a {
        self.lines
            .iter()
            .map(move |line| PseudoTagLine::parse(line, tag_set))
    }

    /// Renders the corpus as file contents, one line per entry.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for line in &self.lines {
            rendered.push_str(line);
            rendered.push('\n');
        }
        rendered
    }
}
