use crate::models::{
    HiddenMarkovModel, HmmTrainer, PseudoTagCorpus, TagSet, TaggedSentence, Tokenizer,
    ViterbiDecoder,
};
use crate::Error;
use log::info;

/// A trained HMM paired with its decoder. Read-only once built, so it can be shared across
/// threads and decode calls freely.
#[derive(Debug, Clone)]
pub struct PosTagger {
    model: HiddenMarkovModel,
    decoder: ViterbiDecoder,
    tokenizer: Tokenizer,
}

impl PosTagger {
    pub fn new(model: HiddenMarkovModel, decoder: ViterbiDecoder) -> Self {
        Self {
            model,
            decoder,
            tokenizer: Tokenizer::corpus_parser(),
        }
    }

    pub fn from_pseudo_tag_corpus(
        pseudo_tag_corpus: &PseudoTagCorpus,
        tag_set: &TagSet,
        unknown_word_probability: f64,
    ) -> Self {
        info!("Training HMM...");
        let model = HmmTrainer::train(pseudo_tag_corpus.parsed_lines(tag_set), tag_set);

        Self::new(model, ViterbiDecoder::new(unknown_word_probability))
    }

    pub fn model(&self) -> &HiddenMarkovModel {
        &self.model
    }

    pub fn tag_words<S: AsRef<str>>(&self, words: &[S]) -> Result<TaggedSentence, Error> {
        self.decoder.decode(&self.model, words)
    }

    pub fn tag_line(&self, line: &str) -> Result<TaggedSentence, Error> {
        self.tag_words(&self.tokenizer.tokenize(line))
    }

    /// Tags every line independently; output order matches input order.
    pub fn tag_lines<I, S>(&self, lines: I) -> Result<Vec<TaggedSentence>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();

        info!("Decoding {} sentence(s)...", lines.len());

        lines.iter().map(|line| self.tag_line(line.as_ref())).collect()
    }
}
