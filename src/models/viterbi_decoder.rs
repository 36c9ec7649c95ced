use crate::models::{HiddenMarkovModel, TaggedSentence};
use crate::types::{TagIndex, TokenRef};
use crate::utils::first_max_index;
use crate::Error;

/// Probability and backpointer tables for one sentence, both indexed `[tag][position]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViterbiState {
    pub probabilities: Vec<Vec<f64>>,
    pub backpointers: Vec<Vec<TagIndex>>,
}

impl ViterbiState {
    /// Tag of the most probable final state, first maximum on ties.
    pub fn best_final_tag(&self) -> Option<TagIndex> {
        let last = self.probabilities.first()?.len().checked_sub(1)?;
        first_max_index(self.probabilities.iter().map(|row| row[last]), f64::NEG_INFINITY)
            .map(|(tag, _)| tag)
    }

    /// Follows backpointers from the best final tag to position 0.
    pub fn backtrack(&self) -> Vec<TagIndex> {
        let Some(mut tag) = self.best_final_tag() else {
            return Vec::new();
        };

        let length = self.probabilities[0].len();
        let mut path = vec![0; length];

        for position in (0..length).rev() {
            path[position] = tag;
            tag = self.backpointers[tag][position];
        }

        path
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ViterbiDecoder {
    /// Emission used for every tag when a word is out of vocabulary.
    pub unknown_word_probability: f64,
}

impl ViterbiDecoder {
    pub fn new(unknown_word_probability: f64) -> Self {
        Self {
            unknown_word_probability,
        }
    }

    fn emission(&self, model: &HiddenMarkovModel, tag: TagIndex, word: &TokenRef) -> f64 {
        model
            .emission_probability(tag, word)
            .unwrap_or(self.unknown_word_probability)
    }

    /// Fills the dynamic-programming tables.
    ///
    /// Position 0 uses the emission alone (no start distribution). Later positions take the
    /// best predecessor under `best[k][x-1] * transition[k][y] * emission(y, x)`, scanning `k`
    /// upwards and keeping the first maximum.
    pub fn fill<S: AsRef<str>>(&self, model: &HiddenMarkovModel, words: &[S]) -> ViterbiState {
        let tag_count = model.tag_set().len();
        let length = words.len();

        let mut probabilities = vec![vec![0.0; length]; tag_count];
        let mut backpointers = vec![vec![0; length]; tag_count];

        for (position, word) in words.iter().enumerate() {
            let word = word.as_ref();

            for tag in 0..tag_count {
                let emission = self.emission(model, tag, word);

                if position == 0 {
                    probabilities[tag][0] = emission;
                    continue;
                }

                let candidates = (0..tag_count).map(|previous_tag| {
                    probabilities[previous_tag][position - 1]
                        * model.transition_probability(previous_tag, tag)
                        * emission
                });

                if let Some((previous_tag, best)) =
                    first_max_index(candidates, f64::NEG_INFINITY)
                {
                    probabilities[tag][position] = best;
                    backpointers[tag][position] = previous_tag;
                }
            }
        }

        ViterbiState {
            probabilities,
            backpointers,
        }
    }

    /// Most probable tag sequence for `words`, in input order.
    pub fn decode_indices<S: AsRef<str>>(
        &self,
        model: &HiddenMarkovModel,
        words: &[S],
    ) -> Result<Vec<TagIndex>, Error> {
        if model.tag_set().is_empty() {
            return Err(Error::ConfigError(
                "Cannot decode with an empty tag set".to_string(),
            ));
        }

        if words.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.fill(model, words).backtrack())
    }

    pub fn decode<S: AsRef<str>>(
        &self,
        model: &HiddenMarkovModel,
        words: &[S],
    ) -> Result<TaggedSentence, Error> {
        let path = self.decode_indices(model, words)?;

        let pairs = words
            .iter()
            .zip(path)
            .map(|(word, tag)| {
                let label = model.tag_set().label(tag).unwrap_or_default().to_string();
                (word.as_ref().to_string(), label)
            })
            .collect();

        Ok(TaggedSentence { pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TagSet, Vocabulary};

    fn model() -> HiddenMarkovModel {
        let vocabulary: Vocabulary = ["fish", "swim"].into_iter().collect();
        HiddenMarkovModel::new(
            TagSet::with_cluster_count(2),
            vocabulary,
            vec![vec![0.8, 0.2], vec![0.3, 0.7]],
            vec![vec![0.1, 0.9], vec![0.6, 0.4]],
        )
    }

    #[test]
    fn test_first_position_is_emission_only() {
        let state = ViterbiDecoder::new(0.001).fill(&model(), &["fish"]);
        assert_eq!(state.probabilities[0][0], 0.8);
        assert_eq!(state.probabilities[1][0], 0.3);
    }

    #[test]
    fn test_hand_built_model_has_no_tag_counts() {
        assert_eq!(model().tag_counts(), None);
    }

    #[test]
    fn test_decodes_noun_verb() {
        let tagged = ViterbiDecoder::new(0.001)
            .decode(&model(), &["fish", "swim"])
            .unwrap();

        assert_eq!(tagged.tags().collect::<Vec<_>>(), vec!["C0", "C1"]);
    }

    #[test]
    fn test_unknown_words_use_constant_emission() {
        let state = ViterbiDecoder::new(0.5).fill(&model(), &["zebra"]);
        assert_eq!(state.probabilities[0][0], 0.5);
        assert_eq!(state.probabilities[1][0], 0.5);
        // Equal scores: first tag wins
        assert_eq!(state.best_final_tag(), Some(0));
    }

    #[test]
    fn test_zero_emission_points_back_to_first_tag() {
        let vocabulary: Vocabulary = ["a"].into_iter().collect();
        let model = HiddenMarkovModel::new(
            TagSet::with_cluster_count(2),
            vocabulary,
            vec![vec![0.0], vec![1.0]],
            vec![vec![0.0, 1.0], vec![0.0, 1.0]],
        );

        let state = ViterbiDecoder::new(0.001).fill(&model, &["a", "a"]);
        assert_eq!(state.probabilities[0][1], 0.0);
        assert_eq!(state.backpointers[0][1], 0);
        assert_eq!(state.backpointers[1][1], 1);
    }

    #[test]
    fn test_empty_sentence() {
        let words: [&str; 0] = [];
        let tagged = ViterbiDecoder::new(0.001).decode(&model(), &words).unwrap();
        assert!(tagged.is_empty());
    }
}
