use crate::models::{PseudoTagLine, TagSet, Vocabulary};
use crate::types::{ProbabilityMatrix, TagIndex, TokenRef, WordIndex};
use log::debug;

/// Bigram HMM estimated from a pseudo-tagged corpus.
///
/// Both matrices are normalized by the total number of times the row tag occurred, so a
/// transition row does not sum to one when the tag ends sentences. Rows of tags that never
/// occurred stay all-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct HiddenMarkovModel {
    tag_set: TagSet,
    vocabulary: Vocabulary,
    /// `emission[tag][word]`
    emission: ProbabilityMatrix,
    /// `transition[previous_tag][tag]`
    transition: ProbabilityMatrix,
    tag_counts: Option<Vec<usize>>,
}

impl HiddenMarkovModel {
    /// Builds a model from already-normalized matrices.
    ///
    /// # Panics
    ///
    /// Panics if matrix dimensions don't match the tag set and vocabulary.
    pub fn new(
        tag_set: TagSet,
        vocabulary: Vocabulary,
        emission: ProbabilityMatrix,
        transition: ProbabilityMatrix,
    ) -> Self {
        assert_eq!(emission.len(), tag_set.len());
        assert!(emission.iter().all(|row| row.len() == vocabulary.len()));
        assert_eq!(transition.len(), tag_set.len());
        assert!(transition.iter().all(|row| row.len() == tag_set.len()));

        Self {
            tag_set,
            vocabulary,
            emission,
            transition,
            tag_counts: None,
        }
    }

    pub fn tag_set(&self) -> &TagSet {
        &self.tag_set
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn emission(&self) -> &ProbabilityMatrix {
        &self.emission
    }

    pub fn transition(&self) -> &ProbabilityMatrix {
        &self.transition
    }

    /// Raw occurrence count of each tag in the training corpus. `None` for hand-built models.
    pub fn tag_counts(&self) -> Option<&[usize]> {
        self.tag_counts.as_deref()
    }

    pub fn emission_probability(&self, tag: TagIndex, word: &TokenRef) -> Option<f64> {
        self.vocabulary
            .get_word_index(word)
            .map(|word_index| self.emission[tag][word_index])
    }

    pub fn transition_probability(&self, previous_tag: TagIndex, tag: TagIndex) -> f64 {
        self.transition[previous_tag][tag]
    }
}

pub struct HmmTrainer;

impl HmmTrainer {
    /// Counts emissions, transitions, and tag occurrences, then normalizes.
    ///
    /// Boundary and malformed lines reset the previous tag, so no transition is ever counted
    /// across a sentence boundary.
    pub fn train<I>(lines: I, tag_set: &TagSet) -> HiddenMarkovModel
    where
        I: IntoIterator<Item = PseudoTagLine>,
    {
        let tag_count = tag_set.len();

        let mut vocabulary = Vocabulary::new();
        let mut observations: Vec<(WordIndex, TagIndex)> = Vec::new();
        let mut transition = vec![vec![0.0; tag_count]; tag_count];
        let mut tag_counts = vec![0usize; tag_count];

        let mut previous_tag: Option<TagIndex> = None;

        for line in lines {
            match line {
                PseudoTagLine::Observation { word, tag } => {
                    let word_index = vocabulary.upsert_word(&word);
                    observations.push((word_index, tag));

                    if let Some(previous_tag) = previous_tag {
                        transition[previous_tag][tag] += 1.0;
                    }

                    tag_counts[tag] += 1;
                    previous_tag = Some(tag);
                }
                PseudoTagLine::Boundary | PseudoTagLine::Malformed => {
                    previous_tag = None;
                }
            }
        }

        let mut emission = vec![vec![0.0; vocabulary.len()]; tag_count];
        for (word_index, tag) in observations {
            emission[tag][word_index] += 1.0;
        }

        for (tag, &count) in tag_counts.iter().enumerate() {
            if count == 0 {
                continue;
            }

            let denominator = count as f64;
            for value in emission[tag].iter_mut() {
                *value /= denominator;
            }
            for value in transition[tag].iter_mut() {
                *value /= denominator;
            }
        }

        debug!(
            "Trained HMM over {} tag(s) and {} word type(s)",
            tag_count,
            vocabulary.len()
        );

        HiddenMarkovModel {
            tag_set: tag_set.clone(),
            vocabulary,
            emission,
            transition,
            tag_counts: Some(tag_counts),
        }
    }
}
