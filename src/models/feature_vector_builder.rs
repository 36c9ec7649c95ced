use crate::models::{Corpus, FeatureWordSet};
use crate::types::FeatureVector;
use log::debug;

pub struct FeatureVectorBuilder;

impl FeatureVectorBuilder {
    /// Builds one context vector per vocabulary word, indexed by vocabulary index.
    ///
    /// For the token at position `i` and each offset `j` in `1..=window`:
    /// - if the token at `i + j` is feature word `f`, dimension `f` is incremented;
    /// - if the token at `i - j` is feature word `f`, dimension `N + f` is incremented.
    ///
    /// The forward scan only runs when `i + window` is still inside the stream and the backward
    /// scan only when `i >= window`, so edge tokens contribute on one side only.
    ///
    /// Windows run over the flattened stream and freely cross sentence boundaries.
    pub fn build(
        corpus: &Corpus,
        feature_words: &FeatureWordSet,
        window: usize,
    ) -> Vec<FeatureVector> {
        let n = feature_words.len();
        let mut feature_vectors = vec![vec![0.0; 2 * n]; corpus.vocabulary().len()];

        if n == 0 {
            return feature_vectors;
        }

        let tokens = corpus.tokens();
        let token_indices = corpus.token_indices();

        // Feature position for every token in the stream (None if not a feature word)
        let feature_positions: Vec<Option<usize>> = tokens
            .iter()
            .map(|token| feature_words.position(token))
            .collect();

        for i in 0..tokens.len() {
            let vector = &mut feature_vectors[token_indices[i]];

            if window < tokens.len() - i {
                for j in 1..=window {
                    if let Some(position) = feature_positions[i + j] {
                        vector[position] += 1.0;
                    }
                }
            }

            if i >= window {
                for j in 1..=window {
                    if let Some(position) = feature_positions[i - j] {
                        vector[n + position] += 1.0;
                    }
                }
            }
        }

        debug!(
            "Built {} feature vector(s) of {} dimension(s)",
            feature_vectors.len(),
            2 * n
        );

        feature_vectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_backward_counts() {
        // stream: a b c a b
        let corpus = Corpus::from_text("a b c\na b");
        let feature_words = FeatureWordSet::from_words(["b"]);

        let vectors = FeatureVectorBuilder::build(&corpus, &feature_words, 1);

        // a@0: next is b -> forward; a@3: next b -> forward, prev c -> nothing
        assert_eq!(vectors[0], vec![2.0, 0.0]);
        // b@1: next c, prev a -> nothing; b@4: last token, prev a -> nothing
        assert_eq!(vectors[1], vec![0.0, 0.0]);
        // c@2: next a, prev b -> backward
        assert_eq!(vectors[2], vec![0.0, 1.0]);
    }

    #[test]
    fn test_edges_only_contribute_with_full_window() {
        // stream: f x f, window 2: position 0 has 2 tokens after -> forward allowed (0 + 2 < 3)
        let corpus = Corpus::from_text("f x f");
        let feature_words = FeatureWordSet::from_words(["f"]);

        let vectors = FeatureVectorBuilder::build(&corpus, &feature_words, 2);

        // f@0 forward sees x, f -> +1; f@2 backward (2 >= 2) sees x, f -> +1
        assert_eq!(vectors[0], vec![1.0, 1.0]);
        // x@1: 1 + 2 == 3 not < 3, 1 < 2 -> no contributions
        assert_eq!(vectors[1], vec![0.0, 0.0]);
    }

    #[test]
    fn test_windows_cross_sentence_boundaries() {
        let corpus = Corpus::from_text("a\nf");
        let feature_words = FeatureWordSet::from_words(["f"]);

        let vectors = FeatureVectorBuilder::build(&corpus, &feature_words, 1);
        assert_eq!(vectors[0], vec![1.0, 0.0]);
    }

    #[test]
    fn test_window_wider_than_stream_yields_zero_vectors() {
        let corpus = Corpus::from_text("a b c");
        let feature_words = FeatureWordSet::from_words(["b"]);

        for window in [3, 10, usize::MAX] {
            let vectors = FeatureVectorBuilder::build(&corpus, &feature_words, window);
            assert_eq!(vectors.len(), 3);
            assert!(vectors.iter().all(|vector| vector == &vec![0.0, 0.0]));
        }
    }
}
