use pos_inducer::{Corpus, HmmTrainer, Pipeline, PipelineConfig, PseudoTagCorpus, TagSet};
use std::borrow::Cow;
use test_utils::{assert_approx_eq, synthetic_corpus};

#[cfg(test)]
mod hmm_tests {
    use super::*;

    #[test]
    fn test_emission_rows_sum_to_one() {
        let config = PipelineConfig {
            feature_word_count: 10,
            stopword_cutoff: 2,
            seed_word_indices: Cow::Owned(vec![0, 1, 2, 3]),
            ..PipelineConfig::default()
        };
        let corpus = Corpus::from_text(&synthetic_corpus(40));
        let induced = Pipeline::new(config).unwrap().induce(&corpus).unwrap();

        let model = induced.tagger.model();
        let tag_counts = model.tag_counts().unwrap();
        for (tag, row) in model.emission().iter().enumerate() {
            let sum: f64 = row.iter().sum();
            if tag_counts[tag] > 0 {
                assert_approx_eq(sum, 1.0, 1e-9);
            } else {
                assert_eq!(sum, 0.0);
            }
        }
    }

    #[test]
    fn test_no_transition_across_sentence_boundary() {
        let tag_set = TagSet::with_cluster_count(3);
        let corpus = PseudoTagCorpus::from_lines([
            "<s> START",
            "the C0",
            "cat C1",
            "</s> END",
            "<s> START",
            "dogs C2",
            "ran C0",
            "</s> END",
        ]);

        let model = HmmTrainer::train(corpus.parsed_lines(&tag_set), &tag_set);

        // C1 ends sentence one, C2 starts sentence two
        assert_eq!(model.transition()[1][2], 0.0);
        assert!(model.transition()[0][1] > 0.0);
        assert!(model.transition()[2][0] > 0.0);
    }

    #[test]
    fn test_transition_rows_sum_below_one_for_sentence_final_tags() {
        let tag_set = TagSet::with_cluster_count(2);
        let corpus =
            PseudoTagCorpus::from_lines(["<s> START", "a C0", "b C1", "c C1", "</s> END"]);

        let model = HmmTrainer::train(corpus.parsed_lines(&tag_set), &tag_set);

        // C1 occurs twice but only transitions once
        let row_sum: f64 = model.transition()[1].iter().sum();
        assert_approx_eq(row_sum, 0.5, 1e-12);
    }

    #[test]
    fn test_trainer_vocabulary_in_first_seen_order() {
        let tag_set = TagSet::with_cluster_count(2);
        let corpus = PseudoTagCorpus::from_lines(["<s> START", "b C0", "a C1", "b C1", "</s> END"]);

        let model = HmmTrainer::train(corpus.parsed_lines(&tag_set), &tag_set);
        assert_eq!(model.vocabulary().words(), &["b", "a"]);
        assert_approx_eq(model.emission()[1][0], 0.5, 1e-12);
    }
}
