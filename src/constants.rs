use crate::models::{LanguageProfile, PipelineConfig};

/// Initial centroids are the feature vectors of these vocabulary indices. One cluster (and one
/// pseudo-tag) is created per entry.
pub const DEFAULT_SEED_WORD_INDICES: &[usize] = &[
    1, 94, 109, 44, 77, 131, 156, 406, 244, 444, 14, 29, 295, 806, 157, 362, 855, 781, 100, 494,
    2017, 222, 199, 40, 400, 689,
];

pub const DEFAULT_PIPELINE_CONFIG: PipelineConfig = PipelineConfig {
    feature_word_count: 100,
    stopword_cutoff: 25,
    context_window: 4,
    seed_word_indices: std::borrow::Cow::Borrowed(DEFAULT_SEED_WORD_INDICES),
    max_iterations: 10,
    convergence_threshold: None,
    unknown_word_probability: 0.001,
};

pub const DEFAULT_LANGUAGE_TABLE: &[LanguageProfile] = &[LanguageProfile {
    name: std::borrow::Cow::Borrowed("hindi"),
    corpus_path: std::borrow::Cow::Borrowed("./data/hindi.txt"),
    training_path: std::borrow::Cow::Borrowed("./data/hindi_training_unsupervised.txt"),
    clusters_path: std::borrow::Cow::Borrowed("./output/hindi_clusters.txt"),
    tags_path: std::borrow::Cow::Borrowed("./output/hindi_tags_unsupervised.txt"),
}];

// Pseudo-tagged corpus markers
pub const SENTENCE_START_LINE: &str = "<s> START";
pub const SENTENCE_END_LINE: &str = "</s> END";
pub const EXCLUSION_MARKERS: &[&str] = &["<s>", "</s>", "START", "END"];

// Rendered output markers
pub const CLUSTER_BEGIN_MARKER: &str = "BEGIN CLUSTER";
pub const CLUSTER_END_MARKER: &str = "END CLUSTER";
pub const TAGGED_SENTENCE_TERMINATOR: &str = " ._.";

/// Prefix applied to a cluster index to form its pseudo-tag label.
pub const PSEUDO_TAG_PREFIX: &str = "C";
