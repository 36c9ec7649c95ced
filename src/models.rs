pub mod config;
pub use config::{LanguageProfile, LanguageTable, PipelineConfig};

pub mod corpus;
pub use corpus::Corpus;

pub mod error;
pub use error::Error;

pub mod feature_vector_builder;
pub use feature_vector_builder::FeatureVectorBuilder;

pub mod feature_word_set;
pub use feature_word_set::FeatureWordSet;

pub mod hidden_markov_model;
pub use hidden_markov_model::{HiddenMarkovModel, HmmTrainer};

pub mod kmeans_clusterer;
pub use kmeans_clusterer::{Clustering, ClusteringIteration, KMeansClusterer};

pub mod output_writer;
pub use output_writer::OutputWriter;

pub mod pipeline;
pub use pipeline::{InducedTagging, Pipeline};

pub mod pos_tagger;
pub use pos_tagger::PosTagger;

pub mod pseudo_tag_corpus;
pub use pseudo_tag_corpus::{PseudoTagCorpus, PseudoTagLine};

pub mod tag_set;
pub use tag_set::TagSet;

pub mod tagged_sentence;
pub use tagged_sentence::TaggedSentence;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod viterbi_decoder;
pub use viterbi_decoder::{ViterbiDecoder, ViterbiState};

pub mod vocabulary;
pub use vocabulary::Vocabulary;
