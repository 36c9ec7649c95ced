#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod constants;
pub use constants::{
    DEFAULT_LANGUAGE_TABLE, DEFAULT_PIPELINE_CONFIG, DEFAULT_SEED_WORD_INDICES,
    SENTENCE_END_LINE, SENTENCE_START_LINE,
};
pub mod models;
pub use models::{
    Clustering, Corpus, Error, FeatureVectorBuilder, FeatureWordSet, HiddenMarkovModel,
    HmmTrainer, InducedTagging, KMeansClusterer, LanguageProfile, LanguageTable, OutputWriter,
    Pipeline, PipelineConfig, PosTagger, PseudoTagCorpus, PseudoTagLine, TagSet, TaggedSentence,
    Tokenizer, ViterbiDecoder, ViterbiState, Vocabulary,
};
pub mod types;
mod utils;
pub use types::{
    Centroid, ClusterAssignment, ClusterIndex, FeatureVector, ProbabilityMatrix, TagIndex, Token,
    TokenRef, WordIndex,
};
pub use utils::read_text_lines;

use log::info;
use std::path::{Path, PathBuf};

/// Induces pseudo-tags from `corpus_text` and tags every line of `test_text`.
pub fn induce_pos_tags(
    corpus_text: &str,
    test_text: &str,
    config: &PipelineConfig,
) -> Result<Vec<TaggedSentence>, Error> {
    let corpus = Corpus::from_text(corpus_text);
    let induced = Pipeline::new(config.clone())?.induce(&corpus)?;

    induced.tagger.tag_lines(test_text.lines())
}

/// Files written by `tag_file_for_language`.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRunOutputs {
    pub clusters_path: Option<PathBuf>,
    pub training_path: PathBuf,
    pub tags_path: PathBuf,
    pub tagged_sentence_count: usize,
}

/// Runs the full batch for one language profile.
///
/// With `skip_clustering`, the profile's existing pseudo-tagged training file is reused and
/// only the HMM is trained; otherwise the corpus is clustered and the training file rewritten.
pub fn tag_file_for_language(
    profile: &LanguageProfile,
    test_file_path: &Path,
    config: &PipelineConfig,
    skip_clustering: bool,
) -> Result<LanguageRunOutputs, Error> {
    let pipeline = Pipeline::new(config.clone())?;
    let training_path = PathBuf::from(&*profile.training_path);

    let (tagger, clusters_path) = if skip_clustering {
        info!(
            "Reusing pseudo-tagged corpus at {}",
            training_path.display()
        );
        let pseudo_tag_corpus = PseudoTagCorpus::from_path(&training_path)?;
        (pipeline.tagger_from_pseudo_tag_corpus(&pseudo_tag_corpus), None)
    } else {
        info!("Building vocabulary from {}...", profile.corpus_path);
        let corpus = Corpus::from_path(&*profile.corpus_path)?;
        let induced = pipeline.induce(&corpus)?;

        let clusters_path = PathBuf::from(&*profile.clusters_path);
        OutputWriter::write(
            &clusters_path,
            &OutputWriter::render_clusters(&induced.clustering, &induced.vocabulary),
        )?;
        info!(
            "Kindly check {} for clusters and words in that cluster",
            clusters_path.display()
        );

        OutputWriter::write(&training_path, &induced.pseudo_tag_corpus.render())?;

        (induced.tagger, Some(clusters_path))
    };

    let test_lines = read_text_lines(test_file_path)?;
    let tagged_sentences = tagger.tag_lines(&test_lines)?;

    let tags_path = PathBuf::from(&*profile.tags_path);
    OutputWriter::write(
        &tags_path,
        &OutputWriter::render_tagged_output(&tagged_sentences),
    )?;
    info!("Kindly check {} file for POS tags.", tags_path.display());

    Ok(LanguageRunOutputs {
        clusters_path,
        training_path,
        tags_path,
        tagged_sentence_count: tagged_sentences.len(),
    })
}
