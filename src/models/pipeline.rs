use crate::models::{
    Clustering, Corpus, FeatureVectorBuilder, FeatureWordSet, KMeansClusterer, PipelineConfig,
    PosTagger, PseudoTagCorpus, TagSet, Vocabulary,
};
use crate::Error;
use log::info;

/// Everything produced while inducing pseudo-tags from a raw corpus.
#[derive(Debug, Clone)]
pub struct InducedTagging {
    pub vocabulary: Vocabulary,
    pub feature_words: FeatureWordSet,
    pub clustering: Clustering,
    pub tag_set: TagSet,
    pub pseudo_tag_corpus: PseudoTagCorpus,
    pub tagger: PosTagger,
}

/// Corpus → vocabulary → feature words → feature vectors → k-means → pseudo-tags → HMM.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn tag_set(&self) -> TagSet {
        TagSet::with_cluster_count(self.config.cluster_count())
    }

    pub fn induce(&self, corpus: &Corpus) -> Result<InducedTagging, Error> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus(
                "Training corpus contains no tokens".to_string(),
            ));
        }

        info!("Selecting feature words...");
        let feature_words = FeatureWordSet::select(
            corpus,
            self.config.stopword_cutoff,
            self.config.feature_word_count,
        );

        info!("Building feature vectors...");
        let feature_vectors =
            FeatureVectorBuilder::build(corpus, &feature_words, self.config.context_window);

        info!(
            "Clustering {} word type(s) into {} cluster(s)...",
            feature_vectors.len(),
            self.config.cluster_count()
        );
        let clustering = KMeansClusterer::from_config(&self.config)
            .fit(&feature_vectors, &self.config.seed_word_indices)?;

        let tag_set = self.tag_set();

        info!("Generating pseudo-tagged corpus...");
        let pseudo_tag_corpus = PseudoTagCorpus::generate(corpus, &clustering, &tag_set);

        let tagger = PosTagger::from_pseudo_tag_corpus(
            &pseudo_tag_corpus,
            &tag_set,
            self.config.unknown_word_probability,
        );

        Ok(InducedTagging {
            vocabulary: corpus.vocabulary().clone(),
            feature_words,
            clustering,
            tag_set,
            pseudo_tag_corpus,
            tagger,
        })
    }

    /// Trains only the HMM from an existing pseudo-tagged corpus.
    pub fn tagger_from_pseudo_tag_corpus(&self, pseudo_tag_corpus: &PseudoTagCorpus) -> PosTagger {
        PosTagger::from_pseudo_tag_corpus(
            pseudo_tag_corpus,
            &self.tag_set(),
            self.config.unknown_word_probability,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn small_config() -> PipelineConfig {
        PipelineConfig {
            feature_word_count: 5,
            stopword_cutoff: 0,
            context_window: 1,
            seed_word_indices: Cow::Owned(vec![0, 1]),
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_every_word_lands_in_exactly_one_cluster() {
        let corpus = Corpus::from_text("the cat sat\nthe dog ran");
        let induced = Pipeline::new(small_config())
            .unwrap()
            .induce(&corpus)
            .unwrap();

        let mut members: Vec<usize> = induced
            .clustering
            .assignment()
            .iter()
            .flatten()
            .copied()
            .collect();
        members.sort();
        assert_eq!(members, vec![0, 1, 2, 3, 4]);
        assert_eq!(induced.tag_set.len(), 2);
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let corpus = Corpus::from_text("\n\n");
        let result = Pipeline::new(small_config()).unwrap().induce(&corpus);
        assert!(matches!(result, Err(Error::EmptyCorpus(_))));
    }

    #[test]
    fn test_default_seeds_need_large_vocabulary() {
        let corpus = Corpus::from_text("the cat sat");
        let result = Pipeline::new(PipelineConfig::default())
            .unwrap()
            .induce(&corpus);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
