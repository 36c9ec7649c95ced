use crate::constants::DEFAULT_LANGUAGE_TABLE;
use crate::utils::open_text_reader;
use crate::Error;
use csv::ReaderBuilder;
use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

/// Tunables for vocabulary, feature, clustering, and decoding stages.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Number of feature words (`N`); feature vectors have `2N` dimensions.
    pub feature_word_count: usize,
    /// Number of most frequent tokens discarded before feature words are chosen.
    pub stopword_cutoff: usize,
    /// Positions scanned on each side of a token.
    pub context_window: usize,
    /// Vocabulary indices whose feature vectors seed the centroids. One cluster per entry.
    pub seed_word_indices: Cow<'static, [usize]>,
    pub max_iterations: usize,
    /// Stops clustering early once the total error changes by no more than this amount.
    pub convergence_threshold: Option<f64>,
    /// Emission probability used for every tag when a word is not in the vocabulary.
    pub unknown_word_probability: f64,
}

impl PipelineConfig {
    pub fn cluster_count(&self) -> usize {
        self.seed_word_indices.len()
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.seed_word_indices.is_empty() {
            return Err(Error::ConfigError(
                "At least one seed word index is required".to_string(),
            ));
        }

        if self.context_window == 0 {
            return Err(Error::ConfigError(
                "Context window must be at least 1".to_string(),
            ));
        }

        if self.max_iterations == 0 {
            return Err(Error::ConfigError(
                "Clustering needs at least one iteration".to_string(),
            ));
        }

        if let Some(threshold) = self.convergence_threshold {
            if threshold.is_nan() || threshold < 0.0 {
                return Err(Error::ConfigError(format!(
                    "Convergence threshold must be non-negative, got {}",
                    threshold
                )));
            }
        }

        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        crate::constants::DEFAULT_PIPELINE_CONFIG
    }
}

/// Where a language's corpus lives and where its artifacts are written.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    pub name: Cow<'static, str>,
    pub corpus_path: Cow<'static, str>,
    pub training_path: Cow<'static, str>,
    pub clusters_path: Cow<'static, str>,
    pub tags_path: Cow<'static, str>,
}

/// Ordered language profiles, selected by integer index on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageTable {
    profiles: Vec<LanguageProfile>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self {
            profiles: DEFAULT_LANGUAGE_TABLE.to_vec(),
        }
    }
}

impl LanguageTable {
    pub fn new(profiles: Vec<LanguageProfile>) -> Self {
        Self { profiles }
    }

    /// Reads a table with the headers
    /// `Language,Corpus Path,Training Path,Clusters Path,Tags Path`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let column = |name: &str| -> Result<usize, Error> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
        };

        let language_col = column("Language")?;
        let corpus_col = column("Corpus Path")?;
        let training_col = column("Training Path")?;
        let clusters_col = column("Clusters Path")?;
        let tags_col = column("Tags Path")?;

        let mut profiles = Vec::new();

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let field = |col: usize, name: &str| -> Result<Cow<'static, str>, Error> {
                record
                    .get(col)
                    .filter(|value| !value.is_empty())
                    .map(|value| Cow::Owned(value.to_string()))
                    .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", name)))
            };

            profiles.push(LanguageProfile {
                name: field(language_col, "Language")?,
                corpus_path: field(corpus_col, "Corpus Path")?,
                training_path: field(training_col, "Training Path")?,
                clusters_path: field(clusters_col, "Clusters Path")?,
                tags_path: field(tags_col, "Tags Path")?,
            });
        }

        if profiles.is_empty() {
            return Err(Error::ParserError(
                "Language table contains no entries".to_string(),
            ));
        }

        Ok(Self { profiles })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let reader = open_text_reader(path.as_ref())?;
        Self::from_csv_reader(reader)
    }

    pub fn get(&self, language_index: usize) -> Result<&LanguageProfile, Error> {
        self.profiles.get(language_index).ok_or_else(|| {
            Error::ConfigError(format!(
                "Unknown language index {} (table has {} entr{})",
                language_index,
                self.profiles.len(),
                if self.profiles.len() == 1 { "y" } else { "ies" }
            ))
        })
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles.iter()
    }
}
