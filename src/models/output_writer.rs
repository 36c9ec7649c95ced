use crate::constants::{CLUSTER_BEGIN_MARKER, CLUSTER_END_MARKER};
use crate::models::{Clustering, TaggedSentence, Vocabulary};
use crate::Error;
use log::debug;
use std::fs;
use std::path::Path;

/// Renders pipeline artifacts in memory and writes each one to disk in a single call.
pub struct OutputWriter;

impl OutputWriter {
    /// `BEGIN CLUSTER`, one member word per line, `END CLUSTER`, blank line; per cluster,
    /// including empty ones.
    pub fn render_clusters(clustering: &Clustering, vocabulary: &Vocabulary) -> String {
        let mut rendered = String::new();

        for members in clustering.assignment() {
            rendered.push_str(CLUSTER_BEGIN_MARKER);
            rendered.push('\n');
            for &word_index in members {
                if let Some(word) = vocabulary.get_word(word_index) {
                    rendered.push_str(word);
                    rendered.push('\n');
                }
            }
            rendered.push_str(CLUSTER_END_MARKER);
            rendered.push_str("\n\n");
        }

        rendered
    }

    pub fn render_tagged_output(sentences: &[TaggedSentence]) -> String {
        sentences.iter().map(TaggedSentence::render).collect()
    }

    /// Writes `contents` to `path`, creating parent directories as needed.
    pub fn write<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), Error> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, contents)?;
        debug!("Wrote {} byte(s) to {}", contents.len(), path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_clusters() {
        let vocabulary: Vocabulary = ["the", "cat", "sat"].into_iter().collect();
        let clustering = Clustering::new(vec![vec![0, 2], vec![], vec![1]], 3, vec![]);

        assert_eq!(
            OutputWriter::render_clusters(&clustering, &vocabulary),
            "BEGIN CLUSTER\nthe\nsat\nEND CLUSTER\n\n\
             BEGIN CLUSTER\nEND CLUSTER\n\n\
             BEGIN CLUSTER\ncat\nEND CLUSTER\n\n"
        );
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("clusters.txt");

        OutputWriter::write(&path, "BEGIN CLUSTER\nEND CLUSTER\n\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "BEGIN CLUSTER\nEND CLUSTER\n\n"
        );
    }
}
