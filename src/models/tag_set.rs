use crate::constants::PSEUDO_TAG_PREFIX;
use crate::types::TagIndex;
use std::collections::HashMap;

/// The pseudo-tag alphabet `C0..C{K-1}`, enumerated in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSet {
    labels: Vec<String>,
    indices: HashMap<String, TagIndex>,
}

impl TagSet {
    pub fn with_cluster_count(cluster_count: usize) -> Self {
        Self::from_labels((0..cluster_count).map(|i| format!("{}{}", PSEUDO_TAG_PREFIX, i)))
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let indices = labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.clone(), index))
            .collect();

        Self { labels, indices }
    }

    pub fn index_of(&self, label: &str) -> Option<TagIndex> {
        self.indices.get(label).copied()
    }

    pub fn label(&self, index: TagIndex) -> Option<&str> {
        self.labels.get(index).map(|label| label.as_str())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
