// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A stable identifier for a word type, assigned in first-seen order by a `Vocabulary`.
pub type WordIndex = usize;

/// Index of a pseudo-tag within a `TagSet` (`0` is `C0`, `1` is `C1`, ...).
pub type TagIndex = usize;

/// Index of a cluster produced by k-means. Cluster `i` becomes pseudo-tag `Ci`.
pub type ClusterIndex = usize;

/// A point in the `2N`-dimensional context space. The first `N` dimensions count feature
/// words seen after a word, the last `N` count feature words seen before it.
pub type FeatureVector = Vec<f64>;

/// A k-means centroid, living in the same space as a `FeatureVector`.
pub type Centroid = Vec<f64>;

/// Mapping from cluster index to the word indices currently assigned to that cluster.
pub type ClusterAssignment = Vec<Vec<WordIndex>>;

/// Row-major probability matrix (`matrix[row][column]`).
pub type ProbabilityMatrix = Vec<Vec<f64>>;

/// Represents the total number of occurrences of a token within a corpus.
pub type TokenFrequency = usize;
