use crate::models::PipelineConfig;
use crate::types::{Centroid, ClusterAssignment, ClusterIndex, FeatureVector, WordIndex};
use crate::utils::euclidean_distance;
use crate::Error;
use log::{debug, info};

/// Lloyd's k-means with caller-chosen seed points and a fixed iteration budget.
#[derive(Debug, Clone, Copy)]
pub struct KMeansClusterer {
    pub max_iterations: usize,
    pub convergence_threshold: Option<f64>,
}

/// Result of one assignment pass plus the centroid update that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringIteration {
    /// Centroids the assignment was computed against.
    pub centroids: Vec<Centroid>,
    pub assignment: ClusterAssignment,
    /// Sum of distances from every point to its assigned centroid.
    pub total_error: f64,
    /// Centroids recomputed from `assignment`; input to the next iteration.
    pub next_centroids: Vec<Centroid>,
}

/// Frozen clustering after the last iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    assignment: ClusterAssignment,
    labels: Vec<ClusterIndex>,
    error_history: Vec<f64>,
}

impl Clustering {
    pub fn new(assignment: ClusterAssignment, point_count: usize, error_history: Vec<f64>) -> Self {
        let mut labels = vec![ClusterIndex::MAX; point_count];

        // Clusters are disjoint; the lowest cluster index still wins if they ever overlap.
        for (cluster_index, members) in assignment.iter().enumerate().rev() {
            for &word_index in members {
                if word_index < labels.len() {
                    labels[word_index] = cluster_index;
                }
            }
        }

        Self {
            assignment,
            labels,
            error_history,
        }
    }

    pub fn assignment(&self) -> &ClusterAssignment {
        &self.assignment
    }

    /// Cluster containing the given vocabulary index.
    pub fn cluster_of(&self, word_index: WordIndex) -> Option<ClusterIndex> {
        self.labels
            .get(word_index)
            .copied()
            .filter(|&cluster_index| cluster_index != ClusterIndex::MAX)
    }

    pub fn cluster_count(&self) -> usize {
        self.assignment.len()
    }

    /// Total error of each iteration, in order.
    pub fn error_history(&self) -> &[f64] {
        &self.error_history
    }

    pub fn iterations(&self) -> usize {
        self.error_history.len()
    }
}

impl KMeansClusterer {
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            convergence_threshold: None,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            convergence_threshold: config.convergence_threshold,
        }
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = Some(threshold);
        self
    }

    /// Copies the feature vectors of the seed words as initial centroids.
    pub fn seed_centroids(
        feature_vectors: &[FeatureVector],
        seed_word_indices: &[WordIndex],
    ) -> Result<Vec<Centroid>, Error> {
        if seed_word_indices.is_empty() {
            return Err(Error::ConfigError(
                "At least one seed word index is required".to_string(),
            ));
        }

        seed_word_indices
            .iter()
            .map(|&index| {
                feature_vectors.get(index).cloned().ok_or_else(|| {
                    Error::ConfigError(format!(
                        "Seed word index {} is out of range for a vocabulary of {} word(s)",
                        index,
                        feature_vectors.len()
                    ))
                })
            })
            .collect()
    }

    /// Assigns every point to its nearest centroid. On equal distances the lowest centroid index
    /// wins.
    pub fn assign(
        feature_vectors: &[FeatureVector],
        centroids: &[Centroid],
    ) -> (ClusterAssignment, f64) {
        let mut assignment: ClusterAssignment = vec![Vec::new(); centroids.len()];
        let mut total_error = 0.0;

        for (word_index, point) in feature_vectors.iter().enumerate() {
            let mut closest: Option<(ClusterIndex, f64)> = None;

            for (cluster_index, centroid) in centroids.iter().enumerate() {
                let distance = euclidean_distance(point, centroid);
                if closest.map_or(true, |(_, best)| distance < best) {
                    closest = Some((cluster_index, distance));
                }
            }

            if let Some((cluster_index, distance)) = closest {
                assignment[cluster_index].push(word_index);
                total_error += distance;
            }
        }

        (assignment, total_error)
    }

    /// Coordinate-wise mean of each cluster's members. Empty clusters collapse to the origin.
    pub fn recompute_centroids(
        feature_vectors: &[FeatureVector],
        assignment: &ClusterAssignment,
        dimensions: usize,
    ) -> Vec<Centroid> {
        assignment
            .iter()
            .map(|members| {
                let mut mean = vec![0.0; dimensions];

                if members.is_empty() {
                    return mean;
                }

                for &word_index in members {
                    for (sum, value) in mean.iter_mut().zip(&feature_vectors[word_index]) {
                        *sum += value;
                    }
                }

                let count = members.len() as f64;
                for value in mean.iter_mut() {
                    *value /= count;
                }

                mean
            })
            .collect()
    }

    /// One full iteration: a pure function from (centroids, data) to
    /// (assignment, error, new centroids).
    pub fn step(
        feature_vectors: &[FeatureVector],
        centroids: Vec<Centroid>,
    ) -> ClusteringIteration {
        let (assignment, total_error) = Self::assign(feature_vectors, &centroids);

        let dimensions = centroids.first().map_or(0, |centroid| centroid.len());
        let next_centroids = Self::recompute_centroids(feature_vectors, &assignment, dimensions);

        ClusteringIteration {
            centroids,
            assignment,
            total_error,
            next_centroids,
        }
    }

    /// Runs every iteration and returns each one, oldest first.
    pub fn iterate(
        &self,
        feature_vectors: &[FeatureVector],
        seed_word_indices: &[WordIndex],
    ) -> Result<Vec<ClusteringIteration>, Error> {
        let mut centroids = Self::seed_centroids(feature_vectors, seed_word_indices)?;
        let mut iterations: Vec<ClusteringIteration> = Vec::with_capacity(self.max_iterations);

        for iteration_number in 1..=self.max_iterations {
            let iteration = Self::step(feature_vectors, centroids);

            info!(
                "Iteration {} error: {}",
                iteration_number, iteration.total_error
            );

            let converged = match (self.convergence_threshold, iterations.last()) {
                (Some(threshold), Some(previous)) => {
                    (previous.total_error - iteration.total_error).abs() <= threshold
                }
                _ => false,
            };

            centroids = iteration.next_centroids.clone();
            iterations.push(iteration);

            if converged {
                debug!("Converged after {} iteration(s)", iteration_number);
                break;
            }
        }

        Ok(iterations)
    }

    pub fn fit(
        &self,
        feature_vectors: &[FeatureVector],
        seed_word_indices: &[WordIndex],
    ) -> Result<Clustering, Error> {
        let iterations = self.iterate(feature_vectors, seed_word_indices)?;

        let error_history: Vec<f64> = iterations.iter().map(|it| it.total_error).collect();

        let assignment = iterations
            .into_iter()
            .last()
            .map(|it| it.assignment)
            .unwrap_or_else(|| vec![Vec::new(); seed_word_indices.len()]);

        Ok(Clustering::new(
            assignment,
            feature_vectors.len(),
            error_history,
        ))
    }
}
