use pos_inducer::{Corpus, FeatureVectorBuilder, FeatureWordSet, KMeansClusterer};
use test_utils::synthetic_corpus;

const SEEDS: &[usize] = &[0, 1, 2, 3];

fn synthetic_feature_vectors() -> Vec<Vec<f64>> {
    let corpus = Corpus::from_text(&synthetic_corpus(60));
    let feature_words = FeatureWordSet::select(&corpus, 2, 12);
    FeatureVectorBuilder::build(&corpus, &feature_words, 4)
}

#[cfg(test)]
mod kmeans_tests {
    use super::*;

    #[test]
    fn test_clustering_is_deterministic() {
        let vectors = synthetic_feature_vectors();
        let clusterer = KMeansClusterer::new(10);

        let first = clusterer.fit(&vectors, SEEDS).unwrap();
        let second = clusterer.fit(&synthetic_feature_vectors(), SEEDS).unwrap();

        assert_eq!(first.assignment(), second.assignment());
        // Bit-for-bit
        let first_bits: Vec<u64> = first.error_history().iter().map(|e| e.to_bits()).collect();
        let second_bits: Vec<u64> = second.error_history().iter().map(|e| e.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_runs_exactly_the_iteration_budget() {
        let vectors = synthetic_feature_vectors();

        let clustering = KMeansClusterer::new(10).fit(&vectors, SEEDS).unwrap();
        assert_eq!(clustering.iterations(), 10);
        assert_eq!(clustering.cluster_count(), SEEDS.len());
    }

    #[test]
    fn test_every_point_is_assigned_to_a_nearest_centroid() {
        let vectors = synthetic_feature_vectors();
        let iterations = KMeansClusterer::new(10).iterate(&vectors, SEEDS).unwrap();

        for iteration in &iterations {
            for (cluster_index, members) in iteration.assignment.iter().enumerate() {
                for &word_index in members {
                    let point = &vectors[word_index];
                    let assigned = distance(point, &iteration.centroids[cluster_index]);

                    for centroid in &iteration.centroids {
                        assert!(assigned <= distance(point, centroid) + 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_assignment_is_a_partition() {
        let vectors = synthetic_feature_vectors();
        let clustering = KMeansClusterer::new(10).fit(&vectors, SEEDS).unwrap();

        let mut members: Vec<usize> = clustering.assignment().iter().flatten().copied().collect();
        members.sort();
        assert_eq!(members, (0..vectors.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_error_history_reports_each_iteration() {
        let vectors = synthetic_feature_vectors();
        let iterations = KMeansClusterer::new(5).iterate(&vectors, SEEDS).unwrap();
        let clustering = KMeansClusterer::new(5).fit(&vectors, SEEDS).unwrap();

        let errors: Vec<f64> = iterations.iter().map(|it| it.total_error).collect();
        assert_eq!(clustering.error_history(), errors.as_slice());
        assert!(errors.iter().all(|e| *e >= 0.0));
    }

    #[test]
    fn test_collapsed_centroid_is_origin() {
        // Seeds 0 and 1 share a vector, so cluster 1 never wins a point
        let vectors = vec![vec![1.0, 1.0], vec![1.0, 1.0], vec![5.0, 5.0]];
        let iterations = KMeansClusterer::new(2).iterate(&vectors, &[0, 1]).unwrap();

        assert!(iterations[0].assignment[1].is_empty());
        assert_eq!(iterations[0].next_centroids[1], vec![0.0, 0.0]);
    }

    fn distance(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }
}
