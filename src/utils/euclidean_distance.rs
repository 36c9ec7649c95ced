/// Calculate the Euclidean distance between two vectors
pub fn euclidean_distance(v1: &[f64], v2: &[f64]) -> f64 {
    assert_eq!(
        v1.len(),
        v2.len(),
        "Vectors must have the same length for euclidean distance"
    );

    v1.iter()
        .zip(v2)
        .fold(0.0, |sum, (&a, &b)| sum + (a - b) * (a - b))
        .sqrt()
}
