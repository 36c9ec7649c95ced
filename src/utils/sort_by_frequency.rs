use crate::types::{Token, TokenFrequency};

/// Sorts `(token, frequency)` pairs for feature-word ranking.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Equal frequencies keep their incoming order. Fed with first-seen
///   frequencies, this means earlier tokens rank higher on ties.
///
/// ### Example:
/// ```ignore
/// let sorted = sort_by_frequency(vec![
///     ("x".to_string(), 1),
///     ("y".to_string(), 3),
///     ("z".to_string(), 1),
/// ]);
/// assert_eq!(sorted, vec![
///     ("y".to_string(), 3),
///     ("x".to_string(), 1),
///     ("z".to_string(), 1),
/// ]);
/// ```
pub fn sort_by_frequency(
    mut frequencies: Vec<(Token, TokenFrequency)>,
) -> Vec<(Token, TokenFrequency)> {
    // `sort_by` is stable
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));

    frequencies
}
