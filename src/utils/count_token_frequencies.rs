use crate::types::{Token, TokenFrequency};
use std::collections::HashMap;

/// Counts token frequencies while remembering the order in which tokens were first seen.
///
/// # Arguments
/// * `tokens` - The flattened token stream to analyze.
///
/// # Returns
/// * A `Vec` of `(token, frequency)` pairs in first-seen order.
///
/// # Example
/// ```ignore
/// let tokens = vec!["a".to_string(), "b".to_string(), "a".to_string()];
/// let frequencies = count_token_frequencies(&tokens);
/// assert_eq!(frequencies, vec![("a".to_string(), 2), ("b".to_string(), 1)]);
/// ```
pub fn count_token_frequencies(tokens: &[Token]) -> Vec<(Token, TokenFrequency)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut frequencies: Vec<(Token, TokenFrequency)> = Vec::new();

    for token in tokens {
        match positions.get(token.as_str()) {
            Some(&position) => frequencies[position].1 += 1,
            None => {
                positions.insert(token.as_str(), frequencies.len());
                frequencies.push((token.clone(), 1));
            }
        }
    }

    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_in_first_seen_order() {
        let tokens: Vec<Token> = ["b", "a", "b", "c", "a", "b"]
            .iter()
            .map(|t| t.to_string())
            .collect();

        assert_eq!(
            count_token_frequencies(&tokens),
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }
}
