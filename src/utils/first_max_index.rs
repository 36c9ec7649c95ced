/// Returns the index and value of the first maximum in `values`.
///
/// The scan starts from `floor` and only replaces the running best on a strictly greater value,
/// so the earliest index wins ties. Returns `None` when nothing exceeds `floor`.
pub fn first_max_index<I>(values: I, floor: f64) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    let mut best_value = floor;

    for (index, value) in values.into_iter().enumerate() {
        if value > best_value {
            best_value = value;
            best = Some((index, value));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_max_wins_ties() {
        assert_eq!(first_max_index(vec![0.1, 0.5, 0.5, 0.2], -1.0), Some((1, 0.5)));
    }

    #[test]
    fn test_zeros_pick_first() {
        assert_eq!(first_max_index(vec![0.0, 0.0, 0.0], -1.0), Some((0, 0.0)));
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(first_max_index(Vec::<f64>::new(), -1.0), None);
    }
}
