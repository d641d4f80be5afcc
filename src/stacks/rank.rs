//! Dense ranking of the initial input.

use super::ranked::Ranked;

/// For each value, the number of values in the set strictly smaller than it.
///
/// Quadratic, which is fine for the input sizes this crate targets. Values are
/// assumed distinct; with duplicates the result is not a permutation.
pub fn ranks(values: &[i32]) -> Vec<usize> {
    values
        .iter()
        .map(|v| values.iter().filter(|w| *w < v).count())
        .collect()
}

/// Pair every value with its rank, preserving input order.
pub fn rank_values(values: &[i32]) -> Vec<Ranked> {
    values
        .iter()
        .zip(ranks(values))
        .map(|(&value, rank)| Ranked::new(value, rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(ranks(&[]).is_empty());
    }

    #[test]
    fn dense_ranks() {
        assert_eq!(ranks(&[42, -3, 7, i32::MIN, i32::MAX]), vec![3, 1, 2, 0, 4]);
    }

    #[test]
    fn ranks_form_a_permutation() {
        let values = [9, 1, 8, 2, 7, 3, 6, 4, 5, 0];
        let mut r = ranks(&values);
        r.sort_unstable();
        assert_eq!(r, (0..values.len()).collect::<Vec<_>>());
    }

    #[test]
    fn rank_values_keeps_order() {
        let ranked = rank_values(&[5, -1]);
        assert_eq!(ranked, vec![Ranked::new(5, 1), Ranked::new(-1, 0)]);
    }
}
