//! Brute-force reference for checking selector output.
//!
//! Sorts the whole input descending and keeps the first `k`. Results are
//! compared as multisets, since the selector promises no order.

/// Outcome of checking a selection against the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification<T> {
    /// Reference result, descending.
    pub expected: Vec<T>,
    /// Selector result, descending.
    pub actual: Vec<T>,
    pub matches: bool,
}

pub fn reference_top_k<T: Ord>(mut input: Vec<T>, k: usize) -> Vec<T> {
    input.sort_by(|a, b| b.cmp(a));
    input.truncate(k);
    input
}

/// True when `a` and `b` hold the same elements with the same multiplicities.
pub fn same_multiset<T: Ord>(mut a: Vec<T>, mut b: Vec<T>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.sort_by(|x, y| y.cmp(x));
    b.sort_by(|x, y| y.cmp(x));
    a == b
}

/// Checks `actual`, a selection of `k` elements from `input`, against the
/// reference result for the same input.
///
/// Takes `input` by value since the reference sorts it in place.
pub fn verify<T: Ord + Clone>(input: Vec<T>, k: usize, actual: &[T]) -> Verification<T> {
    let n = input.len();
    let expected = reference_top_k(input, k);
    let mut actual = actual.to_vec();
    actual.sort_by(|a, b| b.cmp(a));

    let matches = expected == actual;
    if !matches {
        tracing::warn!(
            k,
            n,
            expected_len = expected.len(),
            actual_len = actual.len(),
            "selection disagrees with reference"
        );
    }

    Verification {
        expected,
        actual,
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::select;

    #[test]
    fn test_reference_top_k_truncates() {
        assert_eq!(reference_top_k(vec![5, 1, 9, 3], 2), vec![9, 5]);
        assert_eq!(reference_top_k(vec![5, 1], 4), vec![5, 1]);
        assert!(reference_top_k(vec![5, 1], 0).is_empty());
    }

    #[test]
    fn test_same_multiset() {
        assert!(same_multiset(vec![1, 2, 2], vec![2, 1, 2]));
        assert!(!same_multiset(vec![1, 2, 2], vec![1, 1, 2]));
        assert!(!same_multiset(vec![1, 2], vec![1, 2, 3]));
        assert!(same_multiset(Vec::<i32>::new(), Vec::new()));
    }

    #[test]
    fn test_verify_matches() {
        let input = vec![5, 1, 9, 3, 14, 7, 2];
        let selected = select(input.clone(), 3);

        let check = verify(input, 3, &selected);
        assert!(check.matches);
        assert_eq!(check.expected, vec![14, 9, 7]);
        assert_eq!(check.actual, check.expected);
    }

    #[test]
    fn test_verify_reports_mismatch() {
        let check = verify(vec![5, 1, 9, 3, 14, 7, 2], 3, &[14, 9, 5]);
        assert!(!check.matches);
        assert_eq!(check.expected, vec![14, 9, 7]);
        assert_eq!(check.actual, vec![14, 9, 5]);

        let short = verify(vec![5, 1, 9], 2, &[9]);
        assert!(!short.matches);
    }
}
