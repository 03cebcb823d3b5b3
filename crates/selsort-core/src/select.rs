//! Minimum extraction.

use serde::{Deserialize, Serialize};

/// Result of extracting the minimum from a candidate plus a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection<T> {
    /// Smallest value of `{candidate} ∪ rest`.
    pub minimum: T,
    /// Every other value, in the order it was displaced during the scan.
    pub remainder: Vec<T>,
}

/// Extract the minimum of `candidate` and `rest`.
///
/// Scans `rest` left to right keeping a running best, initialised to
/// `candidate`. At each element `h` the running best is compared with `h`
/// using `<=`; whichever loses the comparison is appended to the remainder.
///
/// The remainder always holds `rest.len()` values: the multiset
/// `{candidate} ∪ rest` with exactly one occurrence of `minimum` removed.
/// With repeated minimal values, which instance ends up as `minimum` is not
/// part of the contract.
#[must_use]
pub fn select<T, I>(candidate: T, rest: I) -> Selection<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let rest = rest.into_iter();
    let mut remainder = Vec::with_capacity(rest.size_hint().0);
    let mut minimum = candidate;

    for h in rest {
        if minimum <= h {
            remainder.push(h);
        } else {
            remainder.push(std::mem::replace(&mut minimum, h));
        }
    }

    Selection { minimum, remainder }
}

/// Split `seq` into head and tail and extract the minimum.
///
/// Returns `None` for the empty sequence.
#[must_use]
pub fn select_first<T: Ord>(seq: Vec<T>) -> Option<Selection<T>> {
    let mut iter = seq.into_iter();
    let head = iter.next()?;
    Some(select(head, iter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{Multiset, le_all};

    #[test]
    fn empty_rest_returns_candidate() {
        let s = select(7_u64, Vec::new());
        assert_eq!(s.minimum, 7);
        assert!(s.remainder.is_empty());
    }

    #[test]
    fn candidate_already_smallest() {
        let s = select(1, vec![4, 2, 9]);
        assert_eq!(s.minimum, 1);
        assert_eq!(s.remainder, vec![4, 2, 9]);
    }

    #[test]
    fn displaced_values_keep_scan_order() {
        // 3 is displaced by the first 1; the second 1 loses the `<=` tie.
        let s = select(3, vec![1, 4, 1, 5]);
        assert_eq!(s.minimum, 1);
        assert_eq!(s.remainder, vec![3, 4, 1, 5]);
    }

    #[test]
    fn minimum_at_end() {
        let s = select(5, vec![4, 3, 2, 1]);
        assert_eq!(s.minimum, 1);
        assert_eq!(s.remainder, vec![5, 4, 3, 2]);
    }

    #[test]
    fn all_equal_values() {
        let s = select(2, vec![2, 2, 2]);
        assert_eq!(s.minimum, 2);
        assert_eq!(s.remainder, vec![2, 2, 2]);
    }

    #[test]
    fn remainder_accounts_for_every_value_but_one_minimum() {
        let candidate = 9;
        let rest = vec![3, 8, 3, 1, 7, 1];
        let s = select(candidate, rest.clone());

        assert!(s.minimum <= candidate);
        assert!(le_all(&s.minimum, &rest));

        let mut expected = Multiset::from_slice(&rest);
        expected.insert(candidate);
        assert!(expected.remove_one(&s.minimum));
        assert_eq!(Multiset::from_slice(&s.remainder), expected);
    }

    #[test]
    fn works_for_strings() {
        let s = select("pear", vec!["fig", "apple", "kiwi"]);
        assert_eq!(s.minimum, "apple");
        assert_eq!(s.remainder, vec!["pear", "fig", "kiwi"]);
    }

    #[test]
    fn select_first_on_empty_is_none() {
        assert!(select_first(Vec::<u64>::new()).is_none());
    }

    #[test]
    fn select_first_uses_head_as_candidate() {
        let s = select_first(vec![3, 1, 4, 1, 5]).expect("non-empty");
        assert_eq!(s, select(3, vec![1, 4, 1, 5]));
    }

    #[test]
    fn selection_serializes_to_json() {
        let s = select(3_u64, vec![1, 2]);
        let json = serde_json::to_string(&s).expect("serialize");
        assert_eq!(json, r#"{"minimum":1,"remainder":[3,2]}"#);
    }
}
