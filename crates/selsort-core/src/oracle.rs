//! Permutation and sortedness oracles.
//!
//! These predicates check outputs; the sorting code never calls them.
//! Permutation equivalence is decided by comparing value→count maps rather
//! than by searching for a sequence of swaps.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::select::Selection;

// ── Multiset view ─────────────────────────────────────────────────────────────

/// Value→occurrence-count view of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiset<T: Ord> {
    counts: BTreeMap<T, usize>,
    len: usize,
}

/// Elements whose counts differ between an expected and an actual multiset.
///
/// Each element is repeated by the size of its count gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisetDiff<T> {
    /// Present in the expected multiset but absent from the actual one.
    pub missing: Vec<T>,
    /// Present in the actual multiset but absent from the expected one.
    pub extra: Vec<T>,
}

impl<T> MultisetDiff<T> {
    /// True when both multisets were equal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

impl<T: Ord> Multiset<T> {
    /// Create an empty multiset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            len: 0,
        }
    }

    /// Add one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    /// Remove one occurrence of `value`.
    ///
    /// Returns `false` if `value` was not present.
    pub fn remove_one(&mut self, value: &T) -> bool {
        let Some(count) = self.counts.get_mut(value) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(value);
        }
        self.len -= 1;
        true
    }

    /// Number of occurrences of `value`.
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Total number of occurrences, counting repeats.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no values are present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate `(value, count)` pairs in ascending value order.
    pub fn counts(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(value, &count)| (value, count))
    }
}

impl<T: Ord + Clone> Multiset<T> {
    /// Build the multiset view of `seq`.
    #[must_use]
    pub fn from_slice(seq: &[T]) -> Self {
        seq.iter().cloned().collect()
    }

    /// Compare `self` (expected) against `actual`.
    #[must_use]
    pub fn difference(&self, actual: &Self) -> MultisetDiff<T> {
        let mut missing = Vec::new();
        let mut extra = Vec::new();

        for (value, &expected) in &self.counts {
            let found = actual.count(value);
            if expected > found {
                missing.extend(std::iter::repeat_n(value.clone(), expected - found));
            }
        }
        for (value, &found) in &actual.counts {
            let expected = self.count(value);
            if found > expected {
                extra.extend(std::iter::repeat_n(value.clone(), found - expected));
            }
        }

        MultisetDiff { missing, extra }
    }
}

impl<T: Ord> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = Self::new();
        for value in iter {
            multiset.insert(value);
        }
        multiset
    }
}

impl<T: Ord> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

// ── Permutation oracle ────────────────────────────────────────────────────────

/// True iff `a` and `b` hold the same multiset of values.
#[must_use]
pub fn is_permutation<T: Ord>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: BTreeMap<&T, isize> = BTreeMap::new();
    for value in a {
        *counts.entry(value).or_insert(0) += 1;
    }
    for value in b {
        match counts.entry(value) {
            Entry::Vacant(_) => return false,
            Entry::Occupied(mut slot) => {
                *slot.get_mut() -= 1;
                if *slot.get() == 0 {
                    slot.remove();
                }
            }
        }
    }
    counts.is_empty()
}

// ── Sortedness oracle ─────────────────────────────────────────────────────────

/// True iff `seq` is in non-decreasing order.
///
/// Empty and single-element sequences are sorted.
#[must_use]
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    first_descent(seq).is_none()
}

/// Index `i` of the first adjacent pair with `seq[i] > seq[i + 1]`.
#[must_use]
pub fn first_descent<T: Ord>(seq: &[T]) -> Option<usize> {
    seq.windows(2).position(|pair| pair[0] > pair[1])
}

/// True iff `x <= y` for every `y` in `seq`. Vacuously true on empty input.
#[must_use]
pub fn le_all<T: Ord>(x: &T, seq: &[T]) -> bool {
    seq.iter().all(|y| x <= y)
}

/// Check that `selection` is a correct extraction from `candidate` and `rest`.
///
/// Holds iff the minimum is `<=` the candidate and every element of `rest`,
/// and the remainder is `{candidate} ∪ rest` minus one occurrence of the
/// minimum.
#[must_use]
pub fn check_selection<T: Ord + Clone>(candidate: &T, rest: &[T], selection: &Selection<T>) -> bool {
    if selection.minimum > *candidate || !le_all(&selection.minimum, rest) {
        return false;
    }
    let mut expected = Multiset::from_slice(rest);
    expected.insert(candidate.clone());
    if !expected.remove_one(&selection.minimum) {
        return false;
    }
    expected == Multiset::from_slice(&selection.remainder)
}
