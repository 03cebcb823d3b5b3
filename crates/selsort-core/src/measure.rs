//! Measure-based selection sort.
//!
//! Every extraction returns a remainder exactly one element shorter than the
//! sequence it came from, so recursing on the remainder terminates after
//! `seq.len()` steps without any external counter.

use tracing::trace;

use crate::select::select_first;

/// Sort `seq` in non-decreasing order by repeated minimum extraction.
///
/// The output is a permutation of `seq` and is sorted. Same function as
/// [`crate::fuel::selection_sort`], with no fuel to get wrong.
#[must_use]
pub fn selsort<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    selsort_owned(seq.to_vec())
}

/// Sort an owned sequence, moving its values instead of cloning them.
#[must_use]
pub fn selsort_owned<T: Ord>(seq: Vec<T>) -> Vec<T> {
    let mut sorted = Vec::with_capacity(seq.len());
    let mut measure = seq.len();
    let mut pending = seq;

    while let Some(selection) = select_first(pending) {
        debug_assert!(selection.remainder.len() < measure);
        measure = selection.remainder.len();
        trace!(step = sorted.len(), measure, "extracted minimum");

        sorted.push(selection.minimum);
        pending = selection.remainder;
    }

    sorted
}
