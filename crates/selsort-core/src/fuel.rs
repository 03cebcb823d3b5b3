//! Fuel-bounded selection sort (legacy entry point).
//!
//! Each extraction consumes one unit of caller-supplied fuel, so the loop
//! stops even if the remainder never got shorter. Correct output needs
//! `fuel >= seq.len()`. With less fuel the sort returns early with only the
//! `fuel` smallest values: the output is sorted but is *not* a permutation
//! of the input. That behaviour is part of the contract and is not reported
//! as an error.
//!
//! New callers should use [`crate::sort`], which needs no fuel.

use tracing::{debug, trace};

use crate::select::select_first;

/// Sort `seq` by repeated minimum extraction, spending at most `fuel` steps.
///
/// - Empty input gives empty output whatever the fuel.
/// - Non-empty input with no fuel left gives empty output; the rest of the
///   input is discarded.
/// - Surplus fuel is harmless: the empty-remainder case absorbs it.
#[must_use]
pub fn selsort<T: Ord + Clone>(seq: &[T], fuel: usize) -> Vec<T> {
    let mut sorted = Vec::with_capacity(seq.len().min(fuel));
    let mut pending = seq.to_vec();
    let mut fuel = fuel;

    while let Some(remaining_fuel) = fuel.checked_sub(1) {
        let Some(selection) = select_first(pending) else {
            return sorted;
        };
        trace!(
            step = sorted.len(),
            remaining_fuel,
            remainder = selection.remainder.len(),
            "extracted minimum"
        );
        sorted.push(selection.minimum);
        pending = selection.remainder;
        fuel = remaining_fuel;
    }

    if !pending.is_empty() {
        debug!(
            input = seq.len(),
            emitted = sorted.len(),
            dropped = pending.len(),
            "fuel exhausted before input was consumed"
        );
    }

    sorted
}

/// Fuel-bounded sort with fuel fixed to the input length.
///
/// Always correct; computes the same function as [`crate::measure::selsort`].
#[must_use]
pub fn selection_sort<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    selsort(seq, seq.len())
}

/// Number of input elements a run with `fuel` will drop for input of `len`.
#[must_use]
pub const fn fuel_deficit(len: usize, fuel: usize) -> usize {
    len.saturating_sub(fuel)
}
