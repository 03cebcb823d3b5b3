//! Seeded input generation.

use crate::rng::DeterministicRng;

/// Produces input sequences for a campaign seed.
///
/// Lengths are uniform in `0..=max_len`, values uniform in `0..value_bound`.
/// A small `value_bound` forces repeated values, which exercises the `<=`
/// tie handling in extraction.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    rng: DeterministicRng,
    max_len: usize,
    value_bound: u64,
}

impl SequenceGenerator {
    /// Create a generator for `seed`.
    #[must_use]
    pub const fn new(seed: u64, max_len: usize, value_bound: u64) -> Self {
        Self {
            rng: DeterministicRng::new(seed),
            max_len,
            value_bound,
        }
    }

    /// Generate the next input sequence.
    #[must_use]
    pub fn next_sequence(&mut self) -> Vec<u64> {
        let len = self.rng.next_len(self.max_len);
        (0..len)
            .map(|_| self.rng.next_bounded(self.value_bound))
            .collect()
    }
}
