use serde::{Deserialize, Serialize};

/// Tiny deterministic RNG used to generate campaign inputs.
///
/// This is intentionally simple and reproducible across platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// Create a new deterministic RNG from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// Next pseudo-random `u64`.
    #[must_use]
    pub const fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        // High bits of an LCG are the well-mixed ones.
        self.state ^ (self.state >> 33)
    }

    /// Next value in `[0, upper_exclusive)`.
    #[must_use]
    pub const fn next_bounded(&mut self, upper_exclusive: u64) -> u64 {
        if upper_exclusive == 0 {
            return 0;
        }
        self.next_u64() % upper_exclusive
    }

    /// Next length in `[0, max_inclusive]`.
    #[must_use]
    pub fn next_len(&mut self, max_inclusive: usize) -> usize {
        let upper = u64::try_from(max_inclusive).unwrap_or(u64::MAX).saturating_add(1);
        usize::try_from(self.next_bounded(upper)).unwrap_or(max_inclusive)
    }
}
