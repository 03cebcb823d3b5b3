use selsort_core::oracle::{Multiset, check_selection, first_descent, is_permutation};
use selsort_core::select::select_first;
use selsort_core::{Strategy, fuel, measure};

// ── Core result types ─────────────────────────────────────────────────────────

/// Oracle result for an invariant check.
///
/// Returned by each of the invariant checkers and by [`SortOracle::check_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleResult {
    /// `true` iff no violations were found.
    pub passed: bool,
    /// Detailed description of every invariant that was violated.
    pub violations: Vec<InvariantViolation>,
}

impl OracleResult {
    /// Construct a passing result.
    #[must_use]
    const fn pass() -> Self {
        Self {
            passed: true,
            violations: Vec::new(),
        }
    }

    /// Construct a failing result from one or more violations.
    #[must_use]
    const fn fail(violations: Vec<InvariantViolation>) -> Self {
        Self {
            passed: false,
            violations,
        }
    }

    fn from_violations(violations: Vec<InvariantViolation>) -> Self {
        if violations.is_empty() {
            Self::pass()
        } else {
            Self::fail(violations)
        }
    }

    /// Merge another result into this one (failures accumulate).
    #[must_use]
    fn merge(mut self, other: Self) -> Self {
        if !other.passed {
            self.passed = false;
            self.violations.extend(other.violations);
        }
        self
    }
}

// ── Invariant violation diagnostics ──────────────────────────────────────────

/// Diagnostic information for a single failed invariant check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Output and input hold different multisets.
    ///
    /// Emitted by `check_permutation`.
    Permutation {
        /// Values present in the input but missing from the output.
        missing: Vec<u64>,
        /// Values present in the output but absent from the input.
        extra: Vec<u64>,
    },

    /// Output has an adjacent pair out of order.
    ///
    /// Emitted by `check_sortedness`.
    Sortedness {
        /// Index of the left element of the first descending pair.
        index: usize,
        /// `output[index]`.
        left: u64,
        /// `output[index + 1]`, strictly smaller than `left`.
        right: u64,
    },

    /// Sorting the output again changed it.
    ///
    /// Emitted by `check_idempotence`.
    Idempotence {
        /// Output of the first run.
        first: Vec<u64>,
        /// Output of sorting `first` again.
        second: Vec<u64>,
    },

    /// An extraction step returned a wrong minimum or lost track of a value.
    ///
    /// Emitted by `check_extraction`.
    Extraction {
        /// Zero-based extraction step.
        step: usize,
        /// Candidate (head) the step started from.
        candidate: u64,
        /// Minimum the step returned.
        minimum: u64,
    },

    /// The measure-based sort and the exactly-fuelled sort disagree.
    ///
    /// Emitted by `check_scheme_agreement`.
    SchemeDisagreement {
        /// Output of the measure-based sort.
        measured: Vec<u64>,
        /// Output of the fuel-bounded sort with fuel equal to input length.
        fueled: Vec<u64>,
    },
}

// ── Oracle ────────────────────────────────────────────────────────────────────

/// Oracle for verifying sort invariants on one input/output pair.
///
/// # Invariants checked
///
/// 1. **Permutation** (`check_permutation`): output has the input's multiset.
/// 2. **Sortedness** (`check_sortedness`): output is non-decreasing.
/// 3. **Idempotence** (`check_idempotence`): sorting the output is a no-op.
/// 4. **Extraction** (`check_extraction`): every step of the sort extracts a
///    true minimum and keeps the rest.
/// 5. **Scheme agreement** (`check_scheme_agreement`): measure-based and
///    exact-fuel recursion produce identical output.
pub struct SortOracle;

impl SortOracle {
    // ── Invariant 1: Permutation ─────────────────────────────────────────────

    /// Check that `output` is a permutation of `input`.
    #[must_use]
    pub fn check_permutation(input: &[u64], output: &[u64]) -> OracleResult {
        if is_permutation(input, output) {
            return OracleResult::pass();
        }

        let diff = Multiset::from_slice(input).difference(&Multiset::from_slice(output));
        OracleResult::fail(vec![InvariantViolation::Permutation {
            missing: diff.missing,
            extra: diff.extra,
        }])
    }

    // ── Invariant 2: Sortedness ──────────────────────────────────────────────

    /// Check that `output` is non-decreasing, reporting the first descent.
    #[must_use]
    pub fn check_sortedness(output: &[u64]) -> OracleResult {
        match first_descent(output) {
            None => OracleResult::pass(),
            Some(index) => OracleResult::fail(vec![InvariantViolation::Sortedness {
                index,
                left: output[index],
                right: output[index + 1],
            }]),
        }
    }

    // ── Invariant 3: Idempotence ─────────────────────────────────────────────

    /// Check that re-sorting `output` with `strategy` leaves it unchanged.
    #[must_use]
    pub fn check_idempotence(output: &[u64], strategy: Strategy) -> OracleResult {
        let second = strategy.apply(output);
        if second == output {
            OracleResult::pass()
        } else {
            OracleResult::fail(vec![InvariantViolation::Idempotence {
                first: output.to_vec(),
                second,
            }])
        }
    }

    // ── Invariant 4: Extraction ──────────────────────────────────────────────

    /// Replay the extraction chain over `input`, checking every step.
    #[must_use]
    pub fn check_extraction(input: &[u64]) -> OracleResult {
        let mut violations = Vec::new();
        let mut pending = input.to_vec();
        let mut step = 0_usize;

        while let Some((&candidate, rest)) = pending.split_first() {
            let rest = rest.to_vec();
            let Some(selection) = select_first(pending) else {
                break;
            };
            if !check_selection(&candidate, &rest, &selection) {
                violations.push(InvariantViolation::Extraction {
                    step,
                    candidate,
                    minimum: selection.minimum,
                });
            }
            pending = selection.remainder;
            step += 1;
        }

        OracleResult::from_violations(violations)
    }

    // ── Invariant 5: Scheme agreement ────────────────────────────────────────

    /// Check that both recursion schemes compute the same function on `input`.
    #[must_use]
    pub fn check_scheme_agreement(input: &[u64]) -> OracleResult {
        let measured = measure::selsort(input);
        let fueled = fuel::selection_sort(input);
        if measured == fueled {
            OracleResult::pass()
        } else {
            OracleResult::fail(vec![InvariantViolation::SchemeDisagreement { measured, fueled }])
        }
    }

    // ── Composite runner ─────────────────────────────────────────────────────

    /// Run every invariant check against `output`, produced from `input` by
    /// `strategy`.
    ///
    /// Idempotence is skipped when `check_idempotence` is `false`.
    #[must_use]
    pub fn check_all(
        input: &[u64],
        output: &[u64],
        strategy: Strategy,
        check_idempotence: bool,
    ) -> OracleResult {
        let permutation = Self::check_permutation(input, output);
        let sortedness = Self::check_sortedness(output);
        let idempotence = if check_idempotence {
            Self::check_idempotence(output, strategy)
        } else {
            OracleResult::pass()
        };
        let extraction = Self::check_extraction(input);
        let agreement = Self::check_scheme_agreement(input);

        permutation
            .merge(sortedness)
            .merge(idempotence)
            .merge(extraction)
            .merge(agreement)
    }
}

/// Format an invariant violation into a human-readable string.
#[must_use]
pub fn format_violation(v: &InvariantViolation) -> String {
    match v {
        InvariantViolation::Permutation { missing, extra } => {
            format!("Permutation: output is not a permutation of input (missing={missing:?}, extra={extra:?})")
        }
        InvariantViolation::Sortedness { index, left, right } => {
            format!("Sortedness: output[{index}]={left} > output[{}]={right}", index + 1)
        }
        InvariantViolation::Idempotence { first, second } => {
            format!(
                "Idempotence: re-sorting changed the output ({} -> {} elements)",
                first.len(),
                second.len()
            )
        }
        InvariantViolation::Extraction {
            step,
            candidate,
            minimum,
        } => {
            format!("Extraction: step {step} from candidate {candidate} returned bad minimum {minimum}")
        }
        InvariantViolation::SchemeDisagreement { measured, fueled } => {
            format!(
                "SchemeDisagreement: measured={} elements, exact-fuel={} elements",
                measured.len(),
                fueled.len()
            )
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
