use proptest::prelude::*;

/// Sequences drawn from a small value range so duplicates are common.
pub fn arb_dup_heavy_sequence() -> impl Strategy<Value = Vec<u64>> + Clone {
    prop::collection::vec(0u64..8, 0..40)
}

/// Sequences over the full `u64` range.
pub fn arb_sequence() -> impl Strategy<Value = Vec<u64>> + Clone {
    prop::collection::vec(any::<u64>(), 0..60)
}

/// Either kind of sequence.
pub fn arb_any_sequence() -> impl Strategy<Value = Vec<u64>> + Clone {
    prop_oneof![arb_dup_heavy_sequence(), arb_sequence()]
}

/// A non-empty sequence paired with a fuel amount strictly below its length.
pub fn arb_under_fuelled() -> impl Strategy<Value = (Vec<u64>, usize)> + Clone {
    prop::collection::vec(0u64..100, 1..40)
        .prop_flat_map(|seq| {
            let len = seq.len();
            (Just(seq), 0..len)
        })
}

/// `(a, b, c)` where `b` is a shuffle of `a` and `c` is a shuffle of `b`.
pub fn arb_permutation_chain() -> impl Strategy<Value = (Vec<u64>, Vec<u64>, Vec<u64>)> {
    arb_dup_heavy_sequence()
        .prop_flat_map(|a| {
            let b = Just(a.clone()).prop_shuffle();
            (Just(a), b)
        })
        .prop_flat_map(|(a, b)| {
            let c = Just(b.clone()).prop_shuffle();
            (Just(a), Just(b), c)
        })
}
