#![no_main]

use libfuzzer_sys::fuzz_target;
use selsort_core::fuel::{selection_sort, selsort};
use selsort_core::{is_permutation, is_sorted, sort};

fuzz_target!(|data: &[u8]| {
    // First byte picks the fuel for the bounded run; the rest is the input.
    let Some((&fuel, body)) = data.split_first() else {
        return;
    };
    let input: Vec<u64> = body.iter().map(|&b| u64::from(b % 32)).collect();

    let output = sort(&input);
    assert!(is_sorted(&output));
    assert!(is_permutation(&input, &output));
    assert_eq!(selection_sort(&input), output);

    let bounded = selsort(&input, usize::from(fuel));
    assert!(is_sorted(&bounded));
    assert_eq!(bounded.len(), input.len().min(usize::from(fuel)));
    assert_eq!(bounded[..], output[..bounded.len()]);
});
