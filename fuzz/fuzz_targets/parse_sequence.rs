#![no_main]

use libfuzzer_sys::fuzz_target;
use selsort_core::sequence::{format_sequence, parse_sequence};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(seq) = parse_sequence(text) {
        assert_eq!(parse_sequence(&format_sequence(&seq)), Ok(seq));
    }
});
