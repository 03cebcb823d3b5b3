pub mod campaign;
pub mod check;
pub mod completions;
pub mod select;
pub mod sort;

use anyhow::{Context, Result};
use selsort_core::sequence::parse_sequence;

/// Parse a sequence argument, naming the argument in the error.
pub(crate) fn parse_sequence_arg(name: &str, raw: &str) -> Result<Vec<u64>> {
    parse_sequence(raw).with_context(|| format!("invalid {name} '{raw}'"))
}
