//! `selsort select`: extract the minimum from a candidate plus a sequence.

use anyhow::Result;
use clap::Args;
use selsort_core::select;
use selsort_core::sequence::format_sequence;
use serde::Serialize;

use super::parse_sequence_arg;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `selsort select`.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Starting candidate for the minimum.
    #[arg(value_name = "CANDIDATE")]
    pub candidate: u64,

    /// Sequence to scan, e.g. "1,4,1,5". May be empty.
    #[arg(value_name = "SEQ", default_value = "", allow_hyphen_values = true)]
    pub sequence: String,
}

/// JSON output for `selsort select`.
#[derive(Debug, Serialize)]
struct SelectOutput {
    candidate: u64,
    sequence: Vec<u64>,
    minimum: u64,
    remainder: Vec<u64>,
}

/// Execute `selsort select`.
///
/// # Errors
///
/// Returns an error if the sequence does not parse or output fails.
pub fn run_select(args: &SelectArgs, output: OutputMode) -> Result<()> {
    let sequence = parse_sequence_arg("sequence", &args.sequence)?;
    let selection = select(args.candidate, sequence.iter().copied());

    let out = SelectOutput {
        candidate: args.candidate,
        sequence,
        minimum: selection.minimum,
        remainder: selection.remainder,
    };

    render_mode(
        output,
        &out,
        |out, w| {
            writeln!(
                w,
                "minimum={} remainder={}",
                out.minimum,
                format_sequence(&out.remainder)
            )
        },
        |out, w| {
            pretty_section(w, "Select")?;
            pretty_kv(w, "Candidate", out.candidate.to_string())?;
            pretty_kv(w, "Sequence", format_sequence(&out.sequence))?;
            pretty_kv(w, "Minimum", out.minimum.to_string())?;
            pretty_kv(w, "Remainder", format_sequence(&out.remainder))
        },
    )
}
