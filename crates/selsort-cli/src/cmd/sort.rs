//! `selsort sort`: sort a sequence with a chosen recursion scheme.

use anyhow::Result;
use clap::Args;
use selsort_core::Strategy;
use selsort_core::oracle::{is_permutation, is_sorted};
use selsort_core::sequence::format_sequence;
use serde::Serialize;
use tracing::warn;

use super::parse_sequence_arg;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `selsort sort`.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Sequence to sort, e.g. "3,1,4,1,5" or "[3 1 4 1 5]".
    #[arg(value_name = "SEQ", allow_hyphen_values = true)]
    pub sequence: String,

    /// Recursion scheme: measured, exact-fuel, or fuel:<n>.
    #[arg(long, default_value = "measured")]
    pub strategy: Strategy,
}

/// JSON output for `selsort sort`.
#[derive(Debug, Serialize)]
pub struct SortOutput {
    input: Vec<u64>,
    output: Vec<u64>,
    strategy: Strategy,
    fuel: Option<usize>,
    dropped: usize,
    sorted: bool,
    permutation: bool,
}

/// Sort `input` with `strategy` and collect the report.
#[must_use]
pub fn build_sort_output(input: Vec<u64>, strategy: Strategy) -> SortOutput {
    let output = strategy.apply(&input);
    SortOutput {
        fuel: strategy.fuel_for(input.len()),
        dropped: strategy.dropped(input.len()),
        sorted: is_sorted(&output),
        permutation: is_permutation(&input, &output),
        strategy,
        input,
        output,
    }
}

/// Execute `selsort sort`.
///
/// # Errors
///
/// Returns an error if the sequence does not parse or output fails.
pub fn run_sort(args: &SortArgs, output: OutputMode) -> Result<()> {
    let input = parse_sequence_arg("sequence", &args.sequence)?;
    let out = build_sort_output(input, args.strategy);

    if out.dropped > 0 {
        warn!(
            strategy = %out.strategy,
            input = out.input.len(),
            dropped = out.dropped,
            "fuel is shorter than the input; output is not a permutation"
        );
    }

    render_mode(
        output,
        &out,
        |out, w| {
            writeln!(
                w,
                "output={} strategy={} dropped={}",
                format_sequence(&out.output),
                out.strategy,
                out.dropped
            )
        },
        |out, w| {
            pretty_section(w, "Selection Sort")?;
            pretty_kv(w, "Input", format_sequence(&out.input))?;
            pretty_kv(w, "Output", format_sequence(&out.output))?;
            pretty_kv(w, "Strategy", out.strategy.to_string())?;
            if let Some(fuel) = out.fuel {
                pretty_kv(w, "Fuel", fuel.to_string())?;
            }
            if out.dropped > 0 {
                pretty_kv(
                    w,
                    "Dropped",
                    format!("{} element(s): ran out of fuel", out.dropped),
                )?;
            }
            Ok(())
        },
    )
}
