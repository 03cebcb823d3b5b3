//! `selsort check`: run the sortedness and permutation oracles.

use std::process;

use anyhow::Result;
use clap::Args;
use selsort_core::oracle::{Multiset, first_descent, is_permutation};
use selsort_core::sequence::format_sequence;
use serde::Serialize;

use super::parse_sequence_arg;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `selsort check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Sequence to check.
    #[arg(value_name = "SEQ", allow_hyphen_values = true)]
    pub sequence: String,

    /// Also check that SEQ is a permutation of this sequence.
    #[arg(long, value_name = "SEQ", allow_hyphen_values = true)]
    pub against: Option<String>,
}

/// JSON output for `selsort check`.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    sequence: Vec<u64>,
    sorted: bool,
    first_descent: Option<usize>,
    against: Option<Vec<u64>>,
    permutation: Option<bool>,
    missing: Vec<u64>,
    extra: Vec<u64>,
}

impl CheckOutput {
    /// True when every requested check held.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.sorted && self.permutation != Some(false)
    }
}

/// Run the oracles over `sequence` and, if given, `against`.
#[must_use]
pub fn build_check_output(sequence: Vec<u64>, against: Option<Vec<u64>>) -> CheckOutput {
    let descent = first_descent(&sequence);
    let (permutation, missing, extra) = match &against {
        Some(reference) => {
            let diff =
                Multiset::from_slice(reference).difference(&Multiset::from_slice(&sequence));
            (
                Some(is_permutation(reference, &sequence)),
                diff.missing,
                diff.extra,
            )
        }
        None => (None, Vec::new(), Vec::new()),
    };

    CheckOutput {
        sorted: descent.is_none(),
        first_descent: descent,
        sequence,
        against,
        permutation,
        missing,
        extra,
    }
}

/// Execute `selsort check`. Exits with status 1 if a check fails.
///
/// # Errors
///
/// Returns an error if a sequence does not parse or output fails.
pub fn run_check(args: &CheckArgs, output: OutputMode) -> Result<()> {
    let sequence = parse_sequence_arg("sequence", &args.sequence)?;
    let against = args
        .against
        .as_deref()
        .map(|raw| parse_sequence_arg("--against sequence", raw))
        .transpose()?;

    let out = build_check_output(sequence, against);

    render_mode(
        output,
        &out,
        |out, w| {
            write!(w, "sorted={}", out.sorted)?;
            if let Some(index) = out.first_descent {
                write!(w, " first_descent={index}")?;
            }
            if let Some(permutation) = out.permutation {
                write!(w, " permutation={permutation}")?;
                if !permutation {
                    write!(
                        w,
                        " missing={} extra={}",
                        format_sequence(&out.missing),
                        format_sequence(&out.extra)
                    )?;
                }
            }
            writeln!(w)
        },
        |out, w| {
            pretty_section(w, "Oracle Check")?;
            pretty_kv(w, "Sequence", format_sequence(&out.sequence))?;
            let sorted = match out.first_descent {
                None => "yes".to_string(),
                Some(index) => format!(
                    "no (sequence[{index}]={} > sequence[{}]={})",
                    out.sequence[index],
                    index + 1,
                    out.sequence[index + 1]
                ),
            };
            pretty_kv(w, "Sorted", sorted)?;
            if let (Some(reference), Some(permutation)) = (&out.against, out.permutation) {
                pretty_kv(w, "Against", format_sequence(reference))?;
                if permutation {
                    pretty_kv(w, "Permutation", "yes")?;
                } else {
                    pretty_kv(w, "Permutation", "no")?;
                    pretty_kv(w, "Missing", format_sequence(&out.missing))?;
                    pretty_kv(w, "Extra", format_sequence(&out.extra))?;
                }
            }
            Ok(())
        },
    )?;

    // Exit code 1 on any failure for CI integration
    if !out.ok() {
        process::exit(1);
    }

    Ok(())
}
