//! `selsort campaign`: deterministic verification campaign commands.
//!
//! `selsort campaign run`: execute a campaign across many seeds.
//! `selsort campaign replay`: replay a single seed with its input, output, and violations.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Args, Subcommand};
use selsort_core::Strategy;
use selsort_core::sequence::format_sequence;
use selsort_sim::CampaignConfig;
use selsort_sim::oracle::format_violation;
use serde::Serialize;

use crate::output::{OutputMode, pretty_kv, pretty_section};

/// Top-level arguments for `selsort campaign`.
#[derive(Args, Debug)]
pub struct CampaignArgs {
    #[command(subcommand)]
    pub command: CampaignCommand,
}

/// Campaign subcommands.
#[derive(Subcommand, Debug)]
pub enum CampaignCommand {
    /// Run a campaign across multiple seeds.
    #[command(
        about = "Run a verification campaign across multiple seeds",
        long_about = "Generate one input sequence per seed, sort it with the chosen strategy,\n\
                      and check permutation, sortedness, idempotence, extraction, and\n\
                      scheme agreement. Reports pass/fail per seed and the first failure.",
        after_help = "EXAMPLES:\n    # Run 100 seeds with defaults\n    selsort campaign run --seeds 100\n\n\
                      # Demonstrate the under-fuelled hazard\n    selsort campaign run --strategy fuel:3\n\n\
                      # Load settings from a file\n    selsort campaign run --config campaign.toml --format json"
    )]
    Run(CampaignOptions),

    /// Replay a single seed.
    #[command(
        about = "Replay a single seed with detailed output",
        long_about = "Regenerate the input for one seed, sort it again, and print the\n\
                      input, output, and every invariant violation. Use after a campaign failure.",
        after_help = "EXAMPLES:\n    # Replay seed 42\n    selsort campaign replay --seed 42\n\n\
                      # Replay with the strategy that failed\n    selsort campaign replay --seed 42 --strategy fuel:3"
    )]
    Replay {
        /// Seed to replay.
        #[arg(long)]
        seed: u64,

        #[command(flatten)]
        options: CampaignOptions,
    },
}

/// Options shared by `run` and `replay`. Flags override the config file.
#[derive(Args, Debug, Default)]
pub struct CampaignOptions {
    /// TOML file with campaign settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of seeds to run.
    #[arg(long)]
    pub seeds: Option<u64>,

    /// Starting seed value.
    #[arg(long)]
    pub seed_start: Option<u64>,

    /// Maximum generated input length.
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Generated values lie in 0..VALUE_BOUND.
    #[arg(long)]
    pub value_bound: Option<u64>,

    /// Recursion scheme: measured, exact-fuel, or fuel:<n>.
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Skip re-sorting outputs to check idempotence.
    #[arg(long)]
    pub no_idempotence: bool,
}

impl CampaignOptions {
    /// Merge file settings (if any) with command-line overrides.
    fn resolve(&self) -> Result<CampaignConfig> {
        let mut config = match &self.config {
            Some(path) => selsort_sim::load_campaign_config(path)?,
            None => CampaignConfig::default(),
        };
        if let Some(seeds) = self.seeds {
            config.seeds = seeds;
        }
        if let Some(seed_start) = self.seed_start {
            config.seed_start = seed_start;
        }
        if let Some(max_len) = self.max_len {
            config.max_len = max_len;
        }
        if let Some(value_bound) = self.value_bound {
            config.value_bound = value_bound;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if self.no_idempotence {
            config.idempotence_checks = false;
        }
        Ok(config)
    }
}

/// JSON output for `selsort campaign run`.
#[derive(Debug, Serialize)]
struct RunOutput {
    strategy: Strategy,
    seeds_run: usize,
    seeds_passed: usize,
    seeds_failed: usize,
    first_failure: Option<u64>,
    elements_in: usize,
    elements_dropped: usize,
    all_passed: bool,
    failures: Vec<FailureOutput>,
}

#[derive(Debug, Serialize)]
struct FailureOutput {
    seed: u64,
    input_len: usize,
    violations: Vec<String>,
}

/// JSON output for `selsort campaign replay`.
#[derive(Debug, Serialize)]
struct ReplayOutput {
    seed: u64,
    strategy: Strategy,
    input: Vec<u64>,
    output: Vec<u64>,
    dropped: usize,
    oracle_passed: bool,
    violations: Vec<String>,
}

/// Execute `selsort campaign run`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or output fails.
pub fn run_campaign_run(options: &CampaignOptions, output: OutputMode) -> Result<()> {
    let config = options.resolve()?;
    let report = selsort_sim::run_campaign(&config)?;

    let out = RunOutput {
        strategy: report.strategy,
        seeds_run: report.seeds_run,
        seeds_passed: report.seeds_passed,
        seeds_failed: report.failures.len(),
        first_failure: report.first_failure,
        elements_in: report.elements_in,
        elements_dropped: report.elements_dropped,
        all_passed: report.all_passed(),
        failures: report
            .failures
            .iter()
            .map(|f| FailureOutput {
                seed: f.seed,
                input_len: f.input_len,
                violations: f.violations.clone(),
            })
            .collect(),
    };

    match output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputMode::Text => {
            println!(
                "campaign strategy={} seeds_run={} max_len={} value_bound={}",
                out.strategy, out.seeds_run, config.max_len, config.value_bound
            );
            println!(
                "results passed={} failed={} elements_in={} elements_dropped={} all_passed={}",
                out.seeds_passed,
                out.seeds_failed,
                out.elements_in,
                out.elements_dropped,
                out.all_passed
            );
            if !out.all_passed {
                for failure in out.failures.iter().take(5) {
                    println!(
                        "failure seed={} input_len={} violations={}",
                        failure.seed,
                        failure.input_len,
                        failure.violations.len()
                    );
                }
                if out.failures.len() > 5 {
                    println!("failures_truncated count={}", out.failures.len() - 5);
                }
                println!(
                    "hint replay_seed={} strategy={}",
                    out.first_failure.unwrap_or(0),
                    out.strategy
                );
            }
        }
        OutputMode::Pretty => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            pretty_section(&mut w, "Verification Campaign")?;
            pretty_kv(&mut w, "Strategy", out.strategy.to_string())?;
            pretty_kv(&mut w, "Seeds", out.seeds_run.to_string())?;
            pretty_kv(&mut w, "Max length", config.max_len.to_string())?;
            pretty_kv(&mut w, "Values", format!("0..{}", config.value_bound))?;
            pretty_kv(
                &mut w,
                "Results",
                format!("{} passed / {} failed", out.seeds_passed, out.seeds_failed),
            )?;
            pretty_kv(
                &mut w,
                "Elements",
                format!("{} in, {} dropped", out.elements_in, out.elements_dropped),
            )?;

            if out.all_passed {
                pretty_kv(&mut w, "Status", "all seeds passed")?;
            } else {
                pretty_kv(
                    &mut w,
                    "Status",
                    format!(
                        "{} failures (first at seed {})",
                        out.seeds_failed,
                        out.first_failure.unwrap_or(0)
                    ),
                )?;
                println!();
                pretty_section(&mut w, "Failure Samples")?;
                for failure in out.failures.iter().take(5) {
                    println!("seed {:<8} input_len={}", failure.seed, failure.input_len);
                    for violation in &failure.violations {
                        println!("  - {violation}");
                    }
                }
                if out.failures.len() > 5 {
                    println!("... and {} more failures", out.failures.len() - 5);
                }
                println!();
                pretty_kv(
                    &mut w,
                    "Replay",
                    format!(
                        "selsort campaign replay --seed {} --strategy {}",
                        out.first_failure.unwrap_or(0),
                        out.strategy
                    ),
                )?;
            }
        }
    }

    // Exit code 1 on any failure for CI integration
    if !report.all_passed() {
        process::exit(1);
    }

    Ok(())
}

/// Execute `selsort campaign replay`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or output fails.
pub fn run_campaign_replay(seed: u64, options: &CampaignOptions, output: OutputMode) -> Result<()> {
    let config = options.resolve()?;
    let trace = selsort_sim::replay_seed(seed, &config)?;

    let out = ReplayOutput {
        seed,
        strategy: trace.strategy,
        input: trace.input,
        output: trace.output,
        dropped: trace.dropped,
        oracle_passed: trace.oracle.passed,
        violations: trace.oracle.violations.iter().map(format_violation).collect(),
    };

    match output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputMode::Text => {
            println!("replay seed={} strategy={}", out.seed, out.strategy);
            println!(
                "input={} output={} dropped={} oracle_passed={}",
                format_sequence(&out.input),
                format_sequence(&out.output),
                out.dropped,
                out.oracle_passed
            );
            for violation in &out.violations {
                println!("violation={violation}");
            }
        }
        OutputMode::Pretty => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            pretty_section(&mut w, &format!("Replay Seed {}", out.seed))?;
            pretty_kv(&mut w, "Strategy", out.strategy.to_string())?;
            pretty_kv(&mut w, "Input", format_sequence(&out.input))?;
            pretty_kv(&mut w, "Output", format_sequence(&out.output))?;
            pretty_kv(&mut w, "Dropped", out.dropped.to_string())?;
            pretty_kv(&mut w, "Oracle", out.oracle_passed.to_string())?;

            if !out.oracle_passed {
                println!();
                pretty_section(&mut w, "Invariant Violations")?;
                for violation in &out.violations {
                    println!("- {violation}");
                }
            }
        }
    }

    if !out.oracle_passed {
        process::exit(1);
    }

    Ok(())
}

/// Dispatch `selsort campaign` subcommands.
///
/// # Errors
///
/// Propagates errors from the selected subcommand.
pub fn run_campaign(args: &CampaignArgs, output: OutputMode) -> Result<()> {
    match &args.command {
        CampaignCommand::Run(options) => run_campaign_run(options, output),
        CampaignCommand::Replay { seed, options } => run_campaign_replay(*seed, options, output),
    }
}
