//! Campaign runner for deterministic verification campaigns.
//!
//! Executes many seeds, each generating one input sequence, sorting it with
//! the configured [`Strategy`], and running the full [`SortOracle`] suite.
//! Collects pass/fail results and identifies the first failing seed for
//! replay.

use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result, bail};
use selsort_core::Strategy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::generator::SequenceGenerator;
use crate::oracle::{InvariantViolation, OracleResult, SortOracle, format_violation};

/// Largest input length a campaign may generate.
pub const MAX_LEN_LIMIT: usize = 4096;

/// Campaign-level configuration controlling how many seeds to run and how
/// each seed's input is generated and sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// First seed to execute.
    pub seed_start: u64,
    /// Number of consecutive seeds to execute.
    pub seeds: u64,
    /// Maximum generated input length (inclusive).
    pub max_len: usize,
    /// Generated values lie in `0..value_bound`.
    pub value_bound: u64,
    /// Recursion scheme under test.
    pub strategy: Strategy,
    /// Whether to re-sort every output and check it is unchanged.
    pub idempotence_checks: bool,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            seed_start: 0,
            seeds: 100,
            max_len: 32,
            value_bound: 16,
            strategy: Strategy::Measured,
            idempotence_checks: true,
        }
    }
}

impl CampaignConfig {
    /// Seeds this campaign covers.
    #[must_use]
    pub const fn seed_range(&self) -> Range<u64> {
        self.seed_start..self.seed_start.saturating_add(self.seeds)
    }

    /// Build the input generator for a specific seed.
    #[must_use]
    pub const fn generator_for_seed(&self, seed: u64) -> SequenceGenerator {
        SequenceGenerator::new(seed, self.max_len, self.value_bound)
    }

    /// Validate configuration before running.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.seeds == 0 {
            bail!("seeds must be > 0");
        }
        if self.value_bound == 0 {
            bail!("value_bound must be > 0");
        }
        if self.max_len > MAX_LEN_LIMIT {
            bail!("max_len must be <= {MAX_LEN_LIMIT}, got {}", self.max_len);
        }
        Ok(())
    }
}

/// Load a campaign configuration from a TOML file.
///
/// Missing keys take their [`CampaignConfig::default`] values.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_campaign_config(path: &Path) -> Result<CampaignConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<CampaignConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Failure details for a single seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFailure {
    /// The seed that failed.
    pub seed: u64,
    /// Length of the generated input.
    pub input_len: usize,
    /// Invariant violations found.
    pub violations: Vec<String>,
}

/// Aggregate report produced by a campaign run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignReport {
    /// Strategy the campaign ran.
    pub strategy: Strategy,
    /// Total seeds executed.
    pub seeds_run: usize,
    /// Seeds that passed all invariants.
    pub seeds_passed: usize,
    /// First seed that failed (for prioritized replay).
    pub first_failure: Option<u64>,
    /// All seed failures with violation details.
    pub failures: Vec<SeedFailure>,
    /// Total input elements across all seeds.
    pub elements_in: usize,
    /// Total elements the strategy dropped for lack of fuel.
    pub elements_dropped: usize,
}

impl CampaignReport {
    /// True if every seed passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Detailed trace produced by replaying a single seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedTrace {
    /// Replayed seed.
    pub seed: u64,
    /// Strategy used.
    pub strategy: Strategy,
    /// Generated input.
    pub input: Vec<u64>,
    /// Sort output.
    pub output: Vec<u64>,
    /// Input elements missing from the output because fuel ran out.
    pub dropped: usize,
    /// Oracle check result with violation details.
    pub oracle: OracleResult,
}

/// Run a full campaign across all seeds in the config.
///
/// # Errors
///
/// Returns an error if config validation fails.
pub fn run_campaign(config: &CampaignConfig) -> Result<CampaignReport> {
    config.validate()?;
    info!(
        strategy = %config.strategy,
        seeds = config.seeds,
        max_len = config.max_len,
        value_bound = config.value_bound,
        "starting campaign"
    );

    let mut seeds_run = 0_usize;
    let mut seeds_passed = 0_usize;
    let mut first_failure: Option<u64> = None;
    let mut failures = Vec::new();
    let mut elements_in = 0_usize;
    let mut elements_dropped = 0_usize;

    for seed in config.seed_range() {
        seeds_run += 1;

        let trace = execute_seed(seed, config);
        elements_in += trace.input.len();
        elements_dropped += trace.dropped;

        if trace.oracle.passed {
            seeds_passed += 1;
            continue;
        }

        debug!(seed, violations = trace.oracle.violations.len(), "seed failed");
        if first_failure.is_none() {
            first_failure = Some(seed);
        }
        failures.push(SeedFailure {
            seed,
            input_len: trace.input.len(),
            violations: trace.oracle.violations.iter().map(format_violation).collect(),
        });
    }

    if failures.is_empty() {
        info!(seeds_run, "campaign passed");
    } else {
        warn!(
            seeds_run,
            failed = failures.len(),
            first_failure = ?first_failure,
            "campaign found invariant violations"
        );
    }

    Ok(CampaignReport {
        strategy: config.strategy,
        seeds_run,
        seeds_passed,
        first_failure,
        failures,
        elements_in,
        elements_dropped,
    })
}

/// Run a single seed and return `Ok(())` on pass, `Err(violations)` on failure.
///
/// # Errors
///
/// The `Err` variant carries the invariant violations the oracle found.
pub fn run_single_seed(
    seed: u64,
    config: &CampaignConfig,
) -> std::result::Result<(), Vec<InvariantViolation>> {
    let trace = execute_seed(seed, config);
    if trace.oracle.passed {
        Ok(())
    } else {
        Err(trace.oracle.violations)
    }
}

/// Replay a single seed with full trace details for debugging.
///
/// # Errors
///
/// Returns an error when config validation fails.
pub fn replay_seed(seed: u64, config: &CampaignConfig) -> Result<DetailedTrace> {
    config.validate()?;
    Ok(execute_seed(seed, config))
}

fn execute_seed(seed: u64, config: &CampaignConfig) -> DetailedTrace {
    let input = config.generator_for_seed(seed).next_sequence();
    let output = config.strategy.apply(&input);
    let dropped = config.strategy.dropped(input.len());
    let oracle = SortOracle::check_all(&input, &output, config.strategy, config.idempotence_checks);

    DetailedTrace {
        seed,
        strategy: config.strategy,
        input,
        output,
        dropped,
        oracle,
    }
}
