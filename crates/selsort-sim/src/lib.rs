//! selsort-sim library.
//!
//! Seeded verification campaigns: each seed generates an input sequence,
//! sorts it with a chosen recursion scheme, and checks the output with the
//! invariant oracle. Failing seeds can be replayed exactly.
//!
//! # Conventions
//!
//! - **Errors**: Use `anyhow::Result` for return types.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod campaign;
pub mod generator;
pub mod oracle;
pub mod rng;

pub use campaign::{
    CampaignConfig, CampaignReport, DetailedTrace, SeedFailure, load_campaign_config,
    replay_seed, run_campaign, run_single_seed,
};
pub use oracle::{InvariantViolation, OracleResult, SortOracle};
