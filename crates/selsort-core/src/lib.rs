//! selsort-core library.
//!
//! Selection sort built from repeated minimum extraction ([`select::select`]),
//! with two ways of bounding the recursion:
//!
//! - [`measure`]: recursion on the remainder, which is one element shorter
//!   after every extraction. This is the canonical scheme and backs [`sort`].
//! - [`fuel`]: recursion bounded by a caller-supplied counter. Kept as a
//!   legacy entry point; running it with less fuel than the input length
//!   silently drops the tail of the output.
//!
//! [`oracle`] holds the permutation and sortedness predicates the tests and
//! the simulation harness use to check outputs.
//!
//! # Conventions
//!
//! - **Errors**: sorting is total; typed `thiserror` errors exist only for
//!   parsing input ([`sequence::SequenceError`], [`strategy::StrategyParseError`]).
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod fuel;
pub mod measure;
pub mod oracle;
pub mod select;
pub mod sequence;
pub mod strategy;

pub use measure::selsort as sort;
pub use oracle::{Multiset, is_permutation, is_sorted};
pub use select::{Selection, select};
pub use strategy::Strategy;
