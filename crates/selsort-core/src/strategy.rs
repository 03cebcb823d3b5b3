//! Selection of the recursion scheme used to drive a sort.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{fuel, measure};

/// Which recursion scheme to run.
///
/// Textual form (CLI flags, TOML config): `measured`, `exact-fuel`, `fuel:<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    /// Recursion on the shrinking remainder.
    #[default]
    Measured,
    /// Fuel-bounded recursion with fuel equal to the input length.
    ExactFuel,
    /// Fuel-bounded recursion with a fixed amount of fuel.
    Fuel(usize),
}

/// Error parsing a [`Strategy`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid strategy '{input}': expected 'measured', 'exact-fuel', or 'fuel:<n>'")]
pub struct StrategyParseError {
    /// The rejected input.
    pub input: String,
}

impl Strategy {
    /// Sort `seq` with this scheme.
    #[must_use]
    pub fn apply<T: Ord + Clone>(self, seq: &[T]) -> Vec<T> {
        match self {
            Self::Measured => measure::selsort(seq),
            Self::ExactFuel => fuel::selection_sort(seq),
            Self::Fuel(n) => fuel::selsort(seq, n),
        }
    }

    /// Fuel this scheme supplies for input of length `len`, if it uses fuel.
    #[must_use]
    pub const fn fuel_for(self, len: usize) -> Option<usize> {
        match self {
            Self::Measured => None,
            Self::ExactFuel => Some(len),
            Self::Fuel(n) => Some(n),
        }
    }

    /// Elements this scheme drops from input of length `len`.
    #[must_use]
    pub const fn dropped(self, len: usize) -> usize {
        match self.fuel_for(len) {
            Some(fuel) => fuel::fuel_deficit(len, fuel),
            None => 0,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measured => f.write_str("measured"),
            Self::ExactFuel => f.write_str("exact-fuel"),
            Self::Fuel(n) => write!(f, "fuel:{n}"),
        }
    }
}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "measured" => return Ok(Self::Measured),
            "exact-fuel" => return Ok(Self::ExactFuel),
            _ => {}
        }
        trimmed
            .strip_prefix("fuel:")
            .and_then(|n| n.trim().parse::<usize>().ok())
            .map(Self::Fuel)
            .ok_or_else(|| StrategyParseError {
                input: s.to_string(),
            })
    }
}

impl TryFrom<String> for Strategy {
    type Error = StrategyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.to_string()
    }
}
