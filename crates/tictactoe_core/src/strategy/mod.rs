//! Computer opponents.
//!
//! A [`Strategy`] picks the computer's next square from a board snapshot.
//! [`Heuristic`] is the default opponent; [`FirstAvailable`] simply takes the
//! lowest empty square.

mod first_available;
mod heuristic;

pub use first_available::FirstAvailable;
pub use heuristic::{Heuristic, select_move};

use crate::{Board, Position, Symbol};
use serde::{Deserialize, Serialize};

/// Chooses moves for the computer.
pub trait Strategy: std::fmt::Debug + Send {
    /// Returns the strategy's display name.
    fn name(&self) -> &str;

    /// Picks the computer's next square.
    ///
    /// Returns `None` only when the board has no empty square. Never returns
    /// an occupied square.
    fn select_move(&self, board: &Board, computer: Symbol, human: Symbol) -> Option<Position>;
}

/// Selects a [`Strategy`] by name, from configuration or the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Win, block, center, corner, then anything.
    #[default]
    Heuristic,
    /// Lowest-indexed empty square.
    FirstAvailable,
}

impl StrategyKind {
    /// Builds the strategy this kind names.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Heuristic => Box::new(Heuristic),
            StrategyKind::FirstAvailable => Box::new(FirstAvailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_names() {
        assert_eq!("heuristic".parse::<StrategyKind>().unwrap(), StrategyKind::Heuristic);
        assert_eq!(
            "first-available".parse::<StrategyKind>().unwrap(),
            StrategyKind::FirstAvailable
        );
        assert_eq!(StrategyKind::FirstAvailable.to_string(), "first-available");
    }

    #[test]
    fn build_returns_named_strategy() {
        assert_eq!(StrategyKind::Heuristic.build().name(), "heuristic");
        assert_eq!(StrategyKind::FirstAvailable.build().name(), "first-available");
    }
}
