//! Deterministic turn-based PvP battle resolution.
//!
//! The search core only depends on the [Simulator] trait; [BattleEngine] is
//! the concrete implementation wired in by the CLI. Tests substitute stub
//! simulators for it.

pub mod engine;
pub mod types;

use std::fmt;

pub use engine::{BattleEngine, Combatant, DEFAULT_CP_CAP};
pub use types::{effectiveness, effectiveness_against, STAB_MULTIPLIER};

use crate::data::DataError;

/// Attacker-centric outcome of one simulated encounter, on a 0..=1000 scale.
/// 500 is an even trade; above 500 the attacker came out ahead.
pub type Rating = u32;

pub const MAX_RATING: Rating = 1000;

/// One resolved encounter between two combatants under fixed shield counts.
pub trait Simulator {
    fn simulate(
        &self,
        attacker: &str,
        defender: &str,
        shields_attacker: u8,
        shields_defender: u8,
    ) -> Result<Rating, SimError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    Data(DataError),
    /// Species exists but the active cup's filters reject it.
    Ineligible { species_id: String, cup: String },
    /// Species has no fast move or no charged move to select.
    NoUsableMoves { species_id: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(err) => write!(f, "{err}"),
            Self::Ineligible { species_id, cup } => {
                write!(f, "species '{species_id}' is not eligible under cup '{cup}'")
            }
            Self::NoUsableMoves { species_id } => {
                write!(f, "species '{species_id}' has no usable move selection")
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Data(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DataError> for SimError {
    fn from(err: DataError) -> Self {
        Self::Data(err)
    }
}
