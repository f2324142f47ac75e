//! Dataset access: gamemaster (species, moves, cups) and ranking lists.
//! All files are JSON loaded once at startup; lookups hand out owned copies
//! so callers never hold aliases into shared dataset state.

pub mod gamemaster;
pub mod rankings;

use std::fmt;

pub use gamemaster::{BaseStats, Cup, CupFilter, GameMaster, Move, Species, DEFAULT_GAMEMASTER_PATH};
pub use rankings::{load_rankings, meta_pool, RankingEntry, DEFAULT_RANKINGS_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Requested identifier absent from the dataset.
    NotFound { kind: &'static str, id: String },
    Io { path: String, detail: String },
    Parse { path: String, detail: String },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} '{id}' not found in dataset"),
            Self::Io { path, detail } => write!(f, "failed to read '{path}': {detail}"),
            Self::Parse { path, detail } => write!(f, "failed to parse '{path}': {detail}"),
        }
    }
}

impl std::error::Error for DataError {}
