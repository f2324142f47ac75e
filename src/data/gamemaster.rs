//! Gamemaster dataset: species, move, and cup (ruleset) definitions.
//! Construct one [GameMaster] at process start and pass a shared reference to
//! every component that needs lookups; there is no global instance.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DataError;

pub const DEFAULT_GAMEMASTER_PATH: &str = "data/gamemaster.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub atk: f64,
    pub def: f64,
    pub hp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub species_id: String,
    pub species_name: String,
    /// One or two type names, lowercase.
    pub types: Vec<String>,
    pub base_stats: BaseStats,
    pub fast_moves: Vec<String>,
    pub charged_moves: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A fast move has `energy == 0` and gains energy over `turns`; a charged
/// move has `energy_gain == 0` and spends `energy` when thrown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub move_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub power: f64,
    #[serde(default)]
    pub energy: u32,
    #[serde(default)]
    pub energy_gain: u32,
    #[serde(default = "default_turns")]
    pub turns: u32,
}

fn default_turns() -> u32 {
    1
}

impl Move {
    pub fn is_fast(&self) -> bool {
        self.energy == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CupFilter {
    pub filter_type: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cup {
    pub name: String,
    pub include: Vec<CupFilter>,
    pub exclude: Vec<CupFilter>,
}

impl Cup {
    /// Whether a species may enter battles under this cup. Only `tag`
    /// filters are understood; other filter types are ignored.
    pub fn allows(&self, species: &Species) -> bool {
        let tag_match = |filter: &CupFilter| {
            filter.filter_type == "tag"
                && filter.values.iter().any(|value| species.tags.contains(value))
        };
        if self.exclude.iter().any(tag_match) {
            return false;
        }
        let tag_includes: Vec<&CupFilter> = self
            .include
            .iter()
            .filter(|filter| filter.filter_type == "tag")
            .collect();
        tag_includes.is_empty() || tag_includes.into_iter().any(tag_match)
    }
}

#[derive(Debug, Deserialize)]
struct GameMasterFile {
    pokemon: Vec<Species>,
    moves: Vec<Move>,
}

/// Immutable id-keyed view over the gamemaster. Lookups return clones,
/// never references into the maps.
#[derive(Debug, Clone)]
pub struct GameMaster {
    species: HashMap<String, Species>,
    moves: HashMap<String, Move>,
}

impl GameMaster {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| DataError::Io {
            path: path.display().to_string(),
            detail: err.to_string(),
        })?;
        let file: GameMasterFile = serde_json::from_str(&raw).map_err(|err| DataError::Parse {
            path: path.display().to_string(),
            detail: err.to_string(),
        })?;
        Ok(Self::from_parts(file.pokemon, file.moves))
    }

    pub fn from_parts(pokemon: Vec<Species>, moves: Vec<Move>) -> Self {
        Self {
            species: pokemon
                .into_iter()
                .map(|species| (species.species_id.clone(), species))
                .collect(),
            moves: moves
                .into_iter()
                .map(|mv| (mv.move_id.clone(), mv))
                .collect(),
        }
    }

    pub fn species_by_id(&self, id: &str) -> Result<Species, DataError> {
        self.species.get(id).cloned().ok_or_else(|| DataError::NotFound {
            kind: "species",
            id: id.to_string(),
        })
    }

    pub fn move_by_id(&self, id: &str) -> Result<Move, DataError> {
        self.moves.get(id).cloned().ok_or_else(|| DataError::NotFound {
            kind: "move",
            id: id.to_string(),
        })
    }

    /// Cup definitions are synthesized rather than stored: every cup allows
    /// everything except mega-tagged species.
    pub fn cup_by_id(&self, id: &str) -> Cup {
        Cup {
            name: id.to_string(),
            include: Vec::new(),
            exclude: vec![CupFilter {
                filter_type: "tag".to_string(),
                values: vec!["mega".to_string()],
            }],
        }
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }
}
