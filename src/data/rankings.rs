//! Ranking data source: an externally maintained list of species ids ordered
//! by an independent overall metric. Only the head of the list is used as the
//! search pool.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DataError;

pub const DEFAULT_RANKINGS_PATH: &str = "data/rankings/all/overall/rankings-1500.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub species_id: String,
    #[serde(default)]
    pub score: f64,
}

pub fn load_rankings(path: impl AsRef<Path>) -> Result<Vec<RankingEntry>, DataError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|err| DataError::Io {
        path: path.display().to_string(),
        detail: err.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|err| DataError::Parse {
        path: path.display().to_string(),
        detail: err.to_string(),
    })
}

/// First `meta_count` ranked species ids, in ranking order.
pub fn meta_pool(rankings: &[RankingEntry], meta_count: usize) -> Vec<String> {
    rankings
        .iter()
        .take(meta_count)
        .map(|entry| entry.species_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, score: f64) -> RankingEntry {
        RankingEntry { species_id: id.to_string(), score }
    }

    #[test]
    fn pool_is_truncated_head_in_ranking_order() {
        let rankings = vec![
            entry("azumarill", 96.1),
            entry("medicham", 95.4),
            entry("registeel", 94.8),
            entry("altaria", 93.0),
        ];
        assert_eq!(meta_pool(&rankings, 3), vec!["azumarill", "medicham", "registeel"]);
        assert_eq!(meta_pool(&rankings, 10).len(), 4);
    }
}
