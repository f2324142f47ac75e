//! The search core: enumerate every 3-member team from the pool, score each
//! against the whole pool, keep the top 5.

pub mod combos;
pub mod leaderboard;
pub mod scorer;

use std::fmt;
use std::fmt::Write as _;

use rayon::prelude::*;

use crate::battle::{SimError, Simulator};
use crate::parallel::batch_ranges;
pub use combos::{TeamCombinations, TeamIndices, TEAM_SIZE};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LEADERBOARD_CAPACITY};
pub use scorer::{score_team, SHIELD_SCENARIOS, WIN_THRESHOLD};

/// Progress-reporting batches for search-with-progress (UI/long runs).
const SEARCH_PROGRESS_BATCH_COUNT: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchScenario {
    /// When Some(n), at most n combinations are dispatched for evaluation.
    pub limit: Option<usize>,
    /// Score teams across all cores. The sequential path exists for
    /// reproduction and tests; both produce identical reports.
    pub parallel: bool,
}

impl Default for SearchScenario {
    fn default() -> Self {
        Self {
            limit: None,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub evaluated: usize,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl SearchReport {
    /// The textual report: evaluated count, then up to 5 ranked team lines.
    pub fn render(&self) -> String {
        let mut out = format!("Evaluated {} team combinations\n", self.evaluated);
        for (rank, entry) in self.leaderboard.iter().enumerate() {
            let _ = writeln!(
                out,
                "#{}: {}, {}, {} score {}",
                rank + 1,
                entry.team[0],
                entry.team[1],
                entry.team[2],
                entry.score
            );
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Triplet generation is impossible; detected before any simulation runs.
    PoolTooSmall { pool_len: usize },
    Simulation(SimError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolTooSmall { pool_len } => {
                write!(f, "meta pool has {pool_len} entries; at least {TEAM_SIZE} are required")
            }
            Self::Simulation(err) => write!(f, "simulation failed: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Simulation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SimError> for SearchError {
    fn from(err: SimError) -> Self {
        Self::Simulation(err)
    }
}

fn team_ids(pool: &[String], indices: TeamIndices) -> [String; TEAM_SIZE] {
    indices.map(|index| pool[index].clone())
}

/// Run the full search: generation, scoring, leaderboard, report.
///
/// The parallel path materializes the (capped) combination list, scores it
/// with rayon preserving input order, then folds the results into the
/// leaderboard in generation order, so its report is identical to the
/// sequential path's. An evaluation failure aborts the run; in-flight
/// evaluations finish, their results are discarded.
pub fn run_search<S: Simulator + Sync>(
    pool: &[String],
    scenario: &SearchScenario,
    sim: &S,
) -> Result<SearchReport, SearchError> {
    if pool.len() < TEAM_SIZE {
        return Err(SearchError::PoolTooSmall { pool_len: pool.len() });
    }

    let limit = scenario.limit.unwrap_or(usize::MAX);
    let combos = TeamCombinations::new(pool.len()).take(limit);
    let mut board = Leaderboard::new();
    let mut evaluated = 0;

    if scenario.parallel {
        let teams: Vec<TeamIndices> = combos.collect();
        let scored: Result<Vec<LeaderboardEntry>, SimError> = teams
            .par_iter()
            .map(|&indices| {
                let team = team_ids(pool, indices);
                let score = score_team(&team, pool, sim)?;
                Ok(LeaderboardEntry { team, score })
            })
            .collect();
        for entry in scored? {
            board.offer(entry);
            evaluated += 1;
        }
    } else {
        for indices in combos {
            let team = team_ids(pool, indices);
            let score = score_team(&team, pool, sim)?;
            board.offer(LeaderboardEntry { team, score });
            evaluated += 1;
        }
    }

    Ok(SearchReport {
        evaluated,
        leaderboard: board.into_entries(),
    })
}

/// Like [run_search] (parallel path) but scores in batches and invokes
/// `on_progress(done, total)` after each batch.
pub fn run_search_with_progress<S, F>(
    pool: &[String],
    scenario: &SearchScenario,
    sim: &S,
    mut on_progress: F,
) -> Result<SearchReport, SearchError>
where
    S: Simulator + Sync,
    F: FnMut(usize, usize),
{
    if pool.len() < TEAM_SIZE {
        return Err(SearchError::PoolTooSmall { pool_len: pool.len() });
    }

    let limit = scenario.limit.unwrap_or(usize::MAX);
    let teams: Vec<TeamIndices> = TeamCombinations::new(pool.len()).take(limit).collect();
    let total = teams.len();
    if total == 0 {
        return Ok(SearchReport { evaluated: 0, leaderboard: Vec::new() });
    }
    // Report total up front so callers can show "0 / total" immediately.
    on_progress(0, total);

    let mut board = Leaderboard::new();
    let mut evaluated = 0;
    for (start, end) in batch_ranges(total, SEARCH_PROGRESS_BATCH_COUNT.min(total)) {
        let scored: Result<Vec<LeaderboardEntry>, SimError> = teams[start..end]
            .par_iter()
            .map(|&indices| {
                let team = team_ids(pool, indices);
                let score = score_team(&team, pool, sim)?;
                Ok(LeaderboardEntry { team, score })
            })
            .collect();
        for entry in scored? {
            board.offer(entry);
            evaluated += 1;
        }
        on_progress(end, total);
    }

    Ok(SearchReport {
        evaluated,
        leaderboard: board.into_entries(),
    })
}
