//! Bounded top-K retention of the best-scoring teams seen so far.

use serde::Serialize;

use crate::search::combos::TEAM_SIZE;

pub const LEADERBOARD_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub team: [String; TEAM_SIZE],
    pub score: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, re-sort descending, drop the overflow. The sort is stable, so
    /// among entries tied for the lowest score the most recently inserted is
    /// the one truncated away.
    pub fn offer(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|left, right| right.score.cmp(&left.score));
        self.entries.truncate(LEADERBOARD_CAPACITY);
    }

    /// Current entries, best first.
    pub fn snapshot(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            team: [tag.to_string(), tag.to_string(), tag.to_string()],
            score,
        }
    }

    #[test]
    fn retains_top_five_sorted_descending() {
        let mut board = Leaderboard::new();
        for (tag, score) in [("a", 10), ("b", 7), ("c", 20), ("d", 3), ("e", 15), ("f", 8)] {
            board.offer(entry(tag, score));
        }
        let scores: Vec<u32> = board.snapshot().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![20, 15, 10, 8, 7]);
        assert!(board.snapshot().iter().all(|e| e.score != 3), "lowest entry evicted");
    }

    #[test]
    fn most_recent_of_a_lowest_tie_is_evicted() {
        let mut board = Leaderboard::new();
        for tag in ["a", "b", "c", "d", "e", "f"] {
            board.offer(entry(tag, 5));
        }
        let tags: Vec<&str> = board.snapshot().iter().map(|e| e.team[0].as_str()).collect();
        assert_eq!(tags, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn size_never_exceeds_capacity() {
        let mut board = Leaderboard::new();
        for score in 0..100 {
            board.offer(entry("x", score));
            assert!(board.len() <= LEADERBOARD_CAPACITY);
        }
        let scores: Vec<u32> = board.snapshot().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![99, 98, 97, 96, 95]);
    }
}
