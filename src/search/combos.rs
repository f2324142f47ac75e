//! Lazy enumeration of 3-member teams: every size-3 index subset of the
//! pool, in lexicographic order, one at a time.

pub const TEAM_SIZE: usize = 3;

/// Indices into the pool, strictly increasing.
pub type TeamIndices = [usize; TEAM_SIZE];

/// Iterator over all C(pool_len, 3) index triples. A fresh instance is
/// created per run; exhausted instances stay exhausted.
#[derive(Debug, Clone)]
pub struct TeamCombinations {
    pool_len: usize,
    indices: TeamIndices,
    done: bool,
}

impl TeamCombinations {
    pub fn new(pool_len: usize) -> Self {
        Self {
            pool_len,
            indices: [0, 1, 2],
            done: pool_len < TEAM_SIZE,
        }
    }

    /// C(pool_len, 3) without enumerating.
    pub fn count_for(pool_len: usize) -> u64 {
        if pool_len < TEAM_SIZE {
            return 0;
        }
        let n = pool_len as u64;
        n * (n - 1) * (n - 2) / 6
    }
}

impl Iterator for TeamCombinations {
    type Item = TeamIndices;

    fn next(&mut self) -> Option<TeamIndices> {
        if self.done {
            return None;
        }
        let current = self.indices;

        // Advance the rightmost slot that still has room, then reset the
        // slots after it to the minimal ascending run.
        let mut slot = TEAM_SIZE;
        loop {
            if slot == 0 {
                self.done = true;
                break;
            }
            slot -= 1;
            if self.indices[slot] + (TEAM_SIZE - slot) < self.pool_len {
                self.indices[slot] += 1;
                for later in slot + 1..TEAM_SIZE {
                    self.indices[later] = self.indices[later - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}
