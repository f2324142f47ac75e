//! Worker-pool sizing and batch splitting for parallel team scoring.
//!
//! Team evaluations are independent, so the runner hands them to Rayon one
//! team per task. [WorkerPool::install] pins the thread count when the CLI
//! asks for one; [batch_ranges] slices the combination list for progress
//! reporting.

use rayon::ThreadPoolBuilder;

/// How many worker threads score teams. 0 means the global Rayon pool
/// (all CPU cores).
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerPool {
    pub workers: usize,
}

impl WorkerPool {
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run `f` with this pool's thread count. With `workers == 0` the global
    /// Rayon pool is used as-is; otherwise a temporary pool is built.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            f()
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .build()
                .expect("Rayon thread pool");
            pool.install(f)
        }
    }
}

/// Split `total` items into up to `num_batches` ranges `[start, end)`, as
/// equal as possible, earlier batches taking the remainder.
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for batch in 0..num_batches {
        let size = base + usize::from(batch < remainder);
        ranges.push((start, start + size));
        start += size;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_ranges_cover_the_total_without_gaps() {
        let ranges = batch_ranges(2300, 40);
        assert_eq!(ranges.len(), 40);
        assert_eq!(ranges.first(), Some(&(0, 58)));
        assert_eq!(ranges.last().map(|r| r.1), Some(2300));
        assert!(ranges.windows(2).all(|pair| pair[0].1 == pair[1].0));
    }

    #[test]
    fn batch_ranges_with_remainder_front_load_the_extra() {
        assert_eq!(batch_ranges(10, 3), vec![(0, 4), (4, 7), (7, 10)]);
    }

    #[test]
    fn more_batches_than_items_collapses_to_singletons() {
        assert_eq!(batch_ranges(3, 10), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn degenerate_inputs_yield_nothing() {
        assert!(batch_ranges(0, 5).is_empty());
        assert!(batch_ranges(10, 0).is_empty());
    }

    #[test]
    fn worker_pool_runs_the_closure_on_either_path() {
        assert_eq!(WorkerPool::default().install(|| 41 + 1), 42);
        assert_eq!(WorkerPool::with_workers(2).install(|| 41 + 1), 42);
    }
}
