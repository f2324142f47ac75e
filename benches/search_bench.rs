//! Search throughput benchmarks: combination enumeration and team scoring.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use triad::battle::{Rating, SimError, Simulator};
use triad::search::{run_search, score_team, SearchScenario, TeamCombinations};

/// Cheap deterministic stand-in for the battle engine so the benchmarks
/// measure search overhead, not combat resolution.
struct HashRating;

impl Simulator for HashRating {
    fn simulate(&self, attacker: &str, defender: &str, sa: u8, sb: u8) -> Result<Rating, SimError> {
        let mut value: u32 = 17;
        for byte in attacker.bytes().chain(defender.bytes()) {
            value = value.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        value = value.wrapping_add(u32::from(sa) * 131 + u32::from(sb) * 137);
        Ok(value % 1001)
    }
}

fn pool(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("species_{i:02}")).collect()
}

fn bench_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinations");
    for pool_len in [10usize, 25, 50] {
        let total = TeamCombinations::count_for(pool_len);
        group.throughput(Throughput::Elements(total));
        group.bench_function(format!("enumerate_{pool_len}"), |b| {
            b.iter(|| TeamCombinations::new(black_box(pool_len)).count())
        });
    }
    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let pool = pool(25);
    let team = [pool[0].clone(), pool[1].clone(), pool[2].clone()];

    let mut group = c.benchmark_group("scoring");
    // 22 opponents x 3 members x 3 scenarios
    group.throughput(Throughput::Elements(22 * 9));
    group.bench_function("score_team_pool_25", |b| {
        b.iter(|| score_team(black_box(&team), black_box(&pool), &HashRating))
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let pool = pool(12);
    let scenario = SearchScenario::default();
    let sequential = SearchScenario { parallel: false, ..SearchScenario::default() };

    let mut group = c.benchmark_group("search");
    group.sample_size(20);
    group.throughput(Throughput::Elements(TeamCombinations::count_for(12)));
    group.bench_function("full_search_pool_12_parallel", |b| {
        b.iter(|| run_search(black_box(&pool), &scenario, &HashRating))
    });
    group.bench_function("full_search_pool_12_sequential", |b| {
        b.iter(|| run_search(black_box(&pool), &sequential, &HashRating))
    });
    group.finish();
}

criterion_group!(benches, bench_combinations, bench_scoring, bench_search);
criterion_main!(benches);
