//! Command dispatch and `--flag=value` parsing for the `triad` binary.

use crate::battle::{BattleEngine, Simulator};
use crate::data::{load_rankings, meta_pool, GameMaster, DEFAULT_GAMEMASTER_PATH, DEFAULT_RANKINGS_PATH};
use crate::parallel::WorkerPool;
use crate::search::{run_search, SearchScenario};

pub const DEFAULT_META_COUNT: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Search,
    Simulate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("search") => Some(Command::Search),
        Some("simulate") => Some(Command::Simulate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Search) => handle_search(args),
        Some(Command::Simulate) => handle_simulate(args),
        None => {
            eprintln!("usage: triad <search|simulate>");
            2
        }
    }
}

fn handle_search(args: &[String]) -> i32 {
    let meta_count = parse_usize_flag(args, "--meta", DEFAULT_META_COUNT);
    let limit = parse_limit_flag(args);
    let workers = parse_usize_flag(args, "--workers", 0);

    let gamemaster = match GameMaster::load(DEFAULT_GAMEMASTER_PATH) {
        Ok(gamemaster) => gamemaster,
        Err(err) => {
            eprintln!("failed to load gamemaster: {err}");
            return 1;
        }
    };
    let rankings = match load_rankings(DEFAULT_RANKINGS_PATH) {
        Ok(rankings) => rankings,
        Err(err) => {
            eprintln!("failed to load rankings: {err}");
            return 1;
        }
    };
    let pool = meta_pool(&rankings, meta_count);

    let engine = BattleEngine::new(&gamemaster);
    let scenario = SearchScenario { limit, parallel: true };
    let result = WorkerPool::with_workers(workers).install(|| run_search(&pool, &scenario, &engine));

    match result {
        Ok(report) => {
            print!("{}", report.render());
            0
        }
        Err(err) => {
            eprintln!("search failed: {err}");
            1
        }
    }
}

fn handle_simulate(args: &[String]) -> i32 {
    let (Some(attacker), Some(defender)) = (positional(args, 2), positional(args, 3)) else {
        eprintln!("usage: triad simulate <attacker> <defender> [--shields=A,B]");
        return 2;
    };
    let (shields_attacker, shields_defender) = parse_shields_flag(args);

    let gamemaster = match GameMaster::load(DEFAULT_GAMEMASTER_PATH) {
        Ok(gamemaster) => gamemaster,
        Err(err) => {
            eprintln!("failed to load gamemaster: {err}");
            return 1;
        }
    };
    let engine = BattleEngine::new(&gamemaster);

    match engine.simulate(attacker, defender, shields_attacker, shields_defender) {
        Ok(rating) => {
            println!(
                "{attacker} vs {defender} (shields {shields_attacker}-{shields_defender}): rating {rating}"
            );
            0
        }
        Err(err) => {
            eprintln!("simulation failed: {err}");
            1
        }
    }
}

/// Positional argument at `index`, skipping `--flag` style arguments.
fn positional(args: &[String], index: usize) -> Option<&str> {
    args.iter()
        .skip(1)
        .filter(|arg| !arg.starts_with("--"))
        .nth(index - 1)
        .map(String::as_str)
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .find_map(|arg| arg.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')))
}

fn parse_usize_flag(args: &[String], name: &str, default: usize) -> usize {
    match flag_value(args, name) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {name} '{raw}', defaulting to {default}");
            default
        }),
    }
}

/// `--limit` defaults to unbounded rather than to a number.
fn parse_limit_flag(args: &[String]) -> Option<usize> {
    let raw = flag_value(args, "--limit")?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("invalid --limit '{raw}', defaulting to unbounded");
            None
        }
    }
}

/// `--shields=A,B` with both counts in 0..=2; anything else falls back to 1,1.
fn parse_shields_flag(args: &[String]) -> (u8, u8) {
    let Some(raw) = flag_value(args, "--shields") else {
        return (1, 1);
    };
    let parsed = raw.split_once(',').and_then(|(left, right)| {
        let left: u8 = left.trim().parse().ok()?;
        let right: u8 = right.trim().parse().ok()?;
        (left <= 2 && right <= 2).then_some((left, right))
    });
    parsed.unwrap_or_else(|| {
        eprintln!("invalid --shields '{raw}', defaulting to 1,1");
        (1, 1)
    })
}
