//! Matchup scoring: one team against the whole pool under every shield
//! scenario.

use crate::battle::{Rating, SimError, Simulator};
use crate::search::combos::TEAM_SIZE;

/// Symmetric shield usage only; asymmetric pairings are deliberately not
/// evaluated.
pub const SHIELD_SCENARIOS: [(u8, u8); 3] = [(0, 0), (1, 1), (2, 2)];

/// A rating strictly above this counts as a favorable encounter.
pub const WIN_THRESHOLD: Rating = 500;

/// Count of favorable encounters over (member x non-team opponent x shield
/// scenario), team members always in the attacker seat. The first simulator
/// failure aborts scoring; no partial score escapes.
pub fn score_team<S: Simulator + ?Sized>(
    team: &[String; TEAM_SIZE],
    pool: &[String],
    sim: &S,
) -> Result<u32, SimError> {
    let mut score = 0;
    for opponent in pool {
        if team.contains(opponent) {
            continue;
        }
        for member in team {
            for (shields_attacker, shields_defender) in SHIELD_SCENARIOS {
                let rating = sim.simulate(member, opponent, shields_attacker, shields_defender)?;
                if rating > WIN_THRESHOLD {
                    score += 1;
                }
            }
        }
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;

    struct FixedRating(Rating);

    impl Simulator for FixedRating {
        fn simulate(&self, _: &str, _: &str, _: u8, _: u8) -> Result<Rating, SimError> {
            Ok(self.0)
        }
    }

    /// Fails whenever the poisoned species is in either seat.
    struct Poisoned(&'static str);

    impl Simulator for Poisoned {
        fn simulate(&self, attacker: &str, defender: &str, _: u8, _: u8) -> Result<Rating, SimError> {
            if attacker == self.0 || defender == self.0 {
                return Err(SimError::Data(DataError::NotFound {
                    kind: "species",
                    id: self.0.to_string(),
                }));
            }
            Ok(1000)
        }
    }

    fn pool(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn team(ids: [&str; 3]) -> [String; 3] {
        ids.map(str::to_string)
    }

    #[test]
    fn always_winning_stub_scores_nine_per_outside_opponent() {
        let pool = pool(&["a", "b", "c", "d", "e", "f"]);
        let score = score_team(&team(["a", "b", "c"]), &pool, &FixedRating(1000)).expect("scores");
        assert_eq!(score, 9 * 3);
    }

    #[test]
    fn always_losing_stub_scores_zero() {
        let pool = pool(&["a", "b", "c", "d"]);
        let score = score_team(&team(["a", "b", "c"]), &pool, &FixedRating(0)).expect("scores");
        assert_eq!(score, 0);
    }

    #[test]
    fn exact_threshold_rating_is_not_a_win() {
        let pool = pool(&["a", "b", "c", "d"]);
        let at_threshold = score_team(&team(["a", "b", "c"]), &pool, &FixedRating(500)).expect("scores");
        assert_eq!(at_threshold, 0);
        let just_above = score_team(&team(["a", "b", "c"]), &pool, &FixedRating(501)).expect("scores");
        assert_eq!(just_above, 9);
    }

    #[test]
    fn team_members_are_skipped_as_opponents() {
        // Pool entirely inside the team: nothing to fight.
        let pool = pool(&["a", "b", "c"]);
        let score = score_team(&team(["a", "b", "c"]), &pool, &FixedRating(1000)).expect("scores");
        assert_eq!(score, 0);
    }

    #[test]
    fn simulator_failure_propagates_without_partial_score() {
        let pool = pool(&["a", "b", "c", "d", "e"]);
        let err = score_team(&team(["a", "b", "c"]), &pool, &Poisoned("e")).unwrap_err();
        assert!(matches!(err, SimError::Data(_)));
    }
}
