//! Concrete battle engine: builds combatants at a fixed CP cap and resolves
//! a deterministic turn-based encounter. No randomness anywhere, so the same
//! pairing always yields the same rating.

use crate::battle::types::{effectiveness_against, STAB_MULTIPLIER};
use crate::battle::{Rating, SimError, Simulator, MAX_RATING};
use crate::data::{BaseStats, Cup, GameMaster, Move};

pub const DEFAULT_CP_CAP: u32 = 1500;

/// Flat attack bonus applied to every PvP move.
const BONUS_MULTIPLIER: f64 = 1.3;
/// 4 minutes of 0.5s turns; battles that last this long are scored as-is.
const MAX_TURNS: u32 = 480;
const MAX_ENERGY: u32 = 100;
/// Stat scaling never exceeds the level-50 combat power multiplier.
const MAX_CPM: f64 = 0.840_300;
/// Combatants are built with maxed IVs in every stat.
const IV: f64 = 15.0;

/// A species scaled to the CP cap with its default move selection applied:
/// first fast move, first charged move, second charged move when one exists.
#[derive(Debug, Clone)]
pub struct Combatant {
    pub species_id: String,
    pub types: Vec<String>,
    pub attack: f64,
    pub defense: f64,
    pub max_hp: u32,
    pub fast: Move,
    pub charged: Vec<Move>,
}

/// Battle resolution against one shared gamemaster, under one cup and CP cap.
#[derive(Debug, Clone)]
pub struct BattleEngine<'a> {
    gamemaster: &'a GameMaster,
    cup: Cup,
    cp_cap: u32,
}

impl<'a> BattleEngine<'a> {
    pub fn new(gamemaster: &'a GameMaster) -> Self {
        Self::with_cp_cap(gamemaster, DEFAULT_CP_CAP)
    }

    pub fn with_cp_cap(gamemaster: &'a GameMaster, cp_cap: u32) -> Self {
        Self {
            gamemaster,
            cup: gamemaster.cup_by_id("all"),
            cp_cap,
        }
    }

    pub fn build_combatant(&self, species_id: &str) -> Result<Combatant, SimError> {
        let species = self.gamemaster.species_by_id(species_id)?;
        if !self.cup.allows(&species) {
            return Err(SimError::Ineligible {
                species_id: species.species_id,
                cup: self.cup.name.clone(),
            });
        }

        let no_moves = || SimError::NoUsableMoves {
            species_id: species_id.to_string(),
        };
        let fast = self
            .gamemaster
            .move_by_id(species.fast_moves.first().ok_or_else(no_moves)?)?;
        let mut charged = Vec::with_capacity(2);
        charged.push(
            self.gamemaster
                .move_by_id(species.charged_moves.first().ok_or_else(no_moves)?)?,
        );
        if let Some(second) = species.charged_moves.get(1) {
            charged.push(self.gamemaster.move_by_id(second)?);
        }

        let cpm = level_multiplier(&species.base_stats, self.cp_cap);
        Ok(Combatant {
            species_id: species.species_id,
            types: species.types,
            attack: (species.base_stats.atk + IV) * cpm,
            defense: (species.base_stats.def + IV) * cpm,
            max_hp: (((species.base_stats.hp + IV) * cpm).floor() as u32).max(10),
            fast,
            charged,
        })
    }
}

impl Simulator for BattleEngine<'_> {
    fn simulate(
        &self,
        attacker: &str,
        defender: &str,
        shields_attacker: u8,
        shields_defender: u8,
    ) -> Result<Rating, SimError> {
        let attacker = self.build_combatant(attacker)?;
        let defender = self.build_combatant(defender)?;
        Ok(run_battle(&attacker, &defender, shields_attacker, shields_defender))
    }
}

/// Continuous approximation of the level curve: the multiplier that puts the
/// species exactly at the CP cap, clamped to the level-50 ceiling.
fn level_multiplier(base: &BaseStats, cp_cap: u32) -> f64 {
    let attack = base.atk + IV;
    let defense = base.def + IV;
    let stamina = base.hp + IV;
    let squared = 10.0 * f64::from(cp_cap) / (attack * (defense * stamina).sqrt());
    squared.sqrt().min(MAX_CPM)
}

fn move_damage(attacker: &Combatant, defender: &Combatant, mv: &Move) -> u32 {
    if mv.power <= 0.0 {
        return 0;
    }
    let stab = if attacker.types.iter().any(|t| t == &mv.move_type) {
        STAB_MULTIPLIER
    } else {
        1.0
    };
    let effectiveness = effectiveness_against(&mv.move_type, &defender.types);
    let raw = mv.power * stab * (attacker.attack / defender.defense) * effectiveness * 0.5
        * BONUS_MULTIPLIER;
    raw.floor() as u32 + 1
}

#[derive(Debug)]
struct SideState {
    hp: i32,
    max_hp: i32,
    energy: u32,
    cooldown: u32,
    shields: u8,
    fast_damage: u32,
    fast_gain: u32,
    fast_turns: u32,
    /// (energy cost, damage) per selected charged move, selection order.
    charged: Vec<(u32, u32)>,
}

impl SideState {
    fn prepare(me: &Combatant, opponent: &Combatant, shields: u8) -> Self {
        Self {
            hp: me.max_hp as i32,
            max_hp: me.max_hp as i32,
            energy: 0,
            cooldown: 0,
            shields,
            fast_damage: move_damage(me, opponent, &me.fast),
            fast_gain: me.fast.energy_gain,
            fast_turns: me.fast.turns.max(1),
            charged: me
                .charged
                .iter()
                .map(|mv| (mv.energy, move_damage(me, opponent, mv)))
                .collect(),
        }
    }

    /// Affordable charged move with the highest damage; first selected wins ties.
    fn best_charged(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, &(cost, damage)) in self.charged.iter().enumerate() {
            if self.energy < cost {
                continue;
            }
            match best {
                Some(current) if self.charged[current].1 >= damage => {}
                _ => best = Some(index),
            }
        }
        best
    }
}

fn step(states: &mut [SideState; 2], actor: usize) {
    let (first, second) = states.split_at_mut(1);
    let (me, target) = if actor == 0 {
        (&mut first[0], &mut second[0])
    } else {
        (&mut second[0], &mut first[0])
    };
    if me.hp <= 0 || target.hp <= 0 {
        return;
    }

    if me.cooldown == 0 {
        if let Some(index) = me.best_charged() {
            let (cost, damage) = me.charged[index];
            me.energy -= cost;
            if target.shields > 0 {
                // A shield eats the whole hit; chip damage only.
                target.shields -= 1;
                target.hp -= 1;
            } else {
                target.hp -= damage as i32;
            }
            return;
        }
        me.cooldown = me.fast_turns;
    }

    me.cooldown -= 1;
    if me.cooldown == 0 {
        target.hp -= me.fast_damage as i32;
        me.energy = (me.energy + me.fast_gain).min(MAX_ENERGY);
    }
}

fn run_battle(attacker: &Combatant, defender: &Combatant, shields_a: u8, shields_b: u8) -> Rating {
    let mut states = [
        SideState::prepare(attacker, defender, shields_a),
        SideState::prepare(defender, attacker, shields_b),
    ];
    // Higher attack acts first each turn; the attacker wins exact ties.
    let order: [usize; 2] = if defender.attack > attacker.attack {
        [1, 0]
    } else {
        [0, 1]
    };

    for _ in 0..MAX_TURNS {
        if states[0].hp <= 0 || states[1].hp <= 0 {
            break;
        }
        for &actor in &order {
            step(&mut states, actor);
        }
    }

    let health = f64::from(states[0].hp.max(0)) / f64::from(states[0].max_hp);
    let damage_dealt =
        f64::from(states[1].max_hp - states[1].hp.max(0)) / f64::from(states[1].max_hp);
    let rating = (500.0 * (health + damage_dealt)).floor() as Rating;
    rating.min(MAX_RATING)
}
