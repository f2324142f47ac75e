//! GO-style type effectiveness. There are no true immunities: an "immune"
//! pairing still deals 0.390625x damage (two resistance steps).

pub const SUPER_EFFECTIVE: f64 = 1.6;
pub const NOT_VERY_EFFECTIVE: f64 = 0.625;
pub const IMMUNE: f64 = 0.390625;
pub const STAB_MULTIPLIER: f64 = 1.2;

/// (super effective against, resisted by, "immune" against) per attacking type.
fn matchups(attacking: &str) -> (&'static [&'static str], &'static [&'static str], &'static [&'static str]) {
    match attacking {
        "normal" => (&[], &["rock", "steel"], &["ghost"]),
        "fire" => (
            &["grass", "ice", "bug", "steel"],
            &["fire", "water", "rock", "dragon"],
            &[],
        ),
        "water" => (&["fire", "ground", "rock"], &["water", "grass", "dragon"], &[]),
        "electric" => (
            &["water", "flying"],
            &["electric", "grass", "dragon"],
            &["ground"],
        ),
        "grass" => (
            &["water", "ground", "rock"],
            &["fire", "grass", "poison", "flying", "bug", "dragon", "steel"],
            &[],
        ),
        "ice" => (
            &["grass", "ground", "flying", "dragon"],
            &["fire", "water", "ice", "steel"],
            &[],
        ),
        "fighting" => (
            &["normal", "ice", "rock", "dark", "steel"],
            &["poison", "flying", "psychic", "bug", "fairy"],
            &["ghost"],
        ),
        "poison" => (
            &["grass", "fairy"],
            &["poison", "ground", "rock", "ghost"],
            &["steel"],
        ),
        "ground" => (
            &["fire", "electric", "poison", "rock", "steel"],
            &["grass", "bug"],
            &["flying"],
        ),
        "flying" => (
            &["grass", "fighting", "bug"],
            &["electric", "rock", "steel"],
            &[],
        ),
        "psychic" => (&["fighting", "poison"], &["psychic", "steel"], &["dark"]),
        "bug" => (
            &["grass", "psychic", "dark"],
            &["fire", "fighting", "poison", "flying", "ghost", "steel", "fairy"],
            &[],
        ),
        "rock" => (
            &["fire", "ice", "flying", "bug"],
            &["fighting", "ground", "steel"],
            &[],
        ),
        "ghost" => (&["psychic", "ghost"], &["dark"], &["normal"]),
        "dragon" => (&["dragon"], &["steel"], &["fairy"]),
        "dark" => (&["psychic", "ghost"], &["fighting", "dark", "fairy"], &[]),
        "steel" => (
            &["ice", "rock", "fairy"],
            &["fire", "water", "electric", "steel"],
            &[],
        ),
        "fairy" => (&["fighting", "dragon", "dark"], &["fire", "poison", "steel"], &[]),
        _ => (&[], &[], &[]),
    }
}

pub fn effectiveness(attacking: &str, defending: &str) -> f64 {
    let (supers, resists, immunes) = matchups(attacking);
    if supers.contains(&defending) {
        SUPER_EFFECTIVE
    } else if resists.contains(&defending) {
        NOT_VERY_EFFECTIVE
    } else if immunes.contains(&defending) {
        IMMUNE
    } else {
        1.0
    }
}

/// Combined multiplier against a mono- or dual-typed defender.
pub fn effectiveness_against(attacking: &str, defender_types: &[String]) -> f64 {
    defender_types
        .iter()
        .map(|defending| effectiveness(attacking, defending))
        .product()
}
