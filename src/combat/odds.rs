//! Success and retaliation odds for an attempt.

use crate::constants::{
    BASE_RETALIATION_CHANCE, BASE_SUCCESS_CHANCE, LEVEL_FACTOR, MAX_RETALIATION_CHANCE,
    MAX_SUCCESS_CHANCE, MIN_RETALIATION_CHANCE, MIN_SUCCESS_CHANCE, RANK_FACTOR,
    RETALIATION_LEVEL_FACTOR, WEAPON_FACTOR,
};

/// The stats one side brings to the attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combatant {
    pub rank_value: u32,
    pub level: i32,
}

/// Both chances, computed up front so they can be logged together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptOdds {
    pub success: f64,
    pub retaliation: f64,
}

/// Clamps to `[min, max]`; NaN lands on `min`.
fn bounded(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

pub fn success_chance(attacker: Combatant, target: Combatant, weapon_accuracy: f64) -> f64 {
    let rank_difference = attacker.rank_value as f64 - target.rank_value as f64;
    let level_difference = attacker.level as f64 - target.level as f64;
    let chance = BASE_SUCCESS_CHANCE
        + rank_difference * RANK_FACTOR
        + level_difference * LEVEL_FACTOR
        + weapon_accuracy * WEAPON_FACTOR;
    bounded(chance, MIN_SUCCESS_CHANCE, MAX_SUCCESS_CHANCE)
}

/// Only levels matter here; the defender's rank and the weapon don't.
pub fn retaliation_chance(attacker: Combatant, target: Combatant) -> f64 {
    let level_difference = target.level as f64 - attacker.level as f64;
    let chance = BASE_RETALIATION_CHANCE + level_difference * RETALIATION_LEVEL_FACTOR;
    bounded(chance, MIN_RETALIATION_CHANCE, MAX_RETALIATION_CHANCE)
}

pub fn attempt_odds(attacker: Combatant, target: Combatant, weapon_accuracy: f64) -> AttemptOdds {
    AttemptOdds {
        success: success_chance(attacker, target, weapon_accuracy),
        retaliation: retaliation_chance(attacker, target),
    }
}
