use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use underworld::combat::odds::{Combatant, attempt_odds, retaliation_chance, success_chance};
use underworld::ranks::RankTable;

fn c(rank_value: u32, level: i32) -> Combatant {
    Combatant { rank_value, level }
}

#[test]
fn documented_scenario_gives_fifty_six_percent() {
    let chance = success_chance(c(3, 5), c(1, 3), 80.0);
    assert!((chance - 0.56).abs() < 1e-9, "got {chance}");
}

#[test]
fn scenario_rank_values_come_from_the_table() {
    let ranks = RankTable::default();
    // 500 xp is the third tier, 0 xp the first.
    assert_eq!(ranks.rank_value_for_experience(500), 3);
    assert_eq!(ranks.rank_value_for_experience(0), 1);
}

#[test]
fn success_clamps_at_both_ends() {
    assert_eq!(success_chance(c(1, 1), c(8, 400), 0.0), 0.05);
    assert_eq!(success_chance(c(8, 400), c(1, 1), 500.0), 0.90);
    assert_eq!(success_chance(c(1, 1), c(1, 1), -10_000.0), 0.05);
}

#[test]
fn retaliation_clamps_at_both_ends() {
    assert_eq!(retaliation_chance(c(1, 90), c(1, 1)), 0.05);
    assert_eq!(retaliation_chance(c(1, 1), c(1, 90)), 0.80);
    // Equal levels leave the base chance.
    assert!((retaliation_chance(c(5, 4), c(1, 4)) - 0.10).abs() < 1e-9);
}

#[test]
fn retaliation_ignores_rank() {
    assert_eq!(
        retaliation_chance(c(1, 3), c(8, 5)),
        retaliation_chance(c(8, 3), c(1, 5))
    );
}

#[test]
fn random_inputs_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5_000 {
        let attacker = c(rng.random_range(1..=50), rng.random_range(1..=10_000));
        let target = c(rng.random_range(1..=50), rng.random_range(1..=10_000));
        let accuracy = rng.random_range(-1_000.0..1_000.0);
        let odds = attempt_odds(attacker, target, accuracy);
        assert!((0.05..=0.90).contains(&odds.success), "{odds:?}");
        assert!((0.05..=0.80).contains(&odds.retaliation), "{odds:?}");
    }
}

#[test]
fn nan_accuracy_falls_to_the_floor() {
    assert_eq!(success_chance(c(3, 3), c(1, 1), f64::NAN), 0.05);
}
