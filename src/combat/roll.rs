//! Sources of the uniform draws that decide attempts.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Largest `f64` below 1.0.
pub const EXHAUSTED_ROLL: f64 = 1.0 - f64::EPSILON / 2.0;

/// Yields uniform samples in `[0, 1)`.
pub trait Roller {
    fn roll(&mut self) -> f64;
}

/// Adapts any `rand` generator.
pub struct RngRoller<R>(pub R);

impl RngRoller<StdRng> {
    /// A `StdRng` seeded from the OS. Unlike the thread-local generator it is `Send`,
    /// so it can live across the directory's await points.
    pub fn from_os_rng() -> Self {
        RngRoller(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        RngRoller(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn roll(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed sequence of samples. Once exhausted it rolls the largest value below `1.0`,
/// which fails every check.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<f64>,
    consumed: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            consumed: 0,
        }
    }

    /// How many samples have been drawn.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl Roller for ScriptedRolls {
    fn roll(&mut self) -> f64 {
        self.consumed += 1;
        self.rolls.pop_front().unwrap_or(EXHAUSTED_ROLL)
    }
}
