//! The Combat Resolution Engine: odds, rolls, loot transfer and the attempt itself.

pub mod engine;
pub mod loot;
pub mod odds;
pub mod outcome;
pub mod roll;

pub use engine::resolve_assassination_attempt;
pub use outcome::{AttemptOutcome, Resolution};
pub use roll::{Roller, RngRoller, ScriptedRolls};
