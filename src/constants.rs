// Central constants for attempt odds and record defaults.
pub const BASE_SUCCESS_CHANCE: f64 = 0.10;
pub const RANK_FACTOR: f64 = 0.02; // per rank value of difference
pub const LEVEL_FACTOR: f64 = 0.01; // per level of difference
pub const WEAPON_FACTOR: f64 = 0.005; // per point of weapon accuracy
pub const MIN_SUCCESS_CHANCE: f64 = 0.05;
pub const MAX_SUCCESS_CHANCE: f64 = 0.90;

pub const BASE_RETALIATION_CHANCE: f64 = 0.10;
pub const RETALIATION_LEVEL_FACTOR: f64 = 0.02;
pub const MIN_RETALIATION_CHANCE: f64 = 0.05;
pub const MAX_RETALIATION_CHANCE: f64 = 0.80;

// Stored levels that are missing or non-positive resolve to this.
pub const DEFAULT_LEVEL: i32 = 1;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
// Lock registry is swept for idle entries once it grows past this many ids.
pub const LOCK_PRUNE_THRESHOLD: usize = 256;
