use super::loot::Loot;
use super::odds::AttemptOdds;

/// How a valid attempt played out. None of these are errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// The target died and the attacker took everything they had.
    Success { loot: Loot, attacker_kills: i64 },
    /// The attack failed and the defender killed the attacker.
    Retaliated { attacker_died: bool },
    /// The attack failed; nobody changed.
    Failed,
}

/// Result of a resolved attempt, with the details the boundary layer reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub target_username: String,
    pub odds: AttemptOdds,
    pub outcome: AttemptOutcome,
}

impl AttemptOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            AttemptOutcome::Success { .. } => "success",
            AttemptOutcome::Retaliated { .. } => "retaliated",
            AttemptOutcome::Failed => "failed",
        }
    }
}
