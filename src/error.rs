//! Error types shared by the engine, the player directories and the HTTP boundary.

use crate::database::models::PlayerId;
use thiserror::Error;

/// Faults raised by a Player Directory while reading or writing records.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("player {0} was modified concurrently")]
    Conflict(PlayerId),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("player directory unavailable: {0}")]
    Unavailable(String),
}

/// Every way an assassination attempt can be rejected before or while it resolves.
/// The display strings are the messages returned to the caller.
#[derive(Debug, Error)]
pub enum AssassinationError {
    #[error("User not found.")]
    NotFound,

    #[error("You cannot attack yourself.")]
    InvalidSelfTarget,

    #[error("You are dead and cannot attack.")]
    AttackerDead,

    #[error("Target is already dead.")]
    TargetAlreadyDead,

    #[error("Weapon not found in inventory.")]
    WeaponUnavailable,

    #[error("Server error during assassination attempt.")]
    InternalError(#[source] DirectoryError),
}

impl AssassinationError {
    /// HTTP status the boundary layer answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            AssassinationError::NotFound => 404,
            AssassinationError::InvalidSelfTarget
            | AssassinationError::AttackerDead
            | AssassinationError::TargetAlreadyDead
            | AssassinationError::WeaponUnavailable => 400,
            AssassinationError::InternalError(_) => 500,
        }
    }
}

impl From<DirectoryError> for AssassinationError {
    fn from(err: DirectoryError) -> Self {
        AssassinationError::InternalError(err)
    }
}

/// Problems found while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("could not read rank table: {0}")]
    RankTable(String),
}
