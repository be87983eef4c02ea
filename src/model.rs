//! This module defines the shared state every attempt runs against.

use crate::ranks::RankTable;
use crate::services::directory::PlayerDirectory;
use crate::services::locks::PlayerLocks;
use std::sync::Arc;

/// The central, shared state of the application.
/// Cheap to clone; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Where player records are read from and persisted to.
    pub directory: Arc<dyn PlayerDirectory>,
    /// The rank ladder used for rank values.
    pub ranks: Arc<RankTable>,
    /// Per-player exclusive access for read-modify-write sequences.
    pub locks: Arc<PlayerLocks>,
}

impl AppState {
    pub fn new(directory: Arc<dyn PlayerDirectory>, ranks: RankTable) -> Self {
        Self {
            directory,
            ranks: Arc::new(ranks),
            locks: Arc::new(PlayerLocks::new()),
        }
    }
}
