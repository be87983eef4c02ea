//! Player Directory: the store the engine reads players from and writes them back to.
use crate::database::models::{Player, PlayerId};
use crate::error::DirectoryError;
use ahash::AHashMap;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Looks a player up by id. `Ok(None)` when no such record exists.
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, DirectoryError>;

    /// Persists the mutable fields of one record. Rejects stale versions.
    async fn save(&self, player: &Player) -> Result<(), DirectoryError>;

    /// Persists several records. Directories that support transactions override this
    /// so the writes land together; the default issues one `save` per record, in order.
    async fn save_all(&self, players: &[&Player]) -> Result<(), DirectoryError> {
        for player in players {
            self.save(player).await?;
        }
        Ok(())
    }
}

/// Process-local directory backed by a hash map. Used by tests and tooling.
#[derive(Default)]
pub struct MemoryDirectory {
    players: RwLock<AHashMap<PlayerId, Player>>,
    saves: AtomicUsize,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: impl IntoIterator<Item = Player>) -> Self {
        let map = players.into_iter().map(|p| (p.id, p)).collect();
        Self {
            players: RwLock::new(map),
            saves: AtomicUsize::new(0),
        }
    }

    pub async fn insert(&self, player: Player) {
        self.players.write().await.insert(player.id, player);
    }

    /// Number of records written so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

fn apply(stored: &mut Player, player: &Player) {
    stored.is_alive = player.is_alive;
    stored.kills = player.kills;
    stored.money = player.money;
    stored.cars = player.cars.clone();
    stored.inventory = player.inventory.clone();
    stored.version += 1;
}

fn check_version(stored_version: Option<i64>, player: &Player) -> Result<(), DirectoryError> {
    let Some(stored_version) = stored_version else {
        return Err(DirectoryError::Unavailable(format!(
            "player {} does not exist",
            player.id
        )));
    };
    if stored_version != player.version {
        debug!(
            target = "directory.memory",
            player_id = player.id.get(),
            stored = stored_version,
            given = player.version,
            "stale_version"
        );
        return Err(DirectoryError::Conflict(player.id));
    }
    Ok(())
}

#[async_trait]
impl PlayerDirectory for MemoryDirectory {
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, DirectoryError> {
        Ok(self.players.read().await.get(&id).cloned())
    }

    #[instrument(level = "trace", skip(self, player), fields(player_id = player.id.get()))]
    async fn save(&self, player: &Player) -> Result<(), DirectoryError> {
        self.save_all(&[player]).await
    }

    /// Checks every version under one write lock before applying anything,
    /// so a stale record leaves the whole batch unwritten.
    #[instrument(level = "trace", skip(self, players), fields(count = players.len()))]
    async fn save_all(&self, players: &[&Player]) -> Result<(), DirectoryError> {
        let mut map = self.players.write().await;
        for (i, player) in players.iter().enumerate() {
            // An id repeated in one batch must carry the version its earlier write produces.
            let earlier = players[..i].iter().filter(|p| p.id == player.id).count() as i64;
            let expected = map.get(&player.id).map(|stored| stored.version + earlier);
            check_version(expected, player)?;
        }
        for player in players {
            if let Some(stored) = map.get_mut(&player.id) {
                apply(stored, player);
                self.saves.fetch_add(1, Ordering::SeqCst);
            }
        }
        Ok(())
    }
}
