//! Per-player exclusive access.
//! Each player id maps to its own async mutex; an attempt holds the attacker's and the
//! target's lock for its whole read-modify-write sequence, so two attempts touching the
//! same player run one after the other.
use crate::constants::LOCK_PRUNE_THRESHOLD;
use crate::database::models::PlayerId;
use ahash::AHashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::trace;

#[derive(Default)]
pub struct PlayerLocks {
    map: RwLock<AHashMap<PlayerId, Arc<Mutex<()>>>>,
}

/// Held locks for one attempt. Dropping it releases every lock it holds.
pub struct PlayerGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl PlayerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    async fn handle(&self, id: PlayerId) -> Arc<Mutex<()>> {
        // Fast path: read lock
        if let Some(lock) = self.map.read().await.get(&id) {
            return lock.clone();
        }
        let mut map = self.map.write().await;
        if map.len() >= LOCK_PRUNE_THRESHOLD {
            // Entries only referenced by the map are idle.
            map.retain(|_, lock| Arc::strong_count(lock) > 1);
        }
        map.entry(id).or_default().clone()
    }

    /// Locks a single player.
    pub async fn acquire(&self, id: PlayerId) -> PlayerGuard {
        let guard = self.handle(id).await.lock_owned().await;
        trace!(target = "locks", player_id = id.get(), "acquired");
        PlayerGuard {
            _guards: vec![guard],
        }
    }

    /// Locks two players in ascending id order so opposing attempts can't deadlock.
    /// Locks once when both ids are the same.
    pub async fn acquire_pair(&self, a: PlayerId, b: PlayerId) -> PlayerGuard {
        if a == b {
            return self.acquire(a).await;
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        let first_guard = self.handle(first).await.lock_owned().await;
        let second_guard = self.handle(second).await.lock_owned().await;
        trace!(target = "locks", first = first.get(), second = second.get(), "acquired_pair");
        PlayerGuard {
            _guards: vec![first_guard, second_guard],
        }
    }

    /// Number of ids currently tracked.
    pub async fn tracked(&self) -> usize {
        self.map.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn pair_lock_blocks_overlapping_pair() {
        let locks = Arc::new(PlayerLocks::new());
        let guard = locks.acquire_pair(PlayerId(1), PlayerId(2)).await;

        let contender = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _g = locks.acquire_pair(PlayerId(2), PlayerId(3)).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), contender)
            .await
            .expect("contender should acquire after release")
            .unwrap();
    }

    #[tokio::test]
    async fn self_pair_does_not_deadlock() {
        let locks = PlayerLocks::new();
        let guard = tokio::time::timeout(
            Duration::from_secs(1),
            locks.acquire_pair(PlayerId(4), PlayerId(4)),
        )
        .await;
        assert!(guard.is_ok());
        assert_eq!(locks.tracked().await, 1);
    }
}
