//! This module contains all functions for interacting with the `players` table.
//! `PgPlayerDirectory` is the Postgres-backed Player Directory.

use super::init::DbPool;
use super::models::{Player, PlayerId, PlayerRow};
use crate::error::DirectoryError;
use crate::services::directory::PlayerDirectory;
use async_trait::async_trait;
use sqlx::Postgres;
use sqlx::types::Json;
use tracing::{instrument, warn};

/// Fetches one player row.
/// Generic over the executor, so it works with a pool or inside a transaction.
pub async fn get_player<'e, E>(executor: E, id: PlayerId) -> Result<Option<Player>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let row = sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT player_id, username, is_alive, xp, level, kills, money, cars, inventory, version
        FROM players WHERE player_id = $1
        "#,
    )
    .bind(id.get())
    .fetch_optional(executor)
    .await?;
    Ok(row.map(Player::from))
}

/// Writes the fields the engine mutates, guarded by the record version.
/// Returns the number of rows touched: 0 means the version was stale or the row is gone.
pub async fn update_player<'e, E>(executor: E, player: &Player) -> Result<u64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let res = sqlx::query(
        r#"
        UPDATE players
        SET is_alive = $2, kills = $3, money = $4, cars = $5, inventory = $6, version = version + 1
        WHERE player_id = $1 AND version = $7
        "#,
    )
    .bind(player.id.get())
    .bind(player.is_alive)
    .bind(player.kills)
    .bind(player.money)
    .bind(Json(&player.cars))
    .bind(Json(&player.inventory))
    .bind(player.version)
    .execute(executor)
    .await?;
    Ok(res.rows_affected())
}

pub struct PgPlayerDirectory {
    pool: DbPool,
}

impl PgPlayerDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerDirectory for PgPlayerDirectory {
    #[instrument(level = "debug", skip(self), fields(player_id = id.get()))]
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, DirectoryError> {
        Ok(get_player(&self.pool, id).await?)
    }

    #[instrument(level = "debug", skip(self, player), fields(player_id = player.id.get(), version = player.version))]
    async fn save(&self, player: &Player) -> Result<(), DirectoryError> {
        if update_player(&self.pool, player).await? == 1 {
            Ok(())
        } else {
            warn!(target: "directory.pg", player_id = player.id.get(), "stale version on save");
            Err(DirectoryError::Conflict(player.id))
        }
    }

    /// All records in one transaction; any stale version rolls every write back.
    #[instrument(level = "debug", skip(self, players), fields(count = players.len()))]
    async fn save_all(&self, players: &[&Player]) -> Result<(), DirectoryError> {
        let mut tx = self.pool.begin().await?;
        for player in players {
            if update_player(&mut *tx, player).await? != 1 {
                warn!(target: "directory.pg", player_id = player.id.get(), "stale version in batch save");
                if let Err(e) = tx.rollback().await {
                    warn!(target: "directory.pg", error = %e, "rollback failed");
                }
                return Err(DirectoryError::Conflict(player.id));
            }
        }
        tx.commit().await?;
        Ok(())
    }
}
