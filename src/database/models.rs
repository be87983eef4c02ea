//! Contains the player record and the data structures that map to the `players` table.

use crate::constants::DEFAULT_LEVEL;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use std::fmt;

/// Unique key of a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PlayerId {
    fn from(id: i64) -> Self {
        PlayerId(id)
    }
}

/// A car owned by a player. Fields the engine doesn't know about are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub name: String,
    #[serde(default)]
    pub value: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Car {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_quantity() -> i64 {
    1
}

/// A single stack in a player's inventory. Names are unique within one inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub attributes: ItemAttributes,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            attributes: ItemAttributes::default(),
        }
    }

    /// A weapon item with the given accuracy.
    pub fn weapon(name: impl Into<String>, quantity: i64, accuracy: f64) -> Self {
        Self {
            attributes: ItemAttributes {
                accuracy: Some(accuracy),
                extra: Map::new(),
            },
            ..Self::new(name, quantity)
        }
    }

    /// Accuracy usable in an attack. Missing, zero and non-finite values don't count.
    pub fn usable_accuracy(&self) -> Option<f64> {
        self.attributes
            .accuracy
            .filter(|a| a.is_finite() && *a != 0.0)
    }
}

/// A player record as the engine sees it, with defaults already resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    pub is_alive: bool,
    pub experience: i64,
    pub level: i32,
    pub kills: i64,
    pub money: i64,
    pub cars: Vec<Car>,
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub version: i64,
}

impl Player {
    /// A fresh, living player with nothing to their name.
    pub fn new(id: PlayerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            is_alive: true,
            experience: 0,
            level: DEFAULT_LEVEL,
            kills: 0,
            money: 0,
            cars: Vec::new(),
            inventory: Vec::new(),
            version: 0,
        }
    }

    pub fn find_item(&self, name: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.name == name)
    }
}

/// Resolves a stored level to the level used in formulas.
pub fn resolve_level(stored: Option<i32>) -> i32 {
    stored.filter(|l| *l > 0).unwrap_or(DEFAULT_LEVEL)
}

/// Raw row of the `players` table.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct PlayerRow {
    pub player_id: i64,
    pub username: String,
    pub is_alive: bool,
    pub xp: i64,
    pub level: Option<i32>,
    pub kills: i64,
    pub money: i64,
    pub cars: Json<Vec<Car>>,
    pub inventory: Json<Vec<InventoryItem>>,
    pub version: i64,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player {
            id: PlayerId(row.player_id),
            username: row.username,
            is_alive: row.is_alive,
            experience: row.xp.max(0),
            level: resolve_level(row.level),
            kills: row.kills.max(0),
            money: row.money.max(0),
            cars: row.cars.0,
            inventory: row.inventory.0,
            version: row.version,
        }
    }
}
