//! The rank ladder: experience thresholds and the ordinal value of each tier.

use crate::error::ConfigError;
use serde::Deserialize;

/// One named tier and the experience needed to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankTier {
    pub name: String,
    pub min_xp: i64,
}

/// Where a given amount of experience places a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankStanding<'a> {
    pub current_rank: &'a str,
    pub next_rank: Option<&'a str>,
    pub xp_to_next: Option<i64>,
}

/// Ordered tiers, strictly ascending by threshold.
#[derive(Debug, Clone)]
pub struct RankTable {
    tiers: Vec<RankTier>,
}

const DEFAULT_TIERS: &[(&str, i64)] = &[
    ("Street Thug", 0),
    ("Pickpocket", 100),
    ("Enforcer", 500),
    ("Hitman", 1_500),
    ("Capo", 4_000),
    ("Underboss", 10_000),
    ("Consigliere", 25_000),
    ("Godfather", 60_000),
];

impl Default for RankTable {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|(name, min_xp)| RankTier {
                    name: (*name).to_string(),
                    min_xp: *min_xp,
                })
                .collect(),
        }
    }
}

impl RankTable {
    /// Builds a table, rejecting empty, unsorted or duplicated tiers.
    pub fn new(tiers: Vec<RankTier>) -> Result<Self, ConfigError> {
        if tiers.is_empty() {
            return Err(ConfigError::RankTable("rank table has no tiers".into()));
        }
        for pair in tiers.windows(2) {
            if pair[1].min_xp <= pair[0].min_xp {
                return Err(ConfigError::RankTable(format!(
                    "tier '{}' must need more experience than '{}'",
                    pair[1].name, pair[0].name
                )));
            }
        }
        for (i, tier) in tiers.iter().enumerate() {
            if tiers[..i].iter().any(|t| t.name == tier.name) {
                return Err(ConfigError::RankTable(format!(
                    "tier '{}' appears twice",
                    tier.name
                )));
            }
        }
        Ok(Self { tiers })
    }

    /// Parses a JSON array of `{ "name": ..., "min_xp": ... }`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let tiers: Vec<RankTier> =
            serde_json::from_str(raw).map_err(|e| ConfigError::RankTable(e.to_string()))?;
        Self::new(tiers)
    }

    pub fn rank_names(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(|t| t.name.as_str())
    }

    pub fn rank_for_experience(&self, xp: i64) -> RankStanding<'_> {
        let idx = self
            .tiers
            .iter()
            .rposition(|t| t.min_xp <= xp)
            .unwrap_or(0);
        let next = self.tiers.get(idx + 1);
        RankStanding {
            current_rank: &self.tiers[idx].name,
            next_rank: next.map(|t| t.name.as_str()),
            xp_to_next: next.map(|t| t.min_xp - xp),
        }
    }

    /// 1-based position of a tier name. Unknown names count as the first tier.
    pub fn rank_value(&self, rank: &str) -> u32 {
        self.tiers
            .iter()
            .position(|t| t.name == rank)
            .map_or(1, |i| i as u32 + 1)
    }

    pub fn rank_value_for_experience(&self, xp: i64) -> u32 {
        self.rank_value(self.rank_for_experience(xp).current_rank)
    }
}
