//! Runtime configuration, read from the environment (and `.env` when present).
use crate::constants::DEFAULT_DB_MAX_CONNECTIONS;
use crate::error::ConfigError;
use crate::ranks::RankTable;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub rank_table_path: Option<PathBuf>,
}

impl Config {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DB_MAX_CONNECTIONS",
                        value: raw,
                    });
                }
            },
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };
        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|s| !s.trim().is_empty()),
            db_max_connections,
            rank_table_path: lookup("RANK_TABLE_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::Missing("DATABASE_URL"))
    }

    /// The configured rank table, or the built-in one.
    pub fn load_rank_table(&self) -> Result<RankTable, ConfigError> {
        match &self.rank_table_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::RankTable(format!("{}: {e}", path.display())))?;
                RankTable::from_json(&raw)
            }
            None => Ok(RankTable::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert!(cfg.database_url.is_none());
        assert!(matches!(
            cfg.require_database_url(),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
        assert_eq!(cfg.load_rank_table().unwrap().rank_names().count(), 8);
    }

    #[test]
    fn rejects_bad_pool_size() {
        let err = Config::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "zero")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "DB_MAX_CONNECTIONS", .. }));
        let err = Config::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn reads_values() {
        let cfg = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/underworld"),
            ("DB_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        assert_eq!(cfg.db_max_connections, 12);
        assert_eq!(
            cfg.require_database_url().unwrap(),
            "postgres://localhost/underworld"
        );
    }
}
