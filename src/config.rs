use crate::errors::ServerError;
use std::net::SocketAddr;

/// A listing is undervalued when its ZDelta is at least this percentage of the list price.
pub const UNDERVALUED_PERCENT: i64 = 10;

/// Number of quantile bands the non-negative ZDeltas are split into (scores 2..=5).
pub const SCORE_BANDS: usize = 4;

/// Initial map view, roughly Loudoun / Fairfax County.
pub const MAP_CENTER: (f64, f64) = (39.0, -77.5);

pub const DEFAULT_DB_PATH: &str = "listings_v4.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file holding the listings table (DB_PATH)
    pub db_path: String,
    /// Listen address (BIND_ADDR)
    pub bind_addr: SocketAddr,
    /// Worker threads for the blocking server (MAX_WORKERS)
    pub max_workers: usize,
    /// EnvFilter directive (LOG_LEVEL)
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|_| ServerError::Config("BIND_ADDR must be a socket address".to_string()))?;

        let max_workers = match lookup("MAX_WORKERS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ServerError::Config("MAX_WORKERS must be a positive integer".to_string())
                })?,
            None => DEFAULT_MAX_WORKERS,
        };

        Ok(Self {
            db_path: lookup("DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            bind_addr,
            max_workers,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.db_path, DEFAULT_DB_PATH);
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.max_workers, DEFAULT_MAX_WORKERS);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("DB_PATH", "/tmp/other.db"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("MAX_WORKERS", "2"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(cfg.db_path, "/tmp/other.db");
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.max_workers, 2);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = Config::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn rejects_zero_workers() {
        let err = Config::from_lookup(lookup_from(&[("MAX_WORKERS", "0")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
