//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::utilities::SortType;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of demo events to generate
    pub event_count: usize,

    /// Itinerary sort order
    pub sort: SortType,

    /// Seed for reproducible demo data
    pub random_seed: Option<u64>,

    /// JSON catalog to use instead of the built-in one
    pub catalog_path: Option<PathBuf>,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event_count: 4,
            sort: SortType::default(),
            random_seed: None,
            catalog_path: None,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let event_count = match lookup("TRIP_EVENT_COUNT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TRIP_EVENT_COUNT"))?,
            None => defaults.event_count,
        };

        let sort = match lookup("TRIP_SORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TRIP_SORT"))?,
            None => defaults.sort,
        };

        let random_seed = lookup("TRIP_RANDOM_SEED")
            .map(|value| value.parse())
            .transpose()
            .map_err(|_| ConfigError::InvalidValue("TRIP_RANDOM_SEED"))?;

        let catalog_path = lookup("TRIP_CATALOG_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);

        Ok(Self {
            event_count,
            sort,
            random_seed,
            catalog_path,
            environment,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
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
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.event_count, 4);
        assert_eq!(config.sort, SortType::Day);
        assert!(config.random_seed.is_none());
        assert!(config.catalog_path.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_values_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("TRIP_EVENT_COUNT", "10"),
            ("TRIP_SORT", "price"),
            ("TRIP_RANDOM_SEED", "42"),
            ("TRIP_CATALOG_PATH", "data/catalog.json"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.event_count, 10);
        assert_eq!(config.sort, SortType::Price);
        assert_eq!(config.random_seed, Some(42));
        assert_eq!(config.catalog_path, Some(PathBuf::from("data/catalog.json")));
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_values() {
        let result = Config::from_lookup(lookup(&[("TRIP_SORT", "offers")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue("TRIP_SORT"))));

        let result = Config::from_lookup(lookup(&[("TRIP_EVENT_COUNT", "-1")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue("TRIP_EVENT_COUNT"))));
    }
}
