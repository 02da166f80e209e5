use std::env;

use chrono::Duration;

use crate::data::PLACES_DETAILS_URL;

/// Default cache lifetime for fetched reviews
pub const DEFAULT_CACHE_TTL_HOURS: u64 = 24;

/// Upper bound on the configured TTL (one century)
const MAX_CACHE_TTL_HOURS: u64 = 24 * 365 * 100;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Places API key. Validated when reviews are fetched, not at startup.
    pub places_api_key: Option<String>,
    /// Place identifier whose reviews are served.
    pub place_id: Option<String>,
    /// Place details endpoint (default: Google Places API)
    pub places_base_url: String,
    /// Review cache TTL in hours (default: 24)
    pub cache_ttl_hours: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GOOGLE_PLACES_API_KEY` - Places API key (required to serve reviews)
    /// - `GOOGLE_PLACE_ID` - Place identifier (required to serve reviews)
    /// - `GOOGLE_PLACES_BASE_URL` - Endpoint override
    /// - `REVIEWS_CACHE_TTL_HOURS` - Cache TTL in hours (default: 24)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            places_api_key: non_empty("GOOGLE_PLACES_API_KEY"),
            place_id: non_empty("GOOGLE_PLACE_ID"),
            places_base_url: non_empty("GOOGLE_PLACES_BASE_URL")
                .unwrap_or_else(|| PLACES_DETAILS_URL.to_string()),
            cache_ttl_hours: non_empty("REVIEWS_CACHE_TTL_HOURS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_HOURS),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::hours(self.cache_ttl_hours.min(MAX_CACHE_TTL_HOURS) as i64)
    }

    /// Names of required secrets that are not set.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.places_api_key.is_none() {
            missing.push("GOOGLE_PLACES_API_KEY");
        }
        if self.place_id.is_none() {
            missing.push("GOOGLE_PLACE_ID");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_cache_ttl_conversion() {
        let config = config_from(&[("REVIEWS_CACHE_TTL_HOURS", "6")]);
        assert_eq!(config.cache_ttl(), Duration::hours(6));
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert!(config.places_api_key.is_none());
        assert!(config.place_id.is_none());
        assert_eq!(config.places_base_url, PLACES_DETAILS_URL);
        assert_eq!(config.cache_ttl_hours, 24);
        assert_eq!(config.cache_ttl(), Duration::hours(24));
    }

    #[test]
    fn test_secrets_loaded() {
        let config = config_from(&[
            ("GOOGLE_PLACES_API_KEY", "key-123"),
            ("GOOGLE_PLACE_ID", "ChIJ-place"),
        ]);

        assert_eq!(config.places_api_key.as_deref(), Some("key-123"));
        assert_eq!(config.place_id.as_deref(), Some("ChIJ-place"));
        assert!(config.missing_secrets().is_empty());
    }

    #[test]
    fn test_blank_secrets_are_missing() {
        let config = config_from(&[("GOOGLE_PLACES_API_KEY", "  "), ("GOOGLE_PLACE_ID", "")]);

        assert_eq!(
            config.missing_secrets(),
            vec!["GOOGLE_PLACES_API_KEY", "GOOGLE_PLACE_ID"]
        );
    }

    #[test]
    fn test_invalid_ttl_falls_back_to_default() {
        let config = config_from(&[("REVIEWS_CACHE_TTL_HOURS", "soon")]);
        assert_eq!(config.cache_ttl_hours, DEFAULT_CACHE_TTL_HOURS);
    }
}
