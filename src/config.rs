//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::time::Duration;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// TTLs and the cleanup interval are in seconds.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL for weather and activity suggestions
    pub weather_ttl: u64,
    /// TTL for food database lookups
    pub food_ttl: u64,
    /// TTL for health education content
    pub education_ttl: u64,
    /// TTL for global health statistics
    pub global_health_ttl: u64,
    /// Background cleanup task interval
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `WEATHER_TTL` - Weather TTL (default: 1800, 30 minutes)
    /// - `FOOD_TTL` - Food lookup TTL (default: 86400, 24 hours)
    /// - `EDUCATION_TTL` - Education content TTL (default: 604800, 7 days)
    /// - `GLOBAL_HEALTH_TTL` - Global statistics TTL (default: 86400, 24 hours)
    /// - `CLEANUP_INTERVAL` - Sweep frequency (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            weather_ttl: env_or("WEATHER_TTL", defaults.weather_ttl),
            food_ttl: env_or("FOOD_TTL", defaults.food_ttl),
            education_ttl: env_or("EDUCATION_TTL", defaults.education_ttl),
            global_health_ttl: env_or("GLOBAL_HEALTH_TTL", defaults.global_health_ttl),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            weather_ttl: 30 * 60,
            food_ttl: 24 * 60 * 60,
            education_ttl: 7 * 24 * 60 * 60,
            global_health_ttl: 24 * 60 * 60,
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    // Tests that touch the domain TTL variables must not interleave
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.weather_ttl, 1800);
        assert_eq!(config.food_ttl, 86_400);
        assert_eq!(config.education_ttl, 604_800);
        assert_eq!(config.global_health_ttl, 86_400);
        assert_eq!(config.cleanup_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_config_from_env_defaults() {
        let _guard = ENV_LOCK.lock();
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("WEATHER_TTL");
        env::remove_var("FOOD_TTL");
        env::remove_var("EDUCATION_TTL");
        env::remove_var("GLOBAL_HEALTH_TTL");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.weather_ttl, 1800);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env_overrides() {
        let _guard = ENV_LOCK.lock();
        env::set_var("WEATHER_TTL", "600");
        env::set_var("CLEANUP_INTERVAL", "5");

        let config = Config::from_env();
        env::remove_var("WEATHER_TTL");
        env::remove_var("CLEANUP_INTERVAL");

        assert_eq!(config.weather_ttl, 600);
        assert_eq!(config.cleanup_interval(), Duration::from_secs(5));
        assert_eq!(config.food_ttl, 86_400);
    }

    #[test]
    fn test_env_or_ignores_unparseable_values() {
        env::set_var("HEALTH_CACHE_TEST_BAD_NUMBER", "soon");
        assert_eq!(env_or("HEALTH_CACHE_TEST_BAD_NUMBER", 42u64), 42);
        env::remove_var("HEALTH_CACHE_TEST_BAD_NUMBER");
    }
}
