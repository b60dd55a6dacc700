//! Per-domain cache instances
//!
//! Each kind of health data gets its own [`ExpiringCache`] with a TTL that
//! matches how quickly the data goes stale.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::cache::{CacheStats, ExpiringCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{ActivityReport, EducationContent, FoodItem, IndicatorValue};

/// Identifies one of the domain caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheDomain {
    Weather,
    Food,
    Education,
    GlobalHealth,
}

impl CacheDomain {
    pub const ALL: [CacheDomain; 4] = [
        CacheDomain::Weather,
        CacheDomain::Food,
        CacheDomain::Education,
        CacheDomain::GlobalHealth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheDomain::Weather => "weather",
            CacheDomain::Food => "food",
            CacheDomain::Education => "education",
            CacheDomain::GlobalHealth => "global_health",
        }
    }
}

impl fmt::Display for CacheDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheDomain {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        CacheDomain::ALL
            .into_iter()
            .find(|domain| domain.as_str() == s)
            .ok_or_else(|| CacheError::NotFound(format!("Unknown cache domain: {}", s)))
    }
}

/// Stats snapshot for every domain cache.
#[derive(Debug, Clone, Serialize)]
pub struct DomainStats {
    pub weather: CacheStats,
    pub food: CacheStats,
    pub education: CacheStats,
    pub global_health: CacheStats,
}

// == Domain Caches ==
/// The four caches used by the health lookups.
///
/// Built once at startup and handed to whatever needs them; clones share
/// the same underlying caches.
#[derive(Debug, Clone)]
pub struct DomainCaches {
    pub weather: ExpiringCache<ActivityReport>,
    pub food: ExpiringCache<Vec<FoodItem>>,
    pub education: ExpiringCache<EducationContent>,
    pub global_health: ExpiringCache<IndicatorValue>,
}

impl DomainCaches {
    /// Builds the caches with TTLs taken from `config`.
    ///
    /// # Errors
    /// `InvalidArgument` if any configured TTL is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            weather: ExpiringCache::named(
                CacheDomain::Weather.as_str(),
                Duration::from_secs(config.weather_ttl),
            )?,
            food: ExpiringCache::named(
                CacheDomain::Food.as_str(),
                Duration::from_secs(config.food_ttl),
            )?,
            education: ExpiringCache::named(
                CacheDomain::Education.as_str(),
                Duration::from_secs(config.education_ttl),
            )?,
            global_health: ExpiringCache::named(
                CacheDomain::GlobalHealth.as_str(),
                Duration::from_secs(config.global_health_ttl),
            )?,
        })
    }

    /// Starts the background sweep on every cache.
    pub fn start_cleanup_all(&self, interval: Duration) -> Result<()> {
        self.weather.start_cleanup(interval)?;
        self.food.start_cleanup(interval)?;
        self.education.start_cleanup(interval)?;
        self.global_health.start_cleanup(interval)?;
        Ok(())
    }

    pub fn stop_cleanup_all(&self) {
        self.weather.stop_cleanup();
        self.food.stop_cleanup();
        self.education.stop_cleanup();
        self.global_health.stop_cleanup();
    }

    /// Empties a single domain cache.
    pub fn clear(&self, domain: CacheDomain) {
        match domain {
            CacheDomain::Weather => self.weather.clear(),
            CacheDomain::Food => self.food.clear(),
            CacheDomain::Education => self.education.clear(),
            CacheDomain::GlobalHealth => self.global_health.clear(),
        }
    }

    pub fn clear_all(&self) {
        for domain in CacheDomain::ALL {
            self.clear(domain);
        }
    }

    pub fn stats(&self) -> DomainStats {
        DomainStats {
            weather: self.weather.stats(),
            food: self.food.stats(),
            education: self.education.stats(),
            global_health: self.global_health.stats(),
        }
    }
}
