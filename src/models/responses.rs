//! Response DTOs for the health cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheDomain, CacheStats, DomainStats};

/// Statistics for one cache, with the derived hit rate.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expired: u64,
    pub swept: u64,
    pub total_entries: usize,
    /// Cache hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            swept: stats.swept,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub weather: CacheStatsResponse,
    pub food: CacheStatsResponse,
    pub education: CacheStatsResponse,
    pub global_health: CacheStatsResponse,
}

impl From<DomainStats> for StatsResponse {
    fn from(stats: DomainStats) -> Self {
        Self {
            weather: stats.weather.into(),
            food: stats.food.into(),
            education: stats.education.into(),
            global_health: stats.global_health.into(),
        }
    }
}

/// Response body for DELETE /cache and DELETE /cache/:domain
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Domains that were cleared
    pub cleared: Vec<String>,
}

impl ClearResponse {
    pub fn new(domains: &[CacheDomain]) -> Self {
        let cleared: Vec<String> = domains.iter().map(|d| d.to_string()).collect();
        Self {
            message: format!("Cleared {} cache(s)", cleared.len()),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
