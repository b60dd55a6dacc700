//! Health Cache - expiring in-memory caches for health tracking data
//!
//! Provides a generic TTL cache with lazy eviction and a background sweep,
//! per-domain cache instances, and cached lookups served over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tasks;

pub use api::AppState;
pub use cache::{DomainCaches, ExpiringCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use services::{HealthDataSource, HealthService, StaticDataSource};
