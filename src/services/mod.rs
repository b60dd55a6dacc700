//! Services Module
//!
//! Cached lookups for health data and the upstream sources behind them.

pub mod fallback;
mod lookups;
mod source;

pub use lookups::{cache_key, HealthService, DEFAULT_REGION, MAX_FOOD_RESULTS};
pub use source::{HealthDataSource, StaticDataSource};
