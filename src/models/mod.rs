//! Data models
//!
//! Health data payloads plus the DTOs used for HTTP requests and responses.

pub mod health;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use health::{
    Activity, ActivityReport, Comparison, EducationContent, FoodItem, IndicatorValue,
    Intensity, NutritionInfo, Weather,
};
pub use requests::{ActivityQuery, FoodQuery, GlobalHealthQuery};
pub use responses::{ClearResponse, ErrorResponse, HealthResponse, StatsResponse};
