//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::{CacheDomain, DomainCaches};
use crate::error::{CacheError, Result};
use crate::models::{
    ActivityQuery, ActivityReport, ClearResponse, EducationContent, FoodItem, FoodQuery,
    GlobalHealthQuery, HealthResponse, IndicatorValue, StatsResponse,
};
use crate::services::{HealthDataSource, HealthService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached lookups, including the domain caches they use
    pub service: HealthService,
}

impl AppState {
    /// Creates a new AppState around the given caches and data source.
    pub fn new(caches: DomainCaches, source: Arc<dyn HealthDataSource>) -> Self {
        Self {
            service: HealthService::new(caches, source),
        }
    }
}

/// Handler for GET /activities
///
/// Returns weather-based activity suggestions.
pub async fn activities_handler(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ActivityReport>> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let report = state
        .service
        .activity_suggestions(query.lat, query.lon)
        .await;
    Ok(Json(report))
}

/// Handler for GET /global-health/:indicator
pub async fn global_health_handler(
    State(state): State<AppState>,
    Path(indicator): Path<String>,
    Query(query): Query<GlobalHealthQuery>,
) -> Json<IndicatorValue> {
    let value = state
        .service
        .global_health(&indicator, query.country.as_deref())
        .await;
    Json(value)
}

/// Handler for GET /education/:topic
pub async fn education_handler(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> Result<Json<EducationContent>> {
    state
        .service
        .education_content(&topic)
        .await
        .map(Json)
        .ok_or_else(|| CacheError::NotFound(format!("No education content for '{}'", topic)))
}

/// Handler for GET /foods
pub async fn foods_handler(
    State(state): State<AppState>,
    Query(query): Query<FoodQuery>,
) -> Result<Json<Vec<FoodItem>>> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let items = state.service.food_search(&query.query).await?;
    Ok(Json(items))
}

/// Handler for GET /stats
///
/// Returns statistics for every domain cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.caches().stats().into())
}

/// Handler for DELETE /cache/:domain
pub async fn clear_domain_handler(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<ClearResponse>> {
    let domain: CacheDomain = domain.parse()?;
    state.service.caches().clear(domain);

    Ok(Json(ClearResponse::new(&[domain])))
}

/// Handler for DELETE /cache
pub async fn clear_all_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.service.caches().clear_all();
    Json(ClearResponse::new(&CacheDomain::ALL))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::StaticDataSource;

    fn state() -> AppState {
        let caches = DomainCaches::from_config(&Config::default()).unwrap();
        AppState::new(caches, Arc::new(StaticDataSource))
    }

    #[tokio::test]
    async fn test_activities_handler() {
        let state = state();

        let response = activities_handler(State(state.clone()), Query(ActivityQuery::default()))
            .await
            .unwrap();

        assert_eq!(response.weather.temperature, 22.0);
        assert_eq!(state.service.caches().weather.len(), 1);
    }

    #[tokio::test]
    async fn test_activities_handler_invalid_coordinates() {
        let query = ActivityQuery {
            lat: Some(120.0),
            lon: Some(0.0),
        };

        let result = activities_handler(State(state()), Query(query)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_education_handler() {
        let response = education_handler(State(state()), Path("nutrition".to_string()))
            .await
            .unwrap();
        assert_eq!(response.title, "Healthy Eating Guidelines");
    }

    #[tokio::test]
    async fn test_clear_domain_handler_unknown() {
        let result = clear_domain_handler(State(state()), Path("tides".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_clear_all_handler() {
        let state = state();
        let foods = foods_handler(
            State(state.clone()),
            Query(FoodQuery {
                query: "salmon".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(!foods.is_empty());
        assert_eq!(state.service.caches().food.len(), 1);

        let response = clear_all_handler(State(state.clone())).await;

        assert_eq!(response.cleared.len(), 4);
        assert!(state.service.caches().food.is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(state())).await;
        assert_eq!(response.weather.hits, 0);
        assert_eq!(response.food.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
