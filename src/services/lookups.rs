//! Cached health lookups
//!
//! Every lookup follows the same shape: build a key, try the domain cache,
//! and on a miss ask the upstream source and cache what it returns. Fallback
//! payloads produced after an upstream failure are returned but never cached.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::DomainCaches;
use crate::error::{CacheError, Result};
use crate::models::{ActivityReport, EducationContent, FoodItem, IndicatorValue};
use crate::services::fallback::{
    fallback_activity_report, fallback_foods, fallback_indicator, general_education_content,
    suggest_activities, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
};
use crate::services::HealthDataSource;

/// Region used when a global-health query names none.
pub const DEFAULT_REGION: &str = "us";

/// Maximum number of foods returned by a search.
pub const MAX_FOOD_RESULTS: usize = 10;

// == Cache Keys ==
/// Joins `parts` under `prefix` with `:`, escaping `:` and `\` inside parts
/// so distinct inputs never share a key.
pub fn cache_key(prefix: &str, parts: &[&str]) -> String {
    let mut key = prefix.to_string();
    for part in parts {
        key.push(':');
        for ch in part.chars() {
            if ch == ':' || ch == '\\' {
                key.push('\\');
            }
            key.push(ch);
        }
    }
    key
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

// == Health Service ==
/// Cached access to weather, global health, education and food data.
#[derive(Clone)]
pub struct HealthService {
    caches: DomainCaches,
    source: Arc<dyn HealthDataSource>,
}

impl HealthService {
    pub fn new(caches: DomainCaches, source: Arc<dyn HealthDataSource>) -> Self {
        Self { caches, source }
    }

    pub fn caches(&self) -> &DomainCaches {
        &self.caches
    }

    // == Activity Suggestions ==
    /// Weather-based activity suggestions.
    ///
    /// Both coordinates default to New York unless both are given. A failed
    /// weather lookup yields an indoor-only fallback report.
    pub async fn activity_suggestions(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> ActivityReport {
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => (DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
        };
        let key = cache_key(
            "weather",
            &[&latitude.to_string(), &longitude.to_string()],
        );

        if let Some(report) = self.caches.weather.get(&key) {
            debug!(key = %key, "Weather cache hit");
            return report;
        }
        debug!(key = %key, "Weather cache miss");

        match self.source.current_weather(latitude, longitude).await {
            Ok(weather) => {
                let report = suggest_activities(weather);
                self.caches.weather.set(key, report.clone());
                report
            }
            Err(e) => {
                warn!(error = %e, "Weather lookup failed, serving fallback suggestions");
                fallback_activity_report()
            }
        }
    }

    // == Global Health ==
    /// Value of a health indicator for a country (default `us`).
    ///
    /// Unknown indicators and failed lookups yield a zeroed value.
    pub async fn global_health(&self, indicator: &str, country: Option<&str>) -> IndicatorValue {
        let indicator = normalize(indicator);
        let country = country
            .map(normalize)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let key = cache_key("health", &[&indicator, &country]);

        if let Some(value) = self.caches.global_health.get(&key) {
            debug!(key = %key, "Global health cache hit");
            return value;
        }
        debug!(key = %key, "Global health cache miss");

        match self.source.indicator(&indicator, &country).await {
            Ok(Some(value)) => {
                self.caches.global_health.set(key, value.clone());
                value
            }
            Ok(None) => {
                warn!(indicator = %indicator, "Unknown health indicator, serving fallback");
                fallback_indicator()
            }
            Err(e) => {
                warn!(error = %e, "Global health lookup failed, serving fallback");
                fallback_indicator()
            }
        }
    }

    // == Education Content ==
    /// Educational content for a topic.
    ///
    /// Topics without dedicated material get general content. Returns `None`
    /// only when the upstream lookup fails.
    pub async fn education_content(&self, topic: &str) -> Option<EducationContent> {
        let topic = normalize(topic);
        let key = cache_key("education", &[&topic]);

        if let Some(content) = self.caches.education.get(&key) {
            debug!(key = %key, "Education cache hit");
            return Some(content);
        }
        debug!(key = %key, "Education cache miss");

        match self.source.education(&topic).await {
            Ok(content) => {
                let content = content.unwrap_or_else(general_education_content);
                self.caches.education.set(key, content.clone());
                Some(content)
            }
            Err(e) => {
                warn!(error = %e, topic = %topic, "Education lookup failed");
                None
            }
        }
    }

    // == Food Search ==
    /// Searches the food database.
    ///
    /// Results are de-duplicated by id and capped at [`MAX_FOOD_RESULTS`]. A
    /// failed lookup yields matching built-in foods.
    ///
    /// # Errors
    /// `InvalidRequest` if the query is blank.
    pub async fn food_search(&self, query: &str) -> Result<Vec<FoodItem>> {
        let query = normalize(query);
        if query.is_empty() {
            return Err(CacheError::InvalidRequest(
                "Food query cannot be empty".to_string(),
            ));
        }
        let key = cache_key("food", &[&query]);

        if let Some(items) = self.caches.food.get(&key) {
            debug!(key = %key, "Food cache hit");
            return Ok(items);
        }
        debug!(key = %key, "Food cache miss");

        match self.source.search_foods(&query).await {
            Ok(items) => {
                let mut seen = HashSet::new();
                let items: Vec<FoodItem> = items
                    .into_iter()
                    .filter(|item| seen.insert(item.id.clone()))
                    .take(MAX_FOOD_RESULTS)
                    .collect();
                self.caches.food.set(key, items.clone());
                Ok(items)
            }
            Err(e) => {
                warn!(error = %e, query = %query, "Food search failed, serving defaults");
                Ok(fallback_foods(&query))
            }
        }
    }
}
