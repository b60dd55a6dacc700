//! Upstream data sources
//!
//! The lookups in [`HealthService`](super::HealthService) call a
//! [`HealthDataSource`] on a cache miss. [`StaticDataSource`] serves built-in
//! data and is what the binary runs with.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Comparison, EducationContent, FoodItem, IndicatorValue, Weather};
use crate::services::fallback::{default_foods, strings};

/// Remote provider of health data.
#[async_trait]
pub trait HealthDataSource: Send + Sync {
    /// Current weather at the given coordinates.
    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<Weather>;

    /// Value of `indicator` for `region`, or the global value if the region
    /// has none. `Ok(None)` means the indicator is unknown.
    async fn indicator(&self, indicator: &str, region: &str) -> Result<Option<IndicatorValue>>;

    /// Content for `topic`. `Ok(None)` means no dedicated content exists.
    async fn education(&self, topic: &str) -> Result<Option<EducationContent>>;

    /// Foods matching `query`. May contain duplicates.
    async fn search_foods(&self, query: &str) -> Result<Vec<FoodItem>>;
}

/// In-process data source with fixed responses.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource;

#[async_trait]
impl HealthDataSource for StaticDataSource {
    async fn current_weather(&self, _latitude: f64, _longitude: f64) -> Result<Weather> {
        Ok(Weather {
            temperature: 22.0,
            condition: "clear".to_string(),
            description: "Clear sky".to_string(),
        })
    }

    async fn indicator(&self, indicator: &str, region: &str) -> Result<Option<IndicatorValue>> {
        // (regional value, regional comparison, global value)
        let (us_value, percent_difference, global_value) = match indicator {
            "diabetes_prevalence" => (10.5, 23.5, 8.5),
            "obesity_prevalence" => (36.2, 176.3, 13.1),
            _ => return Ok(None),
        };

        let value = match region {
            "us" => IndicatorValue {
                value: us_value,
                comparison: Some(Comparison {
                    global_average: global_value,
                    percent_difference,
                }),
            },
            _ => IndicatorValue {
                value: global_value,
                comparison: None,
            },
        };
        Ok(Some(value))
    }

    async fn education(&self, topic: &str) -> Result<Option<EducationContent>> {
        let content = match topic {
            "diabetes" => EducationContent {
                title: "Understanding Diabetes".to_string(),
                summary: "Learn about diabetes management, prevention, and lifestyle modifications."
                    .to_string(),
                sections: BTreeMap::from([
                    (
                        "symptoms".to_string(),
                        strings(&[
                            "Increased thirst and urination",
                            "Fatigue",
                            "Blurred vision",
                            "Slow healing of cuts and bruises",
                        ]),
                    ),
                    (
                        "management".to_string(),
                        strings(&[
                            "Regular blood glucose monitoring",
                            "Balanced diet with controlled carbohydrates",
                            "Regular physical activity",
                            "Medication adherence if prescribed",
                        ]),
                    ),
                ]),
                source: "MedlinePlus".to_string(),
                url: "https://medlineplus.gov/diabetes.html".to_string(),
            },
            "nutrition" => EducationContent {
                title: "Healthy Eating Guidelines".to_string(),
                summary: "Discover the principles of balanced nutrition and healthy eating habits."
                    .to_string(),
                sections: BTreeMap::from([
                    (
                        "guidelines".to_string(),
                        strings(&[
                            "Eat plenty of fruits and vegetables",
                            "Choose whole grains over refined grains",
                            "Include lean proteins in your diet",
                            "Limit added sugars and processed foods",
                        ]),
                    ),
                    (
                        "benefits".to_string(),
                        strings(&[
                            "Better blood sugar control",
                            "Weight management",
                            "Improved energy levels",
                            "Reduced risk of chronic diseases",
                        ]),
                    ),
                ]),
                source: "MedlinePlus".to_string(),
                url: "https://medlineplus.gov/nutrition.html".to_string(),
            },
            _ => return Ok(None),
        };
        Ok(Some(content))
    }

    async fn search_foods(&self, query: &str) -> Result<Vec<FoodItem>> {
        Ok(default_foods()
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(query))
            .collect())
    }
}
