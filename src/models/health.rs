//! Health data payloads
//!
//! Values produced by the data sources, stored in the domain caches and
//! returned by the HTTP API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// == Weather ==
/// Current weather at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Temperature in Celsius
    pub temperature: f64,
    pub condition: String,
    pub description: String,
}

/// Effort level of a suggested activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Light,
    Moderate,
    High,
}

/// A suggested physical activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub intensity: Intensity,
    /// Duration in minutes
    pub duration: u32,
    /// Estimated kilocalories burned
    pub calories: u32,
    /// Whether the current weather suits this activity
    pub suitable: bool,
    pub indoor: bool,
}

impl Activity {
    pub fn new(
        name: &str,
        intensity: Intensity,
        duration: u32,
        calories: u32,
        suitable: bool,
        indoor: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            intensity,
            duration,
            calories,
            suitable,
            indoor,
        }
    }
}

/// Weather together with the activities suggested for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityReport {
    pub weather: Weather,
    pub activities: Vec<Activity>,
}

// == Global Health ==
/// How a regional value compares to the global average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub global_average: f64,
    pub percent_difference: f64,
}

/// Value of a health indicator (e.g. diabetes prevalence) for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    /// Prevalence in percent
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

// == Education ==
/// Educational content for a health topic.
///
/// `sections` holds the topic-specific lists (symptoms, management,
/// guidelines, ...) and is flattened into the JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationContent {
    pub title: String,
    pub summary: String,
    #[serde(flatten)]
    pub sections: BTreeMap<String, Vec<String>>,
    pub source: String,
    pub url: String,
}

// == Food ==
/// Nutrition facts for one portion of a food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    pub name: String,
    pub portion: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glycemic_index: Option<u32>,
}

/// A food database search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub nutrition_info: NutritionInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_serializes_camel_case() {
        let value = IndicatorValue {
            value: 10.5,
            comparison: Some(Comparison {
                global_average: 8.5,
                percent_difference: 23.5,
            }),
        };

        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["comparison"]["globalAverage"], 8.5);
        assert_eq!(json["comparison"]["percentDifference"], 23.5);
    }

    #[test]
    fn test_indicator_without_comparison_omits_field() {
        let value = IndicatorValue {
            value: 8.5,
            comparison: None,
        };

        let json = serde_json::to_string(&value).unwrap();
        assert!(!json.contains("comparison"));
    }

    #[test]
    fn test_education_sections_are_flattened() {
        let content = EducationContent {
            title: "Understanding Diabetes".to_string(),
            summary: "Learn about diabetes.".to_string(),
            sections: BTreeMap::from([(
                "symptoms".to_string(),
                vec!["Fatigue".to_string()],
            )]),
            source: "MedlinePlus".to_string(),
            url: "https://medlineplus.gov/diabetes.html".to_string(),
        };

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["symptoms"][0], "Fatigue");
        assert!(json.get("sections").is_none());
    }

    #[test]
    fn test_intensity_serializes_as_name() {
        let json = serde_json::to_string(&Intensity::Moderate).unwrap();
        assert_eq!(json, "\"Moderate\"");
    }
}
