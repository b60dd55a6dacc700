//! Static payloads
//!
//! Activity suggestions derived from weather, and the fallback data served
//! when an upstream lookup fails.

use std::collections::BTreeMap;

use crate::models::{
    Activity, ActivityReport, Comparison, EducationContent, FoodItem, IndicatorValue,
    Intensity, NutritionInfo, Weather,
};

/// Default location used when coordinates are not supplied (New York).
pub const DEFAULT_LATITUDE: f64 = 40.7128;
pub const DEFAULT_LONGITUDE: f64 = -74.0060;

/// Swimming is only suggested above this temperature (Celsius).
const SWIMMING_MIN_TEMPERATURE: f64 = 20.0;

/// Builds activity suggestions for the given weather.
pub fn suggest_activities(weather: Weather) -> ActivityReport {
    let swimming_ok = weather.temperature > SWIMMING_MIN_TEMPERATURE;
    let activities = vec![
        Activity::new("Morning Walk", Intensity::Light, 30, 150, true, false),
        Activity::new("Yoga Session", Intensity::Moderate, 45, 200, true, true),
        Activity::new("Swimming", Intensity::High, 60, 400, swimming_ok, false),
    ];

    ActivityReport {
        weather,
        activities,
    }
}

/// Indoor-only report served when the weather lookup fails.
pub fn fallback_activity_report() -> ActivityReport {
    ActivityReport {
        weather: Weather {
            temperature: 20.0,
            condition: "clear".to_string(),
            description: "Clear sky".to_string(),
        },
        activities: vec![
            Activity::new("Indoor Walking", Intensity::Light, 30, 150, true, true),
            Activity::new("Home Workout", Intensity::Moderate, 45, 200, true, true),
        ],
    }
}

/// Zeroed indicator served for unknown indicators or failed lookups.
pub fn fallback_indicator() -> IndicatorValue {
    IndicatorValue {
        value: 0.0,
        comparison: Some(Comparison {
            global_average: 0.0,
            percent_difference: 0.0,
        }),
    }
}

/// Content returned for topics without dedicated material.
pub fn general_education_content() -> EducationContent {
    EducationContent {
        title: "Health Information".to_string(),
        summary: "General health information and guidelines.".to_string(),
        sections: BTreeMap::from([(
            "recommendations".to_string(),
            strings(&[
                "Maintain a balanced diet",
                "Stay physically active",
                "Get adequate sleep",
                "Manage stress levels",
            ]),
        )]),
        source: "MedlinePlus".to_string(),
        url: "https://medlineplus.gov".to_string(),
    }
}

/// Built-in food table, per 100g unless noted.
pub fn default_foods() -> Vec<FoodItem> {
    vec![
        food("oatmeal", "Oatmeal", "1 cup cooked", 158.0, 27.0, 6.0, 3.2, 4.0, Some(55)),
        food("brown-rice", "Brown Rice", "100g", 112.0, 23.5, 2.3, 0.8, 1.8, Some(68)),
        food("apple", "Apple", "1 medium", 95.0, 25.0, 0.5, 0.3, 4.4, Some(36)),
        food("lentils", "Lentils", "100g", 116.0, 20.0, 9.0, 0.4, 7.9, Some(32)),
        food("salmon", "Salmon", "100g", 208.0, 0.0, 20.0, 13.0, 0.0, None),
        food("broccoli", "Broccoli", "100g", 34.0, 6.6, 2.8, 0.4, 2.6, Some(15)),
        food("greek-yogurt", "Greek Yogurt", "170g", 100.0, 6.0, 17.0, 0.7, 0.0, Some(11)),
    ]
}

/// Default foods whose name contains `query`, or every default when none do.
pub fn fallback_foods(query: &str) -> Vec<FoodItem> {
    let all = default_foods();
    let matching: Vec<FoodItem> = all
        .iter()
        .filter(|item| item.name.to_lowercase().contains(query))
        .cloned()
        .collect();

    if matching.is_empty() {
        all
    } else {
        matching
    }
}

#[allow(clippy::too_many_arguments)]
fn food(
    id: &str,
    name: &str,
    portion: &str,
    calories: f64,
    carbs: f64,
    protein: f64,
    fat: f64,
    fiber: f64,
    glycemic_index: Option<u32>,
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        brand: None,
        nutrition_info: NutritionInfo {
            name: name.to_string(),
            portion: portion.to_string(),
            calories,
            carbs,
            protein,
            fat,
            fiber,
            glycemic_index,
        },
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
