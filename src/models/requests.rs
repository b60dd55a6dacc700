//! Request DTOs for the health cache API
//!
//! Query-string parameters accepted by the lookup endpoints.

use serde::Deserialize;

/// Query for GET /activities
///
/// Coordinates are optional; missing ones fall back to a default location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl ActivityQuery {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(lat) = self.lat {
            if !(-90.0..=90.0).contains(&lat) {
                return Some(format!("Latitude {} is out of range", lat));
            }
        }
        if let Some(lon) = self.lon {
            if !(-180.0..=180.0).contains(&lon) {
                return Some(format!("Longitude {} is out of range", lon));
            }
        }
        None
    }
}

/// Query for GET /global-health/:indicator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalHealthQuery {
    /// Country or region code, defaults to "us"
    pub country: Option<String>,
}

/// Query for GET /foods
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodQuery {
    #[serde(default)]
    pub query: String,
}

impl FoodQuery {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.query.trim().is_empty() {
            return Some("Food query cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_query_deserialize() {
        let query: ActivityQuery = serde_json::from_str(r#"{"lat": 40.7, "lon": -74.0}"#).unwrap();
        assert_eq!(query.lat, Some(40.7));
        assert_eq!(query.lon, Some(-74.0));
        assert!(query.validate().is_none());
    }

    #[test]
    fn test_activity_query_out_of_range() {
        let query = ActivityQuery {
            lat: Some(91.0),
            lon: None,
        };
        assert!(query.validate().is_some());

        let query = ActivityQuery {
            lat: None,
            lon: Some(-181.0),
        };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_food_query_empty() {
        let query: FoodQuery = serde_json::from_str("{}").unwrap();
        assert!(query.validate().is_some());

        let query = FoodQuery {
            query: "   ".to_string(),
        };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_food_query_valid() {
        let query = FoodQuery {
            query: "oatmeal".to_string(),
        };
        assert!(query.validate().is_none());
    }
}
