//! Weather observation and forecast models
//!
//! Parsed from provider documents with every field optional. Temperatures
//! are normalized to Celsius here, before any aggregation sees them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{integer_at, lookup, number_at, number_or, text_at};
use crate::units::to_celsius;

/// One 3-hour forecast sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Epoch seconds, UTC
    pub dt: i64,
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub wind_speed_mps: f64,
    /// Probability of precipitation (0-1)
    pub pop: f64,
    pub rain_3h_mm: f64,
    pub rain_1h_mm: f64,
}

impl ForecastSample {
    /// Parse one entry of the provider's forecast list
    ///
    /// Entries without an integer `dt` cannot be placed in time and are rejected.
    pub fn from_document(item: &Value) -> Option<Self> {
        let dt = integer_at(item, &["dt"])?;
        Some(Self {
            dt,
            temperature_celsius: to_celsius(number_at(item, &["main", "temp"])),
            humidity_percent: number_at(item, &["main", "humidity"]),
            wind_speed_mps: number_or(item, &["wind", "speed"], 0.0),
            pop: number_or(item, &["pop"], 0.0),
            rain_3h_mm: number_or(item, &["rain", "3h"], 0.0),
            rain_1h_mm: number_or(item, &["rain", "1h"], 0.0),
        })
    }

    /// Precipitation for the interval; 3-hour accumulation wins unless zero
    pub fn precipitation_mm(&self) -> f64 {
        if self.rain_3h_mm != 0.0 {
            self.rain_3h_mm
        } else {
            self.rain_1h_mm
        }
    }
}

/// A parsed forecast document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastDocument {
    pub city_name: Option<String>,
    /// Fixed offset from UTC for the location, no daylight saving
    pub timezone_offset_seconds: i64,
    pub samples: Vec<ForecastSample>,
}

impl ForecastDocument {
    pub fn from_document(doc: &Value) -> Self {
        let samples = lookup(doc, &["list"])
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(ForecastSample::from_document).collect())
            .unwrap_or_default();

        Self {
            city_name: text_at(doc, &["city", "name"]).map(str::to_string),
            timezone_offset_seconds: number_or(doc, &["city", "timezone"], 0.0) as i64,
            samples,
        }
    }
}

/// Current conditions snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: i32,
    pub wind_speed_mps: f64,
    pub rain_1h_mm: f64,
}

impl CurrentConditions {
    pub fn from_document(doc: &Value) -> Self {
        Self {
            temperature_celsius: to_celsius(number_at(doc, &["main", "temp"])),
            humidity_percent: number_or(doc, &["main", "humidity"], 0.0) as i32,
            wind_speed_mps: number_or(doc, &["wind", "speed"], 0.0),
            rain_1h_mm: number_or(doc, &["rain", "1h"], 0.0),
        }
    }
}
