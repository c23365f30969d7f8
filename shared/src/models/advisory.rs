//! Advisory and response payload models

use serde::{Deserialize, Serialize};

use crate::types::Location;

/// Advisory severity tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Kinds of agronomic advisories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryType {
    Irrigation,
    FungalRisk,
    FrostRisk,
    WindCaution,
    HeatStress,
}

impl AdvisoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryType::Irrigation => "irrigation",
            AdvisoryType::FungalRisk => "fungal_risk",
            AdvisoryType::FrostRisk => "frost_risk",
            AdvisoryType::WindCaution => "wind_caution",
            AdvisoryType::HeatStress => "heat_stress",
        }
    }
}

impl std::fmt::Display for AdvisoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A triggered advisory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advisory {
    /// Short fingerprint of the rule and its numeric drivers
    pub id: String,
    #[serde(rename = "type")]
    pub advisory_type: AdvisoryType,
    pub severity: Severity,
    pub title: String,
    pub reason: String,
    pub action: String,
    pub tags: Vec<String>,
}

/// One local calendar day of forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    /// Earliest sample of the day, epoch seconds
    pub dt: i64,
    pub t_min: Option<f64>,
    pub t_max: Option<f64>,
    pub rain_mm: f64,
    pub pop: f64,
}

/// Current conditions plus the daily series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub current_temp: Option<f64>,
    pub current_humidity: i32,
    pub current_wind: f64,
    #[serde(rename = "currentRainMm1h")]
    pub current_rain_mm_1h: f64,
    pub daily: Vec<DailyBucket>,
}

/// Full advisory response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisoryPayload {
    pub location: Location,
    /// Opaque crop identifier
    pub crop: String,
    pub weather: WeatherSummary,
    pub advisories: Vec<Advisory>,
}

/// City metadata for the chart view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartCity {
    pub name: Option<String>,
    pub timezone: i64,
}

/// Daily series for the forecast chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastChart {
    pub city: ChartCity,
    pub daily: Vec<DailyBucket>,
}
