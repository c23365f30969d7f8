//! Advisory payload assembly
//!
//! The single composition seam: normalizes both provider documents, runs
//! the window aggregator, bucketizer and rule engine, and fills the label.
//! Performs no I/O.

use chrono::Utc;
use serde_json::Value;

use crate::aggregation::summarize_window;
use crate::daily::{chart_series, daily_series, DEFAULT_DAYS};
use crate::models::{AdvisoryPayload, ChartCity, CurrentConditions, ForecastChart, ForecastDocument, WeatherSummary};
use crate::rules::evaluate_advisories;
use crate::types::{resolve_label, Location};

/// Build the payload evaluated against the current wall clock
pub fn generate_advisory_payload(
    lat: f64,
    lon: f64,
    crop: &str,
    current_weather: &Value,
    forecast_weather: &Value,
    label: Option<&str>,
) -> AdvisoryPayload {
    generate_advisory_payload_at(
        lat,
        lon,
        crop,
        current_weather,
        forecast_weather,
        label,
        Utc::now().timestamp(),
    )
}

/// Build the payload with an explicit evaluation instant (epoch seconds)
pub fn generate_advisory_payload_at(
    lat: f64,
    lon: f64,
    crop: &str,
    current_weather: &Value,
    forecast_weather: &Value,
    label: Option<&str>,
    now: i64,
) -> AdvisoryPayload {
    let current = CurrentConditions::from_document(current_weather);
    let forecast = ForecastDocument::from_document(forecast_weather);

    let window = summarize_window(&forecast.samples, now);
    let daily = daily_series(&forecast.samples, forecast.timezone_offset_seconds, DEFAULT_DAYS);
    let advisories = evaluate_advisories(&current, &window, crop);

    AdvisoryPayload {
        location: Location::new(lat, lon, resolve_label(label, lat, lon)),
        crop: crop.to_string(),
        weather: WeatherSummary {
            current_temp: current.temperature_celsius,
            current_humidity: current.humidity_percent,
            current_wind: current.wind_speed_mps,
            current_rain_mm_1h: current.rain_1h_mm,
            daily,
        },
        advisories,
    }
}

/// Build the chart view of a forecast document
pub fn build_forecast_chart(forecast_weather: &Value) -> ForecastChart {
    let forecast = ForecastDocument::from_document(forecast_weather);
    ForecastChart {
        daily: chart_series(&forecast.samples, forecast.timezone_offset_seconds, DEFAULT_DAYS),
        city: ChartCity {
            name: forecast.city_name,
            timezone: forecast.timezone_offset_seconds,
        },
    }
}
