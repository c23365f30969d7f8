//! WebAssembly module for the Crop Advisory Platform
//!
//! Lets a web client run the advisory pipeline against provider documents it
//! already holds:
//! - Payload assembly (normalization, 48h window, daily series, rules)
//! - Temperature normalization
//! - Coordinate labels and input checks
//!
//! Documents cross the boundary as JSON strings.

use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Assemble the advisory payload and return it as a JSON string
///
/// `now` is epoch seconds; the browser clock is used when omitted.
#[wasm_bindgen]
pub fn generate_advisory_payload(
    lat: f64,
    lon: f64,
    crop: &str,
    current_json: &str,
    forecast_json: &str,
    label: Option<String>,
    now: Option<f64>,
) -> Result<String, JsValue> {
    let now = now.unwrap_or_else(|| js_sys::Date::now() / 1000.0) as i64;
    payload_json(lat, lon, crop, current_json, forecast_json, label.as_deref(), now).map_err(|e| {
        web_sys::console::warn_1(&JsValue::from_str(&e));
        JsValue::from_str(&e)
    })
}

/// Normalize a temperature reading to Celsius
#[wasm_bindgen]
pub fn to_celsius(value: Option<f64>) -> Option<f64> {
    shared::to_celsius(value)
}

/// Coordinate label used when no place name is known
#[wasm_bindgen]
pub fn format_location_label(lat: f64, lon: f64) -> String {
    shared::format_coordinates(lat, lon)
}

/// Daily buckets for a forecast document, as a JSON array string
#[wasm_bindgen]
pub fn daily_series(forecast_json: &str, max_days: usize) -> Result<String, JsValue> {
    daily_json(forecast_json, max_days).map_err(|e| JsValue::from_str(&e))
}

/// Check a coordinate pair before querying
#[wasm_bindgen]
pub fn validate_coordinates(lat: f64, lon: f64) -> bool {
    shared::validate_latitude(lat).is_ok() && shared::validate_longitude(lon).is_ok()
}

/// Check a crop identifier before querying
#[wasm_bindgen]
pub fn validate_crop(crop: &str) -> bool {
    shared::validate_crop(crop).is_ok()
}

fn parse_document(json: &str, what: &str) -> Result<Value, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn payload_json(
    lat: f64,
    lon: f64,
    crop: &str,
    current_json: &str,
    forecast_json: &str,
    label: Option<&str>,
    now: i64,
) -> Result<String, String> {
    let current = parse_document(current_json, "current weather")?;
    let forecast = parse_document(forecast_json, "forecast")?;
    let payload = shared::generate_advisory_payload_at(lat, lon, crop, &current, &forecast, label, now);
    serde_json::to_string(&payload).map_err(|e| e.to_string())
}

fn daily_json(forecast_json: &str, max_days: usize) -> Result<String, String> {
    let forecast = shared::ForecastDocument::from_document(&parse_document(forecast_json, "forecast")?);
    let daily = shared::daily_series(&forecast.samples, forecast.timezone_offset_seconds, max_days);
    serde_json::to_string(&daily).map_err(|e| e.to_string())
}
