//! Unit normalization for provider readings
//!
//! The provider does not tag temperature units, so readings above
//! [`KELVIN_THRESHOLD`] are treated as Kelvin. This assumes no outdoor
//! Celsius reading exceeds 200; a Fahrenheit feed would slip through
//! unconverted.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Readings strictly above this are interpreted as Kelvin
pub const KELVIN_THRESHOLD: f64 = 200.0;

/// Offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.15;

/// Normalize an ambiguous temperature reading to Celsius
pub fn to_celsius(value: Option<f64>) -> Option<f64> {
    value.map(|t| if t > KELVIN_THRESHOLD { t - KELVIN_OFFSET } else { t })
}

/// Coerce a JSON value into a number, never failing
///
/// Numbers and numeric strings are accepted. Anything else yields `default`.
pub fn coerce_number(value: &Value, default: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(default),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(default),
        _ => default,
    }
}

/// Round to `places` decimals, half to even on the exact binary value
///
/// A float such as 2.675 is stored slightly below the tie and rounds to 2.67.
pub fn round_to(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
