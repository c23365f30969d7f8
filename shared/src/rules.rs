//! Advisory rule engine
//!
//! Five independent threshold rules evaluated against the 48-hour window and
//! the current snapshot. Every rule is checked on every call and any number
//! may fire together; output order is the evaluation order below.
//!
//! Rules that read a temperature extreme do not fire when the window had no
//! temperature samples.

use sha2::{Digest, Sha256};

use crate::aggregation::WindowSummary;
use crate::models::{Advisory, AdvisoryType, CurrentConditions, Severity};

/// Irrigation: window maximum at or above this (°C)
pub const IRRIGATION_MIN_TEMP: f64 = 28.0;
/// Irrigation: dry if total rain below this (mm)...
pub const IRRIGATION_DRY_RAIN_MM: f64 = 2.0;
/// ...or peak POP below this
pub const IRRIGATION_DRY_POP: f64 = 0.3;
pub const IRRIGATION_HIGH_TEMP: f64 = 32.0;
pub const IRRIGATION_HIGH_MAX_HUMIDITY: i32 = 40;

pub const FUNGAL_RAIN_MM: f64 = 5.0;
pub const FUNGAL_POP: f64 = 0.6;
pub const FUNGAL_MIN_HUMIDITY: i32 = 85;
pub const FUNGAL_HIGH_RAIN_MM: f64 = 10.0;
pub const FUNGAL_MEDIUM_POP: f64 = 0.8;

pub const FROST_MAX_TEMP: f64 = 2.0;
pub const FROST_HIGH_TEMP: f64 = 0.0;

/// Wind speeds in m/s
pub const WIND_CAUTION_MPS: f64 = 5.0;
pub const WIND_HIGH_MPS: f64 = 7.0;

pub const HEAT_STRESS_TEMP: f64 = 30.0;
pub const HEAT_HIGH_TEMP: f64 = 35.0;

/// Length of advisory fingerprints
pub const FINGERPRINT_LEN: usize = 8;

/// Short stable identifier for a rule and the values that triggered it
///
/// Not collision resistant at this length; only reproducibility matters.
pub fn fingerprint(seed: &str) -> String {
    let digest = Sha256::digest(seed.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(FINGERPRINT_LEN);
    id
}

/// Seed rendering of a driver value; floats keep their fractional part (`32.0`)
fn seed_number(value: f64) -> String {
    format!("{:?}", value)
}

/// Evaluate all rules
///
/// `crop` is accepted for crop-specific thresholds; no current rule reads it.
pub fn evaluate_advisories(current: &CurrentConditions, window: &WindowSummary, _crop: &str) -> Vec<Advisory> {
    let humidity = current.humidity_percent;

    [
        irrigation_rule(window, humidity),
        fungal_rule(window, humidity),
        frost_rule(window),
        wind_rule(window),
        heat_rule(window),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn irrigation_rule(window: &WindowSummary, humidity: i32) -> Option<Advisory> {
    let t_max = window.t_max.filter(|t| *t >= IRRIGATION_MIN_TEMP)?;
    let dry = window.rain_total < IRRIGATION_DRY_RAIN_MM || window.pop_max < IRRIGATION_DRY_POP;
    if !dry {
        return None;
    }

    let severity = if t_max >= IRRIGATION_HIGH_TEMP && humidity <= IRRIGATION_HIGH_MAX_HUMIDITY {
        Severity::High
    } else {
        Severity::Medium
    };

    Some(build(
        AdvisoryType::Irrigation,
        format!("irrigation{}{}{}", seed_number(t_max), seed_number(window.rain_total), humidity),
        severity,
        "Irrigation advisable",
        format!(
            "Hot & dry window (max {:.0}°C; rain next 48h ≈ {:.0} mm).",
            t_max, window.rain_total
        ),
        "Irrigate early; check soil moisture and avoid runoff.",
        &["heat", "water"],
    ))
}

fn fungal_rule(window: &WindowSummary, humidity: i32) -> Option<Advisory> {
    let wet = window.rain_total >= FUNGAL_RAIN_MM || window.pop_max >= FUNGAL_POP;
    if !wet || humidity < FUNGAL_MIN_HUMIDITY {
        return None;
    }

    let severity = if window.rain_total >= FUNGAL_HIGH_RAIN_MM {
        Severity::High
    } else if window.rain_total >= FUNGAL_RAIN_MM || window.pop_max >= FUNGAL_MEDIUM_POP {
        Severity::Medium
    } else {
        Severity::Low
    };

    Some(build(
        AdvisoryType::FungalRisk,
        format!("fungal{}{}{}", seed_number(window.rain_total), seed_number(window.pop_max), humidity),
        severity,
        "Fungal disease risk",
        format!(
            "Humid conditions (RH {}%)+precip in next 48h ({:.0} mm, POP {}%).",
            humidity,
            window.rain_total,
            (window.pop_max * 100.0) as i32
        ),
        "Scout susceptible areas; consider preventive spray if label-appropriate.",
        &["disease"],
    ))
}

fn frost_rule(window: &WindowSummary) -> Option<Advisory> {
    let t_min = window.t_min.filter(|t| *t <= FROST_MAX_TEMP)?;
    let severity = if t_min <= FROST_HIGH_TEMP {
        Severity::High
    } else {
        Severity::Medium
    };

    Some(build(
        AdvisoryType::FrostRisk,
        format!("frost{}", seed_number(t_min)),
        severity,
        "Frost risk",
        format!("Forecast min {:.0}°C within 48h.", t_min),
        "Protect tender crops (covers/overhead irrigation) where feasible.",
        &["cold"],
    ))
}

fn wind_rule(window: &WindowSummary) -> Option<Advisory> {
    if window.wind_max < WIND_CAUTION_MPS {
        return None;
    }
    let severity = if window.wind_max >= WIND_HIGH_MPS {
        Severity::High
    } else {
        Severity::Medium
    };

    Some(build(
        AdvisoryType::WindCaution,
        format!("wind{}", seed_number(window.wind_max)),
        severity,
        "Windy for spraying",
        format!("Peak wind {:.1} m/s expected; drift risk rises.", window.wind_max),
        "Avoid spraying during peak gusts; resume when breeze is steady/gentle.",
        &["spraying", "drift"],
    ))
}

fn heat_rule(window: &WindowSummary) -> Option<Advisory> {
    let t_max = window.t_max.filter(|t| *t >= HEAT_STRESS_TEMP)?;
    let severity = if t_max >= HEAT_HIGH_TEMP {
        Severity::High
    } else {
        Severity::Medium
    };

    Some(build(
        AdvisoryType::HeatStress,
        format!("heat{}", seed_number(t_max)),
        severity,
        "Heat stress window",
        format!("High temperature up to {:.0}°C within 48h.", t_max),
        "Irrigate early; monitor for leaf scorch and wilting.",
        &["heat"],
    ))
}

fn build(
    advisory_type: AdvisoryType,
    seed: String,
    severity: Severity,
    title: &str,
    reason: String,
    action: &str,
    tags: &[&str],
) -> Advisory {
    Advisory {
        id: fingerprint(&seed),
        advisory_type,
        severity,
        title: title.to_string(),
        reason,
        action: action.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}
