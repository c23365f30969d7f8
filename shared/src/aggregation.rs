//! Rolling 48-hour forecast window
//!
//! Reduces the forecast samples between the evaluation instant and 48 hours
//! later into the scalar drivers used by the advisory rules.

use serde::{Deserialize, Serialize};

use crate::models::ForecastSample;

/// Length of the forward-looking window in seconds
pub const WINDOW_SECONDS: i64 = 48 * 3600;

/// Extremes and totals over the next 48 hours
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    /// `None` when no sample in the window carried a temperature
    pub t_max: Option<f64>,
    pub t_min: Option<f64>,
    pub wind_max: f64,
    pub rain_total: f64,
    pub pop_max: f64,
}

/// Summarize samples with `now <= dt <= now + 48h`
pub fn summarize_window(samples: &[ForecastSample], now: i64) -> WindowSummary {
    let cutoff = now.saturating_add(WINDOW_SECONDS);
    let mut summary = WindowSummary::default();
    let mut wind_max = None;
    let mut pop_max = None;

    for sample in samples.iter().filter(|s| s.dt >= now && s.dt <= cutoff) {
        if let Some(t) = sample.temperature_celsius {
            summary.t_max = fold_max(summary.t_max, t);
            summary.t_min = fold_min(summary.t_min, t);
        }
        wind_max = fold_max(wind_max, sample.wind_speed_mps);
        pop_max = fold_max(pop_max, sample.pop);
        summary.rain_total += sample.precipitation_mm();
    }

    summary.wind_max = wind_max.unwrap_or(0.0);
    summary.pop_max = pop_max.unwrap_or(0.0);
    summary
}

pub(crate) fn fold_max(acc: Option<f64>, value: f64) -> Option<f64> {
    Some(acc.map_or(value, |m| m.max(value)))
}

pub(crate) fn fold_min(acc: Option<f64>, value: f64) -> Option<f64> {
    Some(acc.map_or(value, |m| m.min(value)))
}
