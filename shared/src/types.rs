//! Common types used across the service

use serde::{Deserialize, Serialize};

/// A queried field location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

impl Location {
    pub fn new(lat: f64, lon: f64, label: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            label: label.into(),
        }
    }
}

/// Coordinate label used when no place name is known
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!("{:.4}, {:.4}", lat, lon)
}

/// Use `label` when it has content, otherwise the coordinate label
pub fn resolve_label(label: Option<&str>, lat: f64, lon: f64) -> String {
    match label.map(str::trim) {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => format_coordinates(lat, lon),
    }
}
