//! Geocoding result models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{number_at, text_at};

/// A place returned by forward geocoding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoLocation {
    pub label: String,
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    /// Build from a provider geocoding entry; entries without coordinates are dropped
    pub fn from_document(item: &Value) -> Option<Self> {
        Some(Self {
            label: place_label_from_document(item),
            lat: number_at(item, &["lat"])?,
            lon: number_at(item, &["lon"])?,
        })
    }
}

/// Join the non-empty parts of a place name with ", "
pub fn place_label(name: Option<&str>, state: Option<&str>, country: Option<&str>) -> String {
    [name, state, country]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Label for a provider geocoding entry (`name`, `state`, `country`)
pub fn place_label_from_document(item: &Value) -> String {
    place_label(
        text_at(item, &["name"]),
        text_at(item, &["state"]),
        text_at(item, &["country"]),
    )
}
