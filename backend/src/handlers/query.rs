//! Query parameter types shared by the handlers

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Coordinates plus crop for the advisory endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct AdvisoryQuery {
    #[validate(custom = "latitude")]
    pub lat: f64,
    #[validate(custom = "longitude")]
    pub lon: f64,
    #[serde(default)]
    #[validate(custom = "crop")]
    pub crop: String,
}

/// Coordinates only
#[derive(Debug, Deserialize, Validate)]
pub struct CoordinatesQuery {
    #[validate(custom = "latitude")]
    pub lat: f64,
    #[validate(custom = "longitude")]
    pub lon: f64,
}

/// Free-text place search
#[derive(Debug, Deserialize, Validate)]
pub struct LocationQuery {
    #[serde(default)]
    #[validate(custom = "place_query")]
    pub location: String,
}

fn to_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn latitude(lat: f64) -> Result<(), ValidationError> {
    shared::validate_latitude(lat).map_err(|m| to_validation_error("latitude", m))
}

fn longitude(lon: f64) -> Result<(), ValidationError> {
    shared::validate_longitude(lon).map_err(|m| to_validation_error("longitude", m))
}

fn crop(crop: &str) -> Result<(), ValidationError> {
    shared::validate_crop(crop).map_err(|m| to_validation_error("crop", m))
}

fn place_query(query: &str) -> Result<(), ValidationError> {
    shared::validate_place_query(query).map_err(|m| to_validation_error("location", m))
}
