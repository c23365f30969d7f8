//! Validation utilities for advisory requests
//!
//! Coordinates and free-text inputs arrive as query parameters; these checks
//! run before any upstream request is made.

// ============================================================================
// Coordinate Validations
// ============================================================================

/// Validate latitude in decimal degrees
pub fn validate_latitude(lat: f64) -> Result<(), &'static str> {
    if !lat.is_finite() {
        return Err("Latitude must be a finite number");
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate longitude in decimal degrees
pub fn validate_longitude(lon: f64) -> Result<(), &'static str> {
    if !lon.is_finite() {
        return Err("Longitude must be a finite number");
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Text Validations
// ============================================================================

/// Maximum crop identifier length
pub const MAX_CROP_LEN: usize = 64;

/// Maximum place search length
pub const MAX_PLACE_QUERY_LEN: usize = 200;

/// Validate a crop identifier
///
/// Crops are opaque; only presence and length are checked.
pub fn validate_crop(crop: &str) -> Result<(), &'static str> {
    let crop = crop.trim();
    if crop.is_empty() {
        return Err("Crop is required");
    }
    if crop.chars().count() > MAX_CROP_LEN {
        return Err("Crop must be at most 64 characters");
    }
    Ok(())
}

/// Validate a free-text place search
pub fn validate_place_query(query: &str) -> Result<(), &'static str> {
    let query = query.trim();
    if query.is_empty() {
        return Err("Location query is required");
    }
    if query.chars().count() > MAX_PLACE_QUERY_LEN {
        return Err("Location query must be at most 200 characters");
    }
    Ok(())
}
