//! Route definitions for the Crop Advisory server

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
///
/// Paths are unversioned; the web client calls them directly.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop advisories for a field location
        .route("/advisory", get(handlers::get_advisory))
        // Daily series for the forecast chart
        .route("/forecast_chart", get(handlers::get_forecast_chart))
        // Place search for the location picker
        .route("/locations", get(handlers::search_locations))
}
