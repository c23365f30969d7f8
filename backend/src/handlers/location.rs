//! HTTP handlers for location search

use axum::{
    extract::{Query, State},
    Json,
};
use shared::GeoLocation;
use validator::Validate;

use super::query::LocationQuery;
use crate::error::AppResult;
use crate::AppState;

/// Search places by name
pub async fn search_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<Vec<GeoLocation>>> {
    query.validate()?;
    let locations = state.locations.search(&query.location).await?;
    Ok(Json(locations))
}
