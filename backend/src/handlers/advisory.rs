//! HTTP handlers for advisory and forecast chart endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use shared::{AdvisoryPayload, ForecastChart};
use validator::Validate;

use super::query::{AdvisoryQuery, CoordinatesQuery};
use crate::error::AppResult;
use crate::AppState;

/// Get crop advisories for a field location
pub async fn get_advisory(
    State(state): State<AppState>,
    Query(query): Query<AdvisoryQuery>,
) -> AppResult<Json<AdvisoryPayload>> {
    query.validate()?;
    let payload = state
        .advisory
        .get_advisory(query.lat, query.lon, query.crop.trim())
        .await?;
    Ok(Json(payload))
}

/// Get the daily forecast series for charting
pub async fn get_forecast_chart(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> AppResult<Json<ForecastChart>> {
    query.validate()?;
    let chart = state.advisory.get_forecast_chart(query.lat, query.lon).await?;
    Ok(Json(chart))
}
