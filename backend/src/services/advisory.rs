//! Advisory service: fetches upstream documents and hands them to the core

use shared::{build_forecast_chart, generate_advisory_payload, AdvisoryPayload, ForecastChart};

use crate::error::AppResult;
use crate::external::{GeocodeClient, WeatherClient};

/// Advisory service composing weather, geocoding and the rule engine
#[derive(Clone)]
pub struct AdvisoryService {
    weather: WeatherClient,
    geocoder: GeocodeClient,
}

impl AdvisoryService {
    pub fn new(weather: WeatherClient, geocoder: GeocodeClient) -> Self {
        Self { weather, geocoder }
    }

    /// Build the advisory payload for a field location
    ///
    /// Current conditions, forecast and label are fetched concurrently. A
    /// failed label lookup falls back to the coordinate label.
    pub async fn get_advisory(&self, lat: f64, lon: f64, crop: &str) -> AppResult<AdvisoryPayload> {
        let (current, forecast, label) = tokio::join!(
            self.weather.get_current_weather(lat, lon),
            self.weather.get_forecast(lat, lon),
            self.geocoder.reverse_label(lat, lon),
        );
        let (current, forecast) = (current?, forecast?);

        let label = label.unwrap_or_else(|e| {
            tracing::warn!(lat, lon, "Reverse geocoding failed, using coordinates: {}", e);
            None
        });

        let payload = generate_advisory_payload(lat, lon, crop, &current, &forecast, label.as_deref());
        tracing::info!(
            lat,
            lon,
            crop,
            advisories = payload.advisories.len(),
            days = payload.weather.daily.len(),
            "Advisory generated"
        );
        Ok(payload)
    }

    /// Daily forecast series for charting
    pub async fn get_forecast_chart(&self, lat: f64, lon: f64) -> AppResult<ForecastChart> {
        let forecast = self.weather.get_forecast(lat, lon).await?;
        Ok(build_forecast_chart(&forecast))
    }
}
