//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for current conditions and the 5-day /
//! 3-hour forecast. Responses are returned as raw documents.

use reqwest::Client;
use serde_json::Value;

use super::fetch_json;
use crate::config::OpenWeatherConfig;
use crate::error::AppResult;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(client: Client, config: &OpenWeatherConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/data/2.5/{}", self.base_url, path)
    }

    /// Fetch current weather conditions by coordinates
    pub async fn get_current_weather(&self, lat: f64, lon: f64) -> AppResult<Value> {
        tracing::debug!(lat, lon, "Fetching current weather");
        let request = self.client.get(self.endpoint("weather")).query(&[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]);
        fetch_json(request, "Current weather").await
    }

    /// Fetch the 3-hour forecast by coordinates
    pub async fn get_forecast(&self, lat: f64, lon: f64) -> AppResult<Value> {
        tracing::debug!(lat, lon, "Fetching forecast");
        let request = self.client.get(self.endpoint("forecast")).query(&[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]);
        fetch_json(request, "Forecast").await
    }
}
