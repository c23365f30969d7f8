//! External API integrations
//!
//! Both clients talk to OpenWeatherMap and hand back raw JSON documents; all
//! interpretation happens in the `shared` crate.

pub mod geocode;
pub mod weather;

pub use geocode::GeocodeClient;
pub use weather::WeatherClient;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::config::OpenWeatherConfig;
use crate::error::{AppError, AppResult};

/// Build the HTTP client shared by the OpenWeatherMap integrations
pub fn http_client(config: &OpenWeatherConfig) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| AppError::ExternalService(format!("Failed to build HTTP client: {}", e)))
}

/// Send a request and decode the JSON body, keeping provider error statuses
pub(crate) async fn fetch_json(request: RequestBuilder, what: &str) -> AppResult<Value> {
    let response = request.send().await.map_err(|e| {
        AppError::WeatherServiceUnavailable(format!("{} request failed: {}", what, e))
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "{} request rejected by provider", what);
        return Err(AppError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::ExternalService(format!("Failed to parse {} response: {}", what, e)))
}
