//! Geocoding client
//!
//! Forward search for the location picker and reverse lookup for advisory
//! labels, both against the OpenWeatherMap geocoding API.

use reqwest::Client;
use serde_json::Value;
use shared::{place_label_from_document, GeoLocation};

use super::fetch_json;
use crate::config::OpenWeatherConfig;
use crate::error::AppResult;

/// Results returned by a forward search
pub const SEARCH_LIMIT: u32 = 5;

/// Geocoding API client
#[derive(Clone)]
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(client: Client, config: &OpenWeatherConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/geo/1.0/{}", self.base_url, path)
    }

    /// Resolve a free-text place query into candidate locations
    pub async fn search_locations(&self, query: &str) -> AppResult<Vec<GeoLocation>> {
        tracing::debug!(query, "Searching locations");
        let request = self.client.get(self.endpoint("direct")).query(&[
            ("q", query.to_string()),
            ("limit", SEARCH_LIMIT.to_string()),
            ("appid", self.api_key.clone()),
        ]);
        let doc = fetch_json(request, "Geocoding").await?;
        Ok(locations_from_document(&doc))
    }

    /// Human-readable label for a coordinate pair, if the provider knows one
    pub async fn reverse_label(&self, lat: f64, lon: f64) -> AppResult<Option<String>> {
        tracing::debug!(lat, lon, "Reverse geocoding");
        let request = self.client.get(self.endpoint("reverse")).query(&[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("limit", "1".to_string()),
            ("appid", self.api_key.clone()),
        ]);
        let doc = fetch_json(request, "Reverse geocoding").await?;
        Ok(first_label(&doc))
    }
}

/// Entries carrying both coordinates, in provider order
fn locations_from_document(doc: &Value) -> Vec<GeoLocation> {
    doc.as_array()
        .map(|items| items.iter().filter_map(GeoLocation::from_document).collect())
        .unwrap_or_default()
}

fn first_label(doc: &Value) -> Option<String> {
    doc.as_array()?
        .first()
        .map(place_label_from_document)
        .filter(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locations_from_document() {
        let doc = json!([
            {"name": "Ames", "state": "Iowa", "country": "US", "lat": 42.03, "lon": -93.62},
            {"name": "Ames", "country": "FR"},
            {"name": "Ames", "country": "ES", "lat": 43.0, "lon": -8.65}
        ]);
        let locations = locations_from_document(&doc);
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].label, "Ames, Iowa, US");
        assert_eq!(locations[1].label, "Ames, ES");
    }

    #[test]
    fn test_locations_from_non_array() {
        assert!(locations_from_document(&json!({"cod": 400})).is_empty());
    }

    #[test]
    fn test_first_label() {
        assert_eq!(
            first_label(&json!([{"name": "Lyon", "country": "FR"}])),
            Some("Lyon, FR".to_string())
        );
        assert_eq!(first_label(&json!([])), None);
        assert_eq!(first_label(&json!([{"lat": 1.0}])), None);
    }
}
