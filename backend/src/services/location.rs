//! Location search service

use shared::GeoLocation;

use crate::error::AppResult;
use crate::external::GeocodeClient;

#[derive(Clone)]
pub struct LocationService {
    geocoder: GeocodeClient,
}

impl LocationService {
    pub fn new(geocoder: GeocodeClient) -> Self {
        Self { geocoder }
    }

    /// Candidate places for a free-text query
    pub async fn search(&self, query: &str) -> AppResult<Vec<GeoLocation>> {
        let locations = self.geocoder.search_locations(query.trim()).await?;
        tracing::debug!(query, results = locations.len(), "Location search complete");
        Ok(locations)
    }
}
