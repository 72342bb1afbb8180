//! Nominatim HTTP adapter for geocoding.

use serde::Deserialize;
use tracing::warn;

use crate::model::GeocodedLocation;
use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "smart-travel-planner".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, location: &str) -> Option<GeocodedLocation> {
        // Queries are scoped to India to improve accuracy.
        let query = if location.to_lowercase().contains("india") {
            location.to_string()
        } else {
            format!("{location}, India")
        };

        let response = self
            .client
            .get(format!("{}/search", self.config.base_url))
            .query(&[("q", query.as_str()), ("format", "json"), ("limit", "1")])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<NominatimPlace>>());

        match response {
            Ok(places) => places.into_iter().next().and_then(|place| {
                let latitude = place.lat.parse().ok()?;
                let longitude = place.lon.parse().ok()?;
                Some(GeocodedLocation {
                    latitude,
                    longitude,
                    address: place.display_name,
                })
            }),
            Err(err) => {
                warn!(location, error = %err, "geocoding request failed");
                None
            }
        }
    }
}

// Nominatim reports coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}
