//! In-process fakes for the provider seams.

use std::collections::HashMap;

use trip_planner::error::ProviderError;
use trip_planner::model::{
    BoundingBox, FetchedRoute, GeocodedLocation, Incident, RoutePoint, RouteSummary,
};
use trip_planner::traits::{Geocoder, IncidentProvider, Router, TextGenerator};

/// Geocoder backed by a fixed name → coordinates table.
pub struct FakeGeocoder {
    places: HashMap<String, (f64, f64)>,
}

impl FakeGeocoder {
    pub fn with_indian_cities() -> Self {
        let mut places = HashMap::new();
        places.insert("Delhi".to_string(), (28.6139, 77.2090));
        places.insert("Mumbai".to_string(), (19.0760, 72.8777));
        places.insert("Pune".to_string(), (18.5204, 73.8567));
        places.insert("Surat".to_string(), (21.1702, 72.8311));
        Self { places }
    }
}

impl Geocoder for FakeGeocoder {
    fn geocode(&self, location: &str) -> Option<GeocodedLocation> {
        self.places
            .get(location)
            .map(|&(latitude, longitude)| GeocodedLocation {
                latitude,
                longitude,
                address: format!("{location}, India"),
            })
    }
}

/// Router returning a canned route, or failing when `route` is `None`.
pub struct FakeRouter {
    pub route: Option<FetchedRoute>,
}

impl FakeRouter {
    /// Delhi → Mumbai: 1400 km, 14 h free flow, 16 h with traffic.
    pub fn delhi_mumbai() -> Self {
        Self {
            route: Some(FetchedRoute {
                summary: RouteSummary {
                    distance_meters: 1_400_000.0,
                    travel_time_seconds: 50_400,
                    travel_time_with_traffic_seconds: Some(57_600),
                },
                points: vec![
                    RoutePoint {
                        lat: 28.6139,
                        lon: 77.2090,
                    },
                    RoutePoint {
                        lat: 21.1702,
                        lon: 72.8311,
                    },
                    RoutePoint {
                        lat: 19.0760,
                        lon: 72.8777,
                    },
                ],
                road_numbers: vec!["NH48".to_string(), "NH48".to_string(), "NE4".to_string()],
            }),
        }
    }

    pub fn unavailable() -> Self {
        Self { route: None }
    }
}

impl Router for FakeRouter {
    fn route(
        &self,
        _origin: (f64, f64),
        _destination: (f64, f64),
        _routing_param: &str,
    ) -> Result<FetchedRoute, ProviderError> {
        self.route.clone().ok_or_else(|| {
            ProviderError::MalformedResponse("router unavailable".to_string())
        })
    }
}

/// Incident provider returning a fixed list regardless of the box.
pub struct FakeIncidents {
    pub incidents: Vec<Incident>,
}

impl FakeIncidents {
    pub fn none() -> Self {
        Self {
            incidents: Vec::new(),
        }
    }

    pub fn accident_on_nh48() -> Self {
        Self {
            incidents: vec![Incident::new("Accident on NH-48 near Surat")],
        }
    }
}

impl IncidentProvider for FakeIncidents {
    fn incidents_in(&self, _bbox: &BoundingBox) -> Vec<Incident> {
        self.incidents.clone()
    }
}

/// Text generator that replies with a fixed body, or always fails.
pub struct FakeGenerator {
    pub response: Result<String, String>,
    pub model: String,
}

impl FakeGenerator {
    pub fn replying(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            model: "fake-model-v1".to_string(),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Err("generation backend down".to_string()),
            model: "fake-model-v1".to_string(),
        }
    }
}

impl TextGenerator for FakeGenerator {
    fn generate(&self, _prompt: &str, _system_instructions: &str) -> Result<String, ProviderError> {
        self.response
            .clone()
            .map_err(ProviderError::MalformedResponse)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
