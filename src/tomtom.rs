//! TomTom HTTP adapter for routing and traffic incidents.

use serde::Deserialize;
use tracing::warn;

use crate::error::ProviderError;
use crate::model::{BoundingBox, FetchedRoute, Incident, RoutePoint, RouteSummary};
use crate::traits::{IncidentProvider, Router};

#[derive(Debug, Clone)]
pub struct TomTomConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for TomTomConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.tomtom.com".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TomTomClient {
    config: TomTomConfig,
    client: reqwest::blocking::Client,
}

impl TomTomClient {
    pub fn new(config: TomTomConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Router for TomTomClient {
    fn route(
        &self,
        origin: (f64, f64),
        destination: (f64, f64),
        routing_param: &str,
    ) -> Result<FetchedRoute, ProviderError> {
        let url = format!(
            "{}/routing/1/calculateRoute/{:.6},{:.6}:{:.6},{:.6}/json",
            self.config.base_url, origin.0, origin.1, destination.0, destination.1
        );

        let response: CalculateRouteResponse = self
            .client
            .get(url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("traffic", "true"),
                ("travelMode", "car"),
                ("routeType", routing_param),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("no routes in response".to_string()))?;

        let mut points = Vec::new();
        let mut road_numbers = Vec::new();
        for leg in route.legs {
            for point in leg.points {
                points.push(RoutePoint {
                    lat: point.latitude,
                    lon: point.longitude,
                });
            }
            if let Some(guidance) = leg.guidance {
                for instruction in guidance.instructions {
                    if let Some(road) = instruction.road_numbers.into_iter().next() {
                        road_numbers.push(road);
                    }
                }
            }
        }

        Ok(FetchedRoute {
            summary: RouteSummary {
                distance_meters: route.summary.length_in_meters,
                travel_time_seconds: route.summary.travel_time_in_seconds,
                travel_time_with_traffic_seconds: route
                    .summary
                    .travel_time_in_seconds_with_traffic,
            },
            points,
            road_numbers,
        })
    }
}

impl IncidentProvider for TomTomClient {
    fn incidents_in(&self, bbox: &BoundingBox) -> Vec<Incident> {
        let url = format!(
            "{}/traffic/services/4/incidentDetails/s3/{:.6},{:.6},{:.6},{:.6}/10/-1/json",
            self.config.base_url, bbox.min_lon, bbox.min_lat, bbox.max_lon, bbox.max_lat
        );

        let response = self
            .client
            .get(url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<IncidentResponse>());

        match response {
            Ok(body) => body
                .incidents
                .into_iter()
                .map(|incident| Incident {
                    description: incident
                        .description
                        .unwrap_or_else(|| "Unknown incident".to_string()),
                })
                .collect(),
            Err(err) => {
                warn!(error = %err, "incident lookup failed, continuing without incidents");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct CalculateRouteResponse {
    #[serde(default)]
    routes: Vec<TomTomRoute>,
}

#[derive(Debug, Deserialize)]
struct TomTomRoute {
    summary: TomTomSummary,
    #[serde(default)]
    legs: Vec<TomTomLeg>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TomTomSummary {
    length_in_meters: f64,
    travel_time_in_seconds: u32,
    travel_time_in_seconds_with_traffic: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TomTomLeg {
    #[serde(default)]
    points: Vec<TomTomPoint>,
    guidance: Option<TomTomGuidance>,
}

#[derive(Debug, Deserialize)]
struct TomTomPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct TomTomGuidance {
    #[serde(default)]
    instructions: Vec<TomTomInstruction>,
}

#[derive(Debug, Deserialize)]
struct TomTomInstruction {
    #[serde(default, rename = "roadNumbers")]
    road_numbers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IncidentResponse {
    #[serde(default)]
    incidents: Vec<TomTomIncident>,
}

#[derive(Debug, Deserialize)]
struct TomTomIncident {
    description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_response_deserializes_from_provider_payload() {
        let body = serde_json::json!({
            "routes": [{
                "summary": {
                    "lengthInMeters": 1_400_000.0,
                    "travelTimeInSeconds": 50_400,
                    "travelTimeInSecondsWithTraffic": 57_600
                },
                "legs": [{
                    "points": [
                        { "latitude": 28.6139, "longitude": 77.2090 },
                        { "latitude": 19.0760, "longitude": 72.8777 }
                    ],
                    "guidance": {
                        "instructions": [
                            { "roadNumbers": ["NH48"] },
                            { "roadNumbers": [] }
                        ]
                    }
                }]
            }]
        });
        let response: CalculateRouteResponse = serde_json::from_value(body).unwrap();
        let route = &response.routes[0];
        assert_eq!(route.summary.length_in_meters, 1_400_000.0);
        assert_eq!(route.summary.travel_time_in_seconds_with_traffic, Some(57_600));
        assert_eq!(route.legs[0].points.len(), 2);
    }

    #[test]
    fn incident_response_deserializes_with_missing_descriptions() {
        let body = serde_json::json!({
            "incidents": [
                { "description": "Accident on NH-48 near Surat" },
                {}
            ]
        });
        let response: IncidentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.incidents.len(), 2);
        assert_eq!(
            response.incidents[0].description.as_deref(),
            Some("Accident on NH-48 near Surat")
        );
        assert_eq!(response.incidents[1].description, None);

        let empty: IncidentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.incidents.is_empty());
    }
}
