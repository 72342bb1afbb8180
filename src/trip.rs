//! Trip-planning facade.
//!
//! Drives one request end to end: geocode both endpoints, fetch the route
//! and nearby incidents, generate traffic patterns, pick a departure time,
//! run the analysis engine, and assemble the outward `TripPlan`. Only a
//! missing field or a failed geocode is a hard failure; everything else
//! degrades to defaults.

use chrono::{Duration, Local, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::{AnalysisEngine, AnalysisRequest};
use crate::error::PlanError;
use crate::haversine;
use crate::metrics::{self, EmissionsEstimate, ScenicRating};
use crate::model::{
    BoundingBox, DensityLevel, FetchedRoute, OptimalTiming, RoutePoint, RouteSummary,
    TripPlan,
};
use crate::patterns::TrafficPatternGenerator;
use crate::preference::RoutePreference;
use crate::traits::{Geocoder, IncidentProvider, Router, TextGenerator};

/// Bounding-box padding when querying incidents, roughly 5 km.
const BBOX_PADDING_DEG: f64 = 0.05;

/// An incoming trip-planning request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub route_preference: RoutePreference,
    /// Target arrival time as "HH:MM"; when set, the departure time is
    /// back-calculated from the estimated travel time.
    pub target_arrival: Option<String>,
}

/// One route option when comparing preferences side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    pub route_type: RoutePreference,
    pub travel_time_seconds: u32,
    pub travel_time_without_traffic: u32,
    pub distance_km: f64,
    pub route_points: Vec<RoutePoint>,
    pub route_description: String,
    pub emissions_estimate: EmissionsEstimate,
    pub traffic_density: DensityLevel,
    pub scenic_rating: ScenicRating,
}

/// The planner: providers are injected once at construction; the analysis
/// engine decides model-vs-simulation at the same time.
pub struct TripPlanner<G, R, I, T> {
    geocoder: G,
    router: R,
    incident_provider: I,
    engine: AnalysisEngine<T>,
    pattern_generator: TrafficPatternGenerator,
}

impl<G, R, I, T> TripPlanner<G, R, I, T>
where
    G: Geocoder + Sync,
    R: Router,
    I: IncidentProvider,
    T: TextGenerator,
{
    pub fn new(geocoder: G, router: R, incident_provider: I, engine: AnalysisEngine<T>) -> Self {
        Self {
            geocoder,
            router,
            incident_provider,
            engine,
            pattern_generator: TrafficPatternGenerator::new(),
        }
    }

    /// Replace the pattern generator (tests inject a seeded one).
    pub fn with_pattern_generator(mut self, generator: TrafficPatternGenerator) -> Self {
        self.pattern_generator = generator;
        self
    }

    /// Plan one trip end to end.
    pub fn plan(&mut self, request: &TripRequest) -> Result<TripPlan, PlanError> {
        if request.origin.trim().is_empty() {
            return Err(PlanError::MissingField("origin"));
        }
        if request.destination.trim().is_empty() {
            return Err(PlanError::MissingField("destination"));
        }

        // The two geocodes are independent of each other.
        let (origin_loc, dest_loc) = rayon::join(
            || self.geocoder.geocode(&request.origin),
            || self.geocoder.geocode(&request.destination),
        );
        let origin_loc =
            origin_loc.ok_or_else(|| PlanError::GeocodingFailed(request.origin.clone()))?;
        let dest_loc =
            dest_loc.ok_or_else(|| PlanError::GeocodingFailed(request.destination.clone()))?;

        let origin_coords = (origin_loc.latitude, origin_loc.longitude);
        let dest_coords = (dest_loc.latitude, dest_loc.longitude);
        let preference = request.route_preference;

        let route = match self
            .router
            .route(origin_coords, dest_coords, preference.routing_param())
        {
            Ok(route) => route,
            Err(err) => {
                warn!(error = %err, "route fetch failed, estimating from great-circle distance");
                estimated_route(origin_coords, dest_coords)
            }
        };

        let incidents = match BoundingBox::from_points(&route.points) {
            Some(bbox) => self
                .incident_provider
                .incidents_in(&bbox.padded(BBOX_PADDING_DEG)),
            None => Vec::new(),
        };

        let patterns = self.pattern_generator.generate(None);
        let optimal_hour = patterns
            .optimal_hour()
            .map(|entry| entry.hour)
            .unwrap_or(0);
        let travel_time_seconds = route.summary.travel_time_with_traffic();

        let departure_time = request
            .target_arrival
            .as_deref()
            .and_then(|target| departure_for_arrival(target, travel_time_seconds))
            .unwrap_or_else(|| metrics::format_hour(optimal_hour));

        let analysis = self.engine.analyze(&AnalysisRequest {
            origin: &request.origin,
            destination: &request.destination,
            route_summary: &route.summary,
            incidents: &incidents,
            traffic_patterns: Some(&patterns),
            preference,
        });
        debug!(source = %analysis.source, "trip analysis complete");

        let optimal_timing = OptimalTiming {
            recommendation: preference.timing_recommendation().to_string(),
            alternatives: preference.alternatives(),
            preferred_date: request
                .preferred_date
                .clone()
                .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string()),
            preferred_time: request
                .preferred_time
                .clone()
                .unwrap_or_else(|| "09:00".to_string()),
            route_preference: preference,
        };

        Ok(TripPlan {
            best_route: describe_best_route(
                &request.origin,
                &request.destination,
                &route.road_numbers,
            ),
            departure_time,
            travel_time: metrics::format_travel_time(travel_time_seconds),
            distance: format!("{:.2} km", route.summary.distance_km()),
            ai_analysis: analysis.html_content,
            route_points: route.points,
            traffic_incidents: incidents,
            traffic_patterns: patterns,
            density_levels: analysis.density_levels,
            ai_source: analysis.source,
            ai_model: analysis.model.unwrap_or_else(|| "none".to_string()),
            ai_timestamp: analysis.timestamp,
            optimal_timing,
        })
    }

    /// Fetch route options for the given preference, or all four when
    /// `None`. Preferences whose route fetch fails are skipped.
    pub fn route_options(
        &self,
        origin: (f64, f64),
        destination: (f64, f64),
        preference: Option<RoutePreference>,
    ) -> Vec<RouteOption> {
        let preferences = match preference {
            Some(preference) => vec![preference],
            None => RoutePreference::ALL.to_vec(),
        };

        preferences
            .into_iter()
            .filter_map(|preference| {
                match self
                    .router
                    .route(origin, destination, preference.routing_param())
                {
                    Ok(route) => {
                        let metrics = metrics::compute_metrics(&route.summary, &[], preference);
                        Some(RouteOption {
                            route_type: preference,
                            travel_time_seconds: route.summary.travel_time_with_traffic(),
                            travel_time_without_traffic: route.summary.travel_time_seconds,
                            distance_km: metrics.distance_km,
                            route_description: preference.route_description(metrics.distance_km),
                            route_points: route.points,
                            emissions_estimate: metrics.emissions,
                            traffic_density: metrics.congestion_level,
                            scenic_rating: metrics.scenic_rating,
                        })
                    }
                    Err(err) => {
                        warn!(preference = %preference, error = %err, "route option fetch failed");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Substitute route when the router is unreachable: great-circle distance
/// at an assumed average speed, with just the two endpoints as geometry.
fn estimated_route(origin: (f64, f64), destination: (f64, f64)) -> FetchedRoute {
    let distance_km = haversine::haversine_km(origin, destination);
    let travel_time_seconds =
        haversine::estimated_travel_seconds(origin, destination, haversine::DEFAULT_SPEED_KMH);
    FetchedRoute {
        summary: RouteSummary {
            distance_meters: distance_km * 1000.0,
            travel_time_seconds,
            travel_time_with_traffic_seconds: None,
        },
        points: vec![
            RoutePoint {
                lat: origin.0,
                lon: origin.1,
            },
            RoutePoint {
                lat: destination.0,
                lon: destination.1,
            },
        ],
        road_numbers: Vec::new(),
    }
}

/// "Origin → NH48 → ... → Destination" from the first three distinct road
/// numbers along the route.
fn describe_best_route(origin: &str, destination: &str, road_numbers: &[String]) -> String {
    let mut roads: Vec<&str> = Vec::new();
    for road in road_numbers {
        if !roads.contains(&road.as_str()) {
            roads.push(road);
        }
        if roads.len() == 3 {
            break;
        }
    }

    if roads.is_empty() {
        format!("{origin} → {destination}")
    } else {
        format!("{origin} → {} → {destination}", roads.join(" → "))
    }
}

/// Departure time for a "HH:MM" target arrival, formatted "%I:%M %p".
/// `None` when the target does not parse.
fn departure_for_arrival(target_arrival: &str, travel_time_seconds: u32) -> Option<String> {
    let arrival = NaiveTime::parse_from_str(target_arrival, "%H:%M").ok()?;
    let departure = arrival - Duration::seconds(i64::from(travel_time_seconds));
    Some(departure.format("%I:%M %p").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_route_with_no_roads_is_endpoints_only() {
        assert_eq!(describe_best_route("Delhi", "Mumbai", &[]), "Delhi → Mumbai");
    }

    #[test]
    fn best_route_dedupes_and_caps_roads() {
        let roads = vec![
            "NH48".to_string(),
            "NH48".to_string(),
            "NE4".to_string(),
            "NH66".to_string(),
            "NH44".to_string(),
        ];
        assert_eq!(
            describe_best_route("Delhi", "Mumbai", &roads),
            "Delhi → NH48 → NE4 → NH66 → Mumbai"
        );
    }

    #[test]
    fn departure_backs_off_travel_time() {
        // 14:00 arrival minus 90 minutes.
        assert_eq!(
            departure_for_arrival("14:00", 5400).as_deref(),
            Some("12:30 PM")
        );
        assert_eq!(departure_for_arrival("not a time", 5400), None);
    }
}
