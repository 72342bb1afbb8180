//! Request-scoped value objects shared across the planner.
//!
//! Everything here is constructed fresh per trip-planning request and
//! discarded once the response is serialized. Field names on the outward
//! types (`TripPlan`, `TrafficPattern`, `OptimalTiming`) are fixed for
//! compatibility with the existing presentation layer.

use serde::{Deserialize, Serialize};

use crate::preference::RoutePreference;

/// Route summary as reported by the routing provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_meters: f64,
    /// Travel time ignoring traffic, in seconds.
    pub travel_time_seconds: u32,
    /// Travel time under current traffic; absent when the provider has no
    /// live signal for the route.
    pub travel_time_with_traffic_seconds: Option<u32>,
}

impl RouteSummary {
    /// Travel time with traffic, defaulting to the traffic-free time when
    /// the provider did not report one.
    pub fn travel_time_with_traffic(&self) -> u32 {
        self.travel_time_with_traffic_seconds
            .unwrap_or(self.travel_time_seconds)
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }
}

/// A traffic incident along the route, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub description: String,
}

impl Incident {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A single point of the route geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
}

/// Rectangular lat/lon region covering a route's extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Tight bounding box around the given points, or `None` when empty.
    pub fn from_points(points: &[RoutePoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            min_lat: first.lat,
            min_lon: first.lon,
            max_lat: first.lat,
            max_lon: first.lon,
        };
        for point in &points[1..] {
            bbox.min_lat = bbox.min_lat.min(point.lat);
            bbox.min_lon = bbox.min_lon.min(point.lon);
            bbox.max_lat = bbox.max_lat.max(point.lat);
            bbox.max_lon = bbox.max_lon.max(point.lon);
        }
        Some(bbox)
    }

    /// Expand the box by `degrees` on every side.
    pub fn padded(&self, degrees: f64) -> Self {
        Self {
            min_lat: self.min_lat - degrees,
            min_lon: self.min_lon - degrees,
            max_lat: self.max_lat + degrees,
            max_lon: self.max_lon + degrees,
        }
    }
}

/// Qualitative traffic classification for a road-segment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityLevel {
    Low,
    Medium,
    High,
}

impl DensityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DensityLevel::Low => "Low",
            DensityLevel::Medium => "Medium",
            DensityLevel::High => "High",
        }
    }

    /// CSS class used by the presentation layer.
    pub fn css_class(&self) -> &'static str {
        match self {
            DensityLevel::Low => "low",
            DensityLevel::Medium => "medium",
            DensityLevel::High => "high",
        }
    }

    /// Case-insensitive parse of "Low"/"Medium"/"High".
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("low") {
            Some(DensityLevel::Low)
        } else if text.eq_ignore_ascii_case("medium") {
            Some(DensityLevel::Medium)
        } else if text.eq_ignore_ascii_case("high") {
            Some(DensityLevel::High)
        } else {
            None
        }
    }
}

impl std::fmt::Display for DensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three fixed road-segment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadArea {
    MajorIntersections,
    HighwaySegments,
    UrbanStreets,
}

impl RoadArea {
    pub const ALL: [RoadArea; 3] = [
        RoadArea::MajorIntersections,
        RoadArea::HighwaySegments,
        RoadArea::UrbanStreets,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RoadArea::MajorIntersections => "Major Intersections",
            RoadArea::HighwaySegments => "Highway Segments",
            RoadArea::UrbanStreets => "Urban Streets",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        RoadArea::ALL
            .into_iter()
            .find(|area| text.eq_ignore_ascii_case(area.name()))
    }
}

/// Density classification for every road-segment category.
///
/// Always fully populated; there is no partial form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityLevels {
    #[serde(rename = "Major Intersections")]
    pub major_intersections: DensityLevel,
    #[serde(rename = "Highway Segments")]
    pub highway_segments: DensityLevel,
    #[serde(rename = "Urban Streets")]
    pub urban_streets: DensityLevel,
}

impl DensityLevels {
    /// Hardcoded defaults used when no classification signal is available.
    pub fn defaults() -> Self {
        Self {
            major_intersections: DensityLevel::Medium,
            highway_segments: DensityLevel::Low,
            urban_streets: DensityLevel::High,
        }
    }

    pub fn uniform(level: DensityLevel) -> Self {
        Self {
            major_intersections: level,
            highway_segments: level,
            urban_streets: level,
        }
    }

    pub fn get(&self, area: RoadArea) -> DensityLevel {
        match area {
            RoadArea::MajorIntersections => self.major_intersections,
            RoadArea::HighwaySegments => self.highway_segments,
            RoadArea::UrbanStreets => self.urban_streets,
        }
    }

    pub fn set(&mut self, area: RoadArea, level: DensityLevel) {
        match area {
            RoadArea::MajorIntersections => self.major_intersections = level,
            RoadArea::HighwaySegments => self.highway_segments = level,
            RoadArea::UrbanStreets => self.urban_streets = level,
        }
    }

    /// Entries in display order.
    pub fn entries(&self) -> [(RoadArea, DensityLevel); 3] {
        [
            (RoadArea::MajorIntersections, self.major_intersections),
            (RoadArea::HighwaySegments, self.highway_segments),
            (RoadArea::UrbanStreets, self.urban_streets),
        ]
    }
}

/// Congestion factor for a single hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyCongestion {
    pub hour: u32,
    pub congestion_factor: f64,
    pub travel_time: String,
}

/// Time-series data shaped for the presentation layer's chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub hours: Vec<u32>,
    pub congestion: Vec<f64>,
}

/// Synthetic 24-hour congestion curve, regenerated per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficPattern {
    pub hourly_data: Vec<HourlyCongestion>,
    pub current_hour: u32,
    /// The 6 hours starting at `current_hour`, wrapping past 23.
    pub highlighted_hours: Vec<u32>,
    pub chart_data: ChartData,
}

impl TrafficPattern {
    /// The hour with the least congestion.
    pub fn optimal_hour(&self) -> Option<&HourlyCongestion> {
        self.hourly_data.iter().min_by(|a, b| {
            a.congestion_factor
                .partial_cmp(&b.congestion_factor)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Congestion factor for the pattern's current hour, if present.
    pub fn current_congestion_factor(&self) -> Option<f64> {
        self.hourly_data
            .iter()
            .find(|entry| entry.hour == self.current_hour)
            .map(|entry| entry.congestion_factor)
    }
}

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisSource {
    #[serde(rename = "ibm_watsonx")]
    IbmWatsonx,
    #[serde(rename = "simulation")]
    Simulation,
}

impl std::fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisSource::IbmWatsonx => f.write_str("ibm_watsonx"),
            AnalysisSource::Simulation => f.write_str("simulation"),
        }
    }
}

/// Unified output of the analysis orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub html_content: String,
    pub density_levels: DensityLevels,
    pub source: AnalysisSource,
    pub model: Option<String>,
    /// ISO-8601 timestamp of when the analysis was produced.
    pub timestamp: String,
    pub route_preference: RoutePreference,
}

/// Suitability rating for a departure alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Optimal,
    Good,
    Avoid,
}

/// One rated departure-time option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureAlternative {
    pub time: String,
    pub description: String,
    pub rating: Rating,
}

/// Timing recommendations keyed to the requested route preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalTiming {
    pub recommendation: String,
    pub alternatives: Vec<DepartureAlternative>,
    pub preferred_date: String,
    pub preferred_time: String,
    pub route_preference: RoutePreference,
}

/// Geocoder output for a free-text location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// A fetched route: summary, geometry, and the road numbers encountered
/// along the turn instructions (in instruction order, undeduplicated).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedRoute {
    pub summary: RouteSummary,
    pub points: Vec<RoutePoint>,
    pub road_numbers: Vec<String>,
}

/// Complete trip plan, shaped exactly as the presentation layer expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub best_route: String,
    pub departure_time: String,
    pub travel_time: String,
    pub distance: String,
    pub ai_analysis: String,
    pub route_points: Vec<RoutePoint>,
    pub traffic_incidents: Vec<Incident>,
    pub traffic_patterns: TrafficPattern,
    pub density_levels: DensityLevels,
    pub ai_source: AnalysisSource,
    pub ai_model: String,
    pub ai_timestamp: String,
    pub optimal_timing: OptimalTiming,
}
