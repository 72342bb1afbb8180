//! Route metrics calculator.
//!
//! Turns a raw route summary and incident list into congestion ratios,
//! qualitative density classifications, emissions estimates, and scenic
//! ratings. The three density classifiers are deliberately distinct
//! strategies with different inputs and thresholds; they serve different
//! call paths and must not be merged (see DESIGN.md).

use crate::model::{DensityLevel, DensityLevels, Incident, RoadArea, RouteSummary};
use crate::preference::RoutePreference;

/// Average CO2 emission rate for a car, in grams per km.
const BASE_EMISSION_RATE_G_PER_KM: f64 = 120.0;

/// Congestion ratio: travel time with traffic over travel time without.
///
/// Defined as 1.0 (neutral) when the traffic-free time is zero, so an
/// all-empty summary never divides by zero.
pub fn congestion_ratio(summary: &RouteSummary) -> f64 {
    if summary.travel_time_seconds > 0 {
        f64::from(summary.travel_time_with_traffic()) / f64::from(summary.travel_time_seconds)
    } else {
        1.0
    }
}

/// Baseline congestion classifier: <1.1 Low, <1.3 Medium, else High.
pub fn congestion_level(ratio: f64) -> DensityLevel {
    if ratio < 1.1 {
        DensityLevel::Low
    } else if ratio < 1.3 {
        DensityLevel::Medium
    } else {
        DensityLevel::High
    }
}

/// Scalar congestion factor feeding the preference-weighted classifier.
///
/// Starts from the time-of-day factor (or 0.5 when no pattern is known) and
/// is raised to `(ratio - 1) * 2` when the summary carries a real traffic
/// signal.
pub fn effective_congestion_factor(time_of_day_factor: Option<f64>, summary: &RouteSummary) -> f64 {
    let mut factor = time_of_day_factor.unwrap_or(0.5);
    if summary.travel_time_seconds > 0 && summary.travel_time_with_traffic() > 0 {
        factor = factor.max((congestion_ratio(summary) - 1.0) * 2.0);
    }
    factor
}

/// The three density-classification strategies.
///
/// `Baseline` rates every area with the plain congestion-ratio thresholds
/// (areas are not distinguished under it). `IncidentAware` weighs the
/// incident count per area. `PreferenceWeighted` multiplies a scalar
/// congestion factor by per-preference area factors and then lets incident
/// keywords force individual areas to High.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensityClassifier {
    Baseline,
    IncidentAware,
    PreferenceWeighted {
        preference: RoutePreference,
        congestion_factor: f64,
    },
}

impl DensityClassifier {
    pub fn classify(&self, summary: &RouteSummary, incidents: &[Incident]) -> DensityLevels {
        match *self {
            DensityClassifier::Baseline => {
                DensityLevels::uniform(congestion_level(congestion_ratio(summary)))
            }
            DensityClassifier::IncidentAware => classify_incident_aware(summary, incidents),
            DensityClassifier::PreferenceWeighted {
                preference,
                congestion_factor,
            } => classify_preference_weighted(preference, congestion_factor, incidents),
        }
    }
}

fn classify_incident_aware(summary: &RouteSummary, incidents: &[Incident]) -> DensityLevels {
    let ratio = congestion_ratio(summary);
    let incident_count = incidents.len();

    // Major intersections are most affected by incidents.
    let major_intersections = if incident_count > 2 || ratio > 1.5 {
        DensityLevel::High
    } else if incident_count > 0 || ratio > 1.2 {
        DensityLevel::Medium
    } else {
        DensityLevel::Low
    };

    // Highways are less affected by congestion but more by incidents.
    let highway_segments = if incident_count > 1 && ratio > 1.3 {
        DensityLevel::High
    } else if incident_count > 0 || ratio > 1.1 {
        DensityLevel::Medium
    } else {
        DensityLevel::Low
    };

    // Urban streets track congestion alone.
    let urban_streets = if ratio > 1.4 {
        DensityLevel::High
    } else if ratio > 1.2 {
        DensityLevel::Medium
    } else {
        DensityLevel::Low
    };

    DensityLevels {
        major_intersections,
        highway_segments,
        urban_streets,
    }
}

fn classify_preference_weighted(
    preference: RoutePreference,
    congestion_factor: f64,
    incidents: &[Incident],
) -> DensityLevels {
    let factors = preference.adjustment_factors();

    let intersection = congestion_factor * factors.intersection;
    let major_intersections = if intersection > 0.7 {
        DensityLevel::High
    } else if intersection > 0.4 {
        DensityLevel::Medium
    } else {
        DensityLevel::Low
    };

    // Highways never classify High under this strategy; incident keyword
    // overrides below are the only way there.
    let highway = congestion_factor * factors.highway;
    let highway_segments = if highway > 0.6 {
        DensityLevel::Medium
    } else {
        DensityLevel::Low
    };

    let urban = congestion_factor * factors.urban;
    let urban_streets = if urban > 0.6 {
        DensityLevel::High
    } else if urban > 0.3 {
        DensityLevel::Medium
    } else {
        DensityLevel::Low
    };

    let mut levels = DensityLevels {
        major_intersections,
        highway_segments,
        urban_streets,
    };

    // Each incident forces exactly one area to High, chosen by keyword and
    // defaulting to urban streets, in incident order.
    for incident in incidents {
        let text = incident.description.to_lowercase();
        let area = if text.contains("junction") || text.contains("intersection") {
            RoadArea::MajorIntersections
        } else if text.contains("highway") || text.contains("freeway") {
            RoadArea::HighwaySegments
        } else {
            RoadArea::UrbanStreets
        };
        levels.set(area, DensityLevel::High);
    }

    levels
}

/// Fuel-efficiency rating derived from the emission factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EfficiencyRating {
    High,
    Medium,
    Low,
}

/// CO2 emissions estimate for a route.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmissionsEstimate {
    pub total_emissions_g: i64,
    pub emissions_kg: f64,
    pub efficiency_rating: EfficiencyRating,
}

/// Estimate emissions from distance and traffic conditions. Heavier traffic
/// raises the effective emission factor: `1 + (trafficFactor - 1) * 0.5`.
pub fn emissions_estimate(summary: &RouteSummary) -> EmissionsEstimate {
    let traffic_factor = if summary.travel_time_seconds > 0 {
        f64::from(summary.travel_time_with_traffic()) / f64::from(summary.travel_time_seconds)
    } else {
        1.0
    };
    let emission_factor = 1.0 + (traffic_factor - 1.0) * 0.5;
    let total_emissions = summary.distance_km() * BASE_EMISSION_RATE_G_PER_KM * emission_factor;

    let efficiency_rating = if emission_factor < 1.2 {
        EfficiencyRating::High
    } else if emission_factor < 1.5 {
        EfficiencyRating::Medium
    } else {
        EfficiencyRating::Low
    };

    EmissionsEstimate {
        total_emissions_g: total_emissions as i64,
        emissions_kg: (total_emissions / 1000.0 * 100.0).round() / 100.0,
        efficiency_rating,
    }
}

/// Scenic quality of a route. Non-scenic preferences always rate Standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScenicRating {
    Standard,
    Moderate,
    Good,
    Excellent,
}

pub fn scenic_rating(route_type: RoutePreference, summary: &RouteSummary) -> ScenicRating {
    if route_type != RoutePreference::Scenic {
        return ScenicRating::Standard;
    }
    let distance_km = summary.distance_km();
    if distance_km > 100.0 {
        ScenicRating::Excellent
    } else if distance_km > 50.0 {
        ScenicRating::Good
    } else {
        ScenicRating::Moderate
    }
}

/// Format seconds as "H hour(s) M minute(s)", dropping the hour part when
/// zero.
pub fn format_travel_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let minute_label = if minutes == 1 { "minute" } else { "minutes" };
    if hours > 0 {
        let hour_label = if hours == 1 { "hour" } else { "hours" };
        format!("{hours} {hour_label} {minutes} {minute_label}")
    } else {
        format!("{minutes} {minute_label}")
    }
}

/// Format an hour of day (0..23) in AM/PM form.
pub fn format_hour(hour: u32) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        1..=11 => format!("{hour}:00 AM"),
        12 => "12:00 PM".to_string(),
        _ => format!("{}:00 PM", hour - 12),
    }
}

/// Full metrics bundle for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMetrics {
    pub congestion_ratio: f64,
    pub congestion_level: DensityLevel,
    pub density_levels: DensityLevels,
    pub emissions: EmissionsEstimate,
    pub scenic_rating: ScenicRating,
    pub travel_time_label: String,
    pub distance_km: f64,
}

/// Derive all metrics from one route's summary and incident list.
///
/// Density levels use the incident-aware classifier; the overall
/// `congestion_level` uses the baseline thresholds.
pub fn compute_metrics(
    summary: &RouteSummary,
    incidents: &[Incident],
    route_type: RoutePreference,
) -> RouteMetrics {
    let ratio = congestion_ratio(summary);
    RouteMetrics {
        congestion_ratio: ratio,
        congestion_level: congestion_level(ratio),
        density_levels: DensityClassifier::IncidentAware.classify(summary, incidents),
        emissions: emissions_estimate(summary),
        scenic_rating: scenic_rating(route_type, summary),
        travel_time_label: format_travel_time(summary.travel_time_with_traffic()),
        distance_km: (summary.distance_km() * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(without: u32, with: u32) -> RouteSummary {
        RouteSummary {
            distance_meters: 10_000.0,
            travel_time_seconds: without,
            travel_time_with_traffic_seconds: Some(with),
        }
    }

    #[test]
    fn zero_travel_time_yields_neutral_ratio() {
        assert_eq!(congestion_ratio(&RouteSummary::default()), 1.0);
        assert_eq!(congestion_ratio(&summary(0, 3600)), 1.0);
    }

    #[test]
    fn baseline_thresholds_at_boundaries() {
        for (ratio, expected) in [
            (1.0, DensityLevel::Low),
            (1.09, DensityLevel::Low),
            (1.1, DensityLevel::Medium),
            (1.29, DensityLevel::Medium),
            (1.3, DensityLevel::High),
            (2.0, DensityLevel::High),
        ] {
            assert_eq!(congestion_level(ratio), expected, "ratio {ratio}");
        }
    }

    #[test]
    fn travel_time_formatting_pluralizes() {
        assert_eq!(format_travel_time(60), "1 minute");
        assert_eq!(format_travel_time(120), "2 minutes");
        assert_eq!(format_travel_time(3660), "1 hour 1 minute");
        assert_eq!(format_travel_time(57600), "16 hours 0 minutes");
        assert_eq!(format_travel_time(0), "0 minutes");
    }

    #[test]
    fn hour_formatting_handles_noon_and_midnight() {
        assert_eq!(format_hour(0), "12:00 AM");
        assert_eq!(format_hour(5), "5:00 AM");
        assert_eq!(format_hour(12), "12:00 PM");
        assert_eq!(format_hour(18), "6:00 PM");
    }
}
