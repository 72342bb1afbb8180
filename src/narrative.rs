//! Deterministic narrative renderer.
//!
//! Composes the HTML analysis shown when no language model is available.
//! Must never fail and must be byte-identical for identical inputs; it is
//! the system's fallback of last resort.

use crate::model::{DensityLevel, DensityLevels, Incident};
use crate::preference::RoutePreference;

/// Incidents shown in the narrative, beyond which the list is truncated.
const MAX_DISPLAYED_INCIDENTS: usize = 3;

/// Render the full analysis HTML for a route.
pub fn render(
    origin: &str,
    destination: &str,
    levels: &DensityLevels,
    incidents: &[Incident],
    preference: RoutePreference,
) -> String {
    let mut html = format!(
        "<p><strong>AI-powered analysis of the route from {origin} to {destination}:</strong> \
         This analysis is specifically tailored for your <strong>{preference}</strong> route preference ({description}). \
         Our system has analyzed real-time traffic data, including road sensors and satellite imagery, \
         to provide the most accurate forecast. Below is a summary of vehicle density across key segments of your journey.</p>\
         <ul class=\"density-analysis\">",
        description = preference.description(),
    );

    for (area, level) in levels.entries() {
        html.push_str(&format!(
            "<li><div class=\"analysis-item\"><span class=\"area-name\">{area}</span>\
             <p class=\"area-description\">{description}</p></div>\
             <span class=\"density-value {class}\">{level}</span></li>",
            area = area.name(),
            description = area_description(level, preference),
            class = level.css_class(),
        ));
    }
    html.push_str("</ul>");

    if !incidents.is_empty() {
        html.push_str("<h4>Traffic Incidents</h4><ul>");
        for incident in incidents.iter().take(MAX_DISPLAYED_INCIDENTS) {
            html.push_str(&format!("<li>{}</li>", incident.description));
        }
        html.push_str("</ul>");
    }

    html.push_str(&format!(
        "<h4>Recommended Travel Times for {preference} Route</h4><ul>"
    ));
    for time in preference.recommended_times() {
        html.push_str(&format!(
            "<li>{time} - Optimal for {preference} travel</li>"
        ));
    }
    html.push_str("</ul>");

    html
}

/// Per-level, per-preference canned description for one density category.
fn area_description(level: DensityLevel, preference: RoutePreference) -> &'static str {
    match level {
        DensityLevel::Low => match preference {
            RoutePreference::Scenic => "Excellent for scenic driving with minimal congestion.",
            RoutePreference::EcoFriendly => {
                "Optimal for fuel-efficient driving with consistent speeds."
            }
            _ => "Expect smooth travel through these areas with minimal congestion.",
        },
        DensityLevel::Medium => match preference {
            RoutePreference::LowTraffic => {
                "Moderate traffic, but still better than high-congestion routes."
            }
            RoutePreference::Fastest => "Minor delays possible, but overall good travel time.",
            _ => "Minor delays are possible due to moderate traffic flow.",
        },
        DensityLevel::High => match preference {
            RoutePreference::Fastest => {
                "Significant delays likely; consider alternative departure times for faster travel."
            }
            RoutePreference::LowTraffic => {
                "High congestion - this route may not be optimal for avoiding traffic."
            }
            _ => "Significant delays are likely; consider alternative routes if possible.",
        },
    }
}
