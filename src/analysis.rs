//! Analysis orchestrator.
//!
//! Sequences one analysis: try the configured text-generation model, and on
//! any failure fall back to the deterministic simulation. Which engine is
//! available is decided once at construction time; there is no runtime
//! availability flag and no retry.

use chrono::Utc;
use tracing::{debug, warn};

use crate::extract::extract_density_levels;
use crate::metrics::{self, DensityClassifier};
use crate::model::{AnalysisResult, AnalysisSource, Incident, RouteSummary, TrafficPattern};
use crate::narrative;
use crate::preference::RoutePreference;
use crate::traits::TextGenerator;

/// Incident descriptions embedded in the prompt, beyond which the list is
/// truncated.
const MAX_PROMPT_INCIDENTS: usize = 5;

/// Standing instructions sent with every generation request.
pub const SYSTEM_INSTRUCTIONS: &str = "\
You are an assistant specialized in analyzing traffic patterns and providing \
travel recommendations for road trips in India. Classify vehicle density at \
major intersections, highway segments, and urban streets as Low, Medium, or \
High, giving reasoning based on the route data you are shown. Recommend \
departure times with minimal congestion, and account for local peak hours \
and common congestion points in Indian cities. Format your response as HTML \
that can be directly displayed on a website.";

/// Everything one analysis needs. All fields are request-scoped borrows.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub route_summary: &'a RouteSummary,
    pub incidents: &'a [Incident],
    pub traffic_patterns: Option<&'a TrafficPattern>,
    pub preference: RoutePreference,
}

/// The analysis capability: a live text-generation model, or the built-in
/// simulation. Selected once when the planner is constructed.
#[derive(Debug, Clone)]
pub enum AnalysisEngine<T> {
    Model(T),
    Simulation,
}

impl<T: TextGenerator> AnalysisEngine<T> {
    /// Run one analysis. Never fails: any model error degrades to the
    /// simulated narrative.
    pub fn analyze(&self, request: &AnalysisRequest<'_>) -> AnalysisResult {
        if let AnalysisEngine::Model(generator) = self {
            let prompt = build_prompt(request);
            match generator.generate(&prompt, SYSTEM_INSTRUCTIONS) {
                Ok(content) => {
                    debug!(
                        model = generator.model_id(),
                        chars = content.len(),
                        "model analysis generated"
                    );
                    let density_levels = extract_density_levels(&content);
                    return AnalysisResult {
                        html_content: content,
                        density_levels,
                        source: AnalysisSource::IbmWatsonx,
                        model: Some(generator.model_id().to_string()),
                        timestamp: Utc::now().to_rfc3339(),
                        route_preference: request.preference,
                    };
                }
                Err(err) => {
                    warn!(error = %err, "text generation failed, falling back to simulation");
                }
            }
        }
        simulate(request)
    }
}

/// Deterministic fallback analysis.
fn simulate(request: &AnalysisRequest<'_>) -> AnalysisResult {
    let time_of_day_factor = request
        .traffic_patterns
        .and_then(TrafficPattern::current_congestion_factor);
    let congestion_factor =
        metrics::effective_congestion_factor(time_of_day_factor, request.route_summary);

    let classifier = DensityClassifier::PreferenceWeighted {
        preference: request.preference,
        congestion_factor,
    };
    let density_levels = classifier.classify(request.route_summary, request.incidents);

    let html_content = narrative::render(
        request.origin,
        request.destination,
        &density_levels,
        request.incidents,
        request.preference,
    );

    AnalysisResult {
        html_content,
        density_levels,
        source: AnalysisSource::Simulation,
        model: None,
        timestamp: Utc::now().to_rfc3339(),
        route_preference: request.preference,
    }
}

/// Build the user prompt embedding route facts and up to five incidents.
pub fn build_prompt(request: &AnalysisRequest<'_>) -> String {
    let summary = request.route_summary;
    let travel_time = metrics::format_travel_time(summary.travel_time_with_traffic());

    let congestion_text = if summary.travel_time_seconds > 0 {
        format!(
            "\nCongestion ratio: {:.2} (higher means more congestion)",
            metrics::congestion_ratio(summary)
        )
    } else {
        String::new()
    };

    let mut incidents_text = String::new();
    if !request.incidents.is_empty() {
        incidents_text.push_str("\nTraffic incidents along the route:\n");
        for incident in request.incidents.iter().take(MAX_PROMPT_INCIDENTS) {
            incidents_text.push_str(&format!("- {}\n", incident.description));
        }
    }

    format!(
        "Analyze traffic conditions for a route from {origin} to {destination} in India.\n\
         \n\
         Route preference: {preference} ({description})\n\
         \n\
         Route information:\n\
         - Distance: {distance:.2} km\n\
         - Estimated travel time with current traffic: {travel_time}{congestion_text}\n\
         {incidents_text}\n\
         Based on this information and the {preference} route preference, provide a detailed \
         analysis of the traffic conditions along this route. Include information about \
         congestion levels at major intersections, highway segments, and urban streets. \
         Classify each area as having Low, Medium, or High vehicle density. Also suggest the \
         best times to travel this route considering the {preference} preference. Format your \
         response as HTML that can be directly displayed on a website.",
        origin = request.origin,
        destination = request.destination,
        preference = request.preference,
        description = request.preference.description(),
        distance = summary.distance_km(),
    )
}
