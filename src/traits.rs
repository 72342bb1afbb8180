//! Provider seams for the trip planner.
//!
//! These are intentionally minimal. Concrete adapters (`tomtom`,
//! `nominatim`, `watsonx`) implement them against real services; tests
//! implement them with in-process fakes.

use crate::error::ProviderError;
use crate::model::{BoundingBox, FetchedRoute, GeocodedLocation, Incident};

/// Resolves a free-text location to coordinates.
///
/// Returns `None` both when the location is unknown and when the lookup
/// itself fails; either way the request cannot proceed.
pub trait Geocoder {
    fn geocode(&self, location: &str) -> Option<GeocodedLocation>;
}

/// Fetches a route with traffic information between two coordinates.
///
/// `routing_param` is the provider-specific routing algorithm name produced
/// by [`crate::preference::RoutePreference::routing_param`].
pub trait Router {
    fn route(
        &self,
        origin: (f64, f64),
        destination: (f64, f64),
        routing_param: &str,
    ) -> Result<FetchedRoute, ProviderError>;
}

/// Lists traffic incidents inside a bounding box.
///
/// Returns an empty list on any non-success; incident lookup is never a
/// hard failure.
pub trait IncidentProvider {
    fn incidents_in(&self, bbox: &BoundingBox) -> Vec<Incident>;
}

/// Opaque prompt-in/text-out generation service.
pub trait TextGenerator {
    fn generate(&self, prompt: &str, system_instructions: &str) -> Result<String, ProviderError>;

    /// Identifier of the underlying model, reported in analysis results.
    fn model_id(&self) -> &str;
}
