//! Error taxonomy for the planner.
//!
//! Only two failures are surfaced to the caller: missing request fields and
//! failed geocoding. Every other upstream failure is absorbed locally by
//! substituting an empty or default value, or by falling back to the
//! simulated analysis.

/// Failure talking to an external provider (transport, non-2xx status, or
/// an unexpected response shape).
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
}

/// Hard failures of a trip-planning request.
#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("could not geocode location: {0}")]
    GeocodingFailed(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
