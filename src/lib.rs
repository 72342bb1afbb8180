//! trip-planner core
//!
//! Heuristic traffic analysis and departure planning for Indian road trips:
//! congestion classification, time-of-day patterns, and a deterministic
//! narrative fallback behind pluggable provider seams.

pub mod analysis;
pub mod error;
pub mod extract;
pub mod haversine;
pub mod metrics;
pub mod model;
pub mod narrative;
pub mod nominatim;
pub mod patterns;
pub mod preference;
pub mod tomtom;
pub mod traits;
pub mod trip;
pub mod watsonx;
