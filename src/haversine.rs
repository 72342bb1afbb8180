//! Great-circle travel estimates (fallback when the router is unreachable).
//!
//! Ignores the road network, so estimates are rough, but it is always
//! available and keeps a degraded request serviceable.

/// Average driving speed assumption for Indian traffic.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two (lat, lon) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Estimated driving time between two points at the given average speed.
pub fn estimated_travel_seconds(from: (f64, f64), to: (f64, f64), speed_kmh: f64) -> u32 {
    let hours = haversine_km(from, to) / speed_kmh;
    (hours * 3600.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let dist = haversine_km((28.6139, 77.2090), (28.6139, 77.2090));
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_known_distance() {
        // Delhi (28.61, 77.21) to Mumbai (19.08, 72.88), ~1150 km direct
        let dist = haversine_km((28.6139, 77.2090), (19.0760, 72.8777));
        assert!(
            dist > 1100.0 && dist < 1200.0,
            "Delhi to Mumbai should be ~1150km, got {}",
            dist
        );
    }

    #[test]
    fn test_reasonable_travel_time() {
        // Roughly 0.09 degrees of latitude is ~10 km; at 40 km/h that is
        // about 15 minutes.
        let seconds = estimated_travel_seconds((28.0, 77.0), (28.09, 77.0), DEFAULT_SPEED_KMH);
        assert!(
            (800..1000).contains(&seconds),
            "expected ~900 seconds, got {}",
            seconds
        );
    }
}
