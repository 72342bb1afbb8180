//! Density extractor.
//!
//! Recovers the three canonical density categories from unstructured
//! model output. Three pattern strategies are tried in order; all matches
//! are merged with last-match-per-area wins, and any category left
//! unmatched falls back to a hardcoded default. This never fails.

use regex::Regex;

use crate::model::{DensityLevel, DensityLevels, RoadArea};

const AREA_GROUP: &str = "Major Intersections|Highway Segments|Urban Streets";
const LEVEL_GROUP: &str = "Low|Medium|High";

/// Extract density levels from free text.
///
/// Patterns, in order: "Area: Level" (also dash/space separated),
/// "Area ... Level density", and "Level density ... Area". Capture order
/// differs between them, so each captured pair is resolved by checking
/// which side names a known area.
pub fn extract_density_levels(text: &str) -> DensityLevels {
    let patterns = [
        format!(r"(?i)({AREA_GROUP})[:\s-]\s*({LEVEL_GROUP})"),
        format!(r"(?i)({AREA_GROUP}).*?({LEVEL_GROUP})\s*density"),
        format!(r"(?i)({LEVEL_GROUP})\s*density.*?({AREA_GROUP})"),
    ];

    let mut extracted: [Option<DensityLevel>; 3] = [None, None, None];

    for pattern in &patterns {
        // The patterns are fixed; a compile failure just means this
        // strategy contributes nothing.
        let Ok(regex) = Regex::new(pattern) else {
            continue;
        };
        for captures in regex.captures_iter(text) {
            let (Some(first), Some(second)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            if let Some((area, level)) = resolve_pair(first.as_str(), second.as_str()) {
                extracted[area_index(area)] = Some(level);
            }
        }
    }

    let defaults = DensityLevels::defaults();
    let mut levels = defaults;
    for area in RoadArea::ALL {
        levels.set(area, extracted[area_index(area)].unwrap_or(defaults.get(area)));
    }
    levels
}

/// Resolve a captured pair into (area, level), accepting either order.
fn resolve_pair(first: &str, second: &str) -> Option<(RoadArea, DensityLevel)> {
    match (RoadArea::parse(first), DensityLevel::parse(second)) {
        (Some(area), Some(level)) => Some((area, level)),
        _ => match (RoadArea::parse(second), DensityLevel::parse(first)) {
            (Some(area), Some(level)) => Some((area, level)),
            _ => None,
        },
    }
}

fn area_index(area: RoadArea) -> usize {
    match area {
        RoadArea::MajorIntersections => 0,
        RoadArea::HighwaySegments => 1,
        RoadArea::UrbanStreets => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_defaults() {
        assert_eq!(extract_density_levels(""), DensityLevels::defaults());
    }

    #[test]
    fn colon_separated_pairs_are_extracted() {
        let levels = extract_density_levels(
            "Major Intersections: High\nHighway Segments- Medium\nUrban Streets: Low",
        );
        assert_eq!(levels.major_intersections, DensityLevel::High);
        assert_eq!(levels.highway_segments, DensityLevel::Medium);
        assert_eq!(levels.urban_streets, DensityLevel::Low);
    }

    #[test]
    fn reversed_capture_order_is_handled() {
        let levels =
            extract_density_levels("We expect High density around the Major Intersections today.");
        assert_eq!(levels.major_intersections, DensityLevel::High);
        // Unmatched categories keep their defaults.
        assert_eq!(levels.highway_segments, DensityLevel::Low);
        assert_eq!(levels.urban_streets, DensityLevel::High);
    }
}
