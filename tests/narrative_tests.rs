//! Narrative renderer tests: determinism and structural content.

use trip_planner::model::{DensityLevel, DensityLevels, Incident};
use trip_planner::narrative::render;
use trip_planner::preference::RoutePreference;

fn mixed_levels() -> DensityLevels {
    DensityLevels {
        major_intersections: DensityLevel::High,
        highway_segments: DensityLevel::Medium,
        urban_streets: DensityLevel::Low,
    }
}

#[test]
fn identical_inputs_render_byte_identical_output() {
    let incidents = vec![Incident::new("Accident on NH-48 near Surat")];
    let first = render(
        "Delhi",
        "Mumbai",
        &mixed_levels(),
        &incidents,
        RoutePreference::Fastest,
    );
    let second = render(
        "Delhi",
        "Mumbai",
        &mixed_levels(),
        &incidents,
        RoutePreference::Fastest,
    );
    assert_eq!(first, second);
}

#[test]
fn intro_names_route_and_preference() {
    let html = render(
        "Jaipur",
        "Udaipur",
        &DensityLevels::defaults(),
        &[],
        RoutePreference::Scenic,
    );
    assert!(html.contains("route from Jaipur to Udaipur"));
    assert!(html.contains("<strong>scenic</strong>"));
    assert!(html.contains(RoutePreference::Scenic.description()));
}

#[test]
fn every_density_category_is_listed_with_its_level() {
    let html = render(
        "Delhi",
        "Mumbai",
        &mixed_levels(),
        &[],
        RoutePreference::EcoFriendly,
    );
    assert!(html.contains("Major Intersections"));
    assert!(html.contains("Highway Segments"));
    assert!(html.contains("Urban Streets"));
    assert!(html.contains("<span class=\"density-value high\">High</span>"));
    assert!(html.contains("<span class=\"density-value medium\">Medium</span>"));
    assert!(html.contains("<span class=\"density-value low\">Low</span>"));
}

#[test]
fn incident_list_is_capped_at_three() {
    let incidents: Vec<Incident> = (1..=5)
        .map(|i| Incident::new(format!("Incident number {i}")))
        .collect();
    let html = render(
        "Delhi",
        "Mumbai",
        &DensityLevels::defaults(),
        &incidents,
        RoutePreference::Fastest,
    );
    assert!(html.contains("<h4>Traffic Incidents</h4>"));
    assert!(html.contains("Incident number 3"));
    assert!(!html.contains("Incident number 4"));
}

#[test]
fn no_incident_block_without_incidents() {
    let html = render(
        "Delhi",
        "Mumbai",
        &DensityLevels::defaults(),
        &[],
        RoutePreference::Fastest,
    );
    assert!(!html.contains("Traffic Incidents"));
}

#[test]
fn recommended_times_follow_the_preference_table() {
    for preference in RoutePreference::ALL {
        let html = render(
            "Delhi",
            "Mumbai",
            &DensityLevels::defaults(),
            &[],
            preference,
        );
        assert!(html.contains(&format!(
            "Recommended Travel Times for {preference} Route"
        )));
        for time in preference.recommended_times() {
            assert!(
                html.contains(&format!("<li>{time} - Optimal for {preference} travel</li>")),
                "missing {time} for {preference}"
            );
        }
    }
}

#[test]
fn descriptions_vary_by_preference_at_same_level() {
    let high = DensityLevels::uniform(DensityLevel::High);
    let fastest = render("A", "B", &high, &[], RoutePreference::Fastest);
    let low_traffic = render("A", "B", &high, &[], RoutePreference::LowTraffic);
    assert!(fastest.contains("consider alternative departure times"));
    assert!(low_traffic.contains("may not be optimal for avoiding traffic"));
}
