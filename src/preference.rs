//! Route preference resolver.
//!
//! Pure data lookup: every preference maps to a complete set of routing
//! parameters, adjustment factors, descriptions, and timing tables, and any
//! unrecognized input resolves to the `Fastest` tables rather than an error.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::model::{DepartureAlternative, Rating};

/// User-selected optimization goal for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePreference {
    Fastest,
    EcoFriendly,
    LowTraffic,
    Scenic,
}

/// Fixed per-preference multipliers used by the preference-weighted
/// density classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentFactors {
    pub intersection: f64,
    pub highway: f64,
    pub urban: f64,
}

impl RoutePreference {
    pub const ALL: [RoutePreference; 4] = [
        RoutePreference::Fastest,
        RoutePreference::EcoFriendly,
        RoutePreference::LowTraffic,
        RoutePreference::Scenic,
    ];

    /// Parse a preference string; unrecognized values resolve to `Fastest`.
    pub fn parse(text: &str) -> Self {
        match text {
            "eco-friendly" => RoutePreference::EcoFriendly,
            "low-traffic" => RoutePreference::LowTraffic,
            "scenic" => RoutePreference::Scenic,
            _ => RoutePreference::Fastest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePreference::Fastest => "fastest",
            RoutePreference::EcoFriendly => "eco-friendly",
            RoutePreference::LowTraffic => "low-traffic",
            RoutePreference::Scenic => "scenic",
        }
    }

    /// Provider-specific routing algorithm for this preference.
    ///
    /// "shortest" stands in for both low-traffic (shorter routes tend to
    /// avoid congested corridors) and scenic routing.
    pub fn routing_param(&self) -> &'static str {
        match self {
            RoutePreference::Fastest => "fastest",
            RoutePreference::EcoFriendly => "eco",
            RoutePreference::LowTraffic => "shortest",
            RoutePreference::Scenic => "shortest",
        }
    }

    pub fn adjustment_factors(&self) -> AdjustmentFactors {
        match self {
            RoutePreference::Fastest => AdjustmentFactors {
                intersection: 1.2,
                highway: 0.8,
                urban: 1.0,
            },
            RoutePreference::EcoFriendly => AdjustmentFactors {
                intersection: 0.9,
                highway: 1.0,
                urban: 0.8,
            },
            RoutePreference::LowTraffic => AdjustmentFactors {
                intersection: 0.7,
                highway: 0.9,
                urban: 0.6,
            },
            RoutePreference::Scenic => AdjustmentFactors {
                intersection: 1.0,
                highway: 1.1,
                urban: 1.2,
            },
        }
    }

    /// Short description used in prompts and narrative intros.
    pub fn description(&self) -> &'static str {
        match self {
            RoutePreference::Fastest => "optimized for minimal travel time",
            RoutePreference::EcoFriendly => "optimized for fuel efficiency and lower emissions",
            RoutePreference::LowTraffic => "avoiding high-traffic areas",
            RoutePreference::Scenic => "featuring pleasant views and interesting landmarks",
        }
    }

    /// Human-readable description of a fetched route of this type.
    pub fn route_description(&self, distance_km: f64) -> String {
        match self {
            RoutePreference::Fastest => {
                format!("Fastest route covering {distance_km:.1}km in optimal time")
            }
            RoutePreference::EcoFriendly => {
                "Eco-friendly route optimized for fuel efficiency and lower emissions".to_string()
            }
            RoutePreference::LowTraffic => {
                "Route avoiding high-traffic areas for smoother journey".to_string()
            }
            RoutePreference::Scenic => {
                "Scenic route with pleasant views and interesting landmarks".to_string()
            }
        }
    }

    /// Recommended departure times shown in the narrative fallback.
    pub fn recommended_times(&self) -> [&'static str; 4] {
        match self {
            RoutePreference::Fastest => ["6:00 AM", "7:30 AM", "10:30 AM", "2:00 PM"],
            RoutePreference::EcoFriendly => ["8:30 AM", "11:00 AM", "2:30 PM", "9:00 PM"],
            RoutePreference::LowTraffic => ["6:30 AM", "11:30 AM", "2:30 PM", "8:30 PM"],
            RoutePreference::Scenic => ["7:00 AM", "9:00 AM", "4:00 PM", "6:00 PM"],
        }
    }

    /// One-paragraph timing narrative for this preference.
    pub fn timing_recommendation(&self) -> &'static str {
        match self {
            RoutePreference::Fastest => {
                "For the fastest route, avoid peak hours (7-10 AM and 5-8 PM) when traffic is heaviest."
            }
            RoutePreference::EcoFriendly => {
                "For an eco-friendly route with lower emissions, travel during off-peak hours when engines run more efficiently."
            }
            RoutePreference::LowTraffic => {
                "To avoid traffic congestion, plan your departure outside of peak commuting hours."
            }
            RoutePreference::Scenic => {
                "For a scenic route, travel during daylight hours to enjoy the views. Golden hours provide the best lighting."
            }
        }
    }

    /// Four rated departure alternatives for this preference.
    pub fn alternatives(&self) -> Vec<DepartureAlternative> {
        let table: [(&str, &str, Rating); 4] = match self {
            RoutePreference::Fastest => [
                (
                    "6:00 AM",
                    "Early morning departure - minimal traffic, fastest travel time",
                    Rating::Optimal,
                ),
                (
                    "10:30 AM",
                    "Mid-morning - light traffic, good travel conditions",
                    Rating::Good,
                ),
                (
                    "2:00 PM",
                    "Early afternoon - moderate traffic, decent travel time",
                    Rating::Good,
                ),
                (
                    "8:00 AM",
                    "Peak morning rush - heavy traffic, longer travel time",
                    Rating::Avoid,
                ),
            ],
            RoutePreference::EcoFriendly => [
                (
                    "9:30 AM",
                    "Post rush hour - steady traffic flow, better fuel efficiency",
                    Rating::Optimal,
                ),
                (
                    "2:30 PM",
                    "Afternoon travel - consistent speeds, lower emissions",
                    Rating::Optimal,
                ),
                (
                    "11:00 PM",
                    "Late night - free-flowing traffic, minimal stops",
                    Rating::Good,
                ),
                (
                    "7:30 AM",
                    "Rush hour - stop-and-go traffic increases emissions",
                    Rating::Avoid,
                ),
            ],
            RoutePreference::LowTraffic => [
                (
                    "5:30 AM",
                    "Very early departure - roads are clear, no congestion",
                    Rating::Optimal,
                ),
                (
                    "11:00 AM",
                    "Late morning - traffic has cleared, smooth journey",
                    Rating::Optimal,
                ),
                (
                    "9:00 PM",
                    "Evening departure - rush hour has ended",
                    Rating::Good,
                ),
                (
                    "6:00 PM",
                    "Evening rush hour - expect heavy congestion",
                    Rating::Avoid,
                ),
            ],
            RoutePreference::Scenic => [
                (
                    "7:00 AM",
                    "Golden hour departure - beautiful sunrise views along the route",
                    Rating::Optimal,
                ),
                (
                    "4:00 PM",
                    "Afternoon departure - good lighting for scenic photography",
                    Rating::Optimal,
                ),
                (
                    "11:00 AM",
                    "Mid-morning - clear visibility, pleasant weather",
                    Rating::Good,
                ),
                (
                    "9:00 PM",
                    "Night travel - limited scenic visibility",
                    Rating::Avoid,
                ),
            ],
        };

        table
            .into_iter()
            .map(|(time, description, rating)| DepartureAlternative {
                time: time.to_string(),
                description: description.to_string(),
                rating,
            })
            .collect()
    }
}

impl Default for RoutePreference {
    fn default() -> Self {
        RoutePreference::Fastest
    }
}

impl std::fmt::Display for RoutePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RoutePreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RoutePreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(RoutePreference::parse(&text))
    }
}
