//! Time-of-day congestion model.
//!
//! Produces a synthetic 24-hour congestion-factor curve from a fixed
//! diurnal baseline plus bounded random jitter, used when no live pattern
//! data exists. The jitter RNG is owned by the generator so tests can seed
//! it and assert exact output.

use chrono::{Local, Timelike};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::model::{ChartData, HourlyCongestion, TrafficPattern};

/// Baseline (congestion factor, label) per hour 0..23: trough in the small
/// hours, morning peak at 8, midday plateau, evening peak at 18.
const BASE_HOURLY: [(f64, &str); 24] = [
    (0.2, "Very Fast"),
    (0.1, "Very Fast"),
    (0.1, "Very Fast"),
    (0.1, "Very Fast"),
    (0.2, "Very Fast"),
    (0.3, "Fast"),
    (0.6, "Moderate"),
    (0.8, "Slow"),
    (0.9, "Very Slow"),
    (0.8, "Slow"),
    (0.6, "Moderate"),
    (0.5, "Moderate"),
    (0.5, "Moderate"),
    (0.5, "Moderate"),
    (0.5, "Moderate"),
    (0.6, "Moderate"),
    (0.7, "Slow"),
    (0.9, "Very Slow"),
    (1.0, "Very Slow"),
    (0.8, "Slow"),
    (0.6, "Moderate"),
    (0.5, "Moderate"),
    (0.4, "Fast"),
    (0.3, "Fast"),
];

/// Jitter applied per hour, in congestion-factor units.
const JITTER: f64 = 0.1;

/// Number of consecutive hours highlighted from the current hour.
const HIGHLIGHT_SPAN: u32 = 6;

/// Generates per-request traffic patterns. This never fails.
#[derive(Debug, Clone)]
pub struct TrafficPatternGenerator {
    rng: SmallRng,
}

impl TrafficPatternGenerator {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate a fresh 24-hour pattern.
    ///
    /// `current_hour` defaults to the wall-clock hour. Each factor gets
    /// independent uniform jitter in [-0.1, +0.1] and is clamped to
    /// [0.1, 1.0].
    pub fn generate(&mut self, current_hour: Option<u32>) -> TrafficPattern {
        let current_hour = current_hour.unwrap_or_else(|| Local::now().hour()) % 24;

        let hourly_data: Vec<HourlyCongestion> = BASE_HOURLY
            .iter()
            .enumerate()
            .map(|(hour, (base, label))| {
                let jitter = self.rng.gen_range(-JITTER..=JITTER);
                HourlyCongestion {
                    hour: hour as u32,
                    congestion_factor: (base + jitter).clamp(0.1, 1.0),
                    travel_time: (*label).to_string(),
                }
            })
            .collect();

        let highlighted_hours = (0..HIGHLIGHT_SPAN)
            .map(|offset| (current_hour + offset) % 24)
            .collect();

        let chart_data = ChartData {
            hours: hourly_data.iter().map(|entry| entry.hour).collect(),
            congestion: hourly_data
                .iter()
                .map(|entry| entry.congestion_factor)
                .collect(),
        };

        TrafficPattern {
            hourly_data,
            current_hour,
            highlighted_hours,
            chart_data,
        }
    }
}

impl Default for TrafficPatternGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_yields_24_clamped_entries() {
        let mut generator = TrafficPatternGenerator::seeded(7);
        for _ in 0..50 {
            let pattern = generator.generate(Some(12));
            assert_eq!(pattern.hourly_data.len(), 24);
            for entry in &pattern.hourly_data {
                assert!(
                    (0.1..=1.0).contains(&entry.congestion_factor),
                    "factor {} out of range at hour {}",
                    entry.congestion_factor,
                    entry.hour
                );
            }
        }
    }

    #[test]
    fn highlighted_hours_wrap_past_midnight() {
        let mut generator = TrafficPatternGenerator::seeded(0);
        let pattern = generator.generate(Some(22));
        assert_eq!(pattern.highlighted_hours, vec![22, 23, 0, 1, 2, 3]);
        assert!(pattern.highlighted_hours.iter().all(|hour| *hour < 24));
    }

    #[test]
    fn seeded_generators_agree() {
        let mut a = TrafficPatternGenerator::seeded(42);
        let mut b = TrafficPatternGenerator::seeded(42);
        assert_eq!(a.generate(Some(9)), b.generate(Some(9)));
    }

    #[test]
    fn successive_calls_jitter_independently() {
        let mut generator = TrafficPatternGenerator::seeded(42);
        let first = generator.generate(Some(9));
        let second = generator.generate(Some(9));
        assert_ne!(first.hourly_data, second.hourly_data);
    }

    #[test]
    fn optimal_hour_is_a_small_hours_trough() {
        let mut generator = TrafficPatternGenerator::seeded(3);
        let pattern = generator.generate(Some(0));
        let optimal = pattern.optimal_hour().unwrap();
        // Baseline troughs at 1-3 AM (0.1); jitter cannot push another hour
        // below them by more than the jitter span.
        assert!(optimal.congestion_factor <= 0.2 + JITTER);
    }
}
