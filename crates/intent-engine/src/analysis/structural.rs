// ABOUTME: Lap-based structural detector for interval, pyramid and hill-repeat sessions
// ABOUTME: Locates the rest-separated work block among manual laps and names its pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Candidate, Segment};
use crate::config::StructuralConfig;
use crate::statistics::{mean, median};
use intent_core::models::{
    Confidence, HillEvidence, HillStructure, SeriesPattern, SeriesStructure, WorkoutStructure,
};
use tracing::debug;

/// Interval distances under this are rounded to 50 m, longer ones to 100 m
const FINE_ROUNDING_LIMIT: f64 = 1000.0;

/// Structural detector over manual laps
///
/// Patterns are tried in order: equal-distance repeats with consistent rest,
/// pyramid, irregular rest-separated intervals, then hill repeats when no lap
/// boundary carries a meaningful rest.
pub struct StructuralDetector;

impl StructuralDetector {
    /// Detect lap structure
    ///
    /// Returns `None` when fewer than two laps exist or no pattern is found; the
    /// caller then analyzes the laps statistically.
    #[must_use]
    pub fn detect(laps: &[Segment], config: &StructuralConfig) -> Option<Candidate> {
        if laps.len() < 2 {
            return None;
        }

        Self::detect_intervals(laps, config).or_else(|| Self::detect_hill_repeats(laps, config))
    }

    fn detect_intervals(laps: &[Segment], config: &StructuralConfig) -> Option<Candidate> {
        let block = Self::work_block(laps, config)?;
        if block.len() < config.min_interval_repetitions {
            debug!(
                laps = block.len(),
                "rest-separated block too short for an interval session"
            );
            return None;
        }

        // Every lap but the last should end in a recovery gap
        let boundaries = &block[..block.len() - 1];
        let rests: Vec<f64> = boundaries
            .iter()
            .map(|lap| lap.rest_seconds)
            .filter(|rest| *rest >= config.rest_gap_seconds)
            .collect();
        let rested_share = rests.len() as f64 / boundaries.len() as f64;
        if rested_share < config.min_rested_share {
            debug!(
                rested_share,
                "isolated stops only, not an interval session"
            );
            return None;
        }

        let raw_distances: Vec<f64> = block.iter().map(|lap| lap.distance).collect();
        let distances: Vec<f64> = raw_distances
            .iter()
            .map(|distance| round_rep_distance(*distance))
            .collect();
        let paces: Vec<f64> = block.iter().map(|lap| lap.pace).collect();
        let avg_rest = mean(&rests);
        let mut series = SeriesStructure {
            pattern: SeriesPattern::Mixed,
            repetitions: block.len(),
            distances,
            rep_distance: None,
            avg_rest_seconds: (!rests.is_empty()).then_some(avg_rest),
            avg_work_pace: Some(mean(&paces)),
        };

        let all_rested = rests.len() == boundaries.len();
        if all_rested
            && Self::equal_distances(&raw_distances, config)
            && Self::consistent_rests(&rests, config)
        {
            series.pattern = SeriesPattern::Repeats;
            series.rep_distance = median(&raw_distances).map(round_rep_distance);
            debug!(
                repetitions = series.repetitions,
                rep_distance = ?series.rep_distance,
                "equal-distance repeats detected"
            );
            return Some(Candidate::new(
                WorkoutStructure::Series(series),
                Confidence::High,
            ));
        }

        if Self::is_pyramid(&raw_distances, config) {
            series.pattern = SeriesPattern::Pyramid;
            debug!(distances = ?series.distances, "pyramid detected");
            return Some(Candidate::new(
                WorkoutStructure::Series(series),
                Confidence::High,
            ));
        }

        debug!(
            repetitions = series.repetitions,
            "irregular rest-separated intervals"
        );
        Some(Candidate::new(
            WorkoutStructure::Series(series),
            Confidence::Medium,
        ))
    }

    /// Laps from the first rested lap through the lap after the last rested one,
    /// minus long warm-up/cool-down laps at either edge
    fn work_block<'a>(laps: &'a [Segment], config: &StructuralConfig) -> Option<&'a [Segment]> {
        let is_rested = |lap: &Segment| lap.rest_seconds >= config.rest_gap_seconds;
        let first = laps.iter().position(is_rested)?;
        let last = laps.iter().rposition(is_rested)?;
        let end = (last + 1).min(laps.len() - 1);
        let mut block = &laps[first..=end];

        let distances: Vec<f64> = block.iter().map(|lap| lap.distance).collect();
        let median_distance = median(&distances)?;
        let limit = median_distance * config.edge_lap_distance_ratio;
        while block.len() > 3 && block[0].distance > limit {
            block = &block[1..];
        }
        while block.len() > 3 && block[block.len() - 1].distance > limit {
            block = &block[..block.len() - 1];
        }
        Some(block)
    }

    fn equal_distances(distances: &[f64], config: &StructuralConfig) -> bool {
        median(distances).is_some_and(|median_distance| {
            distances.iter().all(|distance| {
                (distance - median_distance).abs()
                    <= median_distance * config.equal_distance_tolerance
            })
        })
    }

    fn consistent_rests(rests: &[f64], config: &StructuralConfig) -> bool {
        median(rests).is_some_and(|median_rest| {
            rests.iter().all(|rest| {
                (rest - median_rest).abs() <= median_rest * config.rest_consistency_tolerance
            })
        })
    }

    /// Strictly rising then strictly falling distances, mirrored within tolerance
    fn is_pyramid(distances: &[f64], config: &StructuralConfig) -> bool {
        let n = distances.len();
        if n < 3 {
            return false;
        }
        let rounded: Vec<f64> = distances.iter().map(|d| round_rep_distance(*d)).collect();
        let Some(peak) = rounded
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(index, _)| index)
        else {
            return false;
        };
        if peak == 0 || peak == n - 1 {
            return false;
        }

        let rising = rounded[..=peak].windows(2).all(|pair| pair[0] < pair[1]);
        let falling = rounded[peak..].windows(2).all(|pair| pair[0] > pair[1]);
        let symmetric = (0..n / 2).all(|i| {
            let (left, right) = (distances[i], distances[n - 1 - i]);
            (left - right).abs() <= left.max(right) * config.equal_distance_tolerance
        });
        rising && falling && symmetric
    }

    /// Short climbing effort laps each followed by a slower, non-climbing recovery lap
    fn detect_hill_repeats(laps: &[Segment], config: &StructuralConfig) -> Option<Candidate> {
        let mut climbs = Vec::new();
        let mut i = 0;
        while i + 1 < laps.len() {
            let (effort, recovery) = (&laps[i], &laps[i + 1]);
            let is_effort = effort.distance < config.hill_lap_max_distance
                && effort
                    .elevation_difference
                    .is_some_and(|gain| gain >= config.hill_lap_min_gain);
            let is_recovery = recovery.pace > effort.pace
                && recovery
                    .elevation_difference
                    .is_some_and(|delta| delta <= 0.0);
            if is_effort && is_recovery {
                climbs.push(effort.elevation_difference.unwrap_or_default());
                i += 2;
            } else {
                i += 1;
            }
        }

        if climbs.len() < config.min_hill_repetitions {
            return None;
        }

        debug!(repetitions = climbs.len(), "hill repeats detected in laps");
        Some(Candidate::new(
            WorkoutStructure::Hills(HillStructure {
                evidence: HillEvidence::LapRepeats,
                repetitions: climbs.len(),
                avg_climb: Some(mean(&climbs)),
                gain_per_km: None,
            }),
            Confidence::High,
        ))
    }
}

/// Round an interval distance for display: 50 m steps below 1 km, 100 m steps above
#[must_use]
pub fn round_rep_distance(meters: f64) -> f64 {
    let step = if meters < FINE_ROUNDING_LIMIT { 50.0 } else { 100.0 };
    (meters / step).round() * step
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::analysis::SegmentNormalizer;
    use intent_core::constants::structure;
    use intent_core::models::{Lap, WorkoutType};

    fn lap(distance: f64, moving: u32, rest: u32) -> Lap {
        Lap::new(distance, moving, moving + rest, distance / f64::from(moving))
    }

    #[test]
    fn test_warmup_and_cooldown_laps_are_stripped() {
        let mut laps = vec![lap(3000.0, 900, 20)];
        laps.extend((0..6).map(|_| lap(1000.0, 220, 60)));
        laps.push(lap(2500.0, 750, 0));
        let segments = SegmentNormalizer::from_laps(&laps, structure::RECOVERY_LAP_MAX_DISTANCE);

        let candidate = StructuralDetector::detect(&segments, &StructuralConfig::default())
            .expect("series expected");
        let WorkoutStructure::Series(series) = candidate.structure else {
            panic!("series structure expected");
        };
        assert_eq!(series.pattern, SeriesPattern::Repeats);
        assert_eq!(series.repetitions, 6);
        assert_eq!(series.rep_distance, Some(1000.0));
    }

    #[test]
    fn test_single_traffic_light_stop_is_not_a_session() {
        let mut laps: Vec<Lap> = (0..10).map(|_| lap(1000.0, 330, 0)).collect();
        laps[4] = lap(1000.0, 330, 40);
        let segments = SegmentNormalizer::from_laps(&laps, structure::RECOVERY_LAP_MAX_DISTANCE);
        assert!(StructuralDetector::detect(&segments, &StructuralConfig::default()).is_none());
    }

    #[test]
    fn test_hill_repeats_from_lap_elevation() {
        let mut laps = Vec::new();
        for _ in 0..6 {
            laps.push(lap(300.0, 75, 0).with_elevation_difference(15.0));
            laps.push(lap(300.0, 150, 0).with_elevation_difference(-15.0));
        }
        let segments = SegmentNormalizer::from_laps(&laps, structure::RECOVERY_LAP_MAX_DISTANCE);
        let candidate = StructuralDetector::detect(&segments, &StructuralConfig::default())
            .expect("hills expected");
        assert_eq!(candidate.workout_type(), WorkoutType::Cuestas);
        assert_eq!(candidate.confidence, Confidence::High);
    }

    #[test]
    fn test_rounding_steps() {
        assert!((round_rep_distance(412.0) - 400.0).abs() < f64::EPSILON);
        assert!((round_rep_distance(1_180.0) - 1_200.0).abs() < f64::EPSILON);
    }
}
