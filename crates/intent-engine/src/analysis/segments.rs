// ABOUTME: Segment normalizer turning raw laps and splits into one canonical unit
// ABOUTME: Derives pace in min/km, stopped time and elevation per segment, skipping unusable records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use intent_core::constants::units::{METERS_PER_KM, SECONDS_PER_MINUTE};
use intent_core::models::{Lap, Split};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Where a segment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentSource {
    /// GPS kilometer split
    Split,
    /// Athlete-triggered lap
    Lap,
}

/// Canonical per-segment unit shared by every analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Position of the record in the original lap or split list
    pub index: usize,
    /// Origin of the record
    pub source: SegmentSource,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: f64,
    /// Pace in minutes per kilometer
    pub pace: f64,
    /// Stopped time inside the segment (`elapsed - moving`), never negative
    pub rest_seconds: f64,
    /// Net elevation change in meters
    pub elevation_difference: Option<f64>,
    /// Average heart rate in bpm (laps only)
    pub average_heartrate: Option<f64>,
}

/// Converts raw records into [`Segment`]s
pub struct SegmentNormalizer;

impl SegmentNormalizer {
    /// Normalize kilometer splits
    ///
    /// Splits with zero moving time or no usable speed are dropped.
    #[must_use]
    pub fn from_splits(splits: &[Split]) -> Vec<Segment> {
        splits
            .iter()
            .enumerate()
            .filter_map(|(index, split)| {
                let pace = pace_min_per_km(split.average_speed, split.distance, split.moving_time)?;
                Some(Segment {
                    index,
                    source: SegmentSource::Split,
                    distance: split.distance,
                    moving_time: f64::from(split.moving_time),
                    pace,
                    rest_seconds: rest_seconds(split.elapsed_time, split.moving_time),
                    elevation_difference: split.elevation_difference,
                    average_heartrate: None,
                })
            })
            .collect()
    }

    /// Normalize manual laps
    ///
    /// Laps with no moving time or shorter than `recovery_max_distance` are
    /// pauses recorded as their own lap: their elapsed time is added to the
    /// stopped time of the preceding work lap. A pause before the first work
    /// lap is dropped.
    #[must_use]
    pub fn from_laps(laps: &[Lap], recovery_max_distance: f64) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::with_capacity(laps.len());
        for (index, lap) in laps.iter().enumerate() {
            if lap.moving_time == 0 || lap.distance < recovery_max_distance {
                match segments.last_mut() {
                    Some(previous) => previous.rest_seconds += f64::from(lap.elapsed_time),
                    None => trace!(index, "dropping pause lap before the first work lap"),
                }
                continue;
            }
            let Some(pace) = pace_min_per_km(lap.average_speed, lap.distance, lap.moving_time)
            else {
                continue;
            };
            segments.push(Segment {
                index,
                source: SegmentSource::Lap,
                distance: lap.distance,
                moving_time: f64::from(lap.moving_time),
                pace,
                rest_seconds: rest_seconds(lap.elapsed_time, lap.moving_time),
                elevation_difference: lap.elevation_difference,
                average_heartrate: lap.average_heartrate,
            });
        }
        segments
    }
}

/// `pace = 1000 / (speed * 60)`, falling back to distance over moving time
fn pace_min_per_km(average_speed: f64, distance: f64, moving_time: u32) -> Option<f64> {
    if moving_time == 0 {
        trace!(distance, "skipping segment with zero moving time");
        return None;
    }
    let speed = if average_speed.is_finite() && average_speed > 0.0 {
        average_speed
    } else {
        distance / f64::from(moving_time)
    };
    if !speed.is_finite() || speed <= 0.0 {
        trace!(distance, moving_time, "skipping segment without usable speed");
        return None;
    }
    Some(METERS_PER_KM / (speed * SECONDS_PER_MINUTE))
}

fn rest_seconds(elapsed_time: u32, moving_time: u32) -> f64 {
    f64::from(elapsed_time.saturating_sub(moving_time))
}
