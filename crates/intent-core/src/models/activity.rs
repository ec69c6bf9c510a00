// ABOUTME: Completed running activity with its GPS kilometer splits and manually marked laps
// ABOUTME: Field names follow the provider wire contract so JSON deserializes without mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::units::METERS_PER_KM;

/// One GPS auto-detected kilometer segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Distance covered in meters
    pub distance: f64,
    /// Time spent moving in seconds
    pub moving_time: u32,
    /// Wall-clock time in seconds, including stops
    pub elapsed_time: u32,
    /// Average moving speed in m/s
    pub average_speed: f64,
    /// Net elevation change over the split in meters
    #[serde(default, alias = "elevation_delta", skip_serializing_if = "Option::is_none")]
    pub elevation_difference: Option<f64>,
}

impl Split {
    /// Create a split without elevation data
    #[must_use]
    pub const fn new(distance: f64, moving_time: u32, elapsed_time: u32, average_speed: f64) -> Self {
        Self {
            distance,
            moving_time,
            elapsed_time,
            average_speed,
            elevation_difference: None,
        }
    }

    /// Attach a net elevation change
    #[must_use]
    pub const fn with_elevation_difference(mut self, meters: f64) -> Self {
        self.elevation_difference = Some(meters);
        self
    }
}

/// One athlete-triggered lap
///
/// Laps can encode work and rest intervals, hill repeats, or a single lap
/// covering the whole activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    /// Distance covered in meters
    pub distance: f64,
    /// Time spent moving in seconds
    pub moving_time: u32,
    /// Wall-clock time in seconds, including stops
    pub elapsed_time: u32,
    /// Average moving speed in m/s
    pub average_speed: f64,
    /// Net elevation change over the lap in meters
    #[serde(default, alias = "elevation_delta", skip_serializing_if = "Option::is_none")]
    pub elevation_difference: Option<f64>,
    /// Average heart rate over the lap in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_heartrate: Option<f64>,
    /// Peak heart rate over the lap in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heartrate: Option<f64>,
}

impl Lap {
    /// Create a lap without elevation or heart-rate data
    #[must_use]
    pub const fn new(distance: f64, moving_time: u32, elapsed_time: u32, average_speed: f64) -> Self {
        Self {
            distance,
            moving_time,
            elapsed_time,
            average_speed,
            elevation_difference: None,
            average_heartrate: None,
            max_heartrate: None,
        }
    }

    /// Attach a net elevation change
    #[must_use]
    pub const fn with_elevation_difference(mut self, meters: f64) -> Self {
        self.elevation_difference = Some(meters);
        self
    }

    /// Attach the lap's average heart rate
    #[must_use]
    pub const fn with_average_heartrate(mut self, bpm: f64) -> Self {
        self.average_heartrate = Some(bpm);
        self
    }
}

/// Aggregate record of a completed activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Total distance in meters
    pub distance: f64,
    /// Total moving time in seconds
    pub moving_time: u32,
    /// Total elapsed time in seconds
    pub elapsed_time: u32,
    /// Total climb in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elevation_gain: Option<f64>,
    /// Average moving speed in m/s
    #[serde(default)]
    pub average_speed: f64,
    /// Average heart rate in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_heartrate: Option<f64>,
    /// Peak heart rate in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heartrate: Option<f64>,
    /// Kilometer splits in order (may be empty)
    #[serde(default)]
    pub splits: Vec<Split>,
    /// Manual laps in order (may be empty)
    #[serde(default)]
    pub laps: Vec<Lap>,
}

impl Activity {
    /// Create an activity from its aggregate totals, deriving the average speed
    #[must_use]
    pub fn new(distance: f64, moving_time: u32, elapsed_time: u32) -> Self {
        let average_speed = if moving_time > 0 {
            distance / f64::from(moving_time)
        } else {
            0.0
        };
        Self {
            distance,
            moving_time,
            elapsed_time,
            total_elevation_gain: None,
            average_speed,
            average_heartrate: None,
            max_heartrate: None,
            splits: Vec::new(),
            laps: Vec::new(),
        }
    }

    /// Attach kilometer splits
    #[must_use]
    pub fn with_splits(mut self, splits: Vec<Split>) -> Self {
        self.splits = splits;
        self
    }

    /// Attach manual laps
    #[must_use]
    pub fn with_laps(mut self, laps: Vec<Lap>) -> Self {
        self.laps = laps;
        self
    }

    /// Attach the average heart rate
    #[must_use]
    pub fn with_average_heartrate(mut self, bpm: f64) -> Self {
        self.average_heartrate = Some(bpm);
        self
    }

    /// Attach the total climb
    #[must_use]
    pub fn with_total_elevation_gain(mut self, meters: f64) -> Self {
        self.total_elevation_gain = Some(meters);
        self
    }

    /// Distance in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance / METERS_PER_KM
    }

    /// Average pace in seconds per kilometer
    ///
    /// Uses moving time over distance, falling back to the reported average
    /// speed. Returns `None` when neither gives a finite positive pace.
    #[must_use]
    pub fn average_pace_seconds_per_km(&self) -> Option<f64> {
        if self.distance > 0.0 && self.moving_time > 0 {
            return Some(f64::from(self.moving_time) / self.distance_km());
        }
        if self.average_speed > 0.0 {
            return Some(METERS_PER_KM / self.average_speed);
        }
        None
    }

    /// Whether the activity carries splits or at least two laps
    ///
    /// A single lap spanning the whole run says nothing the totals don't.
    #[must_use]
    pub fn has_segments(&self) -> bool {
        !self.splits.is_empty() || self.laps.len() >= 2
    }
}
