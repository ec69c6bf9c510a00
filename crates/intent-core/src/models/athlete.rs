// ABOUTME: Athlete profile fields and historical baseline used to contextualize a new activity
// ABOUTME: Includes the historical activity record the baseline estimator consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::WorkoutType;
use crate::constants::units::METERS_PER_KM;

/// Profile fields relevant to heart-rate zone computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Date of birth, used for the age-predicted maximum heart rate
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Manually measured maximum heart rate in bpm
    #[serde(default)]
    pub max_heart_rate: Option<u32>,
    /// Resting heart rate in bpm
    #[serde(default)]
    pub resting_heart_rate: Option<u32>,
}

/// An athlete's typical easy and fast efforts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteBaseline {
    /// Mean easy pace in seconds per kilometer
    pub avg_easy_pace: f64,
    /// Mean competition/fast-session pace in seconds per kilometer
    pub avg_competition_pace: f64,
    /// Mean heart rate on easy efforts in bpm
    #[serde(default)]
    pub avg_easy_hr: Option<f64>,
    /// Number of qualifying historical activities
    pub sample_count: usize,
}

/// A previously classified, completed activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalActivity {
    /// When the activity started
    pub started_at: DateTime<Utc>,
    /// Distance in meters
    pub distance: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Average heart rate in bpm
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    /// Workout type assigned when the activity was classified
    #[serde(default)]
    pub workout_type: Option<WorkoutType>,
}

impl HistoricalActivity {
    /// Whether the record has a usable distance and duration
    #[must_use]
    pub fn is_qualifying(&self) -> bool {
        self.distance > 0.0 && self.duration > 0.0
    }

    /// Pace in seconds per kilometer
    #[must_use]
    pub fn pace_seconds_per_km(&self) -> f64 {
        self.duration / (self.distance / METERS_PER_KM)
    }
}
