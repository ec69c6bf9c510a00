// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides split, lap and activity builders plus canned athlete contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::expect_used
)]
//! Shared test utilities for `workout_intent`
//!
//! Paces are given in min/km throughout, the way athletes read them.

use chrono::NaiveDate;
use std::sync::Once;
use workout_intent::models::{
    Activity, AthleteBaseline, AthleteProfile, ClassificationContext, HrZones, Lap, Split,
};
use workout_intent::HrZoneCalculator;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Seconds needed to cover `distance` meters at `pace` min/km
pub fn seconds_for(distance: f64, pace: f64) -> u32 {
    (distance / 1000.0 * pace * 60.0).round() as u32
}

/// One kilometer split at a pace
pub fn split(pace: f64) -> Split {
    let seconds = seconds_for(1000.0, pace);
    Split::new(1000.0, seconds, seconds, 1000.0 / (pace * 60.0))
}

/// Kilometer splits at the given paces
pub fn splits(paces: &[f64]) -> Vec<Split> {
    paces.iter().copied().map(split).collect()
}

/// A lap of `distance` meters at `pace`, followed by `rest` stopped seconds
pub fn lap(distance: f64, pace: f64, rest: u32) -> Lap {
    let moving = seconds_for(distance, pace);
    Lap::new(distance, moving, moving + rest, distance / (pace * 60.0))
}

/// Activity built from kilometer splits, totals derived from them
pub fn activity_from_paces(paces: &[f64]) -> Activity {
    let splits = splits(paces);
    let moving: u32 = splits.iter().map(|split| split.moving_time).sum();
    Activity::new(splits.len() as f64 * 1000.0, moving, moving).with_splits(splits)
}

/// Activity built from laps only, totals derived from them
pub fn activity_from_laps(laps: Vec<Lap>) -> Activity {
    let distance: f64 = laps.iter().map(|lap| lap.distance).sum();
    let moving: u32 = laps.iter().map(|lap| lap.moving_time).sum();
    let elapsed: u32 = laps.iter().map(|lap| lap.elapsed_time).sum();
    Activity::new(distance, moving, elapsed).with_laps(laps)
}

/// 2 km warm-up, 10x400 m at 3:40 with 90 s standing rest, 2 km cool-down
pub fn track_intervals() -> Activity {
    let mut laps = vec![lap(2000.0, 6.0, 0)];
    for rep in 0..10 {
        let rest = if rep < 9 { 90 } else { 0 };
        laps.push(lap(400.0, 3.67, rest));
    }
    laps.push(lap(2000.0, 6.2, 0));
    activity_from_laps(laps)
}

/// 400-800-1200-800-400 pyramid with rests
pub fn pyramid() -> Activity {
    activity_from_laps(vec![
        lap(400.0, 3.6, 90),
        lap(800.0, 3.8, 120),
        lap(1200.0, 3.9, 150),
        lap(800.0, 3.8, 120),
        lap(400.0, 3.6, 0),
    ])
}

/// Two easy kilometers, four at 4:20, two easy kilometers
pub fn tempo_with_warmup_and_cooldown() -> Activity {
    activity_from_paces(&[6.0, 6.0, 4.33, 4.35, 4.3, 4.33, 6.1, 6.2])
}

/// Eight kilometers negative split, 6:00 down to 4:50
pub fn progressive_run() -> Activity {
    activity_from_paces(&[6.0, 5.8, 5.65, 5.5, 5.3, 5.15, 5.0, 4.85])
}

/// Twenty steady kilometers around 5:18
pub fn long_steady_run() -> Activity {
    activity_from_paces(&[5.3; 20])
}

/// Max HR 190, no resting HR: Z1 95-114, Z2 115-133, Z3 134-152, Z4 153-171, Z5 172-190
pub fn zones_190() -> HrZones {
    let profile = AthleteProfile {
        max_heart_rate: Some(190),
        ..AthleteProfile::default()
    };
    HrZoneCalculator::calculate_on(&profile, date(2025, 6, 1))
}

/// Easy runs at 5:30/km, races around 4:15/km
pub const fn baseline() -> AthleteBaseline {
    AthleteBaseline {
        avg_easy_pace: 330.0,
        avg_competition_pace: 255.0,
        avg_easy_hr: Some(140.0),
        sample_count: 24,
    }
}

/// Context with zones and baseline
pub fn full_context() -> ClassificationContext {
    ClassificationContext::with_zones(zones_190()).and_baseline(baseline())
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
