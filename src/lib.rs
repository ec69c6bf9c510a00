// ABOUTME: Main library entry point for the workout intent classifier
// ABOUTME: Re-exports the engine and core types, plus logging setup and JSON input loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Intent
//!
//! Infers the training intent behind a completed running activity (intervals,
//! tempo, easy run, hills, recovery, progressive, fartlek or race) from its
//! aggregate totals, GPS kilometer splits and manual laps, without any label
//! from the athlete.
//!
//! ## Architecture
//!
//! - **`intent_core`**: activity, zone, baseline and verdict types; errors; thresholds
//! - **`intent_engine`**: zone calculator, baseline estimator, segment analyzers,
//!   resolver, explanations and the classifier pipeline
//! - **this crate**: logging setup, JSON input loading and the `workout-intent` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_intent::models::{Activity, Split};
//! use workout_intent::classify;
//!
//! let splits = (0..10).map(|_| Split::new(1000.0, 318, 318, 1000.0 / 318.0)).collect();
//! let activity = Activity::new(10_000.0, 3180, 3180).with_splits(splits);
//! let result = classify(&activity, None);
//! println!("{}: {}", result.workout_type, result.human_readable);
//! ```

/// Reading activities, contexts and history from JSON files
pub mod input;

/// Logging configuration and structured logging setup
pub mod logging;

pub use intent_core::{constants, errors, models};
pub use intent_engine::{
    analysis, athlete_baseline, classify, config, explanation, hr_zones, resolver, statistics,
    ActivityHistory, AthleteBaselineEstimator, ClassifierConfig, ConfigError, HrZoneCalculator,
    InMemoryHistory, WorkoutClassifier,
};
