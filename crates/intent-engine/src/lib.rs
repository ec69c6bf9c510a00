// ABOUTME: Workout intent classification engine for completed running activities
// ABOUTME: Wires segment analysis, zone and baseline context into one typed verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Intent Engine
//!
//! Deterministic, rule-based inference of the training intent behind a run.
//!
//! Data flows leaves first:
//!
//! 1. [`hr_zones`] and [`athlete_baseline`] build the per-athlete
//!    [`ClassificationContext`](intent_core::models::ClassificationContext) once.
//! 2. [`analysis::segments`] normalizes laps and splits into one segment unit.
//! 3. [`analysis::structural`] reads manual laps, [`analysis::pace`] reads split statistics.
//! 4. [`resolver`] merges candidates with the context into a verdict.
//! 5. [`explanation`] renders the verdict as a Spanish sentence.
//!
//! [`classifier::WorkoutClassifier`] runs the whole pipeline and is safe to call
//! from many threads at once.

/// Lap structure, split statistics and segment normalization
pub mod analysis;

/// Historical baseline estimation
pub mod athlete_baseline;

/// Pipeline entry point and batch reclassification
pub mod classifier;

/// Threshold configuration
pub mod config;

/// Spanish verdict explanations
pub mod explanation;

/// Personalized heart-rate zones
pub mod hr_zones;

/// Decision policy over analyzer candidates
pub mod resolver;

/// Descriptive statistics over pace series
pub mod statistics;

pub use athlete_baseline::{ActivityHistory, AthleteBaselineEstimator, InMemoryHistory};
pub use classifier::{classify, WorkoutClassifier};
pub use config::{ClassifierConfig, ConfigError};
pub use hr_zones::HrZoneCalculator;
