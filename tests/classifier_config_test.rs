// ABOUTME: Tests for classifier threshold configuration from environment variables
// ABOUTME: Validates defaults, overrides, strict parsing and cross-threshold validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::activity_from_paces;
use serial_test::serial;
use std::env;
use workout_intent::models::WorkoutType;
use workout_intent::{ClassifierConfig, ConfigError, WorkoutClassifier};

const OVERRIDES: [&str; 4] = [
    "WORKOUT_INTENT_LONG_RUN_KM",
    "WORKOUT_INTENT_STEADY_CV",
    "WORKOUT_INTENT_REST_GAP_SECONDS",
    "WORKOUT_INTENT_MIN_HILL_REPETITIONS",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_overrides();

    let config = ClassifierConfig::try_from_env().unwrap();

    assert_eq!(config, ClassifierConfig::default());
    assert!((config.pace.steady_cv - 0.05).abs() < f64::EPSILON);
    assert!((config.resolver.long_run_km - 18.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_environment_overrides_thresholds() {
    clear_overrides();
    env::set_var("WORKOUT_INTENT_LONG_RUN_KM", "12");
    env::set_var("WORKOUT_INTENT_REST_GAP_SECONDS", " 20 ");

    let config = ClassifierConfig::try_from_env().unwrap();

    assert!((config.resolver.long_run_km - 12.0).abs() < f64::EPSILON);
    assert!((config.structural.rest_gap_seconds - 20.0).abs() < f64::EPSILON);

    let run = activity_from_paces(&[5.3; 12]);
    let default_result = WorkoutClassifier::new().classify(&run, None);
    let tuned_result = WorkoutClassifier::with_config(config).classify(&run, None);
    assert_eq!(tuned_result.workout_type, WorkoutType::Rodaje);
    assert!(!default_result.human_readable.contains("largo"));
    assert!(tuned_result.human_readable.contains("largo"));

    clear_overrides();
}

#[test]
#[serial]
fn test_unparseable_value_is_rejected_strictly_and_ignored_leniently() {
    clear_overrides();
    env::set_var("WORKOUT_INTENT_MIN_HILL_REPETITIONS", "three");

    let strict = ClassifierConfig::try_from_env();
    let lenient = ClassifierConfig::from_env();

    assert!(matches!(strict, Err(ConfigError::Parse(_))));
    assert_eq!(lenient.structural.min_hill_repetitions, 3);

    clear_overrides();
}

#[test]
#[serial]
fn test_inconsistent_override_fails_validation() {
    clear_overrides();
    env::set_var("WORKOUT_INTENT_STEADY_CV", "0.2");

    let result = ClassifierConfig::try_from_env();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
    clear_overrides();
}

#[test]
fn test_distance_thresholds_must_be_ordered() {
    let mut config = ClassifierConfig::default();
    config.resolver.long_run_km = 5.0;

    let error = config.validate().unwrap_err();

    assert!(error.to_string().contains("long_run_km"));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = ClassifierConfig::default();
    let json = serde_json::to_string(&config).unwrap();

    assert_eq!(serde_json::from_str::<ClassifierConfig>(&json).unwrap(), config);
}
