// ABOUTME: Classification with heart-rate zones and athlete baselines supplied as context
// ABOUTME: Tests intensity from zones, baseline-driven recovery, race detection and batch ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    activity_from_paces, baseline, full_context, init_test_logging, long_steady_run,
    progressive_run, track_intervals, zones_190,
};
use workout_intent::models::{ClassificationContext, Confidence, WorkoutStructure, WorkoutType};
use workout_intent::{classify, WorkoutClassifier};

#[test]
fn test_threshold_heart_rate_makes_steady_run_tempo() {
    init_test_logging();
    let activity = activity_from_paces(&[4.9; 10]).with_average_heartrate(160.0);
    let context = ClassificationContext::with_zones(zones_190());

    let result = classify(&activity, Some(&context));

    assert_eq!(result.workout_type, WorkoutType::Tempo);
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.human_readable.starts_with("Tempo sostenido"));
}

#[test]
fn test_aerobic_heart_rate_keeps_easy_run() {
    let activity = activity_from_paces(&[4.9; 10]).with_average_heartrate(125.0);
    let context = ClassificationContext::with_zones(zones_190());

    let result = classify(&activity, Some(&context));

    assert_eq!(result.workout_type, WorkoutType::Rodaje);
}

#[test]
fn test_z1_heart_rate_on_short_run_is_recovery() {
    let activity = activity_from_paces(&[6.4; 5]).with_average_heartrate(108.0);
    let context = ClassificationContext::with_zones(zones_190());

    let result = classify(&activity, Some(&context));

    assert_eq!(result.workout_type, WorkoutType::Recuperacion);
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.human_readable.starts_with("Recuperación"));
}

#[test]
fn test_z1_heart_rate_on_long_run_stays_easy() {
    let activity = activity_from_paces(&[6.4; 12]).with_average_heartrate(108.0);
    let context = ClassificationContext::with_zones(zones_190());

    let result = classify(&activity, Some(&context));

    assert_eq!(result.workout_type, WorkoutType::Rodaje);
}

#[test]
fn test_pace_well_below_baseline_is_recovery() {
    let activity = activity_from_paces(&[6.2; 5]);
    let context = ClassificationContext::default().and_baseline(baseline());

    let result = classify(&activity, Some(&context));

    assert_eq!(result.workout_type, WorkoutType::Recuperacion);
}

#[test]
fn test_race_pace_without_heart_rate_is_medium_competition() {
    init_test_logging();
    let activity = activity_from_paces(&[4.2; 10]);
    let context = ClassificationContext::default().and_baseline(baseline());

    let result = classify(&activity, Some(&context));

    assert_eq!(result.workout_type, WorkoutType::Competicion);
    assert_eq!(result.confidence, Confidence::Medium);
    let WorkoutStructure::Race(race) = &result.structure else {
        panic!("expected race structure, got {:?}", result.structure);
    };
    assert!(race.pace_signal);
    assert!(!race.hr_signal);
}

#[test]
fn test_race_pace_and_z5_heart_rate_is_high_competition() {
    let activity = activity_from_paces(&[4.2; 10]).with_average_heartrate(178.0);

    let result = classify(&activity, Some(&full_context()));

    assert_eq!(result.workout_type, WorkoutType::Competicion);
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.human_readable.starts_with("Competición"));
}

#[test]
fn test_race_check_needs_a_baseline() {
    let activity = activity_from_paces(&[4.2; 10]).with_average_heartrate(178.0);
    let context = ClassificationContext::with_zones(zones_190());

    let result = classify(&activity, Some(&context));

    assert_ne!(result.workout_type, WorkoutType::Competicion);
}

#[test]
fn test_race_effort_never_overrides_lap_intervals() {
    let activity = track_intervals().with_average_heartrate(180.0);

    let result = classify(&activity, Some(&full_context()));

    assert_eq!(result.workout_type, WorkoutType::Series);
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn test_lap_structure_wins_over_easy_heart_rate() {
    let activity = track_intervals().with_average_heartrate(125.0);
    let context = ClassificationContext::with_zones(zones_190());

    let result = classify(&activity, Some(&context));

    assert_eq!(result.workout_type, WorkoutType::Series);
}

#[test]
fn test_gps_noise_suppresses_race_check() {
    let activity = activity_from_paces(&[4.2, 1.9, 4.2, 4.2, 4.2, 4.2]).with_average_heartrate(180.0);

    let result = classify(&activity, Some(&full_context()));

    assert_eq!(result.workout_type, WorkoutType::Otro);
}

#[test]
fn test_batch_preserves_input_order() {
    init_test_logging();
    let items = vec![
        (track_intervals(), None),
        (long_steady_run(), Some(full_context())),
        (progressive_run(), None),
        (activity_from_paces(&[4.2; 10]), Some(full_context())),
    ];

    let results = WorkoutClassifier::new().classify_batch(&items);
    let types: Vec<WorkoutType> = results.iter().map(|result| result.workout_type).collect();

    assert_eq!(
        types,
        vec![
            WorkoutType::Series,
            WorkoutType::Rodaje,
            WorkoutType::Progresivo,
            WorkoutType::Competicion,
        ]
    );
    for ((activity, context), result) in items.iter().zip(&results) {
        assert_eq!(&WorkoutClassifier::new().classify(activity, context.as_ref()), result);
    }
}
