// ABOUTME: Tests for athlete baseline estimation from classified activity history
// ABOUTME: Covers sample minimums, easy/fast subsets, the history window and history sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;
use workout_intent::errors::{AppError, AppResult, ErrorCode};
use workout_intent::models::{HistoricalActivity, WorkoutType};
use workout_intent::{ActivityHistory, AthleteBaselineEstimator, InMemoryHistory};

/// A 10 km record `days_ago` days before a fixed reference date
fn record(days_ago: i64, pace_seconds: f64, workout_type: Option<WorkoutType>) -> HistoricalActivity {
    let reference = Utc.with_ymd_and_hms(2025, 6, 1, 7, 0, 0).unwrap();
    HistoricalActivity {
        started_at: reference - Duration::days(days_ago),
        distance: 10_000.0,
        duration: pace_seconds * 10.0,
        average_heartrate: None,
        workout_type,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-6, "{actual} != {expected}");
}

#[test]
fn test_fewer_than_three_records_gives_no_baseline() {
    let history = vec![
        record(1, 330.0, Some(WorkoutType::Rodaje)),
        record(2, 330.0, Some(WorkoutType::Rodaje)),
    ];

    assert!(AthleteBaselineEstimator::estimate(&history).is_none());
}

#[test]
fn test_records_without_distance_do_not_qualify() {
    let mut broken = record(3, 330.0, Some(WorkoutType::Rodaje));
    broken.distance = 0.0;
    let history = vec![
        record(1, 330.0, Some(WorkoutType::Rodaje)),
        record(2, 330.0, Some(WorkoutType::Rodaje)),
        broken,
    ];

    assert!(AthleteBaselineEstimator::estimate(&history).is_none());
}

#[test]
fn test_easy_and_competition_paces_from_subsets() {
    let mut easy_with_hr = record(1, 320.0, Some(WorkoutType::Rodaje));
    easy_with_hr.average_heartrate = Some(138.0);
    let history = vec![
        easy_with_hr,
        record(2, 340.0, Some(WorkoutType::Rodaje)),
        record(3, 250.0, Some(WorkoutType::Series)),
        record(4, 260.0, Some(WorkoutType::Tempo)),
        record(5, 200.0, Some(WorkoutType::Competicion)),
    ];

    let baseline = AthleteBaselineEstimator::estimate(&history).unwrap();

    assert_close(baseline.avg_easy_pace, 330.0);
    assert_close(baseline.avg_competition_pace, 255.0);
    assert_eq!(baseline.avg_easy_hr, Some(138.0));
    assert_eq!(baseline.sample_count, 5);
}

#[test]
fn test_no_easy_runs_falls_back_to_all_records() {
    let history = vec![
        record(1, 300.0, Some(WorkoutType::Tempo)),
        record(2, 330.0, None),
        record(3, 360.0, Some(WorkoutType::Fartlek)),
    ];

    let baseline = AthleteBaselineEstimator::estimate(&history).unwrap();

    assert_close(baseline.avg_easy_pace, 330.0);
    assert_close(baseline.avg_competition_pace, 300.0);
    assert_eq!(baseline.avg_easy_hr, None);
}

#[test]
fn test_no_fast_sessions_assumes_competition_pace() {
    let history = vec![
        record(1, 340.0, Some(WorkoutType::Rodaje)),
        record(2, 340.0, Some(WorkoutType::Rodaje)),
        record(3, 340.0, Some(WorkoutType::Recuperacion)),
    ];

    let baseline = AthleteBaselineEstimator::estimate(&history).unwrap();

    assert_close(baseline.avg_easy_pace, 340.0);
    assert_close(baseline.avg_competition_pace, 340.0 * 0.85);
}

#[test]
fn test_only_the_newest_fifty_records_count() {
    // 50 recent easy runs at 5:30, then 30 older ones at 7:00
    let mut history: Vec<HistoricalActivity> = (0..50)
        .map(|day| record(day, 330.0, Some(WorkoutType::Rodaje)))
        .collect();
    history.extend((100..130).map(|day| record(day, 420.0, Some(WorkoutType::Rodaje))));
    history.reverse();

    let baseline = AthleteBaselineEstimator::estimate(&history).unwrap();

    assert_close(baseline.avg_easy_pace, 330.0);
    assert_eq!(baseline.sample_count, 50);
}

#[test]
fn test_in_memory_history_is_per_athlete() {
    let athlete = Uuid::new_v4();
    let other = Uuid::new_v4();
    let mut history = InMemoryHistory::new();
    history.extend(
        athlete,
        (0..4).map(|day| record(day, 330.0, Some(WorkoutType::Rodaje))),
    );
    history.insert(other, record(0, 300.0, Some(WorkoutType::Rodaje)));

    let recent = history.recent_completed(athlete, 2).unwrap();
    assert_eq!(recent.len(), 2);
    assert!(recent[0].started_at > recent[1].started_at);

    let baseline = AthleteBaselineEstimator::estimate_for(&history, athlete).unwrap();
    assert_eq!(baseline.map(|b| b.sample_count), Some(4));
    assert!(AthleteBaselineEstimator::estimate_for(&history, other)
        .unwrap()
        .is_none());
}

struct UnavailableHistory;

impl ActivityHistory for UnavailableHistory {
    fn recent_completed(&self, _athlete_id: Uuid, _limit: usize) -> AppResult<Vec<HistoricalActivity>> {
        Err(AppError::storage("history store offline"))
    }
}

#[test]
fn test_history_errors_carry_the_athlete() {
    let athlete = Uuid::new_v4();

    let error = AthleteBaselineEstimator::estimate_for(&UnavailableHistory, athlete).unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert_eq!(error.context.athlete_id, Some(athlete));
}
