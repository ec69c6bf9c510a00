// ABOUTME: Command handlers for the workout-intent CLI
// ABOUTME: Each handler loads its JSON inputs, runs the engine and prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};
use workout_intent::input;
use workout_intent::models::AthleteProfile;
use workout_intent::{AthleteBaselineEstimator, ClassifierConfig, HrZoneCalculator, WorkoutClassifier};

pub fn classify(
    config: ClassifierConfig,
    activity_path: &Path,
    context_path: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let activity = input::load_activity(activity_path)?;
    let context = input::load_context(context_path)?;
    let result = WorkoutClassifier::with_config(config).classify(&activity, context.as_ref());
    info!(
        workout_type = %result.workout_type,
        confidence = ?result.confidence,
        "classified {}",
        activity_path.display()
    );
    if pretty {
        print_pretty(&result)
    } else {
        print_json(&result)
    }
}

pub fn batch(config: ClassifierConfig, activities_path: &Path, context_path: Option<&Path>) -> Result<()> {
    let shared_context = input::load_context(context_path)?;
    let items = input::load_batch(activities_path, shared_context)?;
    let results = WorkoutClassifier::with_config(config).classify_batch(&items);
    print_json(&results)
}

pub fn zones(
    birth_date: Option<NaiveDate>,
    max_hr: Option<u32>,
    resting_hr: Option<u32>,
    on: Option<NaiveDate>,
) -> Result<()> {
    let profile = AthleteProfile {
        birth_date,
        max_heart_rate: max_hr,
        resting_heart_rate: resting_hr,
    };
    let today = on.unwrap_or_else(|| Utc::now().date_naive());
    let max_heart_rate = HrZoneCalculator::max_heart_rate(&profile, today);
    let (_, method) = HrZoneCalculator::boundaries(max_heart_rate, profile.resting_heart_rate);
    let zones = HrZoneCalculator::calculate_on(&profile, today);
    print_json(&json!({
        "max_heart_rate": max_heart_rate,
        "method": method,
        "zones": zones,
    }))
}

pub fn baseline(history_path: &Path) -> Result<()> {
    let history = input::load_history(history_path)?;
    let baseline = AthleteBaselineEstimator::estimate(&history);
    if baseline.is_none() {
        warn!(records = history.len(), "not enough qualifying history for a baseline");
    }
    print_json(&baseline)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn print_pretty<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
