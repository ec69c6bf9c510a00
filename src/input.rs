// ABOUTME: JSON file loaders for activities, classification contexts and activity history
// ABOUTME: Maps IO and parse failures onto AppError with the offending path attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{Activity, ClassificationContext, HistoricalActivity};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One entry of a batch file: an activity with an optional context
#[derive(Debug, Clone, Deserialize)]
pub struct BatchEntry {
    /// Activity to classify
    pub activity: Activity,
    /// Context for this activity only
    #[serde(default)]
    pub context: Option<ClassificationContext>,
}

/// Deserialize any JSON document from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not match `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let resource = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|e| AppError::from(e).with_resource_id(&resource))?;
    let value = serde_json::from_str(&raw).map_err(|e| AppError::from(e).with_resource_id(&resource))?;
    debug!(path = %resource, bytes = raw.len(), "input file parsed");
    Ok(value)
}

/// Load a single activity
///
/// # Errors
///
/// Returns an error if the file is missing, malformed, or carries negative distances
pub fn load_activity(path: &Path) -> AppResult<Activity> {
    let activity = read_json(path)?;
    validate_activity(&activity).map_err(|e| e.with_resource_id(path.display().to_string()))?;
    Ok(activity)
}

/// Load a batch file
///
/// Entries without their own context fall back to `shared_context`.
///
/// # Errors
///
/// Returns an error if the file is missing, malformed, or an entry carries negative distances
pub fn load_batch(
    path: &Path,
    shared_context: Option<ClassificationContext>,
) -> AppResult<Vec<(Activity, Option<ClassificationContext>)>> {
    let entries: Vec<BatchEntry> = read_json(path)?;
    for (index, entry) in entries.iter().enumerate() {
        validate_activity(&entry.activity)
            .map_err(|e| e.with_resource_id(format!("{}[{index}]", path.display())))?;
    }
    Ok(entries
        .into_iter()
        .map(|entry| (entry.activity, entry.context.or(shared_context)))
        .collect())
}

/// Reject distances no device records
fn validate_activity(activity: &Activity) -> AppResult<()> {
    if activity.distance < 0.0 {
        return Err(AppError::invalid_input("activity distance must not be negative"));
    }
    if let Some(index) = activity.splits.iter().position(|split| split.distance < 0.0) {
        return Err(AppError::invalid_input(format!(
            "split {index} distance must not be negative"
        )));
    }
    if let Some(index) = activity.laps.iter().position(|lap| lap.distance < 0.0) {
        return Err(AppError::invalid_input(format!(
            "lap {index} distance must not be negative"
        )));
    }
    Ok(())
}

/// Load an optional context file
///
/// # Errors
///
/// Returns an error if a path is given and the file is missing or malformed
pub fn load_context(path: Option<&Path>) -> AppResult<Option<ClassificationContext>> {
    path.map(read_json).transpose()
}

/// Load activity history for baseline estimation
///
/// # Errors
///
/// Returns an error if the file is missing or malformed
pub fn load_history(path: &Path) -> AppResult<Vec<HistoricalActivity>> {
    read_json(path)
}
