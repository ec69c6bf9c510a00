// ABOUTME: Athlete baseline estimator over recent completed activities
// ABOUTME: Summarizes typical easy and fast paces plus easy heart rate behind a history-source trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use intent_core::constants::baseline::{
    DEFAULT_COMPETITION_PACE_RATIO, HISTORY_WINDOW, MIN_SAMPLES,
};
use intent_core::errors::AppResult;
use intent_core::models::{AthleteBaseline, HistoricalActivity, WorkoutType};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Source of an athlete's completed activities
///
/// Implemented by whatever persistence layer the caller owns.
pub trait ActivityHistory {
    /// Up to `limit` completed activities for the athlete, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn recent_completed(&self, athlete_id: Uuid, limit: usize) -> AppResult<Vec<HistoricalActivity>>;
}

/// In-memory history keyed by athlete
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    records: HashMap<Uuid, Vec<HistoricalActivity>>,
}

impl InMemoryHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one completed activity for an athlete
    pub fn insert(&mut self, athlete_id: Uuid, record: HistoricalActivity) {
        self.records.entry(athlete_id).or_default().push(record);
    }

    /// Add many completed activities for an athlete
    pub fn extend(&mut self, athlete_id: Uuid, records: impl IntoIterator<Item = HistoricalActivity>) {
        self.records.entry(athlete_id).or_default().extend(records);
    }
}

impl ActivityHistory for InMemoryHistory {
    fn recent_completed(&self, athlete_id: Uuid, limit: usize) -> AppResult<Vec<HistoricalActivity>> {
        let mut records = self.records.get(&athlete_id).cloned().unwrap_or_default();
        records.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        records.truncate(limit);
        Ok(records)
    }
}

/// Baseline estimator
pub struct AthleteBaselineEstimator;

impl AthleteBaselineEstimator {
    /// Estimate the baseline for an athlete from a history source
    ///
    /// # Errors
    ///
    /// Propagates history access errors. Too little history is `Ok(None)`.
    pub fn estimate_for<H: ActivityHistory + ?Sized>(
        history: &H,
        athlete_id: Uuid,
    ) -> AppResult<Option<AthleteBaseline>> {
        let records = history
            .recent_completed(athlete_id, HISTORY_WINDOW)
            .map_err(|err| err.with_athlete_id(athlete_id))?;
        Ok(Self::estimate(&records))
    }

    /// Estimate a baseline from history records in any order
    ///
    /// The newest records within the history window are kept, then those with
    /// positive distance and duration. Fewer than the minimum sample count
    /// yields `None`.
    #[must_use]
    pub fn estimate(history: &[HistoricalActivity]) -> Option<AthleteBaseline> {
        let mut recent: Vec<&HistoricalActivity> = history.iter().collect();
        recent.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        recent.truncate(HISTORY_WINDOW);
        let qualifying: Vec<&HistoricalActivity> = recent
            .into_iter()
            .filter(|record| record.is_qualifying())
            .collect();

        if qualifying.len() < MIN_SAMPLES {
            debug!(
                qualifying = qualifying.len(),
                "not enough history for a baseline"
            );
            return None;
        }

        let easy: Vec<&HistoricalActivity> = qualifying
            .iter()
            .copied()
            .filter(|record| record.workout_type == Some(WorkoutType::Rodaje))
            .collect();
        let fast: Vec<&HistoricalActivity> = qualifying
            .iter()
            .copied()
            .filter(|record| {
                matches!(
                    record.workout_type,
                    Some(WorkoutType::Series | WorkoutType::Tempo)
                )
            })
            .collect();

        let easy_source = if easy.is_empty() { &qualifying } else { &easy };
        let avg_easy_pace = mean_pace(easy_source);
        let heart_rates: Vec<f64> = easy_source
            .iter()
            .filter_map(|record| record.average_heartrate)
            .collect();
        let avg_easy_hr =
            (!heart_rates.is_empty()).then(|| heart_rates.iter().sum::<f64>() / heart_rates.len() as f64);
        let avg_competition_pace = if fast.is_empty() {
            avg_easy_pace * DEFAULT_COMPETITION_PACE_RATIO
        } else {
            mean_pace(&fast)
        };

        debug!(
            samples = qualifying.len(),
            easy = easy.len(),
            fast = fast.len(),
            avg_easy_pace,
            avg_competition_pace,
            "estimated athlete baseline"
        );
        Some(AthleteBaseline {
            avg_easy_pace,
            avg_competition_pace,
            avg_easy_hr,
            sample_count: qualifying.len(),
        })
    }
}

/// Mean pace in seconds per kilometer
fn mean_pace(records: &[&HistoricalActivity]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records
        .iter()
        .map(|record| record.pace_seconds_per_km())
        .sum::<f64>()
        / records.len() as f64
}
