// ABOUTME: Workout type resolver combining analyzer candidates with zone and baseline context
// ABOUTME: Handles degraded inputs, the race-effort check and the fixed priority order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Decision policy
//!
//! Candidates are ranked `SERIES > CUESTAS > COMPETICION > TEMPO > PROGRESIVO >
//! FARTLEK > RODAJE > OTRO`; ties on type go to the higher confidence. The
//! race-effort check adds a COMPETICION candidate, so it overrides every
//! statistical verdict but never lap-proven intervals or hills.

use crate::analysis::Candidate;
use crate::config::ResolverConfig;
use intent_core::constants::units::SECONDS_PER_MINUTE;
use intent_core::models::{
    Activity, ClassificationContext, Confidence, EasyStructure, OtherReason, OtherStructure,
    RaceStructure, WorkoutStructure, WorkoutType,
};
use tracing::debug;

/// Inputs gathered by the classifier for one activity
#[derive(Debug)]
pub struct ResolverInput<'a> {
    /// Activity being classified
    pub activity: &'a Activity,
    /// Per-athlete context
    pub context: &'a ClassificationContext,
    /// Lap structure verdict, if any
    pub structural: Option<Candidate>,
    /// Statistical verdicts
    pub statistical: Vec<Candidate>,
    /// Whether the activity carried splits or at least two laps
    pub has_segment_data: bool,
}

/// Workout type resolver
pub struct WorkoutTypeResolver;

impl WorkoutTypeResolver {
    /// Resolve one verdict
    #[must_use]
    pub fn resolve(input: ResolverInput<'_>, config: &ResolverConfig) -> Candidate {
        let activity = input.activity;

        if !input.has_segment_data {
            debug!("no splits or laps, falling back to aggregate totals");
            return Self::basic_fallback(activity);
        }

        if input.structural.is_none() && activity.distance < config.min_classifiable_distance {
            debug!(distance = activity.distance, "activity too short to classify");
            return Candidate::new(
                WorkoutStructure::Other(OtherStructure {
                    reason: OtherReason::TooShort,
                    distance_km: activity.distance_km(),
                }),
                Confidence::Low,
            );
        }

        let gps_noise = input.statistical.iter().any(|candidate| {
            matches!(
                candidate.structure,
                WorkoutStructure::Other(OtherStructure {
                    reason: OtherReason::GpsNoise,
                    ..
                })
            )
        });

        if let (Some(structural), Some(zones), Some(heart_rate)) = (
            input.structural.as_ref(),
            input.context.hr_zones,
            activity.average_heartrate,
        ) {
            if zones.zone_for(heart_rate).is_easy() {
                debug!(
                    structural = %structural.workout_type(),
                    heart_rate,
                    "lap structure disagrees with easy heart rate, keeping structure"
                );
            }
        }

        let mut candidates: Vec<Candidate> = input
            .structural
            .into_iter()
            .chain(input.statistical)
            .collect();
        if !gps_noise {
            if let Some(race) = Self::race_effort(activity, input.context, config) {
                candidates.push(race);
            }
        }

        let chosen = candidates.into_iter().max_by(|a, b| {
            Self::priority(a.workout_type())
                .cmp(&Self::priority(b.workout_type()))
                .then(a.confidence.cmp(&b.confidence))
        });
        chosen.unwrap_or_else(|| {
            debug!("no analyzer produced a candidate");
            Self::basic_fallback(activity)
        })
    }

    /// Rank in the resolution order, higher wins
    #[must_use]
    pub const fn priority(workout_type: WorkoutType) -> u8 {
        match workout_type {
            WorkoutType::Series => 8,
            WorkoutType::Cuestas => 7,
            WorkoutType::Competicion => 6,
            WorkoutType::Tempo => 5,
            WorkoutType::Progresivo => 4,
            WorkoutType::Fartlek => 3,
            WorkoutType::Rodaje | WorkoutType::Recuperacion => 2,
            WorkoutType::Otro => 1,
        }
    }

    /// Race-effort check, only with a baseline
    ///
    /// Pace signal: faster than `easy * 0.90` or within 5% of competition pace.
    /// Heart-rate signal (needs zones): average HR at or above Z5, or at least
    /// 40% of lap time in Z5. Both signals give high confidence, one gives medium.
    #[must_use]
    pub fn race_effort(
        activity: &Activity,
        context: &ClassificationContext,
        config: &ResolverConfig,
    ) -> Option<Candidate> {
        let baseline = context.athlete_stats?;
        let pace_seconds = activity.average_pace_seconds_per_km()?;

        let pace_signal = (baseline.avg_easy_pace > 0.0
            && pace_seconds < baseline.avg_easy_pace * config.race_easy_pace_ratio)
            || (baseline.avg_competition_pace > 0.0
                && (pace_seconds - baseline.avg_competition_pace).abs()
                    <= baseline.avg_competition_pace * config.race_competition_tolerance);

        let z5_time_share = context
            .hr_zones
            .and_then(|zones| z5_time_share(activity, f64::from(zones.z5.min)));
        let hr_signal = context.hr_zones.is_some_and(|zones| {
            activity
                .average_heartrate
                .is_some_and(|heart_rate| heart_rate >= f64::from(zones.z5.min))
                || z5_time_share.is_some_and(|share| share >= config.race_z5_time_share)
        });

        if !pace_signal && !hr_signal {
            return None;
        }
        let confidence = if pace_signal && hr_signal {
            Confidence::High
        } else {
            Confidence::Medium
        };
        debug!(pace_signal, hr_signal, pace_seconds, "race effort detected");
        Some(Candidate::new(
            WorkoutStructure::Race(RaceStructure {
                avg_pace: pace_seconds / SECONDS_PER_MINUTE,
                pace_signal,
                hr_signal,
                z5_time_share,
            }),
            confidence,
        ))
    }

    fn basic_fallback(activity: &Activity) -> Candidate {
        Candidate::new(
            WorkoutStructure::Easy(EasyStructure {
                distance_km: activity.distance_km(),
                avg_pace: None,
                long_run: false,
                basic: true,
            }),
            Confidence::Low,
        )
    }
}

/// Share of lap moving time whose average heart rate sits in Z5
fn z5_time_share(activity: &Activity, z5_floor: f64) -> Option<f64> {
    let (z5_time, total_time) = activity
        .laps
        .iter()
        .filter(|lap| lap.moving_time > 0)
        .filter_map(|lap| lap.average_heartrate.map(|hr| (hr, f64::from(lap.moving_time))))
        .fold((0.0, 0.0), |(z5, total), (hr, time)| {
            (if hr >= z5_floor { z5 + time } else { z5 }, total + time)
        });
    (total_time > 0.0).then(|| z5_time / total_time)
}
