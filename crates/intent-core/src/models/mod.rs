// ABOUTME: Data model for the classifier: activities, zones, athlete baselines and verdicts
// ABOUTME: Every entity is built fresh per classification call from caller-supplied data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Activity, lap and split records
mod activity;
/// Athlete profile, baseline and history records
mod athlete;
/// Verdict, confidence and structure types
mod classification;
/// Heart-rate zone bands
mod zones;

pub use activity::{Activity, Lap, Split};
pub use athlete::{AthleteBaseline, AthleteProfile, HistoricalActivity};
pub use classification::{
    ClassificationContext, ClassificationResult, Confidence, EasyStructure, FartlekStructure,
    HillEvidence, HillStructure, OtherReason, OtherStructure, ProgressiveStructure,
    RaceStructure, RecoveryStructure, SegmentRange, SeriesPattern, SeriesStructure,
    TempoStructure, WorkoutStructure, WorkoutType,
};
pub use zones::{HrZone, HrZones, ZoneBand};
