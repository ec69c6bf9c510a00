// ABOUTME: Segment-level analyzers feeding the workout type resolver
// ABOUTME: Normalizes laps and splits, then reads lap structure and split pace statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use intent_core::models::{Confidence, WorkoutStructure, WorkoutType};
use serde::{Deserialize, Serialize};

/// Split pace statistics, trimming, trend and noise detection
pub mod pace;
/// Canonical per-segment unit built from laps or splits
pub mod segments;
/// Lap interval, pyramid and hill-repeat detection
pub mod structural;

pub use pace::PaceAnalyzer;
pub use segments::{Segment, SegmentNormalizer, SegmentSource};
pub use structural::StructuralDetector;

/// A verdict proposed by one analyzer, pending resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Supporting structure; also determines the workout type
    pub structure: WorkoutStructure,
    /// Analyzer's confidence
    pub confidence: Confidence,
}

impl Candidate {
    /// Create a candidate
    #[must_use]
    pub const fn new(structure: WorkoutStructure, confidence: Confidence) -> Self {
        Self {
            structure,
            confidence,
        }
    }

    /// Proposed workout type
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        self.structure.workout_type()
    }
}
