// ABOUTME: Workout classifier pipeline from raw activity to explained verdict
// ABOUTME: Routes laps and splits to the analyzers and classifies batches in parallel with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::analysis::{
    Candidate, PaceAnalyzer, Segment, SegmentNormalizer, SegmentSource, StructuralDetector,
};
use crate::config::ClassifierConfig;
use crate::explanation::ExplanationGenerator;
use crate::resolver::{ResolverInput, WorkoutTypeResolver};
use intent_core::models::{
    Activity, ClassificationContext, ClassificationResult, HillEvidence, HillStructure,
    OtherReason, OtherStructure, WorkoutStructure,
};
use rayon::prelude::*;
use tracing::{debug, info};

/// Workout classifier
///
/// Holds only immutable thresholds, so one instance can be shared across
/// threads and reused for any number of activities.
#[derive(Debug, Clone, Default)]
pub struct WorkoutClassifier {
    config: ClassifierConfig,
}

impl WorkoutClassifier {
    /// Classifier with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with custom thresholds
    #[must_use]
    pub const fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one activity
    ///
    /// Laps are read structurally when there are at least two; a single lap
    /// covering the whole run counts as no laps. Laps without rest structure
    /// are analyzed as a pace series in place of the splits, which then only
    /// contribute GPS noise and elevation evidence.
    #[must_use]
    pub fn classify(
        &self,
        activity: &Activity,
        context: Option<&ClassificationContext>,
    ) -> ClassificationResult {
        let context = context.copied().unwrap_or_default();

        let laps = if activity.laps.len() >= 2 {
            SegmentNormalizer::from_laps(
                &activity.laps,
                self.config.structural.recovery_lap_max_distance,
            )
        } else {
            Vec::new()
        };
        let splits = SegmentNormalizer::from_splits(&activity.splits);
        let structural = StructuralDetector::detect(&laps, &self.config.structural);
        let statistical =
            self.statistical(&laps, &splits, structural.is_some(), activity, &context);

        let verdict = WorkoutTypeResolver::resolve(
            ResolverInput {
                activity,
                context: &context,
                structural,
                statistical,
                has_segment_data: activity.has_segments(),
            },
            &self.config.resolver,
        );

        debug!(
            workout_type = %verdict.workout_type(),
            confidence = ?verdict.confidence,
            splits = activity.splits.len(),
            laps = activity.laps.len(),
            "activity classified"
        );
        ClassificationResult {
            workout_type: verdict.workout_type(),
            confidence: verdict.confidence,
            human_readable: ExplanationGenerator::explain(&verdict.structure),
            structure: verdict.structure,
        }
    }

    fn statistical(
        &self,
        laps: &[Segment],
        splits: &[Segment],
        has_structure: bool,
        activity: &Activity,
        context: &ClassificationContext,
    ) -> Vec<Candidate> {
        let analyze = |segments: &[Segment], source: SegmentSource| {
            if segments.is_empty() {
                Vec::new()
            } else {
                PaceAnalyzer::analyze(segments, source, activity, context, &self.config)
            }
        };

        let from_splits = analyze(splits, SegmentSource::Split);
        if has_structure || laps.is_empty() || (laps.len() < 2 && !splits.is_empty()) {
            return from_splits;
        }

        debug!(laps = laps.len(), "laps without rest structure read as a pace series");
        let mut candidates = analyze(laps, SegmentSource::Lap);
        candidates.extend(from_splits.into_iter().filter(is_split_evidence));
        candidates
    }

    /// Classify many activities in parallel; output order matches input order
    #[must_use]
    pub fn classify_batch(
        &self,
        items: &[(Activity, Option<ClassificationContext>)],
    ) -> Vec<ClassificationResult> {
        info!(activities = items.len(), "batch reclassification");
        items
            .par_iter()
            .map(|(activity, context)| self.classify(activity, context.as_ref()))
            .collect()
    }
}

/// Split verdicts that laps cannot provide: GPS noise and the elevation profile
fn is_split_evidence(candidate: &Candidate) -> bool {
    matches!(
        candidate.structure,
        WorkoutStructure::Other(OtherStructure {
            reason: OtherReason::GpsNoise,
            ..
        }) | WorkoutStructure::Hills(HillStructure {
            evidence: HillEvidence::ElevationProfile,
            ..
        })
    )
}

/// Classify one activity with default thresholds
#[must_use]
pub fn classify(
    activity: &Activity,
    context: Option<&ClassificationContext>,
) -> ClassificationResult {
    WorkoutClassifier::new().classify(activity, context)
}
