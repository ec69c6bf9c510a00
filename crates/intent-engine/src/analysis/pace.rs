// ABOUTME: Statistical pace analyzer over kilometer splits (or laps without structure)
// ABOUTME: Noise guard, progressive trend, elevation profile, CV bands and warm-up/cool-down trimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::structural::round_rep_distance;
use super::{Candidate, Segment, SegmentSource};
use crate::config::{ClassifierConfig, PaceAnalysisConfig, ResolverConfig};
use crate::statistics::{coefficient_of_variation, mean, median};
use intent_core::constants::units::{METERS_PER_KM, SECONDS_PER_MINUTE};
use intent_core::models::{
    Activity, ClassificationContext, Confidence, EasyStructure, FartlekStructure, HillEvidence,
    HillStructure, HrZone, OtherReason, OtherStructure, ProgressiveStructure, RecoveryStructure,
    SegmentRange, SeriesPattern, SeriesStructure, TempoStructure, WorkoutStructure,
};
use tracing::debug;

/// Steady runs with at least this many segments earn high confidence
const WELL_SAMPLED_SEGMENTS: usize = 5;

/// Effort level suggested by heart-rate zones or the athlete baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intensity {
    Recovery,
    Easy,
    Hard,
}

/// Everything the steady-effort rule needs besides the segments themselves
struct SteadyContext<'a> {
    activity: &'a Activity,
    context: &'a ClassificationContext,
    resolver: &'a ResolverConfig,
}

/// Statistical analyzer over a pace series
///
/// Returns zero or more candidates; the resolver arbitrates between them.
pub struct PaceAnalyzer;

impl PaceAnalyzer {
    /// Analyze segments statistically
    ///
    /// The noise guard only applies to GPS splits: manual laps legitimately mix
    /// sprint and walking paces.
    #[must_use]
    pub fn analyze(
        segments: &[Segment],
        source: SegmentSource,
        activity: &Activity,
        context: &ClassificationContext,
        config: &ClassifierConfig,
    ) -> Vec<Candidate> {
        let pace_config = &config.pace;
        let usable: Vec<&Segment> = segments
            .iter()
            .filter(|segment| segment.distance >= pace_config.min_segment_distance)
            .collect();
        if usable.is_empty() {
            return Vec::new();
        }
        let paces: Vec<f64> = usable.iter().map(|segment| segment.pace).collect();

        if source == SegmentSource::Split && Self::is_gps_noise(&paces, pace_config) {
            debug!(segments = paces.len(), "implausible split paces, treating as GPS noise");
            return vec![Candidate::new(
                WorkoutStructure::Other(OtherStructure {
                    reason: OtherReason::GpsNoise,
                    distance_km: activity.distance_km(),
                }),
                Confidence::Low,
            )];
        }

        let mut candidates = Vec::new();
        if let Some(hills) = Self::elevation_profile(&usable, activity, pace_config) {
            candidates.push(hills);
        }

        if let Some(progressive) = Self::progressive(&paces, pace_config) {
            debug!(
                first = progressive.first_pace,
                last = progressive.last_pace,
                "negative-split progression"
            );
            candidates.push(Candidate::new(
                WorkoutStructure::Progressive(progressive),
                Confidence::High,
            ));
            return candidates;
        }

        let steady = SteadyContext {
            activity,
            context,
            resolver: &config.resolver,
        };
        candidates.push(Self::dispersion_verdict(&usable, &paces, &steady, pace_config));
        candidates
    }

    /// CV bands with warm-up/cool-down trimming
    fn dispersion_verdict(
        usable: &[&Segment],
        paces: &[f64],
        steady: &SteadyContext<'_>,
        config: &PaceAnalysisConfig,
    ) -> Candidate {
        let n = paces.len();
        let cv = coefficient_of_variation(paces);
        debug!(cv, segments = n, "pace dispersion");

        if cv < config.steady_cv {
            return Self::steady_verdict(usable, 0, n, steady, Confidence::High);
        }

        let (warmup, cooldown) = Self::edge_counts(paces, config);
        let main_len = n - warmup - cooldown;
        if warmup + cooldown > 0 && main_len >= 3 {
            let main = &paces[warmup..n - cooldown];
            let main_cv = coefficient_of_variation(main);
            debug!(warmup, cooldown, main_cv, "trimmed warm-up and cool-down");
            if main_cv < config.steady_cv {
                return Self::trimmed_verdict(usable, warmup, cooldown, steady, config);
            }
            if main_cv <= config.variable_cv {
                return Self::steady_verdict(
                    usable,
                    warmup,
                    n - cooldown,
                    steady,
                    Confidence::Medium,
                );
            }
        } else if cv <= config.variable_cv {
            return Self::steady_verdict(usable, 0, n, steady, Confidence::Medium);
        }

        Self::variability_verdict(usable, paces, cv, config)
    }

    /// Steady main set between slower edges
    fn trimmed_verdict(
        usable: &[&Segment],
        warmup: usize,
        cooldown: usize,
        steady: &SteadyContext<'_>,
        config: &PaceAnalysisConfig,
    ) -> Candidate {
        let n = usable.len();
        let main = segment_range(usable, warmup, n - cooldown);
        let warmup_range = (warmup > 0).then(|| segment_range(usable, 0, warmup));
        let cooldown_range = (cooldown > 0).then(|| segment_range(usable, n - cooldown, n));
        let confidence = if warmup_range.is_some() && cooldown_range.is_some() {
            Confidence::High
        } else {
            Confidence::Medium
        };
        let tempo = || {
            Candidate::new(
                WorkoutStructure::Tempo(TempoStructure {
                    warmup: warmup_range,
                    main,
                    cooldown: cooldown_range,
                }),
                confidence,
            )
        };

        match Self::context_intensity(main.avg_pace, steady) {
            Some(Intensity::Hard)
                if steady.activity.distance_km() >= steady.resolver.short_run_km =>
            {
                tempo()
            }
            Some(_) => Self::steady_verdict(usable, warmup, n - cooldown, steady, Confidence::High),
            None => {
                let edges: Vec<f64> = usable[..warmup]
                    .iter()
                    .chain(&usable[n - cooldown..])
                    .map(|segment| segment.pace)
                    .collect();
                if main.avg_pace <= mean(&edges) * (1.0 - config.tempo_edge_gap) {
                    tempo()
                } else {
                    Self::steady_verdict(usable, warmup, n - cooldown, steady, Confidence::High)
                }
            }
        }
    }

    /// Steady-effort rule over `usable[start..end]`, capped at `cap`
    fn steady_verdict(
        usable: &[&Segment],
        start: usize,
        end: usize,
        steady: &SteadyContext<'_>,
        cap: Confidence,
    ) -> Candidate {
        let range = segment_range(usable, start, end);
        let distance_km = steady.activity.distance_km();
        let (structure, confidence) = match Self::context_intensity(range.avg_pace, steady) {
            Some(Intensity::Recovery) => (
                WorkoutStructure::Recovery(RecoveryStructure {
                    distance_km,
                    avg_pace: range.avg_pace,
                }),
                Confidence::High,
            ),
            Some(Intensity::Hard) if distance_km >= steady.resolver.short_run_km => (
                WorkoutStructure::Tempo(TempoStructure {
                    warmup: None,
                    main: range,
                    cooldown: None,
                }),
                Confidence::High,
            ),
            _ => {
                let confidence = if range.len() >= WELL_SAMPLED_SEGMENTS {
                    Confidence::High
                } else {
                    Confidence::Medium
                };
                (
                    WorkoutStructure::Easy(EasyStructure {
                        distance_km,
                        avg_pace: Some(range.avg_pace),
                        long_run: distance_km >= steady.resolver.long_run_km,
                        basic: false,
                    }),
                    confidence,
                )
            }
        };
        Candidate::new(structure, confidence.min(cap))
    }

    /// Effort level from heart-rate zones first, then the pace baseline
    fn context_intensity(avg_pace: f64, steady: &SteadyContext<'_>) -> Option<Intensity> {
        let distance_km = steady.activity.distance_km();
        let short_enough_for_recovery = distance_km < steady.resolver.recovery_max_km;

        if let (Some(zones), Some(heart_rate)) =
            (steady.context.hr_zones, steady.activity.average_heartrate)
        {
            let zone = zones.zone_for(heart_rate);
            if zone.is_easy() {
                return Some(if zone == HrZone::Z1 && short_enough_for_recovery {
                    Intensity::Recovery
                } else {
                    Intensity::Easy
                });
            }
            if zone.is_tempo() {
                return Some(Intensity::Hard);
            }
        }

        let baseline = steady.context.athlete_stats?;
        if baseline.avg_easy_pace <= 0.0 {
            return None;
        }
        let pace_seconds = avg_pace * SECONDS_PER_MINUTE;
        if short_enough_for_recovery
            && pace_seconds >= baseline.avg_easy_pace * steady.resolver.recovery_pace_ratio
        {
            return Some(Intensity::Recovery);
        }
        if pace_seconds <= baseline.avg_easy_pace * steady.resolver.tempo_pace_ratio {
            return Some(Intensity::Hard);
        }
        None
    }

    /// Two-beat fast/slow alternation reads as intervals, anything else as fartlek
    fn variability_verdict(
        usable: &[&Segment],
        paces: &[f64],
        cv: f64,
        config: &PaceAnalysisConfig,
    ) -> Candidate {
        let avg = mean(paces);
        if Self::alternates(paces, config) {
            let fast: Vec<&Segment> = usable
                .iter()
                .copied()
                .filter(|segment| segment.pace < avg)
                .collect();
            let fast_paces: Vec<f64> = fast.iter().map(|segment| segment.pace).collect();
            debug!(repetitions = fast.len(), "fast/slow alternation in splits");
            return Candidate::new(
                WorkoutStructure::Series(SeriesStructure {
                    pattern: SeriesPattern::Alternating,
                    repetitions: fast.len(),
                    distances: fast
                        .iter()
                        .map(|segment| round_rep_distance(segment.distance))
                        .collect(),
                    rep_distance: None,
                    avg_rest_seconds: None,
                    avg_work_pace: Some(mean(&fast_paces)),
                }),
                Confidence::Medium,
            );
        }

        let fastest = paces.iter().copied().fold(f64::INFINITY, f64::min);
        let slowest = paces.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Candidate::new(
            WorkoutStructure::Fartlek(FartlekStructure {
                segments: paces.len(),
                pace_cv: cv,
                fastest_pace: fastest,
                slowest_pace: slowest,
            }),
            Confidence::Medium,
        )
    }

    /// Leading and trailing segments slower than `median * warmup_pace_ratio`
    fn edge_counts(paces: &[f64], config: &PaceAnalysisConfig) -> (usize, usize) {
        let Some(median_pace) = median(paces) else {
            return (0, 0);
        };
        let threshold = median_pace * config.warmup_pace_ratio;
        let warmup = paces
            .iter()
            .take(config.max_edge_segments)
            .take_while(|pace| **pace > threshold)
            .count();
        let cooldown = paces
            .iter()
            .rev()
            .take(config.max_edge_segments)
            .take_while(|pace| **pace > threshold)
            .count()
            .min(paces.len() - warmup);
        (warmup, cooldown)
    }

    fn is_gps_noise(paces: &[f64], config: &PaceAnalysisConfig) -> bool {
        if paces.iter().any(|pace| *pace < config.min_plausible_pace) {
            return true;
        }
        let implausible = paces
            .windows(2)
            .filter(|pair| pair[0].max(pair[1]) / pair[0].min(pair[1]) > config.max_adjacent_pace_ratio)
            .count();
        implausible >= config.noisy_transitions
    }

    fn progressive(paces: &[f64], config: &PaceAnalysisConfig) -> Option<ProgressiveStructure> {
        if paces.len() < config.min_trend_segments {
            return None;
        }
        let never_slows = paces
            .windows(2)
            .all(|pair| pair[1] <= pair[0] + config.progressive_tolerance);
        let (first, last) = (*paces.first()?, *paces.last()?);
        (never_slows && last <= first * (1.0 - config.progressive_min_drop)).then_some(
            ProgressiveStructure {
                segments: paces.len(),
                first_pace: first,
                last_pace: last,
            },
        )
    }

    fn alternates(paces: &[f64], config: &PaceAnalysisConfig) -> bool {
        if paces.len() < config.min_trend_segments {
            return false;
        }
        let deltas: Vec<f64> = paces.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let flips = deltas
            .windows(2)
            .filter(|pair| pair[0] * pair[1] < 0.0)
            .count();
        flips as f64 / (deltas.len() - 1) as f64 >= config.alternation_ratio
    }

    /// Steep terrain whose split elevation repeatedly climbs and descends
    fn elevation_profile(
        usable: &[&Segment],
        activity: &Activity,
        config: &PaceAnalysisConfig,
    ) -> Option<Candidate> {
        let gain = activity.total_elevation_gain?;
        let distance_km = activity.distance_km();
        if distance_km <= 0.0 {
            return None;
        }
        let gain_per_km = gain / distance_km;
        if gain_per_km <= config.steep_gain_per_km {
            return None;
        }

        let deltas: Vec<f64> = usable
            .iter()
            .filter_map(|segment| segment.elevation_difference)
            .filter(|delta| delta.abs() >= config.significant_elevation_delta)
            .collect();
        let reversals = deltas
            .windows(2)
            .filter(|pair| (pair[0] > 0.0) != (pair[1] > 0.0))
            .count();
        if reversals < config.min_elevation_reversals {
            return None;
        }

        let climbs: Vec<f64> = deltas.iter().copied().filter(|delta| *delta > 0.0).collect();
        debug!(gain_per_km, reversals, "repeating climbs on steep terrain");
        Some(Candidate::new(
            WorkoutStructure::Hills(HillStructure {
                evidence: HillEvidence::ElevationProfile,
                repetitions: climbs.len(),
                avg_climb: Some(mean(&climbs)),
                gain_per_km: Some(gain_per_km),
            }),
            Confidence::Medium,
        ))
    }
}

fn segment_range(usable: &[&Segment], start: usize, end: usize) -> SegmentRange {
    let slice = &usable[start..end];
    let paces: Vec<f64> = slice.iter().map(|segment| segment.pace).collect();
    SegmentRange {
        start,
        end,
        distance_km: slice.iter().map(|segment| segment.distance).sum::<f64>() / METERS_PER_KM,
        avg_pace: mean(&paces),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SegmentNormalizer;
    use intent_core::models::{Split, WorkoutType};

    fn splits(paces: &[f64]) -> Vec<Segment> {
        let raw: Vec<Split> = paces
            .iter()
            .map(|pace| {
                let seconds = (pace * 60.0).round() as u32;
                Split::new(1000.0, seconds, seconds, 1000.0 / (pace * 60.0))
            })
            .collect();
        SegmentNormalizer::from_splits(&raw)
    }

    fn analyze(paces: &[f64]) -> Vec<Candidate> {
        let activity = Activity::new(paces.len() as f64 * 1000.0, 3000, 3000);
        PaceAnalyzer::analyze(
            &splits(paces),
            SegmentSource::Split,
            &activity,
            &ClassificationContext::default(),
            &ClassifierConfig::default(),
        )
    }

    #[test]
    fn test_alternating_splits_read_as_series() {
        let candidates = analyze(&[4.0, 5.6, 4.0, 5.6, 4.0, 5.6, 4.0, 5.6]);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].workout_type(), WorkoutType::Series);
        assert_eq!(candidates[0].confidence, Confidence::Medium);
    }

    #[test]
    fn test_irregular_variation_reads_as_fartlek() {
        let candidates = analyze(&[5.0, 4.0, 4.1, 5.8, 5.7, 4.3, 5.9, 5.2]);
        assert_eq!(candidates[0].workout_type(), WorkoutType::Fartlek);
    }

    #[test]
    fn test_mild_variation_is_capped_at_medium() {
        let candidates = analyze(&[5.0, 5.6, 5.1, 5.7, 4.9, 5.6, 5.2, 5.0]);
        assert_eq!(candidates[0].workout_type(), WorkoutType::Rodaje);
        assert_eq!(candidates[0].confidence, Confidence::Medium);
    }

    #[test]
    fn test_lap_source_skips_noise_guard() {
        let activity = Activity::new(4000.0, 1200, 1200);
        let candidates = PaceAnalyzer::analyze(
            &splits(&[5.0, 2.4, 5.0, 5.0]),
            SegmentSource::Lap,
            &activity,
            &ClassificationContext::default(),
            &ClassifierConfig::default(),
        );
        assert_ne!(candidates[0].workout_type(), WorkoutType::Otro);
    }
}
