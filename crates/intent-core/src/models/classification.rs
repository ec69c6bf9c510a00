// ABOUTME: Classification verdict types: workout type tags, confidence, context and result
// ABOUTME: The structure payload is a tagged union with one concrete variant per workout type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AthleteBaseline, HrZones};

/// Training intent inferred for an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutType {
    /// Interval session
    Series,
    /// Sustained threshold effort
    Tempo,
    /// Easy aerobic run
    Rodaje,
    /// Hill repeats
    Cuestas,
    /// Recovery jog
    Recuperacion,
    /// Negative-split progressive run
    Progresivo,
    /// Unstructured speed play
    Fartlek,
    /// Race or time trial
    Competicion,
    /// Unclassifiable
    Otro,
}

impl WorkoutType {
    /// Every workout type tag
    pub const ALL: [Self; 9] = [
        Self::Series,
        Self::Tempo,
        Self::Rodaje,
        Self::Cuestas,
        Self::Recuperacion,
        Self::Progresivo,
        Self::Fartlek,
        Self::Competicion,
        Self::Otro,
    ];

    /// Wire tag ("SERIES", "TEMPO", ...)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Series => "SERIES",
            Self::Tempo => "TEMPO",
            Self::Rodaje => "RODAJE",
            Self::Cuestas => "CUESTAS",
            Self::Recuperacion => "RECUPERACION",
            Self::Progresivo => "PROGRESIVO",
            Self::Fartlek => "FARTLEK",
            Self::Competicion => "COMPETICION",
            Self::Otro => "OTRO",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence in a verdict, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Fallback or noisy evidence
    Low,
    /// One supporting signal
    Medium,
    /// Clear structural or statistical evidence
    High,
}

/// Per-athlete context precomputed once and passed to every classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationContext {
    /// Personalized heart-rate zones
    #[serde(default, alias = "hrZones")]
    pub hr_zones: Option<HrZones>,
    /// Historical baseline
    #[serde(default, alias = "athleteStats")]
    pub athlete_stats: Option<AthleteBaseline>,
}

impl ClassificationContext {
    /// Context with heart-rate zones only
    #[must_use]
    pub const fn with_zones(hr_zones: HrZones) -> Self {
        Self {
            hr_zones: Some(hr_zones),
            athlete_stats: None,
        }
    }

    /// Add a baseline
    #[must_use]
    pub const fn and_baseline(mut self, baseline: AthleteBaseline) -> Self {
        self.athlete_stats = Some(baseline);
        self
    }
}

/// Contiguous run of segments, `start..end` (end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentRange {
    /// Index of the first segment
    pub start: usize,
    /// Index one past the last segment
    pub end: usize,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean pace in min/km
    pub avg_pace: f64,
}

impl SegmentRange {
    /// Number of segments in the range
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shape of an interval session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesPattern {
    /// Repetitions of one distance
    Repeats,
    /// Distances rising then symmetrically falling
    Pyramid,
    /// Irregular distances separated by rests
    Mixed,
    /// Fast/slow alternation seen in kilometer splits
    Alternating,
}

/// Interval session details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStructure {
    /// Detected pattern
    pub pattern: SeriesPattern,
    /// Number of work intervals
    pub repetitions: usize,
    /// Work interval distances in meters, rounded, in order
    pub distances: Vec<f64>,
    /// Common repetition distance for `Repeats`, in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_distance: Option<f64>,
    /// Mean rest between intervals in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rest_seconds: Option<f64>,
    /// Mean pace of the work intervals in min/km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_work_pace: Option<f64>,
}

/// Tempo session: optional warm-up and cool-down around a steady main set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempoStructure {
    /// Leading easy segments
    pub warmup: Option<SegmentRange>,
    /// Steady fast block
    pub main: SegmentRange,
    /// Trailing easy segments
    pub cooldown: Option<SegmentRange>,
}

/// Easy run details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EasyStructure {
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean pace in min/km when segment data was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_pace: Option<f64>,
    /// Whether the distance qualifies as a long run
    pub long_run: bool,
    /// Whether the verdict came from aggregate totals only
    pub basic: bool,
}

/// Evidence behind a hill verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HillEvidence {
    /// Short uphill laps alternating with recovery laps
    LapRepeats,
    /// Steep terrain with repeating climbs and descents in the splits
    ElevationProfile,
}

/// Hill session details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HillStructure {
    /// Where the hill signature was found
    pub evidence: HillEvidence,
    /// Number of climbs
    pub repetitions: usize,
    /// Mean climb per repetition in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_climb: Option<f64>,
    /// Total elevation gain per kilometer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain_per_km: Option<f64>,
}

/// Recovery jog details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryStructure {
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean pace in min/km
    pub avg_pace: f64,
}

/// Progressive run details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressiveStructure {
    /// Number of segments in the progression
    pub segments: usize,
    /// Pace of the first segment in min/km
    pub first_pace: f64,
    /// Pace of the last segment in min/km
    pub last_pace: f64,
}

/// Fartlek details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FartlekStructure {
    /// Number of segments analyzed
    pub segments: usize,
    /// Coefficient of variation of segment paces
    pub pace_cv: f64,
    /// Fastest segment pace in min/km
    pub fastest_pace: f64,
    /// Slowest segment pace in min/km
    pub slowest_pace: f64,
}

/// Race effort details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceStructure {
    /// Average pace in min/km
    pub avg_pace: f64,
    /// Pace was markedly faster than the athlete's training pace
    pub pace_signal: bool,
    /// Heart rate sat in Z5
    pub hr_signal: bool,
    /// Share of segment time spent in Z5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z5_time_share: Option<f64>,
}

/// Why an activity could not be classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherReason {
    /// Split paces change in ways no runner can, most likely GPS error
    GpsNoise,
    /// Shorter than a kilometer with no structure
    TooShort,
}

/// Unclassifiable activity details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherStructure {
    /// Reason for the fallback
    pub reason: OtherReason,
    /// Distance in kilometers
    pub distance_km: f64,
}

/// Supporting structure for a verdict, one variant per workout type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkoutStructure {
    /// SERIES
    Series(SeriesStructure),
    /// TEMPO
    Tempo(TempoStructure),
    /// RODAJE
    Easy(EasyStructure),
    /// CUESTAS
    Hills(HillStructure),
    /// RECUPERACION
    Recovery(RecoveryStructure),
    /// PROGRESIVO
    Progressive(ProgressiveStructure),
    /// FARTLEK
    Fartlek(FartlekStructure),
    /// COMPETICION
    Race(RaceStructure),
    /// OTRO
    Other(OtherStructure),
}

impl WorkoutStructure {
    /// Workout type this structure belongs to
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Series(_) => WorkoutType::Series,
            Self::Tempo(_) => WorkoutType::Tempo,
            Self::Easy(_) => WorkoutType::Rodaje,
            Self::Hills(_) => WorkoutType::Cuestas,
            Self::Recovery(_) => WorkoutType::Recuperacion,
            Self::Progressive(_) => WorkoutType::Progresivo,
            Self::Fartlek(_) => WorkoutType::Fartlek,
            Self::Race(_) => WorkoutType::Competicion,
            Self::Other(_) => WorkoutType::Otro,
        }
    }
}

/// Final verdict for one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Inferred training intent
    pub workout_type: WorkoutType,
    /// Confidence in the verdict
    pub confidence: Confidence,
    /// Spanish-language justification
    pub human_readable: String,
    /// Type-specific supporting structure
    pub structure: WorkoutStructure,
}
