// ABOUTME: Classifier threshold configuration with defaults, environment overrides and validation
// ABOUTME: Groups lap structure, split statistics and resolver thresholds into one serializable value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use intent_core::constants::{pace, resolver, structure};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Prefix shared by every classifier environment variable
pub const ENV_PREFIX: &str = "WORKOUT_INTENT_";

/// Thresholds for lap structure detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralConfig {
    /// Minimum stopped time in seconds that marks a recovery gap
    pub rest_gap_seconds: f64,
    /// Relative tolerance for interval distances to count as equal
    pub equal_distance_tolerance: f64,
    /// Maximum relative deviation of a rest from the median rest
    pub rest_consistency_tolerance: f64,
    /// Edge laps longer than this multiple of the median are warm-up or cool-down
    pub edge_lap_distance_ratio: f64,
    /// Laps shorter than this many meters are recorded pauses
    pub recovery_lap_max_distance: f64,
    /// Minimum work intervals for a rest-separated session
    pub min_interval_repetitions: usize,
    /// Minimum share of interval boundaries that must carry a rest
    pub min_rested_share: f64,
    /// Hill effort laps are shorter than this, in meters
    pub hill_lap_max_distance: f64,
    /// Minimum climb on a hill effort lap, in meters
    pub hill_lap_min_gain: f64,
    /// Minimum uphill efforts for a hill session
    pub min_hill_repetitions: usize,
}

impl Default for StructuralConfig {
    fn default() -> Self {
        Self {
            rest_gap_seconds: structure::REST_GAP_SECONDS,
            equal_distance_tolerance: structure::EQUAL_DISTANCE_TOLERANCE,
            rest_consistency_tolerance: structure::REST_CONSISTENCY_TOLERANCE,
            edge_lap_distance_ratio: structure::EDGE_LAP_DISTANCE_RATIO,
            recovery_lap_max_distance: structure::RECOVERY_LAP_MAX_DISTANCE,
            min_interval_repetitions: structure::MIN_INTERVAL_REPETITIONS,
            min_rested_share: structure::MIN_RESTED_SHARE,
            hill_lap_max_distance: structure::HILL_LAP_MAX_DISTANCE,
            hill_lap_min_gain: structure::HILL_LAP_MIN_GAIN,
            min_hill_repetitions: structure::MIN_HILL_REPETITIONS,
        }
    }
}

impl StructuralConfig {
    fn load(reader: &EnvReader) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            rest_gap_seconds: reader.read("REST_GAP_SECONDS", defaults.rest_gap_seconds)?,
            equal_distance_tolerance: reader
                .read("EQUAL_DISTANCE_TOLERANCE", defaults.equal_distance_tolerance)?,
            rest_consistency_tolerance: reader.read(
                "REST_CONSISTENCY_TOLERANCE",
                defaults.rest_consistency_tolerance,
            )?,
            edge_lap_distance_ratio: reader
                .read("EDGE_LAP_DISTANCE_RATIO", defaults.edge_lap_distance_ratio)?,
            recovery_lap_max_distance: reader
                .read("RECOVERY_LAP_MAX_DISTANCE", defaults.recovery_lap_max_distance)?,
            min_interval_repetitions: reader
                .read("MIN_INTERVAL_REPETITIONS", defaults.min_interval_repetitions)?,
            min_rested_share: reader.read("MIN_RESTED_SHARE", defaults.min_rested_share)?,
            hill_lap_max_distance: reader
                .read("HILL_LAP_MAX_DISTANCE", defaults.hill_lap_max_distance)?,
            hill_lap_min_gain: reader.read("HILL_LAP_MIN_GAIN", defaults.hill_lap_min_gain)?,
            min_hill_repetitions: reader
                .read("MIN_HILL_REPETITIONS", defaults.min_hill_repetitions)?,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rest_gap_seconds <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rest_gap_seconds must be positive",
            ));
        }
        if !(0.0..1.0).contains(&self.equal_distance_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "equal_distance_tolerance must be in [0, 1)",
            ));
        }
        if self.rest_consistency_tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rest_consistency_tolerance must not be negative",
            ));
        }
        if self.edge_lap_distance_ratio <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "edge_lap_distance_ratio must be greater than 1",
            ));
        }
        if self.recovery_lap_max_distance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "recovery_lap_max_distance must not be negative",
            ));
        }
        if self.min_interval_repetitions < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_interval_repetitions must be at least 2",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_rested_share) {
            return Err(ConfigError::ValueOutOfRange(
                "min_rested_share must be in [0, 1]",
            ));
        }
        if self.hill_lap_max_distance <= 0.0 || self.hill_lap_min_gain <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "hill lap distance and gain must be positive",
            ));
        }
        if self.min_hill_repetitions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_hill_repetitions must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Thresholds for split pace statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceAnalysisConfig {
    /// Coefficient of variation below which an effort is steady
    pub steady_cv: f64,
    /// Coefficient of variation above which an effort is highly variable
    pub variable_cv: f64,
    /// Edge segments slower than `median * ratio` are warm-up or cool-down
    pub warmup_pace_ratio: f64,
    /// Maximum segments trimmed at each edge
    pub max_edge_segments: usize,
    /// Main set must be this fraction faster than the trimmed edges to read as tempo
    pub tempo_edge_gap: f64,
    /// Per-segment pace increase tolerated in a progressive run, min/km
    pub progressive_tolerance: f64,
    /// Minimum first-to-last pace drop for a progressive run, as a fraction
    pub progressive_min_drop: f64,
    /// Minimum segments for trend and alternation detection
    pub min_trend_segments: usize,
    /// Share of consecutive deltas that must flip sign for an alternation
    pub alternation_ratio: f64,
    /// Segments shorter than this many meters are ignored
    pub min_segment_distance: f64,
    /// Fastest plausible split pace, min/km
    pub min_plausible_pace: f64,
    /// Adjacent pace ratio beyond which a change is implausible
    pub max_adjacent_pace_ratio: f64,
    /// Implausible transitions that mark the splits as noise
    pub noisy_transitions: usize,
    /// Gain per kilometer above which terrain is steep, in meters
    pub steep_gain_per_km: f64,
    /// Split elevation delta that counts as a climb or descent, in meters
    pub significant_elevation_delta: f64,
    /// Climb/descent reversals needed for a repeating hill profile
    pub min_elevation_reversals: usize,
}

impl Default for PaceAnalysisConfig {
    fn default() -> Self {
        Self {
            steady_cv: pace::STEADY_CV,
            variable_cv: pace::VARIABLE_CV,
            warmup_pace_ratio: pace::WARMUP_PACE_RATIO,
            max_edge_segments: pace::MAX_EDGE_SEGMENTS,
            tempo_edge_gap: pace::TEMPO_EDGE_GAP,
            progressive_tolerance: pace::PROGRESSIVE_TOLERANCE,
            progressive_min_drop: pace::PROGRESSIVE_MIN_DROP,
            min_trend_segments: pace::MIN_TREND_SEGMENTS,
            alternation_ratio: pace::ALTERNATION_RATIO,
            min_segment_distance: pace::MIN_SEGMENT_DISTANCE,
            min_plausible_pace: pace::MIN_PLAUSIBLE_PACE,
            max_adjacent_pace_ratio: pace::MAX_ADJACENT_PACE_RATIO,
            noisy_transitions: pace::NOISY_TRANSITIONS,
            steep_gain_per_km: pace::STEEP_GAIN_PER_KM,
            significant_elevation_delta: pace::SIGNIFICANT_ELEVATION_DELTA,
            min_elevation_reversals: pace::MIN_ELEVATION_REVERSALS,
        }
    }
}

impl PaceAnalysisConfig {
    fn load(reader: &EnvReader) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            steady_cv: reader.read("STEADY_CV", defaults.steady_cv)?,
            variable_cv: reader.read("VARIABLE_CV", defaults.variable_cv)?,
            warmup_pace_ratio: reader.read("WARMUP_PACE_RATIO", defaults.warmup_pace_ratio)?,
            max_edge_segments: reader.read("MAX_EDGE_SEGMENTS", defaults.max_edge_segments)?,
            tempo_edge_gap: reader.read("TEMPO_EDGE_GAP", defaults.tempo_edge_gap)?,
            progressive_tolerance: reader
                .read("PROGRESSIVE_TOLERANCE", defaults.progressive_tolerance)?,
            progressive_min_drop: reader
                .read("PROGRESSIVE_MIN_DROP", defaults.progressive_min_drop)?,
            min_trend_segments: reader.read("MIN_TREND_SEGMENTS", defaults.min_trend_segments)?,
            alternation_ratio: reader.read("ALTERNATION_RATIO", defaults.alternation_ratio)?,
            min_segment_distance: reader
                .read("MIN_SEGMENT_DISTANCE", defaults.min_segment_distance)?,
            min_plausible_pace: reader.read("MIN_PLAUSIBLE_PACE", defaults.min_plausible_pace)?,
            max_adjacent_pace_ratio: reader
                .read("MAX_ADJACENT_PACE_RATIO", defaults.max_adjacent_pace_ratio)?,
            noisy_transitions: reader.read("NOISY_TRANSITIONS", defaults.noisy_transitions)?,
            steep_gain_per_km: reader.read("STEEP_GAIN_PER_KM", defaults.steep_gain_per_km)?,
            significant_elevation_delta: reader.read(
                "SIGNIFICANT_ELEVATION_DELTA",
                defaults.significant_elevation_delta,
            )?,
            min_elevation_reversals: reader
                .read("MIN_ELEVATION_REVERSALS", defaults.min_elevation_reversals)?,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.steady_cv <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("steady_cv must be positive"));
        }
        if self.steady_cv >= self.variable_cv {
            return Err(ConfigError::InvalidRange(
                "steady_cv must be below variable_cv",
            ));
        }
        if self.warmup_pace_ratio <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "warmup_pace_ratio must be greater than 1",
            ));
        }
        if !(0.0..1.0).contains(&self.tempo_edge_gap) {
            return Err(ConfigError::ValueOutOfRange(
                "tempo_edge_gap must be in [0, 1)",
            ));
        }
        if self.progressive_tolerance < 0.0 || !(0.0..1.0).contains(&self.progressive_min_drop) {
            return Err(ConfigError::ValueOutOfRange(
                "progressive thresholds must be non-negative fractions",
            ));
        }
        if self.min_trend_segments < 3 {
            return Err(ConfigError::ValueOutOfRange(
                "min_trend_segments must be at least 3",
            ));
        }
        if self.alternation_ratio <= 0.0 || self.alternation_ratio > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "alternation_ratio must be in (0, 1]",
            ));
        }
        if self.min_segment_distance < 0.0 || self.min_plausible_pace <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "segment distance and plausible pace must be positive",
            ));
        }
        if self.max_adjacent_pace_ratio <= 1.0 || self.noisy_transitions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_adjacent_pace_ratio must exceed 1 and noisy_transitions must be at least 1",
            ));
        }
        if self.steep_gain_per_km <= 0.0 || self.significant_elevation_delta <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "elevation thresholds must be positive",
            ));
        }
        Ok(())
    }
}

/// Thresholds for the decision policy and steady-effort refinements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Minimum distance in meters for a verdict without lap structure
    pub min_classifiable_distance: f64,
    /// Pace below `easy * ratio` signals a race
    pub race_easy_pace_ratio: f64,
    /// Pace within this fraction of competition pace signals a race
    pub race_competition_tolerance: f64,
    /// Share of lap time in Z5 that signals a race
    pub race_z5_time_share: f64,
    /// Steady runs at or above this many kilometers are long runs
    pub long_run_km: f64,
    /// Steady runs below this many kilometers may be recovery jogs
    pub recovery_max_km: f64,
    /// Steady runs below this many kilometers are too short for tempo
    pub short_run_km: f64,
    /// Pace at least this multiple of easy pace reads as recovery
    pub recovery_pace_ratio: f64,
    /// Pace at most this multiple of easy pace reads as tempo
    pub tempo_pace_ratio: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_classifiable_distance: resolver::MIN_CLASSIFIABLE_DISTANCE,
            race_easy_pace_ratio: resolver::RACE_EASY_PACE_RATIO,
            race_competition_tolerance: resolver::RACE_COMPETITION_TOLERANCE,
            race_z5_time_share: resolver::RACE_Z5_TIME_SHARE,
            long_run_km: resolver::LONG_RUN_KM,
            recovery_max_km: resolver::RECOVERY_MAX_KM,
            short_run_km: resolver::SHORT_RUN_KM,
            recovery_pace_ratio: resolver::RECOVERY_PACE_RATIO,
            tempo_pace_ratio: resolver::TEMPO_PACE_RATIO,
        }
    }
}

impl ResolverConfig {
    fn load(reader: &EnvReader) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            min_classifiable_distance: reader
                .read("MIN_CLASSIFIABLE_DISTANCE", defaults.min_classifiable_distance)?,
            race_easy_pace_ratio: reader
                .read("RACE_EASY_PACE_RATIO", defaults.race_easy_pace_ratio)?,
            race_competition_tolerance: reader.read(
                "RACE_COMPETITION_TOLERANCE",
                defaults.race_competition_tolerance,
            )?,
            race_z5_time_share: reader.read("RACE_Z5_TIME_SHARE", defaults.race_z5_time_share)?,
            long_run_km: reader.read("LONG_RUN_KM", defaults.long_run_km)?,
            recovery_max_km: reader.read("RECOVERY_MAX_KM", defaults.recovery_max_km)?,
            short_run_km: reader.read("SHORT_RUN_KM", defaults.short_run_km)?,
            recovery_pace_ratio: reader
                .read("RECOVERY_PACE_RATIO", defaults.recovery_pace_ratio)?,
            tempo_pace_ratio: reader.read("TEMPO_PACE_RATIO", defaults.tempo_pace_ratio)?,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_classifiable_distance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_classifiable_distance must not be negative",
            ));
        }
        if self.race_easy_pace_ratio <= 0.0 || self.race_easy_pace_ratio >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "race_easy_pace_ratio must be in (0, 1)",
            ));
        }
        if !(0.0..1.0).contains(&self.race_competition_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "race_competition_tolerance must be in [0, 1)",
            ));
        }
        if self.race_z5_time_share <= 0.0 || self.race_z5_time_share > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "race_z5_time_share must be in (0, 1]",
            ));
        }
        if self.short_run_km > self.recovery_max_km || self.recovery_max_km >= self.long_run_km {
            return Err(ConfigError::InvalidRange(
                "distance thresholds must satisfy short_run_km <= recovery_max_km < long_run_km",
            ));
        }
        if self.tempo_pace_ratio >= 1.0 || self.recovery_pace_ratio <= 1.0 {
            return Err(ConfigError::InvalidRange(
                "tempo_pace_ratio must be below 1 and recovery_pace_ratio above 1",
            ));
        }
        Ok(())
    }
}

/// Complete classifier configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Lap structure detection
    pub structural: StructuralConfig,
    /// Split pace statistics
    pub pace: PaceAnalysisConfig,
    /// Decision policy
    pub resolver: ResolverConfig,
}

impl ClassifierConfig {
    /// Load configuration from `WORKOUT_INTENT_*` environment variables
    ///
    /// Unset or unparseable variables keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::load(&EnvReader { strict: false }).unwrap_or_default()
    }

    /// Load configuration from the environment, rejecting bad values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::EnvVar` when a variable is set
    /// but unusable, or any error from [`Self::validate`].
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let config = Self::load(&EnvReader { strict: true })?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and orderings of every threshold
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.structural.validate()?;
        self.pace.validate()?;
        self.resolver.validate()
    }

    fn load(reader: &EnvReader) -> Result<Self, ConfigError> {
        Ok(Self {
            structural: StructuralConfig::load(reader)?,
            pace: PaceAnalysisConfig::load(reader)?,
            resolver: ResolverConfig::load(reader)?,
        })
    }
}

struct EnvReader {
    strict: bool,
}

impl EnvReader {
    fn read<T: FromStr>(&self, name: &str, default: T) -> Result<T, ConfigError> {
        let key = format!("{ENV_PREFIX}{name}");
        match env::var(&key) {
            Ok(raw) => match raw.trim().parse() {
                Ok(value) => Ok(value),
                Err(_) if self.strict => Err(ConfigError::Parse(format!("{key}={raw}"))),
                Err(_) => Ok(default),
            },
            Err(env::VarError::NotPresent) => Ok(default),
            Err(err) if self.strict => Err(ConfigError::EnvVar(err)),
            Err(_) => Ok(default),
        }
    }
}
