// ABOUTME: Default thresholds for heart-rate zones, lap structure, pace statistics and race detection
// ABOUTME: Grouped by domain; configuration structs take their defaults from these values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classification constants
//!
//! Every numeric threshold the engine uses lives here with its default value.
//! The engine's configuration layer copies these into `ClassifierConfig`, so
//! deployments can override them without touching the decision code.

/// Heart-rate zone computation
pub mod heart_rate {
    /// Maximum heart rate assumed when neither a manual value nor a birth date is known
    pub const DEFAULT_MAX_HEART_RATE: u32 = 190;

    /// Age-predicted maximum heart rate intercept (`220 - age`)
    pub const AGE_PREDICTED_MAX_BASE: u32 = 220;

    /// Lowest maximum heart rate the age formula may produce
    pub const MIN_AGE_PREDICTED_MAX: u32 = 120;

    /// Zone cut points as fractions of max HR (or of heart-rate reserve).
    /// `ZONE_CUT_POINTS[0]` is the floor of Z1, `ZONE_CUT_POINTS[5]` the ceiling of Z5.
    pub const ZONE_CUT_POINTS: [f64; 6] = [0.50, 0.60, 0.70, 0.80, 0.90, 1.00];
}

/// Athlete baseline estimation
pub mod baseline {
    /// Number of most recent completed activities considered
    pub const HISTORY_WINDOW: usize = 50;

    /// Minimum qualifying activities for a usable baseline
    pub const MIN_SAMPLES: usize = 3;

    /// Competition pace assumed relative to easy pace when no fast sessions exist
    pub const DEFAULT_COMPETITION_PACE_RATIO: f64 = 0.85;
}

/// Lap structure detection
pub mod structure {
    /// Minimum stopped time (elapsed minus moving) that marks a recovery gap
    pub const REST_GAP_SECONDS: f64 = 15.0;

    /// Relative tolerance for two interval distances to count as equal
    pub const EQUAL_DISTANCE_TOLERANCE: f64 = 0.10;

    /// Maximum relative deviation of a rest from the median rest for rests to be consistent
    pub const REST_CONSISTENCY_TOLERANCE: f64 = 0.50;

    /// Interval laps longer than this multiple of the median work distance are warm-up/cool-down
    pub const EDGE_LAP_DISTANCE_RATIO: f64 = 2.0;

    /// Laps shorter than this (meters), or with no moving time, are recorded
    /// pauses and fold into the preceding work lap as stopped time
    pub const RECOVERY_LAP_MAX_DISTANCE: f64 = 50.0;

    /// Minimum work intervals for a rest-separated session
    pub const MIN_INTERVAL_REPETITIONS: usize = 3;

    /// Share of interval boundaries that must carry a rest; isolated stops
    /// (traffic lights on auto-laps) stay below it
    pub const MIN_RESTED_SHARE: f64 = 0.5;

    /// Hill repeat effort laps are shorter than this (meters)
    pub const HILL_LAP_MAX_DISTANCE: f64 = 600.0;

    /// Minimum climb on an effort lap for it to count as an uphill repeat (meters)
    pub const HILL_LAP_MIN_GAIN: f64 = 8.0;

    /// Minimum number of uphill efforts for a hill session
    pub const MIN_HILL_REPETITIONS: usize = 3;
}

/// Pace statistics over splits
pub mod pace {
    /// Coefficient of variation below which an effort is steady
    pub const STEADY_CV: f64 = 0.05;

    /// Coefficient of variation above which an effort is highly variable
    pub const VARIABLE_CV: f64 = 0.12;

    /// Leading/trailing segments slower than `median * ratio` are warm-up/cool-down
    pub const WARMUP_PACE_RATIO: f64 = 1.15;

    /// Maximum segments consumed as warm-up (and, separately, as cool-down)
    pub const MAX_EDGE_SEGMENTS: usize = 3;

    /// Main set must be at least this much faster than the trimmed edges to read as tempo
    pub const TEMPO_EDGE_GAP: f64 = 0.10;

    /// Per-segment pace increase tolerated inside a progressive run (min/km)
    pub const PROGRESSIVE_TOLERANCE: f64 = 0.05;

    /// Total pace drop from first to last segment required for a progressive run
    pub const PROGRESSIVE_MIN_DROP: f64 = 0.05;

    /// Minimum segments for trend and alternation detection
    pub const MIN_TREND_SEGMENTS: usize = 4;

    /// Share of consecutive deltas that must flip sign for a fast/slow alternation
    pub const ALTERNATION_RATIO: f64 = 0.8;

    /// Segments shorter than this (meters) are ignored by the pace statistics
    pub const MIN_SEGMENT_DISTANCE: f64 = 200.0;

    /// Pace faster than this for a GPS kilometer split is not humanly plausible (min/km)
    pub const MIN_PLAUSIBLE_PACE: f64 = 2.5;

    /// Adjacent split pace ratio beyond which the change is implausible
    pub const MAX_ADJACENT_PACE_RATIO: f64 = 2.0;

    /// Implausible adjacent transitions needed before the split data is treated as noise
    pub const NOISY_TRANSITIONS: usize = 2;

    /// Elevation gain per kilometer above which the terrain counts as steep (meters)
    pub const STEEP_GAIN_PER_KM: f64 = 30.0;

    /// Split elevation delta that counts as a real climb or descent (meters)
    pub const SIGNIFICANT_ELEVATION_DELTA: f64 = 5.0;

    /// Direction changes between climbs and descents needed for a repeating hill pattern
    pub const MIN_ELEVATION_REVERSALS: usize = 3;
}

/// Workout type resolution
pub mod resolver {
    /// Activities shorter than this (meters) cannot be classified without structure
    pub const MIN_CLASSIFIABLE_DISTANCE: f64 = 1000.0;

    /// Pace below `easy * ratio` signals a race effort
    pub const RACE_EASY_PACE_RATIO: f64 = 0.90;

    /// Pace within this fraction of competition pace signals a race effort
    pub const RACE_COMPETITION_TOLERANCE: f64 = 0.05;

    /// Share of segment time in Z5 that signals a race effort
    pub const RACE_Z5_TIME_SHARE: f64 = 0.40;

    /// Steady runs at or above this distance are long runs (kilometers)
    pub const LONG_RUN_KM: f64 = 18.0;

    /// Steady efforts below this distance may be recovery jogs (kilometers)
    pub const RECOVERY_MAX_KM: f64 = 8.0;

    /// Steady efforts below this distance count as short (kilometers)
    pub const SHORT_RUN_KM: f64 = 3.0;

    /// Pace at least this much slower than easy baseline reads as recovery
    pub const RECOVERY_PACE_RATIO: f64 = 1.10;

    /// Pace at most this fraction of easy baseline reads as "well faster" than easy
    pub const TEMPO_PACE_RATIO: f64 = 0.92;
}

/// Unit conversions
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}
