// ABOUTME: Heart-rate zone calculator from birth date, manual max HR and resting HR
// ABOUTME: Uses the Karvonen reserve method when resting HR is usable, plain %max otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};
use intent_core::constants::heart_rate::{
    AGE_PREDICTED_MAX_BASE, DEFAULT_MAX_HEART_RATE, MIN_AGE_PREDICTED_MAX, ZONE_CUT_POINTS,
};
use intent_core::models::{AthleteProfile, HrZones};
use serde::Serialize;
use tracing::{debug, warn};

/// Minimum heart-rate reserve (max - resting) for the Karvonen method, in bpm
const MIN_HEART_RATE_RESERVE: u32 = 20;

/// How the zone boundaries were derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneMethod {
    /// `resting + (max - resting) * pct`
    Karvonen,
    /// `max * pct`
    PercentOfMax,
}

/// Heart-rate zone calculator
pub struct HrZoneCalculator;

impl HrZoneCalculator {
    /// Compute zones as of today (UTC)
    #[must_use]
    pub fn calculate(profile: &AthleteProfile) -> HrZones {
        Self::calculate_on(profile, Utc::now().date_naive())
    }

    /// Compute zones with ages measured at `today`
    ///
    /// Never fails: missing inputs fall back to the default maximum heart rate
    /// and the percent-of-max method.
    #[must_use]
    pub fn calculate_on(profile: &AthleteProfile, today: NaiveDate) -> HrZones {
        let max_heart_rate = Self::max_heart_rate(profile, today);
        let (boundaries, method) = Self::boundaries(max_heart_rate, profile.resting_heart_rate);
        debug!(max_heart_rate, ?method, "computed heart-rate zones");
        HrZones::from_boundaries(boundaries, max_heart_rate)
    }

    /// Maximum heart rate: manual value, else `220 - age`, else the default
    ///
    /// Manual values below the age-formula floor are ignored.
    #[must_use]
    pub fn max_heart_rate(profile: &AthleteProfile, today: NaiveDate) -> u32 {
        match profile.max_heart_rate {
            Some(manual) if manual >= MIN_AGE_PREDICTED_MAX => return manual,
            Some(manual) => {
                warn!(manual, "implausible manual max heart rate, ignoring it");
            }
            None => {}
        }
        let Some(birth_date) = profile.birth_date else {
            return DEFAULT_MAX_HEART_RATE;
        };
        match today.years_since(birth_date) {
            Some(age) => AGE_PREDICTED_MAX_BASE
                .saturating_sub(age)
                .max(MIN_AGE_PREDICTED_MAX),
            None => {
                warn!(%birth_date, %today, "birth date in the future, using default max HR");
                DEFAULT_MAX_HEART_RATE
            }
        }
    }

    /// Six ascending boundaries at the standard cut points
    #[must_use]
    pub fn boundaries(max_heart_rate: u32, resting_heart_rate: Option<u32>) -> ([f64; 6], ZoneMethod) {
        let max = f64::from(max_heart_rate);
        let usable_resting = resting_heart_rate.filter(|resting| {
            let usable = *resting > 0
                && *resting < max_heart_rate
                && max_heart_rate - *resting >= MIN_HEART_RATE_RESERVE;
            if !usable {
                warn!(
                    resting_heart_rate = *resting,
                    max_heart_rate, "resting heart rate unusable, ignoring it"
                );
            }
            usable
        });

        usable_resting.map_or_else(
            || (ZONE_CUT_POINTS.map(|pct| max * pct), ZoneMethod::PercentOfMax),
            |resting| {
                let resting = f64::from(resting);
                let reserve = max - resting;
                (
                    ZONE_CUT_POINTS.map(|pct| resting + reserve * pct),
                    ZoneMethod::Karvonen,
                )
            },
        )
    }
}
