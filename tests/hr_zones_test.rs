// ABOUTME: Tests for heart-rate zone computation from athlete profile fields
// ABOUTME: Covers Karvonen and percent-of-max methods, age-predicted max HR and band layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::date;
use workout_intent::hr_zones::ZoneMethod;
use workout_intent::models::{AthleteProfile, HrZone, HrZones};
use workout_intent::HrZoneCalculator;

fn assert_contiguous(zones: &HrZones) {
    let bands = zones.bands();
    for pair in bands.windows(2) {
        assert!(pair[0].min <= pair[0].max);
        assert_eq!(pair[1].min, pair[0].max + 1, "bands must not overlap or leave gaps");
    }
    assert_eq!(bands[4].max, zones.max_heart_rate());
}

#[test]
fn test_empty_profile_uses_default_max() {
    let zones = HrZoneCalculator::calculate_on(&AthleteProfile::default(), date(2025, 1, 1));

    assert_eq!(zones.max_heart_rate(), 190);
    assert_eq!(zones.z1.min, 95);
    assert_eq!(zones.z4.max, 171);
    assert_eq!(zones.z5.min, 172);
    assert_contiguous(&zones);
}

#[test]
fn test_manual_max_takes_precedence_over_age() {
    let profile = AthleteProfile {
        birth_date: Some(date(1980, 3, 1)),
        max_heart_rate: Some(201),
        resting_heart_rate: None,
    };

    assert_eq!(HrZoneCalculator::max_heart_rate(&profile, date(2025, 3, 1)), 201);
}

#[test]
fn test_implausible_manual_max_is_ignored() {
    let profile = AthleteProfile {
        birth_date: Some(date(1985, 3, 1)),
        max_heart_rate: Some(3),
        resting_heart_rate: None,
    };

    let zones = HrZoneCalculator::calculate_on(&profile, date(2025, 3, 1));

    assert_eq!(zones.max_heart_rate(), 180);
    assert_eq!(zones.z5.max, 180);
    assert_contiguous(&zones);

    let without_birth_date = AthleteProfile {
        max_heart_rate: Some(0),
        ..AthleteProfile::default()
    };
    assert_eq!(
        HrZoneCalculator::max_heart_rate(&without_birth_date, date(2025, 3, 1)),
        190
    );
}

#[test]
fn test_age_predicted_max_and_floor() {
    let young = AthleteProfile {
        birth_date: Some(date(2000, 1, 1)),
        ..AthleteProfile::default()
    };
    let very_old = AthleteProfile {
        birth_date: Some(date(1900, 1, 1)),
        ..AthleteProfile::default()
    };

    assert_eq!(HrZoneCalculator::max_heart_rate(&young, date(2025, 1, 1)), 195);
    assert_eq!(HrZoneCalculator::max_heart_rate(&very_old, date(2025, 1, 1)), 120);
}

#[test]
fn test_future_birth_date_falls_back_to_default() {
    let profile = AthleteProfile {
        birth_date: Some(date(2030, 1, 1)),
        ..AthleteProfile::default()
    };

    assert_eq!(HrZoneCalculator::max_heart_rate(&profile, date(2025, 1, 1)), 190);
}

#[test]
fn test_karvonen_with_resting_heart_rate() {
    let profile = AthleteProfile {
        birth_date: None,
        max_heart_rate: Some(190),
        resting_heart_rate: Some(50),
    };
    let (boundaries, method) = HrZoneCalculator::boundaries(190, profile.resting_heart_rate);
    let zones = HrZoneCalculator::calculate_on(&profile, date(2025, 1, 1));

    assert_eq!(method, ZoneMethod::Karvonen);
    // 50 + 140 * [0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
    for (actual, expected) in boundaries.iter().zip([120.0, 134.0, 148.0, 162.0, 176.0, 190.0]) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }
    assert_eq!(zones.z1.min, 120);
    assert_eq!(zones.z2.min, 135);
    assert_eq!(zones.z5.min, 177);
    assert_contiguous(&zones);
}

#[test]
fn test_unusable_resting_heart_rate_is_ignored() {
    let (_, too_high) = HrZoneCalculator::boundaries(180, Some(185));
    let (_, narrow_reserve) = HrZoneCalculator::boundaries(180, Some(165));
    let (_, zero) = HrZoneCalculator::boundaries(180, Some(0));

    assert_eq!(too_high, ZoneMethod::PercentOfMax);
    assert_eq!(narrow_reserve, ZoneMethod::PercentOfMax);
    assert_eq!(zero, ZoneMethod::PercentOfMax);
}

#[test]
fn test_zone_lookup_clamps_outside_bands() {
    let zones = HrZoneCalculator::calculate_on(&AthleteProfile::default(), date(2025, 1, 1));

    assert_eq!(zones.zone_for(60.0), HrZone::Z1);
    assert_eq!(zones.zone_for(125.0), HrZone::Z2);
    assert_eq!(zones.zone_for(140.0), HrZone::Z3);
    assert_eq!(zones.zone_for(160.0), HrZone::Z4);
    assert_eq!(zones.zone_for(205.0), HrZone::Z5);
}

#[test]
fn test_zones_serialize_as_bands() {
    let zones = HrZoneCalculator::calculate_on(&AthleteProfile::default(), date(2025, 1, 1));
    let json = serde_json::to_value(zones).unwrap();

    assert_eq!(json["z2"]["min"], 115);
    assert_eq!(json["z5"]["max"], 190);
}
