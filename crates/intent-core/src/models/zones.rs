// ABOUTME: Five personalized heart-rate bands and the zone lookup used by the classifier
// ABOUTME: Bands are closed bpm intervals, ascending and non-overlapping, topped by max HR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Heart-rate training zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HrZone {
    /// Recovery
    Z1,
    /// Aerobic endurance
    Z2,
    /// Tempo
    Z3,
    /// Threshold
    Z4,
    /// VO2max / race effort
    Z5,
}

impl HrZone {
    /// Short label ("Z1".."Z5")
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Z1 => "Z1",
            Self::Z2 => "Z2",
            Self::Z3 => "Z3",
            Self::Z4 => "Z4",
            Self::Z5 => "Z5",
        }
    }

    /// Easy aerobic zones (Z1 and Z2)
    #[must_use]
    pub const fn is_easy(&self) -> bool {
        matches!(self, Self::Z1 | Self::Z2)
    }

    /// Sustained hard zones (Z3 and Z4)
    #[must_use]
    pub const fn is_tempo(&self) -> bool {
        matches!(self, Self::Z3 | Self::Z4)
    }
}

/// Closed bpm interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneBand {
    /// Lowest bpm in the band
    pub min: u32,
    /// Highest bpm in the band
    pub max: u32,
}

impl ZoneBand {
    /// Whether a heart rate falls inside the band
    #[must_use]
    pub fn contains(&self, bpm: f64) -> bool {
        bpm >= f64::from(self.min) && bpm <= f64::from(self.max)
    }
}

/// Five contiguous heart-rate bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrZones {
    /// Recovery band
    pub z1: ZoneBand,
    /// Aerobic band
    pub z2: ZoneBand,
    /// Tempo band
    pub z3: ZoneBand,
    /// Threshold band
    pub z4: ZoneBand,
    /// VO2max band; `z5.max` is the athlete's maximum heart rate
    pub z5: ZoneBand,
}

impl HrZones {
    /// Build bands from six ascending boundaries in bpm
    ///
    /// Boundaries are rounded to whole beats; each band after the first starts
    /// one beat above the previous band's ceiling so no beat belongs to two zones.
    /// The last boundary is taken as the maximum heart rate.
    #[must_use]
    pub fn from_boundaries(boundaries: [f64; 6], max_heart_rate: u32) -> Self {
        let mut bands = [ZoneBand { min: 0, max: 0 }; 5];
        let mut floor = round_bpm(boundaries[0]);
        for (index, band) in bands.iter_mut().enumerate() {
            let ceiling = if index == 4 {
                max_heart_rate
            } else {
                round_bpm(boundaries[index + 1])
            };
            *band = ZoneBand {
                min: floor,
                max: ceiling.max(floor),
            };
            floor = band.max + 1;
        }
        Self {
            z1: bands[0],
            z2: bands[1],
            z3: bands[2],
            z4: bands[3],
            z5: bands[4],
        }
    }

    /// Band for a zone
    #[must_use]
    pub const fn band(&self, zone: HrZone) -> ZoneBand {
        match zone {
            HrZone::Z1 => self.z1,
            HrZone::Z2 => self.z2,
            HrZone::Z3 => self.z3,
            HrZone::Z4 => self.z4,
            HrZone::Z5 => self.z5,
        }
    }

    /// All bands in ascending order
    #[must_use]
    pub const fn bands(&self) -> [ZoneBand; 5] {
        [self.z1, self.z2, self.z3, self.z4, self.z5]
    }

    /// Maximum heart rate the zones were computed from
    #[must_use]
    pub const fn max_heart_rate(&self) -> u32 {
        self.z5.max
    }

    /// Zone for a heart rate
    ///
    /// Rates below Z1 count as Z1 and rates above the maximum count as Z5.
    #[must_use]
    pub fn zone_for(&self, bpm: f64) -> HrZone {
        if bpm < f64::from(self.z2.min) {
            HrZone::Z1
        } else if bpm < f64::from(self.z3.min) {
            HrZone::Z2
        } else if bpm < f64::from(self.z4.min) {
            HrZone::Z3
        } else if bpm < f64::from(self.z5.min) {
            HrZone::Z4
        } else {
            HrZone::Z5
        }
    }
}

fn round_bpm(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}
