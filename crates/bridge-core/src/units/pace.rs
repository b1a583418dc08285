// ABOUTME: Pace value type, time taken per unit of distance
// ABOUTME: Inverse of speed, with a zero-speed derivation that yields zero pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::distance::DistanceUnit;
use super::format::format_magnitude;
use super::speed::Speed;
use super::time::TimeUnit;

/// Time taken to cover one unit of distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pace {
    magnitude: f64,
    time_unit: TimeUnit,
    distance_unit: DistanceUnit,
}

impl Pace {
    /// Create a pace of `magnitude` `time_unit` per `distance_unit`
    #[must_use]
    pub const fn new(magnitude: f64, time_unit: TimeUnit, distance_unit: DistanceUnit) -> Self {
        Self {
            magnitude,
            time_unit,
            distance_unit,
        }
    }

    /// Derive the pace matching `speed`.
    ///
    /// The units are swapped (m/s becomes s/m). A stationary speed has no
    /// meaningful inverse and yields a zero pace.
    #[must_use]
    pub fn from_speed(speed: Speed) -> Self {
        let magnitude = if speed.magnitude() == 0.0 {
            0.0
        } else {
            speed.magnitude().recip()
        };
        Self::new(magnitude, speed.time_unit(), speed.distance_unit())
    }

    /// Numeric magnitude
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Time unit (numerator)
    #[must_use]
    pub const fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// Distance unit (denominator)
    #[must_use]
    pub const fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    /// Same pace expressed in `time_unit` per `distance_unit`
    #[must_use]
    pub fn convert_to(&self, time_unit: TimeUnit, distance_unit: DistanceUnit) -> Self {
        let time_ratio = self.time_unit.conversion_ratio(time_unit);
        let distance_ratio = self.distance_unit.conversion_ratio(distance_unit);
        Self::new(
            self.magnitude * time_ratio / distance_ratio,
            time_unit,
            distance_unit,
        )
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {}",
            format_magnitude(self.magnitude),
            self.time_unit,
            self.distance_unit
        )
    }
}
