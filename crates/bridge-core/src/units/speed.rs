// ABOUTME: Speed value type, distance travelled per unit of time
// ABOUTME: Conversion composes the distance and time ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::distance::DistanceUnit;
use super::format::format_magnitude;
use super::time::TimeUnit;

/// Distance travelled per unit of time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    magnitude: f64,
    distance_unit: DistanceUnit,
    time_unit: TimeUnit,
}

impl Speed {
    /// Create a speed of `magnitude` `distance_unit` per `time_unit`
    #[must_use]
    pub const fn new(magnitude: f64, distance_unit: DistanceUnit, time_unit: TimeUnit) -> Self {
        Self {
            magnitude,
            distance_unit,
            time_unit,
        }
    }

    /// Speed in meters per second, the unit Garmin reports
    #[must_use]
    pub const fn meters_per_second(magnitude: f64) -> Self {
        Self::new(magnitude, DistanceUnit::Meter, TimeUnit::Second)
    }

    /// Numeric magnitude
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Distance unit (numerator)
    #[must_use]
    pub const fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    /// Time unit (denominator)
    #[must_use]
    pub const fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// Same speed expressed in `distance_unit` per `time_unit`
    #[must_use]
    pub fn convert_to(&self, distance_unit: DistanceUnit, time_unit: TimeUnit) -> Self {
        let distance_ratio = self.distance_unit.conversion_ratio(distance_unit);
        let time_ratio = self.time_unit.conversion_ratio(time_unit);
        Self::new(
            self.magnitude * distance_ratio / time_ratio,
            distance_unit,
            time_unit,
        )
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {}",
            format_magnitude(self.magnitude),
            self.distance_unit,
            self.time_unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_per_second_to_kilometers_per_hour() {
        let speed = Speed::meters_per_second(10.0).convert_to(DistanceUnit::Kilometer, TimeUnit::Hour);
        assert!((speed.magnitude() - 36.0).abs() < 1e-9);
        assert_eq!(speed.distance_unit(), DistanceUnit::Kilometer);
        assert_eq!(speed.time_unit(), TimeUnit::Hour);
    }

    #[test]
    fn test_identity_conversion_is_noop() {
        for distance_unit in DistanceUnit::ALL {
            for time_unit in TimeUnit::ALL {
                let speed = Speed::new(3.21, distance_unit, time_unit);
                let same = speed.convert_to(distance_unit, time_unit);
                assert_eq!(same.magnitude(), 3.21);
            }
        }
    }

    #[test]
    fn test_display() {
        let speed = Speed::new(12.5, DistanceUnit::Kilometer, TimeUnit::Hour);
        assert_eq!(speed.to_string(), "12.5 km / h");
    }
}
