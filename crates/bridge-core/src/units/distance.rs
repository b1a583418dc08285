// ABOUTME: Distance value type and distance unit enumeration
// ABOUTME: Converts between kilometers and meters through the base-unit table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::format::format_magnitude;
use crate::constants::units::meters_per_unit;
use crate::errors::UnitError;

/// Unit of distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Kilometer (`km`)
    #[serde(rename = "km")]
    Kilometer,
    /// Meter (`m`)
    #[serde(rename = "m")]
    Meter,
}

impl DistanceUnit {
    /// All distance units, in declaration order
    pub const ALL: [Self; 2] = [Self::Kilometer, Self::Meter];

    /// Short symbol used in configuration and display strings
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kilometer => "km",
            Self::Meter => "m",
        }
    }

    /// Ratio converting a magnitude in `self` into a magnitude in `target`
    ///
    /// `x * self.conversion_ratio(target)` is `x` expressed in `target`.
    #[must_use]
    pub fn conversion_ratio(self, target: Self) -> f64 {
        meters_per_unit(self) / meters_per_unit(target)
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| UnitError::UnknownDistanceUnit {
                symbol: symbol.to_owned(),
                expected: Self::ALL.map(Self::symbol).join(", "),
            })
    }
}

/// Distance with an explicit unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    magnitude: f64,
    unit: DistanceUnit,
}

impl Distance {
    /// Create a distance of `magnitude` expressed in `unit`
    #[must_use]
    pub const fn new(magnitude: f64, unit: DistanceUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Distance in meters, the unit Garmin reports
    #[must_use]
    pub const fn meters(magnitude: f64) -> Self {
        Self::new(magnitude, DistanceUnit::Meter)
    }

    /// Numeric magnitude in this distance's unit
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Unit the magnitude is expressed in
    #[must_use]
    pub const fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Same distance expressed in `unit`
    #[must_use]
    pub fn convert_to(&self, unit: DistanceUnit) -> Self {
        Self::new(self.magnitude * self.unit.conversion_ratio(unit), unit)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_magnitude(self.magnitude), self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_meters_to_kilometers() {
        let distance = Distance::meters(5000.0).convert_to(DistanceUnit::Kilometer);
        assert!((distance.magnitude() - 5.0).abs() < TOLERANCE);
        assert_eq!(distance.unit(), DistanceUnit::Kilometer);
        assert_eq!(distance.to_string(), "5.0 km");
    }

    #[test]
    fn test_convert_does_not_mutate_source() {
        let source = Distance::new(2.5, DistanceUnit::Kilometer);
        let converted = source.convert_to(DistanceUnit::Meter);
        assert!((source.magnitude() - 2.5).abs() < TOLERANCE);
        assert!((converted.magnitude() - 2500.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for from in DistanceUnit::ALL {
            for to in DistanceUnit::ALL {
                let original = Distance::new(1234.567, from);
                let back = original.convert_to(to).convert_to(from);
                assert!(
                    (back.magnitude() - 1234.567).abs() < TOLERANCE,
                    "{from} -> {to} -> {from} drifted to {}",
                    back.magnitude()
                );
            }
        }
    }

    #[test]
    fn test_parse_symbol() {
        assert_eq!("km".parse::<DistanceUnit>(), Ok(DistanceUnit::Kilometer));
        assert_eq!(" m ".parse::<DistanceUnit>(), Ok(DistanceUnit::Meter));
        let err = "mi".parse::<DistanceUnit>().unwrap_err();
        assert!(err.to_string().contains("km, m"));
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&DistanceUnit::Kilometer).unwrap();
        assert_eq!(json, "\"km\"");
        let unit: DistanceUnit = serde_json::from_str("\"m\"").unwrap();
        assert_eq!(unit, DistanceUnit::Meter);
    }
}
