// ABOUTME: Time unit enumeration with conversion ratios
// ABOUTME: Hours, minutes, seconds and milliseconds resolved through the base-unit table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::units::seconds_per_unit;
use crate::errors::UnitError;

/// Unit of time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Hour (`h`)
    #[serde(rename = "h")]
    Hour,
    /// Minute (`m`)
    #[serde(rename = "m")]
    Minute,
    /// Second (`s`)
    #[serde(rename = "s")]
    Second,
    /// Millisecond (`ms`)
    #[serde(rename = "ms")]
    Millisecond,
}

impl TimeUnit {
    /// All time units, in declaration order
    pub const ALL: [Self; 4] = [Self::Hour, Self::Minute, Self::Second, Self::Millisecond];

    /// Short symbol used in configuration and display strings
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
            Self::Millisecond => "ms",
        }
    }

    /// Ratio converting a magnitude in `self` into a magnitude in `target`
    #[must_use]
    pub fn conversion_ratio(self, target: Self) -> f64 {
        seconds_per_unit(self) / seconds_per_unit(target)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| UnitError::UnknownTimeUnit {
                symbol: symbol.to_owned(),
                expected: Self::ALL.map(Self::symbol).join(", "),
            })
    }
}
