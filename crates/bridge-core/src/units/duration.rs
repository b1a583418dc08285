// ABOUTME: Duration value type stored as total seconds
// ABOUTME: Component extraction, unit conversion and the clock-style rendering formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::time::TimeUnit;

/// Rendering style for a [`Duration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationFormat {
    /// Only the units that are needed: `5`, `1:15`, `1:01:01`
    #[default]
    Dynamic,
    /// `HH:MM:SS`, every field padded to two digits
    HoursMinutesSeconds,
    /// `MM:SS`, minutes are not wrapped at 60
    MinutesSeconds,
    /// Whole seconds only
    Seconds,
    /// Seconds with two decimals
    SecondsWithMillis,
}

/// Span of time, stored as a number of seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Duration {
    total_seconds: f64,
}

impl Duration {
    /// Duration of `seconds` seconds
    #[must_use]
    pub const fn from_seconds(seconds: f64) -> Self {
        Self {
            total_seconds: seconds,
        }
    }

    /// Duration of `magnitude` expressed in `unit`
    #[must_use]
    pub fn from_unit(magnitude: f64, unit: TimeUnit) -> Self {
        Self::from_seconds(magnitude * unit.conversion_ratio(TimeUnit::Second))
    }

    /// Total length in seconds, including any fraction
    #[must_use]
    pub const fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    /// Total length expressed in `unit`
    #[must_use]
    pub fn convert_to(&self, unit: TimeUnit) -> f64 {
        self.total_seconds * TimeUnit::Second.conversion_ratio(unit)
    }

    /// Whole hours
    #[must_use]
    pub fn hours(&self) -> u64 {
        self.whole_seconds() / 3600
    }

    /// Minutes left after removing whole hours (0..59)
    #[must_use]
    pub fn minutes(&self) -> u64 {
        (self.whole_seconds() % 3600) / 60
    }

    /// Seconds left after removing whole minutes (0..59)
    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.whole_seconds() % 60
    }

    /// Render the duration in the requested style
    #[must_use]
    pub fn format(&self, format: DurationFormat) -> String {
        let sign = if self.total_seconds < 0.0 { "-" } else { "" };
        let (hours, minutes, seconds) = (self.hours(), self.minutes(), self.seconds());

        match format {
            DurationFormat::Dynamic => {
                if hours > 0 {
                    format!("{sign}{hours}:{minutes:02}:{seconds:02}")
                } else if minutes > 0 {
                    format!("{sign}{minutes}:{seconds:02}")
                } else {
                    format!("{sign}{seconds}")
                }
            }
            DurationFormat::HoursMinutesSeconds => {
                format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
            }
            DurationFormat::MinutesSeconds => {
                let total_minutes = self.whole_seconds() / 60;
                format!("{sign}{total_minutes:02}:{seconds:02}")
            }
            DurationFormat::Seconds => format!("{sign}{}", self.whole_seconds()),
            DurationFormat::SecondsWithMillis => format!("{:.2}", self.total_seconds),
        }
    }

    /// Absolute length in whole seconds, fractions dropped
    fn whole_seconds(&self) -> u64 {
        let truncated = self.total_seconds.abs().trunc();
        if truncated.is_finite() {
            truncated as u64
        } else {
            0
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DurationFormat::Dynamic))
    }
}
