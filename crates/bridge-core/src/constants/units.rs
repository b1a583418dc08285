// ABOUTME: Unit conversion constants for distance and time measurements
// ABOUTME: Immutable base-unit tables queried by the unit conversion functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::units::{DistanceUnit, TimeUnit};

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Meters per meter
pub const METERS_PER_METER: f64 = 1.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per second
pub const SECONDS_PER_SECOND: f64 = 1.0;

/// Seconds per millisecond
pub const SECONDS_PER_MS: f64 = 0.001;

/// Number of meters in one unit of `unit`
#[must_use]
pub const fn meters_per_unit(unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometer => METERS_PER_KM,
        DistanceUnit::Meter => METERS_PER_METER,
    }
}

/// Number of seconds in one unit of `unit`
#[must_use]
pub const fn seconds_per_unit(unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Hour => SECONDS_PER_HOUR,
        TimeUnit::Minute => SECONDS_PER_MINUTE,
        TimeUnit::Second => SECONDS_PER_SECOND,
        TimeUnit::Millisecond => SECONDS_PER_MS,
    }
}
