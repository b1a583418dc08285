// ABOUTME: Integration tests for the measurement value types
// ABOUTME: Covers round-trip conversions, identity conversions, zero pace and duration formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use garmin_notion_bridge::{
    Distance, DistanceUnit, Duration, DurationFormat, Pace, Speed, TimeUnit,
};

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= TOLERANCE * scale,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_distance_round_trip_for_every_unit_pair() {
    for from in DistanceUnit::ALL {
        for to in DistanceUnit::ALL {
            for magnitude in [0.0, 1.0, 42.195, 5000.0] {
                let back = Distance::new(magnitude, from).convert_to(to).convert_to(from);
                assert_close(back.magnitude(), magnitude);
                assert_eq!(back.unit(), from);
            }
        }
    }
}

#[test]
fn test_duration_round_trip_for_every_time_unit() {
    for unit in TimeUnit::ALL {
        for magnitude in [0.0, 1.5, 75.0, 3661.0] {
            let duration = Duration::from_unit(magnitude, unit);
            assert_close(duration.convert_to(unit), magnitude);
        }
    }
}

#[test]
fn test_time_unit_ratio_round_trip() {
    for from in TimeUnit::ALL {
        for to in TimeUnit::ALL {
            let there_and_back = 12.5 * from.conversion_ratio(to) * to.conversion_ratio(from);
            assert_close(there_and_back, 12.5);
        }
    }
}

#[test]
fn test_speed_identity_conversion_is_exact() {
    for distance_unit in DistanceUnit::ALL {
        for time_unit in TimeUnit::ALL {
            let speed = Speed::new(3.7, distance_unit, time_unit);
            assert_eq!(speed.convert_to(distance_unit, time_unit).magnitude(), 3.7);
        }
    }
}

#[test]
fn test_pace_from_zero_speed_is_zero() {
    for distance_unit in DistanceUnit::ALL {
        for time_unit in TimeUnit::ALL {
            let pace = Pace::from_speed(Speed::new(0.0, distance_unit, time_unit));
            assert_eq!(pace.magnitude(), 0.0);
            assert_eq!(pace.time_unit(), time_unit);
            assert_eq!(pace.distance_unit(), distance_unit);
        }
    }
}

#[test]
fn test_pace_from_speed_inverts_and_swaps_units() {
    let pace = Pace::from_speed(Speed::meters_per_second(2.5));
    assert_close(pace.magnitude(), 0.4);
    assert_eq!(pace.time_unit(), TimeUnit::Second);
    assert_eq!(pace.distance_unit(), DistanceUnit::Meter);

    let per_km = pace.convert_to(TimeUnit::Second, DistanceUnit::Kilometer);
    assert_close(per_km.magnitude(), 400.0);
}

#[test]
fn test_speed_conversion() {
    let speed = Speed::meters_per_second(2.5).convert_to(DistanceUnit::Kilometer, TimeUnit::Hour);
    assert_close(speed.magnitude(), 9.0);
    assert_eq!(speed.to_string(), "9.0 km / h");
}

#[test]
fn test_duration_formats() {
    assert_eq!(
        Duration::from_seconds(75.0).format(DurationFormat::Dynamic),
        "1:15"
    );
    assert_eq!(
        Duration::from_seconds(3661.0).format(DurationFormat::HoursMinutesSeconds),
        "01:01:01"
    );
    assert_eq!(
        Duration::from_seconds(45.0).format(DurationFormat::MinutesSeconds),
        "00:45"
    );
    assert_eq!(Duration::from_seconds(5.0).format(DurationFormat::Seconds), "5");
    assert_eq!(
        Duration::from_seconds(5.0).format(DurationFormat::SecondsWithMillis),
        "5.00"
    );
}

#[test]
fn test_dynamic_format_leading_unit_is_unpadded() {
    assert_eq!(Duration::from_seconds(5.0).to_string(), "5");
    assert_eq!(Duration::from_seconds(75.0).to_string(), "1:15");
    assert_eq!(Duration::from_seconds(3661.0).to_string(), "1:01:01");
    assert_eq!(Duration::from_seconds(36_000.0).to_string(), "10:00:00");
}

#[test]
fn test_minutes_seconds_does_not_wrap_hours() {
    assert_eq!(
        Duration::from_seconds(3725.0).format(DurationFormat::MinutesSeconds),
        "62:05"
    );
}

#[test]
fn test_unknown_unit_symbols_are_rejected() {
    assert!("mi".parse::<DistanceUnit>().is_err());
    assert!("d".parse::<TimeUnit>().is_err());
    assert_eq!(" km ".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometer);
    assert_eq!("ms".parse::<TimeUnit>().unwrap(), TimeUnit::Millisecond);
}
