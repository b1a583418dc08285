// ABOUTME: Parsing of compound `numerator/denominator` unit symbols for speed and pace
// ABOUTME: Speed reads distance over time, pace reads time over distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::distance::DistanceUnit;
use super::time::TimeUnit;
use crate::errors::UnitError;

/// Split `"<numerator>/<denominator>"` into its two trimmed halves
///
/// # Errors
///
/// Returns [`UnitError::MalformedCompoundUnit`] unless the text has exactly one `/`
/// with a non-empty symbol on each side.
pub fn split_compound_unit(symbol: &str) -> Result<(&str, &str), UnitError> {
    let mut parts = symbol.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(numerator), Some(denominator), None)
            if !numerator.trim().is_empty() && !denominator.trim().is_empty() =>
        {
            Ok((numerator.trim(), denominator.trim()))
        }
        _ => Err(UnitError::MalformedCompoundUnit(symbol.to_owned())),
    }
}

/// Parse a speed unit such as `km/h`
///
/// # Errors
///
/// Returns an error if the text is not compound or either half is unknown
pub fn parse_speed_unit(symbol: &str) -> Result<(DistanceUnit, TimeUnit), UnitError> {
    let (distance, time) = split_compound_unit(symbol)?;
    Ok((distance.parse()?, time.parse()?))
}

/// Parse a pace unit such as `s/km`
///
/// # Errors
///
/// Returns an error if the text is not compound or either half is unknown
pub fn parse_pace_unit(symbol: &str) -> Result<(TimeUnit, DistanceUnit), UnitError> {
    let (time, distance) = split_compound_unit(symbol)?;
    Ok((time.parse()?, distance.parse()?))
}
