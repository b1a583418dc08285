// ABOUTME: Numeric rounding and rendering helpers shared by all measurement types
// ABOUTME: Fixed-precision formatting and a float rendering that keeps one decimal for whole numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Largest magnitude rendered positionally; beyond this `{}` is used unchanged.
const POSITIONAL_LIMIT: f64 = 1e16;

/// Round `value` to `precision` decimal places.
///
/// Uses `f64::round`, so ties round half away from zero (`12.345` → `12.35`).
#[must_use]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    if !factor.is_finite() {
        return value;
    }
    (value * factor).round() / factor
}

/// Round and render `value` with exactly `precision` decimals (`5` → `"5.00"`).
#[must_use]
pub fn format_fixed(value: f64, precision: u32) -> String {
    let rounded = round_to_precision(value, precision);
    format!("{rounded:.prec$}", prec = precision as usize)
}

/// Render a magnitude the way measurement display strings show it.
///
/// Whole numbers keep a single decimal (`5.0`), everything else uses the
/// shortest representation that round-trips.
#[must_use]
pub fn format_magnitude(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < POSITIONAL_LIMIT {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
