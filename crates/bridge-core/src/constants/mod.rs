// ABOUTME: Constants module for measurement conversions
// ABOUTME: Groups the base-unit ratio tables used by every unit family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants and base-unit lookups
pub mod units;

/// Fixed decimal precision used when rendering measurements numerically
pub const MEASUREMENT_PRECISION: u32 = 2;
