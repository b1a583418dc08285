// ABOUTME: Measurement value types for the Garmin to Notion activity bridge
// ABOUTME: Foundation crate with unit enums, conversion ratios, and display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bridge Core
//!
//! Foundation crate providing the immutable measurement value types used when
//! copying fitness activities into document-database rows. This crate has no
//! I/O and no shared state; every operation is a pure function of its inputs.
//!
//! ## Modules
//!
//! - **units**: `Distance`, `Duration`, `Speed`, `Pace` and their unit enums
//! - **constants**: base-unit ratio table for distance and time units
//! - **errors**: `UnitError` raised when parsing unit symbols

/// Base-unit ratio tables and conversion constants
pub mod constants;

/// Errors raised while parsing unit symbols
pub mod errors;

/// Measurement value types and unit conversion
pub mod units;

pub use errors::UnitError;
pub use units::{
    parse_pace_unit, parse_speed_unit, Distance, DistanceUnit, Duration, DurationFormat, Pace,
    Speed, TimeUnit,
};
