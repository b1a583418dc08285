// ABOUTME: Measurement value types with unit-aware conversion
// ABOUTME: Distance, duration, speed and pace, each convertible within its own unit family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Measurement value types.
//!
//! Every type here is an immutable `Copy` value. `convert_to` always returns a
//! new value and never fails for units of the same family.

mod compound;
mod distance;
mod duration;
mod format;
mod pace;
mod speed;
mod time;

pub use compound::{parse_pace_unit, parse_speed_unit, split_compound_unit};
pub use distance::{Distance, DistanceUnit};
pub use duration::{Duration, DurationFormat};
pub use format::{format_fixed, format_magnitude, round_to_precision};
pub use pace::Pace;
pub use speed::Speed;
pub use time::TimeUnit;
