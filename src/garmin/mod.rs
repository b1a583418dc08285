// ABOUTME: Garmin Connect source model for the activity bridge
// ABOUTME: Activity parsing, training effect labels, icons and the default activity plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Source side of the bridge.
//!
//! [`GarminActivity`] implements [`SourceRecord`](crate::sync::SourceRecord),
//! so field mappings can reference its attributes by name.

mod activity;
/// Training effect and activity type labels
pub mod labels;

pub use activity::GarminActivity;

use crate::errors::AppResult;
use crate::sync::{SyncDefaults, SyncPlan};

/// Activity plan used when no plan file is configured
pub const DEFAULT_ACTIVITY_PLAN: &str = r"
fields:
  - source_field: name
    column: Activity Name
    type: text
  - source_field: type
    column: Activity Type
    type: text
  - source_field: start_time_utc
    column: Date
    type: date
  - source_field: distance
    column: Distance (km)
    type: distance
    unit: km
  - source_field: duration
    column: Duration (min)
    type: duration
    unit: m
  - source_field: calories
    column: Calories
    type: number
  - source_field: average_pace
    column: Avg Pace
    type: pace
    unit: s/km
  - source_field: training_effect
    column: Training Effect
    type: text
  - source_field: aerobic_score
    column: Aerobic
    type: number
  - source_field: aerobic_effect
    column: Aerobic Effect
    type: text
  - source_field: anaerobic_score
    column: Anaerobic
    type: number
  - source_field: anaerobic_effect
    column: Anaerobic Effect
    type: text
  - source_field: is_personal_record
    column: PR
    type: boolean
";

/// Resolve [`DEFAULT_ACTIVITY_PLAN`] with `defaults`
///
/// # Errors
///
/// Returns an error if the defaults make a mapping invalid
pub fn default_activity_plan(defaults: &SyncDefaults) -> AppResult<SyncPlan> {
    SyncPlan::from_yaml_str::<GarminActivity>(DEFAULT_ACTIVITY_PLAN, defaults)
}
