// ABOUTME: Benchmark fixtures generating Garmin activity payloads and a Notion database
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic fixtures for conversion benchmarks.

use garmin_notion_bridge::notion::NotionDatabase;
use serde_json::{json, Map, Value};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ActivityBatchSize {
    /// Small dataset (10 activities), one sync run
    Small,
    /// Medium dataset (100 activities), a backfill
    Medium,
}

impl ActivityBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
        }
    }
}

const TYPE_KEYS: [&str; 4] = ["running", "cycling", "lap_swimming", "strength_training"];

const EFFECT_MESSAGES: [Option<&str>; 4] = [
    Some("IMPROVING_AEROBIC_BASE_8"),
    Some("MAINTAINING_AEROBIC_FITNESS_1"),
    Some("HIGHLY_IMPACTING_TEMPO_23"),
    None,
];

/// Activity-list response with `count` entries
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_activity_list(count: usize) -> Value {
    let entries: Vec<Value> = (0..count)
        .map(|index| {
            let distance = 1000.0 + (index % 20) as f64 * 500.0;
            let duration = 300.0 + (index % 30) as f64 * 120.0;
            let has_distance = index % 4 != 3;
            let effect = EFFECT_MESSAGES[index % EFFECT_MESSAGES.len()];

            json!({
                "activityId": 15_000_000_000_u64 + index as u64,
                "activityName": format!("Session {index}"),
                "startTimeGMT": format!("2024-05-{:02} 06:{:02}:00", index % 28 + 1, index % 60),
                "activityType": { "typeKey": TYPE_KEYS[index % TYPE_KEYS.len()] },
                "distance": has_distance.then_some(distance),
                "averageSpeed": has_distance.then_some(distance / duration),
                "duration": duration,
                "calories": 50.0 + (index % 40) as f64 * 12.5,
                "pr": index % 17 == 0,
                "trainingEffectLabel": effect.map(|_| "AEROBIC_BASE"),
                "aerobicTrainingEffect": effect.map(|_| 2.0 + (index % 30) as f64 / 10.0),
                "aerobicTrainingEffectMessage": effect,
                "anaerobicTrainingEffect": effect.map(|_| 0.5),
                "anaerobicTrainingEffectMessage": effect.map(|_| "NO_ANAEROBIC_BENEFIT_1"),
            })
        })
        .collect();

    Value::Array(entries)
}

/// Database holding every column of the built-in activity plan
#[must_use]
pub fn activities_database() -> Option<NotionDatabase> {
    let columns = [
        ("Activity Name", "title"),
        ("Activity Type", "select"),
        ("Date", "date"),
        ("Distance (km)", "number"),
        ("Duration (min)", "number"),
        ("Calories", "number"),
        ("Avg Pace", "rich_text"),
        ("Training Effect", "select"),
        ("Aerobic", "number"),
        ("Aerobic Effect", "select"),
        ("Anaerobic", "number"),
        ("Anaerobic Effect", "select"),
        ("PR", "checkbox"),
    ];

    let properties: Map<String, Value> = columns
        .iter()
        .enumerate()
        .map(|(index, (name, kind))| {
            (
                (*name).to_owned(),
                json!({ "id": format!("p{index}"), "name": name, "type": kind }),
            )
        })
        .collect();

    NotionDatabase::from_json(json!({
        "id": "bench-database",
        "title": [{ "plain_text": "Activities" }],
        "properties": properties,
    }))
    .ok()
}
