// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Provides a Notion activities database, Garmin activity payloads and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `garmin_notion_bridge`

use std::sync::Once;

use garmin_notion_bridge::garmin::GarminActivity;
use garmin_notion_bridge::notion::NotionDatabase;
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

fn column(id: &str, name: &str, kind: &str) -> Value {
    json!({ "id": id, "name": name, "type": kind, kind: {} })
}

/// Retrieve-database response for the activity log the default plan targets
pub fn activities_database_json() -> Value {
    let columns = [
        ("IrNS", "AE:AN", "formula"),
        ("title", "Activity Name", "title"),
        ("qXF_", "Activity Type", "select"),
        ("Tqa%3E", "Aerobic", "number"),
        ("f%60Vd", "Aerobic Effect", "select"),
        ("d%3AFs", "Anaerobic", "number"),
        ("RD%5Cq", "Anaerobic Effect", "select"),
        ("Bb%5DL", "Avg Pace", "rich_text"),
        ("Mw%40U", "Calories", "number"),
        ("%3DW_B", "Created time", "created_time"),
        ("%5DKbq", "Date", "date"),
        ("u_%7B%3E", "Distance (km)", "number"),
        ("W%3CN~", "Duration (min)", "number"),
        ("Yg%7Bs", "PR", "checkbox"),
        ("L%5B%3E%7D", "Subactivity Type", "select"),
        ("BTi%5C", "Training Effect", "select"),
    ];

    let properties: serde_json::Map<String, Value> = columns
        .iter()
        .map(|(id, name, kind)| ((*name).to_owned(), column(id, name, kind)))
        .collect();

    json!({
        "object": "database",
        "id": "381d8720-f394-468e-a63d-9f75aec3064d",
        "title": [{ "type": "text", "text": { "content": "Activities" }, "plain_text": "Activities" }],
        "properties": properties,
    })
}

/// Parsed activities database
pub fn activities_database() -> NotionDatabase {
    NotionDatabase::from_json(activities_database_json()).unwrap()
}

/// 5 km run at 2.5 m/s, starting 2024-05-01 06:30 UTC
pub fn running_activity_json() -> Value {
    json!({
        "activityId": 15_023_478_901_u64,
        "activityName": "Morning Run",
        "startTimeLocal": "2024-05-01 08:30:00",
        "startTimeGMT": "2024-05-01 06:30:00",
        "activityType": { "typeId": 1, "typeKey": "running", "parentTypeId": 17 },
        "distance": 5000.0,
        "duration": 2000.0,
        "elapsedDuration": 2010.5,
        "averageSpeed": 2.5,
        "calories": 512.0,
        "averageHR": 151.0,
        "pr": true,
        "trainingEffectLabel": "AEROBIC_BASE",
        "aerobicTrainingEffect": 3.4,
        "aerobicTrainingEffectMessage": "IMPROVING_AEROBIC_BASE_8",
        "anaerobicTrainingEffect": 0.3,
        "anaerobicTrainingEffectMessage": "NO_ANAEROBIC_BENEFIT_1"
    })
}

/// Parsed running activity
pub fn running_activity() -> GarminActivity {
    GarminActivity::from_json(running_activity_json()).unwrap()
}

/// Breathwork session: no distance, no speed, no training effect
pub fn breathwork_activity_json() -> Value {
    json!({
        "activityId": 15_023_478_902_u64,
        "activityName": "",
        "startTimeGMT": "2024-05-01 21:15:00",
        "activityType": { "typeKey": "breathwork" },
        "duration": 600.0,
        "distance": null,
        "averageSpeed": null,
        "calories": 12.0,
        "pr": false
    })
}
