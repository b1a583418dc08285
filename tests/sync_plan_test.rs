// ABOUTME: Integration tests for synchronized fields and sync plan loading
// ABOUTME: Covers unknown source fields, unit parsing, JSON/YAML plans and aggregated plan errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;

use garmin_notion_bridge::errors::ErrorCode;
use garmin_notion_bridge::garmin::{default_activity_plan, GarminActivity};
use garmin_notion_bridge::sync::{
    DisplayTimezone, FieldType, SourceRecord, SyncDefaults, SyncPlan, SynchronizedField,
};
use garmin_notion_bridge::{DistanceUnit, TimeUnit};
use tempfile::{Builder, NamedTempFile};

fn temp_file_with_suffix(suffix: &str) -> NamedTempFile {
    Builder::new().suffix(suffix).tempfile().unwrap()
}

#[test]
fn test_unknown_source_field_lists_valid_fields() {
    let err = SynchronizedField::new::<GarminActivity>(
        "heart_rate",
        "HR",
        FieldType::Number { precision: 0 },
    )
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::UnknownField);
    assert!(err.message.contains("'heart_rate'"));
    assert!(err.message.contains("Garmin activity"));
    for field in GarminActivity::FIELD_NAMES {
        assert!(err.message.contains(field), "{field} missing from: {}", err.message);
    }
}

#[test]
fn test_known_source_field_is_kept_verbatim() {
    let field = SynchronizedField::new::<GarminActivity>(
        "distance",
        "Distance (km)",
        FieldType::Distance {
            unit: DistanceUnit::Kilometer,
        },
    )
    .unwrap();

    assert_eq!(field.source_field(), "distance");
    assert_eq!(field.column(), "Distance (km)");
    assert_eq!(field.field_type().name(), "distance");
}

#[test]
fn test_yaml_plan_resolves_units_and_defaults() {
    let yaml = r"
database_title: Training Log
fields:
  - source_field: name
    column: Activity Name
    type: text
  - source_field: average_speed
    column: Speed
    type: speed
    unit: km / h
  - source_field: average_pace
    column: Avg Pace
    type: pace
    unit: s/km
  - source_field: start_time_utc
    column: Date
    type: date
    timezone: '+02:00'
  - source_field: calories
    column: Calories
    type: number
    precision: 0
";
    let plan = SyncPlan::from_yaml_str::<GarminActivity>(yaml, &SyncDefaults::default()).unwrap();

    assert_eq!(plan.database_title(), "Training Log");
    let types: Vec<&FieldType> = plan.fields().iter().map(SynchronizedField::field_type).collect();
    assert_eq!(
        types,
        vec![
            &FieldType::Text {
                default: "Unknown".to_owned()
            },
            &FieldType::Speed {
                distance_unit: DistanceUnit::Kilometer,
                time_unit: TimeUnit::Hour,
            },
            &FieldType::Pace {
                time_unit: TimeUnit::Second,
                distance_unit: DistanceUnit::Kilometer,
            },
            &FieldType::Date {
                timezone: DisplayTimezone::parse("+02:00").unwrap()
            },
            &FieldType::Number { precision: 0 },
        ]
    );
}

#[test]
fn test_json_plan_uses_configured_defaults() {
    let json = r#"{
        "fields": [
            { "source_field": "training_effect", "column": "Training Effect", "type": "text" },
            { "source_field": "start_time_utc", "column": "Date", "type": "date" },
            { "source_field": "aerobic_score", "column": "Aerobic", "type": "number" }
        ]
    }"#;
    let defaults = SyncDefaults {
        text_default: "n/a".to_owned(),
        display_timezone: DisplayTimezone::parse("-05:00").unwrap(),
        number_precision: 1,
        database_title: "Workouts".to_owned(),
    };

    let plan = SyncPlan::from_json_str::<GarminActivity>(json, &defaults).unwrap();

    assert_eq!(plan.database_title(), "Workouts");
    assert_eq!(
        plan.fields()[0].field_type(),
        &FieldType::Text {
            default: "n/a".to_owned()
        }
    );
    assert_eq!(
        plan.fields()[1].field_type(),
        &FieldType::Date {
            timezone: defaults.display_timezone
        }
    );
    assert_eq!(
        plan.fields()[2].field_type(),
        &FieldType::Number { precision: 1 }
    );
}

#[test]
fn test_plan_reports_every_problem() {
    let yaml = r"
fields:
  - source_field: heart_rate
    column: HR
    type: number
  - source_field: distance
    column: Distance
    type: distance
    unit: mi
  - source_field: average_speed
    column: Speed
    type: speed
    unit: kmh
  - source_field: start_time_utc
    column: Date
    type: date
    timezone: Mars/Olympus
  - source_field: calories
    column: Date
    type: number
";
    let err = SyncPlan::from_yaml_str::<GarminActivity>(yaml, &SyncDefaults::default())
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    let problems = err.details["problems"].as_array().unwrap();
    assert_eq!(problems.len(), 5, "{problems:?}");
    assert!(err.message.contains("'heart_rate'"));
    assert!(err.message.contains("'mi'"));
    assert!(err.message.contains("'kmh'"));
    assert!(err.message.contains("Mars/Olympus"));
    assert!(err.message.contains("column 'Date' is mapped more than once"));
}

#[test]
fn test_unknown_field_type_tag_is_a_serialization_error() {
    let json = r#"{ "fields": [{ "source_field": "name", "column": "Name", "type": "emoji" }] }"#;
    let err = SyncPlan::from_json_str::<GarminActivity>(json, &SyncDefaults::default())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_plan_files_by_extension() {
    let yaml = "fields:\n  - source_field: is_personal_record\n    column: PR\n    type: boolean\n";
    let mut yaml_file = temp_file_with_suffix(".yml");
    yaml_file.write_all(yaml.as_bytes()).unwrap();
    let plan = SyncPlan::from_path::<GarminActivity>(yaml_file.path(), &SyncDefaults::default())
        .unwrap();
    assert_eq!(plan.fields()[0].field_type(), &FieldType::Boolean);

    let json = r#"{ "fields": [{ "source_field": "id", "column": "ID", "type": "identifier" }] }"#;
    let mut json_file = temp_file_with_suffix(".json");
    json_file.write_all(json.as_bytes()).unwrap();
    let plan = SyncPlan::from_path::<GarminActivity>(json_file.path(), &SyncDefaults::default())
        .unwrap();
    assert_eq!(plan.fields()[0].field_type(), &FieldType::Identifier);

    let toml_file = temp_file_with_suffix(".toml");
    let err = SyncPlan::from_path::<GarminActivity>(toml_file.path(), &SyncDefaults::default())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_missing_plan_file_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SyncPlan::from_path::<GarminActivity>(
        dir.path().join("absent.yaml"),
        &SyncDefaults::default(),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_default_activity_plan_resolves() {
    let plan = default_activity_plan(&SyncDefaults::default()).unwrap();
    assert_eq!(plan.database_title(), "Activities");
    assert_eq!(plan.fields().len(), 13);
    assert!(plan
        .fields()
        .iter()
        .any(|field| field.column() == "Avg Pace"
            && field.field_type() == &FieldType::pace("s/km").unwrap()));
}
