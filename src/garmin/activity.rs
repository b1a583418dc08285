// ABOUTME: Garmin Connect activity model parsed from the activity-list JSON
// ABOUTME: Converts raw metres, seconds and m/s into measurement types and derives pace and icon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bridge_core::{Distance, Duration, Pace, Speed};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use super::labels::{activity_icon_url, parse_metabolism_effect, title_case_key};
use crate::errors::{AppError, AppResult};
use crate::sync::{FieldValue, SourceRecord};

/// Layouts Garmin uses for `startTimeGMT`
const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Activity entry as returned by Garmin Connect
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GarminActivityResponse {
    #[serde(rename = "startTimeGMT")]
    start_time_gmt: String,
    activity_id: u64,
    activity_name: String,
    activity_type: ActivityTypeResponse,
    calories: f64,
    #[serde(default)]
    pr: bool,
    #[serde(default)]
    training_effect_label: Option<String>,
    #[serde(default)]
    aerobic_training_effect_message: Option<String>,
    #[serde(default)]
    aerobic_training_effect: Option<f64>,
    #[serde(default)]
    anaerobic_training_effect_message: Option<String>,
    #[serde(default)]
    anaerobic_training_effect: Option<f64>,
    duration: f64,
    #[serde(default)]
    distance: Option<f64>,
    #[serde(default)]
    average_speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityTypeResponse {
    type_key: String,
}

/// Garmin activity with typed measurements
#[derive(Debug, Clone, PartialEq)]
pub struct GarminActivity {
    start_time_utc: DateTime<Utc>,
    id: u64,
    name: String,
    activity_type: String,
    calories: f64,
    is_personal_record: bool,
    training_effect: Option<String>,
    aerobic_effect: Option<String>,
    aerobic_score: Option<f64>,
    anaerobic_effect: Option<String>,
    anaerobic_score: Option<f64>,
    duration: Duration,
    distance: Option<Distance>,
    average_speed: Option<Speed>,
    average_pace: Option<Pace>,
    icon_url: Option<String>,
}

impl GarminActivity {
    /// Parse one activity entry
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON lacks required keys, the start time is
    /// not a recognised layout, or a training effect message is unknown
    pub fn from_json(value: Value) -> AppResult<Self> {
        let response: GarminActivityResponse = serde_json::from_value(value)?;
        Self::try_from(response)
    }

    /// Parse one activity entry from text
    ///
    /// # Errors
    ///
    /// See [`GarminActivity::from_json`]
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let response: GarminActivityResponse = serde_json::from_str(json)?;
        Self::try_from(response)
    }

    /// Parse an activity-list response, reporting every invalid entry
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an array, or lists every entry
    /// that failed to parse together with its index
    pub fn list_from_json(value: Value) -> AppResult<Vec<Self>> {
        let Value::Array(entries) = value else {
            return Err(AppError::invalid_input(
                "Garmin activity list must be a JSON array",
            ));
        };

        let mut activities = Vec::with_capacity(entries.len());
        let mut problems = Vec::new();
        for (index, entry) in entries.into_iter().enumerate() {
            match Self::from_json(entry) {
                Ok(activity) => activities.push(activity),
                Err(error) => problems.push(format!("activity[{index}]: {}", error.message)),
            }
        }

        if problems.is_empty() {
            Ok(activities)
        } else {
            Err(AppError::invalid_input(format!(
                "{} Garmin activities could not be parsed: {}",
                problems.len(),
                problems.join("; ")
            ))
            .with_details(json!({ "problems": problems })))
        }
    }

    /// Start of the activity
    #[must_use]
    pub const fn start_time_utc(&self) -> DateTime<Utc> {
        self.start_time_utc
    }

    /// Garmin activity id
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Activity name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activity type display name, such as `Treadmill Running`
    #[must_use]
    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    /// Energy spent, in kilocalories
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Whether the activity set a personal record
    #[must_use]
    pub const fn is_personal_record(&self) -> bool {
        self.is_personal_record
    }

    /// Primary training benefit, such as `Aerobic Base`
    #[must_use]
    pub fn training_effect(&self) -> Option<&str> {
        self.training_effect.as_deref()
    }

    /// Aerobic effect label
    #[must_use]
    pub fn aerobic_effect(&self) -> Option<&str> {
        self.aerobic_effect.as_deref()
    }

    /// Aerobic training effect score
    #[must_use]
    pub const fn aerobic_score(&self) -> Option<f64> {
        self.aerobic_score
    }

    /// Anaerobic effect label
    #[must_use]
    pub fn anaerobic_effect(&self) -> Option<&str> {
        self.anaerobic_effect.as_deref()
    }

    /// Anaerobic training effect score
    #[must_use]
    pub const fn anaerobic_score(&self) -> Option<f64> {
        self.anaerobic_score
    }

    /// Elapsed duration
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Distance covered, in metres; `None` when Garmin reports none
    #[must_use]
    pub const fn distance(&self) -> Option<Distance> {
        self.distance
    }

    /// Average speed, in m/s
    #[must_use]
    pub const fn average_speed(&self) -> Option<Speed> {
        self.average_speed
    }

    /// Average pace derived from the average speed, in s/m
    #[must_use]
    pub const fn average_pace(&self) -> Option<Pace> {
        self.average_pace
    }
}

impl TryFrom<GarminActivityResponse> for GarminActivity {
    type Error = AppError;

    fn try_from(response: GarminActivityResponse) -> Result<Self, Self::Error> {
        let start_time_utc = parse_start_time(&response.start_time_gmt)?;
        let aerobic_effect = response
            .aerobic_training_effect_message
            .as_deref()
            .map(parse_metabolism_effect)
            .transpose()?;
        let anaerobic_effect = response
            .anaerobic_training_effect_message
            .as_deref()
            .map(parse_metabolism_effect)
            .transpose()?;

        let activity_type = title_case_key(&response.activity_type.type_key);
        let icon_url = activity_icon_url(&activity_type).map(str::to_owned);
        let average_speed = response.average_speed.map(Speed::meters_per_second);

        Ok(Self {
            start_time_utc,
            id: response.activity_id,
            name: response.activity_name,
            activity_type,
            calories: response.calories,
            is_personal_record: response.pr,
            training_effect: response
                .training_effect_label
                .as_deref()
                .map(title_case_key),
            aerobic_effect,
            aerobic_score: response.aerobic_training_effect,
            anaerobic_effect,
            anaerobic_score: response.anaerobic_training_effect,
            duration: Duration::from_seconds(response.duration),
            distance: response.distance.map(Distance::meters),
            average_speed,
            average_pace: average_speed.map(Pace::from_speed),
            icon_url,
        })
    }
}

impl SourceRecord for GarminActivity {
    const RECORD_NAME: &'static str = "Garmin activity";

    const FIELD_NAMES: &'static [&'static str] = &[
        "start_time_utc",
        "id",
        "name",
        "type",
        "calories",
        "is_personal_record",
        "training_effect",
        "aerobic_effect",
        "aerobic_score",
        "anaerobic_effect",
        "anaerobic_score",
        "duration",
        "distance",
        "average_speed",
        "average_pace",
        "icon_url",
    ];

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "start_time_utc" => FieldValue::Date(self.start_time_utc),
            "id" => FieldValue::Identifier(self.id),
            "name" => FieldValue::Text(self.name.clone()),
            "type" => FieldValue::Text(self.activity_type.clone()),
            "calories" => FieldValue::Number(self.calories),
            "is_personal_record" => FieldValue::Boolean(self.is_personal_record),
            "training_effect" => self.training_effect.clone().into(),
            "aerobic_effect" => self.aerobic_effect.clone().into(),
            "aerobic_score" => self.aerobic_score.into(),
            "anaerobic_effect" => self.anaerobic_effect.clone().into(),
            "anaerobic_score" => self.anaerobic_score.into(),
            "duration" => FieldValue::Duration(self.duration),
            "distance" => self.distance.map_or(FieldValue::Missing, FieldValue::Distance),
            "average_speed" => self
                .average_speed
                .map_or(FieldValue::Missing, FieldValue::Speed),
            "average_pace" => self.average_pace.map_or(FieldValue::Missing, FieldValue::Pace),
            "icon_url" => self.icon_url.clone().into(),
            _ => return None,
        };
        Some(value)
    }

    /// Icon for the activity type, if one is known
    fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }
}

/// `startTimeGMT` carries no offset; Garmin reports it in UTC
fn parse_start_time(text: &str) -> AppResult<DateTime<Utc>> {
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "start time '{text}' is not a valid Garmin timestamp"
            ))
        })
}
