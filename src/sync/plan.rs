// ABOUTME: Declarative synchronization plans loaded from JSON or YAML
// ABOUTME: Resolves every field mapping into a SynchronizedField, reporting all problems at once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::field::SynchronizedField;
use super::field_type::FieldType;
use super::record::SourceRecord;
use super::timezone::DisplayTimezone;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};

/// Values applied to field mappings that leave a parameter out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncDefaults {
    /// Replacement for empty text values
    pub text_default: String,
    /// Timezone for date fields
    pub display_timezone: DisplayTimezone,
    /// Decimal places for number fields
    pub number_precision: u32,
    /// Expected title of the destination database
    pub database_title: String,
}

impl Default for SyncDefaults {
    fn default() -> Self {
        Self {
            text_default: defaults::TEXT_DEFAULT.to_owned(),
            display_timezone: DisplayTimezone::utc(),
            number_precision: defaults::NUMBER_PRECISION,
            database_title: defaults::DATABASE_TITLE.to_owned(),
        }
    }
}

/// Field type parameters as written in a plan file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldTypeConfig {
    /// Numeric identifier
    Identifier,
    /// Number with optional precision
    Number {
        /// Decimal places, falls back to the plan default
        #[serde(default, skip_serializing_if = "Option::is_none")]
        precision: Option<u32>,
    },
    /// Text with optional default
    Text {
        /// Replacement for empty values, falls back to the plan default
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    /// Yes/No flag
    Boolean,
    /// Date with optional display timezone
    Date {
        /// Timezone name or offset, falls back to the plan default
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timezone: Option<String>,
    },
    /// Distance in a unit such as `km`
    Distance {
        /// Distance unit symbol
        unit: String,
    },
    /// Duration in a unit such as `m`
    Duration {
        /// Time unit symbol
        unit: String,
    },
    /// Speed in a compound unit such as `km/h`
    Speed {
        /// `distance/time` unit
        unit: String,
    },
    /// Pace in a compound unit such as `s/km`
    Pace {
        /// `time/distance` unit
        unit: String,
    },
}

impl FieldTypeConfig {
    /// Resolve unit symbols and fill absent parameters from `defaults`
    ///
    /// # Errors
    ///
    /// Returns an error for unknown units or timezones
    pub fn resolve(&self, defaults: &SyncDefaults) -> AppResult<FieldType> {
        let field_type = match self {
            Self::Identifier => FieldType::Identifier,
            Self::Number { precision } => FieldType::Number {
                precision: precision.unwrap_or(defaults.number_precision),
            },
            Self::Text { default } => FieldType::Text {
                default: default
                    .clone()
                    .unwrap_or_else(|| defaults.text_default.clone()),
            },
            Self::Boolean => FieldType::Boolean,
            Self::Date { timezone } => FieldType::Date {
                timezone: timezone
                    .as_deref()
                    .map_or(Ok(defaults.display_timezone), DisplayTimezone::parse)?,
            },
            Self::Distance { unit } => FieldType::Distance { unit: unit.parse()? },
            Self::Duration { unit } => FieldType::Duration { unit: unit.parse()? },
            Self::Speed { unit } => FieldType::speed(unit)?,
            Self::Pace { unit } => FieldType::pace(unit)?,
        };
        Ok(field_type)
    }
}

/// One entry of a plan file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMappingConfig {
    /// Source attribute name
    pub source_field: String,
    /// Destination column name
    pub column: String,
    /// Field type and its parameters
    #[serde(flatten)]
    pub field_type: FieldTypeConfig,
}

/// Plan file contents
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyncPlanConfig {
    /// Expected database title, falls back to the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_title: Option<String>,
    /// Field mappings, in column order
    #[serde(default)]
    pub fields: Vec<FieldMappingConfig>,
}

/// Resolved synchronization plan for records of one type
#[derive(Debug, Clone, PartialEq)]
pub struct SyncPlan {
    database_title: String,
    fields: Vec<SynchronizedField>,
}

impl SyncPlan {
    /// Plan from already constructed fields
    #[must_use]
    pub fn new(database_title: impl Into<String>, fields: Vec<SynchronizedField>) -> Self {
        Self {
            database_title: database_title.into(),
            fields,
        }
    }

    /// Resolve a parsed plan file for records of type `R`
    ///
    /// # Errors
    ///
    /// Returns a single `ConfigInvalid` error whose details list every
    /// mapping problem: unknown source fields, unknown units or timezones,
    /// and columns mapped more than once
    pub fn from_config<R: SourceRecord>(
        config: &SyncPlanConfig,
        defaults: &SyncDefaults,
    ) -> AppResult<Self> {
        let mut fields = Vec::with_capacity(config.fields.len());
        let mut problems = Vec::new();
        let mut columns = HashSet::new();

        for (index, mapping) in config.fields.iter().enumerate() {
            if !columns.insert(mapping.column.as_str()) {
                problems.push(format!(
                    "fields[{index}]: column '{}' is mapped more than once",
                    mapping.column
                ));
            }

            let field = mapping.field_type.resolve(defaults).and_then(|field_type| {
                SynchronizedField::new::<R>(&mapping.source_field, &mapping.column, field_type)
            });
            match field {
                Ok(field) => fields.push(field),
                Err(error) => problems.push(format!("fields[{index}]: {}", error.message)),
            }
        }

        if !problems.is_empty() {
            return Err(AppError::config(format!(
                "sync plan has {} invalid field mapping(s): {}",
                problems.len(),
                problems.join("; ")
            ))
            .with_details(json!({ "problems": problems })));
        }

        let database_title = config
            .database_title
            .clone()
            .unwrap_or_else(|| defaults.database_title.clone());
        debug!(
            database_title = %database_title,
            fields = fields.len(),
            "Resolved sync plan"
        );

        Ok(Self::new(database_title, fields))
    }

    /// Parse and resolve a JSON plan
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any mapping is invalid
    pub fn from_json_str<R: SourceRecord>(json: &str, defaults: &SyncDefaults) -> AppResult<Self> {
        let config: SyncPlanConfig = serde_json::from_str(json)?;
        Self::from_config::<R>(&config, defaults)
    }

    /// Parse and resolve a YAML plan
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or any mapping is invalid
    pub fn from_yaml_str<R: SourceRecord>(yaml: &str, defaults: &SyncDefaults) -> AppResult<Self> {
        let config: SyncPlanConfig = serde_yaml::from_str(yaml)?;
        Self::from_config::<R>(&config, defaults)
    }

    /// Load a plan file, choosing the format from its extension
    /// (`.json`, `.yaml` or `.yml`)
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or does not resolve
    pub fn from_path<R: SourceRecord>(
        path: impl AsRef<Path>,
        defaults: &SyncDefaults,
    ) -> AppResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_str::<R>(&fs::read_to_string(path)?, defaults),
            Some("yaml" | "yml") => Self::from_yaml_str::<R>(&fs::read_to_string(path)?, defaults),
            _ => Err(AppError::config(format!(
                "unsupported sync plan file '{}', expected a .json, .yaml or .yml file",
                path.display()
            ))),
        }
    }

    /// Expected title of the destination database
    #[must_use]
    pub fn database_title(&self) -> &str {
        &self.database_title
    }

    /// Resolved fields, in column order
    #[must_use]
    pub fn fields(&self) -> &[SynchronizedField] {
        &self.fields
    }
}
