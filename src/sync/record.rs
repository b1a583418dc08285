// ABOUTME: Source-side abstraction: typed field values and records that expose them by name
// ABOUTME: Lets field mappings validate names up front and read values generically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bridge_core::{Distance, Duration, Pace, Speed};
use chrono::{DateTime, Utc};

/// Typed value read from a source record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Value is absent on this record
    Missing,
    /// Numeric identifier
    Identifier(u64),
    /// Plain number
    Number(f64),
    /// Text
    Text(String),
    /// Flag
    Boolean(bool),
    /// Instant in UTC
    Date(DateTime<Utc>),
    /// Distance measurement
    Distance(Distance),
    /// Duration measurement
    Duration(Duration),
    /// Speed measurement
    Speed(Speed),
    /// Pace measurement
    Pace(Pace),
}

impl FieldValue {
    /// Name of the value kind, used in error messages
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Identifier(_) => "identifier",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Date(_) => "date",
            Self::Distance(_) => "distance",
            Self::Duration(_) => "duration",
            Self::Speed(_) => "speed",
            Self::Pace(_) => "pace",
        }
    }

    /// Whether the value is absent
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Record whose attributes can be copied into destination columns
pub trait SourceRecord {
    /// Human-readable record name used in error messages
    const RECORD_NAME: &'static str;

    /// Every attribute name a field mapping may reference
    const FIELD_NAMES: &'static [&'static str];

    /// Value of the named attribute, `None` if the name is unknown
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// External icon shown on the record's page
    fn icon_url(&self) -> Option<&str> {
        None
    }

    /// Whether `field` is one of [`Self::FIELD_NAMES`]
    #[must_use]
    fn has_field(field: &str) -> bool {
        Self::FIELD_NAMES.contains(&field)
    }
}
