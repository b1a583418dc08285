// ABOUTME: Unified error handling for field adaptation, schema validation and record parsing
// ABOUTME: Defines error codes, the AppError type, and conversions from library errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in this crate returns [`AppResult`]. Errors carry a
//! stable [`ErrorCode`], a human-readable message, and optional structured
//! details (for example the list of valid field names, or every problem found
//! while resolving a synchronization plan).

use std::error::Error as StdError;
use std::fmt;
use std::io;

use bridge_core::UnitError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Standard error codes used throughout the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Configuration (fatal, surfaced immediately)
    /// Synchronization configuration is invalid
    ConfigInvalid,
    /// Field mapping names a source attribute that does not exist
    UnknownField,
    /// Unit symbol is not part of its unit family
    UnknownUnit,
    /// Timezone name or offset could not be parsed
    UnknownTimezone,
    /// Field type has no adapter for the destination column kind
    UnsupportedColumnType,
    /// Destination column kind cannot be written
    ReadOnlyColumn,

    // Data (recoverable by default substitution where defined)
    /// Source value is invalid
    InvalidInput,
    /// Value handed to an adapter does not match the field type
    ValueTypeMismatch,
    /// Destination database does not match the expected schema
    SchemaMismatch,

    // Input/output
    /// Data serialization or deserialization failed
    SerializationError,
    /// Reading a configuration file failed
    StorageError,
}

impl ErrorCode {
    /// Whether the error stems from configuration rather than record data
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigInvalid
                | Self::UnknownField
                | Self::UnknownUnit
                | Self::UnknownTimezone
                | Self::UnsupportedColumnType
                | Self::ReadOnlyColumn
        )
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ConfigInvalid => "Synchronization configuration is invalid",
            Self::UnknownField => "The field mapping references an unknown source field",
            Self::UnknownUnit => "The unit symbol is not recognized",
            Self::UnknownTimezone => "The timezone is not recognized",
            Self::UnsupportedColumnType => "The field cannot be rendered into this column type",
            Self::ReadOnlyColumn => "The column type cannot be written",
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueTypeMismatch => "The value does not match the field type",
            Self::SchemaMismatch => "The database does not match the expected schema",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::StorageError => "Reading configuration failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the bridge
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (valid field names, aggregated problems, ...)
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Mapping names a source field absent from the record's known fields
    #[must_use]
    pub fn unknown_field(record_name: &str, field: &str, valid_fields: &[&str]) -> Self {
        Self::new(
            ErrorCode::UnknownField,
            format!(
                "Field '{field}' is not a valid {record_name} field. Available fields are: {}.",
                valid_fields.join(", ")
            ),
        )
        .with_details(json!({ "field": field, "valid_fields": valid_fields }))
    }

    /// Field type has no adapter for a column kind
    #[must_use]
    pub fn unsupported_column_type(
        field_type: &str,
        column_type: &str,
        supported: &[String],
    ) -> Self {
        Self::new(
            ErrorCode::UnsupportedColumnType,
            format!(
                "{field_type} fields cannot be written to '{column_type}' columns. Supported column types are: {}.",
                supported.join(", ")
            ),
        )
        .with_details(json!({ "column_type": column_type, "supported": supported }))
    }

    /// Column kind is computed by the store and cannot receive values
    #[must_use]
    pub fn read_only_column(column_type: &str) -> Self {
        Self::new(
            ErrorCode::ReadOnlyColumn,
            format!("'{column_type}' columns are read-only or not supported for writing"),
        )
    }

    /// Adapter received a value of the wrong kind
    #[must_use]
    pub fn value_type_mismatch(expected: &str, actual: &str) -> Self {
        Self::new(
            ErrorCode::ValueTypeMismatch,
            format!("expected a {expected} value, got {actual}"),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Timezone could not be resolved
    #[must_use]
    pub fn unknown_timezone(timezone: &str) -> Self {
        Self::new(
            ErrorCode::UnknownTimezone,
            format!("timezone '{timezone}' is not recognized, expected an IANA name such as 'Europe/Paris', 'UTC' or an offset such as '+02:00'"),
        )
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<UnitError> for AppError {
    fn from(error: UnitError) -> Self {
        Self::new(ErrorCode::UnknownUnit, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {error}")).with_source(error)
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization(format!("YAML error: {error}")).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_lists_valid_fields() {
        let error = AppError::unknown_field("Garmin activity", "bad field", &["id", "name"]);
        assert_eq!(error.code, ErrorCode::UnknownField);
        assert!(error.message.contains("'bad field'"));
        assert!(error.message.contains("id, name"));
        assert_eq!(error.details["valid_fields"], json!(["id", "name"]));
    }

    #[test]
    fn test_unit_error_conversion_keeps_source() {
        let error = AppError::from(UnitError::MalformedCompoundUnit("kmh".to_owned()));
        assert_eq!(error.code, ErrorCode::UnknownUnit);
        assert!(error.source().is_some());
        assert!(error.code.is_configuration());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::UnsupportedColumnType).unwrap();
        assert_eq!(json, "\"UNSUPPORTED_COLUMN_TYPE\"");
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::invalid_input("bad token");
        assert_eq!(error.to_string(), "The provided input is invalid: bad token");
    }
}
