// ABOUTME: Synchronized field: one source attribute bound to one destination column
// ABOUTME: Source field names are checked against the record's known fields at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::field_type::{ColumnAdapter, FieldType};
use super::record::SourceRecord;
use crate::errors::{AppError, AppResult};
use crate::notion::ColumnType;

/// Declared mapping from a source attribute to a destination column
#[derive(Debug, Clone, PartialEq)]
pub struct SynchronizedField {
    source_field: String,
    column: String,
    field_type: FieldType,
}

impl SynchronizedField {
    /// Bind `source_field` of records of type `R` to the column named `column`
    ///
    /// # Errors
    ///
    /// Returns an `UnknownField` error naming the field and listing every
    /// valid field of `R` when `source_field` is not one of them
    pub fn new<R: SourceRecord>(
        source_field: impl Into<String>,
        column: impl Into<String>,
        field_type: FieldType,
    ) -> AppResult<Self> {
        let source_field = source_field.into();
        if !R::has_field(&source_field) {
            return Err(AppError::unknown_field(
                R::RECORD_NAME,
                &source_field,
                R::FIELD_NAMES,
            ));
        }

        Ok(Self {
            source_field,
            column: column.into(),
            field_type,
        })
    }

    /// Source attribute name
    #[must_use]
    pub fn source_field(&self) -> &str {
        &self.source_field
    }

    /// Destination column name
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// How the value is rendered
    #[must_use]
    pub const fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Adapter for the actual kind of the destination column
    ///
    /// # Errors
    ///
    /// Returns an error if the field type cannot be written to `column_type`
    pub fn adapter_for(&self, column_type: ColumnType) -> AppResult<ColumnAdapter> {
        self.field_type.adapter_for(column_type).map_err(|error| {
            let message = format!("column '{}': {}", self.column, error.message);
            AppError {
                message,
                ..error
            }
        })
    }
}
