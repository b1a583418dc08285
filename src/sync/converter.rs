// ABOUTME: Row converter binding each synchronized field to the adapter for its actual column kind
// ABOUTME: Turns source records into page property, page-create and row lookup payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use super::field::SynchronizedField;
use super::field_type::ColumnAdapter;
use super::plan::SyncPlan;
use super::record::{FieldValue, SourceRecord};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::notion::{ColumnType, NotionDatabase};

struct ColumnBinding {
    source_field: String,
    column: String,
    column_type: ColumnType,
    accepts_missing: bool,
    adapter: ColumnAdapter,
}

/// Converts source records into property payloads for one database
pub struct RowConverter {
    bindings: Vec<ColumnBinding>,
}

impl RowConverter {
    /// Resolve one adapter per field against the database's actual columns
    ///
    /// # Errors
    ///
    /// Returns a single `SchemaMismatch` error whose details list every field
    /// whose column is missing, of an unknown kind, or of a kind the field
    /// cannot be written to
    pub fn build(database: &NotionDatabase, fields: &[SynchronizedField]) -> AppResult<Self> {
        let mut bindings = Vec::with_capacity(fields.len());
        let mut problems = Vec::new();

        for field in fields {
            let Some(column) = database.column(field.column()) else {
                problems.push(format!(
                    "column '{}' does not exist in the database",
                    field.column()
                ));
                continue;
            };

            let Some(column_type) = column.column_type() else {
                problems.push(format!(
                    "column '{}' has unsupported type '{}'",
                    field.column(),
                    column.kind
                ));
                continue;
            };

            match field.adapter_for(column_type) {
                Ok(adapter) => bindings.push(ColumnBinding {
                    source_field: field.source_field().to_owned(),
                    column: field.column().to_owned(),
                    column_type,
                    accepts_missing: field.field_type().accepts_missing(),
                    adapter,
                }),
                Err(error) => problems.push(error.message),
            }
        }

        if !problems.is_empty() {
            return Err(AppError::new(
                ErrorCode::SchemaMismatch,
                format!(
                    "database '{}' cannot receive {} field(s): {}",
                    database.name,
                    problems.len(),
                    problems.join("; ")
                ),
            )
            .with_details(json!({ "database_id": database.id, "problems": problems })));
        }

        info!(
            database_id = %database.id,
            columns = bindings.len(),
            "Row converter ready"
        );

        Ok(Self { bindings })
    }

    /// Resolve a whole plan against `database`
    ///
    /// # Errors
    ///
    /// See [`RowConverter::build`]
    pub fn from_plan(database: &NotionDatabase, plan: &SyncPlan) -> AppResult<Self> {
        Self::build(database, plan.fields())
    }

    /// Destination column names, in field order
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.bindings
            .iter()
            .map(|binding| binding.column.as_str())
            .collect()
    }

    /// Page properties for `record`, keyed by column name.
    ///
    /// Absent values are left out unless the field renders a default for them.
    /// Read-only columns (unique ids) identify rows and are never written.
    ///
    /// # Errors
    ///
    /// Returns a single error listing every column whose value could not be
    /// rendered
    pub fn insert_payload<R: SourceRecord>(&self, record: &R) -> AppResult<Map<String, Value>> {
        let mut properties = Map::new();
        let mut problems = Vec::new();

        for binding in &self.bindings {
            let value = match source_value(binding, record) {
                Ok(value) => value,
                Err(problem) => {
                    problems.push(problem);
                    continue;
                }
            };

            if !binding.column_type.is_writable() {
                debug!(column = %binding.column, "Lookup column, not written");
                continue;
            }

            if value.is_missing() && !binding.accepts_missing {
                debug!(column = %binding.column, "Skipping absent value");
                continue;
            }

            match render(binding, &value) {
                Ok(payload) => {
                    debug!(
                        column = %binding.column,
                        column_type = %binding.column_type,
                        "Adapted value"
                    );
                    properties.insert(binding.column.clone(), payload);
                }
                Err(error) => problems.push(format!("column '{}': {}", binding.column, error.message)),
            }
        }

        if !problems.is_empty() {
            return Err(AppError::invalid_input(format!(
                "{} could not be converted: {}",
                R::RECORD_NAME,
                problems.join("; ")
            ))
            .with_details(json!({ "problems": problems })));
        }

        Ok(properties)
    }

    /// Page-create request body for `record` in the database `database_id`.
    ///
    /// The record's icon, when it has one, is attached as an external icon.
    ///
    /// # Errors
    ///
    /// See [`RowConverter::insert_payload`]
    pub fn page_payload<R: SourceRecord>(&self, database_id: &str, record: &R) -> AppResult<Value> {
        let properties = self.insert_payload(record)?;

        let mut page = json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        });
        if let Some(url) = record.icon_url() {
            page["icon"] = json!({ "type": "external", "external": { "url": url } });
        }

        Ok(page)
    }

    /// Database query filter locating the existing row for `record`.
    ///
    /// Every read-only column bound to the record (a unique id) contributes
    /// one equality condition. `None` when the plan binds no such column.
    ///
    /// # Errors
    ///
    /// Returns an error if a key value is absent or cannot be shaped into a
    /// filter
    pub fn lookup_filter<R: SourceRecord>(&self, record: &R) -> AppResult<Option<Value>> {
        let mut conditions = Vec::new();

        for binding in self
            .bindings
            .iter()
            .filter(|binding| !binding.column_type.is_writable())
        {
            let value = source_value(binding, record).map_err(AppError::invalid_input)?;
            if value.is_missing() {
                return Err(AppError::invalid_input(format!(
                    "{} has no value for lookup column '{}'",
                    R::RECORD_NAME,
                    binding.column
                )));
            }

            let property = (binding.adapter)(&value)?;
            conditions.push(
                binding
                    .column_type
                    .filter_payload(&binding.column, &property)?,
            );
        }

        if conditions.is_empty() {
            return Ok(None);
        }
        Ok(Some(json!({ "and": conditions })))
    }
}

fn source_value<R: SourceRecord>(binding: &ColumnBinding, record: &R) -> Result<FieldValue, String> {
    record.field_value(&binding.source_field).ok_or_else(|| {
        format!(
            "column '{}': '{}' is not a {} field",
            binding.column,
            binding.source_field,
            R::RECORD_NAME
        )
    })
}

fn render(binding: &ColumnBinding, value: &FieldValue) -> AppResult<Value> {
    let property = (binding.adapter)(value)?;
    binding.column_type.insert_payload(&property)
}

impl fmt::Debug for RowConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.bindings
                    .iter()
                    .map(|binding| (&binding.column, binding.column_type)),
            )
            .finish()
    }
}
