// ABOUTME: Expected database schema derived from synchronized fields, and its validator
// ABOUTME: Compares a Notion database against the schema and returns every discrepancy found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::field::SynchronizedField;
use crate::notion::{ColumnType, NotionDatabase};

/// Column the plan expects, with the kinds its field can be written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSchema {
    /// Column name
    pub name: String,
    /// Column kinds the field has an adapter for
    pub valid_types: Vec<ColumnType>,
}

/// Database layout a plan expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSchema {
    /// Expected database title
    pub name: String,
    /// Expected columns, in field order
    pub columns: Vec<ColumnSchema>,
}

impl DatabaseSchema {
    /// One expected column per field, accepting the kinds in its adapter table
    #[must_use]
    pub fn from_fields(database_title: impl Into<String>, fields: &[SynchronizedField]) -> Self {
        Self {
            name: database_title.into(),
            columns: fields
                .iter()
                .map(|field| ColumnSchema {
                    name: field.column().to_owned(),
                    valid_types: field.field_type().supported_column_types(),
                })
                .collect(),
        }
    }
}

/// One way a database differs from the expected schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaDiscrepancy {
    /// Database title differs from the expected one
    NameMismatch {
        /// Expected title
        expected: String,
        /// Actual title
        actual: String,
    },
    /// No column with the expected name
    MissingColumn {
        /// Expected column name
        column: String,
    },
    /// Column exists but its kind is not known to the bridge
    UnsupportedColumnKind {
        /// Column name
        column: String,
        /// Raw kind reported by Notion
        column_kind: String,
    },
    /// Column exists but the field cannot be written to its kind
    IncompatibleColumnType {
        /// Column name
        column: String,
        /// Actual kind
        actual: ColumnType,
        /// Kinds the field can be written to
        expected: Vec<ColumnType>,
    },
}

impl fmt::Display for SchemaDiscrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameMismatch { expected, actual } => write!(
                f,
                "Database name '{actual}' does not match the expected name '{expected}'."
            ),
            Self::MissingColumn { column } => {
                write!(f, "Column '{column}' does not exist in the database.")
            }
            Self::UnsupportedColumnKind { column, column_kind } => {
                write!(f, "Column '{column}' has unsupported type '{column_kind}'.")
            }
            Self::IncompatibleColumnType {
                column,
                actual,
                expected,
            } => {
                let expected: Vec<&str> = expected.iter().map(ColumnType::as_str).collect();
                write!(
                    f,
                    "Column '{column}' has type '{actual}', expected one of: {}.",
                    expected.join(", ")
                )
            }
        }
    }
}

/// Compare `database` with `schema`, collecting every discrepancy.
///
/// An empty result means rows built from the schema's fields can be written
/// to the database.
#[must_use]
pub fn validate_database(
    database: &NotionDatabase,
    schema: &DatabaseSchema,
) -> Vec<SchemaDiscrepancy> {
    let mut discrepancies = Vec::new();

    if database.name != schema.name {
        discrepancies.push(SchemaDiscrepancy::NameMismatch {
            expected: schema.name.clone(),
            actual: database.name.clone(),
        });
    }

    for expected in &schema.columns {
        let Some(column) = database.column(&expected.name) else {
            discrepancies.push(SchemaDiscrepancy::MissingColumn {
                column: expected.name.clone(),
            });
            continue;
        };

        match column.column_type() {
            None => discrepancies.push(SchemaDiscrepancy::UnsupportedColumnKind {
                column: expected.name.clone(),
                column_kind: column.kind.clone(),
            }),
            Some(actual) if !expected.valid_types.contains(&actual) => {
                discrepancies.push(SchemaDiscrepancy::IncompatibleColumnType {
                    column: expected.name.clone(),
                    actual,
                    expected: expected.valid_types.clone(),
                });
            }
            Some(_) => {}
        }
    }

    for discrepancy in &discrepancies {
        warn!(database_id = %database.id, "{discrepancy}");
    }

    discrepancies
}
