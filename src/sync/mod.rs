// ABOUTME: Field adaptation layer between typed source records and Notion columns
// ABOUTME: Field types, synchronized fields, plans, schema validation and row conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Field adaptation
//!
//! A [`SynchronizedField`] binds one attribute of a [`SourceRecord`] to one
//! destination column and carries a [`FieldType`]. Each field type owns an
//! adapter table keyed by [`ColumnType`](crate::notion::ColumnType); looking
//! up the actual kind of the destination column yields the closure that
//! renders a [`FieldValue`] into a [`PropertyValue`](crate::notion::PropertyValue).
//!
//! Everything here is synchronous and free of I/O apart from
//! [`SyncPlan::from_path`]. Adapters are `Send + Sync`, so a caller may
//! convert records in parallel.

/// Row converter built from a database and a set of fields
pub mod converter;
/// Synchronized field descriptors
pub mod field;
/// Field types and their adapter tables
pub mod field_type;
/// Plan files
pub mod plan;
/// Source record abstraction
pub mod record;
/// Expected schema and validator
pub mod schema;
/// Display timezone parsing
pub mod timezone;

pub use converter::RowConverter;
pub use field::SynchronizedField;
pub use field_type::{AdapterTable, ColumnAdapter, FieldType};
pub use plan::{FieldMappingConfig, FieldTypeConfig, SyncDefaults, SyncPlan, SyncPlanConfig};
pub use record::{FieldValue, SourceRecord};
pub use schema::{validate_database, ColumnSchema, DatabaseSchema, SchemaDiscrepancy};
pub use timezone::DisplayTimezone;
