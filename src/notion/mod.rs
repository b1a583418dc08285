// ABOUTME: Notion destination model: column kinds, property payloads and database metadata
// ABOUTME: Shapes primitive values into the property-update format the Notion API expects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Destination side of the bridge.
//!
//! The adapters in [`crate::sync`] produce a [`PropertyValue`]; the
//! [`ColumnType`] of the target column turns it into the JSON payload used in
//! page create/update requests.

mod column;
mod database;

pub use column::{ColumnType, PropertyValue};
pub use database::{NotionDatabase, NotionDatabaseColumn};
