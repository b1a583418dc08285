// ABOUTME: Main library entry point for the Garmin to Notion activity bridge
// ABOUTME: Field adaptation, schema validation and record conversion for Notion databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Garmin Notion Bridge
//!
//! Copies fitness activities from Garmin Connect into rows of a Notion
//! database, converting units and field formats on the way. Network access
//! and authentication are left to the caller: this crate turns already
//! fetched JSON into typed records and typed records into page properties.
//!
//! ## Architecture
//!
//! - **`bridge_core`**: measurement value types (`Distance`, `Duration`,
//!   `Speed`, `Pace`) and unit conversion
//! - **Garmin**: activity model implementing [`sync::SourceRecord`]
//! - **Sync**: field types with per-column-kind adapter tables, synchronized
//!   fields, plan files, schema validation and the row converter
//! - **Notion**: column kinds, property payloads and database metadata
//! - **Config**: `BRIDGE_*` environment configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use garmin_notion_bridge::errors::AppResult;
//! use garmin_notion_bridge::garmin::{default_activity_plan, GarminActivity};
//! use garmin_notion_bridge::notion::NotionDatabase;
//! use garmin_notion_bridge::sync::{RowConverter, SyncDefaults};
//! use serde_json::Value;
//!
//! fn convert(database_json: Value, activity_json: Value) -> AppResult<()> {
//!     let plan = default_activity_plan(&SyncDefaults::default())?;
//!     let database = NotionDatabase::from_json(database_json)?;
//!     let converter = RowConverter::from_plan(&database, &plan)?;
//!
//!     let activity = GarminActivity::from_json(activity_json)?;
//!     let properties = converter.insert_payload(&activity)?;
//!     println!("{}", Value::Object(properties));
//!     Ok(())
//! }
//! ```

/// Configuration from environment variables
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Garmin Connect activity model
pub mod garmin;

/// Structured logging setup
pub mod logging;

/// Notion column kinds, payloads and database metadata
pub mod notion;

/// Field adaptation, plans, schema validation and row conversion
pub mod sync;

pub use bridge_core::{Distance, DistanceUnit, Duration, DurationFormat, Pace, Speed, TimeUnit};
