// ABOUTME: Configuration management module for the activity bridge
// ABOUTME: Re-exports environment-driven settings and sync defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: deployment mode, log level and sync defaults read from
//!   `BRIDGE_*` environment variables

/// Environment configuration
pub mod environment;

pub use environment::{BridgeConfig, Environment, LogLevel};
