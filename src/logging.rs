// ABOUTME: Logging configuration and structured logging setup for the activity bridge
// ABOUTME: Configures log levels, output format and source locations from the environment and bridge config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup

use std::env;
use std::io;

use anyhow::Result;
use serde_json::json;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::BridgeConfig;
use crate::constants::service_names;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for scheduled runs
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            service_name: service_names::GARMIN_NOTION_BRIDGE.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::GARMIN_NOTION_BRIDGE.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }

    /// Logging configuration for a loaded bridge configuration.
    ///
    /// `RUST_LOG` and `LOG_FORMAT` still win when set. Otherwise the level
    /// comes from `BRIDGE_LOG_LEVEL` and the format from the environment:
    /// JSON with source locations in production, compact when testing.
    #[must_use]
    pub fn for_bridge(config: &BridgeConfig) -> Self {
        let base = Self::from_env();
        let environment = config.environment;

        let level = if env::var_os("RUST_LOG").is_some() {
            base.level
        } else {
            LevelFilter::from_level(config.log_level.to_tracing_level()).to_string()
        };

        let format = if env::var_os("LOG_FORMAT").is_some() {
            base.format
        } else if environment.is_production() {
            LogFormat::Json
        } else if environment.is_testing() {
            LogFormat::Compact
        } else {
            LogFormat::Pretty
        };

        Self {
            level,
            format,
            include_location: base.include_location || environment.is_production(),
            ..base
        }
    }

    /// Filter built from the configured level
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level)
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stdout);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Garmin Notion bridge starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
            }
        });
        info!("Logging configured: {}", config_summary);
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Initialize logging for a loaded bridge configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_for_bridge(config: &BridgeConfig) -> Result<()> {
    LoggingConfig::for_bridge(config).init()
}
