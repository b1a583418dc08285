// ABOUTME: Environment configuration for the activity bridge
// ABOUTME: Reads deployment mode, log level, display timezone and sync defaults from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{defaults, env_vars};
use crate::errors::AppResult;
use crate::garmin::{default_activity_plan, GarminActivity};
use crate::sync::{DisplayTimezone, SyncDefaults, SyncPlan};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Per-column conversion details
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local runs
    #[default]
    Development,
    /// Scheduled syncs against the real database
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Bridge configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level for the bridge's own targets
    pub log_level: LogLevel,
    /// Defaults applied to plan entries
    pub sync: SyncDefaults,
    /// Plan file overriding the built-in activity plan
    pub sync_plan_path: Option<PathBuf>,
}

impl BridgeConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `BRIDGE_DISPLAY_TIMEZONE` is not a recognised
    /// timezone
    pub fn from_env() -> AppResult<Self> {
        info!("Loading bridge configuration from environment variables");

        let display_timezone = DisplayTimezone::parse(&env_var_or(
            env_vars::DISPLAY_TIMEZONE,
            defaults::DISPLAY_TIMEZONE,
        ))?;

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_vars::LOG_LEVEL, "info")),
            sync: SyncDefaults {
                text_default: env_var_or(env_vars::TEXT_DEFAULT, defaults::TEXT_DEFAULT),
                display_timezone,
                number_precision: defaults::NUMBER_PRECISION,
                database_title: env_var_or(env_vars::DATABASE_TITLE, defaults::DATABASE_TITLE),
            },
            sync_plan_path: env::var_os(env_vars::SYNC_PLAN)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        };

        debug!("{}", config.summary());
        Ok(config)
    }

    /// Activity plan from `BRIDGE_SYNC_PLAN`, or the built-in plan
    ///
    /// # Errors
    ///
    /// Returns an error if the plan file cannot be read or does not resolve
    pub fn activity_plan(&self) -> AppResult<SyncPlan> {
        match &self.sync_plan_path {
            Some(path) => SyncPlan::from_path::<GarminActivity>(path, &self.sync),
            None => default_activity_plan(&self.sync),
        }
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Garmin Notion Bridge Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Display Timezone: {}\n\
             - Text Default: {}\n\
             - Database Title: {}\n\
             - Sync Plan: {}",
            self.environment,
            self.log_level,
            self.sync.display_timezone,
            self.sync.text_default,
            self.sync.database_title,
            self.sync_plan_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string()),
        )
    }
}

/// Environment variable or `default` when unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
