// ABOUTME: System-wide constants and configuration defaults for the activity bridge
// ABOUTME: Environment variable names, default values and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Constants are grouped by domain. Environment variable names live in
//! [`env_vars`], their fallbacks in [`defaults`].

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const GARMIN_NOTION_BRIDGE: &str = "garmin-notion-bridge";
}

/// Names of the environment variables read by the configuration layer
pub mod env_vars {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "BRIDGE_ENVIRONMENT";
    /// Log level for the bridge's own targets
    pub const LOG_LEVEL: &str = "BRIDGE_LOG_LEVEL";
    /// Timezone used when rendering dates
    pub const DISPLAY_TIMEZONE: &str = "BRIDGE_DISPLAY_TIMEZONE";
    /// Replacement for empty text values
    pub const TEXT_DEFAULT: &str = "BRIDGE_TEXT_DEFAULT";
    /// Expected title of the destination database
    pub const DATABASE_TITLE: &str = "BRIDGE_DATABASE_TITLE";
    /// Path of a JSON or YAML sync plan
    pub const SYNC_PLAN: &str = "BRIDGE_SYNC_PLAN";
}

/// Fallback values for configuration
pub mod defaults {
    /// Dates are rendered in UTC unless configured otherwise
    pub const DISPLAY_TIMEZONE: &str = "UTC";
    /// Placeholder written for empty text values
    pub const TEXT_DEFAULT: &str = "Unknown";
    /// Title of the activity database
    pub const DATABASE_TITLE: &str = "Activities";
    /// Decimal places used by number fields when none are configured
    pub const NUMBER_PRECISION: u32 = 2;
}

/// Output formats for Notion values
pub mod formats {
    /// Minute-precision date layout written to every text or date column
    pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
    /// Rendering of `true` in text columns
    pub const YES: &str = "Yes";
    /// Rendering of `false` in text columns
    pub const NO: &str = "No";
}
