// ABOUTME: Error types for unit symbol parsing
// ABOUTME: Raised only when configuration names a unit outside the known families
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Error raised when a unit symbol cannot be resolved.
///
/// Conversions between known units never fail; only turning user supplied
/// text into a unit does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Symbol is not a known distance unit
    #[error("unknown distance unit '{symbol}', expected one of: {expected}")]
    UnknownDistanceUnit {
        /// Symbol that failed to parse
        symbol: String,
        /// Comma separated list of accepted symbols
        expected: String,
    },

    /// Symbol is not a known time unit
    #[error("unknown time unit '{symbol}', expected one of: {expected}")]
    UnknownTimeUnit {
        /// Symbol that failed to parse
        symbol: String,
        /// Comma separated list of accepted symbols
        expected: String,
    },

    /// Compound unit string is not of the form `numerator/denominator`
    #[error("malformed compound unit '{0}', expected '<numerator>/<denominator>'")]
    MalformedCompoundUnit(String),
}
