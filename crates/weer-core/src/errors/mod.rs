// ABOUTME: Configuration error types for scoring threshold validation
// ABOUTME: Defines error variants for invalid ranges, bad overrides, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

//! Configuration error types for scoring threshold validation.

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Tiers of a ladder are not ordered by severity
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Numeric value outside the valid range for the parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse a configuration value or document
    #[error("Parse error: {0}")]
    Parse(String),
}
