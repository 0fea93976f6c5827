// ABOUTME: Unified error handling for the scoring library edges and the CLI
// ABOUTME: Defines error codes, the AppError type, process exit codes and JSON error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

//! # Unified Error Handling System
//!
//! Scoring itself cannot fail. Errors only arise at the edges: loading
//! configuration, reading weather input and label tables, and writing
//! output. All of them are reported as [`AppError`] with a stable
//! [`ErrorCode`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;
use weer_core::{ConfigError, ParseActivityKindError};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input is syntactically valid but semantically wrong
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Activity tag not in the catalog
    #[serde(rename = "UNKNOWN_ACTIVITY")]
    UnknownActivity = 3004,
    /// Label table is not a flat map of strings
    #[serde(rename = "INVALID_LABELS")]
    InvalidLabels = 3005,

    // Resources (4000-4999)
    /// Input file missing or unreadable
    #[serde(rename = "INPUT_UNREADABLE")]
    InputUnreadable = 4000,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration loaded but failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Output could not be serialized or written
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status for this error, following `sysexits.h`
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            // EX_DATAERR
            Self::InvalidInput | Self::InvalidFormat | Self::InvalidLabels => 65,
            // EX_USAGE
            Self::UnknownActivity => 64,
            // EX_NOINPUT
            Self::InputUnreadable => 66,
            // EX_CONFIG
            Self::ConfigError | Self::ConfigInvalid => 78,
            // EX_IOERR
            Self::SerializationError => 74,
            // EX_SOFTWARE
            Self::InternalError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::UnknownActivity => "The activity is not in the catalog",
            Self::InvalidLabels => "The label table is invalid",
            Self::InputUnreadable => "The input could not be read",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional key-value context
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// JSON error report written by the CLI
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    #[serde(skip_serializing_if = "Value::is_null", default)]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                ErrorCode::ConfigInvalid
            }
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ParseActivityKindError> for AppError {
    fn from(error: ParseActivityKindError) -> Self {
        Self::new(ErrorCode::UnknownActivity, error.to_string())
            .with_details(serde_json::json!({ "activity": &error.0 }))
            .with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        let code = if error.is_io() {
            ErrorCode::SerializationError
        } else {
            ErrorCode::InvalidFormat
        };
        Self::new(code, error.to_string())
            .with_details(serde_json::json!({
                "line": error.line(),
                "column": error.column(),
            }))
            .with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::InputUnreadable, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_codes() {
        assert_eq!(ErrorCode::InvalidFormat.exit_code(), 65);
        assert_eq!(ErrorCode::InputUnreadable.exit_code(), 66);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::InternalError.exit_code(), 70);
    }

    #[test]
    fn test_config_error_conversion() {
        let error = AppError::from(ConfigError::InvalidRange("cycling.wind".into()));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.to_string().contains("cycling.wind"));
        assert!(error.source.is_some());
    }

    #[test]
    fn test_json_error_conversion_carries_position() {
        let parse_error = serde_json::from_str::<Value>("{\"a\":").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert_eq!(error.details["line"], 1);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::from("gym".parse::<weer_core::ActivityKind>().unwrap_err());
        let json = serde_json::to_string(&ErrorResponse::from(error)).unwrap();
        assert!(json.contains("UNKNOWN_ACTIVITY"));
        assert!(json.contains("gym"));
    }
}
