// ABOUTME: Unified error types for the Ridecast application edges
// ABOUTME: Defines ErrorCode, AppError, and conversions from IO and JSON failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The scoring engine itself is total and never returns an error. Failures only
//! happen at the edges: reading and normalizing forecast snapshots, loading
//! configuration, and initializing logging. Those edges all report through
//! [`AppError`] so the CLI can map them to a single exit code table.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A required field was not supplied
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Input could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric value outside its domain
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Requested file or resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration value failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Filesystem or stream failure
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Output could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit code used by the CLI for this error class
    ///
    /// Follows the BSD `sysexits.h` conventions.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            // EX_DATAERR
            Self::MissingRequiredField | Self::InvalidFormat | Self::ValueOutOfRange => 65,
            // EX_NOINPUT
            Self::ResourceNotFound => 66,
            // EX_CONFIG
            Self::ConfigInvalid => 78,
            // EX_IOERR
            Self::StorageError => 74,
            // EX_SOFTWARE
            Self::SerializationError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
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
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Required field missing
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("missing required field `{field}`"),
        )
    }

    /// Value outside its valid domain
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Exit code for the CLI
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        let code = if error.is_io() {
            ErrorCode::StorageError
        } else if error.is_syntax() || error.is_data() || error.is_eof() {
            ErrorCode::InvalidFormat
        } else {
            ErrorCode::SerializationError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_codes() {
        assert_eq!(ErrorCode::InvalidFormat.exit_code(), 65);
        assert_eq!(ErrorCode::ResourceNotFound.exit_code(), 66);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::SerializationError.exit_code(), 70);
    }

    #[test]
    fn test_io_not_found_maps_to_resource_not_found() {
        let error = AppError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_json_syntax_error_maps_to_invalid_format() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = AppError::from(parse);
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let error = AppError::missing_field("hourly[3].precipitation_chance");
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.exit_code(), 65);
        assert!(error.message.contains("hourly[3].precipitation_chance"));
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::value_out_of_range("humidity 140 exceeds 100");
        assert_eq!(
            error.to_string(),
            "The provided value is outside the acceptable range: humidity 140 exceeds 100"
        );
    }
}
