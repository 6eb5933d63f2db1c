//! # Error Types
//!
//! Structured error types for gear_core. Every failure the engine can
//! produce is a distinct variant with enough context for a caller to map
//! it to a user-facing rejection without string matching.
//!
//! ## Example
//!
//! ```rust
//! use gear_core::errors::{GearError, GearResult};
//!
//! fn validate_hours(service_hours: f64) -> GearResult<()> {
//!     if service_hours <= 0.0 {
//!         return Err(GearError::invalid_input(
//!             "service_hours",
//!             service_hours.to_string(),
//!             "Operating hours must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for gear_core operations
pub type GearResult<T> = Result<T, GearError>;

/// Structured error type for the contact-strength engine.
///
/// The first six variants are the deterministic domain failures of the
/// computation itself; the rest belong to the registry persistence layer.
/// Domain failures are detected eagerly and never retried.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GearError {
    /// A lookup key is absent from a reference table
    #[error("Not found in {table}: {key}")]
    NotFound { table: String, key: String },

    /// A lookup succeeded but a required field is absent for that key
    #[error("Missing value in {table} for {key}: {field}")]
    MissingValue {
        table: String,
        key: String,
        field: String,
    },

    /// Detail type outside the single supported straight-tooth category
    #[error("Unsupported detail type: {detail_type}")]
    UnsupportedDetailType { detail_type: String },

    /// A table cell exists conceptually but has no tabulated value
    #[error("No tabulated value in {table}: {reason}")]
    InvalidSelection { table: String, reason: String },

    /// Declared material combination contradicts the detail materials
    #[error("Inconsistent input for '{field}': declared {declared}, details give {actual}")]
    InconsistentInput {
        field: String,
        declared: String,
        actual: String,
    },

    /// A selection the method defines but the engine does not implement
    #[error("Not implemented: {feature}")]
    Unimplemented { feature: String },

    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Registry file is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Registry schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl GearError {
    /// Create a NotFound error
    pub fn not_found(table: impl Into<String>, key: impl Into<String>) -> Self {
        GearError::NotFound {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a MissingValue error
    pub fn missing_value(
        table: impl Into<String>,
        key: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        GearError::MissingValue {
            table: table.into(),
            key: key.into(),
            field: field.into(),
        }
    }

    /// Create an UnsupportedDetailType error
    pub fn unsupported_detail_type(detail_type: impl Into<String>) -> Self {
        GearError::UnsupportedDetailType {
            detail_type: detail_type.into(),
        }
    }

    /// Create an InvalidSelection error
    pub fn invalid_selection(table: impl Into<String>, reason: impl Into<String>) -> Self {
        GearError::InvalidSelection {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Create an InconsistentInput error
    pub fn inconsistent_input(
        field: impl Into<String>,
        declared: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        GearError::InconsistentInput {
            field: field.into(),
            declared: declared.into(),
            actual: actual.into(),
        }
    }

    /// Create an Unimplemented error
    pub fn unimplemented(feature: impl Into<String>) -> Self {
        GearError::Unimplemented {
            feature: feature.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        GearError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        GearError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        GearError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GearError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GearError::NotFound { .. } => "NOT_FOUND",
            GearError::MissingValue { .. } => "MISSING_VALUE",
            GearError::UnsupportedDetailType { .. } => "UNSUPPORTED_DETAIL_TYPE",
            GearError::InvalidSelection { .. } => "INVALID_SELECTION",
            GearError::InconsistentInput { .. } => "INCONSISTENT_INPUT",
            GearError::Unimplemented { .. } => "UNIMPLEMENTED",
            GearError::InvalidInput { .. } => "INVALID_INPUT",
            GearError::FileError { .. } => "FILE_ERROR",
            GearError::FileLocked { .. } => "FILE_LOCKED",
            GearError::SerializationError { .. } => "SERIALIZATION_ERROR",
            GearError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
