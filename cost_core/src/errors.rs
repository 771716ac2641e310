//! # Error Types
//!
//! Structured error types for cost_core. These errors carry enough context
//! for a caller to re-prompt the user for exactly the field that was wrong,
//! rather than surfacing a bare string.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::errors::{CostError, CostResult};
//!
//! fn validate_cost(cost_per_kg: f64) -> CostResult<()> {
//!     if cost_per_kg < 0.0 {
//!         return Err(CostError::invalid_cost(
//!             cost_per_kg.to_string(),
//!             "Cost per kg cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cost_core operations
pub type CostResult<T> = Result<T, CostError>;

/// Structured error type for calculation and ledger operations.
///
/// Each variant provides specific context about what went wrong. Dimension
/// errors are recoverable: the caller re-prompts for the named field.
/// `UnknownMemberType` is not — the calculation attempt is abandoned.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CostError {
    /// A dimension value is invalid (zero or negative)
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// A dimension required by the member type is absent
    #[error("Missing required dimension: {field}")]
    MissingDimension { field: String },

    /// The member type name does not match any supported variant
    #[error("Unknown member type: {name}")]
    UnknownMemberType { name: String },

    /// The supplied cost per kg is invalid (negative or non-finite)
    #[error("Invalid cost per kg: {value} - {reason}")]
    InvalidCost { value: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CostError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CostError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingDimension error
    pub fn missing_dimension(field: impl Into<String>) -> Self {
        CostError::MissingDimension {
            field: field.into(),
        }
    }

    /// Create an UnknownMemberType error
    pub fn unknown_member_type(name: impl Into<String>) -> Self {
        CostError::UnknownMemberType { name: name.into() }
    }

    /// Create an InvalidCost error
    pub fn invalid_cost(value: impl Into<String>, reason: impl Into<String>) -> Self {
        CostError::InvalidCost {
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
        CostError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (caller can re-prompt and retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CostError::InvalidDimension { .. }
                | CostError::MissingDimension { .. }
                | CostError::InvalidCost { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CostError::InvalidDimension { .. } => "INVALID_DIMENSION",
            CostError::MissingDimension { .. } => "MISSING_DIMENSION",
            CostError::UnknownMemberType { .. } => "UNKNOWN_MEMBER_TYPE",
            CostError::InvalidCost { .. } => "INVALID_COST",
            CostError::FileError { .. } => "FILE_ERROR",
            CostError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
