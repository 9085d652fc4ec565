//! Error types for the CPC Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading pay tables and
//! calculating salaries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validation failure attached to a single input field.
///
/// The `field` is a path into the salary input, such as `basic_pay` or
/// `months[1].days_worked`.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::error::FieldError;
///
/// let error = FieldError::new("da_percentage", "DA percentage cannot be negative");
/// assert_eq!(error.to_string(), "da_percentage: DA percentage cannot be negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path of the offending field.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The main error type for the CPC Salary Engine.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::error::EngineError;
///
/// let error = EngineError::PayLevelNotFound {
///     level: "19".to_string(),
/// };
/// assert_eq!(error.to_string(), "Pay level not found: 19");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or is inconsistent.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Pay level is not part of the pay matrix.
    #[error("Pay level not found: {level}")]
    PayLevelNotFound {
        /// The pay level that was requested.
        level: String,
    },

    /// The salary input failed validation; no calculation was attempted.
    #[error("Invalid salary input: {}", format_field_errors(.errors))]
    InvalidInput {
        /// Every field that failed validation, in input order.
        errors: Vec<FieldError>,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
