//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the ledger can report.

use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// Validation and lookup failures are all reported as
/// [`PayrollError::InvalidEmployee`]; the remaining variants cover roster
/// loading and writing listings to an output sink.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::PayrollError;
///
/// let error = PayrollError::invalid_employee("Duplicate ID");
/// assert_eq!(error.to_string(), "Duplicate ID");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An employee record failed validation, or a lookup by id failed.
    #[error("{message}")]
    InvalidEmployee {
        /// A human-readable description of the failure.
        message: String,
    },

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster '{path}': {message}")]
    ConfigParseError {
        /// The path (or origin label) of the roster that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Writing an employee listing to the output sink failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl PayrollError {
    /// Builds an [`PayrollError::InvalidEmployee`] with the given message.
    pub fn invalid_employee(message: impl Into<String>) -> Self {
        Self::InvalidEmployee {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
