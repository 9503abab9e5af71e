//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the host application.
///
/// # Example
///
/// ```
/// use nomina_engine::error::PayrollError;
///
/// let error = PayrollError::UnknownShiftType {
///     code: "G_NOCHE".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown shift type: G_NOCHE");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A shift event references a type that is not in the shift-model registry.
    #[error("Unknown shift type: {code}")]
    UnknownShiftType {
        /// The shift-type code that was not found.
        code: String,
    },

    /// A date or year-month string was malformed, or a calendar day was out
    /// of range for its month.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The offending input.
        value: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A persisted session backup could not be read at all.
    ///
    /// This is only raised when the blob is not a JSON object. Individual
    /// missing or ill-typed keys are recovered per key instead.
    #[error("Malformed backup: {message}")]
    MalformedBackup {
        /// A description of the problem with the backup blob.
        message: String,
    },
}

/// A type alias for Results that return [`PayrollError`].
pub type PayrollResult<T> = Result<T, PayrollError>;
