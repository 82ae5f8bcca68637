//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions the engine surfaces to its callers. Missing or
//! empty analytics input is never an error; reporting functions degrade to
//! their documented defaults instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "EMP404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A caller-supplied value was malformed.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A single-employee query named an employee the store does not know.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The unknown employee identifier.
        employee_id: String,
    },

    /// A derived attendance row already exists for this employee and date.
    #[error("Attendance already compiled for employee '{employee_id}' on {date}")]
    DuplicateAttendance {
        /// The employee whose row collided.
        employee_id: String,
        /// The date of the collision.
        date: NaiveDate,
    },

    /// The backing store could not serve the request.
    #[error("Attendance store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
