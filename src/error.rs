//! Error types for the HR dashboard.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The statistics engine itself never fails; these errors come from loading
//! configuration, validating employee payloads, and talking to the store.

use thiserror::Error;

/// The main error type for the HR dashboard.
///
/// Not-found, conflict, validation, and storage failures are kept apart so
/// the HTTP layer can map each one to its own status code.
///
/// # Example
///
/// ```
/// use hr_dashboard::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "EMP-042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP-042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration or seed file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or seed file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee exists with the requested id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// An employee with this id already exists.
    #[error("Employee already exists: {id}")]
    DuplicateEmployee {
        /// The conflicting id.
        id: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The backing store failed to complete an operation.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidEmployee`].
    pub fn invalid_employee(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEmployee {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "EMP-007".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: EMP-007");
    }

    #[test]
    fn test_duplicate_employee_displays_id() {
        let error = EngineError::DuplicateEmployee {
            id: "EMP-001".to_string(),
        };
        assert_eq!(error.to_string(), "Employee already exists: EMP-001");
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::invalid_employee("birthDate", "cannot be in the future");
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'birthDate': cannot be in the future"
        );
    }

    #[test]
    fn test_storage_error_displays_message() {
        let error = EngineError::StorageError {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(error.to_string(), "Storage error: lock poisoned");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                id: "EMP-404".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
