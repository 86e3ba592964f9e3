//! Failures of a CLI invocation and the exit code each one maps to.

use staybook::{DenialReason, Error as LibError};
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// The booking request was refused by a conflict rule.
    Denied(DenialReason),

    /// Invalid command-line arguments or booking payload.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Timeout waiting for database lock.
    Timeout,

    /// Data directory not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Process exit status. Success is 0.
    ///
    /// - 1: Booking denied
    /// - 2: Timeout waiting for database lock
    /// - 3: No data directory found
    /// - 4: Invalid arguments or payload
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Denied(_) => 1,
            CliError::Timeout => 2,
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(_) => 6,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Denied(reason) => write!(f, "{reason}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout => write!(f, "Timeout waiting for database lock"),
            CliError::NoDataDirectory => {
                write!(
                    f,
                    "Data directory not found (run `staybook init` or drop --disable-autoinit)"
                )
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::BookingDenied { reason } => CliError::Denied(reason),
            LibError::LockTimeout { .. } => CliError::Timeout,
            LibError::DataDirectoryNotFound { .. } => CliError::NoDataDirectory,
            LibError::Validation { field, message } => {
                CliError::InvalidArguments(format!("{field}: {message}"))
            }
            LibError::Configuration(e) => CliError::Config(e.to_string()),
            LibError::Io(e) => CliError::Io(e),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<staybook::ValidationError> for CliError {
    fn from(e: staybook::ValidationError) -> Self {
        CliError::InvalidArguments(format!("{}: {}", e.field, e.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denials_exit_one_with_bare_reason() {
        let err = CliError::from(LibError::from(DenialReason::UnitOccupied));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "For the given check-in date, the unit is already occupied"
        );
    }

    #[test]
    fn test_infrastructure_exit_codes() {
        assert_eq!(
            CliError::from(LibError::LockTimeout { seconds: 5 }).exit_code(),
            2
        );
        assert_eq!(
            CliError::from(LibError::DataDirectoryNotFound {
                path: "/nowhere".into()
            })
            .exit_code(),
            3
        );
        assert_eq!(
            CliError::from(LibError::Validation {
                field: "number_of_nights".into(),
                message: "must be at least 1".into(),
            })
            .exit_code(),
            4
        );
        assert_eq!(
            CliError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk")).exit_code(),
            5
        );
        assert_eq!(
            CliError::from(LibError::NotFound {
                resource: "booking".into()
            })
            .exit_code(),
            6
        );
        assert_eq!(CliError::Config("bad".into()).exit_code(), 7);
    }
}
