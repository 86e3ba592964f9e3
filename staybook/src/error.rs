//! Error types for the staybook library.
//!
//! Booking denials are expected business outcomes and travel as
//! [`Error::BookingDenied`]; every other variant is an infrastructure fault.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a staybook error.
///
/// # Examples
///
/// ```
/// use staybook::{Error, Result};
///
/// fn nights() -> Result<u32> {
///     Ok(5)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the staybook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The booking would violate one of the conflict rules, or an extension
    /// request does not describe a valid extension.
    #[error("{reason}")]
    BookingDenied {
        /// Why the booking was denied.
        reason: DenialReason,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A booking payload could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

/// The fixed set of reasons a booking request can be denied.
///
/// The `Display` text of each variant is the exact message returned to
/// clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialReason {
    /// The guest already holds an overlapping booking for the same unit.
    SameGuestSameUnit,
    /// The guest already holds an overlapping booking in another unit.
    GuestAlreadyBooked,
    /// Another booking already occupies the unit on overlapping dates.
    UnitOccupied,
    /// No booking matches the guest, unit and check-in date to extend.
    BookingNotFound,
    /// The requested night count does not exceed the current one.
    TooFewNights,
}

impl DenialReason {
    /// Returns the client-facing message for this reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use staybook::DenialReason;
    ///
    /// assert_eq!(
    ///     DenialReason::UnitOccupied.message(),
    ///     "For the given check-in date, the unit is already occupied"
    /// );
    /// ```
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::SameGuestSameUnit => {
                "The given guest name cannot book the same unit multiple times"
            }
            Self::GuestAlreadyBooked => {
                "The same guest cannot be in multiple units at the same time"
            }
            Self::UnitOccupied => "For the given check-in date, the unit is already occupied",
            Self::BookingNotFound => "Unable to find current booking",
            Self::TooFewNights => {
                "Number of nights to extend is fewer than current number of nights"
            }
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<DenialReason> for Error {
    fn from(reason: DenialReason) -> Self {
        Self::BookingDenied { reason }
    }
}

impl From<crate::booking::ValidationError> for Error {
    fn from(err: crate::booking::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error is a business denial rather than a fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use staybook::{DenialReason, Error};
    ///
    /// let err = Error::from(DenialReason::TooFewNights);
    /// assert!(err.is_denied());
    /// ```
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::BookingDenied { .. })
    }

    /// Returns the denial reason if this is a [`Error::BookingDenied`].
    #[must_use]
    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            Self::BookingDenied { reason } => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_displays_bare_reason() {
        let err = Error::BookingDenied {
            reason: DenialReason::SameGuestSameUnit,
        };
        assert_eq!(
            err.to_string(),
            "The given guest name cannot book the same unit multiple times"
        );
    }

    #[test]
    fn test_denial_messages_are_distinct() {
        let all = [
            DenialReason::SameGuestSameUnit,
            DenialReason::GuestAlreadyBooked,
            DenialReason::UnitOccupied,
            DenialReason::BookingNotFound,
            DenialReason::TooFewNights,
        ];
        let messages: std::collections::HashSet<_> = all.iter().map(|r| r.message()).collect();
        assert_eq!(messages.len(), all.len());
    }

    #[test]
    fn test_denial_reason_accessors() {
        let err: Error = DenialReason::BookingNotFound.into();
        assert!(err.is_denied());
        assert_eq!(err.denial_reason(), Some(DenialReason::BookingNotFound));
        assert_eq!(err.to_string(), "Unable to find current booking");
    }

    #[test]
    fn test_faults_are_not_denials() {
        let err = Error::LockTimeout { seconds: 5 };
        assert!(!err.is_denied());
        assert_eq!(err.denial_reason(), None);
        assert!(err.to_string().contains("lock timeout"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "number_of_nights".to_string(),
            message: "must be at least 1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("number_of_nights"));
    }

    #[test]
    fn test_data_directory_not_found_error() {
        let err = Error::DataDirectoryNotFound {
            path: PathBuf::from("/home/user/.staybook"),
        };
        assert!(err.to_string().contains(".staybook"));
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
