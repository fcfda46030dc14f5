#![deny(missing_docs)]
#![deny(unused_doc_comments)]
#![deny(dead_code)]

//! This crate contains the booking core of the "Турбаза Сосны" resort site: the
//! booking form flow, the admin booking overview with filters and summary
//! counts, and a typed client for the remote booking API which owns all
//! persisted bookings. The remote API is only ever consumed; identifiers and
//! creation timestamps are assigned there and read back here.

use api::ApiError;
use config::ConfigError;
use form::ValidationError;
use std::fmt;

/// Admin overview over the booking collection: filters and summary counts.
pub mod admin;
/// The remote booking API seam and its reqwest implementation.
pub mod api;
/// The booking entity and the create-booking payload.
pub mod booking;
/// The static room catalog and marketing content tables.
pub mod catalog;
/// Contains endpoint configuration details.
pub mod config;
/// Selection and table rendering for admin exports.
pub mod export;
/// The booking form flow: field state, validation and submission.
pub mod form;
/// Shared date rendering helpers.
pub mod format;
/// Admin notifications for freshly created bookings.
pub mod notify;

/// Global result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;

/// An error originating in the booking core
#[derive(Debug)]
pub struct BookingError {
    kind: BookingErrorKind,
    internal: InternalError,
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "error during {}: {}", self.kind, self.internal)
    }
}

impl std::error::Error for BookingError {
    fn cause(&self) -> Option<&dyn std::error::Error> {
        match self.internal {
            InternalError::Validation(ref e) => Some(e),
            InternalError::Api(ref e) => Some(e),
            InternalError::Config(ref e) => Some(e),
        }
    }
}

impl BookingError {
    /// The message to show to the user for this error. Validation errors carry
    /// their own message, API errors defer to the server-provided message when
    /// one is present.
    pub fn user_message(&self) -> String {
        match self.internal {
            InternalError::Validation(ref e) => e.to_string(),
            InternalError::Api(ref e) => e.user_message(),
            InternalError::Config(ref e) => e.to_string(),
        }
    }

    /// Return a reference to the embedded [`crate::api::ApiError`], if this
    /// error is caused by the remote API, or nothing otherwise.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.internal {
            InternalError::Api(ref e) => Some(e),
            _ => None,
        }
    }

    /// Whether this error was raised by local validation, before any request
    /// was made.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, BookingErrorKind::Validation)
    }
}

/// Wrapper error for the BookingError
#[derive(Debug)]
enum InternalError {
    Validation(ValidationError),
    Api(ApiError),
    Config(ConfigError),
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InternalError::Validation(ref e) => e as &dyn std::error::Error,
                InternalError::Api(ref e) => e as &dyn std::error::Error,
                InternalError::Config(ref e) => e as &dyn std::error::Error,
            }
        )
    }
}

/// Information about where in the booking flow the error occurred.
#[derive(Debug)]
pub enum BookingErrorKind {
    /// A required field is missing; detected locally, no request was made.
    Validation,
    /// A request to the remote booking API failed.
    Api,
    /// An error in the configuration.
    Config,
}

impl fmt::Display for BookingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BookingErrorKind::Validation => "input validation",
                BookingErrorKind::Api => "a remote API call",
                BookingErrorKind::Config => "configuration",
            }
        )
    }
}

impl From<ValidationError> for BookingError {
    fn from(e: ValidationError) -> Self {
        BookingError {
            kind: BookingErrorKind::Validation,
            internal: InternalError::Validation(e),
        }
    }
}

impl From<ApiError> for BookingError {
    fn from(e: ApiError) -> Self {
        BookingError {
            kind: BookingErrorKind::Api,
            internal: InternalError::Api(e),
        }
    }
}

impl From<ConfigError> for BookingError {
    fn from(e: ConfigError) -> Self {
        BookingError {
            kind: BookingErrorKind::Config,
            internal: InternalError::Config(e),
        }
    }
}
