//! Error types for the firehydrant-provider workspace

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for provider operations
///
/// Validation and configuration failures are raised before any request is
/// issued. `NotFound` is a signal rather than a failure: read and delete
/// translate it into "the resource is gone" instead of surfacing it.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Configuration error (missing API key, malformed base URL)
    #[error("Configuration error: {message}")]
    #[diagnostic(code(firehydrant::config::invalid))]
    Configuration {
        /// The error message describing the configuration issue
        message: String,
    },

    /// Pre-flight validation error, raised before any network call
    #[error("Validation error: {message}")]
    #[diagnostic(code(firehydrant::validation))]
    Validation {
        /// The error message naming the offending field or value
        message: String,
    },

    /// The API answered 404 for the addressed resource
    #[error("{resource} {id} was not found")]
    #[diagnostic(code(firehydrant::api::not_found))]
    NotFound {
        /// Kind of resource that was addressed
        resource: String,
        /// Identifier the API did not recognize
        id: String,
    },

    /// Any other API failure; the response body is carried verbatim
    #[error("API error during {operation}: {message}")]
    #[diagnostic(code(firehydrant::api::request_failed))]
    Api {
        /// The operation that was being performed
        operation: String,
        /// HTTP status code, when the failure happened past the transport
        status: Option<u16>,
        /// The originating error message
        message: String,
    },
}

impl Error {
    /// Create a configuration error with a message
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a pre-flight validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found signal for a resource
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create an API error with the operation attached
    pub fn api(
        operation: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::Api {
            operation: operation.into(),
            status,
            message: message.into(),
        }
    }

    /// Whether this error is the 404 "resource is gone" signal
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = Error::validation("firehydrant rotation strategy requires a handoff_time");
        assert_eq!(
            err.to_string(),
            "Validation error: firehydrant rotation strategy requires a handoff_time"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_a_signal() {
        let err = Error::not_found("rotation", "rot-1");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "rotation rot-1 was not found");
    }

    #[test]
    fn api_error_carries_operation_and_status() {
        let err = Error::api("update rotation rot-1", Some(500), "boom");
        assert_eq!(err.to_string(), "API error during update rotation rot-1: boom");
        match err {
            Error::Api { status, .. } => assert_eq!(status, Some(500)),
            other => unreachable!("unexpected variant: {other}"),
        }
    }
}
