//! Error types for the SES send client.
//!
//! The client delivers every post-construction failure through a single
//! channel: the `Result` of the send operation. The `Display` output of each
//! variant is part of the observable contract, so contract-bearing variants
//! are transparent over their module-level error types.
//!
//! # Error Hierarchy
//!
//! - [`SesError::Configuration`]: invalid client configuration (missing region)
//! - [`SesError::Validation`]: malformed send request
//! - [`SesError::Signing`]: the request could not be signed
//! - [`SesError::Transport`]: network/connection failure, native message
//! - [`SesError::Service`]: SES answered with HTTP status >= 400

use thiserror::Error;

use crate::config::ConfigError;
use crate::signing::SigningError;
use crate::validate::ValidationError;

/// Result type alias for SES operations.
pub type SesResult<T> = std::result::Result<T, SesError>;

/// Top-level error type for the SES send client.
#[derive(Debug, Error)]
pub enum SesError {
    /// The client configuration is invalid.
    ///
    /// Raised synchronously from [`crate::SesClient::new`], never through
    /// the send result channel.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The send request failed structural validation.
    ///
    /// The message is the exact dotted field path contract, e.g.
    /// `The "Message.Subject.Data" property is required`.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be signed (e.g. missing credentials).
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// The HTTP transport failed before a response was received.
    ///
    /// Carries the transport's native message unmodified.
    #[error("{message}")]
    Transport {
        /// The transport's own error message.
        message: String,
        /// Underlying transport error, when available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// SES answered with an HTTP error status.
    ///
    /// The original response body is discarded in favor of this
    /// synthesized error.
    #[error("Amazon SES service returned status code: {status_code}")]
    Service {
        /// The HTTP status code returned by the service.
        status_code: u16,
    },
}

impl From<reqwest::Error> for SesError {
    fn from(err: reqwest::Error) -> Self {
        SesError::Transport {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_message_carries_status_code() {
        let error = SesError::Service { status_code: 400 };
        assert_eq!(
            error.to_string(),
            "Amazon SES service returned status code: 400"
        );

        let error = SesError::Service { status_code: 503 };
        assert_eq!(
            error.to_string(),
            "Amazon SES service returned status code: 503"
        );
    }

    #[test]
    fn transport_error_surfaces_native_message() {
        let error = SesError::Transport {
            message: "Something bad happened".to_string(),
            source: None,
        };
        assert_eq!(error.to_string(), "Something bad happened");
    }

    #[test]
    fn validation_error_display_is_unchanged_by_wrapping() {
        let error: SesError = ValidationError::MissingProperty("Source").into();
        assert_eq!(error.to_string(), "The \"Source\" property is required");
    }

    #[test]
    fn configuration_error_display_is_unchanged_by_wrapping() {
        let error: SesError = ConfigError::MissingRegion.into();
        assert_eq!(
            error.to_string(),
            "Region is a required option for SES clients"
        );
    }
}
