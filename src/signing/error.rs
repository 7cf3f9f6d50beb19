//! Signing error types.

use thiserror::Error;

/// Errors that can occur during AWS Signature V4 signing.
#[derive(Debug, Error)]
pub enum SigningError {
    /// No credentials were available to sign the request.
    #[error("Missing credentials: {message}")]
    MissingCredentials {
        /// Which part of the credentials is missing.
        message: String,
    },

    /// The signing operation failed.
    #[error("Signing failed: {message}")]
    SigningFailed {
        /// Details about the signing failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_display() {
        let error = SigningError::MissingCredentials {
            message: "AWS credentials are required to sign requests".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing credentials: AWS credentials are required to sign requests"
        );
    }

    #[test]
    fn signing_failed_display() {
        let error = SigningError::SigningFailed {
            message: "Unable to materialize the authorization header".to_string(),
        };
        assert!(error.to_string().starts_with("Signing failed: "));
    }
}
