//! Configuration for the SES send client.
//!
//! The configuration is assembled once with [`SesConfigBuilder`], handed to
//! [`crate::SesClient::new`], and immutable from then on. Concurrent sends
//! share it read-only behind an `Arc`.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::credentials::Credentials;
use crate::logger::Logger;

/// Configuration errors raised at client construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No region was supplied, or it was empty.
    #[error("Region is a required option for SES clients")]
    MissingRegion,
}

/// Configuration for the SES send client.
#[derive(Clone)]
pub struct SesConfig {
    /// AWS region (e.g., "us-east-1"). Required, non-empty.
    pub region: String,

    /// Custom endpoint URL, overriding the regional SES endpoint.
    ///
    /// Useful for LocalStack or test servers.
    pub endpoint: Option<String>,

    /// Credentials used to sign requests.
    ///
    /// Sends fail at the signing step when absent.
    pub credentials: Option<Credentials>,

    /// Optional logger capability.
    pub logger: Option<Arc<dyn Logger>>,
}

impl SesConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use ses_send::SesConfig;
    ///
    /// let config = SesConfig::builder()
    ///     .region("us-west-2")
    ///     .credentials("AKID", "SECRET")
    ///     .build();
    /// ```
    pub fn builder() -> SesConfigBuilder {
        SesConfigBuilder::default()
    }

    /// The SES endpoint URL for this configuration.
    ///
    /// Returns the custom endpoint if configured, otherwise the standard
    /// regional endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use ses_send::SesConfig;
    ///
    /// let config = SesConfig::builder().region("us-west-2").build();
    /// assert_eq!(config.ses_endpoint(), "https://email.us-west-2.amazonaws.com");
    /// ```
    pub fn ses_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://email.{}.amazonaws.com", self.region))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::MissingRegion);
        }
        Ok(())
    }
}

impl fmt::Debug for SesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SesConfig")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .field("has_logger", &self.logger.is_some())
            .finish()
    }
}

/// Builder for [`SesConfig`].
///
/// Building never fails; the region requirement is enforced by
/// [`crate::SesClient::new`], which is the single place configuration
/// errors are raised.
#[derive(Default)]
pub struct SesConfigBuilder {
    region: Option<String>,
    endpoint: Option<String>,
    credentials: Option<Credentials>,
    logger: Option<Arc<dyn Logger>>,
}

impl SesConfigBuilder {
    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a custom endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set static credentials from an access key pair (convenience).
    pub fn credentials(self, access_key: &str, secret_key: &str) -> Self {
        self.credentials_value(Credentials::new(access_key, secret_key))
    }

    /// Set the credentials value directly.
    pub fn credentials_value(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Attach a logger capability.
    pub fn logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Attach a shared logger capability.
    pub fn logger_arc(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Assemble the configuration.
    pub fn build(self) -> SesConfig {
        SesConfig {
            region: self.region.unwrap_or_default(),
            endpoint: self.endpoint,
            credentials: self.credentials,
            logger: self.logger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_defaults_to_regional_url() {
        let config = SesConfig::builder().region("eu-west-1").build();
        assert_eq!(config.ses_endpoint(), "https://email.eu-west-1.amazonaws.com");
    }

    #[test]
    fn endpoint_override_wins() {
        let config = SesConfig::builder()
            .region("us-east-1")
            .endpoint("http://localhost:4566")
            .build();
        assert_eq!(config.ses_endpoint(), "http://localhost:4566");
    }

    #[test]
    fn validate_rejects_missing_region() {
        let config = SesConfig::builder().build();
        let error = config.validate().unwrap_err();
        assert_eq!(error.to_string(), "Region is a required option for SES clients");
    }

    #[test]
    fn validate_rejects_blank_region() {
        let config = SesConfig::builder().region("   ").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_region() {
        let config = SesConfig::builder().region("us-west-2").build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_shows_shape_not_secrets() {
        let config = SesConfig::builder()
            .region("us-west-2")
            .credentials("AKID", "SECRET")
            .build();
        let debug = format!("{config:?}");

        assert!(debug.contains("us-west-2"));
        assert!(!debug.contains("SECRET"));
    }
}
