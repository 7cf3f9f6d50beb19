//! SES client: the bound send operation.
//!
//! [`SesClient::new`] validates the configuration once and produces a value
//! exposing the send operation. Everything after construction flows through
//! one pipeline (validate, encode, sign, transmit, interpret) and every
//! failure surfaces through the send result, never as a panic and never
//! before the validator has run.
//!
//! # Thread Safety
//!
//! `SesClient` is `Send + Sync` and cheap to clone; configuration and
//! transport are shared behind `Arc` and never mutated after construction,
//! so concurrent in-flight sends proceed fully independently.

use std::sync::Arc;

use chrono::Utc;

use crate::config::SesConfig;
use crate::encode::encode_body;
use crate::error::{SesError, SesResult};
use crate::http::{ReqwestTransport, SesRequest, Transport};
use crate::logger::LogHandle;
use crate::signing::SigningError;
use crate::types::{SendEmailRequest, SendEmailResponse};

/// Client for the classic SES `SendEmail` operation.
///
/// # Examples
///
/// ```no_run
/// use ses_send::{EmailBuilder, SesClient, SesConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SesClient::new(
///     SesConfig::builder()
///         .region("us-west-2")
///         .credentials("AKID", "SECRET")
///         .build(),
/// )?;
///
/// let request = EmailBuilder::new()
///     .from("sender@example.com")
///     .to("recipient@example.com")
///     .subject("Hello")
///     .text("Email body")
///     .build();
///
/// let response = client.send_email(request).await?;
/// println!("sent: {}", response.status_code);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SesClient {
    config: Arc<SesConfig>,
    transport: Arc<dyn Transport>,
    logger: LogHandle,
}

impl SesClient {
    /// Create a client bound to the given configuration.
    ///
    /// Does not contact the network.
    ///
    /// # Errors
    ///
    /// Returns `Region is a required option for SES clients` when the
    /// region is missing or empty, or a transport error when the HTTP
    /// backend cannot be initialized.
    pub fn new(config: SesConfig) -> SesResult<Self> {
        config.validate()?;
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client with a custom transport implementation.
    ///
    /// The configuration must already be valid; use [`SesClient::new`] for
    /// the validating path.
    pub fn with_transport(config: SesConfig, transport: Arc<dyn Transport>) -> Self {
        let logger = LogHandle::new(config.logger.clone());
        Self {
            config: Arc::new(config),
            transport,
            logger,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &SesConfig {
        &self.config
    }

    /// Send an email, delivering the outcome through the returned future.
    ///
    /// The request is validated and encoded before any transmission; a
    /// request that fails validation is never sent.
    ///
    /// # Errors
    ///
    /// Every failure mode arrives through the result: validation, signing,
    /// transport (native message), and HTTP status >= 400 (synthesized
    /// `Amazon SES service returned status code: <code>`).
    pub async fn send_email(&self, request: SendEmailRequest) -> SesResult<SendEmailResponse> {
        self.send_inner(request).await
    }

    /// Send an email, delivering the outcome to `callback`.
    ///
    /// A thin adapter over the same pipeline as [`SesClient::send_email`];
    /// the callback receives the single terminal result.
    pub async fn send_email_with<F>(&self, request: SendEmailRequest, callback: F)
    where
        F: FnOnce(SesResult<SendEmailResponse>),
    {
        callback(self.send_inner(request).await);
    }

    async fn send_inner(&self, request: SendEmailRequest) -> SesResult<SendEmailResponse> {
        self.logger.info("SES: starting send");

        self.logger.info("SES: validating params");
        let body = match encode_body(&request) {
            Ok(body) => body,
            Err(e) => {
                self.logger.error(&format!("SES: {e}"));
                return Err(e.into());
            }
        };
        self.logger.info("SES: params validated");
        self.logger.debug(&format!("SES: body encoded: {body}"));

        let signed = match self.build_signed_request(body) {
            Ok(signed) => signed,
            Err(e) => {
                self.logger.error(&format!("SES: {e}"));
                return Err(e);
            }
        };

        let response = match self.transport.send(signed).await {
            Ok(response) => response,
            Err(e) => {
                self.logger.error(&format!("SES: {e}"));
                return Err(e);
            }
        };

        let status_code = response.status().as_u16();
        if status_code >= 400 {
            self.logger.error(&format!(
                "SES: {} {}",
                status_code,
                String::from_utf8_lossy(response.body())
            ));
            return Err(SesError::Service { status_code });
        }

        let result = response.into_send_response();
        self.logger.info(&format!(
            "SES: finished {} {}",
            result.status_code, result.status_message
        ));
        self.logger
            .debug(&format!("SES: data {}", String::from_utf8_lossy(&result.data)));
        Ok(result)
    }

    fn build_signed_request(&self, body: String) -> SesResult<SesRequest> {
        let credentials = self.config.credentials.as_ref().ok_or_else(|| {
            SigningError::MissingCredentials {
                message: "AWS credentials are required to sign requests".to_string(),
            }
        })?;

        let mut signed = SesRequest::send_email(&self.config.ses_endpoint(), body)?;
        signed.sign(&self.config.region, credentials, &Utc::now())?;
        Ok(signed)
    }
}

impl std::fmt::Debug for SesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SesClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
