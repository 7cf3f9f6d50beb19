//! Transport layer abstraction for HTTP communication.
//!
//! The transport is a pluggable port: the default implementation uses
//! reqwest, and tests or alternative backends can substitute their own.
//! No retry, pooling tuning, or timeout policy lives at this layer; the
//! underlying client's defaults are the only bound.

use async_trait::async_trait;

use super::request::SesRequest;
use super::response::SesResponse;
use crate::error::SesResult;

/// Trait for HTTP transport implementations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Transmit a signed request and buffer the response.
    ///
    /// # Errors
    ///
    /// Returns a transport error, carrying the backend's native message,
    /// when the request cannot be completed.
    async fn send(&self, request: SesRequest) -> SesResult<SesResponse>;
}

/// Reqwest-based transport implementation.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default reqwest client.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the TLS backend cannot be initialized.
    pub fn new() -> SesResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Create a transport around an existing reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// The underlying reqwest client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: SesRequest) -> SesResult<SesResponse> {
        let (url, headers, body) = request.into_parts();
        let response = self.client.post(url).headers(headers).body(body).send().await?;
        SesResponse::from_reqwest(response).await
    }
}
