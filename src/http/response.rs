//! HTTP response handling for the send pipeline.

use http::StatusCode;

use crate::error::SesResult;
use crate::types::SendEmailResponse;

/// A buffered response from the SES endpoint.
///
/// The body is kept as raw bytes; classic SES responses are handed to the
/// caller unparsed.
#[derive(Debug, Clone)]
pub struct SesResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl SesResponse {
    /// Create a response from a status and body.
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Buffer a reqwest response.
    ///
    /// # Errors
    ///
    /// Returns a transport error when reading the body fails mid-stream.
    pub async fn from_reqwest(response: reqwest::Response) -> SesResult<Self> {
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, body))
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The canonical status message for the status code (e.g., "OK").
    pub fn status_message(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// The raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Convert into the caller-facing success descriptor.
    pub fn into_send_response(self) -> SendEmailResponse {
        SendEmailResponse {
            status_code: self.status.as_u16(),
            status_message: self.status_message().to_string(),
            data: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let response = SesResponse::new(StatusCode::OK, b"body".to_vec());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.status_message(), "OK");
        assert_eq!(response.body(), b"body");
    }

    #[test]
    fn into_send_response_passes_body_through() {
        let body = br#"{"message":"Message Sent"}"#.to_vec();
        let response = SesResponse::new(StatusCode::OK, body.clone()).into_send_response();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.status_message, "OK");
        assert_eq!(response.data, body);
    }

    #[test]
    fn unknown_status_has_empty_message() {
        let status = StatusCode::from_u16(599).unwrap();
        let response = SesResponse::new(status, vec![]);
        assert_eq!(response.status_message(), "");
    }
}
