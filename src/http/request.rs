//! The signed HTTP request descriptor for a send.
//!
//! A [`SesRequest`] is computed per send call and never reused: fixed
//! method POST, path `/`, the configured endpoint, a form content type,
//! and the encoded body. Signing mutates the header map in place.

use chrono::{DateTime, Utc};
use http::{header, HeaderMap, Method};
use url::Url;

use crate::credentials::Credentials;
use crate::error::SesError;
use crate::signing::{sign_request, SigningError};

/// Service tag of the classic SES endpoint (`email.{region}.amazonaws.com`).
pub const SES_SERVICE: &str = "email";

/// Content type of the classic SES query API.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A wire-ready `SendEmail` HTTP request.
#[derive(Debug, Clone)]
pub struct SesRequest {
    url: Url,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl SesRequest {
    /// Build the request descriptor for an encoded `SendEmail` body.
    ///
    /// The URL is the endpoint with its path fixed to `/`; the `host` and
    /// `content-type` headers are populated up front so they are bound into
    /// the signature.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Transport`] when the endpoint is not a valid
    /// URL with a host.
    pub fn send_email(endpoint: &str, body: String) -> Result<Self, SesError> {
        let mut url = Url::parse(endpoint).map_err(|e| SesError::Transport {
            message: format!("Invalid SES endpoint \"{endpoint}\": {e}"),
            source: Some(Box::new(e)),
        })?;
        url.set_path("/");

        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(SesError::Transport {
                    message: format!("SES endpoint \"{endpoint}\" has no host"),
                    source: None,
                })
            }
        };

        let mut headers = HeaderMap::new();
        let host_value = host.parse().map_err(|_| SesError::Transport {
            message: format!("SES endpoint host \"{host}\" is not a valid header value"),
            source: None,
        })?;
        headers.insert(header::HOST, host_value);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(FORM_CONTENT_TYPE),
        );

        Ok(Self {
            url,
            headers,
            body: body.into_bytes(),
        })
    }

    /// Sign the request for the given region, binding method, path,
    /// headers, and body into the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Propagates [`SigningError`] from the signer.
    pub fn sign(
        &mut self,
        region: &str,
        credentials: &Credentials,
        timestamp: &DateTime<Utc>,
    ) -> Result<(), SigningError> {
        sign_request(
            &mut self.headers,
            Method::POST.as_str(),
            "/",
            &self.body,
            region,
            credentials,
            timestamp,
        )
    }

    /// The HTTP method; always POST.
    pub fn method(&self) -> Method {
        Method::POST
    }

    /// The full request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The request body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decompose into (url, headers, body) for a transport.
    pub fn into_parts(self) -> (Url, HeaderMap, Vec<u8>) {
        (self.url, self.headers, self.body)
    }
}
