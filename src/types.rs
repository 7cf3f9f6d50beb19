//! Request and response types for the classic SES `SendEmail` operation.
//!
//! The request types mirror the wire shape of the SES query API
//! (`Source`, `Destination.ToAddresses.member.N`, `Message.Subject.Data`, …).
//! Every field the validator inspects is an `Option` so that an absent
//! field is representable and produces the exact contract error rather
//! than a silently-defaulted value.

use serde::{Deserialize, Serialize};

/// A request to send a single email.
///
/// Two shapes are accepted behind the same send operation:
///
/// - the primary shape: `source` + `destination` + `message`
/// - the template shape: `source` + `destination` + `template` +
///   `template_data` (selected by the presence of `template`)
///
/// Use [`crate::EmailBuilder`] for fluent construction, or fill the struct
/// directly; validation happens inside the send pipeline either way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendEmailRequest {
    /// The sender address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// The recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,

    /// The message content (primary shape).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    /// Template name (template shape).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// JSON-encoded template substitution data (template shape).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_data: Option<String>,
}

/// Recipients of an email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    /// Primary recipients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_addresses: Vec<String>,

    /// Carbon-copy recipients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc_addresses: Vec<String>,

    /// Blind carbon-copy recipients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc_addresses: Vec<String>,
}

impl Destination {
    /// A destination with a single `To` address.
    pub fn to(address: impl Into<String>) -> Self {
        Self {
            to_addresses: vec![address.into()],
            ..Self::default()
        }
    }
}

/// Subject and body of an email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    /// The subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Content>,

    /// The message body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

/// Body of an email; at least one of `html` / `text` must be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Body {
    /// HTML body content. Checked before `text` by the validator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<Content>,

    /// Plain-text body content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Content>,
}

/// A piece of textual content with an optional charset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content {
    /// The content data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// The character set of the data (e.g., "UTF-8").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
}

impl Content {
    /// Content carrying the given data, no explicit charset.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            charset: None,
        }
    }
}

/// The successful outcome of a send.
///
/// The raw response body is passed through unchanged; callers decode it
/// themselves if they need the service payload.
#[derive(Debug, Clone)]
pub struct SendEmailResponse {
    /// HTTP status code of the response.
    pub status_code: u16,

    /// Canonical status message (e.g., "OK").
    pub status_message: String,

    /// Raw response body bytes.
    pub data: Vec<u8>,
}
