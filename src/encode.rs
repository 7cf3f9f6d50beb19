//! Wire-body encoding for the classic SES query API.
//!
//! The classic API takes `application/x-www-form-urlencoded` bodies with
//! nested structures flattened into dotted paths and lists indexed as
//! `member.N` (1-based), e.g.:
//!
//! ```text
//! Action=SendEmail&Source=sender%40example.com&Destination.ToAddresses.member.1=...
//! ```
//!
//! Encoding validates the request first and propagates the validation
//! failure unchanged; a request that fails validation never produces a body.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::{Content, SendEmailRequest};
use crate::validate::{validate_params, ValidationError};

/// The API action tag merged into every encoded body.
pub const SEND_EMAIL_ACTION: &str = "SendEmail";

/// Characters that should NOT be percent-encoded in form values.
///
/// The RFC 3986 unreserved set; spaces become `%20`, not `+`, matching the
/// encoding SES expects and what Signature V4 canonicalizes.
const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn form_encode(input: &str) -> String {
    utf8_percent_encode(input, FORM_SET).to_string()
}

/// Encode a send request into the SES query-format wire body.
///
/// Validates first, then flattens the request fields plus the fixed
/// `Action=SendEmail` tag into percent-encoded `key=value` pairs. The
/// caller's request is borrowed and never mutated.
///
/// # Errors
///
/// Returns the validator's [`ValidationError`] unchanged when the request
/// is malformed.
///
/// # Examples
///
/// ```
/// use ses_send::{encode_body, Body, Content, Destination, Message, SendEmailRequest};
///
/// let request = SendEmailRequest {
///     source: Some("sender@example.com".into()),
///     destination: Some(Destination::to("user@example.com")),
///     message: Some(Message {
///         subject: Some(Content::new("Hi")),
///         body: Some(Body { text: Some(Content::new("Hello")), html: None }),
///     }),
///     ..SendEmailRequest::default()
/// };
///
/// let body = encode_body(&request).unwrap();
/// assert!(body.contains("Action=SendEmail"));
/// assert!(body.contains("Destination.ToAddresses.member.1=user%40example.com"));
/// ```
pub fn encode_body(request: &SendEmailRequest) -> Result<String, ValidationError> {
    validate_params(request)?;

    let mut pairs: Vec<(String, String)> = Vec::new();

    if let Some(source) = &request.source {
        pairs.push(("Source".to_string(), source.clone()));
    }

    if let Some(destination) = &request.destination {
        push_address_list(&mut pairs, "Destination.ToAddresses", &destination.to_addresses);
        push_address_list(&mut pairs, "Destination.CcAddresses", &destination.cc_addresses);
        push_address_list(&mut pairs, "Destination.BccAddresses", &destination.bcc_addresses);
    }

    if let Some(message) = &request.message {
        if let Some(subject) = &message.subject {
            push_content(&mut pairs, "Message.Subject", subject);
        }
        if let Some(body) = &message.body {
            if let Some(html) = &body.html {
                push_content(&mut pairs, "Message.Body.Html", html);
            }
            if let Some(text) = &body.text {
                push_content(&mut pairs, "Message.Body.Text", text);
            }
        }
    }

    if let Some(template) = &request.template {
        pairs.push(("Template".to_string(), template.clone()));
    }
    if let Some(template_data) = &request.template_data {
        pairs.push(("TemplateData".to_string(), template_data.clone()));
    }

    pairs.push(("Action".to_string(), SEND_EMAIL_ACTION.to_string()));

    Ok(pairs
        .iter()
        .map(|(key, value)| format!("{}={}", form_encode(key), form_encode(value)))
        .collect::<Vec<_>>()
        .join("&"))
}

fn push_address_list(pairs: &mut Vec<(String, String)>, prefix: &str, addresses: &[String]) {
    for (index, address) in addresses.iter().enumerate() {
        pairs.push((format!("{}.member.{}", prefix, index + 1), address.clone()));
    }
}

fn push_content(pairs: &mut Vec<(String, String)>, prefix: &str, content: &Content) {
    if let Some(data) = &content.data {
        pairs.push((format!("{prefix}.Data"), data.clone()));
    }
    if let Some(charset) = &content.charset {
        pairs.push((format!("{prefix}.Charset"), charset.clone()));
    }
}
