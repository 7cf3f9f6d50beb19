//! Ergonomic construction of send requests.
//!
//! [`EmailBuilder`] assembles a [`SendEmailRequest`] incrementally. It does
//! not validate; the request is checked when the client sends it, so a
//! partially built request produces the same errors as a hand-written one.

use serde_json::Value;

use crate::types::{Body, Content, Destination, Message, SendEmailRequest};

/// Builder for [`SendEmailRequest`].
///
/// # Examples
///
/// ```
/// use ses_send::EmailBuilder;
///
/// let request = EmailBuilder::new()
///     .from("sender@example.com")
///     .to("recipient@example.com")
///     .cc("copy@example.com")
///     .subject("Monthly report")
///     .html("<h1>Report</h1>")
///     .text("Report")
///     .build();
///
/// assert_eq!(request.source.as_deref(), Some("sender@example.com"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct EmailBuilder {
    source: Option<String>,
    to_addresses: Vec<String>,
    cc_addresses: Vec<String>,
    bcc_addresses: Vec<String>,
    subject: Option<String>,
    html_body: Option<String>,
    text_body: Option<String>,
    template: Option<String>,
    template_data: Option<Value>,
}

impl EmailBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address.
    pub fn from(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a `To` recipient.
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to_addresses.push(address.into());
        self
    }

    /// Add a `Cc` recipient.
    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc_addresses.push(address.into());
        self
    }

    /// Add a `Bcc` recipient.
    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc_addresses.push(address.into());
        self
    }

    /// Set the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the HTML body part.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html_body = Some(html.into());
        self
    }

    /// Set the plain-text body part.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text_body = Some(text.into());
        self
    }

    /// Use a stored template with the given substitution data instead of an
    /// inline message.
    pub fn template(mut self, name: impl Into<String>, data: Value) -> Self {
        self.template = Some(name.into());
        self.template_data = Some(data);
        self
    }

    /// Assemble the request.
    ///
    /// Fields left unset stay absent; nothing is validated here.
    pub fn build(self) -> SendEmailRequest {
        let destination = if self.to_addresses.is_empty()
            && self.cc_addresses.is_empty()
            && self.bcc_addresses.is_empty()
        {
            None
        } else {
            Some(Destination {
                to_addresses: self.to_addresses,
                cc_addresses: self.cc_addresses,
                bcc_addresses: self.bcc_addresses,
            })
        };

        let body = match (self.html_body, self.text_body) {
            (None, None) => None,
            (html, text) => Some(Body {
                html: html.map(Content::new),
                text: text.map(Content::new),
            }),
        };

        let message = match (self.subject, body) {
            (None, None) => None,
            (subject, body) => Some(Message {
                subject: subject.map(Content::new),
                body,
            }),
        };

        SendEmailRequest {
            source: self.source,
            destination,
            message,
            template: self.template,
            template_data: self.template_data.map(|data| data.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_full_inline_message() {
        let request = EmailBuilder::new()
            .from("sender@example.com")
            .to("a@example.com")
            .to("b@example.com")
            .cc("c@example.com")
            .bcc("d@example.com")
            .subject("Hello")
            .html("<p>Hi</p>")
            .text("Hi")
            .build();

        assert_eq!(request.source.as_deref(), Some("sender@example.com"));
        let destination = request.destination.unwrap();
        assert_eq!(destination.to_addresses, vec!["a@example.com", "b@example.com"]);
        assert_eq!(destination.cc_addresses, vec!["c@example.com"]);
        assert_eq!(destination.bcc_addresses, vec!["d@example.com"]);

        let message = request.message.unwrap();
        assert_eq!(message.subject.unwrap().data.as_deref(), Some("Hello"));
        let body = message.body.unwrap();
        assert_eq!(body.html.unwrap().data.as_deref(), Some("<p>Hi</p>"));
        assert_eq!(body.text.unwrap().data.as_deref(), Some("Hi"));
    }

    #[test]
    fn empty_builder_leaves_fields_absent() {
        let request = EmailBuilder::new().build();
        assert!(request.source.is_none());
        assert!(request.destination.is_none());
        assert!(request.message.is_none());
        assert!(request.template.is_none());
        assert!(request.template_data.is_none());
    }

    #[test]
    fn subject_without_body_still_builds_a_message() {
        let request = EmailBuilder::new().subject("Only subject").build();
        let message = request.message.unwrap();
        assert!(message.subject.is_some());
        assert!(message.body.is_none());
    }

    #[test]
    fn template_serializes_substitution_data() {
        let request = EmailBuilder::new()
            .from("sender@example.com")
            .to("user@example.com")
            .template("WelcomeTemplate", json!({"name": "Jane"}))
            .build();

        assert_eq!(request.template.as_deref(), Some("WelcomeTemplate"));
        assert_eq!(
            request.template_data.as_deref(),
            Some(r#"{"name":"Jane"}"#)
        );
    }

    #[test]
    fn text_only_body_has_no_html_part() {
        let request = EmailBuilder::new().text("plain").build();
        let body = request.message.unwrap().body.unwrap();
        assert!(body.html.is_none());
        assert_eq!(body.text.unwrap().data.as_deref(), Some("plain"));
    }
}
