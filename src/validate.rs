//! Structural validation of send requests.
//!
//! Validation is fail-fast: the first violated rule wins and its message is
//! the exact observable contract. It always completes before any network
//! transmission; a request that fails here is never sent.

use thiserror::Error;

use crate::types::SendEmailRequest;

/// A structural rule violated by a send request.
///
/// The `Display` output of each variant is part of the compatibility
/// contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required property is absent.
    ///
    /// Carries the dotted field path, e.g. `Message.Subject.Data`.
    #[error("The \"{0}\" property is required")]
    MissingProperty(&'static str),

    /// A body part is present but carries no data.
    ///
    /// Carries the part name, `Html` or `Text`.
    #[error("The \"Message.Body.{0}.Data\" property is required when using {0}")]
    MissingBodyData(&'static str),

    /// Neither `Html` nor `Text` is present on `Message.Body`.
    #[error("One of \"Html\", \"Text\" is required on Message.Body")]
    MissingBodyContent,
}

/// Validate the structure of a send request.
///
/// Checks run in a fixed order and stop at the first violation:
/// `Source`, `Destination`, then either the template shape (`TemplateData`
/// when `template` is present) or the message shape (`Message`,
/// `Message.Body`, `Message.Subject`, `Message.Subject.Data`, and exactly
/// one populated body part with `Html` inspected before `Text`).
///
/// Takes the request by reference and never mutates it; validating the same
/// request twice gives the same outcome.
///
/// # Errors
///
/// Returns the first violated rule as a [`ValidationError`].
pub fn validate_params(request: &SendEmailRequest) -> Result<(), ValidationError> {
    if request.source.is_none() {
        return Err(ValidationError::MissingProperty("Source"));
    }
    if request.destination.is_none() {
        return Err(ValidationError::MissingProperty("Destination"));
    }

    // Template shape: TemplateData stands in for the Message subtree.
    if request.template.is_some() {
        if request.template_data.is_none() {
            return Err(ValidationError::MissingProperty("TemplateData"));
        }
        return Ok(());
    }

    let message = request
        .message
        .as_ref()
        .ok_or(ValidationError::MissingProperty("Message"))?;
    let body = message
        .body
        .as_ref()
        .ok_or(ValidationError::MissingProperty("Message.Body"))?;
    let subject = message
        .subject
        .as_ref()
        .ok_or(ValidationError::MissingProperty("Message.Subject"))?;
    if subject.data.is_none() {
        return Err(ValidationError::MissingProperty("Message.Subject.Data"));
    }

    if let Some(html) = &body.html {
        if html.data.is_none() {
            return Err(ValidationError::MissingBodyData("Html"));
        }
    } else if let Some(text) = &body.text {
        if text.data.is_none() {
            return Err(ValidationError::MissingBodyData("Text"));
        }
    } else {
        return Err(ValidationError::MissingBodyContent);
    }

    Ok(())
}
