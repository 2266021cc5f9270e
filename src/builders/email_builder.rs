//! Email builder for constructing send email requests.

use crate::builders::BuilderError;
use crate::types::{Recipients, SendEmailRequest};

/// Builder for [`SendEmailRequest`] with a fluent API.
///
/// `to`, `cc` and `bcc` can be called repeatedly and accept a single address
/// or a list. Cc and Bcc stay unset until first used, so an email without
/// them carries no parameters for those families.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::builders::EmailBuilder;
///
/// let request = EmailBuilder::new()
///     .from("sender@example.com")
///     .to(vec!["recipient1@example.com", "recipient2@example.com"])
///     .cc("cc@example.com")
///     .subject("Meeting Invitation")
///     .html("<p>You're invited to our meeting</p>")
///     .build()?;
///
/// assert_eq!(request.destinations.len(), 2);
/// assert!(request.bcc.is_none());
/// # Ok::<(), integrations_aws_ses_query::builders::BuilderError>(())
/// ```
#[derive(Debug, Default)]
pub struct EmailBuilder {
    from: Option<String>,
    to: Vec<String>,
    cc: Option<Vec<String>>,
    bcc: Option<Vec<String>>,
    subject: Option<String>,
    text_body: Option<String>,
    html_body: Option<String>,
    charset: Option<String>,
}

impl EmailBuilder {
    /// Create a new email builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address. Required.
    pub fn from(mut self, email: impl Into<String>) -> Self {
        self.from = Some(email.into());
        self
    }

    /// Add "To" recipients. At least one is required.
    pub fn to(mut self, recipients: impl Into<Recipients>) -> Self {
        self.to.extend(recipients.into().into_vec());
        self
    }

    /// Add "Cc" recipients.
    pub fn cc(mut self, recipients: impl Into<Recipients>) -> Self {
        self.cc
            .get_or_insert_with(Vec::new)
            .extend(recipients.into().into_vec());
        self
    }

    /// Add "Bcc" recipients.
    pub fn bcc(mut self, recipients: impl Into<Recipients>) -> Self {
        self.bcc
            .get_or_insert_with(Vec::new)
            .extend(recipients.into().into_vec());
        self
    }

    /// Set the subject. Required.
    pub fn subject(mut self, text: impl Into<String>) -> Self {
        self.subject = Some(text.into());
        self
    }

    /// Set the plain text body.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }

    /// Set the charset for subject and bodies (defaults to `UTF-8`).
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    ///
    /// `BuilderError::MissingField` for a missing sender, recipient or
    /// subject; `BuilderError::InvalidValue` for anything
    /// [`SendEmailRequest::validate`] rejects.
    pub fn build(self) -> Result<SendEmailRequest, BuilderError> {
        let source = self.from.ok_or_else(|| BuilderError::missing_field("from"))?;
        if self.to.is_empty() {
            return Err(BuilderError::missing_field("to"));
        }
        let subject = self
            .subject
            .ok_or_else(|| BuilderError::missing_field("subject"))?;

        let request = SendEmailRequest {
            source,
            destinations: Recipients::Many(self.to),
            subject,
            html_body: self.html_body,
            text_body: self.text_body,
            cc: self.cc.map(Recipients::Many),
            bcc: self.bcc.map(Recipients::Many),
            charset: self.charset,
        };

        request.validate()?;
        Ok(request)
    }
}
