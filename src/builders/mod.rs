//! Builders for constructing SES requests.
//!
//! # Example
//!
//! ```rust
//! use integrations_aws_ses_query::builders::EmailBuilder;
//!
//! let request = EmailBuilder::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Hello World")
//!     .text("This is a plain text email")
//!     .html("<p>This is an HTML email</p>")
//!     .build()?;
//! # Ok::<(), integrations_aws_ses_query::builders::BuilderError>(())
//! ```

mod email_builder;

pub use email_builder::EmailBuilder;

use thiserror::Error;

use crate::error::SesError;

/// Error returned when request input is incomplete or unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A required field was never set.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A field holds a value that cannot be sent.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue {
        /// The name of the field with the invalid value.
        field: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl BuilderError {
    /// Create a new missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new invalid value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field the error is about.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::InvalidValue { field, .. } => field,
        }
    }
}

impl From<BuilderError> for SesError {
    fn from(err: BuilderError) -> Self {
        let field = err.field().to_string();
        SesError::Validation {
            message: err.to_string(),
            field: Some(field),
        }
    }
}
