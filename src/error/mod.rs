//! Error types for the SES query API client.
//!
//! Errors are split by where they originate so callers can react to each
//! class differently:
//!
//! - Configuration errors (empty credentials, unusable endpoint)
//! - Credential and signing errors
//! - Validation errors, raised before any network call is made
//! - Transport errors wrapping the underlying HTTP failure
//! - Exhausted retries, carrying the last status and raw body from SES
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_query::error::SesError;
//!
//! fn report(error: &SesError) {
//!     if let Some(status) = error.status() {
//!         eprintln!("SES answered with HTTP {}", status);
//!     }
//!     if error.is_retryable() {
//!         eprintln!("worth trying again later");
//!     }
//! }
//! ```

use thiserror::Error;

use crate::config::ConfigError;
use crate::credentials::CredentialError;
use crate::signing::SigningError;

/// Result type alias for SES operations.
pub type SesResult<T> = Result<T, SesError>;

/// Top-level error type for the SES query API client.
#[derive(Debug, Error)]
pub enum SesError {
    /// The client is misconfigured.
    ///
    /// Raised at construction time, for example when the access key id or
    /// secret key is empty or the endpoint is not a valid URL.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
    },

    /// Credentials could not be obtained from the configured provider.
    #[error("Credential error: {message}")]
    Credential {
        /// Description of the credential error.
        message: String,
    },

    /// Request signing failed.
    #[error("Signing error: {message}")]
    Signing {
        /// Description of the signing error.
        message: String,
    },

    /// Request input was rejected before anything was sent.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the validation error.
        message: String,
        /// Name of the offending field, if known.
        field: Option<String>,
    },

    /// The HTTP exchange itself failed (connection, TLS, unreadable body).
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
        /// Underlying error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        /// Whether the failure is likely transient.
        retryable: bool,
    },

    /// SES kept answering with a non-success status until the retry budget
    /// ran out.
    #[error("Request failed after {attempts} attempts with HTTP {status}")]
    RetriesExhausted {
        /// Status code of the last attempt.
        status: u16,
        /// Raw response body of the last attempt.
        body: String,
        /// Number of attempts made.
        attempts: u32,
    },
}

impl SesError {
    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SesError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Returns true if repeating the whole call later may succeed.
    ///
    /// Exhausted retries count as retryable only for server-side (5xx) and
    /// throttling (429) statuses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_query::error::SesError;
    ///
    /// let error = SesError::RetriesExhausted {
    ///     status: 503,
    ///     body: String::new(),
    ///     attempts: 3,
    /// };
    /// assert!(error.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            SesError::Transport { retryable, .. } => *retryable,
            SesError::RetriesExhausted { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns the HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SesError::RetriesExhausted { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw SES response body carried by the error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            SesError::RetriesExhausted { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<ConfigError> for SesError {
    fn from(err: ConfigError) -> Self {
        SesError::Configuration {
            message: err.to_string(),
        }
    }
}

impl From<CredentialError> for SesError {
    fn from(err: CredentialError) -> Self {
        SesError::Credential {
            message: err.to_string(),
        }
    }
}

impl From<SigningError> for SesError {
    fn from(err: SigningError) -> Self {
        SesError::Signing {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SesError {
    fn from(err: reqwest::Error) -> Self {
        let retryable = err.is_timeout() || err.is_connect();
        SesError::Transport {
            message: err.to_string(),
            source: Some(Box::new(err)),
            retryable,
        }
    }
}
