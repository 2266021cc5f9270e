//! Signing error types.

use thiserror::Error;

/// Errors that can occur while signing a request.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The HMAC could not be keyed with the secret.
    #[error("Invalid signing key: {message}")]
    InvalidKey {
        /// Details from the MAC implementation.
        message: String,
    },

    /// A computed value cannot be carried in an HTTP header.
    ///
    /// ```
    /// use integrations_aws_ses_query::signing::SigningError;
    ///
    /// let error = SigningError::InvalidHeader {
    ///     header: "X-Amzn-Authorization".to_string(),
    /// };
    /// assert_eq!(error.to_string(), "Value for header X-Amzn-Authorization is not valid");
    /// ```
    #[error("Value for header {header} is not valid")]
    InvalidHeader {
        /// Header name.
        header: String,
    },
}
