//! Credential error types.

use thiserror::Error;

/// Errors that can occur while obtaining credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A required value is not available from the source.
    #[error("Missing credentials: {message}")]
    Missing {
        /// Which value is missing.
        message: String,
    },

    /// The values are present but unusable (for example empty).
    #[error("Invalid credentials: {message}")]
    Invalid {
        /// Why the credentials were rejected.
        message: String,
    },
}
