//! Configuration error types.

use thiserror::Error;

/// Errors raised while assembling a [`SesConfig`](super::SesConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was never supplied, or was supplied empty.
    #[error("Missing required configuration: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The endpoint override is not an absolute http(s) URL.
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The rejected endpoint string.
        endpoint: String,
        /// Why it was rejected.
        message: String,
    },

    /// The retry settings cannot be honored.
    #[error("Invalid retry configuration: {message}")]
    InvalidRetry {
        /// Description of the problem.
        message: String,
    },

    /// An environment variable was present but unusable.
    #[error("Environment variable {variable}: {message}")]
    Environment {
        /// The variable name.
        variable: String,
        /// Description of the problem.
        message: String,
    },
}
