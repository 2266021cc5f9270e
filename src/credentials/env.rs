//! Environment variable credentials provider.

use super::{AwsCredentials, CredentialProvider};
use crate::credentials::error::CredentialError;
use async_trait::async_trait;
use std::env;
use tracing::debug;

/// Environment variable holding the access key id.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Environment variable holding an optional session token.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Credentials provider that reads from environment variables.
///
/// The variables are read on every call, so rotating them takes effect for
/// the next client built from this provider.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentCredentialProvider;

impl EnvironmentCredentialProvider {
    /// Create a new environment credentials provider.
    pub fn new() -> Self {
        Self
    }

    fn load<F>(lookup: F) -> Result<AwsCredentials, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key_id = lookup(AWS_ACCESS_KEY_ID).ok_or_else(|| CredentialError::Missing {
            message: format!("{} environment variable not set", AWS_ACCESS_KEY_ID),
        })?;

        let secret_access_key =
            lookup(AWS_SECRET_ACCESS_KEY).ok_or_else(|| CredentialError::Missing {
                message: format!("{} environment variable not set", AWS_SECRET_ACCESS_KEY),
            })?;

        let mut credentials = AwsCredentials::new(access_key_id, secret_access_key);
        if let Some(token) = lookup(AWS_SESSION_TOKEN).filter(|t| !t.is_empty()) {
            credentials = credentials.with_session_token(token);
        }

        credentials.validate()?;
        debug!(
            has_session_token = credentials.session_token().is_some(),
            "Loaded AWS credentials from environment"
        );
        Ok(credentials)
    }
}

#[async_trait]
impl CredentialProvider for EnvironmentCredentialProvider {
    async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
        Self::load(|name| env::var(name).ok())
    }
}
