//! Credentials supplied directly by the caller.

use super::{AwsCredentials, CredentialProvider};
use crate::credentials::error::CredentialError;
use async_trait::async_trait;

/// Provider returning a fixed set of credentials.
///
/// This is what `SesConfig::builder().credentials(id, secret)` installs.
///
/// # Example
///
/// ```
/// use integrations_aws_ses_query::credentials::{AwsCredentials, StaticCredentialProvider};
///
/// let provider = StaticCredentialProvider::new(AwsCredentials::new("AKID", "SECRET"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credentials: AwsCredentials,
}

impl StaticCredentialProvider {
    /// Wrap the given credentials.
    pub fn new(credentials: AwsCredentials) -> Self {
        Self { credentials }
    }

    /// Build the provider from a raw key pair.
    pub fn from_keys(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self::new(AwsCredentials::new(access_key_id, secret_access_key))
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn credentials(&self) -> Result<AwsCredentials, CredentialError> {
        self.credentials.validate()?;
        Ok(self.credentials.clone())
    }
}
