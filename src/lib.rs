//! Amazon SES query API client
//!
//! Thin async client for the two SES query actions this crate covers:
//! `VerifyEmailAddress` and `SendEmail`. Requests are form-encoded, signed
//! with the `AWS3-HTTPS` scheme and posted to the SES endpoint; responses
//! come back as raw XML.
//!
//! # Features
//!
//! - **AWS3-HTTPS signing**: HMAC-SHA1 over the request date, fresh per attempt
//! - **Bounded retry**: any status above 200 is retried, 3 attempts by default
//! - **Recipient lists**: single address or list for To, Cc and Bcc
//! - **Pluggable transport and clock**: swap in mocks for tests
//! - **Error handling**: typed errors carrying the last status and body
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{EmailBuilder, SesClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY, plus optional
//!     // SES_ENDPOINT and SES_MAX_ATTEMPTS
//!     let client = SesClient::from_env().await?;
//!
//!     client.verify_email_address("sender@example.com").await?;
//!
//!     let request = EmailBuilder::new()
//!         .from("sender@example.com")
//!         .to(vec!["one@example.com", "two@example.com"])
//!         .bcc("audit@example.com")
//!         .subject("Hello from SES")
//!         .text("This is a test email.")
//!         .build()?;
//!
//!     let response = client.send_email(request).await?;
//!     println!("{} after {} attempt(s)", response.status, response.attempts);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{SesClient, SesError};
//!
//! # async fn example(client: &SesClient) {
//! match client.verify_email_address("someone@example.com").await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(SesError::RetriesExhausted { status, body, .. }) => {
//!         eprintln!("SES answered {}: {}", status, body);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod builders;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod mocks;
pub mod signing;
pub mod types;

pub use client::{SesClient, SesClientBuilder};

pub use config::{ConfigError, RetryConfig, SesConfig, SesConfigBuilder};

pub use credentials::{
    AwsCredentials, CredentialError, CredentialProvider, EnvironmentCredentialProvider,
    StaticCredentialProvider,
};

pub use error::{SesError, SesResult};

pub use http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

pub use signing::{Clock, SystemClock};

pub use types::{Recipients, RequestParameters, SendEmailRequest, SesResponse};

pub use builders::{BuilderError, EmailBuilder};

/// Create a new SES client from environment variables.
///
/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and optionally
/// `AWS_SESSION_TOKEN`, `SES_ENDPOINT` and `SES_MAX_ATTEMPTS`.
///
/// # Errors
///
/// Returns `SesError` if required environment variables are missing or if
/// client initialization fails.
pub async fn create_client_from_env() -> Result<SesClient> {
    SesClient::from_env().await
}

/// Create a new SES client with explicit configuration.
///
/// # Example
///
/// ```rust,no_run
/// use integrations_aws_ses_query::SesConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SesConfig::builder()
///     .credentials("AKID", "SECRET")
///     .build()?;
///
/// let client = integrations_aws_ses_query::create_client(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_client(config: SesConfig) -> Result<SesClient> {
    SesClient::new(config).await
}

/// Result type alias for SES operations.
pub type Result<T> = std::result::Result<T, SesError>;
