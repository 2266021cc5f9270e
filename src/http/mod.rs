//! HTTP layer for SES query API requests.
//!
//! The client never talks to reqwest directly. It builds an [`HttpRequest`]
//! and hands it to an [`HttpTransport`]; the default transport is
//! [`ReqwestTransport`], and tests inject
//! [`MockTransport`](crate::mocks::MockTransport).
//!
//! ```text
//! ┌─────────────────┐
//! │    SesClient    │  - parameter encoding
//! │                 │  - signing per attempt
//! │                 │  - retry loop
//! └────────┬────────┘
//!          │ HttpRequest
//!          ▼
//! ┌─────────────────┐
//! │  HttpTransport  │  - timeouts, TLS
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     reqwest     │
//! └─────────────────┘
//! ```

mod transport;

pub use transport::{ReqwestTransport, ReqwestTransportBuilder};

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

use crate::error::SesResult;

/// Content type of every SES query API request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP request to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: String,
    /// Request URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Bytes,
}

impl HttpRequest {
    /// Create a POST request with the given body.
    pub fn post(url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            method: "POST".to_string(),
            url: url.into(),
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// The body as UTF-8 text.
    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or("")
    }
}

/// HTTP response received.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Sends a single HTTP request.
///
/// Implementations perform exactly one exchange per call; retrying is the
/// client's job. Any deadline has to be enforced here.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return whatever status the server answered with.
    ///
    /// # Errors
    ///
    /// Returns `SesError::Transport` when no complete response was received.
    async fn send(&self, request: HttpRequest) -> SesResult<HttpResponse>;
}
