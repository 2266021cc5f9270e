//! Default HTTP transport built on reqwest.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::trace;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::error::{SesError, SesResult};

/// Default HTTP transport using reqwest.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with default timeouts.
    pub fn new() -> SesResult<Self> {
        Self::builder().build()
    }

    /// Create a transport builder.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> SesResult<HttpResponse> {
        let method = request
            .method
            .parse::<reqwest::Method>()
            .map_err(|e| SesError::Transport {
                message: format!("Invalid HTTP method: {}", e),
                source: Some(Box::new(e)),
                retryable: false,
            })?;

        let mut req_builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            req_builder = req_builder.header(name, value);
        }
        req_builder = req_builder.body(request.body.clone());

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        trace!(url = %request.url, status = status, "HTTP response received");
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body = response.bytes().await.map_err(|e| SesError::Transport {
            message: format!("Failed to read response body: {}", e),
            source: Some(Box::new(e)),
            retryable: false,
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct ReqwestTransportBuilder {
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: String,
}

impl ReqwestTransportBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("aws-ses-query/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the overall request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the transport.
    pub fn build(self) -> SesResult<ReqwestTransport> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| SesError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
                retryable: false,
            })?;

        Ok(ReqwestTransport { client })
    }
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
