//! Test doubles for the transport and clock seams.
//!
//! ```
//! use std::sync::Arc;
//! use integrations_aws_ses_query::mocks::{FixedClock, MockResponse, MockTransport};
//!
//! let transport = Arc::new(MockTransport::with_responses(vec![
//!     MockResponse::error(503, "<Error/>"),
//!     MockResponse::ok_with_body("<SendEmailResponse/>"),
//! ]));
//! let clock = Arc::new(FixedClock::at_unix(1_356_998_400));
//! # let _ = (transport, clock);
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{SesError, SesResult};
use crate::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::signing::Clock;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Canned HTTP response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl MockResponse {
    /// A 200 response with an empty body.
    pub fn ok() -> Self {
        Self::error(200, Bytes::new())
    }

    /// A 200 response with the given body.
    pub fn ok_with_body(body: impl Into<Bytes>) -> Self {
        Self::error(200, body)
    }

    /// A response with any status.
    pub fn error(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// What the transport does once its queue is drained.
#[derive(Debug, Clone)]
enum Fallback {
    Respond(MockResponse),
    Fail,
}

/// In-memory [`HttpTransport`] that replays queued responses and records
/// every request it was handed.
#[derive(Debug)]
pub struct MockTransport {
    responses: Mutex<Vec<MockResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
    fallback: Fallback,
}

impl MockTransport {
    /// A transport with nothing queued; every send fails.
    pub fn new() -> Self {
        Self::with_responses(Vec::new())
    }

    /// Replay `responses` in order, then fail.
    pub fn with_responses(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            fallback: Fallback::Fail,
        }
    }

    /// Answer every send with `response`.
    pub fn with_default(response: MockResponse) -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            fallback: Fallback::Respond(response),
        }
    }

    /// Queue another response.
    pub fn queue_response(&self, response: MockResponse) {
        lock(&self.responses).push(response);
    }

    /// All recorded requests, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Number of sends so far.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> SesResult<HttpResponse> {
        lock(&self.requests).push(request);

        let next = {
            let mut responses = lock(&self.responses);
            if responses.is_empty() {
                None
            } else {
                Some(responses.remove(0))
            }
        };

        let response = match (next, &self.fallback) {
            (Some(response), _) => response,
            (None, Fallback::Respond(response)) => response.clone(),
            (None, Fallback::Fail) => {
                return Err(SesError::Transport {
                    message: "No mock response available".to_string(),
                    source: None,
                    retryable: false,
                })
            }
        };

        Ok(HttpResponse {
            status: response.status,
            headers: response.headers,
            body: response.body,
        })
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Freeze at `at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Freeze at a Unix timestamp in seconds.
    pub fn at_unix(seconds: i64) -> Self {
        Self(Utc.timestamp_opt(seconds, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock that moves forward by a fixed step every time it is read.
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: ChronoDuration,
}

impl SteppingClock {
    /// Start at `start` and advance by `step_seconds` per read.
    pub fn new(start: DateTime<Utc>, step_seconds: i64) -> Self {
        Self {
            next: Mutex::new(start),
            step: ChronoDuration::seconds(step_seconds),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = lock(&self.next);
        let current = *next;
        *next = current + self.step;
        current
    }
}
