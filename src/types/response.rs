//! Raw response returned to callers.

use std::collections::HashMap;

use crate::http::HttpResponse;

/// Status, headers and body of the final attempt.
///
/// The XML payload is passed through untouched.
#[derive(Debug, Clone)]
pub struct SesResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body, decoded lossily as UTF-8.
    pub body: String,
    /// Number of sends it took to get this response.
    pub attempts: u32,
}

impl SesResponse {
    pub(crate) fn from_http(response: HttpResponse, attempts: u32) -> Self {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        Self {
            status: response.status,
            headers: response.headers,
            body,
            attempts,
        }
    }

    /// Whether the client accepted the final status (200 or below).
    pub fn is_success(&self) -> bool {
        self.status <= 200
    }

    /// The AWS request id, if SES returned one.
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("x-amzn-requestid"))
            .map(|(_, v)| v.as_str())
    }
}
