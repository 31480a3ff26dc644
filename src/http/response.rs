// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::StatusCode;
use url::Url;

/// HTTP response representation
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response body, fully read and content-decoded
    pub body: Bytes,
    /// Final URL (after redirects)
    pub url: Url,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

impl Response {
    /// Create a new response
    pub fn new(status: StatusCode, body: Bytes, url: Url, response_time_ms: u64) -> Self {
        Self {
            status,
            body,
            url,
            response_time_ms,
        }
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: StatusCode, body: &'static str) -> Response {
        Response::new(
            status,
            Bytes::from(body),
            Url::parse("https://example.com").unwrap(),
            100,
        )
    }

    #[test]
    fn test_response_status() {
        let resp = response(StatusCode::OK, "");
        assert!(resp.is_success());
        assert_eq!(resp.status_code(), 200);

        let resp = response(StatusCode::NOT_FOUND, "");
        assert!(!resp.is_success());
        assert_eq!(resp.status_code(), 404);
    }

    #[test]
    fn test_response_text() {
        let resp = response(StatusCode::OK, "Hello, World!");
        assert_eq!(resp.text_lossy(), "Hello, World!");
        assert_eq!(resp.bytes().len(), 13);
        assert_eq!(resp.response_time_ms, 100);
    }
}
