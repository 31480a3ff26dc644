// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for sricheck
//!
//! Only fetch-level failures are errors. A malformed or unsupported
//! integrity attribute is never surfaced here; it resolves to a negative
//! verdict instead (see [`crate::security::Verdict`]).

use thiserror::Error;

/// Result type alias for sricheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sricheck
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (DNS, connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Received a non-success status code {status} for {url}")]
    Status { url: String, status: u16 },

    /// URL parsing or resolution failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTML parsing failed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a status error for a URL
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Error::Status {
            url: url.into(),
            status,
        }
    }

    /// Check if this is a non-success status error
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status { .. })
    }

    /// Check if this is a transport error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Status { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}
