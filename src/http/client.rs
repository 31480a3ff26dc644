// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::debug;

use super::fetcher::Fetcher;
use super::response::Response;
use crate::config::CheckerConfig;
use crate::error::{Error, Result};

/// reqwest-backed [`Fetcher`]
///
/// Content-Encoding (gzip, brotli) is decoded by reqwest before the body is
/// handed out, so digests are computed over the same bytes a browser would
/// check.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(CheckerConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: CheckerConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(default_headers(&config)?);

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpClient {
    async fn get(&self, url: &str) -> Result<Response> {
        let start = Instant::now();

        let response = self.client.get(url).send().await?;
        let final_url = response.url().clone();
        let status = response.status();

        let body = response.bytes().await?;
        let response_time = start.elapsed().as_millis() as u64;

        debug!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = response_time,
            "fetched"
        );

        Ok(Response::new(status, body, final_url, response_time))
    }
}

fn default_headers(config: &CheckerConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "accept",
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
    );
    headers.insert(
        "accept-language",
        HeaderValue::from_static("en-US,en;q=0.5"),
    );

    for (name, value) in &config.default_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::Config(format!("Invalid header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::Config(format!("Invalid header value for '{}': {}", name, e)))?;
        headers.insert(name, value);
    }

    Ok(headers)
}
