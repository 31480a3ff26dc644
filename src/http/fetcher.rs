// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fetch capability trait

use async_trait::async_trait;

use super::response::Response;
use crate::error::{Error, Result};

/// Outbound GET capability used by the scanner and the integrity checker.
///
/// Implementations perform exactly one request per call: no caching and
/// no retries.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url`, returning the full response whatever its status
    async fn get(&self, url: &str) -> Result<Response>;

    /// GET `url` and require a 2xx status.
    ///
    /// Any other status becomes [`Error::Status`] naming the URL.
    async fn fetch(&self, url: &str) -> Result<Response> {
        let response = self.get(url).await?;
        if !response.is_success() {
            return Err(Error::status(url, response.status_code()));
        }
        Ok(response)
    }
}
