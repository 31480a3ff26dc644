// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for sricheck
//!
//! The checker only ever needs "GET this URL and give me the bytes", so the
//! seam is the [`Fetcher`] trait. [`HttpClient`] is the reqwest-backed
//! implementation used by the CLI.

mod client;
mod fetcher;
mod response;

pub use client::HttpClient;
pub use fetcher::Fetcher;
pub use response::Response;

#[cfg(test)]
pub(crate) use fetcher::mock;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
