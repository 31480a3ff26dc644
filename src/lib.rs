// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # sricheck - Subresource Integrity checker
//!
//! Fetches a page, finds its `<script src>` includes and verifies each
//! declared `integrity` attribute against the bytes actually served.
//!
//! ## Features
//!
//! - SHA-256 / SHA-384 / SHA-512 digest maps for any payload
//! - Fail-closed attribute parsing: garbled or unsupported attributes
//!   never verify, and never abort a scan
//! - Page-level verdicts (fail-fast) and full per-script reports
//! - Pluggable fetch capability; reqwest-backed by default
//!
//! ## Example
//!
//! ```rust,no_run
//! use sricheck::{CheckerConfig, IntegrityChecker, PageIntegrity};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let checker = IntegrityChecker::with_config(CheckerConfig::default())?;
//!     let valid = checker
//!         .is_valid(
//!             "https://code.jquery.com/jquery-3.3.1.slim.min.js",
//!             "sha384-q8i/X+965DzO0rT7abK41JStQIAqVgRVzpbzo5smXKp4YfRvH+8abtTE1Pi6jizo",
//!         )
//!         .await?;
//!     println!("valid: {}", valid);
//!
//!     let page = PageIntegrity::with_config(CheckerConfig::default())?;
//!     let report = page.report_page("https://example.com").await?;
//!     for script in report.invalid() {
//!         println!("integrity failure: {}", script.url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod http;
pub mod output;
pub mod page;
pub mod security;

// Re-exports for convenience

// Configuration
pub use config::CheckerConfig;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{Fetcher, HttpClient, Response};

// Page scanning
pub use page::{PageIntegrity, PageReport, PageScanner, PageScript, VerificationResult};

// Integrity
pub use security::{
    build_sri_map, check_bytes, check_map, digest_named, Algorithm, DigestMap,
    IntegrityAttribute, IntegrityChecker, Verdict,
};

/// sricheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
