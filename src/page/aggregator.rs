// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page-level integrity verdicts and reports

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::scanner::{PageScanner, PageScript};
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::http::{Fetcher, HttpClient};
use crate::security::{IntegrityChecker, Verdict};

/// Outcome for one script include
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Position in document order
    pub id: usize,
    /// `src` as written in the page
    pub src: String,
    /// Resolved resource URL
    pub url: String,
    /// Declared integrity attribute (empty when absent)
    pub integrity: String,
    /// Check outcome
    pub verdict: Verdict,
    /// Whether the script passes
    pub valid: bool,
}

/// Full per-script report for a page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// Page that was scanned
    pub page_url: String,
    /// When the check ran
    pub checked_at: DateTime<Utc>,
    /// True when every script passes
    pub all_valid: bool,
    /// One entry per script include, in document order
    pub scripts: Vec<VerificationResult>,
}

impl PageReport {
    /// Scripts that failed their check
    pub fn invalid(&self) -> impl Iterator<Item = &VerificationResult> {
        self.scripts.iter().filter(|r| !r.valid)
    }
}

/// Runs integrity checks over every script include on a page
#[derive(Clone)]
pub struct PageIntegrity {
    scanner: PageScanner,
    checker: IntegrityChecker,
}

impl PageIntegrity {
    /// Create over a fetch capability
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            scanner: PageScanner::new(fetcher.clone()),
            checker: IntegrityChecker::new(fetcher),
        }
    }

    /// Create backed by a reqwest client
    pub fn with_config(config: CheckerConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpClient::with_config(config)?)))
    }

    /// True when every script on the page passes.
    ///
    /// Stops at the first invalid script and at the first fetch error,
    /// which is returned.
    pub async fn check_page(&self, page_url: &str) -> Result<bool> {
        let scripts = self.scanner.scan(page_url).await?;

        for (id, script) in scripts.iter().enumerate() {
            let result = self.verify_entry(id, script).await?;
            if !result.valid {
                info!(page_url, script = %result.url, "page failed integrity check");
                return Ok(false);
            }
        }

        info!(page_url, scripts = scripts.len(), "page passed integrity check");
        Ok(true)
    }

    /// Check every script on the page and report each one.
    ///
    /// Invalid scripts do not stop the run. A fetch error aborts the whole
    /// report.
    pub async fn report_page(&self, page_url: &str) -> Result<PageReport> {
        let scripts = self.scanner.scan(page_url).await?;

        let mut results = Vec::with_capacity(scripts.len());
        for (id, script) in scripts.iter().enumerate() {
            results.push(self.verify_entry(id, script).await?);
        }

        let all_valid = results.iter().all(|r| r.valid);
        info!(
            page_url,
            scripts = results.len(),
            invalid = results.iter().filter(|r| !r.valid).count(),
            "page report complete"
        );

        Ok(PageReport {
            page_url: page_url.to_string(),
            checked_at: Utc::now(),
            all_valid,
            scripts: results,
        })
    }

    /// Shared per-script step. Scripts without an integrity attribute pass
    /// without being fetched.
    async fn verify_entry(&self, id: usize, script: &PageScript) -> Result<VerificationResult> {
        let verdict = match script.integrity.as_deref() {
            Some(integrity) => self.checker.check(&script.url, integrity).await?,
            None => Verdict::NotDeclared,
        };
        debug!(id, url = %script.url, ?verdict, "script verified");

        Ok(VerificationResult {
            id,
            src: script.src.clone(),
            url: script.url.clone(),
            integrity: script.integrity_str().to_string(),
            verdict,
            valid: verdict.is_valid(),
        })
    }
}
