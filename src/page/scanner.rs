// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Script include discovery

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::dom::parse_html;
use crate::error::Result;
use crate::http::Fetcher;

/// One `<script src>` element found on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageScript {
    /// `src` as written in the page
    pub src: String,
    /// `src` resolved against the page URL. An undeclared script whose
    /// `src` does not resolve keeps it verbatim; it is never fetched.
    pub url: String,
    /// `integrity` attribute, `None` when absent or empty
    pub integrity: Option<String>,
}

impl PageScript {
    /// Integrity attribute, or an empty string when none was declared
    pub fn integrity_str(&self) -> &str {
        self.integrity.as_deref().unwrap_or_default()
    }
}

/// Finds script includes on a page
#[derive(Clone)]
pub struct PageScanner {
    fetcher: Arc<dyn Fetcher>,
}

impl PageScanner {
    /// Create a scanner over a fetch capability
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch `page_url` and list its script includes in document order
    pub async fn scan(&self, page_url: &str) -> Result<Vec<PageScript>> {
        let response = self.fetcher.fetch(page_url).await?;
        let scripts = extract_scripts(&response.text_lossy(), &response.url)?;

        debug!(page_url, count = scripts.len(), "scanned page");
        Ok(scripts)
    }
}

/// List the script includes in `html`, resolving each `src` against `base`.
///
/// Inline scripts (no `src`) are skipped. An unresolvable `src` is an error
/// only when the script declares an integrity attribute.
pub fn extract_scripts(html: &str, base: &Url) -> Result<Vec<PageScript>> {
    let doc = parse_html(html)?;

    doc.scripts()
        .filter_map(|script| {
            let src = script.get_attribute("src")?;
            let integrity = script
                .get_attribute("integrity")
                .filter(|v| !v.is_empty())
                .map(str::to_string);
            Some((src, integrity))
        })
        .map(|(src, integrity)| -> Result<PageScript> {
            let url = match base.join(src) {
                Ok(url) => url.to_string(),
                Err(e) if integrity.is_some() => return Err(e.into()),
                Err(e) => {
                    debug!(src, error = %e, "unresolvable src without integrity");
                    src.to_string()
                }
            };
            Ok(PageScript {
                src: src.to_string(),
                url,
                integrity,
            })
        })
        .collect()
}
