// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Integrity checking for single resources

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::integrity::IntegrityAttribute;
use super::sri::{build_sri_map, DigestMap};
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::http::{Fetcher, HttpClient};

/// Outcome of checking a resource that was fetched successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Declared digest matches the content
    Valid,
    /// Declared digest differs from the content
    Mismatch,
    /// Attribute is malformed or names an unsupported algorithm
    Unparsed,
    /// Script carries no integrity attribute
    NotDeclared,
}

impl Verdict {
    /// Whether this verdict passes.
    ///
    /// An absent attribute passes; a broken one fails closed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid | Verdict::NotDeclared)
    }
}

/// Compare `data` against an integrity attribute value.
///
/// The digest map is always built first, then the attribute is parsed.
pub fn check_bytes(data: &[u8], integrity: &str) -> Verdict {
    check_map(&build_sri_map(data), integrity)
}

/// Compare a precomputed digest map against an integrity attribute value
pub fn check_map(map: &DigestMap, integrity: &str) -> Verdict {
    match IntegrityAttribute::parse(integrity) {
        Some(attribute) if map.get(attribute.algorithm) == attribute.digest => Verdict::Valid,
        Some(_) => Verdict::Mismatch,
        None => Verdict::Unparsed,
    }
}

/// Fetches resources and checks them against integrity attributes
#[derive(Clone)]
pub struct IntegrityChecker {
    fetcher: Arc<dyn Fetcher>,
}

impl IntegrityChecker {
    /// Create a checker over any fetch capability
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Create a checker backed by a reqwest client
    pub fn with_config(config: CheckerConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpClient::with_config(config)?)))
    }

    /// Fetch `url` and compute its digest map
    pub async fn generate_sri_map(&self, url: &str) -> Result<DigestMap> {
        let response = self.fetcher.fetch(url).await?;
        debug!(url, elapsed_ms = response.response_time_ms, "resource fetched");
        Ok(build_sri_map(response.bytes()))
    }

    /// Fetch `url` and check it against `integrity`.
    ///
    /// Fetch failures (non-2xx status, transport) are errors. A malformed
    /// attribute, including an empty one, is `Verdict::Unparsed`.
    pub async fn check(&self, url: &str, integrity: &str) -> Result<Verdict> {
        let response = self.fetcher.fetch(url).await?;
        let map = build_sri_map(response.bytes());
        let verdict = check_map(&map, integrity);

        match verdict {
            Verdict::Unparsed => warn!(url, integrity, "unparseable integrity attribute"),
            Verdict::Mismatch => warn!(url, integrity, "integrity mismatch"),
            _ => debug!(
                url,
                ?verdict,
                elapsed_ms = response.response_time_ms,
                "integrity checked"
            ),
        }

        Ok(verdict)
    }

    /// Like [`check`](Self::check), reduced to a boolean
    pub async fn is_valid(&self, url: &str, integrity: &str) -> Result<bool> {
        Ok(self.check(url, integrity).await?.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockFetcher;
    use crate::security::sri::Algorithm;

    const SCRIPT_URL: &str = "https://cdn.example.com/lib.js";
    const SCRIPT: &[u8] = b"(function(){ window.lib = {}; })();";

    fn checker() -> IntegrityChecker {
        IntegrityChecker::new(Arc::new(MockFetcher::new().route(SCRIPT_URL, SCRIPT)))
    }

    #[test]
    fn test_check_bytes_round_trip() {
        for algorithm in Algorithm::ALL {
            let attr = format!("{}-{}", algorithm, algorithm.digest(SCRIPT));
            assert_eq!(check_bytes(SCRIPT, &attr), Verdict::Valid);
        }
    }

    #[test]
    fn test_check_bytes_tampered_digest() {
        let digest = Algorithm::Sha384.digest(SCRIPT);
        // flip one character of the digest
        let mut chars: Vec<char> = digest.chars().collect();
        chars[10] = if chars[10] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        assert_eq!(check_bytes(SCRIPT, &format!("sha384-{}", tampered)), Verdict::Mismatch);
    }

    #[test]
    fn test_check_bytes_padding_matters() {
        let digest = Algorithm::Sha256.digest(SCRIPT);
        let unpadded = digest.trim_end_matches('=');

        assert_eq!(check_bytes(SCRIPT, &format!("sha256-{}", unpadded)), Verdict::Mismatch);
    }

    #[test]
    fn test_check_bytes_wrong_algorithm_label() {
        let attr = format!("sha512-{}", Algorithm::Sha384.digest(SCRIPT));
        assert_eq!(check_bytes(SCRIPT, &attr), Verdict::Mismatch);
    }

    #[test]
    fn test_check_bytes_unsupported() {
        assert_eq!(check_bytes(SCRIPT, "md5-abcd"), Verdict::Unparsed);
        assert_eq!(check_bytes(SCRIPT, ""), Verdict::Unparsed);
        assert!(!Verdict::Unparsed.is_valid());
    }

    #[test]
    fn test_check_map_against_precomputed_digests() {
        let map = build_sri_map(SCRIPT);
        let attr = IntegrityAttribute::for_data(Algorithm::Sha384, SCRIPT).to_string();

        assert_eq!(check_map(&map, &attr), Verdict::Valid);
        assert_eq!(check_map(&map, "sha384-AAAA"), Verdict::Mismatch);
        // an unparseable attribute still sees a complete map
        assert_eq!(map.len(), 3);
        assert_eq!(check_map(&map, "sha1-AAAA"), Verdict::Unparsed);
        assert_eq!(check_map(&map, &attr), check_bytes(SCRIPT, &attr));
    }

    #[test]
    fn test_verdict_validity() {
        assert!(Verdict::Valid.is_valid());
        assert!(Verdict::NotDeclared.is_valid());
        assert!(!Verdict::Mismatch.is_valid());
        assert!(!Verdict::Unparsed.is_valid());
    }

    #[tokio::test]
    async fn test_check_fetched_resource() {
        let attr = IntegrityAttribute::for_data(Algorithm::Sha512, SCRIPT).to_string();

        assert_eq!(checker().check(SCRIPT_URL, &attr).await.unwrap(), Verdict::Valid);
        assert!(checker().is_valid(SCRIPT_URL, &attr).await.unwrap());
    }

    #[tokio::test]
    async fn test_check_unsupported_is_not_error() {
        let verdict = checker().check(SCRIPT_URL, "md5-abcd").await.unwrap();
        assert_eq!(verdict, Verdict::Unparsed);
    }

    #[tokio::test]
    async fn test_check_missing_resource_is_error() {
        let err = checker()
            .check("https://cdn.example.com/missing.js", "sha384-abc")
            .await
            .unwrap_err();

        assert!(err.is_status());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.url(), Some("https://cdn.example.com/missing.js"));
    }

    #[test]
    fn test_check_is_idempotent() {
        let checker = checker();
        let attr = IntegrityAttribute::for_data(Algorithm::Sha256, SCRIPT).to_string();

        let first = tokio_test::block_on(checker.check(SCRIPT_URL, &attr)).unwrap();
        let second = tokio_test::block_on(checker.check(SCRIPT_URL, &attr)).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_generate_sri_map() {
        let map = checker().generate_sri_map(SCRIPT_URL).await.unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(Algorithm::Sha384), Algorithm::Sha384.digest(SCRIPT));
    }

    #[tokio::test]
    async fn test_no_caching() {
        let fetcher = Arc::new(MockFetcher::new().route(SCRIPT_URL, SCRIPT));
        let checker = IntegrityChecker::new(fetcher.clone());

        checker.check(SCRIPT_URL, "sha256-x").await.unwrap();
        checker.check(SCRIPT_URL, "sha256-x").await.unwrap();
        assert_eq!(fetcher.requested(), vec![SCRIPT_URL, SCRIPT_URL]);
    }
}
