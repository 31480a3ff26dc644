// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Subresource Integrity digests
//!
//! SHA-2 digests of a payload, base64-encoded (standard alphabet, padded)
//! the way `integrity` attributes carry them.

use std::collections::BTreeMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};

/// SRI hash algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm. Anything else is rejected before use.
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha256, Algorithm::Sha384, Algorithm::Sha512];

    /// Token used in integrity attributes
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Look up an algorithm by its exact attribute token
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Base64 digest of `data`
    pub fn digest(&self, data: &[u8]) -> String {
        match self {
            Algorithm::Sha256 => BASE64.encode(Sha256::digest(data)),
            Algorithm::Sha384 => BASE64.encode(Sha384::digest(data)),
            Algorithm::Sha512 => BASE64.encode(Sha512::digest(data)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base64 digest of `data` under the algorithm named `algorithm`.
///
/// Returns an empty string for names outside [`Algorithm::ALL`].
pub fn digest_named(data: &[u8], algorithm: &str) -> String {
    Algorithm::from_name(algorithm)
        .map(|a| a.digest(data))
        .unwrap_or_default()
}

/// Digests of one payload under every supported algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DigestMap {
    entries: BTreeMap<Algorithm, String>,
}

impl DigestMap {
    /// Digest for an algorithm
    pub fn get(&self, algorithm: Algorithm) -> &str {
        self.entries
            .get(&algorithm)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Digest for an algorithm name, `None` when the name is unsupported
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        Algorithm::from_name(name).map(|a| self.get(a))
    }

    /// Number of entries (always one per supported algorithm)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in algorithm order
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &str)> {
        self.entries.iter().map(|(a, d)| (*a, d.as_str()))
    }

    /// Render each entry as an integrity attribute value, e.g. `sha384-...`
    pub fn sri_strings(&self) -> Vec<String> {
        self.iter()
            .map(|(algorithm, digest)| format!("{}-{}", algorithm, digest))
            .collect()
    }
}

/// Compute the digest map for `data`.
///
/// All three digests are computed up front, whichever one a later
/// comparison needs.
pub fn build_sri_map(data: &[u8]) -> DigestMap {
    let entries = Algorithm::ALL
        .into_iter()
        .map(|a| (a, a.digest(data)))
        .collect();

    DigestMap { entries }
}
