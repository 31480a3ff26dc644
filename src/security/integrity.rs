// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! `integrity` attribute parsing

use std::fmt;

use serde::{Deserialize, Serialize};

use super::sri::Algorithm;

/// A parsed `<algorithm>-<base64-digest>` attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityAttribute {
    /// Declared algorithm
    pub algorithm: Algorithm,
    /// Declared digest, verbatim
    pub digest: String,
}

impl IntegrityAttribute {
    /// Parse an attribute value.
    ///
    /// Splits on the first `-` only, so the digest keeps any later `-`.
    /// Returns `None` when there is no separator or the algorithm token is
    /// not supported. Tokens are matched exactly: no trimming, no case
    /// folding, a single hash expression.
    pub fn parse(attribute: &str) -> Option<Self> {
        let (algorithm, digest) = attribute.split_once('-')?;
        let algorithm = Algorithm::from_name(algorithm)?;

        Some(Self {
            algorithm,
            digest: digest.to_string(),
        })
    }

    /// Build the attribute for `data` under `algorithm`
    pub fn for_data(algorithm: Algorithm, data: &[u8]) -> Self {
        Self {
            algorithm,
            digest: algorithm.digest(data),
        }
    }
}

impl fmt::Display for IntegrityAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.algorithm, self.digest)
    }
}
