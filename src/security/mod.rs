// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Subresource Integrity verification
//!
//! - Digest computation and digest maps
//! - `integrity` attribute parsing
//! - Per-resource checking

mod checker;
mod integrity;
mod sri;

pub use checker::{check_bytes, check_map, IntegrityChecker, Verdict};
pub use integrity::IntegrityAttribute;
pub use sri::{build_sri_map, digest_named, Algorithm, DigestMap};
