// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page scanning and page-level verdicts

mod aggregator;
mod scanner;

pub use aggregator::{PageIntegrity, PageReport, VerificationResult};
pub use scanner::{extract_scripts, PageScanner, PageScript};
