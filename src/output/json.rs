// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::error::Result;
use crate::page::PageReport;

/// Pretty-printed JSON report
pub fn render_json(report: &PageReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
