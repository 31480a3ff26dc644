// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use tabled::{settings::Style, Table, Tabled};

use crate::page::PageReport;

#[derive(Tabled)]
struct ScriptRow {
    #[tabled(rename = "ID")]
    id: usize,
    #[tabled(rename = "SRC")]
    src: String,
    #[tabled(rename = "Integrity")]
    integrity: String,
    #[tabled(rename = "Valid?")]
    valid: bool,
}

/// Table with one row per script include
pub fn render_table(report: &PageReport) -> String {
    if report.scripts.is_empty() {
        return format!("No script includes found on {}", report.page_url);
    }

    let rows: Vec<ScriptRow> = report
        .scripts
        .iter()
        .map(|r| ScriptRow {
            id: r.id,
            src: r.src.clone(),
            integrity: r.integrity.clone(),
            valid: r.valid,
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::VerificationResult;
    use crate::security::Verdict;

    fn report(scripts: Vec<VerificationResult>) -> PageReport {
        PageReport {
            page_url: "https://example.com/".to_string(),
            checked_at: chrono::Utc::now(),
            all_valid: scripts.iter().all(|r| r.valid),
            scripts,
        }
    }

    #[test]
    fn test_table_columns() {
        let table = render_table(&report(vec![
            VerificationResult {
                id: 0,
                src: "/app.js".to_string(),
                url: "https://example.com/app.js".to_string(),
                integrity: String::new(),
                verdict: Verdict::NotDeclared,
                valid: true,
            },
            VerificationResult {
                id: 1,
                src: "https://cdn.example.com/lib.js".to_string(),
                url: "https://cdn.example.com/lib.js".to_string(),
                integrity: "sha384-abc".to_string(),
                verdict: Verdict::Mismatch,
                valid: false,
            },
        ]));

        for header in ["ID", "SRC", "Integrity", "Valid?"] {
            assert!(table.contains(header), "missing header {}", header);
        }
        assert!(table.contains("/app.js"));
        assert!(table.contains("sha384-abc"));
        assert!(table.contains("true"));
        assert!(table.contains("false"));
    }

    #[test]
    fn test_empty_report() {
        let table = render_table(&report(vec![]));
        assert!(table.contains("No script includes"));
    }

    #[test]
    fn test_json_report() {
        let json = crate::output::render_json(&report(vec![])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["page_url"], "https://example.com/");
        assert_eq!(value["all_valid"], true);
    }
}
