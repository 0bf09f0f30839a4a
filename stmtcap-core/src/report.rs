//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs
//! - The violation message text is a stable contract

use crate::policy::StatementViolation;
use serde::{Deserialize, Serialize};

/// Violation report for one function, with resolved source position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ViolationReport {
    pub file: String,
    pub function: String,
    pub line: u32,
    pub count: usize,
    pub max: usize,
}

impl ViolationReport {
    /// Resolve a raw violation against the source map
    pub fn new(
        violation: StatementViolation,
        file: String,
        source_map: &swc_common::SourceMap,
    ) -> Self {
        let line = source_map.lookup_char_pos(violation.span.lo).line as u32;
        let function = violation
            .name
            .unwrap_or_else(|| format!("<anonymous>@{}:{}", file, line));

        ViolationReport {
            file,
            function,
            line,
            count: violation.count,
            max: violation.max,
        }
    }

    /// Render the stable violation message
    pub fn message(&self) -> String {
        format!(
            "This function has too many statements ({}). Maximum allowed is {}.",
            self.count, self.max
        )
    }
}

/// Sort reports deterministically
pub fn sort_reports(mut reports: Vec<ViolationReport>) -> Vec<ViolationReport> {
    reports.sort_by(|a, b| {
        // 1. File path ascending
        a.file
            .cmp(&b.file)
            // 2. Line number ascending
            .then_with(|| a.line.cmp(&b.line))
            // 3. Function name ascending
            .then_with(|| a.function.cmp(&b.function))
    });
    reports
}

/// Render reports as text output
pub fn render_text(reports: &[ViolationReport]) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!(
        "{:<24} {:<6} {:<30} {}\n",
        "FILE", "LINE", "FUNCTION", "MESSAGE"
    ));

    // Reports
    for report in reports {
        output.push_str(&format!(
            "{:<24} {:<6} {:<30} {}\n",
            truncate_or_pad(&report.file, 24),
            report.line,
            truncate_or_pad(&report.function, 30),
            report.message(),
        ));
    }

    output
}

/// Render reports as JSON output
pub fn render_json(reports: &[ViolationReport]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}

/// Truncate or pad string to fixed width
///
/// Truncation counts chars, not bytes: unicode identifiers are valid
/// source, so the cut must land on a char boundary.
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        format!("{:<width$}", s, width = width)
    }
}
