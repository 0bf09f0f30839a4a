//! Analysis orchestration - ties together parsing, the rule, and reporting

use crate::config::RuleConfig;
use crate::parser;
use crate::report::ViolationReport;
use crate::rule;
use anyhow::{Context, Result};
use std::path::Path;
use swc_common::{sync::Lrc, SourceMap};

/// Analyze a TypeScript or JavaScript file
pub fn analyze_file(
    path: &Path,
    source_map: &Lrc<SourceMap>,
    config: &RuleConfig,
) -> Result<Vec<ViolationReport>> {
    // Read file
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    // Parse source file (TypeScript or JavaScript)
    let module = parser::parse_source(&src, source_map, &path.to_string_lossy())?;

    // Run the rule over the module
    let violations = rule::check_module(&module, config);

    // Resolve spans into file/line reports
    let file = path.to_string_lossy().to_string();
    let reports = violations
        .into_iter()
        .map(|violation| ViolationReport::new(violation, file.clone(), source_map))
        .collect();

    Ok(reports)
}
