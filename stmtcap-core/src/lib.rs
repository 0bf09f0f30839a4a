//! Stmtcap core library - the max-statements lint over TypeScript and JavaScript
//!
//! Flags functions whose body contains more direct statements than a
//! configured threshold, with an opt-in exemption for a sole top-level
//! function.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Analysis is strictly per-function
// - No global mutable state; traversal state is confined to one file's run
// - No randomness, clocks, threads, or async
// - Deterministic traversal order must be explicit
// - Formatting, comments, and whitespace must not affect results
// - Identical input yields byte-for-byte identical output

pub mod analysis;
pub mod config;
pub mod parser;
pub mod policy;
pub mod report;
pub mod rule;
pub mod tracker;

pub use config::RuleConfig;
pub use report::{render_json, render_text, sort_reports, ViolationReport};

use anyhow::{Context, Result};
use swc_common::{sync::Lrc, SourceMap};

/// Run the rule over a file or directory tree
pub fn analyze(path: &std::path::Path, config: &RuleConfig) -> Result<Vec<ViolationReport>> {
    let cm: Lrc<SourceMap> = Default::default();
    let mut all_reports = Vec::new();

    // Collect TypeScript and JavaScript files
    let source_files = collect_source_files(path)?;

    // Analyze each file with its own traversal state
    for file_path in source_files {
        let reports = analysis::analyze_file(&file_path, &cm, config)
            .with_context(|| format!("Failed to analyze file: {}", file_path.display()))?;
        all_reports.extend(reports);
    }

    // Sort deterministically
    Ok(sort_reports(all_reports))
}

/// True for extensions the lint accepts
///
/// TypeScript (`.ts`, `.mts`, `.cts`, excluding `.d.ts`), TSX, JavaScript
/// (`.js`, `.mjs`, `.cjs`), and JSX, with their module-variant spellings.
fn is_supported_source_file(filename: &str) -> bool {
    // Declaration files carry no function bodies worth counting
    let is_ts = (filename.ends_with(".ts")
        || filename.ends_with(".mts")
        || filename.ends_with(".cts"))
        && !filename.ends_with(".d.ts");

    let is_tsx =
        filename.ends_with(".tsx") || filename.ends_with(".mtsx") || filename.ends_with(".ctsx");

    let is_js =
        filename.ends_with(".js") || filename.ends_with(".mjs") || filename.ends_with(".cjs");

    let is_jsx =
        filename.ends_with(".jsx") || filename.ends_with(".mjsx") || filename.ends_with(".cjsx");

    is_ts || is_tsx || is_js || is_jsx
}

/// Gather lintable files under a path, a single file or a directory tree
fn collect_source_files(path: &std::path::Path) -> Result<Vec<std::path::PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() {
        if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
            if is_supported_source_file(filename) {
                files.push(path.to_path_buf());
            }
        }
    } else if path.is_dir() {
        collect_source_files_recursive(path, &mut files)?;
    }

    // Sort files for deterministic order
    files.sort();

    Ok(files)
}

/// Walk a directory, skipping `node_modules` and dot-directories
fn collect_source_files_recursive(
    dir: &std::path::Path,
    files: &mut Vec<std::path::PathBuf>,
) -> Result<()> {
    use std::ffi::OsStr;

    for entry_result in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry: std::fs::DirEntry = entry_result?;
        let path = entry.path();

        if path.is_dir() {
            // Skip node_modules and other common non-source directories
            if let Some(name) = path.file_name().and_then(|n: &OsStr| n.to_str()) {
                if name == "node_modules" || name.starts_with('.') {
                    continue;
                }
            }
            collect_source_files_recursive(&path, files)?;
        } else if path.is_file() {
            if let Some(filename) = path.file_name().and_then(|n: &OsStr| n.to_str()) {
                if is_supported_source_file(filename) {
                    files.push(path);
                }
            }
        }
    }

    Ok(())
}
