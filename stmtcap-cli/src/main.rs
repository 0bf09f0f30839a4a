//! Stmtcap CLI - command-line interface for the max-statements lint

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output
// - Configuration errors are fatal before any file is analyzed

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use stmtcap_core::{analyze, render_json, render_text, RuleConfig};

#[derive(Parser)]
#[command(name = "stmtcap")]
#[command(about = "Flags functions with more statements than a configured maximum")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check TypeScript or JavaScript files
    Check {
        /// Path to a source file or directory
        path: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Maximum number of statements allowed per function body
        #[arg(long)]
        max: Option<usize>,

        /// Exempt a sole top-level function from the cap
        #[arg(long)]
        ignore_top_level_functions: bool,

        /// Rule options as positional JSON, e.g. '[10, {"ignoreTopLevelFunctions": true}]'
        /// CLI flags take precedence over values given here
        #[arg(long)]
        options: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            format,
            max,
            ignore_top_level_functions,
            options,
        } => {
            // Build configuration before touching any file
            let config = build_config(max, ignore_top_level_functions, options.as_deref())?;

            // Normalize path to absolute
            let normalized_path = if path.is_relative() {
                std::env::current_dir()?.join(&path)
            } else {
                path
            };

            // Validate path exists
            if !normalized_path.exists() {
                anyhow::bail!("Path does not exist: {}", normalized_path.display());
            }

            // Analyze
            let reports = analyze(&normalized_path, &config)?;

            // Render output
            match format {
                OutputFormat::Text => {
                    print!("{}", render_text(&reports));
                }
                OutputFormat::Json => {
                    println!("{}", render_json(&reports));
                }
            }

            if reports.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Resolve the rule configuration from --options JSON and CLI flags
///
/// The positional options string goes through the same schema validation a
/// host linter would apply; flags override its values afterwards.
fn build_config(
    max: Option<usize>,
    ignore_top_level_functions: bool,
    options: Option<&str>,
) -> anyhow::Result<RuleConfig> {
    let mut config = match options {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("failed to parse --options as JSON")?;
            RuleConfig::from_options(&value).context("invalid rule options")?
        }
        None => RuleConfig::default(),
    };

    if let Some(max) = max {
        config.max_statements = max;
    }
    if ignore_top_level_functions {
        config.ignore_top_level_functions = true;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(None, false, None).unwrap();
        assert_eq!(config, RuleConfig::default());
    }

    #[test]
    fn test_build_config_flags_override_options() {
        let config = build_config(
            Some(5),
            false,
            Some(r#"[20, {"ignoreTopLevelFunctions": true}]"#),
        )
        .unwrap();
        assert_eq!(config.max_statements, 5);
        assert!(config.ignore_top_level_functions);
    }

    #[test]
    fn test_build_config_rejects_malformed_options() {
        assert!(build_config(None, false, Some("not json")).is_err());
        assert!(build_config(None, false, Some("[-1]")).is_err());
        assert!(build_config(None, false, Some(r#"[10, {"unknown": 1}]"#)).is_err());
    }
}
