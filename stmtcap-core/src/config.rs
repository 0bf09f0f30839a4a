//! Rule configuration and schema validation
//!
//! Options arrive in the positional JSON form linters pass to a rule:
//! `[max_statements, { "ignoreTopLevelFunctions": bool }]`. All shape, type,
//! and range errors are fatal here, before any traversal begins; the rule
//! itself never validates mid-run.

use anyhow::{bail, Result};
use serde_json::Value;

/// Default statement cap when no options are supplied
pub const DEFAULT_MAX_STATEMENTS: usize = 10;

/// Immutable configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    /// Maximum number of statements allowed directly in a function body
    pub max_statements: usize,
    /// Exempt a sole top-level function from the cap
    pub ignore_top_level_functions: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_statements: DEFAULT_MAX_STATEMENTS,
            ignore_top_level_functions: false,
        }
    }
}

impl RuleConfig {
    /// Build a configuration from positional rule options
    ///
    /// Accepted shapes:
    /// - `null` or `[]` - defaults
    /// - `[n]` - threshold only, `n` a non-negative integer
    /// - `[n, { "ignoreTopLevelFunctions": bool }]`
    ///
    /// Any other shape is rejected: a non-array value, a negative or
    /// non-integer threshold, a non-object second entry, unknown option
    /// keys, a non-boolean flag, or more than two entries.
    pub fn from_options(options: &Value) -> Result<Self> {
        let entries = match options {
            Value::Null => return Ok(Self::default()),
            Value::Array(entries) => entries,
            other => bail!("rule options must be an array (got {})", other),
        };

        if entries.len() > 2 {
            bail!(
                "rule options accept at most 2 entries (got {})",
                entries.len()
            );
        }

        let mut config = Self::default();

        if let Some(first) = entries.first() {
            let Some(max) = first.as_u64() else {
                bail!(
                    "max statements must be a non-negative integer (got {})",
                    first
                );
            };
            config.max_statements = usize::try_from(max)
                .map_err(|_| anyhow::anyhow!("max statements is too large (got {})", max))?;
        }

        if let Some(second) = entries.get(1) {
            let Some(object) = second.as_object() else {
                bail!("second rule option must be an object (got {})", second);
            };

            for (key, value) in object {
                match key.as_str() {
                    "ignoreTopLevelFunctions" => {
                        let Some(flag) = value.as_bool() else {
                            bail!("ignoreTopLevelFunctions must be a boolean (got {})", value);
                        };
                        config.ignore_top_level_functions = flag;
                    }
                    other => bail!("unknown rule option key: {}", other),
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = RuleConfig::default();
        assert_eq!(config.max_statements, 10);
        assert!(!config.ignore_top_level_functions);
    }

    #[test]
    fn test_null_and_empty_options_use_defaults() {
        assert_eq!(
            RuleConfig::from_options(&Value::Null).unwrap(),
            RuleConfig::default()
        );
        assert_eq!(
            RuleConfig::from_options(&json!([])).unwrap(),
            RuleConfig::default()
        );
    }

    #[test]
    fn test_threshold_only() {
        let config = RuleConfig::from_options(&json!([5])).unwrap();
        assert_eq!(config.max_statements, 5);
        assert!(!config.ignore_top_level_functions);
    }

    #[test]
    fn test_threshold_zero_is_valid() {
        let config = RuleConfig::from_options(&json!([0])).unwrap();
        assert_eq!(config.max_statements, 0);
    }

    #[test]
    fn test_full_options() {
        let config =
            RuleConfig::from_options(&json!([15, { "ignoreTopLevelFunctions": true }])).unwrap();
        assert_eq!(config.max_statements, 15);
        assert!(config.ignore_top_level_functions);
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(RuleConfig::from_options(&json!({"max": 5})).is_err());
        assert!(RuleConfig::from_options(&json!(5)).is_err());
    }

    #[test]
    fn test_rejects_negative_threshold() {
        assert!(RuleConfig::from_options(&json!([-1])).is_err());
    }

    #[test]
    fn test_rejects_non_integer_threshold() {
        assert!(RuleConfig::from_options(&json!([2.5])).is_err());
        assert!(RuleConfig::from_options(&json!(["10"])).is_err());
        assert!(RuleConfig::from_options(&json!([true])).is_err());
    }

    #[test]
    fn test_rejects_unknown_option_key() {
        let result = RuleConfig::from_options(&json!([10, { "ignoreIIFE": true }]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ignoreIIFE"));
    }

    #[test]
    fn test_rejects_non_boolean_flag() {
        assert!(
            RuleConfig::from_options(&json!([10, { "ignoreTopLevelFunctions": "yes" }])).is_err()
        );
    }

    #[test]
    fn test_rejects_non_object_second_entry() {
        assert!(RuleConfig::from_options(&json!([10, true])).is_err());
    }

    #[test]
    fn test_rejects_extra_entries() {
        assert!(RuleConfig::from_options(&json!([10, {}, {}])).is_err());
    }
}
