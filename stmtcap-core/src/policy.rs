//! Evaluation policy for closed function scopes
//!
//! Decides, per closed scope, whether to evaluate immediately or defer for
//! the sole-top-level-function exemption, and performs the final threshold
//! comparison at traversal end.
//!
//! Global invariants enforced:
//! - Evaluation is deterministic (same input = same output)
//! - Each scope is evaluated at most once; no scope is revisited
//! - Deferred scopes are flushed exactly once, at traversal end

use crate::config::RuleConfig;
use crate::tracker::FunctionScope;
use swc_common::Span;

/// A raw violation produced during one module traversal
///
/// Carries the span rather than a resolved file/line so the core stays
/// independent of any particular source map; reporting resolves positions.
#[derive(Debug, Clone)]
pub struct StatementViolation {
    /// Function name (`None` for anonymous functions)
    pub name: Option<String>,
    /// Span of the offending function-like node
    pub span: Span,
    /// Number of statements directly in the function body
    pub count: usize,
    /// Configured maximum
    pub max: usize,
}

/// Collects violations for one module traversal
///
/// When `ignore_top_level_functions` is enabled, scopes that close at module
/// depth are held back; [`Reporter::finish`] applies the cardinality check
/// and flushes them.
pub struct Reporter<'a> {
    config: &'a RuleConfig,
    deferred_top_level: Vec<FunctionScope>,
    violations: Vec<StatementViolation>,
}

impl<'a> Reporter<'a> {
    pub fn new(config: &'a RuleConfig) -> Self {
        Self {
            config,
            deferred_top_level: Vec::new(),
            violations: Vec::new(),
        }
    }

    /// Handle a scope popped off the tracker stack
    ///
    /// `at_top_level` is true when the stack is empty immediately after the
    /// pop, i.e. the function was not nested inside another function.
    pub fn on_function_close(&mut self, scope: FunctionScope, at_top_level: bool) {
        if self.config.ignore_top_level_functions && at_top_level {
            self.deferred_top_level.push(scope);
        } else {
            self.evaluate(scope);
        }
    }

    /// Flush deferred top-level scopes and return all violations
    ///
    /// A single deferred top-level function is exempt (the
    /// whole-module-as-one-function pattern). Zero or two-or-more deferred
    /// scopes are evaluated normally, in traversal order.
    pub fn finish(mut self) -> Vec<StatementViolation> {
        if self.deferred_top_level.len() != 1 {
            let deferred = std::mem::take(&mut self.deferred_top_level);
            for scope in deferred {
                self.evaluate(scope);
            }
        }
        self.violations
    }

    fn evaluate(&mut self, scope: FunctionScope) {
        if scope.statement_count > self.config.max_statements {
            self.violations.push(StatementViolation {
                name: scope.name,
                span: scope.span,
                count: scope.statement_count,
                max: self.config.max_statements,
            });
        }
    }
}
