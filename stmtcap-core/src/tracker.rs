//! Traversal state tracking for the statement counter
//!
//! Global invariants enforced:
//! - One counter per currently-open function scope, innermost last
//! - The stack is empty exactly when traversal is at module level
//! - Statement counts are attributed to the innermost enclosing function only

use swc_common::Span;

/// One currently-open (or just-closed) function scope
///
/// Created when traversal enters a function-like node, mutated by every
/// statement block visited while it is the innermost open scope, and
/// destroyed when traversal exits the node.
#[derive(Debug, Clone)]
pub struct FunctionScope {
    /// Function name for reporting (`None` for anonymous functions)
    pub name: Option<String>,
    /// Span of the originating function-like node
    pub span: Span,
    /// Number of direct statements attributed so far
    pub statement_count: usize,
}

/// Stack of per-function statement counters, innermost last
///
/// Scopes are only ever accessed from the top: push on function enter,
/// increment the top on block enter, pop on function exit. Plain LIFO
/// access means a `Vec` is the whole data structure.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<FunctionScope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Open a new function scope with a zero statement count
    pub fn push(&mut self, name: Option<String>, span: Span) {
        self.scopes.push(FunctionScope {
            name,
            span,
            statement_count: 0,
        });
    }

    /// Attribute a block's direct-child statement count to the innermost
    /// open scope
    ///
    /// A block reached while the stack is empty belongs to module scope and
    /// is not tracked; that case is a silent no-op.
    pub fn add_statements(&mut self, n: usize) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.statement_count += n;
        }
    }

    /// Close the innermost scope and return it for evaluation
    pub fn pop(&mut self) -> Option<FunctionScope> {
        self.scopes.pop()
    }

    /// True when traversal is at module level (no open function scope)
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Number of currently-open function scopes
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_common::DUMMY_SP;

    #[test]
    fn test_push_opens_scope_at_zero() {
        let mut stack = ScopeStack::new();
        stack.push(Some("foo".to_string()), DUMMY_SP);

        assert_eq!(stack.depth(), 1);
        let scope = stack.pop().unwrap();
        assert_eq!(scope.statement_count, 0);
        assert_eq!(scope.name.as_deref(), Some("foo"));
    }

    #[test]
    fn test_add_statements_targets_innermost_scope() {
        let mut stack = ScopeStack::new();
        stack.push(Some("outer".to_string()), DUMMY_SP);
        stack.add_statements(2);
        stack.push(Some("inner".to_string()), DUMMY_SP);
        stack.add_statements(3);

        let inner = stack.pop().unwrap();
        assert_eq!(inner.statement_count, 3);

        // Outer scope keeps its own count only
        stack.add_statements(1);
        let outer = stack.pop().unwrap();
        assert_eq!(outer.statement_count, 3);
    }

    #[test]
    fn test_add_statements_on_empty_stack_is_noop() {
        let mut stack = ScopeStack::new();
        // Module-level blocks are visitable but not tracked
        stack.add_statements(5);
        assert!(stack.is_empty());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_counts_accumulate_across_blocks() {
        let mut stack = ScopeStack::new();
        stack.push(None, DUMMY_SP);
        stack.add_statements(4);
        stack.add_statements(2);
        stack.add_statements(0);

        let scope = stack.pop().unwrap();
        assert_eq!(scope.statement_count, 6);
        assert!(stack.is_empty());
    }
}
