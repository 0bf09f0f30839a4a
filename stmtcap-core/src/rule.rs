//! The max-statements rule: AST traversal and dispatch
//!
//! Global invariants enforced:
//! - Deterministic traversal in document order (pre-order enter, post-order exit)
//! - One push/pop pair per function-like node with a body
//! - Per-module state only; nothing is shared across files
//!
//! Function-like constructs tracked:
//! - Function declarations (`FnDecl`)
//! - Function expressions (`FnExpr`)
//! - Arrow functions (`ArrowExpr`)
//! - Class methods, getters, and setters (`ClassMethod`, `PrivateMethod`)
//! - Class constructors (`Constructor`)
//! - Object literal methods, getters, and setters (`MethodProp`,
//!   `GetterProp`, `SetterProp`)
//!
//! Bodyless constructs (overload signatures, ambient declarations) open no
//! scope. Arrow functions with expression bodies open a scope that counts
//! zero statements.

use crate::config::RuleConfig;
use crate::policy::{Reporter, StatementViolation};
use crate::tracker::ScopeStack;
use swc_ecma_ast::*;
use swc_ecma_visit::{Visit, VisitWith};

/// Run the rule over one parsed module
///
/// Owns one scope stack and one reporter per call: concurrent analyses of
/// different files must each call this independently.
pub fn check_module(module: &Module, config: &RuleConfig) -> Vec<StatementViolation> {
    let mut counter = StatementCounter {
        stack: ScopeStack::new(),
        reporter: Reporter::new(config),
    };

    module.visit_with(&mut counter);

    counter.reporter.finish()
}

/// Visitor maintaining the per-function statement counter stack
struct StatementCounter<'a> {
    stack: ScopeStack,
    reporter: Reporter<'a>,
}

impl StatementCounter<'_> {
    /// Close the innermost scope and hand it to the reporter
    ///
    /// Top-level status is decided by stack emptiness after the pop: only
    /// function scopes count toward nesting depth, so a method of a
    /// module-level class closes at depth 0.
    fn close_function(&mut self) {
        if let Some(scope) = self.stack.pop() {
            let at_top_level = self.stack.is_empty();
            self.reporter.on_function_close(scope, at_top_level);
        }
    }
}

impl Visit for StatementCounter<'_> {
    fn visit_fn_decl(&mut self, decl: &FnDecl) {
        // Overload signatures have no body and open no scope
        if decl.function.body.is_none() {
            decl.visit_children_with(self);
            return;
        }

        let name = Some(decl.ident.sym.to_string());
        self.stack.push(name, decl.function.span);
        decl.visit_children_with(self);
        self.close_function();
    }

    fn visit_fn_expr(&mut self, expr: &FnExpr) {
        if expr.function.body.is_none() {
            expr.visit_children_with(self);
            return;
        }

        // Name may be None for anonymous function expressions
        let name = expr.ident.as_ref().map(|id| id.sym.to_string());
        self.stack.push(name, expr.function.span);
        expr.visit_children_with(self);
        self.close_function();
    }

    fn visit_arrow_expr(&mut self, arrow: &ArrowExpr) {
        // Arrows always have a body; an expression body simply visits no
        // block, leaving the count at zero
        self.stack.push(None, arrow.span);
        arrow.visit_children_with(self);
        self.close_function();
    }

    fn visit_class_method(&mut self, method: &ClassMethod) {
        if method.function.body.is_none() {
            method.visit_children_with(self);
            return;
        }

        let name = prop_name(&method.key);
        self.stack.push(name, method.function.span);
        method.visit_children_with(self);
        self.close_function();
    }

    fn visit_private_method(&mut self, method: &PrivateMethod) {
        if method.function.body.is_none() {
            method.visit_children_with(self);
            return;
        }

        let name = Some(format!("#{}", method.key.name));
        self.stack.push(name, method.function.span);
        method.visit_children_with(self);
        self.close_function();
    }

    fn visit_constructor(&mut self, ctor: &Constructor) {
        // Ambient constructor signatures have no body and open no scope
        if ctor.body.is_none() {
            ctor.visit_children_with(self);
            return;
        }

        let name = prop_name(&ctor.key);
        self.stack.push(name, ctor.span);
        ctor.visit_children_with(self);
        self.close_function();
    }

    fn visit_getter_prop(&mut self, getter: &GetterProp) {
        if getter.body.is_none() {
            getter.visit_children_with(self);
            return;
        }

        let name = prop_name(&getter.key);
        self.stack.push(name, getter.span);
        getter.visit_children_with(self);
        self.close_function();
    }

    fn visit_setter_prop(&mut self, setter: &SetterProp) {
        if setter.body.is_none() {
            setter.visit_children_with(self);
            return;
        }

        let name = prop_name(&setter.key);
        self.stack.push(name, setter.span);
        setter.visit_children_with(self);
        self.close_function();
    }

    fn visit_method_prop(&mut self, method: &MethodProp) {
        if method.function.body.is_none() {
            method.visit_children_with(self);
            return;
        }

        let name = prop_name(&method.key);
        self.stack.push(name, method.function.span);
        method.visit_children_with(self);
        self.close_function();
    }

    fn visit_block_stmt(&mut self, block: &BlockStmt) {
        // Shallow count: direct children only. Nested blocks contribute
        // their own direct children when visited. A block reached at module
        // level (empty stack) is not tracked.
        self.stack.add_statements(block.stmts.len());
        block.visit_children_with(self);
    }
}

/// Extract a method name from a property key
fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(str_lit) => {
            // Wtf8Atom to String via to_atom_lossy (borrows when possible)
            Some(str_lit.value.to_atom_lossy().to_string())
        }
        PropName::Num(num) => Some(num.to_string()),
        _ => None,
    }
}
