//! Tests for the TypeScript/JavaScript parser

#[cfg(test)]
mod tests {
    use crate::parser;
    use swc_common::{sync::Lrc, SourceMap};

    fn parse_test(src: &str, filename: &str) -> Result<swc_ecma_ast::Module, anyhow::Error> {
        let cm: Lrc<SourceMap> = Default::default();
        parser::parse_source(src, &cm, filename)
    }

    #[test]
    fn test_parse_simple_function() {
        let src = "function foo() { return 42; }";
        let result = parse_test(src, "test.ts");
        assert!(result.is_ok(), "Should parse simple function");
    }

    #[test]
    fn test_parse_typescript_types() {
        let src = "function foo(x: number): number { return x * 2; }";
        let result = parse_test(src, "test.ts");
        assert!(result.is_ok(), "Should parse TypeScript types");
    }

    #[test]
    fn test_parse_plain_javascript() {
        let src = "function foo(x) { return x * 2; }";
        let result = parse_test(src, "test.js");
        assert!(result.is_ok(), "Should parse plain JavaScript");
    }

    #[test]
    fn test_parse_tsx_jsx_element() {
        let src = "function App() { return <div>hello</div>; }";
        let result = parse_test(src, "test.tsx");
        assert!(result.is_ok(), "Should parse JSX in .tsx files");
    }

    #[test]
    fn test_parse_rejects_jsx_in_plain_ts() {
        let src = "function foo() { return <div>hello</div>; }";
        let result = parse_test(src, "test.ts");
        // JSX syntax must fail to parse when tsx is disabled
        assert!(
            result.is_err(),
            "JSX syntax should cause parse error in plain .ts files"
        );
    }

    #[test]
    fn test_parse_interface_ignored() {
        // Interfaces should parse but contain no function bodies to lint
        let src = "interface Foo { bar: string; }";
        let result = parse_test(src, "test.ts");
        assert!(result.is_ok(), "Should parse interface");
    }

    #[test]
    fn test_parse_multiple_functions() {
        let src = r#"
            function foo() { return 1; }
            function bar() { return 2; }
        "#;
        let result = parse_test(src, "test.ts");
        assert!(result.is_ok(), "Should parse multiple functions");
    }
}
