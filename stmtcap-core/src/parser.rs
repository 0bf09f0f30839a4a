//! SWC front end for the lint
//!
//! Global invariants enforced:
//! - Deterministic parsing order
//! - Formatting, comments, and whitespace must not affect results

use anyhow::Result;
use swc_common::{sync::Lrc, FileName, SourceFile, SourceMap};
use swc_ecma_ast::{EsVersion, Module};
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax};

/// Pick the parser syntax from the file extension
fn syntax_for_file(filename: &str) -> Syntax {
    if filename.ends_with(".tsx") || filename.ends_with(".mtsx") || filename.ends_with(".ctsx") {
        // TypeScript with JSX (TSX)
        Syntax::Typescript(swc_ecma_parser::TsSyntax {
            tsx: true,
            decorators: false,
            dts: false,
            ..Default::default()
        })
    } else if filename.ends_with(".ts") || filename.ends_with(".mts") || filename.ends_with(".cts")
    {
        // TypeScript without JSX
        let is_dts = filename.ends_with(".d.ts");
        Syntax::Typescript(swc_ecma_parser::TsSyntax {
            tsx: false,
            decorators: false,
            dts: is_dts,
            ..Default::default()
        })
    } else if filename.ends_with(".jsx")
        || filename.ends_with(".mjsx")
        || filename.ends_with(".cjsx")
    {
        // JavaScript with JSX
        Syntax::Es(swc_ecma_parser::EsSyntax {
            jsx: true,
            decorators: false,
            ..Default::default()
        })
    } else {
        // Plain JavaScript (for .js, .mjs, .cjs)
        Syntax::Es(swc_ecma_parser::EsSyntax {
            jsx: false,
            decorators: false,
            ..Default::default()
        })
    }
}

/// Parse one source file into an AST module
///
/// The filename decides the dialect (see [`syntax_for_file`]): `.ts`-family
/// extensions parse as TypeScript (`.d.ts` in dts mode), `.tsx` as TSX,
/// `.jsx` as JavaScript with JSX, anything else as plain JavaScript.
/// Parse failures are errors carrying the filename.
pub fn parse_source(src: &str, source_map: &Lrc<SourceMap>, filename: &str) -> Result<Module> {
    let syntax = syntax_for_file(filename);

    // Create SourceFile for the source code
    let source_file: Lrc<SourceFile> = source_map.new_source_file(
        FileName::Custom(filename.into()).into(),
        src.to_string(),
    );

    // Create StringInput from SourceFile
    let input = StringInput::from(&*source_file);

    // Create lexer with detected syntax
    let lexer = Lexer::new(syntax, EsVersion::Es2022, input, None);

    // Create parser
    let mut parser = Parser::new_from(lexer);

    // Parse module
    parser.parse_module().map_err(|e| {
        let error_msg = e.kind().msg();
        anyhow::anyhow!("Parse error: {}", error_msg)
            .context(format!("Failed to parse source file: {}", filename))
    })
}

#[cfg(test)]
#[path = "parser/tests.rs"]
mod tests;
