//! Parser façade over OXC.
//!
//! Every pass that needs an AST (descriptor extraction, chained validators,
//! style definitions, conformance tests) goes through [`parse`], so source
//! type detection and diagnostic handling live in one place.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::{SourceType, Span};

use crate::error::{DocsError, Result};

/// Parse options for reading source code
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::jsx(),
        }
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type).
    ///
    /// Plain `.js` component files contain JSX, so anything OXC cannot
    /// classify falls back to JSX.
    pub fn from_path(path: &Path) -> Self {
        let source_type = SourceType::from_path(path).unwrap_or(SourceType::jsx());
        let source_type = if path.extension().is_some_and(|ext| ext == "js") {
            SourceType::jsx()
        } else {
            source_type
        };
        Self { source_type }
    }
}

/// Parsed program with AST and original source
pub struct ParsedProgram<'a> {
    /// The parsed AST program
    pub program: Program<'a>,
    /// Original source text
    pub source_text: &'a str,
}

impl<'a> ParsedProgram<'a> {
    /// Get the program AST
    pub fn ast(&self) -> &Program<'a> {
        &self.program
    }
}

/// Parse source code into an AST.
///
/// Any parser diagnostic is reported as [`DocsError::Parse`] against `path`;
/// partial ASTs are never handed to the extractors.
pub fn parse<'a>(
    allocator: &'a Allocator,
    path: &Path,
    source: &'a str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    if result.panicked || !result.errors.is_empty() {
        let diagnostics: Vec<String> = result
            .errors
            .iter()
            .map(|err| err.to_string())
            .collect();
        let diagnostics = if diagnostics.is_empty() {
            vec!["parser aborted".to_string()]
        } else {
            diagnostics
        };
        return Err(DocsError::parse_error(path.to_path_buf(), &diagnostics));
    }

    Ok(ParsedProgram {
        program: result.program,
        source_text: source,
    })
}

/// Source text covered by `span`.
pub fn slice_source(source: &str, span: Span) -> &str {
    let start = span.start as usize;
    let end = span.end as usize;
    &source[start..end]
}
