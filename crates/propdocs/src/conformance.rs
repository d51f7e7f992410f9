//! Metadata from a component's conformance test.
//!
//! Tests call `describeConformance(<Button />, () => ({ inheritComponent:
//! ButtonBase, refInstanceof: window.HTMLButtonElement, ... }))`; the
//! options object says where the ref ends up and which component receives
//! the remaining props.

use std::fs;
use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Argument, CallExpression, Expression, FunctionBody, ObjectExpression, ObjectPropertyKind,
    Statement,
};
use oxc_ast_visit::{Visit, walk};
use oxc_span::GetSpan;
use tracing::warn;

use crate::error::{DocsError, Result};
use crate::parser::{ParseOptions, parse, slice_source};
use crate::prop_types::property_key_name;

const CONFORMANCE_CALLEE: &str = "describeConformance";
const TEST_EXTENSIONS: &[&str] = &["test.js", "test.tsx", "test.ts"];

/// What the conformance test declares about a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestInfo {
    /// `refInstanceof` without the `window.` prefix.
    pub forwards_ref_to: Option<String>,
    /// `inheritComponent` binding name.
    pub inherit_component: Option<String>,
}

/// Conformance test harness seam.
pub trait ConformanceSource: Send + Sync {
    /// Test metadata for the component at `component_path`; never fails,
    /// unknown components get the default.
    fn test_info(&self, component_path: &Path) -> TestInfo;
}

/// Reads `<dir>/<Name>.test.js` next to the component statically.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConformanceTestParser;

impl ConformanceTestParser {
    /// First existing test file for a component source.
    pub fn test_path(component_path: &Path) -> Option<PathBuf> {
        let stem = component_path.file_stem()?.to_string_lossy();
        let dir = component_path.parent()?;
        TEST_EXTENSIONS
            .iter()
            .map(|extension| dir.join(format!("{stem}.{extension}")))
            .find(|candidate| candidate.is_file())
    }

    /// Parses test source; no conformance call yields the default.
    pub fn parse_source(&self, path: &Path, source: &str) -> Result<TestInfo> {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, path, source, ParseOptions::from_path(path))?;
        let mut finder = ConformanceFinder {
            source,
            info: None,
        };
        finder.visit_program(parsed.ast());
        Ok(finder.info.unwrap_or_default())
    }

    fn read(&self, path: &Path) -> Result<TestInfo> {
        let source = fs::read_to_string(path).map_err(|error| DocsError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        self.parse_source(path, &source)
    }
}

impl ConformanceSource for ConformanceTestParser {
    fn test_info(&self, component_path: &Path) -> TestInfo {
        let Some(path) = Self::test_path(component_path) else {
            return TestInfo::default();
        };
        match self.read(&path) {
            Ok(info) => info,
            Err(error) => {
                warn!(test = %path.display(), %error, "ignoring unreadable conformance test");
                TestInfo::default()
            }
        }
    }
}

struct ConformanceFinder<'s> {
    source: &'s str,
    info: Option<TestInfo>,
}

impl<'a> Visit<'a> for ConformanceFinder<'_> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if self.info.is_some() {
            return;
        }
        if matches!(&call.callee, Expression::Identifier(ident) if ident.name == CONFORMANCE_CALLEE)
        {
            let options = call
                .arguments
                .get(1)
                .and_then(Argument::as_expression)
                .and_then(options_object);
            self.info = Some(options.map(|options| self.read_options(options)).unwrap_or_default());
            return;
        }
        walk::walk_call_expression(self, call);
    }
}

impl ConformanceFinder<'_> {
    fn read_options(&self, options: &ObjectExpression<'_>) -> TestInfo {
        let mut info = TestInfo::default();
        for property in &options.properties {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            match property_key_name(&property.key).as_deref() {
                Some("inheritComponent") => {
                    info.inherit_component = match property.value.without_parentheses() {
                        Expression::Identifier(ident) => Some(ident.name.to_string()),
                        Expression::StringLiteral(lit) => Some(lit.value.to_string()),
                        other => Some(slice_source(self.source, other.span()).to_string()),
                    };
                }
                Some("refInstanceof") => {
                    let text = slice_source(self.source, property.value.span());
                    info.forwards_ref_to =
                        Some(text.strip_prefix("window.").unwrap_or(text).to_string());
                }
                _ => {}
            }
        }
        info
    }
}

/// `() => ({...})`, `() => { return {...}; }` or a plain object.
fn options_object<'b, 'a>(expression: &'b Expression<'a>) -> Option<&'b ObjectExpression<'a>> {
    match expression.without_parentheses() {
        Expression::ObjectExpression(object) => Some(object),
        Expression::ArrowFunctionExpression(arrow) if arrow.expression => {
            match arrow.body.statements.first()? {
                Statement::ExpressionStatement(statement) => options_object(&statement.expression),
                _ => None,
            }
        }
        Expression::ArrowFunctionExpression(arrow) => returned_object(&arrow.body),
        Expression::FunctionExpression(function) => {
            function.body.as_deref().and_then(returned_object)
        }
        _ => None,
    }
}

fn returned_object<'b, 'a>(body: &'b FunctionBody<'a>) -> Option<&'b ObjectExpression<'a>> {
    body.statements.iter().find_map(|statement| match statement {
        Statement::ReturnStatement(ret) => ret.argument.as_ref().and_then(options_object),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const BUTTON_TEST: &str = r#"
import * as React from 'react';
import { createMount, describeConformance } from 'test/utils';
import Button from './Button';
import ButtonBase from '../ButtonBase';

describe('<Button />', () => {
  const mount = createMount();

  describeConformance(<Button>Conformance?</Button>, () => ({
    classes: {},
    inheritComponent: ButtonBase,
    mount,
    refInstanceof: window.HTMLButtonElement,
    skip: ['componentProp'],
  }));
});
"#;

    #[test]
    fn reads_inherit_component_and_ref_target() {
        let info = ConformanceTestParser
            .parse_source(Path::new("Button.test.js"), BUTTON_TEST)
            .unwrap();
        assert_eq!(info.inherit_component.as_deref(), Some("ButtonBase"));
        assert_eq!(info.forwards_ref_to.as_deref(), Some("HTMLButtonElement"));
    }

    #[test]
    fn react_component_refs_keep_their_namespace() {
        let source = "describeConformance(<Popover />, function () {\n  return { refInstanceof: React.Component };\n});\n";
        let info = ConformanceTestParser
            .parse_source(Path::new("Popover.test.js"), source)
            .unwrap();
        assert_eq!(info.forwards_ref_to.as_deref(), Some("React.Component"));
        assert_eq!(info.inherit_component, None);
    }

    #[test]
    fn missing_or_broken_tests_fall_back_to_default() {
        let dir = TempDir::new().unwrap();
        let component = dir.path().join("Badge").join("Badge.js");
        fs::create_dir_all(component.parent().unwrap()).unwrap();
        fs::write(&component, "export default function Badge() {}").unwrap();
        assert_eq!(ConformanceTestParser.test_info(&component), TestInfo::default());

        fs::write(dir.path().join("Badge").join("Badge.test.js"), "describe(<").unwrap();
        assert_eq!(ConformanceTestParser.test_info(&component), TestInfo::default());
    }

    #[test]
    fn finds_the_test_next_to_the_component() {
        let dir = TempDir::new().unwrap();
        let component = dir.path().join("Button.js");
        fs::write(&component, "").unwrap();
        fs::write(dir.path().join("Button.test.js"), BUTTON_TEST).unwrap();

        let info = ConformanceTestParser.test_info(&component);
        assert_eq!(info.inherit_component.as_deref(), Some("ButtonBase"));
    }
}
