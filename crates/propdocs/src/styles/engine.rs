use std::path::Path;

use indexmap::IndexMap;
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Argument, BindingPatternKind, Declaration, Expression, FunctionBody, ObjectExpression,
    ObjectPropertyKind, Program, Statement,
};
use serde::{Deserialize, Serialize};

use crate::error::{DocsError, Result};
use crate::parser::{ParseOptions, parse};
use crate::prop_types::property_key_name;

/// Breakpoint configuration the style definitions are evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Breakpoint name to minimum width in pixels, ascending.
    pub breakpoints: IndexMap<String, f64>,
    /// Gap subtracted (in hundredths of a pixel) from exclusive upper bounds.
    pub step: f64,
}

impl Default for Theme {
    fn default() -> Self {
        let breakpoints = [("xs", 0.0), ("sm", 600.0), ("md", 960.0), ("lg", 1280.0), ("xl", 1920.0)]
            .into_iter()
            .map(|(name, width)| (name.to_string(), width))
            .collect();
        Self {
            breakpoints,
            step: 5.0,
        }
    }
}

impl Theme {
    /// `theme.breakpoints.up(key)`.
    pub fn up(&self, key: &str) -> Option<String> {
        let width = self.breakpoints.get(key)?;
        Some(format!("@media (min-width:{width}px)"))
    }

    /// `theme.breakpoints.down(key)`: below the next breakpoint.
    pub fn down(&self, key: &str) -> Option<String> {
        let index = self.breakpoints.get_index_of(key)?;
        match self.breakpoints.get_index(index + 1) {
            Some((_, upper)) => Some(format!("@media (max-width:{}px)", self.exclusive(*upper))),
            None => self.up(self.breakpoints.get_index(0)?.0),
        }
    }

    /// `theme.breakpoints.between(start, end)`.
    pub fn between(&self, start: &str, end: &str) -> Option<String> {
        let lower = self.breakpoints.get(start)?;
        let end_index = self.breakpoints.get_index_of(end)?;
        match self.breakpoints.get_index(end_index + 1) {
            Some((_, upper)) => Some(format!(
                "@media (min-width:{lower}px) and (max-width:{}px)",
                self.exclusive(*upper)
            )),
            None => self.up(start),
        }
    }

    /// `theme.breakpoints.only(key)`.
    pub fn only(&self, key: &str) -> Option<String> {
        self.between(key, key)
    }

    fn exclusive(&self, width: f64) -> f64 {
        width - self.step / 100.0
    }
}

/// Where a style definition lives.
#[derive(Debug, Clone, Copy)]
pub struct StyleDefinition<'s> {
    /// File the source was read from.
    pub path: &'s Path,
    pub source: &'s str,
    /// Top-level binding holding the definition, usually `styles`.
    pub binding: &'s str,
}

/// Styling runtime seam: turns a style definition into its rule keys.
pub trait StyleEngine: Send + Sync {
    /// Top-level rule keys of the definition, in declaration order.
    fn rule_keys(&self, definition: &StyleDefinition<'_>, theme: &Theme) -> Result<Vec<String>>;
}

/// Evaluates style definitions without running them.
///
/// Understands object literals, functions returning object literals and
/// `createStyles(...)`. Computed `theme.breakpoints.*(...)` keys resolve to
/// their `@media` query; other computed keys and spreads are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticStyleEngine;

impl StyleEngine for StaticStyleEngine {
    fn rule_keys(&self, definition: &StyleDefinition<'_>, theme: &Theme) -> Result<Vec<String>> {
        let allocator = Allocator::default();
        let parsed = parse(
            &allocator,
            definition.path,
            definition.source,
            ParseOptions::from_path(definition.path),
        )?;

        let rules = find_definition(parsed.ast(), definition.binding).ok_or_else(|| {
            DocsError::StyleResolution {
                path: definition.path.to_path_buf(),
                message: format!("no `{}` style definition", definition.binding),
            }
        })?;

        let mut keys = Vec::new();
        for property in &rules.properties {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            if let Some(name) = property_key_name(&property.key) {
                keys.push(name);
            } else if let Some(query) = property
                .key
                .as_expression()
                .and_then(|key| media_query(key, theme))
            {
                keys.push(query);
            }
        }
        Ok(keys)
    }
}

fn find_definition<'b, 'a>(
    program: &'b Program<'a>,
    binding: &str,
) -> Option<&'b ObjectExpression<'a>> {
    program.body.iter().find_map(|statement| {
        let declaration = match statement {
            Statement::VariableDeclaration(declaration) => declaration,
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::VariableDeclaration(declaration)) => declaration,
                Some(Declaration::FunctionDeclaration(function))
                    if function.id.as_ref().is_some_and(|id| id.name == binding) =>
                {
                    return function.body.as_deref().and_then(returned_object);
                }
                _ => return None,
            },
            Statement::FunctionDeclaration(function)
                if function.id.as_ref().is_some_and(|id| id.name == binding) =>
            {
                return function.body.as_deref().and_then(returned_object);
            }
            _ => return None,
        };
        declaration.declarations.iter().find_map(|declarator| {
            let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind else {
                return None;
            };
            if ident.name != binding {
                return None;
            }
            declarator.init.as_ref().and_then(rule_object)
        })
    })
}

fn rule_object<'b, 'a>(expression: &'b Expression<'a>) -> Option<&'b ObjectExpression<'a>> {
    match expression.without_parentheses() {
        Expression::ObjectExpression(object) => Some(object),
        Expression::ArrowFunctionExpression(arrow) if arrow.expression => {
            match arrow.body.statements.first()? {
                Statement::ExpressionStatement(statement) => rule_object(&statement.expression),
                _ => None,
            }
        }
        Expression::ArrowFunctionExpression(arrow) => returned_object(&arrow.body),
        Expression::FunctionExpression(function) => {
            function.body.as_deref().and_then(returned_object)
        }
        Expression::CallExpression(call)
            if matches!(&call.callee, Expression::Identifier(ident) if ident.name == "createStyles") =>
        {
            call.arguments
                .first()
                .and_then(Argument::as_expression)
                .and_then(rule_object)
        }
        _ => None,
    }
}

fn returned_object<'b, 'a>(body: &'b FunctionBody<'a>) -> Option<&'b ObjectExpression<'a>> {
    body.statements.iter().find_map(|statement| match statement {
        Statement::ReturnStatement(ret) => ret.argument.as_ref().and_then(rule_object),
        _ => None,
    })
}

/// `[theme.breakpoints.up('sm')]` and friends.
fn media_query(key: &Expression<'_>, theme: &Theme) -> Option<String> {
    let Expression::CallExpression(call) = key.without_parentheses() else {
        return None;
    };
    let Expression::StaticMemberExpression(callee) = call.callee.without_parentheses() else {
        return None;
    };
    let Expression::StaticMemberExpression(breakpoints) = callee.object.without_parentheses()
    else {
        return None;
    };
    if breakpoints.property.name != "breakpoints" {
        return None;
    }

    let arguments: Vec<&str> = call
        .arguments
        .iter()
        .filter_map(Argument::as_expression)
        .filter_map(|argument| match argument.without_parentheses() {
            Expression::StringLiteral(lit) => Some(lit.value.as_str()),
            _ => None,
        })
        .collect();

    match (callee.property.name.as_str(), arguments.as_slice()) {
        ("up", [key]) => theme.up(key),
        ("down", [key]) => theme.down(key),
        ("only", [key]) => theme.only(key),
        ("between", [start, end]) => theme.between(start, end),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(source: &str) -> Vec<String> {
        StaticStyleEngine
            .rule_keys(
                &StyleDefinition {
                    path: Path::new("Button.js"),
                    source,
                    binding: "styles",
                },
                &Theme::default(),
            )
            .unwrap()
    }

    #[test]
    fn theme_breakpoints() {
        let theme = Theme::default();
        assert_eq!(theme.up("sm").as_deref(), Some("@media (min-width:600px)"));
        assert_eq!(theme.down("sm").as_deref(), Some("@media (max-width:959.95px)"));
        assert_eq!(theme.down("xl").as_deref(), Some("@media (min-width:0px)"));
        assert_eq!(
            theme.only("md").as_deref(),
            Some("@media (min-width:960px) and (max-width:1279.95px)")
        );
        assert!(theme.up("xxl").is_none());
    }

    #[test]
    fn arrow_definition_with_breakpoint_key() {
        let found = keys(
            "export const styles = (theme) => ({\n  root: { padding: 8 },\n  [theme.breakpoints.up('sm')]: { padding: 16 },\n  'label': {},\n});\n",
        );
        assert_eq!(found, vec!["root", "@media (min-width:600px)", "label"]);
    }

    #[test]
    fn block_bodies_and_create_styles() {
        let found = keys(
            "const styles = function (theme) {\n  const gap = 4;\n  return createStyles({ root: {}, ...shared, disabled: {} });\n};\n",
        );
        assert_eq!(found, vec!["root", "disabled"]);
    }

    #[test]
    fn missing_binding_is_a_style_resolution_error() {
        let err = StaticStyleEngine
            .rule_keys(
                &StyleDefinition {
                    path: Path::new("Button.js"),
                    source: "export const other = {};",
                    binding: "styles",
                },
                &Theme::default(),
            )
            .unwrap_err();
        assert!(!err.is_fatal());
    }
}
