//! Resolution of `PropTypes` validator expressions into [`PropType`]s.

use indexmap::IndexMap;
use oxc_ast::ast::{Argument, ArrayExpressionElement, Expression, ObjectPropertyKind, PropertyKey};
use oxc_span::GetSpan;

use crate::model::{EnumValue, PropType, ShapeField};
use crate::parser::slice_source;

/// Validators that map one to one onto a primitive type name.
const PRIMITIVES: &[&str] = &[
    "any",
    "array",
    "bool",
    "func",
    "number",
    "object",
    "string",
    "symbol",
    "node",
    "element",
    "elementType",
];

/// A resolved validator expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub ty: PropType,
    pub required: bool,
}

/// Resolves a validator expression, unwrapping a trailing `.isRequired`.
pub fn resolve(expr: &Expression<'_>, source: &str) -> ResolvedType {
    let expr = expr.without_parentheses();
    if let Expression::StaticMemberExpression(member) = expr {
        if member.property.name == "isRequired" {
            return ResolvedType {
                ty: resolve_type(&member.object, source),
                required: true,
            };
        }
    }
    ResolvedType {
        ty: resolve_type(expr, source),
        required: false,
    }
}

/// Resolves a validator expression, ignoring `.isRequired`.
pub fn resolve_type(expr: &Expression<'_>, source: &str) -> PropType {
    let expr = expr.without_parentheses();
    let custom = || PropType::Custom {
        raw: slice_source(source, expr.span()).to_string(),
    };

    match expr {
        Expression::StaticMemberExpression(member) => {
            let name = member.property.name.as_str();
            if is_prop_types(&member.object) && PRIMITIVES.contains(&name) {
                PropType::primitive(name)
            } else if name == "isRequired" {
                resolve_type(&member.object, source)
            } else {
                custom()
            }
        }
        Expression::CallExpression(call) => {
            let Expression::StaticMemberExpression(callee) = call.callee.without_parentheses()
            else {
                return custom();
            };
            if !is_prop_types(&callee.object) {
                return custom();
            }
            let Some(argument) = call.arguments.first().and_then(Argument::as_expression) else {
                return custom();
            };
            let argument = argument.without_parentheses();

            match callee.property.name.as_str() {
                "oneOf" => match argument {
                    Expression::ArrayExpression(array) => PropType::Enum {
                        values: array
                            .elements
                            .iter()
                            .filter_map(ArrayExpressionElement::as_expression)
                            .map(|value| EnumValue {
                                value: slice_source(source, value.span()).to_string(),
                                computed: !is_literal(value),
                            })
                            .collect(),
                    },
                    _ => custom(),
                },
                "oneOfType" => match argument {
                    Expression::ArrayExpression(array) => PropType::Union {
                        members: array
                            .elements
                            .iter()
                            .filter_map(ArrayExpressionElement::as_expression)
                            .map(|member| resolve_type(member, source))
                            .collect(),
                    },
                    _ => custom(),
                },
                "arrayOf" => PropType::ArrayOf {
                    element: Box::new(resolve_type(argument, source)),
                },
                "objectOf" => PropType::ObjectOf {
                    value: Box::new(resolve_type(argument, source)),
                },
                "shape" | "exact" => match argument {
                    Expression::ObjectExpression(object) => {
                        let mut fields = IndexMap::new();
                        for property in &object.properties {
                            let ObjectPropertyKind::ObjectProperty(property) = property else {
                                continue;
                            };
                            let Some(name) = property_key_name(&property.key) else {
                                continue;
                            };
                            let resolved = resolve(&property.value, source);
                            fields.insert(
                                name,
                                ShapeField {
                                    ty: resolved.ty,
                                    required: resolved.required,
                                },
                            );
                        }
                        PropType::Shape { fields }
                    }
                    _ => custom(),
                },
                "instanceOf" => PropType::InstanceOf {
                    class_name: slice_source(source, argument.span()).to_string(),
                },
                _ => custom(),
            }
        }
        _ => custom(),
    }
}

/// Static name of an object key; computed keys yield `None`.
pub fn property_key_name(key: &PropertyKey<'_>) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.to_string()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.to_string()),
        PropertyKey::NumericLiteral(lit) => Some(lit.value.to_string()),
        _ => None,
    }
}

/// Whether an expression is a plain literal (its text is its value).
pub fn is_literal(expr: &Expression<'_>) -> bool {
    match expr.without_parentheses() {
        Expression::StringLiteral(_)
        | Expression::NumericLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::BigIntLiteral(_) => true,
        Expression::TemplateLiteral(template) => template.expressions.is_empty(),
        Expression::UnaryExpression(unary) => matches!(
            unary.argument.without_parentheses(),
            Expression::NumericLiteral(_)
        ),
        Expression::Identifier(ident) => ident.name == "undefined",
        _ => false,
    }
}

/// Whether a default expression refers to other bindings.
pub fn is_computed(expr: &Expression<'_>) -> bool {
    match expr.without_parentheses() {
        Expression::Identifier(ident) => ident.name != "undefined",
        Expression::StaticMemberExpression(_)
        | Expression::ComputedMemberExpression(_)
        | Expression::CallExpression(_)
        | Expression::NewExpression(_) => true,
        _ => false,
    }
}

fn is_prop_types(expr: &Expression<'_>) -> bool {
    matches!(expr.without_parentheses(), Expression::Identifier(ident) if ident.name == "PropTypes")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use oxc_allocator::Allocator;
    use oxc_ast::ast::Statement;

    use super::*;
    use crate::parser::{ParseOptions, parse};

    fn resolve_source(validator: &str) -> ResolvedType {
        let source = format!("({validator});");
        let allocator = Allocator::default();
        let parsed = parse(
            &allocator,
            Path::new("Validator.js"),
            &source,
            ParseOptions::default(),
        )
        .expect("validator parses");
        let Some(Statement::ExpressionStatement(statement)) = parsed.ast().body.first() else {
            panic!("expected an expression statement");
        };
        resolve(&statement.expression, &source)
    }

    #[test]
    fn primitive_and_required() {
        let resolved = resolve_source("PropTypes.node.isRequired");
        assert_eq!(resolved.ty, PropType::primitive("node"));
        assert!(resolved.required);

        let resolved = resolve_source("PropTypes.bool");
        assert_eq!(resolved.ty, PropType::primitive("bool"));
        assert!(!resolved.required);
    }

    #[test]
    fn enum_values_keep_quotes() {
        let resolved = resolve_source("PropTypes.oneOf(['small', 'medium', SIZE])");
        let PropType::Enum { values } = resolved.ty else {
            panic!("expected enum");
        };
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].value, "'small'");
        assert!(!values[0].computed);
        assert!(values[2].computed);
    }

    #[test]
    fn nested_union_and_shape() {
        let resolved = resolve_source(
            "PropTypes.oneOfType([PropTypes.string, PropTypes.shape({ current: PropTypes.object.isRequired })])",
        );
        let PropType::Union { members } = resolved.ty else {
            panic!("expected union");
        };
        assert_eq!(members[0], PropType::primitive("string"));
        let PropType::Shape { fields } = &members[1] else {
            panic!("expected shape");
        };
        assert!(fields["current"].required);
        assert_eq!(fields["current"].ty, PropType::primitive("object"));
    }

    #[test]
    fn unknown_validators_are_custom() {
        let resolved = resolve_source("chainPropTypes(PropTypes.node, () => null)");
        assert_eq!(
            resolved.ty.custom_raw(),
            Some("chainPropTypes(PropTypes.node, () => null)")
        );
    }
}
