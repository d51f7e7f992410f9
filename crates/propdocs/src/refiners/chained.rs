use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{Argument, CallExpression, Expression};
use oxc_ast_visit::{Visit, walk};

use crate::error::{DocsError, Result};
use crate::model::{ComponentDoc, PropType};
use crate::parser::{ParseOptions, parse, slice_source};
use crate::prop_types::resolve_type;

use super::Refiner;

/// Callee that composes a base validator with extra checks.
pub const CHAIN_CALLEE: &str = "chainPropTypes";

/// Comment marker overriding the documented member types of a chain.
pub const CHAINED_MARKER: &str = "@chainedAs";

/// Normalizes `chainPropTypes(...)` validators into `chained{inner}`.
///
/// The inner type comes from a `@chainedAs ["string", "number"]` line or block
/// comment when one is present, else from the first argument of the
/// composition call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainedTypeRefiner;

impl Refiner for ChainedTypeRefiner {
    fn name(&self) -> &'static str {
        "chained-type"
    }

    fn refine(&self, mut doc: ComponentDoc) -> Result<ComponentDoc> {
        for (name, prop) in doc.props.iter_mut() {
            let Some(raw) = prop.ty.as_ref().and_then(PropType::custom_raw) else {
                continue;
            };
            if !raw.contains(CHAIN_CALLEE) {
                continue;
            }

            let inner = chained_inner(&doc.path, raw).map_err(|message| {
                DocsError::refinement(doc.path.clone(), name.as_str(), message)
            })?;

            prop.ty = Some(PropType::Chained {
                inner: Box::new(inner),
            });
        }
        Ok(doc)
    }
}

/// Inner type of a chained validator: the union named by its marker
/// comments (line or block), else the base validator of the call.
fn chained_inner(path: &Path, raw: &str) -> std::result::Result<PropType, String> {
    let wrapped = format!("({raw});");
    let allocator = Allocator::default();
    let parsed = parse(&allocator, path, &wrapped, ParseOptions::default())
        .map_err(|error| format!("cannot parse validator: {error}"))?;

    let markers: Vec<&str> = parsed
        .ast()
        .comments
        .iter()
        .map(|comment| slice_source(&wrapped, comment.content_span()))
        .filter(|text| text.contains(CHAINED_MARKER))
        .collect();
    if !markers.is_empty() {
        let mut members = Vec::new();
        for text in markers {
            members.extend(marker_members(text)?);
        }
        return Ok(PropType::Union {
            members: members.into_iter().map(PropType::primitive).collect(),
        });
    }

    let mut finder = ChainCallFinder {
        source: &wrapped,
        found: None,
    };
    finder.visit_program(parsed.ast());

    match finder.found {
        Some(Some(inner)) => Ok(inner),
        Some(None) => Err(format!("{CHAIN_CALLEE} call has no base validator")),
        None => Err(format!("no {CHAIN_CALLEE} call in validator")),
    }
}

/// JSON array following the marker inside one comment body.
fn marker_members(comment: &str) -> std::result::Result<Vec<String>, String> {
    let after = comment
        .split_once(CHAINED_MARKER)
        .map_or("", |(_, after)| after);
    let body = after
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .collect::<Vec<_>>()
        .join(" ");
    serde_json::from_str(body.trim())
        .map_err(|error| format!("malformed {CHAINED_MARKER} marker: {error}"))
}

/// Finds the outermost composition call and resolves its first argument.
struct ChainCallFinder<'s> {
    source: &'s str,
    found: Option<Option<PropType>>,
}

impl<'a> Visit<'a> for ChainCallFinder<'_> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if self.found.is_some() {
            return;
        }
        if matches!(call.callee.without_parentheses(), Expression::Identifier(ident) if ident.name == CHAIN_CALLEE)
        {
            self.found = Some(
                call.arguments
                    .first()
                    .and_then(Argument::as_expression)
                    .map(|base| resolve_type(base, self.source)),
            );
            return;
        }
        walk::walk_call_expression(self, call);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropDescriptor;

    fn doc_with(raw: &str) -> ComponentDoc {
        let mut doc = ComponentDoc::new("Tabs.js");
        doc.props.insert(
            "value".into(),
            PropDescriptor {
                ty: Some(PropType::Custom { raw: raw.into() }),
                ..PropDescriptor::default()
            },
        );
        doc
    }

    #[test]
    fn marker_wins_over_the_call() {
        let doc = doc_with(
            "chainPropTypes(/* @chainedAs [\"string\", \"number\"] */ PropTypes.any, props => null)",
        );
        let refined = ChainedTypeRefiner.refine(doc).unwrap();
        assert_eq!(
            refined.props["value"].ty,
            Some(PropType::Chained {
                inner: Box::new(PropType::Union {
                    members: vec![PropType::primitive("string"), PropType::primitive("number")],
                }),
            })
        );
    }

    #[test]
    fn line_comment_markers() {
        let doc = doc_with(
            "chainPropTypes(\n  // @chainedAs [\"string\", \"number\"]\n  PropTypes.any,\n  (props) => null,\n)",
        );
        let refined = ChainedTypeRefiner.refine(doc).unwrap();
        assert_eq!(
            refined.props["value"].ty,
            Some(PropType::Chained {
                inner: Box::new(PropType::Union {
                    members: vec![PropType::primitive("string"), PropType::primitive("number")],
                }),
            })
        );
    }

    #[test]
    fn both_strategies_agree_on_unions() {
        let marked = ChainedTypeRefiner
            .refine(doc_with(
                "chainPropTypes(/* @chainedAs [\"string\", \"number\"] */ PropTypes.any, props => null)",
            ))
            .unwrap();
        let inferred = ChainedTypeRefiner
            .refine(doc_with(
                "chainPropTypes(PropTypes.oneOfType([PropTypes.string, PropTypes.number]), props => null)",
            ))
            .unwrap();

        assert_eq!(marked.props["value"].ty, inferred.props["value"].ty);
        assert!(matches!(
            &marked.props["value"].ty,
            Some(PropType::Chained { inner }) if matches!(**inner, PropType::Union { .. })
        ));
    }

    #[test]
    fn falls_back_to_the_first_argument() {
        let doc = doc_with("chainPropTypes(PropTypes.oneOf(['a', 'b']), props => null)");
        let refined = ChainedTypeRefiner.refine(doc).unwrap();
        let Some(PropType::Chained { inner }) = &refined.props["value"].ty else {
            panic!("expected a chained type");
        };
        assert!(matches!(**inner, PropType::Enum { .. }));
    }

    #[test]
    fn malformed_marker_names_the_prop() {
        let doc = doc_with("chainPropTypes(/* @chainedAs [string */ PropTypes.any, check)");
        let err = ChainedTypeRefiner.refine(doc).unwrap_err();
        assert!(matches!(err, DocsError::Refinement { ref prop, .. } if prop == "value"));
    }

    #[test]
    fn other_custom_validators_are_untouched() {
        let doc = doc_with("refType");
        let refined = ChainedTypeRefiner.refine(doc.clone()).unwrap();
        assert_eq!(refined, doc);
    }
}
