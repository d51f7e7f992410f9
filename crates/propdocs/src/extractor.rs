use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Argument, ArrowFunctionExpression, AssignmentTarget, BindingPatternKind, Class, ClassElement,
    Comment, Declaration, ExportDefaultDeclaration, ExportDefaultDeclarationKind, Expression,
    FormalParameters, Function, FunctionBody, ObjectExpression, ObjectPattern, ObjectPropertyKind,
    Statement, VariableDeclaration,
};
use oxc_span::GetSpan;
use rustc_hash::FxHashMap;

use crate::error::{DocsError, Result};
use crate::jsdoc::clean_comment;
use crate::model::{ComponentDoc, DefaultValue, PropDescriptor, StyleOptions};
use crate::parser::{ParseOptions, parse, slice_source};
use crate::prop_types::{self, is_computed, property_key_name};

/// Markers that exclude a whole component from the API pages.
const SKIP_MARKERS: &[&str] = &["@ignore - internal component.", "@ignore - do not document."];

/// Whether the component opted out of documentation altogether.
pub fn is_undocumented(source: &str) -> bool {
    SKIP_MARKERS.iter().any(|marker| source.contains(marker))
}

/// Extracts raw prop descriptors from component modules using OXC.
///
/// The extractor recognizes one component per file: the binding that owns
/// an `X.propTypes = {...}` assignment, preferring the one reached from the
/// default export.
#[derive(Debug, Clone, Default)]
pub struct DescriptorExtractor;

impl DescriptorExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract descriptors from a file on disk.
    pub fn extract_from_path(&self, path: impl AsRef<Path>) -> Result<ComponentDoc> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|error| DocsError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        self.extract_from_source(path, &source)
    }

    /// Extract descriptors from an in-memory source string.
    pub fn extract_from_source(&self, path: impl AsRef<Path>, source: &str) -> Result<ComponentDoc> {
        let path = path.as_ref();
        let allocator = Allocator::default();
        let parsed = parse(&allocator, path, source, ParseOptions::from_path(path))?;
        let program = parsed.ast();
        let comments = build_comment_map(program.comments.iter());

        let mut scan = ModuleScan::default();
        for statement in &program.body {
            scan.statement(statement);
        }

        let mut doc = ComponentDoc::new(path);
        let binding = scan.component_binding();

        if let Some(object) = binding.as_deref().and_then(|name| scan.prop_types_of(name)) {
            for property in &object.properties {
                let ObjectPropertyKind::ObjectProperty(property) = property else {
                    continue;
                };
                let Some(name) = property_key_name(&property.key) else {
                    continue;
                };
                let resolved = prop_types::resolve(&property.value, source);
                let raw = comments.text(property.span.start, source);
                doc.props.insert(
                    name,
                    PropDescriptor {
                        ty: Some(resolved.ty),
                        required: resolved.required,
                        default_value: None,
                        description: Some(raw.map(clean_comment).unwrap_or_default()),
                        tags: Vec::new(),
                        doc_comment: raw.map(str::to_string),
                    },
                );
            }
        }

        for (owner, object) in &scan.default_props {
            if binding.as_deref() != Some(owner.as_str()) {
                continue;
            }
            for property in &object.properties {
                let ObjectPropertyKind::ObjectProperty(property) = property else {
                    continue;
                };
                let Some(name) = property_key_name(&property.key) else {
                    continue;
                };
                let default = DefaultValue {
                    value: slice_source(source, property.value.span()).to_string(),
                    computed: is_computed(&property.value),
                };
                doc.props.entry(name).or_default().default_value = Some(default);
            }
        }

        let declared = binding
            .as_deref()
            .and_then(|name| scan.declarations.get(name));
        if let Some(render) = declared.and_then(|declared| declared.render.as_ref()) {
            doc.facts.destructured_defaults = render.destructured_defaults(source);
        }

        let description = declared
            .and_then(|declared| comments.text(declared.statement_start, source))
            .or_else(|| {
                scan.default_export
                    .as_ref()
                    .and_then(|default| comments.text(default.statement_start, source))
            });
        doc.description = description.map(clean_comment).unwrap_or_default();

        doc.facts.style_options = scan
            .default_export
            .as_ref()
            .and_then(|default| default.style_options.clone());
        doc.binding = binding;

        Ok(doc)
    }
}

struct CommentMap<'b> {
    by_target: FxHashMap<u32, &'b Comment>,
}

impl CommentMap<'_> {
    /// JSDoc text attached to the node starting at `start`.
    fn text<'s>(&self, start: u32, source: &'s str) -> Option<&'s str> {
        self.by_target
            .get(&start)
            .map(|comment| slice_source(source, comment.content_span()))
    }
}

fn build_comment_map<'b, I>(comments: I) -> CommentMap<'b>
where
    I: IntoIterator<Item = &'b Comment>,
{
    let mut by_target = FxHashMap::default();
    for comment in comments {
        if comment.is_jsdoc() {
            by_target.insert(comment.attached_to, comment);
        }
    }
    CommentMap { by_target }
}

/// Function-like node that renders the component.
enum RenderFn<'b, 'a> {
    Function(&'b Function<'a>),
    Arrow(&'b ArrowFunctionExpression<'a>),
    Class(&'b Class<'a>),
}

impl RenderFn<'_, '_> {
    /// Defaults declared by destructuring the props object.
    fn destructured_defaults(&self, source: &str) -> IndexMap<String, DefaultValue> {
        let mut defaults = IndexMap::new();
        let (params, body): (Option<&FormalParameters<'_>>, Option<&FunctionBody<'_>>) = match self
        {
            Self::Function(function) => (Some(&*function.params), function.body.as_deref()),
            Self::Arrow(arrow) => (Some(&*arrow.params), Some(&*arrow.body)),
            Self::Class(class) => (None, render_method_body(class)),
        };

        let mut props_name = None;
        if let Some(first) = params.and_then(|params| params.items.first()) {
            match &first.pattern.kind {
                BindingPatternKind::ObjectPattern(pattern) => {
                    collect_pattern_defaults(pattern, source, &mut defaults);
                }
                BindingPatternKind::BindingIdentifier(ident) => {
                    props_name = Some(ident.name.as_str());
                }
                _ => {}
            }
        }

        for statement in body.iter().flat_map(|body| body.statements.iter()) {
            let Statement::VariableDeclaration(declaration) = statement else {
                continue;
            };
            for declarator in &declaration.declarations {
                let BindingPatternKind::ObjectPattern(pattern) = &declarator.id.kind else {
                    continue;
                };
                let Some(init) = &declarator.init else {
                    continue;
                };
                if destructures_props(init, props_name) {
                    collect_pattern_defaults(pattern, source, &mut defaults);
                }
            }
        }

        defaults
    }
}

fn render_method_body<'b, 'a>(class: &'b Class<'a>) -> Option<&'b FunctionBody<'a>> {
    class.body.body.iter().find_map(|element| match element {
        ClassElement::MethodDefinition(method)
            if property_key_name(&method.key).as_deref() == Some("render") =>
        {
            method.value.body.as_deref()
        }
        _ => None,
    })
}

/// `props`, `this.props`, or the render function's first parameter.
fn destructures_props(init: &Expression<'_>, props_name: Option<&str>) -> bool {
    match init.without_parentheses() {
        Expression::Identifier(ident) => props_name == Some(ident.name.as_str()),
        Expression::StaticMemberExpression(member) => {
            member.property.name == "props"
                && matches!(member.object.without_parentheses(), Expression::ThisExpression(_))
        }
        _ => false,
    }
}

fn collect_pattern_defaults(
    pattern: &ObjectPattern<'_>,
    source: &str,
    defaults: &mut IndexMap<String, DefaultValue>,
) {
    for property in &pattern.properties {
        let BindingPatternKind::AssignmentPattern(assignment) = &property.value.kind else {
            continue;
        };
        let Some(name) = property_key_name(&property.key) else {
            continue;
        };
        defaults.entry(name).or_insert_with(|| DefaultValue {
            value: slice_source(source, assignment.right.span()).to_string(),
            computed: is_computed(&assignment.right),
        });
    }
}

struct Declared<'b, 'a> {
    statement_start: u32,
    render: Option<RenderFn<'b, 'a>>,
    init: Option<&'b Expression<'a>>,
}

struct DefaultExport {
    statement_start: u32,
    binding: Option<String>,
    style_options: Option<StyleOptions>,
}

/// Top-level facts gathered in one pass over the module body.
struct ModuleScan<'b, 'a> {
    prop_types: Vec<(String, &'b ObjectExpression<'a>)>,
    default_props: Vec<(String, &'b ObjectExpression<'a>)>,
    declarations: FxHashMap<String, Declared<'b, 'a>>,
    default_export: Option<DefaultExport>,
}

impl Default for ModuleScan<'_, '_> {
    fn default() -> Self {
        Self {
            prop_types: Vec::new(),
            default_props: Vec::new(),
            declarations: FxHashMap::default(),
            default_export: None,
        }
    }
}

impl<'b, 'a> ModuleScan<'b, 'a> {
    fn statement(&mut self, statement: &'b Statement<'a>) {
        let start = statement.span().start;
        match statement {
            Statement::ExpressionStatement(statement) => self.assignment(&statement.expression),
            Statement::VariableDeclaration(declaration) => self.variables(declaration, start),
            Statement::FunctionDeclaration(function) => {
                self.function(function, start);
            }
            Statement::ClassDeclaration(class) => {
                self.class(class, start);
            }
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::VariableDeclaration(declaration)) => {
                    self.variables(declaration, start);
                }
                Some(Declaration::FunctionDeclaration(function)) => {
                    self.function(function, start);
                }
                Some(Declaration::ClassDeclaration(class)) => {
                    self.class(class, start);
                }
                _ => {}
            },
            Statement::ExportDefaultDeclaration(export) => self.default_export(export),
            _ => {}
        }
    }

    /// `X.propTypes = {...}` and `X.defaultProps = {...}`.
    fn assignment(&mut self, expression: &'b Expression<'a>) {
        let Expression::AssignmentExpression(assignment) = expression.without_parentheses() else {
            return;
        };
        let AssignmentTarget::StaticMemberExpression(member) = &assignment.left else {
            return;
        };
        let Expression::Identifier(owner) = &member.object else {
            return;
        };
        let Some(object) = object_literal(&assignment.right) else {
            return;
        };
        let owner = owner.name.to_string();
        match member.property.name.as_str() {
            "propTypes" => self.prop_types.push((owner, object)),
            "defaultProps" => self.default_props.push((owner, object)),
            _ => {}
        }
    }

    fn variables(&mut self, declaration: &'b VariableDeclaration<'a>, start: u32) {
        for declarator in &declaration.declarations {
            let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind else {
                continue;
            };
            let render = declarator.init.as_ref().and_then(render_fn);
            self.declare(ident.name.to_string(), start, render, declarator.init.as_ref());
        }
    }

    fn function(&mut self, function: &'b Function<'a>, start: u32) -> Option<String> {
        let name = function.id.as_ref()?.name.to_string();
        self.declare(name.clone(), start, Some(RenderFn::Function(function)), None);
        Some(name)
    }

    fn class(&mut self, class: &'b Class<'a>, start: u32) -> Option<String> {
        let name = class.id.as_ref()?.name.to_string();
        self.declare(name.clone(), start, Some(RenderFn::Class(class)), None);
        Some(name)
    }

    fn declare(
        &mut self,
        name: String,
        start: u32,
        render: Option<RenderFn<'b, 'a>>,
        init: Option<&'b Expression<'a>>,
    ) {
        self.declarations.entry(name).or_insert(Declared {
            statement_start: start,
            render,
            init,
        });
    }

    fn default_export(&mut self, export: &'b ExportDefaultDeclaration<'a>) {
        let start = export.span.start;
        let mut default = DefaultExport {
            statement_start: start,
            binding: None,
            style_options: None,
        };
        match &export.declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
                default.binding = self.function(function, start);
            }
            ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                default.binding = self.class(class, start);
            }
            kind => {
                if let Some(expression) = kind.as_expression() {
                    scan_export_chain(expression, &mut default);
                    self.resolve_exported_binding(expression, &mut default);
                }
            }
        }
        self.default_export = Some(default);
    }

    /// `const Styled = withStyles(...)(X); export default Styled;` scans the
    /// initializer of the exported binding as well.
    fn resolve_exported_binding(&self, expression: &Expression<'a>, default: &mut DefaultExport) {
        let Expression::Identifier(ident) = expression.without_parentheses() else {
            return;
        };
        let Some(init) = self
            .declarations
            .get(ident.name.as_str())
            .and_then(|declared| declared.init)
        else {
            return;
        };

        let mut resolved = DefaultExport {
            statement_start: default.statement_start,
            binding: None,
            style_options: None,
        };
        scan_export_chain(init, &mut resolved);
        if resolved.style_options.is_some() {
            default.style_options = resolved.style_options;
            default.binding = resolved.binding.or(default.binding.take());
        }
    }

    /// The documented component: the default export's binding when it owns
    /// `propTypes`, else the first `propTypes` owner.
    fn component_binding(&self) -> Option<String> {
        let exported = self
            .default_export
            .as_ref()
            .and_then(|default| default.binding.clone());
        if let Some(name) = &exported {
            if self.prop_types_of(name).is_some() {
                return exported;
            }
        }
        self.prop_types
            .first()
            .map(|(owner, _)| owner.clone())
            .or(exported)
    }

    fn prop_types_of(&self, name: &str) -> Option<&'b ObjectExpression<'a>> {
        self.prop_types
            .iter()
            .find(|(owner, _)| owner == name)
            .map(|(_, object)| *object)
    }
}

/// Object literal on the right of an assignment; `cond ? {...} : {}` uses
/// the consequent.
fn object_literal<'b, 'a>(expression: &'b Expression<'a>) -> Option<&'b ObjectExpression<'a>> {
    match expression.without_parentheses() {
        Expression::ObjectExpression(object) => Some(object),
        Expression::ConditionalExpression(conditional) => object_literal(&conditional.consequent),
        _ => None,
    }
}

fn render_fn<'b, 'a>(expression: &'b Expression<'a>) -> Option<RenderFn<'b, 'a>> {
    match expression.without_parentheses() {
        Expression::ArrowFunctionExpression(arrow) => Some(RenderFn::Arrow(arrow)),
        Expression::FunctionExpression(function) => Some(RenderFn::Function(function)),
        Expression::ClassExpression(class) => Some(RenderFn::Class(class)),
        // React.forwardRef(function X(props, ref) {...}), React.memo(...)
        Expression::CallExpression(call) => call
            .arguments
            .iter()
            .filter_map(Argument::as_expression)
            .find_map(render_fn),
        _ => None,
    }
}

/// Walks `hoc(options)(X)` chains for the component binding and the
/// `withStyles(styles, { name })` options.
fn scan_export_chain(expression: &Expression<'_>, default: &mut DefaultExport) {
    match expression.without_parentheses() {
        Expression::Identifier(ident) => {
            if default.binding.is_none() {
                default.binding = Some(ident.name.to_string());
            }
        }
        Expression::CallExpression(call) => {
            if callee_name(&call.callee) == Some("withStyles") {
                default.style_options = Some(style_options(&call.arguments));
                return;
            }
            for argument in call.arguments.iter().filter_map(Argument::as_expression) {
                scan_export_chain(argument, default);
            }
            scan_export_chain(&call.callee, default);
        }
        _ => {}
    }
}

fn callee_name<'b>(callee: &'b Expression<'_>) -> Option<&'b str> {
    match callee.without_parentheses() {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        _ => None,
    }
}

fn style_options(arguments: &[Argument<'_>]) -> StyleOptions {
    let mut arguments = arguments.iter().filter_map(Argument::as_expression);
    let styles_binding = arguments
        .next()
        .and_then(|styles| match styles.without_parentheses() {
            Expression::Identifier(ident) => Some(ident.name.to_string()),
            _ => None,
        });
    let sheet_name = arguments
        .next()
        .and_then(|options| match options.without_parentheses() {
            Expression::ObjectExpression(object) => string_property(object, "name"),
            _ => None,
        });
    StyleOptions {
        sheet_name,
        styles_binding,
    }
}

fn string_property(object: &ObjectExpression<'_>, key: &str) -> Option<String> {
    object.properties.iter().find_map(|property| {
        let ObjectPropertyKind::ObjectProperty(property) = property else {
            return None;
        };
        if property_key_name(&property.key).as_deref() != Some(key) {
            return None;
        }
        match property.value.without_parentheses() {
            Expression::StringLiteral(lit) => Some(lit.value.to_string()),
            _ => None,
        }
    })
}
