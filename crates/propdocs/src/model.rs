use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered prop map, keyed by prop name in declaration order.
pub type PropMap = IndexMap<String, PropDescriptor>;

/// One discovered component source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSource {
    /// Absolute path of the source file.
    pub path: PathBuf,
    /// Component name derived from the file stem.
    pub name: String,
}

impl ComponentSource {
    /// Creates a source record, deriving the name from the file stem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// Declared type of a prop, as recovered from its validator expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropType {
    /// `PropTypes.string`, `PropTypes.node`, ...
    Primitive { name: String },
    /// `PropTypes.oneOf([...])`.
    Enum { values: Vec<EnumValue> },
    /// `PropTypes.oneOfType([...])`.
    Union { members: Vec<PropType> },
    /// `PropTypes.arrayOf(...)`.
    ArrayOf { element: Box<PropType> },
    /// `PropTypes.objectOf(...)`.
    ObjectOf { value: Box<PropType> },
    /// `PropTypes.shape({...})` and `PropTypes.exact({...})`.
    Shape { fields: IndexMap<String, ShapeField> },
    /// `PropTypes.instanceOf(...)`.
    #[serde(rename_all = "camelCase")]
    InstanceOf { class_name: String },
    /// A composed validator, normalized by the chained-type refiner.
    Chained { inner: Box<PropType> },
    /// Any validator that is not recognized; `raw` is its source text.
    Custom { raw: String },
}

impl PropType {
    /// Shorthand for a primitive type.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive { name: name.into() }
    }

    /// Returns the raw validator source when this is a custom type.
    pub fn custom_raw(&self) -> Option<&str> {
        match self {
            Self::Custom { raw } => Some(raw),
            _ => None,
        }
    }
}

/// One literal of an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Literal source text, quotes included.
    pub value: String,
    /// `true` when the member is not a literal (an identifier, a call, ...).
    pub computed: bool,
}

/// One field of a shape type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeField {
    #[serde(rename = "type")]
    pub ty: PropType,
    pub required: bool,
}

/// Default value of a prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultValue {
    /// Source text of the default expression.
    pub value: String,
    /// `true` when the default is not a literal.
    pub computed: bool,
}

/// Structured representation of a JSDoc tag attached to a prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsDocTag {
    /// Tag identifier (e.g. `param`, `returns`, `ignore`).
    pub title: String,
    /// Optional identifier associated with the tag.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Optional type hint captured from the tag.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub type_hint: Option<String>,
    /// Arbitrary textual description.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl JsDocTag {
    /// Creates a new JSDoc tag record.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            name: None,
            type_hint: None,
            description: None,
        }
    }
}

/// Descriptor of one declared prop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDescriptor {
    /// Declared type; absent for props only known from `defaultProps`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub ty: Option<PropType>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<DefaultValue>,
    /// Present (possibly empty) for every prop declared in `propTypes`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<JsDocTag>,
    /// Raw JSDoc block attached to the `propTypes` entry.
    #[serde(skip)]
    pub doc_comment: Option<String>,
}

impl PropDescriptor {
    /// Whether the prop carries an `@ignore` tag.
    pub fn is_ignored(&self) -> bool {
        self.tags.iter().any(|tag| tag.title == "ignore")
    }
}

/// Styling-engine metadata recovered from the default export
/// (`withStyles(styles, { name: 'MuiButton' })`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOptions {
    /// Style sheet name from the options object.
    pub sheet_name: Option<String>,
    /// Binding passed as the style definition, usually `styles`.
    pub styles_binding: Option<String>,
}

/// Facts recovered from the component source besides the props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFacts {
    /// Defaults declared by destructuring props in the render function.
    pub destructured_defaults: IndexMap<String, DefaultValue>,
    /// Present when the default export carries styling-engine options.
    pub style_options: Option<StyleOptions>,
}

/// Descriptor set for one component, as it flows through the refiners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDoc {
    /// Source file the descriptors were extracted from.
    pub path: PathBuf,
    /// Binding that owns the `propTypes` assignment, if any.
    pub binding: Option<String>,
    /// Component-level description.
    pub description: String,
    pub props: PropMap,
    pub facts: SourceFacts,
}

impl ComponentDoc {
    /// Creates an empty descriptor set for a file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            binding: None,
            description: String::new(),
            props: PropMap::default(),
            facts: SourceFacts::default(),
        }
    }
}

/// Class-name hooks a component exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylesRecord {
    pub class_names: Vec<String>,
    pub source_name: Option<String>,
    pub descriptions: IndexMap<String, String>,
    pub generated_class_names: IndexMap<String, String>,
}

/// Where a component's forwarded ref ends up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ForwardsRefTo {
    /// The component cannot hold a ref.
    None,
    /// The ref is forwarded to the root element.
    DomElement { element: String },
    /// The ref is attached to a component class.
    ComponentClass,
    /// The ref is attached to an imperative handle.
    ImperativeHandle,
}

/// Component whose props are forwarded by another component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inheritance {
    pub component: String,
    pub pathname: String,
}

/// The assembled API record for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentApi {
    pub name: String,
    /// Path relative to the repository root, `/`-separated.
    pub filename: String,
    pub description: String,
    pub props: PropMap,
    pub styles: StylesRecord,
    pub spread: bool,
    pub forwards_ref_to: ForwardsRefTo,
    pub inheritance: Option<Inheritance>,
    pub used_in_pages: Vec<String>,
}

/// One translatable text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nItem {
    /// Translation key, e.g. `propOnClick`.
    pub key: String,
    /// Original text.
    pub value: String,
    /// Field path inside the API record, e.g. `props.onClick.description`.
    pub path: String,
}

/// Structured translation record for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentApiI18n {
    pub name: String,
    pub description: Option<I18nItem>,
    pub props: Vec<I18nItem>,
    pub styles: Vec<I18nItem>,
}

/// Flat translation key to text projection.
pub type ComponentApiI18nJson = IndexMap<String, String>;

/// Everything produced for one component in a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentApiData {
    pub api: ComponentApi,
    pub i18n: ComponentApiI18n,
    pub i18n_json: ComponentApiI18nJson,
}
