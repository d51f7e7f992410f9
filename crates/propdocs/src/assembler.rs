use std::path::Path;

use crate::error::{DocsError, Result};
use crate::model::{
    ComponentApi, ComponentApiData, ComponentDoc, ForwardsRefTo, Inheritance, StylesRecord,
};
use crate::translations::{build_i18n, flatten};

const EXACT_PROP_MARKER: &str = " = exactProp(";

/// Everything the pipeline learned about one component.
#[derive(Debug, Clone)]
pub struct ApiParts {
    pub name: String,
    pub doc: ComponentDoc,
    pub styles: StylesRecord,
    pub forwards_ref_to: ForwardsRefTo,
    pub inheritance: Option<Inheritance>,
    pub spread: bool,
    pub used_in_pages: Vec<String>,
}

/// Whether unknown props are spread to the root element; components
/// wrapping their prop types in `exactProp` reject them.
pub fn is_spread(source: &str) -> bool {
    !source.contains(EXACT_PROP_MARKER)
}

/// `/`-separated path of `path` below `root`, with a leading `/`.
pub fn relative_filename(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let joined = relative
        .components()
        .filter_map(|component| match component {
            std::path::Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// Merges the pipeline outputs into the published API record.
///
/// Props tagged `@ignore` are dropped; any other prop without a
/// description fails the component.
pub fn assemble(root: &Path, parts: ApiParts) -> Result<ComponentApi> {
    let ApiParts {
        name,
        doc,
        styles,
        forwards_ref_to,
        inheritance,
        spread,
        used_in_pages,
    } = parts;

    let mut props = doc.props;
    props.retain(|_, prop| !prop.is_ignored());

    if let Some((prop, _)) = props.iter().find(|(_, prop)| prop.description.is_none()) {
        return Err(DocsError::MissingDescription {
            path: doc.path.clone(),
            prop: prop.clone(),
        });
    }

    let mut used_in_pages = used_in_pages;
    used_in_pages.sort();
    used_in_pages.dedup();

    Ok(ComponentApi {
        name,
        filename: relative_filename(root, &doc.path),
        description: doc.description,
        props,
        styles,
        spread,
        forwards_ref_to,
        inheritance,
        used_in_pages,
    })
}

/// Pairs an API record with its translation record and flat projection.
pub fn with_translations(api: ComponentApi) -> ComponentApiData {
    let i18n = build_i18n(&api);
    let i18n_json = flatten(&i18n);
    ComponentApiData {
        api,
        i18n,
        i18n_json,
    }
}
