use crate::case::upper_first;
use crate::model::{ComponentApi, ComponentApiI18n, ComponentApiI18nJson, I18nItem};

/// Collects every translatable text of an API record.
///
/// Empty texts are skipped, so a key exists exactly when its field has
/// content.
pub fn build_i18n(api: &ComponentApi) -> ComponentApiI18n {
    let description = (!api.description.is_empty()).then(|| I18nItem {
        key: "description".to_string(),
        value: api.description.clone(),
        path: "description".to_string(),
    });

    let props = api
        .props
        .iter()
        .filter_map(|(name, prop)| {
            let text = prop.description.as_deref().filter(|text| !text.is_empty())?;
            Some(I18nItem {
                key: format!("prop{}", upper_first(name)),
                value: text.to_string(),
                path: format!("props.{name}.description"),
            })
        })
        .collect();

    let styles = api
        .styles
        .descriptions
        .iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(class, text)| I18nItem {
            key: format!("styles{}", upper_first(class)),
            value: text.clone(),
            path: format!("styles.descriptions.{class}"),
        })
        .collect();

    ComponentApiI18n {
        name: api.name.clone(),
        description,
        props,
        styles,
    }
}

/// Flat key → text projection written to `translations/<Name>/<Name>.json`.
pub fn flatten(i18n: &ComponentApiI18n) -> ComponentApiI18nJson {
    i18n.description
        .iter()
        .chain(&i18n.props)
        .chain(&i18n.styles)
        .map(|item| (item.key.clone(), item.value.clone()))
        .collect()
}
