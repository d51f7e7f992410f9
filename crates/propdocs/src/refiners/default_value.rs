use crate::error::Result;
use crate::model::ComponentDoc;

use super::Refiner;

/// Back-fills `defaultValue` from `const { a = 1 } = props` style defaults.
///
/// Props that already carry a default (from `defaultProps`) keep it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueRefiner;

impl Refiner for DefaultValueRefiner {
    fn name(&self) -> &'static str {
        "default-value"
    }

    fn refine(&self, mut doc: ComponentDoc) -> Result<ComponentDoc> {
        for (name, prop) in doc.props.iter_mut() {
            if prop.default_value.is_some() {
                continue;
            }
            if let Some(default) = doc.facts.destructured_defaults.get(name) {
                prop.default_value = Some(default.clone());
            }
        }
        Ok(doc)
    }
}
