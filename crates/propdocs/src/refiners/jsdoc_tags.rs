use crate::error::Result;
use crate::jsdoc::parse_jsdoc;
use crate::model::ComponentDoc;

use super::Refiner;

/// Splits each prop's doc comment into a summary and structured tags.
///
/// Always re-derives from the raw comment, never from the current
/// description, so a second pass is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsDocTagRefiner;

impl Refiner for JsDocTagRefiner {
    fn name(&self) -> &'static str {
        "jsdoc-tags"
    }

    fn refine(&self, mut doc: ComponentDoc) -> Result<ComponentDoc> {
        for prop in doc.props.values_mut() {
            let Some(raw) = prop.doc_comment.as_deref() else {
                prop.tags.clear();
                continue;
            };
            let parsed = parse_jsdoc(raw);
            prop.description = Some(parsed.summary);
            prop.tags = parsed.tags;
        }
        Ok(doc)
    }
}
