//! Descriptor refinement passes.
//!
//! Each refiner is a pure `ComponentDoc -> ComponentDoc` rewrite. The
//! pipeline applies them left to right; every built-in refiner is
//! idempotent, so running the pipeline twice yields the same descriptors.

mod chained;
mod default_value;
mod jsdoc_tags;

pub use chained::{CHAINED_MARKER, CHAIN_CALLEE, ChainedTypeRefiner};
pub use default_value::DefaultValueRefiner;
pub use jsdoc_tags::JsDocTagRefiner;

use crate::error::Result;
use crate::model::ComponentDoc;

/// A single refinement pass over one component's descriptors.
pub trait Refiner: Send + Sync {
    /// Human-readable name for the pass (used in diagnostics).
    fn name(&self) -> &'static str;

    /// Rewrite the descriptor set.
    fn refine(&self, doc: ComponentDoc) -> Result<ComponentDoc>;
}

/// Ordered list of refiners.
pub struct RefinerPipeline {
    refiners: Vec<Box<dyn Refiner>>,
}

impl RefinerPipeline {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self {
            refiners: Vec::new(),
        }
    }

    /// Default-value, JSDoc tag and chained-type passes, in that order.
    pub fn standard() -> Self {
        Self::new()
            .with(DefaultValueRefiner)
            .with(JsDocTagRefiner)
            .with(ChainedTypeRefiner)
    }

    /// Append a pass.
    pub fn with(mut self, refiner: impl Refiner + 'static) -> Self {
        self.refiners.push(Box::new(refiner));
        self
    }

    /// Names of the passes in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.refiners.iter().map(|refiner| refiner.name()).collect()
    }

    /// Apply every pass in order.
    pub fn run(&self, doc: ComponentDoc) -> Result<ComponentDoc> {
        self.refiners.iter().try_fold(doc, |doc, refiner| {
            tracing::trace!(refiner = refiner.name(), path = %doc.path.display(), "refining");
            refiner.refine(doc)
        })
    }
}

impl Default for RefinerPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RefinerPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefinerPipeline")
            .field("refiners", &self.names())
            .finish()
    }
}
