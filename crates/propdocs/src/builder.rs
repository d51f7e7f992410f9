//! Per-component pipeline: extract, refine, resolve styles, inheritance and
//! refs, assemble.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::assembler::{self, ApiParts};
use crate::conformance::{ConformanceSource, ConformanceTestParser};
use crate::error::{DocsError, Result};
use crate::extractor::{DescriptorExtractor, is_undocumented};
use crate::inheritance::InheritanceResolver;
use crate::model::{ComponentApiData, ComponentSource};
use crate::pages::DocumentationPageIndex;
use crate::refiners::RefinerPipeline;
use crate::refs;
use crate::styles::StyleExtractor;

/// Builds the API data of single components.
///
/// Holds only read-only state, so one builder can be shared by every
/// worker of a batch.
pub struct ComponentApiBuilder {
    root: PathBuf,
    extractor: DescriptorExtractor,
    refiners: RefinerPipeline,
    styles: StyleExtractor,
    inheritance: InheritanceResolver,
    conformance: Arc<dyn ConformanceSource>,
    pages: DocumentationPageIndex,
}

impl ComponentApiBuilder {
    /// Builder with the standard refiners, the static conformance reader
    /// and the default API route.
    pub fn new(root: impl Into<PathBuf>, styles: StyleExtractor, pages: DocumentationPageIndex) -> Self {
        Self {
            root: root.into(),
            extractor: DescriptorExtractor::new(),
            refiners: RefinerPipeline::standard(),
            styles,
            inheritance: InheritanceResolver::default(),
            conformance: Arc::new(ConformanceTestParser),
            pages,
        }
    }

    pub fn with_refiners(mut self, refiners: RefinerPipeline) -> Self {
        self.refiners = refiners;
        self
    }

    pub fn with_inheritance(mut self, inheritance: InheritanceResolver) -> Self {
        self.inheritance = inheritance;
        self
    }

    pub fn with_conformance(mut self, conformance: Arc<dyn ConformanceSource>) -> Self {
        self.conformance = conformance;
        self
    }

    /// Reads and builds one component. `Ok(None)` means the component opted
    /// out of documentation.
    pub fn build(&self, component: &ComponentSource) -> Result<Option<ComponentApiData>> {
        let source = fs::read_to_string(&component.path).map_err(|error| DocsError::Io {
            path: component.path.clone(),
            error,
        })?;
        self.build_source(component, &source)
    }

    /// Builds one component from in-memory source.
    pub fn build_source(
        &self,
        component: &ComponentSource,
        source: &str,
    ) -> Result<Option<ComponentApiData>> {
        if is_undocumented(source) {
            debug!(component = %component.name, "skipping undocumented component");
            return Ok(None);
        }

        let doc = self.extractor.extract_from_source(&component.path, source)?;
        let doc = self.refiners.run(doc)?;
        let styles = self.styles.extract(&component.name, &doc, source)?;

        let test_info = self.conformance.test_info(&component.path);
        let inheritance = self.inheritance.resolve(&test_info, source);
        let forwards_ref_to = refs::classify(test_info.forwards_ref_to.as_deref());

        let api = assembler::assemble(
            &self.root,
            ApiParts {
                name: component.name.clone(),
                doc,
                styles,
                forwards_ref_to,
                inheritance,
                spread: assembler::is_spread(source),
                used_in_pages: self.pages.pages_of(&component.name),
            },
        )?;

        info!(component = %api.name, props = api.props.len(), "built API data");
        Ok(Some(assembler::with_translations(api)))
    }
}

impl std::fmt::Debug for ComponentApiBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentApiBuilder")
            .field("root", &self.root)
            .field("refiners", &self.refiners)
            .field("styles", &self.styles)
            .field("inheritance", &self.inheritance)
            .field("pages", &self.pages.len())
            .finish_non_exhaustive()
    }
}
