#![deny(clippy::all)]

//! Component API extraction for UI component libraries.
//!
//! This crate provides:
//! - Discovery of component sources and documentation pages.
//! - A descriptor extractor that reads `propTypes`, `defaultProps` and JSDoc
//!   comments from JavaScript/TypeScript sources using OXC.
//! - Refinement passes for defaults, JSDoc tags and chained validators.
//! - Style, ref and inheritance resolution.
//! - Assembly of the per-component API record, its translation record and
//!   the on-disk artifact layout.

pub mod assembler;
pub mod builder;
pub mod case;
pub mod conformance;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod inheritance;
pub mod jsdoc;
pub mod model;
pub mod output;
pub mod pages;
pub mod parser;
pub mod prop_types;
pub mod refiners;
pub mod refs;
pub mod styles;
pub mod translations;

pub use builder::ComponentApiBuilder;
pub use conformance::{ConformanceSource, ConformanceTestParser, TestInfo};
pub use discovery::{find_components, find_markdown};
pub use error::{DocsError, Result};
pub use extractor::DescriptorExtractor;
pub use inheritance::InheritanceResolver;
pub use model::{
    ComponentApi, ComponentApiData, ComponentApiI18n, ComponentApiI18nJson, ComponentDoc,
    ComponentSource, DefaultValue, ForwardsRefTo, Inheritance, JsDocTag, PropDescriptor, PropType,
    StylesRecord,
};
pub use output::{OutputLayout, render_json};
pub use pages::DocumentationPageIndex;
pub use refiners::{Refiner, RefinerPipeline};
pub use styles::{ClassNameGenerator, StyleEngine, StyleExtractor, Theme};
