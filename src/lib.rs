//! Schema code generation for plugin framework providers.
//!
//! This crate turns declarative provider schema definitions into plugin
//! framework source text. It follows the schema model established by
//! [terraform-plugin-framework](https://github.com/hashicorp/terraform-plugin-framework):
//! name-keyed attributes and blocks nesting to unbounded depth, with custom
//! type overrides and validator lists along the way.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - **Schema definition types**: [`schema::Attribute`], [`schema::Block`],
//!   nested objects, element types, custom types, and validators, with
//!   builder methods and serde support for external loaders
//! - **Structural equality**: total, nil-safe comparison across the whole
//!   tree for diffing schema definitions
//! - **Rendering**: [`Renderer`] produces schema functions and data model
//!   structs, one blob per named schema, in deterministic order
//! - **Error types**: [`GeneratorError`] for the all-or-nothing render
//!   pipeline
//! - **Logging**: Integration with `tracing` for structured logging
//!
//! # Quick Start
//!
//! ```
//! use tfplugin_schema_gen::{Renderer, schema::{Attribute, Schema}};
//!
//! let schema = Schema::new()
//!     .with_attribute("name", Attribute::required_string())
//!     .with_attribute("id", Attribute::computed_string());
//!
//! let renderer = Renderer::new()?;
//! let code = renderer.resource_schema("example", &schema)?;
//!
//! assert!(code.contains("func ExampleResourceSchema(ctx context.Context) schema.Schema {"));
//! assert!(code.contains("\"name\": schema.StringAttribute{"));
//! # Ok::<(), tfplugin_schema_gen::GeneratorError>(())
//! ```
//!
//! # Determinism
//!
//! Attribute and block maps are unordered; rendering sorts every level's keys
//! lexicographically, so two trees with the same contents produce byte-equal
//! output regardless of insertion order. Generated text is unindented —
//! running it through `gofmt` (or equivalent) is the caller's final step.
//!
//! # Scope
//!
//! The crate consumes an already-built tree and returns text. Reading spec
//! documents, writing files, package naming, and import deduplication belong
//! to the surrounding tool.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod logging;
mod model;
pub mod render;
pub mod schema;
pub mod testing;

// Re-export main types at crate root
pub use error::GeneratorError;
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use render::{GeneratedProvider, Renderer};
pub use schema::{
    Attribute, AttributeKind, Block, BlockKind, CustomType, CustomValidator, ElementType,
    NestedAttributeObject, NestedBlockObject, ObjectAttributeType, ProviderSchema, Schema,
    Validator,
};

// Re-export commonly used external types
pub use tracing;
