//! Data model struct generation.
//!
//! Every schema has an associated data model type: one field per attribute or
//! block, named in PascalCase, tagged with the schema name, and typed with the
//! framework value type for its kind. A custom type's value type, when set,
//! replaces the default.

use crate::error::GeneratorError;
use crate::render::{to_pascal_case, Renderer};
use crate::schema::{Attribute, AttributeKind, Block, BlockKind, CustomType, Schema};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct ModelContext {
    model_name: String,
    fields: Vec<ModelField>,
}

#[derive(Serialize)]
struct ModelField {
    name: String,
    go_type: String,
    tag: String,
}

impl Renderer {
    /// Render the data model struct associated with a schema.
    ///
    /// Attribute and block fields are merged and sorted together by schema
    /// name; `None` map entries are skipped, as in schema rendering.
    pub fn model(&self, name: &str, schema: &Schema) -> Result<String, GeneratorError> {
        debug!(model = name, "rendering data model");
        let mut fields = Vec::new();
        for (field, attribute) in &schema.attributes {
            let Some(attribute) = attribute else { continue };
            fields.push(ModelField {
                name: to_pascal_case(field),
                go_type: attribute_model_type(attribute),
                tag: field.clone(),
            });
        }
        for (field, block) in &schema.blocks {
            let Some(block) = block else { continue };
            fields.push(ModelField {
                name: to_pascal_case(field),
                go_type: block_model_type(block),
                tag: field.clone(),
            });
        }
        fields.sort_unstable_by(|a, b| a.tag.cmp(&b.tag));

        let context = ModelContext {
            model_name: format!("{}Model", to_pascal_case(name)),
            fields,
        };
        Ok(self.env.get_template("model.jinja")?.render(&context)?)
    }
}

fn attribute_model_type(attribute: &Attribute) -> String {
    if let Some(value_type) = custom_value_type(&attribute.custom_type) {
        return value_type;
    }
    match &attribute.kind {
        AttributeKind::Bool => "types.Bool",
        AttributeKind::Float64 => "types.Float64",
        AttributeKind::Int64 => "types.Int64",
        AttributeKind::Number => "types.Number",
        AttributeKind::String => "types.String",
        AttributeKind::List { .. } | AttributeKind::ListNested { .. } => "types.List",
        AttributeKind::Map { .. } | AttributeKind::MapNested { .. } => "types.Map",
        AttributeKind::Set { .. } | AttributeKind::SetNested { .. } => "types.Set",
        AttributeKind::Object { .. } | AttributeKind::SingleNested { .. } => "types.Object",
    }
    .to_string()
}

fn block_model_type(block: &Block) -> String {
    if let Some(value_type) = custom_value_type(&block.custom_type) {
        return value_type;
    }
    match &block.kind {
        BlockKind::ListNested { .. } => "types.List",
        BlockKind::SetNested { .. } => "types.Set",
        BlockKind::SingleNested { .. } => "types.Object",
    }
    .to_string()
}

fn custom_value_type(custom: &Option<CustomType>) -> Option<String> {
    custom.as_ref().and_then(|custom| custom.value_type.clone())
}
