//! Rendering of schema definition trees into plugin framework source text.
//!
//! A [`Renderer`] owns its template environment; construct one and reuse it for
//! as many schemas as needed. Rendering is a pure function of the input tree
//! and the given name: it never mutates the tree and either returns the full
//! fragment or fails as a whole. Generated text is unindented; formatting is
//! the caller's concern (`gofmt` in a typical pipeline), which keeps the
//! fragments free of indentation bookkeeping.
//!
//! Every name-keyed container renders its children in byte-wise lexicographic
//! key order, independent of insertion order, so output is reproducible across
//! runs. The sort is applied per nesting level.

use crate::error::GeneratorError;
use crate::schema::{
    Attribute, AttributeKind, AttributeMap, Block, BlockKind, BlockMap, CustomType, ElementType,
    NestedAttributeObject, NestedBlockObject, ProviderSchema, Schema, Validator,
};
use minijinja::Environment;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

const ENTITY_TEMPLATE: &str = include_str!("../templates/entity.jinja");
const COMMON_FIELDS_TEMPLATE: &str = include_str!("../templates/common_fields.jinja");
const SCHEMA_TEMPLATE: &str = include_str!("../templates/schema.jinja");
const MODEL_TEMPLATE: &str = include_str!("../templates/model.jinja");

/// Renders schema definition trees into source text.
pub struct Renderer {
    pub(crate) env: Environment<'static>,
}

impl Renderer {
    /// Create a renderer with the embedded templates loaded.
    pub fn new() -> Result<Self, GeneratorError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_template("entity.jinja", ENTITY_TEMPLATE)?;
        env.add_template("common_fields.jinja", COMMON_FIELDS_TEMPLATE)?;
        env.add_template("schema.jinja", SCHEMA_TEMPLATE)?;
        env.add_template("model.jinja", MODEL_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the schema fragment for a single named attribute.
    pub fn attribute(&self, name: &str, attribute: &Attribute) -> Result<String, GeneratorError> {
        trace!(attribute = name, "rendering attribute");
        let context = EntityContext {
            name,
            type_name: attribute_type_name(&attribute.kind),
            variant_fields: self.attribute_variant_fields(name, &attribute.kind)?,
            custom_type: attribute
                .custom_type
                .as_ref()
                .map(|custom| custom_type_expr(custom, name))
                .transpose()?,
            required: attribute.required,
            optional: attribute.optional,
            computed: attribute.computed,
            sensitive: attribute.sensitive,
            description: attribute.description.as_deref().map(go_quote),
            markdown_description: attribute
                .markdown_description
                .as_deref()
                .or(attribute.description.as_deref())
                .map(go_quote),
            deprecation_message: attribute.deprecation_message.as_deref().map(go_quote),
            validator_type: attribute_validator_type(&attribute.kind),
            validators: rendered_validators(&attribute.validators),
        };
        Ok(self.env.get_template("entity.jinja")?.render(&context)?)
    }

    /// Render the schema fragment for a single named block.
    pub fn block(&self, name: &str, block: &Block) -> Result<String, GeneratorError> {
        trace!(block = name, "rendering block");
        let context = EntityContext {
            name,
            type_name: block_type_name(&block.kind),
            variant_fields: self.block_variant_fields(name, &block.kind)?,
            custom_type: block
                .custom_type
                .as_ref()
                .map(|custom| custom_type_expr(custom, name))
                .transpose()?,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            description: block.description.as_deref().map(go_quote),
            markdown_description: block
                .markdown_description
                .as_deref()
                .or(block.description.as_deref())
                .map(go_quote),
            deprecation_message: block.deprecation_message.as_deref().map(go_quote),
            validator_type: block_validator_type(&block.kind),
            validators: rendered_validators(&block.validators),
        };
        Ok(self.env.get_template("entity.jinja")?.render(&context)?)
    }

    /// Render the schema function for a resource.
    pub fn resource_schema(&self, name: &str, schema: &Schema) -> Result<String, GeneratorError> {
        self.schema_function(name, "Resource", schema)
    }

    /// Render the schema function for a data source.
    pub fn data_source_schema(
        &self,
        name: &str,
        schema: &Schema,
    ) -> Result<String, GeneratorError> {
        self.schema_function(name, "DataSource", schema)
    }

    /// Render the schema function for a provider configuration.
    pub fn provider_schema(&self, name: &str, schema: &Schema) -> Result<String, GeneratorError> {
        self.schema_function(name, "Provider", schema)
    }

    /// Render every schema of a provider into named source blobs.
    ///
    /// Each blob holds the schema function followed by its data model struct.
    /// Blobs are independent; package clauses and import statements are the
    /// caller's concern.
    pub fn provider(
        &self,
        name: &str,
        provider: &ProviderSchema,
    ) -> Result<GeneratedProvider, GeneratorError> {
        debug!(provider = name, "rendering provider schemas");
        let mut resources = BTreeMap::new();
        for (resource, schema) in &provider.resources {
            resources.insert(resource.clone(), self.schema_unit(resource, "Resource", schema)?);
        }
        let mut data_sources = BTreeMap::new();
        for (data_source, schema) in &provider.data_sources {
            data_sources.insert(
                data_source.clone(),
                self.schema_unit(data_source, "DataSource", schema)?,
            );
        }
        Ok(GeneratedProvider {
            provider: self.schema_unit(name, "Provider", &provider.provider)?,
            resources,
            data_sources,
        })
    }

    fn schema_unit(
        &self,
        name: &str,
        suffix: &str,
        schema: &Schema,
    ) -> Result<String, GeneratorError> {
        Ok(format!(
            "{}\n{}",
            self.schema_function(name, suffix, schema)?,
            self.model(name, schema)?
        ))
    }

    fn schema_function(
        &self,
        name: &str,
        suffix: &str,
        schema: &Schema,
    ) -> Result<String, GeneratorError> {
        debug!(schema = name, "rendering schema");
        let context = SchemaContext {
            func_name: format!("{}{}Schema", to_pascal_case(name), suffix),
            attributes: self.attributes_section(&schema.attributes)?,
            blocks: self.blocks_section(&schema.blocks)?,
            description: schema.description.as_deref().map(go_quote),
            markdown_description: schema
                .markdown_description
                .as_deref()
                .or(schema.description.as_deref())
                .map(go_quote),
            deprecation_message: schema.deprecation_message.as_deref().map(go_quote),
        };
        Ok(self.env.get_template("schema.jinja")?.render(&context)?)
    }

    fn attribute_variant_fields(
        &self,
        name: &str,
        kind: &AttributeKind,
    ) -> Result<String, GeneratorError> {
        match kind {
            AttributeKind::Bool
            | AttributeKind::Float64
            | AttributeKind::Int64
            | AttributeKind::Number
            | AttributeKind::String => Ok(String::new()),
            AttributeKind::List { element_type }
            | AttributeKind::Map { element_type }
            | AttributeKind::Set { element_type } => Ok(format!(
                "ElementType: {},\n",
                element_type_expr(element_type, name)?
            )),
            AttributeKind::Object { attribute_types } => {
                let mut out = String::from("AttributeTypes: map[string]attr.Type{\n");
                for attribute_type in attribute_types {
                    out.push_str(&format!(
                        "\"{}\": {},\n",
                        attribute_type.name,
                        element_type_expr(&attribute_type.element_type, name)?
                    ));
                }
                out.push_str("},\n");
                Ok(out)
            }
            AttributeKind::ListNested { nested_object }
            | AttributeKind::MapNested { nested_object }
            | AttributeKind::SetNested { nested_object } => Ok(format!(
                "NestedObject: {},\n",
                self.nested_attribute_object(name, nested_object)?
            )),
            AttributeKind::SingleNested { attributes } => self.attributes_section(attributes),
        }
    }

    fn block_variant_fields(&self, name: &str, kind: &BlockKind) -> Result<String, GeneratorError> {
        match kind {
            BlockKind::ListNested { nested_object } | BlockKind::SetNested { nested_object } => {
                Ok(format!(
                    "NestedObject: {},\n",
                    self.nested_block_object(name, nested_object)?
                ))
            }
            BlockKind::SingleNested { attributes, blocks } => Ok(format!(
                "{}{}",
                self.attributes_section(attributes)?,
                self.blocks_section(blocks)?
            )),
        }
    }

    fn nested_attribute_object(
        &self,
        name: &str,
        object: &NestedAttributeObject,
    ) -> Result<String, GeneratorError> {
        let mut out = String::from("schema.NestedAttributeObject{\n");
        out.push_str(&self.attributes_section(&object.attributes)?);
        out.push_str(&object_trailer(name, &object.custom_type, &object.validators)?);
        out.push('}');
        Ok(out)
    }

    fn nested_block_object(
        &self,
        name: &str,
        object: &NestedBlockObject,
    ) -> Result<String, GeneratorError> {
        let mut out = String::from("schema.NestedBlockObject{\n");
        out.push_str(&self.attributes_section(&object.attributes)?);
        out.push_str(&self.blocks_section(&object.blocks)?);
        out.push_str(&object_trailer(name, &object.custom_type, &object.validators)?);
        out.push('}');
        Ok(out)
    }

    fn attributes_section(&self, attributes: &AttributeMap) -> Result<String, GeneratorError> {
        let children = render_sorted(attributes, |child, attribute| {
            self.attribute(child, attribute)
        })?;
        if children.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!(
                "Attributes: map[string]schema.Attribute{{\n{children}}},\n"
            ))
        }
    }

    fn blocks_section(&self, blocks: &BlockMap) -> Result<String, GeneratorError> {
        let children = render_sorted(blocks, |child, block| self.block(child, block))?;
        if children.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("Blocks: map[string]schema.Block{{\n{children}}},\n"))
        }
    }
}

/// The rendered output for every schema of a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProvider {
    /// Source blob for the provider configuration schema.
    pub provider: String,
    /// Source blobs for each resource, keyed by resource name.
    pub resources: BTreeMap<String, String>,
    /// Source blobs for each data source, keyed by data source name.
    pub data_sources: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct EntityContext<'a> {
    name: &'a str,
    type_name: &'static str,
    variant_fields: String,
    custom_type: Option<String>,
    required: bool,
    optional: bool,
    computed: bool,
    sensitive: bool,
    description: Option<String>,
    markdown_description: Option<String>,
    deprecation_message: Option<String>,
    validator_type: &'static str,
    validators: Vec<&'a str>,
}

#[derive(Serialize)]
struct SchemaContext {
    func_name: String,
    attributes: String,
    blocks: String,
    description: Option<String>,
    markdown_description: Option<String>,
    deprecation_message: Option<String>,
}

/// Sort entries by key, skip `None` entries, render each and concatenate.
///
/// The one container-rendering loop shared by attribute maps, block maps, and
/// every nested object's inner maps. Ordering is byte-wise on the key.
fn render_sorted<T>(
    entries: &HashMap<String, Option<T>>,
    mut render: impl FnMut(&str, &T) -> Result<String, GeneratorError>,
) -> Result<String, GeneratorError> {
    let mut sorted: Vec<_> = entries.iter().collect();
    sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
    let mut out = String::new();
    for (name, entry) in sorted {
        let Some(entry) = entry else { continue };
        out.push_str(&render(name, entry)?);
    }
    Ok(out)
}

fn object_trailer(
    name: &str,
    custom_type: &Option<CustomType>,
    validators: &[Validator],
) -> Result<String, GeneratorError> {
    let mut out = String::new();
    if let Some(custom) = custom_type {
        out.push_str(&format!("CustomType: {},\n", custom_type_expr(custom, name)?));
    }
    let rendered = rendered_validators(validators);
    if !rendered.is_empty() {
        out.push_str("Validators: []validator.Object{\n");
        for validator in rendered {
            out.push_str(validator);
            out.push_str(",\n");
        }
        out.push_str("},\n");
    }
    Ok(out)
}

fn rendered_validators(validators: &[Validator]) -> Vec<&str> {
    validators
        .iter()
        .filter_map(|validator| validator.custom.as_ref())
        .map(|custom| custom.schema_definition.as_str())
        .collect()
}

fn custom_type_expr(custom: &CustomType, owner: &str) -> Result<String, GeneratorError> {
    if custom.type_expr.is_empty() {
        return Err(GeneratorError::EmptyCustomType(owner.to_string()));
    }
    Ok(custom.type_expr.clone())
}

/// Render an element type to its type expression.
///
/// The single switch every type descriptor goes through: list/map/set
/// attribute element types and object member types all end up here.
fn element_type_expr(element: &ElementType, owner: &str) -> Result<String, GeneratorError> {
    match element {
        ElementType::Bool(custom) => primitive_type_expr(custom, "types.BoolType", owner),
        ElementType::Float64(custom) => primitive_type_expr(custom, "types.Float64Type", owner),
        ElementType::Int64(custom) => primitive_type_expr(custom, "types.Int64Type", owner),
        ElementType::Number(custom) => primitive_type_expr(custom, "types.NumberType", owner),
        ElementType::String(custom) => primitive_type_expr(custom, "types.StringType", owner),
        ElementType::List(inner) => Ok(format!(
            "types.ListType{{\nElemType: {},\n}}",
            element_type_expr(inner, owner)?
        )),
        ElementType::Map(inner) => Ok(format!(
            "types.MapType{{\nElemType: {},\n}}",
            element_type_expr(inner, owner)?
        )),
        ElementType::Set(inner) => Ok(format!(
            "types.SetType{{\nElemType: {},\n}}",
            element_type_expr(inner, owner)?
        )),
        ElementType::Object(attribute_types) => {
            let mut out = String::from("types.ObjectType{\nAttrTypes: map[string]attr.Type{\n");
            for attribute_type in attribute_types {
                out.push_str(&format!(
                    "\"{}\": {},\n",
                    attribute_type.name,
                    element_type_expr(&attribute_type.element_type, owner)?
                ));
            }
            out.push_str("},\n}");
            Ok(out)
        }
    }
}

fn primitive_type_expr(
    custom: &Option<CustomType>,
    default: &str,
    owner: &str,
) -> Result<String, GeneratorError> {
    match custom {
        Some(custom) => custom_type_expr(custom, owner),
        None => Ok(default.to_string()),
    }
}

fn attribute_type_name(kind: &AttributeKind) -> &'static str {
    match kind {
        AttributeKind::Bool => "BoolAttribute",
        AttributeKind::Float64 => "Float64Attribute",
        AttributeKind::Int64 => "Int64Attribute",
        AttributeKind::Number => "NumberAttribute",
        AttributeKind::String => "StringAttribute",
        AttributeKind::List { .. } => "ListAttribute",
        AttributeKind::Map { .. } => "MapAttribute",
        AttributeKind::Set { .. } => "SetAttribute",
        AttributeKind::Object { .. } => "ObjectAttribute",
        AttributeKind::ListNested { .. } => "ListNestedAttribute",
        AttributeKind::MapNested { .. } => "MapNestedAttribute",
        AttributeKind::SetNested { .. } => "SetNestedAttribute",
        AttributeKind::SingleNested { .. } => "SingleNestedAttribute",
    }
}

fn attribute_validator_type(kind: &AttributeKind) -> &'static str {
    match kind {
        AttributeKind::Bool => "Bool",
        AttributeKind::Float64 => "Float64",
        AttributeKind::Int64 => "Int64",
        AttributeKind::Number => "Number",
        AttributeKind::String => "String",
        AttributeKind::List { .. } | AttributeKind::ListNested { .. } => "List",
        AttributeKind::Map { .. } | AttributeKind::MapNested { .. } => "Map",
        AttributeKind::Set { .. } | AttributeKind::SetNested { .. } => "Set",
        AttributeKind::Object { .. } | AttributeKind::SingleNested { .. } => "Object",
    }
}

fn block_type_name(kind: &BlockKind) -> &'static str {
    match kind {
        BlockKind::ListNested { .. } => "ListNestedBlock",
        BlockKind::SetNested { .. } => "SetNestedBlock",
        BlockKind::SingleNested { .. } => "SingleNestedBlock",
    }
}

fn block_validator_type(kind: &BlockKind) -> &'static str {
    match kind {
        BlockKind::ListNested { .. } => "List",
        BlockKind::SetNested { .. } => "Set",
        BlockKind::SingleNested { .. } => "Object",
    }
}

/// Quote a string as a source-level string literal.
pub(crate) fn go_quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Convert a snake_case or kebab-case name to PascalCase.
pub(crate) fn to_pascal_case(name: &str) -> String {
    name.split(['_', '-'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{attribute_map, block_map, ObjectAttributeType};
    use pretty_assertions::assert_eq;

    fn renderer() -> Renderer {
        Renderer::new().expect("templates load")
    }

    #[test]
    fn test_required_bool_attribute() {
        let rendered = renderer()
            .attribute("enabled", &Attribute::required_bool())
            .unwrap();

        assert_eq!(
            rendered,
            "\"enabled\": schema.BoolAttribute{\nRequired: true,\n},\n"
        );
    }

    #[test]
    fn test_common_fields_full_set() {
        let attribute = Attribute::string()
            .optional()
            .computed()
            .sensitive()
            .with_description("token")
            .with_deprecation_message("use credentials instead")
            .with_custom_type(CustomType::new("mytypes.TokenType"))
            .with_validator(Validator::custom("stringvalidator.LengthAtLeast(1)"));

        let rendered = renderer().attribute("token", &attribute).unwrap();

        assert_eq!(
            rendered,
            concat!(
                "\"token\": schema.StringAttribute{\n",
                "CustomType: mytypes.TokenType,\n",
                "Optional: true,\n",
                "Computed: true,\n",
                "Sensitive: true,\n",
                "Description: \"token\",\n",
                "MarkdownDescription: \"token\",\n",
                "DeprecationMessage: \"use credentials instead\",\n",
                "Validators: []validator.String{\n",
                "stringvalidator.LengthAtLeast(1),\n",
                "},\n",
                "},\n"
            )
        );
    }

    #[test]
    fn test_attributes_render_in_lexicographic_order() {
        // Inserted b-first; rendering must come out a-first.
        let attributes = attribute_map([
            ("b", Attribute::required_bool()),
            ("a", Attribute::required_bool()),
        ]);

        let section = renderer().attributes_section(&attributes).unwrap();

        assert_eq!(
            section,
            concat!(
                "Attributes: map[string]schema.Attribute{\n",
                "\"a\": schema.BoolAttribute{\nRequired: true,\n},\n",
                "\"b\": schema.BoolAttribute{\nRequired: true,\n},\n",
                "},\n"
            )
        );
    }

    #[test]
    fn test_render_is_deterministic_across_insertion_orders() {
        let forward = attribute_map([
            ("alpha", Attribute::optional_string()),
            ("beta", Attribute::required_int64()),
            ("gamma", Attribute::bool().computed()),
        ]);
        let backward = attribute_map([
            ("gamma", Attribute::bool().computed()),
            ("beta", Attribute::required_int64()),
            ("alpha", Attribute::optional_string()),
        ]);

        let renderer = renderer();
        assert_eq!(
            renderer.attributes_section(&forward).unwrap(),
            renderer.attributes_section(&backward).unwrap()
        );
    }

    #[test]
    fn test_skip_nil_entry() {
        let mut with_nil = attribute_map([
            ("a", Attribute::required_bool()),
            ("c", Attribute::optional_string()),
        ]);
        with_nil.insert("b".to_string(), None);
        let without = attribute_map([
            ("a", Attribute::required_bool()),
            ("c", Attribute::optional_string()),
        ]);

        let renderer = renderer();
        assert_eq!(
            renderer.attributes_section(&with_nil).unwrap(),
            renderer.attributes_section(&without).unwrap()
        );
    }

    #[test]
    fn test_list_of_list_element_type() {
        let attribute = Attribute::list(ElementType::list(ElementType::bool())).required();

        let rendered = renderer().attribute("list_attribute", &attribute).unwrap();

        assert_eq!(
            rendered,
            concat!(
                "\"list_attribute\": schema.ListAttribute{\n",
                "ElementType: types.ListType{\n",
                "ElemType: types.ListType{\n",
                "ElemType: types.BoolType,\n",
                "},\n",
                "},\n",
                "Required: true,\n",
                "},\n"
            )
        );
    }

    #[test]
    fn test_object_attribute_member_types() {
        let attribute = Attribute::object(vec![
            ObjectAttributeType::new("flag", ElementType::bool()),
            ObjectAttributeType::new("name", ElementType::string()),
        ])
        .optional();

        let rendered = renderer().attribute("object_attribute", &attribute).unwrap();

        assert_eq!(
            rendered,
            concat!(
                "\"object_attribute\": schema.ObjectAttribute{\n",
                "AttributeTypes: map[string]attr.Type{\n",
                "\"flag\": types.BoolType,\n",
                "\"name\": types.StringType,\n",
                "},\n",
                "Optional: true,\n",
                "},\n"
            )
        );
    }

    #[test]
    fn test_element_custom_type_replaces_expression() {
        let attribute =
            Attribute::list(ElementType::Bool(Some(CustomType::new("mytypes.BoolType")))).required();

        let rendered = renderer().attribute("bools", &attribute).unwrap();

        // The override replaces the computed expression wholesale.
        assert_eq!(
            rendered,
            concat!(
                "\"bools\": schema.ListAttribute{\n",
                "ElementType: mytypes.BoolType,\n",
                "Required: true,\n",
                "},\n"
            )
        );
    }

    #[test]
    fn test_description_auto_fills_markdown() {
        let attribute = Attribute::required_string().with_description("d");

        let rendered = renderer().attribute("name", &attribute).unwrap();

        assert!(rendered.contains("Description: \"d\",\nMarkdownDescription: \"d\",\n"));
    }

    #[test]
    fn test_explicit_markdown_is_not_overwritten() {
        let attribute = Attribute::required_string()
            .with_description("d")
            .with_markdown_description("m");

        let rendered = renderer().attribute("name", &attribute).unwrap();

        assert!(rendered.contains("Description: \"d\",\nMarkdownDescription: \"m\",\n"));
    }

    #[test]
    fn test_markdown_never_fills_description() {
        let attribute = Attribute::required_string().with_markdown_description("m");

        let rendered = renderer().attribute("name", &attribute).unwrap();

        // Fields render at line starts, so anchor on the newline to avoid
        // matching the "Description:" suffix of MarkdownDescription.
        assert!(!rendered.contains("\nDescription:"));
        assert!(rendered.contains("MarkdownDescription: \"m\",\n"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let attribute = Attribute::required_string().with_description("d");

        let renderer = renderer();
        let first = renderer.attribute("name", &attribute).unwrap();
        let second = renderer.attribute("name", &attribute).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_recursive_composition_sorts_per_level() {
        // ListNested > SingleNested > Bool, with sibling names that sort
        // differently from insertion order at both inner levels.
        let single = Attribute::single_nested(attribute_map([
            ("z_flag", Attribute::required_bool()),
            ("a_flag", Attribute::optional_bool()),
        ]));
        let attribute = Attribute::list_nested(
            NestedAttributeObject::new()
                .with_attribute("single", single.clone())
                .with_attribute("basic", Attribute::required_bool()),
        );

        let renderer = renderer();
        let rendered = renderer.attribute("nested", &attribute).unwrap();

        // The whole is exactly the composition of independently rendered parts.
        let basic = renderer.attribute("basic", &Attribute::required_bool()).unwrap();
        let single_rendered = renderer.attribute("single", &single).unwrap();
        let expected = format!(
            concat!(
                "\"nested\": schema.ListNestedAttribute{{\n",
                "NestedObject: schema.NestedAttributeObject{{\n",
                "Attributes: map[string]schema.Attribute{{\n",
                "{}{}",
                "}},\n",
                "}},\n",
                "}},\n"
            ),
            basic, single_rendered
        );
        assert_eq!(rendered, expected);

        // And the inner single-nested level sorted its own children.
        let a_index = rendered.find("\"a_flag\"").unwrap();
        let z_index = rendered.find("\"z_flag\"").unwrap();
        assert!(a_index < z_index);
    }

    #[test]
    fn test_nested_object_custom_type_and_validators() {
        let attribute = Attribute::set_nested(
            NestedAttributeObject::new()
                .with_attribute("id", Attribute::computed_string())
                .with_custom_type(CustomType::new("mytypes.RuleSetType"))
                .with_validator(Validator::custom("setvalidator.SizeAtLeast(1)")),
        );

        let rendered = renderer().attribute("rules", &attribute).unwrap();

        assert_eq!(
            rendered,
            concat!(
                "\"rules\": schema.SetNestedAttribute{\n",
                "NestedObject: schema.NestedAttributeObject{\n",
                "Attributes: map[string]schema.Attribute{\n",
                "\"id\": schema.StringAttribute{\nComputed: true,\n},\n",
                "},\n",
                "CustomType: mytypes.RuleSetType,\n",
                "Validators: []validator.Object{\n",
                "setvalidator.SizeAtLeast(1),\n",
                "},\n",
                "},\n",
                "},\n"
            )
        );
    }

    #[test]
    fn test_validator_without_custom_payload_renders_nothing() {
        let attribute = Attribute::required_bool().with_validator(Validator::default());

        let rendered = renderer().attribute("enabled", &attribute).unwrap();

        assert!(!rendered.contains("Validators:"));
    }

    #[test]
    fn test_single_nested_block_with_inner_block() {
        let inner = Block::list_nested(
            NestedBlockObject::new().with_attribute("port", Attribute::required_int64()),
        );
        let block = Block::single_nested(
            attribute_map([("address", Attribute::required_string())]),
            block_map([("listener", inner)]),
        )
        .with_description("Network settings.");

        let rendered = renderer().block("network", &block).unwrap();

        assert_eq!(
            rendered,
            concat!(
                "\"network\": schema.SingleNestedBlock{\n",
                "Attributes: map[string]schema.Attribute{\n",
                "\"address\": schema.StringAttribute{\nRequired: true,\n},\n",
                "},\n",
                "Blocks: map[string]schema.Block{\n",
                "\"listener\": schema.ListNestedBlock{\n",
                "NestedObject: schema.NestedBlockObject{\n",
                "Attributes: map[string]schema.Attribute{\n",
                "\"port\": schema.Int64Attribute{\nRequired: true,\n},\n",
                "},\n",
                "},\n",
                "},\n",
                "},\n",
                "Description: \"Network settings.\",\n",
                "MarkdownDescription: \"Network settings.\",\n",
                "},\n"
            )
        );
    }

    #[test]
    fn test_schema_function() {
        let schema = Schema::new()
            .with_attribute("name", Attribute::required_string())
            .with_description("An example resource.");

        let rendered = renderer().resource_schema("example", &schema).unwrap();

        assert_eq!(
            rendered,
            concat!(
                "func ExampleResourceSchema(ctx context.Context) schema.Schema {\n",
                "return schema.Schema{\n",
                "Attributes: map[string]schema.Attribute{\n",
                "\"name\": schema.StringAttribute{\nRequired: true,\n},\n",
                "},\n",
                "Description: \"An example resource.\",\n",
                "MarkdownDescription: \"An example resource.\",\n",
                "}\n",
                "}\n"
            )
        );
    }

    #[test]
    fn test_empty_schema_function() {
        let rendered = renderer()
            .data_source_schema("empty_source", &Schema::new())
            .unwrap();

        assert_eq!(
            rendered,
            concat!(
                "func EmptySourceDataSourceSchema(ctx context.Context) schema.Schema {\n",
                "return schema.Schema{\n",
                "}\n",
                "}\n"
            )
        );
    }

    #[test]
    fn test_empty_custom_type_fails_the_whole_render() {
        // The malformed custom type sits two levels deep; the error must
        // surface at the top with no partial output.
        let schema = Schema::new().with_attribute(
            "outer",
            Attribute::list_nested(NestedAttributeObject::new().with_attribute(
                "inner",
                Attribute::bool().with_custom_type(CustomType::new("")),
            )),
        );

        let result = renderer().resource_schema("broken", &schema);

        assert!(matches!(
            result,
            Err(GeneratorError::EmptyCustomType(ref name)) if name == "inner"
        ));
    }

    #[test]
    fn test_provider_renders_all_schemas() {
        let provider = ProviderSchema::new()
            .with_provider_config(
                Schema::new().with_attribute("api_key", Attribute::required_string().sensitive()),
            )
            .with_resource(
                "server",
                Schema::new().with_attribute("name", Attribute::required_string()),
            )
            .with_data_source(
                "image",
                Schema::new().with_attribute("id", Attribute::computed_string()),
            );

        let generated = renderer().provider("example", &provider).unwrap();

        assert!(generated
            .provider
            .contains("func ExampleProviderSchema(ctx context.Context) schema.Schema {"));
        assert!(generated.provider.contains("type ExampleModel struct {"));
        assert!(generated.resources["server"]
            .contains("func ServerResourceSchema(ctx context.Context) schema.Schema {"));
        assert!(generated.data_sources["image"]
            .contains("func ImageDataSourceSchema(ctx context.Context) schema.Schema {"));
    }

    #[test]
    fn test_go_quote_escapes() {
        assert_eq!(go_quote("plain"), "\"plain\"");
        assert_eq!(go_quote("a \"b\" c"), "\"a \\\"b\\\" c\"");
        assert_eq!(go_quote("line\nbreak\ttab\\"), "\"line\\nbreak\\ttab\\\\\"");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("example_resource"), "ExampleResource");
        assert_eq!(to_pascal_case("kebab-case-name"), "KebabCaseName");
        assert_eq!(to_pascal_case("single"), "Single");
        assert_eq!(to_pascal_case("double__underscore"), "DoubleUnderscore");
    }
}
