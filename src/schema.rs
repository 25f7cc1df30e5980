//! Schema definition types for describing provider and resource structure.
//!
//! These types form the input tree of the generator: a provider schema is a set
//! of named [`Schema`]s, each holding name-keyed [`Attribute`]s and [`Block`]s
//! which nest downward to unbounded depth. Trees are built once (by an external
//! loader or by the builder methods here), are immutable afterwards, and are
//! consumed by rendering and by equality comparison.
//!
//! Equality over the whole tree is structural and total: comparing entities of
//! different kinds yields `false` (never an error), optional fields compare
//! nil-safely, name-keyed maps compare independent of insertion order, and
//! validator lists compare positionally.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name-keyed attribute entries of a schema or nested object.
///
/// An entry may be `None` when the source document carries an explicit null
/// for that name; such entries are skipped during rendering.
pub type AttributeMap = HashMap<String, Option<Attribute>>;

/// Name-keyed block entries of a schema or nested object.
///
/// As with [`AttributeMap`], a `None` entry is tolerated and skipped during
/// rendering.
pub type BlockMap = HashMap<String, Option<Block>>;

/// Build an [`AttributeMap`] from name/attribute pairs.
pub fn attribute_map<S, I>(entries: I) -> AttributeMap
where
    S: Into<String>,
    I: IntoIterator<Item = (S, Attribute)>,
{
    entries
        .into_iter()
        .map(|(name, attribute)| (name.into(), Some(attribute)))
        .collect()
}

/// Build a [`BlockMap`] from name/block pairs.
pub fn block_map<S, I>(entries: I) -> BlockMap
where
    S: Into<String>,
    I: IntoIterator<Item = (S, Block)>,
{
    entries
        .into_iter()
        .map(|(name, block)| (name.into(), Some(block)))
        .collect()
}

/// A caller-supplied type override replacing the generated type expression.
///
/// When present on an attribute or element type, the override replaces the
/// otherwise-computed type expression wholesale; it is never merged with the
/// element type information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomType {
    /// Import path required by the type expression, if any. Consumed by the
    /// import bookkeeping that walks the same tree; not rendered here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    /// The type expression emitted in place of the generated one.
    #[serde(rename = "type")]
    pub type_expr: String,
    /// Value type used for the data model field, when it differs from the
    /// framework default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

impl CustomType {
    /// Create a custom type with the given type expression.
    pub fn new(type_expr: impl Into<String>) -> Self {
        Self {
            import: None,
            type_expr: type_expr.into(),
            value_type: None,
        }
    }

    /// Set the import path required by this type.
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.import = Some(import.into());
        self
    }

    /// Set the value type used for the data model field.
    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }
}

/// A custom validator definition: a raw code snippet plus its import, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomValidator {
    /// Import path required by the snippet, if any. Consumed by the import
    /// bookkeeping; not rendered here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    /// The validator expression emitted into the generated validator list.
    pub schema_definition: String,
}

impl CustomValidator {
    /// Create a custom validator from its code snippet.
    pub fn new(schema_definition: impl Into<String>) -> Self {
        Self {
            import: None,
            schema_definition: schema_definition.into(),
        }
    }

    /// Set the import path required by this validator.
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.import = Some(import.into());
        self
    }
}

/// A validator attached to an attribute, block, or nested object.
///
/// Validator semantics are carried entirely by the optional custom payload; a
/// validator with no payload renders nothing. List equality is positional:
/// the same validators in a different order compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Validator {
    /// The custom definition for this validator, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomValidator>,
}

impl Validator {
    /// Create a validator from a custom code snippet.
    pub fn custom(schema_definition: impl Into<String>) -> Self {
        Self {
            custom: Some(CustomValidator::new(schema_definition)),
        }
    }

    /// Create a validator from a custom code snippet with an import path.
    pub fn custom_with_import(
        schema_definition: impl Into<String>,
        import: impl Into<String>,
    ) -> Self {
        Self {
            custom: Some(CustomValidator::new(schema_definition).with_import(import)),
        }
    }
}

/// The declared type of elements inside a List, Map, or Set attribute.
///
/// Collection variants recurse into a child element type; `Object` carries an
/// ordered list of named element types. Each primitive leaf may carry a
/// [`CustomType`] override replacing its type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// A boolean element.
    Bool(Option<CustomType>),
    /// A 64-bit floating point element.
    Float64(Option<CustomType>),
    /// A 64-bit integer element.
    Int64(Option<CustomType>),
    /// An arbitrary-precision number element.
    Number(Option<CustomType>),
    /// A string element.
    String(Option<CustomType>),
    /// A list of elements of a single type.
    List(Box<ElementType>),
    /// A map from string keys to elements of a single type.
    Map(Box<ElementType>),
    /// A set of unique elements of a single type.
    Set(Box<ElementType>),
    /// An object with a fixed list of named element types.
    Object(Vec<ObjectAttributeType>),
}

impl ElementType {
    /// Create a boolean element type.
    pub fn bool() -> Self {
        Self::Bool(None)
    }

    /// Create a 64-bit float element type.
    pub fn float64() -> Self {
        Self::Float64(None)
    }

    /// Create a 64-bit integer element type.
    pub fn int64() -> Self {
        Self::Int64(None)
    }

    /// Create an arbitrary-precision number element type.
    pub fn number() -> Self {
        Self::Number(None)
    }

    /// Create a string element type.
    pub fn string() -> Self {
        Self::String(None)
    }

    /// Create a list element type.
    pub fn list(element: ElementType) -> Self {
        Self::List(Box::new(element))
    }

    /// Create a map element type.
    pub fn map(element: ElementType) -> Self {
        Self::Map(Box::new(element))
    }

    /// Create a set element type.
    pub fn set(element: ElementType) -> Self {
        Self::Set(Box::new(element))
    }

    /// Create an object element type from its named member types.
    pub fn object(attribute_types: Vec<ObjectAttributeType>) -> Self {
        Self::Object(attribute_types)
    }
}

/// A named member of an object element type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectAttributeType {
    /// The member name.
    pub name: String,
    /// The member element type.
    #[serde(rename = "type")]
    pub element_type: ElementType,
}

impl ObjectAttributeType {
    /// Create a named object member type.
    pub fn new(name: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            name: name.into(),
            element_type,
        }
    }
}

/// The kind of an attribute, including any variant-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// A boolean attribute.
    Bool,
    /// A 64-bit floating point attribute.
    Float64,
    /// A 64-bit integer attribute.
    Int64,
    /// An arbitrary-precision number attribute.
    Number,
    /// A string attribute.
    String,
    /// A list attribute with a declared element type.
    List {
        /// The element type of the list.
        element_type: ElementType,
    },
    /// A map attribute with a declared element type.
    Map {
        /// The element type of the map values.
        element_type: ElementType,
    },
    /// A set attribute with a declared element type.
    Set {
        /// The element type of the set.
        element_type: ElementType,
    },
    /// An object attribute with a fixed list of named member types.
    Object {
        /// The named member types of the object.
        attribute_types: Vec<ObjectAttributeType>,
    },
    /// A list of nested objects, each with its own attributes.
    ListNested {
        /// The object wrapped by this attribute.
        nested_object: NestedAttributeObject,
    },
    /// A map of nested objects, each with its own attributes.
    MapNested {
        /// The object wrapped by this attribute.
        nested_object: NestedAttributeObject,
    },
    /// A set of nested objects, each with its own attributes.
    SetNested {
        /// The object wrapped by this attribute.
        nested_object: NestedAttributeObject,
    },
    /// A single nested object carrying its attributes directly.
    SingleNested {
        /// The attributes of the nested object.
        attributes: AttributeMap,
    },
}

/// A single named, typed schema field.
///
/// Every attribute carries the same set of common fields alongside its
/// [`AttributeKind`]. At most one of `required`, `optional`, and `computed`
/// should be set; enforcing that constraint is the loader's concern, not this
/// crate's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// The kind of the attribute, with any variant-specific payload.
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    /// The attribute is required in configuration.
    #[serde(default)]
    pub required: bool,
    /// The attribute is optional in configuration.
    #[serde(default)]
    pub optional: bool,
    /// The attribute is computed by the provider (read-only).
    #[serde(default)]
    pub computed: bool,
    /// The attribute is sensitive and should be hidden in logs/UI.
    #[serde(default)]
    pub sensitive: bool,
    /// Human-readable description of the attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Markdown description. When absent, rendering duplicates `description`
    /// into it; an explicit value is never overwritten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,
    /// Deprecation notice for the attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    /// Override of the generated type expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    /// Validators attached to the attribute, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    /// Create an attribute of the given kind with no common fields set.
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            description: None,
            markdown_description: None,
            deprecation_message: None,
            custom_type: None,
            validators: Vec::new(),
        }
    }

    /// Create a boolean attribute.
    pub fn bool() -> Self {
        Self::new(AttributeKind::Bool)
    }

    /// Create a 64-bit float attribute.
    pub fn float64() -> Self {
        Self::new(AttributeKind::Float64)
    }

    /// Create a 64-bit integer attribute.
    pub fn int64() -> Self {
        Self::new(AttributeKind::Int64)
    }

    /// Create an arbitrary-precision number attribute.
    pub fn number() -> Self {
        Self::new(AttributeKind::Number)
    }

    /// Create a string attribute.
    pub fn string() -> Self {
        Self::new(AttributeKind::String)
    }

    /// Create a list attribute with the given element type.
    pub fn list(element_type: ElementType) -> Self {
        Self::new(AttributeKind::List { element_type })
    }

    /// Create a map attribute with the given element type.
    pub fn map(element_type: ElementType) -> Self {
        Self::new(AttributeKind::Map { element_type })
    }

    /// Create a set attribute with the given element type.
    pub fn set(element_type: ElementType) -> Self {
        Self::new(AttributeKind::Set { element_type })
    }

    /// Create an object attribute from its named member types.
    pub fn object(attribute_types: Vec<ObjectAttributeType>) -> Self {
        Self::new(AttributeKind::Object { attribute_types })
    }

    /// Create a list-nested attribute wrapping the given object.
    pub fn list_nested(nested_object: NestedAttributeObject) -> Self {
        Self::new(AttributeKind::ListNested { nested_object })
    }

    /// Create a map-nested attribute wrapping the given object.
    pub fn map_nested(nested_object: NestedAttributeObject) -> Self {
        Self::new(AttributeKind::MapNested { nested_object })
    }

    /// Create a set-nested attribute wrapping the given object.
    pub fn set_nested(nested_object: NestedAttributeObject) -> Self {
        Self::new(AttributeKind::SetNested { nested_object })
    }

    /// Create a single-nested attribute carrying its attributes directly.
    pub fn single_nested(attributes: AttributeMap) -> Self {
        Self::new(AttributeKind::SingleNested { attributes })
    }

    /// Create a required string attribute.
    pub fn required_string() -> Self {
        Self::string().required()
    }

    /// Create an optional string attribute.
    pub fn optional_string() -> Self {
        Self::string().optional()
    }

    /// Create a computed string attribute.
    pub fn computed_string() -> Self {
        Self::string().computed()
    }

    /// Create a required bool attribute.
    pub fn required_bool() -> Self {
        Self::bool().required()
    }

    /// Create an optional bool attribute.
    pub fn optional_bool() -> Self {
        Self::bool().optional()
    }

    /// Create a required int64 attribute.
    pub fn required_int64() -> Self {
        Self::int64().required()
    }

    /// Create an optional int64 attribute.
    pub fn optional_int64() -> Self {
        Self::int64().optional()
    }

    /// Mark the attribute as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the attribute as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark the attribute as computed.
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Mark the attribute as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Set the description for this attribute.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an explicit markdown description for this attribute.
    pub fn with_markdown_description(mut self, markdown_description: impl Into<String>) -> Self {
        self.markdown_description = Some(markdown_description.into());
        self
    }

    /// Set the deprecation message for this attribute.
    pub fn with_deprecation_message(mut self, deprecation_message: impl Into<String>) -> Self {
        self.deprecation_message = Some(deprecation_message.into());
        self
    }

    /// Set a custom type override for this attribute.
    pub fn with_custom_type(mut self, custom_type: CustomType) -> Self {
        self.custom_type = Some(custom_type);
        self
    }

    /// Append a validator to this attribute.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

/// The object wrapped by a list-, map-, or set-nested attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NestedAttributeObject {
    /// The attributes of the nested object.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: AttributeMap,
    /// Override of the generated object type expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    /// Validators attached to the nested object, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl NestedAttributeObject {
    /// Create an empty nested attribute object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to the nested object.
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), Some(attribute));
        self
    }

    /// Set a custom type override for the nested object.
    pub fn with_custom_type(mut self, custom_type: CustomType) -> Self {
        self.custom_type = Some(custom_type);
        self
    }

    /// Append a validator to the nested object.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

/// The object wrapped by a list- or set-nested block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NestedBlockObject {
    /// The attributes of the nested object.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: AttributeMap,
    /// Nested blocks within the object.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub blocks: BlockMap,
    /// Override of the generated object type expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    /// Validators attached to the nested object, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl NestedBlockObject {
    /// Create an empty nested block object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to the nested object.
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), Some(attribute));
        self
    }

    /// Add a nested block to the nested object.
    pub fn with_block(mut self, name: impl Into<String>, block: Block) -> Self {
        self.blocks.insert(name.into(), Some(block));
        self
    }

    /// Set a custom type override for the nested object.
    pub fn with_custom_type(mut self, custom_type: CustomType) -> Self {
        self.custom_type = Some(custom_type);
        self
    }

    /// Append a validator to the nested object.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

/// The kind of a block, including its variant-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// A list of nested block objects.
    ListNested {
        /// The object wrapped by this block.
        nested_object: NestedBlockObject,
    },
    /// A set of nested block objects.
    SetNested {
        /// The object wrapped by this block.
        nested_object: NestedBlockObject,
    },
    /// A single nested block carrying its attributes and blocks directly.
    SingleNested {
        /// The attributes of the block.
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        attributes: AttributeMap,
        /// Nested blocks within the block.
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        blocks: BlockMap,
    },
}

/// A named, structurally-typed schema sub-object.
///
/// Blocks carry the same descriptive common fields as attributes but no
/// required/optional/computed/sensitive flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// The kind of the block, with its variant-specific payload.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Human-readable description of the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Markdown description. When absent, rendering duplicates `description`
    /// into it; an explicit value is never overwritten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,
    /// Deprecation notice for the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    /// Override of the generated type expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
    /// Validators attached to the block, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Block {
    /// Create a block of the given kind with no common fields set.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            description: None,
            markdown_description: None,
            deprecation_message: None,
            custom_type: None,
            validators: Vec::new(),
        }
    }

    /// Create a list-nested block wrapping the given object.
    pub fn list_nested(nested_object: NestedBlockObject) -> Self {
        Self::new(BlockKind::ListNested { nested_object })
    }

    /// Create a set-nested block wrapping the given object.
    pub fn set_nested(nested_object: NestedBlockObject) -> Self {
        Self::new(BlockKind::SetNested { nested_object })
    }

    /// Create a single-nested block carrying its attributes and blocks directly.
    pub fn single_nested(attributes: AttributeMap, blocks: BlockMap) -> Self {
        Self::new(BlockKind::SingleNested { attributes, blocks })
    }

    /// Set the description for this block.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an explicit markdown description for this block.
    pub fn with_markdown_description(mut self, markdown_description: impl Into<String>) -> Self {
        self.markdown_description = Some(markdown_description.into());
        self
    }

    /// Set the deprecation message for this block.
    pub fn with_deprecation_message(mut self, deprecation_message: impl Into<String>) -> Self {
        self.deprecation_message = Some(deprecation_message.into());
        self
    }

    /// Set a custom type override for this block.
    pub fn with_custom_type(mut self, custom_type: CustomType) -> Self {
        self.custom_type = Some(custom_type);
        self
    }

    /// Append a validator to this block.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

/// Schema for a provider configuration, resource, or data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// The attributes of the schema.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: AttributeMap,
    /// The blocks of the schema.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub blocks: BlockMap,
    /// Human-readable description of the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Markdown description. When absent, rendering duplicates `description`
    /// into it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,
    /// Deprecation notice for the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl Schema {
    /// Create a new empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to the schema.
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), Some(attribute));
        self
    }

    /// Add a block to the schema.
    pub fn with_block(mut self, name: impl Into<String>, block: Block) -> Self {
        self.blocks.insert(name.into(), Some(block));
        self
    }

    /// Set the description for this schema.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an explicit markdown description for this schema.
    pub fn with_markdown_description(mut self, markdown_description: impl Into<String>) -> Self {
        self.markdown_description = Some(markdown_description.into());
        self
    }

    /// Set the deprecation message for this schema.
    pub fn with_deprecation_message(mut self, deprecation_message: impl Into<String>) -> Self {
        self.deprecation_message = Some(deprecation_message.into());
        self
    }
}

/// The full set of schemas for a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderSchema {
    /// Schema for the provider configuration.
    #[serde(default)]
    pub provider: Schema,
    /// Schemas for each resource type.
    #[serde(default)]
    pub resources: HashMap<String, Schema>,
    /// Schemas for each data source type.
    #[serde(default)]
    pub data_sources: HashMap<String, Schema>,
}

impl ProviderSchema {
    /// Create a new empty provider schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider configuration schema.
    pub fn with_provider_config(mut self, schema: Schema) -> Self {
        self.provider = schema;
        self
    }

    /// Add a resource schema.
    pub fn with_resource(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.resources.insert(name.into(), schema);
        self
    }

    /// Add a data source schema.
    pub fn with_data_source(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.data_sources.insert(name.into(), schema);
        self
    }
}
