//! Shared schema fixtures for tests.
//!
//! These builders return small but representative trees covering primitive,
//! collection, and nested kinds. They are used by this crate's own tests and
//! are handy when testing code that consumes the generator's output.
//!
//! # Example
//!
//! ```
//! use tfplugin_schema_gen::{testing, Renderer};
//!
//! let renderer = Renderer::new()?;
//! let code = renderer.resource_schema("server", &testing::sample_resource_schema())?;
//! assert!(code.contains("func ServerResourceSchema"));
//! # Ok::<(), tfplugin_schema_gen::GeneratorError>(())
//! ```

use crate::schema::{
    attribute_map, Attribute, Block, BlockMap, ElementType, NestedAttributeObject,
    NestedBlockObject, Schema, Validator,
};

/// A resource schema exercising primitive, collection, and nested kinds.
pub fn sample_resource_schema() -> Schema {
    Schema::new()
        .with_attribute("id", Attribute::computed_string())
        .with_attribute("name", Attribute::required_string())
        .with_attribute(
            "tags",
            Attribute::map(ElementType::string()).optional(),
        )
        .with_attribute("rule", sample_nested_attribute())
        .with_block("timeouts", sample_block())
        .with_description("A sample resource.")
}

/// A list-nested attribute with a single-nested child, three levels deep.
pub fn sample_nested_attribute() -> Attribute {
    Attribute::list_nested(
        NestedAttributeObject::new()
            .with_attribute("enabled", Attribute::required_bool())
            .with_attribute(
                "limits",
                Attribute::single_nested(attribute_map([
                    ("burst", Attribute::optional_int64()),
                    ("rate", Attribute::required_int64()),
                ])),
            ),
    )
}

/// A set-nested block carrying a validator.
pub fn sample_block() -> Block {
    Block::set_nested(
        NestedBlockObject::new()
            .with_attribute("create", Attribute::optional_string())
            .with_validator(Validator::custom("setvalidator.SizeAtMost(1)")),
    )
}

/// A single-nested block with an inner list-nested block.
pub fn sample_block_with_children() -> Block {
    let listener = Block::list_nested(
        NestedBlockObject::new().with_attribute("port", Attribute::required_int64()),
    );
    let mut blocks = BlockMap::new();
    blocks.insert("listener".to_string(), Some(listener));
    Block::single_nested(
        attribute_map([("address", Attribute::required_string())]),
        blocks,
    )
}
