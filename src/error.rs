//! Error types for the schema generator.

use thiserror::Error;

/// Errors that can occur while rendering schema definitions.
///
/// Rendering is all-or-nothing: any error from a nested entity propagates
/// unchanged to the top of the recursion, and no partial output is returned
/// for the containing schema. Equality comparison has no error channel; it is
/// a total function over the compared entities.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A custom type override carries no type expression.
    ///
    /// This is malformed input data from the loader, not a recoverable
    /// condition; the offending attribute or block name is carried in the
    /// message.
    #[error("custom type for \"{0}\" has an empty type expression")]
    EmptyCustomType(String),

    /// A template failed to parse or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
