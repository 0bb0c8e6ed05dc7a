//! Error types for SDL parsing and validation.

use thiserror::Error;

/// Error type for SDL parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not valid SDL.
    #[error("SDL syntax error: {0}")]
    Syntax(#[from] graphql_parser::schema::ParseError),

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, schema).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// An extension names a type that is not declared with a matching kind.
    #[error("extension of undeclared type '{name}'")]
    UnknownExtensionTarget {
        /// Extended type name.
        name: String,
    },
}

impl ParseError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an unknown extension target error.
    pub fn unknown_extension(name: impl Into<String>) -> Self {
        Self::UnknownExtensionTarget { name: name.into() }
    }
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Referenced type is neither a built-in scalar nor declared.
    #[error("type '{name}' not found (referenced by '{location}')")]
    TypeNotFound {
        /// Type name.
        name: String,
        /// Field or argument path referencing it.
        location: String,
    },

    /// A root operation type is missing or not an object type.
    #[error("{group} root type '{name}' is not a declared object type")]
    InvalidRoot {
        /// Operation group.
        group: String,
        /// Named root type.
        name: String,
    },

    /// Duplicate field in one object type.
    #[error("duplicate field '{field}' in type '{type_name}'")]
    DuplicateField {
        /// Object type name.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// Duplicate argument on one field.
    #[error("duplicate argument '{argument}' on field '{field}'")]
    DuplicateArgument {
        /// Field path.
        field: String,
        /// Argument name.
        argument: String,
    },
}
