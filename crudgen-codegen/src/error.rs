//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// SDL parsing or schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] crudgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A Query or Mutation field has no implementation (strict mode only).
    #[error("no implementation for {group} field '{field}'")]
    MissingImplementation {
        /// Operation group.
        group: String,
        /// Field name.
        field: String,
    },
}
