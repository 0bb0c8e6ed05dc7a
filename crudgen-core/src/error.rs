//! Error types for model loading and introspection.

use thiserror::Error;

/// Error type for model operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// No loader is registered under the requested name.
    #[error("model '{name}' not found")]
    NotFound {
        /// Requested model name.
        name: String,
    },

    /// The same field name appears twice in one model.
    #[error("duplicate field '{field}' in model '{model}'")]
    DuplicateField {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
    },

    /// A field was declared with an empty name.
    #[error("empty field name in model '{model}'")]
    EmptyFieldName {
        /// Model name.
        model: String,
    },

    /// A field name is not a valid identifier.
    #[error("invalid field name '{field}' in model '{model}'")]
    InvalidFieldName {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
    },

    /// The model type name is not a PascalCase identifier.
    #[error("invalid type name '{name}': expected a PascalCase identifier")]
    InvalidTypeName {
        /// Offending name.
        name: String,
    },

    /// A loader was registered twice under the same name.
    #[error("model '{name}' is already registered")]
    AlreadyRegistered {
        /// Model name.
        name: String,
    },

    /// Model manifest could not be decoded.
    #[error("invalid model manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Creates a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates a duplicate field error.
    pub fn duplicate_field(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            model: model.into(),
            field: field.into(),
        }
    }
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
