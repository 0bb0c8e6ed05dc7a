//! Error types for the generation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for pipeline operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Model loading or introspection error.
    #[error("model error: {0}")]
    Model(#[from] crudgen_core::ModelError),

    /// Schema parsing or validation error.
    #[error("schema error: {0}")]
    Schema(#[from] crudgen_schema::SchemaError),

    /// TypeScript generation error.
    #[error("codegen error: {0}")]
    Codegen(#[from] crudgen_codegen::CodegenError),

    /// Artifact store error.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        /// Path the store operation targeted.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// One or more models failed under the continue-on-error policy.
    #[error("{} of {total} models failed: {}", .failures.len(), failed_names(.failures))]
    Batch {
        /// Number of models attempted.
        total: usize,
        /// Failed models with their errors, in run order.
        failures: Vec<(String, Error)>,
    },
}

impl Error {
    /// Creates an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn failed_names(failures: &[(String, Error)]) -> String {
    failures
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
