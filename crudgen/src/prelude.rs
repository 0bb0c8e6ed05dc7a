//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use crudgen::prelude::*;
//! ```

// Model types
pub use crudgen_core::{
    FieldKind, FieldMap, ModelDefinition, ModelDescriptor, ModelError, ModelManifest,
    ModelRegistry, NativeKind, introspect,
};

// Schema types
pub use crudgen_schema::{SchemaError, SchemaGraph, TypeRef, load_schema, synthesize};

// Codegen types
pub use crudgen_codegen::{
    CodegenError, GeneratedSources, Generator, GeneratorOptions, ImplementationLookup,
    ImplementationTable,
};

// Pipeline types
pub use crate::config::{BatchPolicy, PipelineBuilder, PipelineConfig};
pub use crate::error::Error;
pub use crate::pipeline::{ModelArtifacts, Pipeline, RunReport};
pub use crate::store::{ArtifactStore, FsStore, MemoryStore};
