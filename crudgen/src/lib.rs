//! # crudgen
//!
//! Schema and resolver generator for CRUD entities.
//!
//! crudgen introspects a model's fields, synthesizes a GraphQL SDL schema from
//! them, then generates TypeScript type declarations and resolver stubs from
//! that SDL.
//!
//! ## Features
//!
//! - **Explicit model registry** - Models are registered loader functions or JSON manifests
//! - **Conventional CRUD surface** - `users`, `user`, `createUser`, `updateUser`, `deleteUser`
//! - **SDL round trip** - The written schema is parsed and validated before any TypeScript is emitted
//! - **Pluggable storage** - File-system or in-memory artifact stores
//!
//! ## Quick Start
//!
//! ```ignore
//! use crudgen::prelude::*;
//!
//! let registry = ModelRegistry::with_builtin();
//! let config = PipelineConfig::builder().out_dir("src/_generated").build();
//!
//! let mut pipeline = Pipeline::new(&registry, FsStore::new("."), config);
//! let report = pipeline.run()?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Field kinds, model descriptors, introspection, naming, registry
//! - [`schema`] - SDL synthesis, parsing and validation
//! - [`codegen`] - TypeScript declaration and resolver generation
//! - [`store`] - Artifact stores
//! - [`config`] - Pipeline configuration
//! - [`pipeline`] - The generation pipeline

pub mod config;
pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod store;

pub use config::{BatchPolicy, PipelineBuilder, PipelineConfig};
pub use error::{Error, Result};
pub use pipeline::{ModelArtifacts, Pipeline, RunReport, describe, schema_for};
pub use store::{ArtifactStore, FsStore, MemoryStore};

/// Model-side types and introspection.
pub mod core {
    pub use crudgen_core::*;
}

/// SDL synthesis, parsing and validation.
pub mod schema {
    pub use crudgen_schema::*;
}

/// TypeScript generation.
pub mod codegen {
    pub use crudgen_codegen::*;
}
