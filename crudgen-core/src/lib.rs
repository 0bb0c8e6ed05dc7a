//! # crudgen Core
//!
//! Model-side building blocks for the crudgen generator.
//!
//! This crate provides:
//! - Field kinds and native kind tags
//! - Ordered field maps and immutable model descriptors
//! - Field introspection from model definitions
//! - Naming conventions shared by every pass
//! - A name-keyed model registry with JSON manifest support

pub mod error;
pub mod introspect;
pub mod model;
pub mod naming;
pub mod registry;
pub mod types;

pub use error::{ModelError, Result};
pub use introspect::{introspect, introspect_fields, map_native_kind};
pub use model::{DEFAULT_IDENTIFIER, FieldMap, ModelDefinition, ModelDescriptor, NativeField};
pub use naming::{CrudOperation, OperationGroup};
pub use registry::{ModelLoader, ModelManifest, ModelRegistry, user_model};
pub use types::{FieldKind, NativeKind};
