//! # crudgen Schema
//!
//! GraphQL SDL synthesis, parsing and validation.
//!
//! This crate provides:
//! - Operation descriptors derived from model descriptors
//! - SDL synthesis for an object type and its Query/Mutation groups
//! - SDL parsing into a structured type graph
//! - Schema validation

pub mod error;
pub mod ir;
pub mod operations;
pub mod parser;
pub mod sdl;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{ArgDef, FieldDef, ObjectTypeDef, SchemaGraph};
pub use operations::{OperationDescriptor, Param, derive_operations, operations_in};
pub use parser::parse_sdl;
pub use sdl::{synthesize, synthesize_schema};
pub use types::{BUILTIN_SCALARS, TypeRef, is_builtin_scalar};
pub use validation::{load_schema, validate_graph};
