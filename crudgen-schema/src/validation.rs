//! Schema validation utilities.
//!
//! The generators only walk a graph after it passed these checks, so every
//! named type they meet is either a built-in scalar or declared.

use crate::error::SchemaError;
use crate::ir::{FieldDef, ObjectTypeDef, SchemaGraph};
use crate::parser::parse_sdl;
use crudgen_core::OperationGroup;
use std::collections::HashSet;

/// Validates a parsed graph.
///
/// # Arguments
/// * `graph` - The graph to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue.
///
/// # Errors
/// Returns `SchemaError` if a root is not an object type, a type reference
/// is unresolved, or a field or argument name repeats.
pub fn validate_graph(graph: &SchemaGraph) -> Result<(), SchemaError> {
    validate_roots(graph)?;
    for object in graph.object_types() {
        validate_object(graph, object)?;
    }
    Ok(())
}

/// Parses and validates SDL text in one step.
///
/// # Errors
/// Returns `SchemaError` if parsing or validation fails.
pub fn load_schema(text: &str) -> Result<SchemaGraph, SchemaError> {
    let graph = parse_sdl(text)?;
    validate_graph(&graph)?;
    Ok(graph)
}

fn validate_roots(graph: &SchemaGraph) -> Result<(), SchemaError> {
    for group in [OperationGroup::Query, OperationGroup::Mutation] {
        let Some(name) = graph.root_name(group) else {
            continue;
        };
        if graph.get_type(name).is_none() {
            return Err(SchemaError::InvalidRoot {
                group: group.to_string(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_object(graph: &SchemaGraph, object: &ObjectTypeDef) -> Result<(), SchemaError> {
    let mut seen_fields = HashSet::new();

    for field in object.fields() {
        if !seen_fields.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                type_name: object.name.clone(),
                field: field.name.clone(),
            });
        }

        let location = format!("{}.{}", object.name, field.name);
        check_type(graph, field.ty.name(), &location)?;
        validate_args(graph, field, &location)?;
    }

    Ok(())
}

fn validate_args(graph: &SchemaGraph, field: &FieldDef, location: &str) -> Result<(), SchemaError> {
    let mut seen_args = HashSet::new();

    for arg in &field.args {
        if !seen_args.insert(arg.name.as_str()) {
            return Err(SchemaError::DuplicateArgument {
                field: location.to_string(),
                argument: arg.name.clone(),
            });
        }
        check_type(graph, arg.ty.name(), &format!("{}({})", location, arg.name))?;
    }

    Ok(())
}

fn check_type(graph: &SchemaGraph, name: &str, location: &str) -> Result<(), SchemaError> {
    if graph.is_known_type(name) {
        return Ok(());
    }
    Err(SchemaError::TypeNotFound {
        name: name.to_string(),
        location: location.to_string(),
    })
}
