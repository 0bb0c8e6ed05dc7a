//! Parsed schema graph.
//!
//! This module provides the structured view of an SDL document consumed by the
//! code generators: object types with ordered fields and arguments, plus the
//! Query and Mutation roots.

use crate::types::{TypeRef, is_builtin_scalar};
use crudgen_core::OperationGroup;

/// Structured type graph of a parsed SDL document.
#[derive(Debug, Clone, Default)]
pub struct SchemaGraph {
    /// Object types in declaration order.
    pub(crate) objects: Vec<ObjectTypeDef>,
    /// Names of declared non-object types (scalars, enums, inputs, ...).
    pub(crate) other_types: Vec<String>,
    /// Query root name.
    pub(crate) query: Option<String>,
    /// Mutation root name.
    pub(crate) mutation: Option<String>,
}

impl SchemaGraph {
    /// Object types in declaration order, introspection types excluded.
    pub fn object_types(&self) -> impl Iterator<Item = &ObjectTypeDef> {
        self.objects.iter()
    }

    /// Looks up an object type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&ObjectTypeDef> {
        self.objects.iter().find(|object| object.name == name)
    }

    /// Name of the root type for a group, if any.
    #[must_use]
    pub fn root_name(&self, group: OperationGroup) -> Option<&str> {
        match group {
            OperationGroup::Query => self.query.as_deref(),
            OperationGroup::Mutation => self.mutation.as_deref(),
        }
    }

    /// Root object type for a group, if declared.
    #[must_use]
    pub fn root_type(&self, group: OperationGroup) -> Option<&ObjectTypeDef> {
        self.root_name(group).and_then(|name| self.get_type(name))
    }

    /// Query root object type.
    #[must_use]
    pub fn query_type(&self) -> Option<&ObjectTypeDef> {
        self.root_type(OperationGroup::Query)
    }

    /// Mutation root object type.
    #[must_use]
    pub fn mutation_type(&self) -> Option<&ObjectTypeDef> {
        self.root_type(OperationGroup::Mutation)
    }

    /// Returns true if `name` is a Query or Mutation root.
    #[must_use]
    pub fn is_root(&self, name: &str) -> bool {
        self.query.as_deref() == Some(name) || self.mutation.as_deref() == Some(name)
    }

    /// Returns true if `name` is a built-in scalar or declared in the document.
    #[must_use]
    pub fn is_known_type(&self, name: &str) -> bool {
        is_builtin_scalar(name)
            || self.get_type(name).is_some()
            || self.other_types.iter().any(|other| other == name)
    }
}

/// Object type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTypeDef {
    /// Type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl ObjectTypeDef {
    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Field of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
    /// Arguments in declaration order.
    pub args: Vec<ArgDef>,
}

impl FieldDef {
    /// Looks up an argument by name.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&ArgDef> {
        self.args.iter().find(|arg| arg.name == name)
    }
}

/// Field argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDef {
    /// Argument name.
    pub name: String,
    /// Argument type.
    pub ty: TypeRef,
}
