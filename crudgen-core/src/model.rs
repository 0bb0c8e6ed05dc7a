//! Model definitions and descriptors.
//!
//! A [`ModelDefinition`] is what a model collaborator hands over: native field
//! tags in source order. A [`ModelDescriptor`] is the immutable snapshot the
//! generator consumes after introspection.

use crate::types::{FieldKind, NativeKind};
use serde::{Deserialize, Serialize};

/// Conventional name of the identifier field.
pub const DEFAULT_IDENTIFIER: &str = "_id";

fn default_identifier() -> String {
    DEFAULT_IDENTIFIER.to_string()
}

/// Externally supplied model definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Type name.
    pub name: String,
    /// Name of the primary-key field.
    #[serde(default = "default_identifier")]
    pub identifier: String,
    /// Fields in source order.
    #[serde(default)]
    pub fields: Vec<NativeField>,
}

impl ModelDefinition {
    /// Creates a definition with the conventional identifier and no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: default_identifier(),
            fields: Vec::new(),
        }
    }

    /// Overrides the identifier field name.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, kind: NativeKind) -> Self {
        self.fields.push(NativeField {
            name: name.into(),
            kind,
        });
        self
    }
}

/// One field of a [`ModelDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeField {
    /// Field name.
    pub name: String,
    /// Native kind tag.
    pub kind: NativeKind,
}

/// Ordered field name to kind mapping with the identifier always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    identifier: String,
    entries: Vec<(String, FieldKind)>,
}

impl FieldMap {
    /// Creates a map holding only the identifier field.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            entries: vec![(identifier.clone(), FieldKind::Identifier)],
            identifier,
        }
    }

    /// Appends a field. Returns false, leaving the map unchanged, if the name
    /// is already present.
    pub fn insert(&mut self, name: impl Into<String>, kind: FieldKind) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, kind));
        true
    }

    /// Returns the identifier field name.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Looks up a field kind by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldKind> {
        self.entries
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, kind)| kind)
    }

    /// Returns true if a field with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(field, _)| field == name)
    }

    /// Iterates over all fields, identifier first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldKind)> {
        self.entries.iter().map(|(name, kind)| (name.as_str(), kind))
    }

    /// Iterates over every field except the identifier.
    pub fn non_identifier(&self) -> impl Iterator<Item = (&str, &FieldKind)> {
        self.iter().skip(1)
    }

    /// Number of fields including the identifier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the identifier is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable snapshot of a model ready for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    name: String,
    fields: FieldMap,
}

impl ModelDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field map.
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }
}
