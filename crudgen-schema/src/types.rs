//! SDL type references.
//!
//! [`TypeRef`] is shared by the operation descriptors that feed the SDL
//! synthesizer and by the parsed schema graph, so both sides speak the same
//! wrapper vocabulary.

use crudgen_core::FieldKind;
use std::fmt;

/// Built-in GraphQL scalar names.
pub const BUILTIN_SCALARS: [&str; 5] = ["ID", "String", "Int", "Float", "Boolean"];

/// Returns true if `name` is a built-in scalar.
#[must_use]
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// SDL type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Named type (scalar or declared type).
    Named(String),
    /// List wrapper.
    List(Box<TypeRef>),
    /// Non-null wrapper.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps `inner` in a list.
    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps `self` in a non-null marker. Already non-null types are returned
    /// unchanged.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Maps a field kind to its nullable SDL type. List elements are
    /// non-null.
    #[must_use]
    pub fn from_field_kind(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::String => Self::named("String"),
            FieldKind::Float => Self::named("Float"),
            FieldKind::Boolean => Self::named("Boolean"),
            FieldKind::Identifier => Self::named("ID"),
            FieldKind::ListOf(inner) => Self::list(Self::from_field_kind(inner).non_null()),
            FieldKind::Native(name) => Self::named(name.clone()),
        }
    }

    /// Returns the terminal type name under all wrappers.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
