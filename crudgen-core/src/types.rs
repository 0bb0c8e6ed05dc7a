//! Field kind definitions.
//!
//! [`NativeKind`] is the primitive tag reported by a model definition, while
//! [`FieldKind`] is the abstract classification the generator works with.

use std::fmt;

/// Abstract kind of one model field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Text value.
    String,
    /// Numeric value.
    Float,
    /// Boolean flag.
    Boolean,
    /// Record identifier.
    Identifier,
    /// Homogeneous list of another kind.
    ListOf(Box<FieldKind>),
    /// Unrecognized native kind, passed through by name.
    Native(String),
}

impl FieldKind {
    /// Creates a list kind wrapping `inner`.
    #[must_use]
    pub fn list_of(inner: FieldKind) -> Self {
        Self::ListOf(Box::new(inner))
    }

    /// Returns true if this is the identifier kind.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier)
    }

    /// Returns true if this kind, or any element kind, is a pass-through.
    #[must_use]
    pub fn is_native(&self) -> bool {
        match self {
            Self::Native(_) => true,
            Self::ListOf(inner) => inner.is_native(),
            _ => false,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Float => f.write_str("Float"),
            Self::Boolean => f.write_str("Boolean"),
            Self::Identifier => f.write_str("Identifier"),
            Self::ListOf(inner) => write!(f, "ListOf({inner})"),
            Self::Native(name) => f.write_str(name),
        }
    }
}

/// Primitive kind tag as reported by a model definition.
///
/// Parsed from strings such as `"String"`, `"Number"`, `"Boolean"`,
/// `"Array<String>"` or `"[Number]"`. Any other tag is kept verbatim in
/// [`NativeKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NativeKind {
    /// String-like.
    String,
    /// Numeric.
    Number,
    /// Boolean.
    Boolean,
    /// Array-like with an element kind.
    Array(Box<NativeKind>),
    /// Anything else, by name.
    Other(String),
}

impl NativeKind {
    /// Parses a native kind tag. Never fails.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();

        if let Some(inner) = tag
            .strip_prefix("Array<")
            .and_then(|rest| rest.strip_suffix('>'))
            .or_else(|| tag.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')))
        {
            return Self::Array(Box::new(Self::parse(inner)));
        }

        match tag.to_ascii_lowercase().as_str() {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            _ => Self::Other(tag.to_string()),
        }
    }

    /// Creates an array kind wrapping `inner`.
    #[must_use]
    pub fn array(inner: NativeKind) -> Self {
        Self::Array(Box::new(inner))
    }
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Number => f.write_str("Number"),
            Self::Boolean => f.write_str("Boolean"),
            Self::Array(inner) => write!(f, "Array<{inner}>"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

impl From<String> for NativeKind {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<NativeKind> for String {
    fn from(kind: NativeKind) -> Self {
        kind.to_string()
    }
}
