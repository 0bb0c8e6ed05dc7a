//! Naming conventions shared by every generator pass.
//!
//! The SDL synthesizer and the resolver implementation table both derive
//! operation names from here, so the two cannot drift apart.

use std::fmt;

/// Operation group a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationGroup {
    /// Read-only operations.
    Query,
    /// Mutating operations.
    Mutation,
}

impl OperationGroup {
    /// Returns the root type name of the group.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
        }
    }
}

impl fmt::Display for OperationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// The five CRUD operations generated per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudOperation {
    /// Fetch every record.
    List,
    /// Fetch one record by id.
    Get,
    /// Insert a record.
    Create,
    /// Patch a record by id.
    Update,
    /// Remove a record by id.
    Delete,
}

impl CrudOperation {
    /// All operations in emission order.
    pub const ALL: [CrudOperation; 5] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    /// Returns the group this operation is emitted in.
    #[must_use]
    pub const fn group(self) -> OperationGroup {
        match self {
            Self::List | Self::Get => OperationGroup::Query,
            Self::Create | Self::Update | Self::Delete => OperationGroup::Mutation,
        }
    }

    /// Returns the field name of this operation for `type_name`.
    #[must_use]
    pub fn field_name(self, type_name: &str) -> String {
        match self {
            Self::List => plural_name(type_name),
            Self::Get => singular_name(type_name),
            Self::Create => format!("create{type_name}"),
            Self::Update => format!("update{type_name}"),
            Self::Delete => format!("delete{type_name}"),
        }
    }
}

/// Singular operation name: the lowercased type name.
#[must_use]
pub fn singular_name(type_name: &str) -> String {
    type_name.to_lowercase()
}

/// Plural operation name: singular plus `s`, no irregular forms.
#[must_use]
pub fn plural_name(type_name: &str) -> String {
    format!("{}s", singular_name(type_name))
}

/// Name of the document-database handle for a type.
#[must_use]
pub fn model_handle_name(type_name: &str) -> String {
    format!("{type_name}Model")
}

/// File stem used for every artifact generated for a type.
#[must_use]
pub fn file_stem(type_name: &str) -> String {
    singular_name(type_name)
}

/// Returns true if `name` is a PascalCase identifier.
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// Returns true if `name` is a valid GraphQL name.
#[must_use]
pub fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(CrudOperation::List.field_name("User"), "users");
        assert_eq!(CrudOperation::Get.field_name("User"), "user");
        assert_eq!(CrudOperation::Create.field_name("User"), "createUser");
        assert_eq!(CrudOperation::Update.field_name("User"), "updateUser");
        assert_eq!(CrudOperation::Delete.field_name("User"), "deleteUser");
    }

    #[test]
    fn test_plural_is_plain_suffix() {
        assert_eq!(plural_name("Person"), "persons");
        assert_eq!(plural_name("BlogPost"), "blogposts");
    }

    #[test]
    fn test_groups() {
        assert_eq!(CrudOperation::Get.group(), OperationGroup::Query);
        assert_eq!(CrudOperation::Delete.group(), OperationGroup::Mutation);
        assert_eq!(OperationGroup::Mutation.to_string(), "Mutation");
    }

    #[test]
    fn test_is_pascal_case() {
        assert!(is_pascal_case("User"));
        assert!(is_pascal_case("BlogPost2"));
        assert!(!is_pascal_case("user"));
        assert!(!is_pascal_case("Blog_Post"));
        assert!(!is_pascal_case(""));
    }

    #[test]
    fn test_is_graphql_name() {
        assert!(is_graphql_name("_id"));
        assert!(is_graphql_name("createdAt"));
        assert!(!is_graphql_name("1st"));
        assert!(!is_graphql_name("first-name"));
    }
}
