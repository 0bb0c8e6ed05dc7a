//! SDL parser.
//!
//! Grammar and tokenizing are delegated to `graphql-parser`; this module
//! lowers its document into a [`SchemaGraph`].

use crate::error::ParseError;
use crate::ir::{ArgDef, FieldDef, ObjectTypeDef, SchemaGraph};
use crate::types::TypeRef;
use graphql_parser::schema::{self as ast, Definition, TypeDefinition, TypeExtension};

/// Parses SDL text into a schema graph.
///
/// Object type extensions are merged into their target once every definition
/// has been read, so an extension may precede the type it extends.
///
/// # Arguments
/// * `text` - SDL document
///
/// # Returns
/// Parsed graph or parse error.
///
/// # Errors
/// Returns `ParseError` if the text is not valid SDL, declares a type twice,
/// holds more than one `schema` definition or extends an undeclared type.
pub fn parse_sdl(text: &str) -> Result<SchemaGraph, ParseError> {
    let document = graphql_parser::parse_schema::<String>(text)?;

    let mut graph = SchemaGraph::default();
    let mut seen_schema = false;
    let mut object_extensions = Vec::new();
    let mut other_extensions = Vec::new();

    for definition in document.definitions {
        match definition {
            Definition::SchemaDefinition(schema) => {
                if seen_schema {
                    return Err(ParseError::duplicate("schema", "schema"));
                }
                seen_schema = true;
                graph.query = schema.query;
                graph.mutation = schema.mutation;
            }
            Definition::TypeDefinition(TypeDefinition::Object(object)) => {
                if object.name.starts_with("__") {
                    continue;
                }
                check_unique(&graph, &object.name)?;
                graph.objects.push(lower_object(object));
            }
            Definition::TypeDefinition(other) => {
                let name = type_definition_name(&other);
                if name.starts_with("__") {
                    continue;
                }
                check_unique(&graph, &name)?;
                graph.other_types.push(name);
            }
            Definition::TypeExtension(TypeExtension::Object(extension)) => {
                if !extension.name.starts_with("__") {
                    object_extensions.push(extension);
                }
            }
            Definition::TypeExtension(other) => {
                let name = type_extension_name(&other);
                if !name.starts_with("__") {
                    other_extensions.push(name);
                }
            }
            Definition::DirectiveDefinition(_) => {}
        }
    }

    for extension in object_extensions {
        let target = graph
            .objects
            .iter_mut()
            .find(|object| object.name == extension.name)
            .ok_or_else(|| ParseError::unknown_extension(&extension.name))?;
        target.fields.extend(lower_fields(extension.fields));
    }

    if let Some(name) = other_extensions
        .into_iter()
        .find(|name| !graph.other_types.contains(name))
    {
        return Err(ParseError::unknown_extension(name));
    }

    if !seen_schema {
        graph.query = default_root(&graph, "Query");
        graph.mutation = default_root(&graph, "Mutation");
    }

    Ok(graph)
}

fn check_unique(graph: &SchemaGraph, name: &str) -> Result<(), ParseError> {
    let taken = graph.objects.iter().any(|object| object.name == name)
        || graph.other_types.iter().any(|other| other == name);
    if taken {
        return Err(ParseError::duplicate("type", name));
    }
    Ok(())
}

fn default_root(graph: &SchemaGraph, name: &str) -> Option<String> {
    graph.get_type(name).map(|object| object.name.clone())
}

fn type_definition_name(definition: &TypeDefinition<'_, String>) -> String {
    match definition {
        TypeDefinition::Scalar(t) => t.name.clone(),
        TypeDefinition::Object(t) => t.name.clone(),
        TypeDefinition::Interface(t) => t.name.clone(),
        TypeDefinition::Union(t) => t.name.clone(),
        TypeDefinition::Enum(t) => t.name.clone(),
        TypeDefinition::InputObject(t) => t.name.clone(),
    }
}

fn type_extension_name(extension: &TypeExtension<'_, String>) -> String {
    match extension {
        TypeExtension::Scalar(t) => t.name.clone(),
        TypeExtension::Object(t) => t.name.clone(),
        TypeExtension::Interface(t) => t.name.clone(),
        TypeExtension::Union(t) => t.name.clone(),
        TypeExtension::Enum(t) => t.name.clone(),
        TypeExtension::InputObject(t) => t.name.clone(),
    }
}

fn lower_object(object: ast::ObjectType<'_, String>) -> ObjectTypeDef {
    ObjectTypeDef {
        name: object.name,
        fields: lower_fields(object.fields),
    }
}

fn lower_fields(fields: Vec<ast::Field<'_, String>>) -> Vec<FieldDef> {
    fields
        .into_iter()
        .map(|field| FieldDef {
            name: field.name,
            ty: lower_type(field.field_type),
            args: field
                .arguments
                .into_iter()
                .map(|arg| ArgDef {
                    name: arg.name,
                    ty: lower_type(arg.value_type),
                })
                .collect(),
        })
        .collect()
}

fn lower_type(ty: ast::Type<'_, String>) -> TypeRef {
    match ty {
        ast::Type::NamedType(name) => TypeRef::Named(name),
        ast::Type::ListType(inner) => TypeRef::List(Box::new(lower_type(*inner))),
        ast::Type::NonNullType(inner) => TypeRef::NonNull(Box::new(lower_type(*inner))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_SDL: &str = r#"
type User {
  _id: ID!
  name: String!
}

type Query {
  users: [User!]!
  user(id: ID!): User
}

type Mutation {
  createUser(name: String!): User!
  updateUser(id: ID!, name: String): User
  deleteUser(id: ID!): Boolean!
}
"#;

    #[test]
    fn test_parse_user_schema() {
        let graph = parse_sdl(USER_SDL).expect("Failed to parse SDL");

        let names: Vec<&str> = graph.object_types().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Query", "Mutation"]);

        let query = graph.query_type().expect("Query root");
        let users = query.field("users").unwrap();
        assert_eq!(users.ty.to_string(), "[User!]!");
        assert!(users.args.is_empty());

        let mutation = graph.mutation_type().expect("Mutation root");
        let update = mutation.field("updateUser").unwrap();
        let args: Vec<String> = update
            .args
            .iter()
            .map(|a| format!("{}: {}", a.name, a.ty))
            .collect();
        assert_eq!(args, vec!["id: ID!", "name: String"]);
    }

    #[test]
    fn test_schema_definition_roots() {
        let sdl = r#"
schema { query: RootQuery }
type RootQuery { ping: Boolean! }
type Query { unused: Int }
"#;
        let graph = parse_sdl(sdl).unwrap();
        assert_eq!(graph.query_type().map(|q| q.name.as_str()), Some("RootQuery"));
        assert!(graph.mutation_type().is_none());
    }

    #[test]
    fn test_other_types_recorded() {
        let sdl = "scalar Date\nenum Role { ADMIN USER }\ntype Query { now: Date! }";
        let graph = parse_sdl(sdl).unwrap();
        assert!(graph.is_known_type("Date"));
        assert!(graph.is_known_type("Role"));
        assert_eq!(graph.object_types().count(), 1);
    }

    #[test]
    fn test_introspection_types_skipped() {
        let sdl = "type __Hidden { x: Int }\ntype Query { y: Int }";
        let graph = parse_sdl(sdl).unwrap();
        assert!(graph.get_type("__Hidden").is_none());
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_sdl("type User { name: }").unwrap_err();
        assert!(matches!(err, ParseError::Syntax(_)));
    }

    #[test]
    fn test_object_extension_merged() {
        let sdl = r#"
extend type Query { extra: Int }
type Query { ping: Boolean! }
extend type Query { count(min: Int): Int! }
"#;
        let graph = parse_sdl(sdl).unwrap();
        let query = graph.query_type().expect("Query root");
        let names: Vec<&str> = query.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["ping", "extra", "count"]);
        assert_eq!(query.field("count").unwrap().args.len(), 1);
    }

    #[test]
    fn test_extension_of_undeclared_type() {
        let err =
            parse_sdl("type Query { x: Int }\nextend type Post { title: String }").unwrap_err();
        assert!(matches!(err, ParseError::UnknownExtensionTarget { ref name } if name == "Post"));

        let err = parse_sdl("type Query { x: Int }\nextend enum Role { GUEST }").unwrap_err();
        assert!(matches!(err, ParseError::UnknownExtensionTarget { ref name } if name == "Role"));
    }

    #[test]
    fn test_non_object_extension_accepted() {
        let sdl = "enum Role { ADMIN }\nextend enum Role { GUEST }\ntype Query { role: Role }";
        assert!(parse_sdl(sdl).is_ok());
    }

    #[test]
    fn test_duplicate_type() {
        let err = parse_sdl("type A { x: Int }\nscalar A").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateDefinition { ref name, .. } if name == "A"));
    }
}
