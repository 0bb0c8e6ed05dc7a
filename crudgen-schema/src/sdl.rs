//! SDL synthesis.
//!
//! Renders one object type plus its Query and Mutation groups from a model
//! descriptor. Every object field is written non-null.

use crate::operations::{OperationDescriptor, Param, operations_in};
use crate::types::TypeRef;
use crudgen_core::{FieldMap, ModelDescriptor, OperationGroup};

/// Synthesizes the SDL of a model.
#[must_use]
pub fn synthesize(model: &ModelDescriptor) -> String {
    let mut output = String::new();

    output.push_str(&render_object_type(model.name(), model.fields()));

    for group in [OperationGroup::Query, OperationGroup::Mutation] {
        output.push('\n');
        output.push_str(&render_group(group, &operations_in(model, group)));
    }

    output
}

/// Synthesizes the SDL for `type_name` with the given fields.
#[must_use]
pub fn synthesize_schema(type_name: &str, fields: &FieldMap) -> String {
    synthesize(&ModelDescriptor::new(type_name, fields.clone()))
}

/// Renders the object type block.
fn render_object_type(type_name: &str, fields: &FieldMap) -> String {
    let mut output = format!("type {} {{\n", type_name);

    for (name, kind) in fields.iter() {
        let ty = TypeRef::from_field_kind(kind).non_null();
        output.push_str(&format!("  {}: {}\n", name, ty));
    }

    output.push_str("}\n");
    output
}

/// Renders operations of one group as a root type block.
fn render_group(group: OperationGroup, operations: &[OperationDescriptor]) -> String {
    let mut output = format!("type {} {{\n", group.type_name());

    for op in operations {
        output.push_str(&format!(
            "  {}{}: {}\n",
            op.name,
            render_params(&op.params),
            op.returns
        ));
    }

    output.push_str("}\n");
    output
}

/// Renders an argument list; empty lists are omitted.
fn render_params(params: &[Param]) -> String {
    if params.is_empty() {
        return String::new();
    }

    let rendered: Vec<String> = params
        .iter()
        .map(|param| format!("{}: {}", param.name, param.ty))
        .collect();
    format!("({})", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::FieldKind;

    fn user_fields() -> FieldMap {
        let mut fields = FieldMap::new("_id");
        fields.insert("name", FieldKind::String);
        fields
    }

    const USER_SDL: &str = "\
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
";

    #[test]
    fn test_user_schema() {
        assert_eq!(synthesize_schema("User", &user_fields()), USER_SDL);
    }

    #[test]
    fn test_multi_word_type_loads_back() {
        let mut fields = FieldMap::new("_id");
        fields.insert("title", FieldKind::String);
        fields.insert("tags", FieldKind::list_of(FieldKind::String));

        let graph = crate::load_schema(&synthesize_schema("BlogPost", &fields))
            .expect("synthesized SDL should load");

        let object = graph.get_type("BlogPost").expect("object type");
        assert_eq!(object.field("tags").unwrap().ty.to_string(), "[String!]!");

        let query = graph.query_type().expect("Query root");
        let names: Vec<&str> = query.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["blogposts", "blogpost"]);
        assert_eq!(query.field("blogposts").unwrap().ty.to_string(), "[BlogPost!]!");
        assert_eq!(query.field("blogpost").unwrap().ty.to_string(), "BlogPost");

        let mutation = graph.mutation_type().expect("Mutation root");
        let names: Vec<&str> = mutation.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["createBlogPost", "updateBlogPost", "deleteBlogPost"]);
        assert_eq!(mutation.field("createBlogPost").unwrap().ty.to_string(), "BlogPost!");
        assert_eq!(mutation.field("deleteBlogPost").unwrap().ty.to_string(), "Boolean!");
    }

    #[test]
    fn test_deterministic() {
        let fields = user_fields();
        let first = synthesize_schema("User", &fields);
        for _ in 0..5 {
            assert_eq!(synthesize_schema("User", &fields), first);
        }
    }

    #[test]
    fn test_every_object_field_non_null() {
        let mut fields = user_fields();
        fields.insert("scores", FieldKind::list_of(FieldKind::Float));
        fields.insert("active", FieldKind::Boolean);

        let sdl = synthesize_schema("Player", &fields);
        let body: Vec<&str> = sdl
            .lines()
            .skip(1)
            .take_while(|line| *line != "}")
            .collect();

        assert_eq!(body.len(), 4);
        assert!(body.iter().all(|line| line.ends_with('!')));
        assert!(sdl.contains("  scores: [Float!]!\n"));
    }

    #[test]
    fn test_identifier_only_model_has_no_empty_args() {
        let sdl = synthesize_schema("Tag", &FieldMap::new("_id"));
        assert!(sdl.contains("  createTag: Tag!\n"));
        assert!(sdl.contains("  updateTag(id: ID!): Tag\n"));
        assert!(!sdl.contains("()"));
    }

    #[test]
    fn test_native_kind_passed_through() {
        let mut fields = user_fields();
        fields.insert("birthday", FieldKind::Native("Date".into()));
        let sdl = synthesize_schema("User", &fields);
        assert!(sdl.contains("  birthday: Date!\n"));
        assert!(sdl.contains("updateUser(id: ID!, name: String, birthday: Date): User"));
    }
}
