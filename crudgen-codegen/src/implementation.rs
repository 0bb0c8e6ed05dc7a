//! Resolver implementation bodies.
//!
//! Resolver stubs get their bodies from an [`ImplementationLookup`] keyed by
//! exact field name. A field with no entry gets [`NOT_IMPLEMENTED_BODY`],
//! which fails when the resolver is called, not when it is generated.

use crudgen_core::naming::{model_handle_name, plural_name, singular_name};
use crudgen_core::{CrudOperation, DEFAULT_IDENTIFIER, ModelDescriptor};
use crudgen_schema::operations::ID_ARGUMENT;
use std::collections::HashMap;

/// Body spliced into stubs that have no implementation.
pub const NOT_IMPLEMENTED_BODY: &str = "throw new Error('Not implemented');";

/// Source of resolver bodies keyed by field name.
pub trait ImplementationLookup {
    /// Returns the body for `field_name`, if any.
    fn implementation(&self, field_name: &str) -> Option<&str>;
}

/// Hand-assembled or standard table of resolver bodies.
#[derive(Debug, Clone, Default)]
pub struct ImplementationTable {
    bodies: HashMap<String, String>,
}

impl ImplementationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard CRUD table for a model.
    ///
    /// Keys come from [`CrudOperation::field_name`], the same function the SDL
    /// synthesizer names operations with.
    #[must_use]
    pub fn standard(model: &ModelDescriptor) -> Self {
        let mut table = Self::new();
        table.extend_standard(model);
        table
    }

    /// Adds the standard CRUD bodies of a model, replacing existing entries.
    pub fn extend_standard(&mut self, model: &ModelDescriptor) {
        let bodies = StandardBodies::new(model);
        for operation in CrudOperation::ALL {
            self.insert(operation.field_name(model.name()), bodies.render(operation));
        }
    }

    /// Inserts or replaces a body.
    pub fn insert(&mut self, field_name: impl Into<String>, body: impl Into<String>) {
        self.bodies.insert(field_name.into(), body.into());
    }

    /// Returns the body for `field_name`, if any.
    #[must_use]
    pub fn get(&self, field_name: &str) -> Option<&str> {
        self.bodies.get(field_name).map(String::as_str)
    }

    /// Returns true if an entry exists for `field_name`.
    #[must_use]
    pub fn contains(&self, field_name: &str) -> bool {
        self.bodies.contains_key(field_name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl ImplementationLookup for ImplementationTable {
    fn implementation(&self, field_name: &str) -> Option<&str> {
        self.get(field_name)
    }
}

/// Renders the standard document-database bodies of one model.
struct StandardBodies<'a> {
    type_name: &'a str,
    handle: String,
    identifier: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> StandardBodies<'a> {
    fn new(model: &'a ModelDescriptor) -> Self {
        Self {
            type_name: model.name(),
            handle: model_handle_name(model.name()),
            identifier: model.fields().identifier(),
            fields: model.fields().non_identifier().map(|(name, _)| name).collect(),
        }
    }

    fn render(&self, operation: CrudOperation) -> String {
        match operation {
            CrudOperation::List => self.list(),
            CrudOperation::Get => self.get(),
            CrudOperation::Create => self.create(),
            CrudOperation::Update => self.update(),
            CrudOperation::Delete => self.delete(),
        }
    }

    fn list(&self) -> String {
        let plural = self.local(&plural_name(self.type_name));
        let singular = self.local(&singular_name(self.type_name));
        format!(
            "const {plural} = await {handle}.find().lean();\n\
             return {plural}.map(({singular}) => ({});",
            self.object_literal(&singular),
            handle = self.handle,
        )
    }

    fn get(&self) -> String {
        let found = self.local(&singular_name(self.type_name));
        let query = if self.identifier == DEFAULT_IDENTIFIER {
            format!("findById({ID_ARGUMENT})")
        } else {
            format!("findOne({})", self.identifier_filter())
        };
        format!(
            "const {found} = await {}.{query}.lean();\n{}\nreturn {};",
            self.handle,
            self.not_found_guard(&found),
            self.object_literal(&found),
        )
    }

    fn create(&self) -> String {
        let created = self.local(&format!("new{}", self.type_name));
        let saved = self.local(&format!("saved{}", self.type_name));
        format!(
            "const {created} = new {}({});\n\
             const {saved} = await {created}.save();\n\
             return {};",
            self.handle,
            self.shorthand(),
            self.object_literal(&saved),
        )
    }

    fn update(&self) -> String {
        let updated = self.local(&format!("updated{}", self.type_name));
        let query = if self.identifier == DEFAULT_IDENTIFIER {
            format!("findByIdAndUpdate({ID_ARGUMENT}, ")
        } else {
            format!("findOneAndUpdate({}, ", self.identifier_filter())
        };
        format!(
            "const {updated} = await {}.{query}{}, {{ new: true }}).lean();\n{}\nreturn {};",
            self.handle,
            self.shorthand(),
            self.not_found_guard(&updated),
            self.object_literal(&updated),
        )
    }

    fn delete(&self) -> String {
        let result = self.local("result");
        format!(
            "const {result} = await {}.deleteOne({});\n\
             return {result}.deletedCount === 1;",
            self.handle,
            self.identifier_filter(),
        )
    }

    /// `{ <identifier>: id }`
    fn identifier_filter(&self) -> String {
        format!("{{ {}: {ID_ARGUMENT} }}", self.identifier)
    }

    /// Returns `base`, prefixed with underscores until it shadows nothing in scope.
    fn local(&self, base: &str) -> String {
        let mut name = base.to_string();
        while self.is_taken(&name) {
            name.insert(0, '_');
        }
        name
    }

    fn is_taken(&self, name: &str) -> bool {
        name == ID_ARGUMENT
            || name == self.handle
            || name == self.identifier
            || self.fields.iter().any(|field| *field == name)
    }

    /// `{ a, b }` over the non-identifier fields.
    fn shorthand(&self) -> String {
        if self.fields.is_empty() {
            return "{}".to_string();
        }
        format!("{{ {} }}", self.fields.join(", "))
    }

    fn not_found_guard(&self, var: &str) -> String {
        format!(
            "if (!{var}) {{\n  throw new Error('{} not found');\n}}",
            self.type_name
        )
    }

    /// Object literal mapping a document to the GraphQL shape.
    fn object_literal(&self, var: &str) -> String {
        let mut output = String::from("{\n");
        output.push_str(&format!(
            "  {id}: {var}.{id}.toString(),\n",
            id = self.identifier
        ));
        for field in &self.fields {
            output.push_str(&format!("  {field}: {var}.{field},\n"));
        }
        output.push('}');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::{FieldKind, FieldMap};

    fn user() -> ModelDescriptor {
        let mut fields = FieldMap::new("_id");
        fields.insert("name", FieldKind::String);
        ModelDescriptor::new("User", fields)
    }

    #[test]
    fn test_standard_keys() {
        let table = ImplementationTable::standard(&user());
        assert_eq!(table.len(), 5);
        for key in ["users", "user", "createUser", "updateUser", "deleteUser"] {
            assert!(table.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_create_body() {
        let table = ImplementationTable::standard(&user());
        assert_eq!(
            table.get("createUser").unwrap(),
            "const newUser = new UserModel({ name });\n\
             const savedUser = await newUser.save();\n\
             return {\n  _id: savedUser._id.toString(),\n  name: savedUser.name,\n};"
        );
    }

    #[test]
    fn test_list_body() {
        let table = ImplementationTable::standard(&user());
        assert_eq!(
            table.get("users").unwrap(),
            "const users = await UserModel.find().lean();\n\
             return users.map((user) => ({\n  _id: user._id.toString(),\n  name: user.name,\n}));"
        );
    }

    #[test]
    fn test_get_and_update_guard_not_found() {
        let table = ImplementationTable::standard(&user());
        for key in ["user", "updateUser"] {
            assert!(table.get(key).unwrap().contains("throw new Error('User not found');"));
        }
        assert!(
            table
                .get("updateUser")
                .unwrap()
                .starts_with("const updatedUser = await UserModel.findByIdAndUpdate(id, { name }, { new: true }).lean();")
        );
    }

    #[test]
    fn test_delete_uses_identifier() {
        let model = ModelDescriptor::new("Tag", FieldMap::new("slug"));
        let table = ImplementationTable::standard(&model);
        assert_eq!(
            table.get("deleteTag").unwrap(),
            "const result = await TagModel.deleteOne({ slug: id });\nreturn result.deletedCount === 1;"
        );
        assert!(table.get("createTag").unwrap().contains("new TagModel({})"));
    }

    #[test]
    fn test_custom_identifier_lookups() {
        let mut fields = FieldMap::new("slug");
        fields.insert("title", FieldKind::String);
        let table = ImplementationTable::standard(&ModelDescriptor::new("Tag", fields));

        assert!(
            table
                .get("tag")
                .unwrap()
                .starts_with("const tag = await TagModel.findOne({ slug: id }).lean();\n")
        );
        assert!(table.get("updateTag").unwrap().starts_with(
            "const updatedTag = await TagModel.findOneAndUpdate({ slug: id }, { title }, { new: true }).lean();\n"
        ));
        for key in ["tag", "updateTag"] {
            assert!(!table.get(key).unwrap().contains("findById"));
        }
        assert!(table.get("tag").unwrap().contains("  slug: tag.slug.toString(),\n"));
    }

    #[test]
    fn test_locals_do_not_shadow_arguments() {
        let table = ImplementationTable::standard(&ModelDescriptor::new("Id", FieldMap::new("_id")));
        assert!(
            table
                .get("id")
                .unwrap()
                .starts_with("const __id = await IdModel.findById(id).lean();\nif (!__id) {")
        );
        assert!(table.get("id").unwrap().contains("  _id: __id._id.toString(),\n"));
    }

    #[test]
    fn test_locals_do_not_shadow_fields() {
        let mut fields = FieldMap::new("_id");
        fields.insert("newUser", FieldKind::Boolean);
        fields.insert("savedUser", FieldKind::Boolean);
        fields.insert("updatedUser", FieldKind::Boolean);
        fields.insert("result", FieldKind::String);
        let table = ImplementationTable::standard(&ModelDescriptor::new("User", fields));

        let create = table.get("createUser").unwrap();
        assert!(create.starts_with(
            "const _newUser = new UserModel({ newUser, savedUser, updatedUser, result });\n\
             const _savedUser = await _newUser.save();\n"
        ));
        assert!(create.contains("  newUser: _savedUser.newUser,\n"));
        assert!(
            table
                .get("updateUser")
                .unwrap()
                .starts_with("const _updatedUser = await UserModel.findByIdAndUpdate(")
        );
        assert!(
            table
                .get("deleteUser")
                .unwrap()
                .starts_with("const _result = await UserModel.deleteOne({ _id: id });")
        );
    }

    #[test]
    fn test_hand_assembled_table() {
        let mut table = ImplementationTable::new();
        assert!(table.is_empty());
        table.insert("ping", "return true;");
        assert_eq!(table.implementation("ping"), Some("return true;"));
        assert_eq!(table.implementation("pong"), None);
    }
}
