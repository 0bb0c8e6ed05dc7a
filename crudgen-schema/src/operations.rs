//! Operation descriptors derived from a model.
//!
//! Every model yields the same five CRUD operations. Argument nullability
//! follows a fixed policy: `id` and `create` arguments are required, `update`
//! arguments other than `id` are optional.

use crate::types::TypeRef;
use crudgen_core::{CrudOperation, ModelDescriptor, OperationGroup};

/// Name of the identifier argument on get, update and delete.
pub const ID_ARGUMENT: &str = "id";

/// One operation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

impl Param {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    fn id() -> Self {
        Self::new(ID_ARGUMENT, TypeRef::named("ID").non_null())
    }
}

/// One Query or Mutation field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Field name.
    pub name: String,
    /// Which CRUD operation this is.
    pub operation: CrudOperation,
    /// Parameters in emission order.
    pub params: Vec<Param>,
    /// Return type.
    pub returns: TypeRef,
}

impl OperationDescriptor {
    /// Group the operation is emitted in.
    #[must_use]
    pub const fn group(&self) -> OperationGroup {
        self.operation.group()
    }
}

/// Derives the five CRUD operations of a model, Query group first.
#[must_use]
pub fn derive_operations(model: &ModelDescriptor) -> Vec<OperationDescriptor> {
    CrudOperation::ALL
        .iter()
        .map(|&operation| derive_operation(model, operation))
        .collect()
}

/// Derives the operations of one group.
#[must_use]
pub fn operations_in(model: &ModelDescriptor, group: OperationGroup) -> Vec<OperationDescriptor> {
    derive_operations(model)
        .into_iter()
        .filter(|op| op.group() == group)
        .collect()
}

fn derive_operation(model: &ModelDescriptor, operation: CrudOperation) -> OperationDescriptor {
    let type_name = model.name();
    let object = TypeRef::named(type_name);

    let (params, returns) = match operation {
        CrudOperation::List => (
            Vec::new(),
            TypeRef::list(object.non_null()).non_null(),
        ),
        CrudOperation::Get => (vec![Param::id()], object),
        CrudOperation::Create => (field_params(model, true), object.non_null()),
        CrudOperation::Update => {
            let mut params = vec![Param::id()];
            params.extend(field_params(model, false));
            (params, object)
        }
        CrudOperation::Delete => (vec![Param::id()], TypeRef::named("Boolean").non_null()),
    };

    OperationDescriptor {
        name: operation.field_name(type_name),
        operation,
        params,
        returns,
    }
}

fn field_params(model: &ModelDescriptor, required: bool) -> Vec<Param> {
    model
        .fields()
        .non_identifier()
        .map(|(name, kind)| {
            let ty = TypeRef::from_field_kind(kind);
            Param::new(name, if required { ty.non_null() } else { ty })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::{FieldKind, FieldMap};

    fn user() -> ModelDescriptor {
        let mut fields = FieldMap::new("_id");
        fields.insert("name", FieldKind::String);
        fields.insert("age", FieldKind::Float);
        ModelDescriptor::new("User", fields)
    }

    fn signature(op: &OperationDescriptor) -> String {
        let params: Vec<String> = op
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect();
        format!("{}({}): {}", op.name, params.join(", "), op.returns)
    }

    #[test]
    fn test_derive_operations() {
        let ops = derive_operations(&user());
        let signatures: Vec<String> = ops.iter().map(signature).collect();
        assert_eq!(
            signatures,
            vec![
                "users(): [User!]!",
                "user(id: ID!): User",
                "createUser(name: String!, age: Float!): User!",
                "updateUser(id: ID!, name: String, age: Float): User",
                "deleteUser(id: ID!): Boolean!",
            ]
        );
    }

    #[test]
    fn test_operations_in_group() {
        let queries = operations_in(&user(), OperationGroup::Query);
        assert_eq!(queries.len(), 2);
        assert!(queries.iter().all(|op| op.group() == OperationGroup::Query));

        let mutations = operations_in(&user(), OperationGroup::Mutation);
        assert_eq!(mutations.len(), 3);
    }

    #[test]
    fn test_identifier_only_model() {
        let model = ModelDescriptor::new("Tag", FieldMap::new("_id"));
        let ops = derive_operations(&model);
        assert!(ops[2].params.is_empty());
        assert_eq!(ops[3].params.len(), 1);
    }
}
