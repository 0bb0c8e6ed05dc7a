//! Field introspection.
//!
//! Turns a [`ModelDefinition`] into an explicit [`FieldMap`]. The native kind
//! mapping is total: unrecognized kinds pass through by name instead of
//! failing, which can yield SDL that later fails schema validation.

use crate::error::{ModelError, Result};
use crate::model::{FieldMap, ModelDefinition, ModelDescriptor};
use crate::naming::{is_graphql_name, is_pascal_case};
use crate::types::{FieldKind, NativeKind};

/// Maps a native kind tag to a field kind.
#[must_use]
pub fn map_native_kind(kind: &NativeKind) -> FieldKind {
    match kind {
        NativeKind::String => FieldKind::String,
        NativeKind::Number => FieldKind::Float,
        NativeKind::Boolean => FieldKind::Boolean,
        NativeKind::Array(inner) => FieldKind::list_of(map_native_kind(inner)),
        NativeKind::Other(name) => FieldKind::Native(name.clone()),
    }
}

/// Builds the field map of a model.
///
/// The identifier field is emitted first as [`FieldKind::Identifier`] whether
/// or not, and wherever, it appears in the source field list.
///
/// # Errors
/// Returns `ModelError` if a field name is empty, invalid or duplicated.
pub fn introspect_fields(def: &ModelDefinition) -> Result<FieldMap> {
    check_field_name(&def.name, &def.identifier)?;
    let mut fields = FieldMap::new(def.identifier.clone());

    for field in &def.fields {
        if field.name == def.identifier {
            continue;
        }
        check_field_name(&def.name, &field.name)?;

        let kind = map_native_kind(&field.kind);
        if kind.is_native() {
            tracing::debug!(
                "Field {}.{} has unrecognized kind '{}', passing through",
                def.name,
                field.name,
                field.kind
            );
        }

        if !fields.insert(field.name.clone(), kind) {
            return Err(ModelError::duplicate_field(&def.name, &field.name));
        }
    }

    Ok(fields)
}

/// Introspects a model into an immutable descriptor.
///
/// # Errors
/// Returns `ModelError` if the type name is not PascalCase or a field is
/// rejected by [`introspect_fields`].
pub fn introspect(def: &ModelDefinition) -> Result<ModelDescriptor> {
    if !is_pascal_case(&def.name) {
        return Err(ModelError::InvalidTypeName {
            name: def.name.clone(),
        });
    }

    let fields = introspect_fields(def)?;
    tracing::debug!("Introspected {} with {} fields", def.name, fields.len());
    Ok(ModelDescriptor::new(def.name.clone(), fields))
}

fn check_field_name(model: &str, field: &str) -> Result<()> {
    if field.is_empty() {
        return Err(ModelError::EmptyFieldName {
            model: model.to_string(),
        });
    }
    if !is_graphql_name(field) {
        return Err(ModelError::InvalidFieldName {
            model: model.to_string(),
            field: field.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> ModelDefinition {
        ModelDefinition::new("User").field("name", NativeKind::String)
    }

    #[test]
    fn test_introspect_user() {
        let descriptor = introspect(&user()).expect("introspect failed");
        assert_eq!(descriptor.name(), "User");

        let fields: Vec<_> = descriptor.fields().iter().collect();
        assert_eq!(
            fields,
            vec![
                ("_id", &FieldKind::Identifier),
                ("name", &FieldKind::String),
            ]
        );
    }

    #[test]
    fn test_identifier_moved_first() {
        let def = ModelDefinition::new("Post")
            .field("title", NativeKind::String)
            .field("views", NativeKind::Number)
            .field("_id", NativeKind::Other("ObjectId".into()))
            .field("published", NativeKind::Boolean);

        let fields = introspect_fields(&def).unwrap();
        let names: Vec<&str> = fields.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["_id", "title", "views", "published"]);
        assert_eq!(fields.get("_id"), Some(&FieldKind::Identifier));
    }

    #[test]
    fn test_identifier_added_when_absent() {
        let def = ModelDefinition::new("Tag").with_identifier("tagId");
        let fields = introspect_fields(&def).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.identifier(), "tagId");
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(map_native_kind(&NativeKind::Number), FieldKind::Float);
        assert_eq!(
            map_native_kind(&NativeKind::array(NativeKind::array(NativeKind::Boolean))),
            FieldKind::list_of(FieldKind::list_of(FieldKind::Boolean))
        );
    }

    #[test]
    fn test_unknown_kind_passes_through() {
        let def = ModelDefinition::new("Event")
            .field("at", NativeKind::Other("Date".into()))
            .field("tags", NativeKind::array(NativeKind::Other("Mixed".into())));

        let fields = introspect_fields(&def).expect("fallback must not fail");
        assert_eq!(fields.get("at"), Some(&FieldKind::Native("Date".into())));
        assert_eq!(
            fields.get("tags"),
            Some(&FieldKind::list_of(FieldKind::Native("Mixed".into())))
        );
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let def = user().field("name", NativeKind::Number);
        let err = introspect(&def).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateField { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let err = introspect(&ModelDefinition::new("user")).unwrap_err();
        assert!(matches!(err, ModelError::InvalidTypeName { .. }));

        let err = introspect(&ModelDefinition::new("User").field("", NativeKind::String))
            .unwrap_err();
        assert!(matches!(err, ModelError::EmptyFieldName { .. }));

        let err = introspect(&ModelDefinition::new("User").field("first name", NativeKind::String))
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidFieldName { .. }));
    }
}
