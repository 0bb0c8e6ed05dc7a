//! TypeScript code generation modules.

pub mod resolvers;
pub mod types;

pub use resolvers::ResolverGenerator;
pub use types::TypeDeclarationGenerator;

use crudgen_schema::{ArgDef, TypeRef};

/// Prefix of every generated declaration name.
pub const TYPE_PREFIX: &str = "GQL";

/// Maps an SDL type to its TypeScript type.
///
/// Non-null markers are stripped, lists become `Array<T>`, scalars map to
/// primitives and any other named type to its generated declaration.
#[must_use]
pub fn ts_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::NonNull(inner) => ts_type(inner),
        TypeRef::List(inner) => format!("Array<{}>", ts_type(inner)),
        TypeRef::Named(name) => ts_scalar(name)
            .map(str::to_string)
            .unwrap_or_else(|| declaration_name(name)),
    }
}

/// Maps a built-in scalar name to a TypeScript primitive.
#[must_use]
pub fn ts_scalar(name: &str) -> Option<&'static str> {
    match name {
        "Boolean" => Some("boolean"),
        "Int" | "Float" => Some("number"),
        "String" | "ID" => Some("string"),
        _ => None,
    }
}

/// Name of the generated declaration for an SDL type.
#[must_use]
pub fn declaration_name(type_name: &str) -> String {
    format!("{}{}", TYPE_PREFIX, type_name)
}

/// Renders `{ a: T<sep> b: U }` for an argument list.
fn args_object(args: &[ArgDef], separator: &str) -> String {
    let rendered: Vec<String> = args
        .iter()
        .map(|arg| format!("{}: {}", arg.name, ts_type(&arg.ty)))
        .collect();
    format!("{{ {} }}", rendered.join(separator))
}
