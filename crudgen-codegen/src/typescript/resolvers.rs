//! TypeScript resolver stub generation.

use super::args_object;
use crate::error::CodegenError;
use crate::generator::GeneratorOptions;
use crate::implementation::{ImplementationLookup, NOT_IMPLEMENTED_BODY};
use crudgen_core::OperationGroup;
use crudgen_core::naming::model_handle_name;
use crudgen_schema::{FieldDef, ObjectTypeDef, SchemaGraph};

/// Indentation of resolver bodies inside the resolver map.
const BODY_INDENT: &str = "      ";

/// Generator for resolver stubs.
pub struct ResolverGenerator<'a> {
    graph: &'a SchemaGraph,
    lookup: &'a dyn ImplementationLookup,
    options: &'a GeneratorOptions,
}

impl<'a> ResolverGenerator<'a> {
    /// Creates a new resolver generator.
    #[must_use]
    pub fn new(
        graph: &'a SchemaGraph,
        lookup: &'a dyn ImplementationLookup,
        options: &'a GeneratorOptions,
    ) -> Self {
        Self {
            graph,
            lookup,
            options,
        }
    }

    /// Generates the resolver module.
    ///
    /// # Errors
    /// Returns `CodegenError::MissingImplementation` in strict mode when a
    /// root field has no body in the lookup.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::from("// Generated by crudgen. Do not edit.\n\n");
        output.push_str(&self.generate_imports());
        output.push_str("\nexport const resolvers: GQLResolvers = {\n");

        for group in [OperationGroup::Query, OperationGroup::Mutation] {
            if let Some(root) = self.graph.root_type(group) {
                output.push_str(&format!("  {}: {{\n", group));
                output.push_str(&self.generate_group(group, root)?);
                output.push_str("  },\n");
            }
        }

        output.push_str("};\n");
        Ok(output)
    }

    fn generate_imports(&self) -> String {
        let mut output = String::new();

        for object in self.graph.object_types() {
            if self.graph.is_root(&object.name) {
                continue;
            }
            output.push_str(&format!(
                "import {{ {} }} from \"../models/{}\";\n",
                model_handle_name(&object.name),
                object.name
            ));
        }

        output.push_str(&format!(
            "import type {{ GQLResolvers }} from \"{}\";\n",
            self.options.types_module
        ));
        output
    }

    fn generate_group(
        &self,
        group: OperationGroup,
        root: &ObjectTypeDef,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        for field in root.fields() {
            let body = self.body_for(group, &field.name)?;
            output.push_str(&generate_stub(field, body));
        }
        Ok(output)
    }

    fn body_for(&self, group: OperationGroup, field_name: &str) -> Result<&'a str, CodegenError> {
        if let Some(body) = self.lookup.implementation(field_name) {
            return Ok(body);
        }

        if self.options.strict_implementations {
            return Err(CodegenError::MissingImplementation {
                group: group.to_string(),
                field: field_name.to_string(),
            });
        }

        tracing::warn!(
            "No implementation for {}.{}, emitting a stub that throws",
            group,
            field_name
        );
        Ok(NOT_IMPLEMENTED_BODY)
    }
}

/// Renders one async resolver stub.
fn generate_stub(field: &FieldDef, body: &str) -> String {
    let args = if field.args.is_empty() {
        "_args: Record<string, never>".to_string()
    } else {
        let names: Vec<&str> = field.args.iter().map(|arg| arg.name.as_str()).collect();
        format!("{{ {} }}: {}", names.join(", "), args_object(&field.args, "; "))
    };

    let mut output = format!(
        "    {}: async (_parent: unknown, {}, _context: unknown) => {{\n",
        field.name, args
    );
    for line in body.lines() {
        if line.is_empty() {
            output.push('\n');
        } else {
            output.push_str(BODY_INDENT);
            output.push_str(line);
            output.push('\n');
        }
    }
    output.push_str("    },\n");
    output
}
