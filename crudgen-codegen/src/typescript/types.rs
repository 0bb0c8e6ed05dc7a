//! TypeScript type declaration generation.

use super::{args_object, declaration_name, ts_type};
use crudgen_core::OperationGroup;
use crudgen_schema::{ObjectTypeDef, SchemaGraph};

/// Fixed helper declarations at the top of every declaration module.
const PREAMBLE: &str = "\
// Generated by crudgen. Do not edit.

import type { GraphQLResolveInfo } from 'graphql';

export type Maybe<T> = T | null;
export type InputMaybe<T> = T | null | undefined;

export type Scalars = {
  ID: { input: string; output: string; }
  String: { input: string; output: string; }
  Boolean: { input: boolean; output: boolean; }
  Int: { input: number; output: number; }
  Float: { input: number; output: number; }
};

export type ResolverFn<TResult, TParent, TContext, TArgs> = (
  parent: TParent,
  args: TArgs,
  context: TContext,
  info: GraphQLResolveInfo
) => Promise<TResult> | TResult;

export type Resolver<TResult, TParent = unknown, TContext = unknown, TArgs = unknown> =
  ResolverFn<TResult, TParent, TContext, TArgs>;

export type ResolverTypeWrapper<T> = Promise<T> | T;
";

/// Generator for TypeScript type declarations.
pub struct TypeDeclarationGenerator<'a> {
    graph: &'a SchemaGraph,
}

impl<'a> TypeDeclarationGenerator<'a> {
    /// Creates a new type declaration generator.
    #[must_use]
    pub fn new(graph: &'a SchemaGraph) -> Self {
        Self { graph }
    }

    /// Generates the full declaration module.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::from(PREAMBLE);

        for object in self.graph.object_types() {
            output.push('\n');
            output.push_str(&self.generate_record(object));
        }

        let roots = self.roots();
        for (_, root) in &roots {
            output.push('\n');
            output.push_str(&self.generate_resolver_signatures(root));
        }

        output.push('\n');
        output.push_str("export type GQLResolvers<ContextType = unknown> = {\n");
        for (group, root) in &roots {
            output.push_str(&format!(
                "  {}?: {}Resolvers<ContextType>;\n",
                group,
                declaration_name(&root.name)
            ));
        }
        output.push_str("};\n");

        output
    }

    fn roots(&self) -> Vec<(OperationGroup, &'a ObjectTypeDef)> {
        [OperationGroup::Query, OperationGroup::Mutation]
            .into_iter()
            .filter_map(|group| self.graph.root_type(group).map(|root| (group, root)))
            .collect()
    }

    /// Generates the record declaration of one object type.
    fn generate_record(&self, object: &ObjectTypeDef) -> String {
        let mut output = format!("export type {} = {{\n", declaration_name(&object.name));

        for field in object.fields() {
            output.push_str(&format!("  {}: {};\n", field.name, ts_type(&field.ty)));
        }

        output.push_str("};\n");
        output
    }

    /// Generates the resolver signature block of a root type.
    fn generate_resolver_signatures(&self, root: &ObjectTypeDef) -> String {
        let mut output = format!(
            "export type {}Resolvers<ContextType = unknown, ParentType = unknown> = {{\n",
            declaration_name(&root.name)
        );

        for field in root.fields() {
            let args = if field.args.is_empty() {
                "Record<string, never>".to_string()
            } else {
                args_object(&field.args, ", ")
            };
            output.push_str(&format!(
                "  {}?: Resolver<{}, ParentType, ContextType, {}>,\n",
                field.name,
                ts_type(&field.ty),
                args
            ));
        }

        output.push_str("};\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_schema::load_schema;

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

    fn generate(sdl: &str) -> String {
        let graph = load_schema(sdl).expect("Failed to load schema");
        TypeDeclarationGenerator::new(&graph).generate()
    }

    #[test]
    fn test_records() {
        let output = generate(USER_SDL);

        assert!(output.starts_with("// Generated by crudgen"));
        assert!(output.contains("export type GQLUser = {\n  _id: string;\n  name: string;\n};\n"));
        assert!(output.contains(
            "export type GQLQuery = {\n  users: Array<GQLUser>;\n  user: GQLUser;\n};\n"
        ));
        assert!(output.contains("  deleteUser: boolean;\n"));
    }

    #[test]
    fn test_resolver_signatures() {
        let output = generate(USER_SDL);

        assert!(output.contains(
            "export type GQLQueryResolvers<ContextType = unknown, ParentType = unknown> = {\n"
        ));
        assert!(output.contains(
            "  users?: Resolver<Array<GQLUser>, ParentType, ContextType, Record<string, never>>,\n"
        ));
        assert!(output.contains(
            "  updateUser?: Resolver<GQLUser, ParentType, ContextType, { id: string, name: string }>,\n"
        ));
        assert!(output.contains("  Query?: GQLQueryResolvers<ContextType>;\n"));
        assert!(output.contains("  Mutation?: GQLMutationResolvers<ContextType>;\n"));
    }

    #[test]
    fn test_without_mutation_root() {
        let output = generate("type Query { ping: Boolean! }");
        assert!(output.contains("GQLQueryResolvers"));
        assert!(!output.contains("GQLMutationResolvers"));
        assert!(output.ends_with(
            "export type GQLResolvers<ContextType = unknown> = {\n  Query?: GQLQueryResolvers<ContextType>;\n};\n"
        ));
    }

    #[test]
    fn test_custom_root_name() {
        let output = generate("schema { query: Root }\ntype Root { ping: Boolean! }");
        assert!(output.contains("  Query?: GQLRootResolvers<ContextType>;\n"));
    }
}
