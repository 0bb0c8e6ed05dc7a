//! Top-level code generator.

use crate::error::CodegenError;
use crate::implementation::ImplementationLookup;
use crate::typescript::{ResolverGenerator, TypeDeclarationGenerator};
use crudgen_schema::SchemaGraph;

/// Default module specifier the resolver module imports declarations from.
pub const DEFAULT_TYPES_MODULE: &str = "./graphql";

/// Options controlling generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Fail instead of emitting a throwing stub for fields with no body.
    pub strict_implementations: bool,
    /// Module specifier of the type declarations, as seen from the resolver module.
    pub types_module: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            strict_implementations: false,
            types_module: DEFAULT_TYPES_MODULE.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Sets the declarations module specifier.
    #[must_use]
    pub fn types_module(mut self, module: impl Into<String>) -> Self {
        self.types_module = module.into();
        self
    }

    /// Enables or disables strict implementation checking.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_implementations = strict;
        self
    }
}

/// Both generated TypeScript modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    /// Type declaration module.
    pub types: String,
    /// Resolver stub module.
    pub resolvers: String,
}

/// Main code generator.
pub struct Generator<'a> {
    graph: &'a SchemaGraph,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with default options.
    #[must_use]
    pub fn new(graph: &'a SchemaGraph) -> Self {
        Self::with_options(graph, GeneratorOptions::default())
    }

    /// Creates a new generator with the given options.
    #[must_use]
    pub fn with_options(graph: &'a SchemaGraph, options: GeneratorOptions) -> Self {
        Self { graph, options }
    }

    /// Returns the generator options.
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates the type declaration module.
    #[must_use]
    pub fn generate_types(&self) -> String {
        TypeDeclarationGenerator::new(self.graph).generate()
    }

    /// Generates the resolver stub module.
    ///
    /// # Errors
    /// Returns `CodegenError::MissingImplementation` in strict mode.
    pub fn generate_resolvers(
        &self,
        lookup: &dyn ImplementationLookup,
    ) -> Result<String, CodegenError> {
        ResolverGenerator::new(self.graph, lookup, &self.options).generate()
    }

    /// Generates both modules.
    ///
    /// # Errors
    /// Returns `CodegenError` if resolver generation fails.
    pub fn generate(&self, lookup: &dyn ImplementationLookup) -> Result<GeneratedSources, CodegenError> {
        let types = self.generate_types();
        let resolvers = self.generate_resolvers(lookup)?;
        tracing::debug!(
            "Generated {} bytes of declarations and {} bytes of resolvers",
            types.len(),
            resolvers.len()
        );
        Ok(GeneratedSources { types, resolvers })
    }
}
