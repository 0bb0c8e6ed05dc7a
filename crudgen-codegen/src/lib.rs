//! # crudgen Codegen
//!
//! TypeScript generation from GraphQL SDL.
//!
//! This crate provides:
//! - Type declarations for every object type and resolver signatures for the roots
//! - Async resolver stubs with bodies spliced from an implementation table
//! - The standard document-database CRUD bodies for a model

pub mod error;
pub mod generator;
pub mod implementation;
pub mod typescript;

pub use error::CodegenError;
pub use generator::{GeneratedSources, Generator, GeneratorOptions};
pub use implementation::{ImplementationLookup, ImplementationTable, NOT_IMPLEMENTED_BODY};

/// Generates both TypeScript modules from an SDL string.
///
/// # Arguments
/// * `sdl` - GraphQL SDL document
/// * `lookup` - Source of resolver bodies
/// * `options` - Generation options
///
/// # Errors
/// Returns `CodegenError` if loading the schema or generation fails.
pub fn generate_from_sdl(
    sdl: &str,
    lookup: &dyn ImplementationLookup,
    options: GeneratorOptions,
) -> Result<GeneratedSources, CodegenError> {
    let graph = crudgen_schema::load_schema(sdl)?;
    Generator::with_options(&graph, options).generate(lookup)
}

/// Generates both TypeScript modules from an SDL file.
///
/// # Errors
/// Returns `CodegenError` if reading, loading, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    lookup: &dyn ImplementationLookup,
    options: GeneratorOptions,
) -> Result<GeneratedSources, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_from_sdl(&sdl, lookup, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"type Query { ping: Boolean! }").unwrap();

        let sources =
            generate_from_file(file.path(), &ImplementationTable::new(), GeneratorOptions::default())
                .expect("generation failed");
        assert!(sources.resolvers.contains(NOT_IMPLEMENTED_BODY));
    }

    #[test]
    fn test_invalid_sdl() {
        let result = generate_from_sdl(
            "type Query { ping: Missing }",
            &ImplementationTable::new(),
            GeneratorOptions::default(),
        );
        assert!(matches!(result, Err(CodegenError::Schema(_))));
    }
}
