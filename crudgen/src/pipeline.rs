//! Generation pipeline.
//!
//! For each selected model the pipeline runs three passes in order:
//!
//! 1. model → SDL, written to `<stem>.schema.graphql`
//! 2. SDL (read back from the store) → type declarations in `<stem>.graphql.ts`
//! 3. SDL → resolver stubs in `<stem>.resolvers.ts`
//!
//! A failing pass aborts its model. Files written by earlier passes stay in
//! the store.

use crate::config::{BatchPolicy, PipelineConfig};
use crate::error::{Error, Result};
use crate::store::ArtifactStore;
use crudgen_codegen::{Generator, GeneratorOptions, ImplementationTable};
use crudgen_core::naming::file_stem;
use crudgen_core::{ModelDescriptor, ModelRegistry, introspect};
use crudgen_schema::{load_schema, synthesize};
use std::path::{Path, PathBuf};

/// Paths written for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelArtifacts {
    /// Model type name.
    pub model: String,
    /// SDL document.
    pub schema: PathBuf,
    /// TypeScript type declarations.
    pub types: PathBuf,
    /// TypeScript resolver stubs.
    pub resolvers: PathBuf,
}

impl ModelArtifacts {
    fn new(out_dir: &Path, type_name: &str) -> Self {
        let stem = file_stem(type_name);
        Self {
            model: type_name.to_string(),
            schema: out_dir.join(format!("{stem}.schema.graphql")),
            types: out_dir.join(format!("{stem}.graphql.ts")),
            resolvers: out_dir.join(format!("{stem}.resolvers.ts")),
        }
    }

    /// Module specifier of the declarations, relative to the resolver file.
    fn types_module(&self) -> String {
        format!("./{}.graphql", file_stem(&self.model))
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Artifacts of each generated model, in run order.
    pub generated: Vec<ModelArtifacts>,
}

impl RunReport {
    /// Number of generated models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generated.len()
    }

    /// Returns true if no model was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty()
    }
}

/// Loads and introspects a registered model.
///
/// # Errors
/// Returns `Error::Model` if the model is unknown or its fields are invalid.
pub fn describe(registry: &ModelRegistry, name: &str) -> Result<ModelDescriptor> {
    let definition = registry.load(name)?;
    Ok(introspect(&definition)?)
}

/// Synthesizes the SDL of a registered model without touching any store.
///
/// # Errors
/// Returns `Error::Model` if the model cannot be described.
pub fn schema_for(registry: &ModelRegistry, name: &str) -> Result<String> {
    Ok(synthesize(&describe(registry, name)?))
}

/// Runs the generation passes against a store.
pub struct Pipeline<'r, S> {
    registry: &'r ModelRegistry,
    store: S,
    config: PipelineConfig,
}

impl<'r, S: ArtifactStore> Pipeline<'r, S> {
    /// Creates a pipeline.
    #[must_use]
    pub fn new(registry: &'r ModelRegistry, store: S, config: PipelineConfig) -> Self {
        Self {
            registry,
            store,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Returns the store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the pipeline, returning the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Names of the models a run processes, in order.
    #[must_use]
    pub fn selection(&self) -> Vec<String> {
        if self.config.models().is_empty() {
            self.registry.names().to_vec()
        } else {
            self.config.models().to_vec()
        }
    }

    /// Generates every selected model.
    ///
    /// # Errors
    /// Under `AbortOnFirst`, returns the first model's error. Under
    /// `ContinueOnError`, returns `Error::Batch` listing every failure.
    pub fn run(&mut self) -> Result<RunReport> {
        let selection = self.selection();
        let mut report = RunReport::default();
        let mut failures = Vec::new();

        tracing::info!(
            "Generating {} model(s) into {}",
            selection.len(),
            self.config.out_dir().display()
        );

        for name in &selection {
            match self.generate_model(name) {
                Ok(artifacts) => report.generated.push(artifacts),
                Err(e) => match self.config.batch_policy() {
                    BatchPolicy::AbortOnFirst => {
                        tracing::error!("Generation of {} failed: {}", name, e);
                        return Err(e);
                    }
                    BatchPolicy::ContinueOnError => {
                        tracing::warn!("Generation of {} failed, continuing: {}", name, e);
                        failures.push((name.clone(), e));
                    }
                },
            }
        }

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(Error::Batch {
                total: selection.len(),
                failures,
            })
        }
    }

    /// Runs all three passes for one model.
    ///
    /// # Errors
    /// Returns the error of the first failing pass.
    pub fn generate_model(&mut self, name: &str) -> Result<ModelArtifacts> {
        let model = describe(self.registry, name)?;
        let artifacts = ModelArtifacts::new(self.config.out_dir(), model.name());

        self.write_schema(&model, &artifacts)?;

        let sdl = self.store.read_text(&artifacts.schema)?;
        let graph = load_schema(&sdl)?;
        tracing::debug!(
            "Loaded {} with {} object type(s)",
            artifacts.schema.display(),
            graph.object_types().count()
        );

        let options = GeneratorOptions::default()
            .types_module(artifacts.types_module())
            .strict(self.config.strict_implementations());
        let generator = Generator::with_options(&graph, options);

        let types = generator.generate_types();
        self.write_artifact(&artifacts.types, &types, "Types")?;

        let table = ImplementationTable::standard(&model);
        let resolvers = generator.generate_resolvers(&table)?;
        self.write_artifact(&artifacts.resolvers, &resolvers, "Resolvers")?;

        Ok(artifacts)
    }

    fn write_schema(&mut self, model: &ModelDescriptor, artifacts: &ModelArtifacts) -> Result<()> {
        let sdl = synthesize(model);
        tracing::debug!("Synthesized {} bytes of SDL for {}", sdl.len(), model.name());

        let out_dir = self.config.out_dir();
        if !self.store.exists(out_dir) {
            tracing::debug!("Creating output directory {}", out_dir.display());
            self.store.ensure_dir(out_dir)?;
        }

        self.write_artifact(&artifacts.schema, &sdl, "Schema")
    }

    fn write_artifact(&mut self, path: &Path, content: &str, label: &str) -> Result<()> {
        self.store.write_text(path, content)?;
        tracing::info!("{} generated at {}", label, path.display());
        Ok(())
    }
}
