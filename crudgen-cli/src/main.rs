//! crudgen command-line tool.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use crudgen::config::DEFAULT_OUT_DIR;
use crudgen::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(author, version, about = "Generate GraphQL SDL and TypeScript resolvers from data models", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the schema, type declarations and resolvers for models
    Generate {
        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,

        /// JSON model manifest to register (repeatable)
        #[arg(short, long = "manifest")]
        manifests: Vec<PathBuf>,

        /// Model to generate (repeatable, default: every registered model)
        #[arg(long = "model")]
        models: Vec<String>,

        /// Continue with the remaining models when one fails
        #[arg(long)]
        keep_going: bool,

        /// Fail when a resolver field has no implementation
        #[arg(long)]
        strict: bool,
    },

    /// Print the synthesized SDL of one model
    Schema {
        /// Model name
        model: String,

        /// JSON model manifest to register (repeatable)
        #[arg(short, long = "manifest")]
        manifests: Vec<PathBuf>,
    },

    /// List registered models
    Models {
        /// JSON model manifest to register (repeatable)
        #[arg(short, long = "manifest")]
        manifests: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            out,
            manifests,
            models,
            keep_going,
            strict,
        } => {
            let config = PipelineConfig::builder()
                .out_dir(out)
                .models(models)
                .keep_going(keep_going)
                .strict(strict)
                .build();
            run_generate(&manifests, config)
        }
        Commands::Schema { model, manifests } => run_schema(&model, &manifests),
        Commands::Models { manifests } => run_models(&manifests),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the registry from the built-in models plus the given manifests.
fn build_registry(manifests: &[PathBuf]) -> anyhow::Result<ModelRegistry> {
    let mut registry = ModelRegistry::with_builtin();
    for path in manifests {
        let manifest = ModelManifest::from_file(path)
            .with_context(|| format!("failed to load manifest {}", path.display()))?;
        registry
            .register_manifest(manifest)
            .with_context(|| format!("failed to register models from {}", path.display()))?;
        tracing::debug!("Registered manifest {}", path.display());
    }
    Ok(registry)
}

fn run_generate(manifests: &[PathBuf], config: PipelineConfig) -> anyhow::Result<()> {
    let registry = build_registry(manifests)?;
    let mut pipeline = Pipeline::new(&registry, FsStore::new(Path::new(".")), config);
    let report = pipeline.run().context("generation failed")?;
    tracing::info!("Generated {} model(s)", report.len());
    Ok(())
}

fn run_schema(model: &str, manifests: &[PathBuf]) -> anyhow::Result<()> {
    let registry = build_registry(manifests)?;
    let sdl = crudgen::schema_for(&registry, model)?;
    print!("{sdl}");
    Ok(())
}

fn run_models(manifests: &[PathBuf]) -> anyhow::Result<()> {
    let registry = build_registry(manifests)?;
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}
