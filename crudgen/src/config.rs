//! Pipeline configuration.

use std::path::{Path, PathBuf};

/// Default output directory, relative to the store root.
pub const DEFAULT_OUT_DIR: &str = "src/_generated";

/// What the pipeline does when one model fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failing model.
    #[default]
    AbortOnFirst,
    /// Log the failure and continue with the next model.
    ContinueOnError,
}

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    out_dir: PathBuf,
    batch_policy: BatchPolicy,
    strict_implementations: bool,
    models: Vec<String>,
}

impl PipelineConfig {
    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Output directory.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Batch policy.
    #[must_use]
    pub fn batch_policy(&self) -> BatchPolicy {
        self.batch_policy
    }

    /// Whether missing resolver bodies are errors.
    #[must_use]
    pub fn strict_implementations(&self) -> bool {
        self.strict_implementations
    }

    /// Selected model names. Empty selects every registered model.
    #[must_use]
    pub fn models(&self) -> &[String] {
        &self.models
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineBuilder::new().build()
    }
}

/// Builder for configuring a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    out_dir: PathBuf,
    batch_policy: BatchPolicy,
    strict_implementations: bool,
    models: Vec<String>,
}

impl PipelineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            batch_policy: BatchPolicy::default(),
            strict_implementations: false,
            models: Vec::new(),
        }
    }

    /// Sets the output directory.
    #[must_use]
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Sets the batch policy.
    #[must_use]
    pub fn batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.batch_policy = policy;
        self
    }

    /// Continue past failing models instead of aborting.
    #[must_use]
    pub fn keep_going(self, keep_going: bool) -> Self {
        self.batch_policy(if keep_going {
            BatchPolicy::ContinueOnError
        } else {
            BatchPolicy::AbortOnFirst
        })
    }

    /// Fail generation when a resolver field has no body.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_implementations = strict;
        self
    }

    /// Adds one model to the selection.
    #[must_use]
    pub fn model(mut self, name: impl Into<String>) -> Self {
        self.models.push(name.into());
        self
    }

    /// Adds several models to the selection.
    #[must_use]
    pub fn models<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models.extend(names.into_iter().map(Into::into));
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> PipelineConfig {
        PipelineConfig {
            out_dir: self.out_dir,
            batch_policy: self.batch_policy,
            strict_implementations: self.strict_implementations,
            models: self.models,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
