//! Model registry.
//!
//! Models are looked up by name in an explicit table of loader functions that
//! is populated at process start. Nothing is resolved from file paths.

use crate::error::{ModelError, Result};
use crate::model::ModelDefinition;
use crate::types::NativeKind;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Loader producing a model definition on demand.
pub type ModelLoader = Box<dyn Fn() -> Result<ModelDefinition> + Send + Sync>;

/// JSON document declaring one or more models.
///
/// ```json
/// { "models": [ { "name": "Post", "fields": [ { "name": "title", "kind": "String" } ] } ] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ModelManifest {
    /// Declared models.
    pub models: Vec<ModelDefinition>,
}

impl ModelManifest {
    /// Decodes a manifest from JSON text.
    ///
    /// # Errors
    /// Returns `ModelError::Manifest` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and decodes a manifest file.
    ///
    /// # Errors
    /// Returns `ModelError` if the file cannot be read or decoded.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Name-keyed table of model loaders, iterated in registration order.
#[derive(Default)]
pub struct ModelRegistry {
    order: Vec<String>,
    loaders: HashMap<String, ModelLoader>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in models.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.order.push("User".to_string());
        registry.loaders.insert(
            "User".to_string(),
            Box::new(|| -> Result<ModelDefinition> { Ok(user_model()) }),
        );
        registry
    }

    /// Registers a loader under `name`.
    ///
    /// # Errors
    /// Returns `ModelError::AlreadyRegistered` if the name is taken.
    pub fn register<F>(&mut self, name: impl Into<String>, loader: F) -> Result<()>
    where
        F: Fn() -> Result<ModelDefinition> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.loaders.contains_key(&name) {
            return Err(ModelError::AlreadyRegistered { name });
        }
        self.order.push(name.clone());
        self.loaders.insert(name, Box::new(loader));
        Ok(())
    }

    /// Registers a fixed definition under its own name.
    ///
    /// # Errors
    /// Returns `ModelError::AlreadyRegistered` if the name is taken.
    pub fn register_definition(&mut self, def: ModelDefinition) -> Result<()> {
        let name = def.name.clone();
        self.register(name, move || Ok(def.clone()))
    }

    /// Registers every model declared in a manifest.
    ///
    /// # Errors
    /// Returns `ModelError::AlreadyRegistered` on the first name clash.
    pub fn register_manifest(&mut self, manifest: ModelManifest) -> Result<()> {
        for def in manifest.models {
            self.register_definition(def)?;
        }
        Ok(())
    }

    /// Loads a model by name.
    ///
    /// # Errors
    /// Returns `ModelError::NotFound` if no loader is registered, or whatever
    /// the loader itself returns.
    pub fn load(&self, name: &str) -> Result<ModelDefinition> {
        let loader = self
            .loaders
            .get(name)
            .ok_or_else(|| ModelError::not_found(name))?;
        loader()
    }

    /// Returns true if a loader is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.loaders.contains_key(name)
    }

    /// Registered names in registration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Number of registered models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.order)
            .finish()
    }
}

/// The built-in `User` model: an identifier and a required name.
#[must_use]
pub fn user_model() -> ModelDefinition {
    ModelDefinition::new("User").field("name", NativeKind::String)
}
