//! Schema loader for loading declarative schema files from disk
//!
//! Schemas live as one JSON file per entity at `<dir>/<entity>.json` and
//! are registered under the file stem. Registered schemas are immutable;
//! registering the same name twice is an error. Validators cannot live in
//! JSON, so loaded schemas carry none; hosts that need validators build
//! schemas programmatically with `Schema::builder`.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use super::errors::{SchemaError, SchemaResult};
use super::types::Schema;
use crate::entity::EntityDefinition;

/// Schema loader that reads schema files from disk and maintains an
/// in-memory registry keyed by entity name.
pub struct SchemaLoader {
    /// Directory containing schema files
    schema_dir: PathBuf,
    /// Registered schemas by entity name
    schemas: IndexMap<String, Schema>,
}

impl SchemaLoader {
    /// Creates a new schema loader rooted at the given directory.
    pub fn new(schema_dir: &Path) -> Self {
        Self {
            schema_dir: schema_dir.to_path_buf(),
            schemas: IndexMap::new(),
        }
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Loads all schema files from the schema directory.
    ///
    /// A missing directory is not an error; there are simply no schemas
    /// to load. Non-JSON files are skipped. Malformed files fail with the
    /// file path in the error.
    pub fn load_all(&mut self) -> SchemaResult<()> {
        if !self.schema_dir.exists() {
            return Ok(());
        }

        let entries = fs::read_dir(&self.schema_dir).map_err(|e| {
            SchemaError::malformed_schema(
                self.schema_dir.display().to_string(),
                format!("Failed to read schema directory: {}", e),
            )
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaError::malformed_schema(
                    self.schema_dir.display().to_string(),
                    format!("Failed to read directory entry: {}", e),
                )
            })?;

            let path = entry.path();

            // Skip non-JSON files
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            self.load_schema_file(&path)?;
        }

        Ok(())
    }

    /// Loads a single schema file, registering it under the file stem.
    fn load_schema_file(&mut self, path: &Path) -> SchemaResult<()> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| {
                SchemaError::malformed_schema(
                    path.display().to_string(),
                    "File name is not valid UTF-8",
                )
            })?
            .to_string();

        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::malformed_schema(
                path.display().to_string(),
                format!("Failed to read file: {}", e),
            )
        })?;

        let schema: Schema = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed_schema(
                path.display().to_string(),
                format!("Invalid JSON: {}", e),
            )
        })?;

        debug!(path = %path.display(), schema = %name, "loaded schema file");
        self.register(name, schema)
    }

    /// Registers a schema directly (for testing or programmatic creation).
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) -> SchemaResult<()> {
        let name = name.into();

        // Registered schemas are immutable
        if self.schemas.contains_key(&name) {
            return Err(SchemaError::AlreadyRegistered(name));
        }

        debug!(schema = %name, fields = schema.len(), "registered schema");
        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Gets a registered schema by name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Builds an entity definition over a registered schema.
    pub fn definition(&self, name: &str) -> Option<EntityDefinition> {
        self.schemas
            .get(name)
            .cloned()
            .map(EntityDefinition::new)
    }

    /// Checks if a schema is registered.
    pub fn exists(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Iterates registered schema names in registration order.
    pub fn schema_names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Returns the number of registered schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Saves a schema to disk at the standard location.
    ///
    /// Fails if the file already exists; schema files are immutable.
    pub fn save_schema(&self, name: &str, schema: &Schema) -> SchemaResult<PathBuf> {
        let path = self.schema_dir.join(format!("{}.json", name));

        if path.exists() {
            return Err(SchemaError::AlreadyRegistered(name.to_string()));
        }

        if !self.schema_dir.exists() {
            fs::create_dir_all(&self.schema_dir).map_err(|e| {
                SchemaError::malformed_schema(
                    self.schema_dir.display().to_string(),
                    format!("Failed to create schema directory: {}", e),
                )
            })?;
        }

        let content = serde_json::to_string_pretty(schema).map_err(|e| {
            SchemaError::malformed_schema(
                path.display().to_string(),
                format!("Failed to serialize schema: {}", e),
            )
        })?;

        fs::write(&path, content).map_err(|e| {
            SchemaError::malformed_schema(
                path.display().to_string(),
                format!("Failed to write file: {}", e),
            )
        })?;

        Ok(path)
    }
}
