//! Schema error types
//!
//! Error taxonomy:
//! - `UnknownType`: an undeclared type name was requested
//! - `UnknownField`: a property lookup named a field absent from the schema
//! - `AlreadyRegistered`: registered schemas are immutable
//! - `MalformedSchema`: a schema file could not be read or parsed
//!
//! Validation failures are not errors. They are entries in the error map
//! returned by `EntityDefinition::validate`, since invalid input is an
//! expected condition for the host application to display to end users.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Unknown type '{0}'")]
    UnknownType(String),

    #[error("No property '{0}' in schema")]
    UnknownField(String),

    #[error("Schema '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("Malformed schema file '{path}': {reason}")]
    MalformedSchema { path: String, reason: String },
}

impl SchemaError {
    /// Create a malformed schema error for the given file
    pub fn malformed_schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::MalformedSchema {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
