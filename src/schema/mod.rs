//! Schema subsystem for formcast
//!
//! Schemas are declarative, immutable configuration: an ordered mapping
//! from field name to field descriptor (type, default value, display
//! name, tags, validators).
//!
//! # Design Principles
//!
//! - Schemas are immutable after construction
//! - Supported types are a closed set; unknown names are a dedicated
//!   error, not a fallthrough
//! - Validators are runtime capabilities, never serialized
//! - Schema files on disk are one JSON document per entity

mod errors;
mod loader;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaLoader;
pub use types::{FieldDescriptor, FieldType, Schema, SchemaBuilder};
