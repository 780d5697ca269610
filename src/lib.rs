//! formcast - a strict, schema-driven entity shaping library
//!
//! Declarative schemas are interpreted to construct blank and default
//! records, coerce raw input to declared types, strip unknown or
//! untagged properties, and run field validators producing
//! human-readable error maps.

pub mod entity;
pub mod schema;
pub mod validators;
