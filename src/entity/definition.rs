//! Entity definition over a declarative schema
//!
//! `EntityDefinition` interprets an immutable `Schema`:
//! - construction: `make_blank`, `make_default`, `make_default_with`
//! - filtering: `strip_unknown_properties`, `strip_unknown_properties_tagged`
//! - coercion: `cast`, `cast_properties`
//! - validation: `validate`, `validate_set`
//! - lookup: `property_name`
//!
//! Every operation is a pure function of (schema, input): records are
//! taken by reference and new records are returned, never mutated in
//! place.

use serde_json::{Map, Value};
use tracing::trace;

use super::cast::cast_value;
use super::validate::{run_validators, ValidationErrors, DEFAULT_VALIDATOR_SET};
use crate::schema::{FieldType, Schema, SchemaError, SchemaResult};

/// A plain mapping from field name to value; not schema-bound
pub type Record = Map<String, Value>;

/// Interprets a schema to shape, coerce, and validate records.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDefinition {
    schema: Schema,
}

impl EntityDefinition {
    /// Creates an entity definition over the given schema.
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Returns the underlying schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns a record with one entry per schema field and no defaults
    /// applied: empty containers for array and object fields, null for
    /// everything else.
    pub fn make_blank(&self) -> Record {
        let mut record = Record::new();
        for (field, descriptor) in self.schema.fields() {
            let value = descriptor
                .field_type
                .map(|ty| ty.blank_value())
                .unwrap_or(Value::Null);
            record.insert(field.clone(), value);
        }
        record
    }

    /// Returns a record with each field set to its declared default
    /// value, falling back to null.
    pub fn make_default(&self) -> Record {
        self.make_default_with(&Record::new())
    }

    /// Like `make_default`, but values in `overrides` win over declared
    /// defaults. Override keys not declared in the schema are dropped.
    pub fn make_default_with(&self, overrides: &Record) -> Record {
        let mut record = Record::new();
        for (field, descriptor) in self.schema.fields() {
            let value = overrides
                .get(field.as_str())
                .cloned()
                .or_else(|| descriptor.default_value.clone())
                .unwrap_or(Value::Null);
            record.insert(field.clone(), value);
        }
        record
    }

    /// Returns the record restricted to keys declared in the schema.
    ///
    /// Declared keys missing from the input are not added.
    pub fn strip_unknown_properties(&self, record: &Record) -> Record {
        record
            .iter()
            .filter(|(field, _)| self.schema.contains(field))
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect()
    }

    /// Returns the record restricted to declared keys whose descriptor
    /// carries the given tag. Untagged fields never match; an unknown
    /// tag yields an empty record.
    pub fn strip_unknown_properties_tagged(&self, record: &Record, tag: &str) -> Record {
        record
            .iter()
            .filter(|(field, _)| {
                self.schema
                    .get(field)
                    .map_or(false, |descriptor| descriptor.has_tag(tag))
            })
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect()
    }

    /// Coerces a single value to the named type.
    ///
    /// Fails with `SchemaError::UnknownType` for an undeclared type name;
    /// coercion itself is total.
    pub fn cast(&self, type_name: &str, value: &Value) -> SchemaResult<Value> {
        let field_type = FieldType::from_name(type_name)?;
        Ok(cast_value(field_type, value))
    }

    /// Coerces each record value whose field declares a type.
    ///
    /// Untyped fields and keys not in the schema pass through unchanged;
    /// this operation coerces, it does not filter.
    pub fn cast_properties(&self, record: &Record) -> Record {
        record
            .iter()
            .map(|(field, value)| {
                let cast = match self.schema.get(field).and_then(|d| d.field_type) {
                    Some(field_type) => cast_value(field_type, value),
                    None => value.clone(),
                };
                (field.clone(), cast)
            })
            .collect()
    }

    /// Validates a record with the default `"all"` validator set.
    pub fn validate(&self, record: &Record) -> ValidationErrors {
        self.validate_set(record, DEFAULT_VALIDATOR_SET)
    }

    /// Validates a record with the named validator set, returning the
    /// error map (empty when valid).
    pub fn validate_set(&self, record: &Record, set: &str) -> ValidationErrors {
        let errors = run_validators(&self.schema, record, set);
        trace!(set, errors = errors.len(), "validated record");
        errors
    }

    /// Returns the display name for a declared field.
    ///
    /// Fails with `SchemaError::UnknownField` when the field is not in
    /// the schema.
    pub fn property_name(&self, field: &str) -> SchemaResult<String> {
        self.schema
            .get(field)
            .map(|descriptor| descriptor.display_name(field))
            .ok_or_else(|| SchemaError::UnknownField(field.to_string()))
    }
}
