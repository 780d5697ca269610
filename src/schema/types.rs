//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string (the implicit type when none is declared)
//! - number: floating point, integer representation when whole
//! - integer: 64-bit signed integer, truncated toward zero
//! - boolean: true/false
//! - array: ordered sequence of values
//! - object: nested mapping
//!
//! A `Schema` is an insertion-ordered mapping from field name to
//! `FieldDescriptor`, built once via `SchemaBuilder` and immutable
//! afterwards. Validators are runtime capabilities attached through the
//! descriptor builder; they are never serialized.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use crate::validators::Validator;

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Floating point number
    Number,
    /// 64-bit signed integer
    Integer,
    /// Boolean
    Boolean,
    /// Ordered sequence of values
    Array,
    /// Nested mapping
    Object,
}

impl FieldType {
    /// Resolves an external type name to a supported type.
    ///
    /// Unregistered names are a dedicated error, not a fallthrough.
    pub fn from_name(name: &str) -> SchemaResult<Self> {
        match name {
            "string" => Ok(FieldType::String),
            "number" => Ok(FieldType::Number),
            "integer" => Ok(FieldType::Integer),
            "boolean" => Ok(FieldType::Boolean),
            "array" => Ok(FieldType::Array),
            "object" => Ok(FieldType::Object),
            other => Err(SchemaError::UnknownType(other.to_string())),
        }
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }

    /// Returns the blank value for this type.
    ///
    /// Containers start empty; every other type starts as null.
    pub fn blank_value(&self) -> Value {
        match self {
            FieldType::Array => Value::Array(Vec::new()),
            FieldType::Object => Value::Object(Map::new()),
            _ => Value::Null,
        }
    }
}

/// Field definition: type, default, display name, tags, validators
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Declared type; untyped fields are treated as implicit strings
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    /// Value used by `make_default` when no override is supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Human-readable label; derived from the field name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tags grouping fields for selective filtering
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
    /// Validator sets by name; runtime-only, never serialized
    #[serde(skip)]
    pub validators: HashMap<String, Vec<Arc<dyn Validator>>>,
}

impl FieldDescriptor {
    /// Create an untyped descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a descriptor with a declared type
    pub fn typed(field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Self::default()
        }
    }

    /// Set the human-readable label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the default value used by `make_default`
    pub fn with_default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag.push(tag.into());
        self
    }

    /// Append a validator to the named set
    pub fn with_validator<V>(mut self, set: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.validators
            .entry(set.into())
            .or_default()
            .push(Arc::new(validator));
        self
    }

    /// Returns whether this field carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.iter().any(|t| t == tag)
    }

    /// Returns the validators declared for the named set
    pub fn validators_for(&self, set: &str) -> &[Arc<dyn Validator>] {
        self.validators.get(set).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the display name for this field.
    ///
    /// The declared label wins; otherwise the name is derived from the
    /// field identifier (`phoneNumber` becomes `Phone Number`).
    pub fn display_name(&self, field: &str) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => derive_display_name(field),
        }
    }
}

// Validator functions are not comparable; equality covers the declarative
// attributes only.
impl PartialEq for FieldDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.field_type == other.field_type
            && self.default_value == other.default_value
            && self.name == other.name
            && self.tag == other.tag
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("field_type", &self.field_type)
            .field("default_value", &self.default_value)
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("validator_sets", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Derives a display name from a camelCase field identifier: the first
/// letter is capitalized and a space is inserted before each internal
/// uppercase letter.
fn derive_display_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for (i, ch) in field.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out
}

/// Declarative entity schema: an ordered mapping from field name to
/// field descriptor. Immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, FieldDescriptor>,
}

impl Schema {
    /// Create a builder for a new schema
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Returns the descriptor for a field, if declared
    pub fn get(&self, field: &str) -> Option<&FieldDescriptor> {
        self.fields.get(field)
    }

    /// Returns whether the schema declares the field
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldDescriptor)> {
        self.fields.iter()
    }

    /// Iterates field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the schema declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder producing an immutable `Schema`
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: IndexMap<String, FieldDescriptor>,
}

impl SchemaBuilder {
    /// Declare a field. Re-declaring a name replaces the earlier
    /// descriptor without changing its position.
    pub fn field(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.fields.insert(name.into(), descriptor);
        self
    }

    /// Finish the schema
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::builder()
            .field(
                "name",
                FieldDescriptor::new().with_tag("update").with_name("Full Name"),
            )
            .field(
                "age",
                FieldDescriptor::typed(FieldType::Number).with_default_value(json!(0)),
            )
            .field("phoneNumber", FieldDescriptor::new().with_tag("update"))
            .build()
    }

    #[test]
    fn test_from_name_resolves_supported_types() {
        assert_eq!(FieldType::from_name("string").unwrap(), FieldType::String);
        assert_eq!(FieldType::from_name("number").unwrap(), FieldType::Number);
        assert_eq!(FieldType::from_name("integer").unwrap(), FieldType::Integer);
        assert_eq!(FieldType::from_name("boolean").unwrap(), FieldType::Boolean);
        assert_eq!(FieldType::from_name("array").unwrap(), FieldType::Array);
        assert_eq!(FieldType::from_name("object").unwrap(), FieldType::Object);
    }

    #[test]
    fn test_from_name_rejects_unknown_types() {
        let result = FieldType::from_name("datetime");
        assert_eq!(result, Err(SchemaError::UnknownType("datetime".into())));
    }

    #[test]
    fn test_type_names_round_trip() {
        for ty in [
            FieldType::String,
            FieldType::Number,
            FieldType::Integer,
            FieldType::Boolean,
            FieldType::Array,
            FieldType::Object,
        ] {
            assert_eq!(FieldType::from_name(ty.type_name()).unwrap(), ty);
        }
    }

    #[test]
    fn test_blank_values() {
        assert_eq!(FieldType::Array.blank_value(), json!([]));
        assert_eq!(FieldType::Object.blank_value(), json!({}));
        assert_eq!(FieldType::String.blank_value(), Value::Null);
        assert_eq!(FieldType::Number.blank_value(), Value::Null);
    }

    #[test]
    fn test_display_name_prefers_declared_label() {
        let schema = sample_schema();
        let descriptor = schema.get("name").unwrap();
        assert_eq!(descriptor.display_name("name"), "Full Name");
    }

    #[test]
    fn test_display_name_derivation() {
        assert_eq!(derive_display_name("age"), "Age");
        assert_eq!(derive_display_name("phoneNumber"), "Phone Number");
        assert_eq!(derive_display_name("homePhoneNumber"), "Home Phone Number");
    }

    #[test]
    fn test_has_tag() {
        let schema = sample_schema();
        assert!(schema.get("name").unwrap().has_tag("update"));
        assert!(!schema.get("name").unwrap().has_tag("create"));
        // Untagged fields match no tag
        assert!(!schema.get("age").unwrap().has_tag("update"));
    }

    #[test]
    fn test_fields_iterate_in_declaration_order() {
        let schema = sample_schema();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["name", "age", "phoneNumber"]);
    }

    #[test]
    fn test_schema_deserializes_from_json() {
        let input = r#"{
            "name": { "tag": ["update"], "name": "Full Name" },
            "age": { "type": "number", "default_value": 0 },
            "active": { "type": "boolean", "default_value": true },
            "phoneNumber": { "tag": ["update"] }
        }"#;

        let schema: Schema = serde_json::from_str(input).unwrap();
        assert_eq!(schema.len(), 4);
        assert_eq!(
            schema.get("age").unwrap().field_type,
            Some(FieldType::Number)
        );
        assert_eq!(schema.get("age").unwrap().default_value, Some(json!(0)));
        assert!(schema.get("phoneNumber").unwrap().has_tag("update"));
        assert_eq!(schema.get("phoneNumber").unwrap().field_type, None);
    }

    #[test]
    fn test_schema_rejects_unknown_type_name_on_deserialize() {
        let input = r#"{ "created": { "type": "datetime" } }"#;
        let result: Result<Schema, _> = serde_json::from_str(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_descriptor_equality_ignores_validators() {
        let plain = FieldDescriptor::new().with_name("Full Name");
        let validated = FieldDescriptor::new()
            .with_name("Full Name")
            .with_validator("all", crate::validators::Required);
        assert_eq!(plain, validated);
    }

    #[test]
    fn test_redeclaring_a_field_replaces_it_in_place() {
        let schema = Schema::builder()
            .field("a", FieldDescriptor::new())
            .field("b", FieldDescriptor::new())
            .field("a", FieldDescriptor::typed(FieldType::Number))
            .build();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(schema.get("a").unwrap().field_type, Some(FieldType::Number));
    }
}
