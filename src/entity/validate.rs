//! Validation dispatch
//!
//! Validation semantics:
//! - Fields are evaluated in schema declaration order
//! - Within a field, validators run in order and stop at the first
//!   failure (first-failure wins)
//! - Fields with no validators for the requested set are skipped
//! - Every field is evaluated even when an earlier field failed
//! - Absent fields are validated as null
//!
//! Failures are data, not errors: the result is a map from field name to
//! a single message, empty when the record is valid.

use indexmap::IndexMap;
use serde_json::Value;

use super::definition::Record;
use crate::schema::Schema;

/// The validator set used when none is named
pub const DEFAULT_VALIDATOR_SET: &str = "all";

/// Map from field name to a single error message, in schema order
pub type ValidationErrors = IndexMap<String, String>;

/// Runs the named validator set over a record.
pub(crate) fn run_validators(schema: &Schema, record: &Record, set: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for (field, descriptor) in schema.fields() {
        let validators = descriptor.validators_for(set);
        if validators.is_empty() {
            continue;
        }

        let value = record.get(field.as_str()).unwrap_or(&Value::Null);
        let display_name = descriptor.display_name(field);

        for validator in validators {
            if let Some(message) = validator.check(value, &display_name) {
                errors.insert(field.clone(), message);
                break;
            }
        }
    }

    errors
}
