//! Type coercion rules
//!
//! One coercion function per supported type, dispatched over the closed
//! `FieldType` enum. Coercion is total and idempotent:
//!
//! - null and empty-string inputs collapse to null for scalar types,
//!   before any type-specific logic runs
//! - string: identity
//! - number: numeric strings and numbers; whole results are represented
//!   as JSON integers, fractional results as floats
//! - integer: numeric strings and numbers, truncated toward zero
//! - boolean: the literal truthy set {true, 1, "t", "true", "on", "yes"}
//!   and falsy set {false, 0, "false", "off", "no"}; anything else
//!   coerces to false, never silently to true
//! - array: wraps a single value, passes arrays through; null and empty
//!   string become the empty array
//! - object: identity, except null and empty string become the empty
//!   object

use serde_json::{Map, Number, Value};

use crate::schema::FieldType;

/// Coerces a value to the given type.
pub(crate) fn cast_value(field_type: FieldType, value: &Value) -> Value {
    // Null and empty-string inputs collapse before the per-type rules.
    if is_empty_input(value) {
        return match field_type {
            FieldType::String => value.clone(),
            FieldType::Array => Value::Array(Vec::new()),
            FieldType::Object => Value::Object(Map::new()),
            _ => Value::Null,
        };
    }

    match field_type {
        FieldType::String => value.clone(),
        FieldType::Number => cast_number(value),
        FieldType::Integer => cast_integer(value),
        FieldType::Boolean => cast_boolean(value),
        FieldType::Array => match value {
            Value::Array(_) => value.clone(),
            other => Value::Array(vec![other.clone()]),
        },
        FieldType::Object => value.clone(),
    }
}

/// Returns whether the input is null or the empty string.
fn is_empty_input(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn cast_number(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) => number_value(n),
            Err(_) => Value::Null,
        },
        _ => Value::Null,
    }
}

/// Represents a parsed number as a JSON integer when it is whole, so that
/// `"245"` casts to `245` rather than `245.0`.
fn number_value(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

fn cast_integer(value: &Value) -> Value {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        // Truncation toward zero, not rounding
        Some(n) if n.is_finite() => Value::Number(Number::from(n.trunc() as i64)),
        _ => Value::Null,
    }
}

fn cast_boolean(value: &Value) -> Value {
    match value {
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Bool(n.as_f64() == Some(1.0)),
        Value::String(s) => Value::Bool(matches!(s.as_str(), "t" | "true" | "on" | "yes")),
        _ => Value::Bool(false),
    }
}
