//! Field validators
//!
//! Validators are an injected capability: given a field's current value
//! and its display name, a validator returns `None` on success or a
//! human-readable error message on failure. Hosts may implement
//! `Validator` directly or pass a closure with the same signature.
//!
//! The built-ins cover the two checks every form layer needs: presence
//! (`Required`) and string length bounds (`Length`).

use serde_json::Value;

/// A single field validator
pub trait Validator: Send + Sync {
    /// Checks a value, returning an error message on failure.
    ///
    /// `display_name` is the field's human-readable name, used to build
    /// the message.
    fn check(&self, value: &Value, display_name: &str) -> Option<String>;
}

impl<F> Validator for F
where
    F: Fn(&Value, &str) -> Option<String> + Send + Sync,
{
    fn check(&self, value: &Value, display_name: &str) -> Option<String> {
        self(value, display_name)
    }
}

/// Fails on null and empty-string values.
///
/// Absent fields are validated as null, so `Required` also fails when
/// the record omits the field entirely.
pub struct Required;

impl Validator for Required {
    fn check(&self, value: &Value, display_name: &str) -> Option<String> {
        let missing = match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if missing {
            Some(format!("{} is required", display_name))
        } else {
            None
        }
    }
}

/// Fails when a string value's character count falls outside `[min, max]`.
///
/// Non-string values pass; presence and typing are other validators'
/// concerns.
pub struct Length {
    min: usize,
    max: usize,
}

impl Length {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Validator for Length {
    fn check(&self, value: &Value, display_name: &str) -> Option<String> {
        if let Value::String(s) = value {
            let len = s.chars().count();
            if len < self.min || len > self.max {
                return Some(format!(
                    "{} must be between {} and {} in length",
                    display_name, self.min, self.max
                ));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_fails_on_null_and_empty_string() {
        assert_eq!(
            Required.check(&Value::Null, "Full Name"),
            Some("Full Name is required".into())
        );
        assert_eq!(
            Required.check(&json!(""), "Full Name"),
            Some("Full Name is required".into())
        );
    }

    #[test]
    fn test_required_passes_on_present_values() {
        assert_eq!(Required.check(&json!("Paul"), "Full Name"), None);
        assert_eq!(Required.check(&json!(0), "Age"), None);
        assert_eq!(Required.check(&json!(false), "Active"), None);
    }

    #[test]
    fn test_length_bounds() {
        let length = Length::new(2, 4);
        assert_eq!(
            length.check(&json!("A"), "Full Name"),
            Some("Full Name must be between 2 and 4 in length".into())
        );
        assert_eq!(length.check(&json!("Ab"), "Full Name"), None);
        assert_eq!(length.check(&json!("Abcd"), "Full Name"), None);
        assert_eq!(
            length.check(&json!("Abcde"), "Full Name"),
            Some("Full Name must be between 2 and 4 in length".into())
        );
    }

    #[test]
    fn test_length_ignores_non_strings() {
        let length = Length::new(2, 4);
        assert_eq!(length.check(&json!(123456), "Age"), None);
        assert_eq!(length.check(&Value::Null, "Age"), None);
    }

    #[test]
    fn test_closures_satisfy_the_validator_contract() {
        let even_only = |value: &Value, display_name: &str| -> Option<String> {
            match value.as_i64() {
                Some(n) if n % 2 == 0 => None,
                _ => Some(format!("{} must be even", display_name)),
            }
        };
        assert_eq!(even_only.check(&json!(4), "Age"), None);
        assert_eq!(
            even_only.check(&json!(3), "Age"),
            Some("Age must be even".into())
        );
    }
}
