//! Entity shaping subsystem
//!
//! One component, the `EntityDefinition`, interprets a declarative
//! schema into four operation families over plain records:
//!
//! - construction (blank and default instances)
//! - filtering (by schema membership or tag)
//! - coercion (single values and whole records)
//! - validation (named validator sets, error maps as data)
//!
//! All operations are pure and synchronous; the schema is immutable
//! configuration shared by any number of callers.

mod cast;
mod definition;
mod validate;

pub use definition::{EntityDefinition, Record};
pub use validate::{ValidationErrors, DEFAULT_VALIDATOR_SET};
