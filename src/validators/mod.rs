//! Validation patterns and form-validator helpers

pub mod errors;
pub mod patterns;
pub mod rules;

pub use errors::{clear_field_error, ErrorBag};
pub use patterns::{split_camel_case, Pattern, PatternName};
pub use rules::{numeric_validators, validate, ValidationRule};
