//! Error bags attached to form controls

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Validation errors of one form control, keyed by rule (`required`,
/// `pattern`, `min`, or a custom key such as a server-side error).
pub type ErrorBag = BTreeMap<String, JsonValue>;

/// Drop `key` from a control's errors.
///
/// Returns `None` when nothing is left, meaning the control is valid again;
/// otherwise the reduced bag. The caller writes the result back to the
/// control.
pub fn clear_field_error(mut errors: ErrorBag, key: &str) -> Option<ErrorBag> {
    errors.remove(key);
    (!errors.is_empty()).then_some(errors)
}
