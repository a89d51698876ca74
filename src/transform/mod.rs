//! Conversion between the UI form model and the provisioning API body
//!
//! `ui_to_api` tolerates any partially filled form: sections the user never
//! touched are left out of the request. `api_to_ui` expects a complete VCH
//! description as returned by the backend and reports the first missing piece
//! as a [`TransformError`].

mod api_to_ui;
mod datastore;
mod ui_to_api;

pub use api_to_ui::api_to_ui;
pub use datastore::{get_ds_name_and_folder, DatastoreLocation};
pub use ui_to_api::ui_to_api;

/// Errors raised while reading an API document back into the UI model.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("VCH document is missing '{path}'")]
    MissingField { path: String },

    #[error("invalid datastore path '{path}' (expected scheme://datastore/folder)")]
    InvalidDatastorePath { path: String },
}

impl TransformError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        TransformError::MissingField { path: path.into() }
    }
}

/// Parse the leading integer of `text` the way a browser's `parseInt` does:
/// leading whitespace and a sign are allowed, trailing garbage is ignored.
/// Returns `None` when no digits are found.
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = unsigned[..digits_len]
        .parse::<i64>()
        .unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// `parse_int` with the form default: unparsable input counts as 0.
pub(crate) fn parse_int_or_zero(text: Option<&str>) -> i64 {
    text.and_then(parse_int).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("2000"), Some(2000));
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("1.9"), Some(1));
        assert_eq!(parse_int("512MiB"), Some(512));
        assert_eq!(parse_int("unlimited"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn test_parse_int_or_zero() {
        assert_eq!(parse_int_or_zero(Some("unlimited")), 0);
        assert_eq!(parse_int_or_zero(None), 0);
        assert_eq!(parse_int_or_zero(Some("8")), 8);
    }

    #[test]
    fn test_error_messages() {
        let err = TransformError::missing("network.client");
        assert_eq!(err.to_string(), "VCH document is missing 'network.client'");
    }
}
