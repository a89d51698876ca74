//! Serde helpers for form fields that may arrive as text or as numbers

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Deserialize an optional form value, accepting `"2000"` as well as `2000`.
///
/// A numeric zero reads as unset, matching the form's truthiness checks;
/// the text `"0"` is kept.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        TextOrNumber::Text(s) => Some(s),
        TextOrNumber::Int(0) => None,
        TextOrNumber::Int(n) => Some(n.to_string()),
        TextOrNumber::Float(f) if f == 0.0 => None,
        TextOrNumber::Float(f) => Some(f.to_string()),
    }))
}

/// Checkbox value; an untouched checkbox is sent as `null`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
