//! Form-control validation rules

use super::errors::ErrorBag;
use super::patterns::{Pattern, NUMBER, UNLIMITED_OR_NUMBER};
use serde_json::{json, Value as JsonValue};

/// A single constraint on a form value. A field's rules apply as a
/// conjunction; every failing rule contributes one key to the error bag.
#[derive(Debug, Clone, Copy)]
pub enum ValidationRule {
    /// Value must be present and non-empty.
    Required,
    /// Non-empty value must match the pattern.
    Pattern(&'static Pattern),
    /// Non-empty numeric value must be at least this much. Values that are
    /// not numbers are left to the other rules.
    Min(i64),
}

impl ValidationRule {
    /// Error key this rule reports under.
    pub fn key(&self) -> &'static str {
        match self {
            ValidationRule::Required => "required",
            ValidationRule::Pattern(_) => "pattern",
            ValidationRule::Min(_) => "min",
        }
    }

    /// Check `value`, returning the error key and its detail on failure.
    pub fn check(&self, value: Option<&str>) -> Option<(&'static str, JsonValue)> {
        let value = value.unwrap_or_default();
        match self {
            ValidationRule::Required => value.is_empty().then(|| (self.key(), JsonValue::Bool(true))),
            _ if value.is_empty() => None,
            ValidationRule::Pattern(pattern) => (!pattern.is_match(value)).then(|| {
                (
                    self.key(),
                    json!({ "requiredPattern": pattern.to_string(), "actualValue": value }),
                )
            }),
            ValidationRule::Min(min) => match parse_float(value) {
                Some(actual) if actual < *min as f64 => {
                    Some((self.key(), json!({ "min": min, "actual": value })))
                }
                _ => None,
            },
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Read the leading decimal number of `text` the way a browser's
/// `parseFloat` does: leading whitespace, a sign, `Infinity`, a fraction and
/// an exponent are accepted and anything after the number is ignored.
fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if unsigned.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let bytes = unsigned.as_bytes();
    let int_digits = count_digits(bytes);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    unsigned[..end].parse::<f64>().ok().map(|n| sign * n)
}

/// Rules for a positive integer field such as a CPU or memory limit. With
/// `allow_unlimited` the literal "unlimited" (or "Unlimited") is accepted too.
pub fn numeric_validators(allow_unlimited: bool) -> Vec<ValidationRule> {
    let pattern: &'static Pattern = if allow_unlimited {
        &UNLIMITED_OR_NUMBER
    } else {
        &NUMBER
    };
    vec![
        ValidationRule::Required,
        ValidationRule::Pattern(pattern),
        ValidationRule::Min(1),
    ]
}

/// Run every rule against `value`. `None` means the value is valid.
pub fn validate(rules: &[ValidationRule], value: Option<&str>) -> Option<ErrorBag> {
    let errors: ErrorBag = rules
        .iter()
        .filter_map(|rule| rule.check(value))
        .map(|(key, detail)| (key.to_string(), detail))
        .collect();
    (!errors.is_empty()).then_some(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_keys(rules: &[ValidationRule], value: Option<&str>) -> Vec<String> {
        validate(rules, value)
            .map(|bag| bag.into_keys().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_numeric_validators_rule_order() {
        let rules = numeric_validators(false);
        let keys: Vec<_> = rules.iter().map(|r| r.key()).collect();
        assert_eq!(keys, ["required", "pattern", "min"]);
    }

    #[test]
    fn test_digits_only() {
        let rules = numeric_validators(false);
        assert!(validate(&rules, Some("1")).is_none());
        assert!(validate(&rules, Some("2048")).is_none());

        assert_eq!(error_keys(&rules, Some("12a")), ["pattern"]);
        assert_eq!(error_keys(&rules, Some("-5")), ["min", "pattern"]);
        assert_eq!(error_keys(&rules, Some("1.5")), ["pattern"]);
        assert_eq!(error_keys(&rules, Some("unlimited")), ["pattern"]);
    }

    #[test]
    fn test_below_minimum() {
        let rules = numeric_validators(false);
        let bag = validate(&rules, Some("0")).unwrap();
        assert_eq!(bag.len(), 1);
        assert_eq!(bag["min"], json!({ "min": 1, "actual": "0" }));
    }

    #[test]
    fn test_missing_value_is_only_required() {
        let rules = numeric_validators(true);
        assert_eq!(error_keys(&rules, None), ["required"]);
        assert_eq!(error_keys(&rules, Some("")), ["required"]);
    }

    #[test]
    fn test_unlimited_allowed() {
        let rules = numeric_validators(true);
        assert!(validate(&rules, Some("unlimited")).is_none());
        assert!(validate(&rules, Some("Unlimited")).is_none());
        assert!(validate(&rules, Some("512")).is_none());
        assert_eq!(error_keys(&rules, Some("UNLIMITED")), ["pattern"]);
        assert_eq!(error_keys(&rules, Some("0")), ["min"]);
    }

    #[test]
    fn test_min_reads_the_leading_number() {
        let rules = numeric_validators(false);
        assert_eq!(error_keys(&rules, Some("0abc")), ["min", "pattern"]);
        assert_eq!(error_keys(&rules, Some(" 0")), ["min", "pattern"]);
        assert_eq!(error_keys(&rules, Some("-inf")), ["pattern"]);
        assert_eq!(error_keys(&rules, Some("-Infinity")), ["min", "pattern"]);
        assert_eq!(error_keys(&rules, Some("5e-1")), ["min", "pattern"]);
        assert_eq!(error_keys(&rules, Some("1e")), ["pattern"]);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("12.5px"), Some(12.5));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("-2e3x"), Some(-2000.0));
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float(""), None);
    }

    #[test]
    fn test_pattern_error_detail() {
        let rules = numeric_validators(false);
        let bag = validate(&rules, Some("abc")).unwrap();
        assert_eq!(bag["pattern"]["actualValue"], "abc");
        assert_eq!(bag["pattern"]["requiredPattern"], "/^[0-9]+$/");
    }
}
