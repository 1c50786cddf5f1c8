//! Value derivations applied to individual body fields.

use serde_json::Value as JsonValue;

/// Splits a comma-separated string into trimmed entries, keeping order and count.
///
/// `"a, b ,c"` becomes `["a", "b", "c"]`. Empty segments are kept, so
/// `"a,,b"` yields three entries.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',').map(|part| part.trim().to_string()).collect()
}

/// A list when the value contains a comma, otherwise the value unchanged.
pub fn scalar_or_list(s: &str) -> JsonValue {
    if s.contains(',') {
        JsonValue::Array(split_list(s).into_iter().map(JsonValue::String).collect())
    } else {
        JsonValue::String(s.to_string())
    }
}

/// `null`, `""`, `[]` and `{}` count as empty. Numbers and booleans never do.
pub fn is_empty_value(v: &JsonValue) -> bool {
    match v {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
        JsonValue::Bool(_) | JsonValue::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn split_list_trims_and_preserves_order() {
        assert_eq!(split_list("a, b, c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("company:1,company:2"), vec!["company:1", "company:2"]);
        assert_eq!(split_list(" solo "), vec!["solo"]);
        assert_eq!(split_list("a,,b").len(), 3);
    }

    #[test]
    fn scalar_or_list_only_splits_on_comma() {
        assert_eq!(scalar_or_list("company:1441"), json!("company:1441"));
        assert_eq!(
            scalar_or_list("company:1, company:2"),
            json!(["company:1", "company:2"])
        );
        assert_eq!(scalar_or_list(" padded "), json!(" padded "));
    }

    #[test]
    fn emptiness() {
        assert!(is_empty_value(&json!(null)));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!([])));
        assert!(!is_empty_value(&json!(0)));
        assert!(!is_empty_value(&json!(false)));
        assert!(!is_empty_value(&json!(" ")));
    }
}
