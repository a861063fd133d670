//! Deep-path lookup over attribute trees.
//!
//! An attribute tree is an arbitrarily nested [`serde_json::Value`]. Lookup
//! walks a sequence of string keys and distinguishes a missing path
//! (`None`) from a present-but-empty value, which [`is_empty_value`]
//! classifies separately.

use serde_json::Value;

/// Walk `path` through a nested attribute tree.
///
/// Each segment indexes an object by key; sequences are indexed by
/// segments that parse as integers. Returns `None` as soon as any segment
/// is absent — never an error.
///
/// # Examples
///
/// ```
/// use blockstyle::lookup;
/// use serde_json::json;
///
/// let tree = json!({ "spacing": { "padding": { "top": "1em" } } });
/// assert_eq!(
///     lookup(&tree, &["spacing", "padding", "top"]),
///     Some(&json!("1em"))
/// );
/// assert_eq!(lookup(&tree, &["spacing", "margin"]), None);
/// ```
pub fn lookup<'a>(tree: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut node = tree;
    for segment in path {
        node = match node {
            Value::Object(map) => map.get(*segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Classify a value as "no value configured".
///
/// Policy, applied uniformly by both resolvers: `null`, the empty string,
/// `false`, numeric zero, and empty collections all read as absent. A
/// legitimate zero-valued style must be written as the string `"0"`.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Render a scalar leaf as CSS value text.
///
/// Mappings and sequences are not scalars and yield `None`.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_object() {
        let tree = json!({ "typography": { "fontSize": "2em" } });
        assert_eq!(
            lookup(&tree, &["typography", "fontSize"]),
            Some(&json!("2em"))
        );
    }

    #[test]
    fn test_lookup_missing_segment() {
        let tree = json!({ "typography": { "fontSize": "2em" } });
        assert_eq!(lookup(&tree, &["typography", "lineHeight"]), None);
        assert_eq!(lookup(&tree, &["spacing", "margin"]), None);
    }

    #[test]
    fn test_lookup_through_scalar_is_none() {
        let tree = json!({ "typography": "oops" });
        assert_eq!(lookup(&tree, &["typography", "fontSize"]), None);
    }

    #[test]
    fn test_lookup_array_index() {
        let tree = json!({ "fonts": ["serif", "sans"] });
        assert_eq!(lookup(&tree, &["fonts", "1"]), Some(&json!("sans")));
        assert_eq!(lookup(&tree, &["fonts", "7"]), None);
        assert_eq!(lookup(&tree, &["fonts", "x"]), None);
    }

    #[test]
    fn test_lookup_present_null_is_some() {
        // A present null is distinct from a missing path
        let tree = json!({ "typography": { "fontSize": null } });
        assert_eq!(
            lookup(&tree, &["typography", "fontSize"]),
            Some(&Value::Null)
        );
    }

    #[test]
    fn test_empty_value_classification() {
        assert!(is_empty_value(&json!(null)));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!(false)));
        assert!(is_empty_value(&json!(0)));
        assert!(is_empty_value(&json!(0.0)));
        assert!(is_empty_value(&json!({})));
        assert!(is_empty_value(&json!([])));

        assert!(!is_empty_value(&json!("0")));
        assert!(!is_empty_value(&json!(1)));
        assert!(!is_empty_value(&json!(true)));
        assert!(!is_empty_value(&json!({ "top": "1em" })));
    }

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&json!("1em")), Some("1em".to_string()));
        assert_eq!(scalar_to_string(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(scalar_to_string(&json!(700)), Some("700".to_string()));
        assert_eq!(scalar_to_string(&json!({ "top": "1em" })), None);
        assert_eq!(scalar_to_string(&json!(null)), None);
    }
}
