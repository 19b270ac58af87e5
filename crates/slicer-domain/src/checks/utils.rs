use serde_json::Value;
use std::collections::BTreeSet;

/// Name of a model object: the string itself, or its `name` key.
pub fn name_of(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map.get("name").and_then(Value::as_str),
        _ => None,
    }
}

/// Entries of a list-valued key. Missing or non-list values yield nothing;
/// the structure check reports those.
pub fn list<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn names<'a>(values: &'a [Value]) -> BTreeSet<&'a str> {
    values.iter().filter_map(name_of).collect()
}

/// Names that occur more than once, each reported once, in first-repeat order.
pub fn duplicates<'a>(values: &'a [Value]) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut out = Vec::new();
    for name in values.iter().filter_map(name_of) {
        if !seen.insert(name) && reported.insert(name) {
            out.push(name);
        }
    }
    out
}
