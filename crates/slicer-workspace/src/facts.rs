//! Fact tables stored as JSON row arrays, and the logical-to-physical column
//! mapping of a cube.

use camino::Utf8Path;
use serde_json::{Map, Value};
use slicer_types::CubesError;

pub(crate) type Row = Map<String, Value>;

/// A logical name (`measure`, `dim` or `dim.attribute`) and its fact column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Column {
    pub logical: String,
    pub physical: String,
}

pub(crate) fn fact_name(cube: &Value, cube_name: &str) -> String {
    cube.get("fact")
        .and_then(Value::as_str)
        .unwrap_or(cube_name)
        .to_string()
}

/// A single path component: not empty, no separators, not `.` or `..`.
pub(crate) fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// Load `<dir>/<fact>.json`, which must be an array of objects.
pub(crate) fn load_rows(dir: &Utf8Path, fact: &str) -> Result<Vec<Row>, CubesError> {
    if !is_plain_name(fact) {
        return Err(CubesError::Backend(format!(
            "'{fact}' can not be used as a fact table name"
        )));
    }
    let path = dir.join(format!("{fact}.json"));
    let text = std::fs::read_to_string(&path)
        .map_err(|e| CubesError::Backend(format!("unable to read fact table '{fact}' ({path}): {e}")))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| CubesError::Backend(format!("fact table '{fact}' is not valid JSON: {e}")))?;

    let Value::Array(items) = value else {
        return Err(CubesError::Backend(format!(
            "fact table '{fact}' must be a list of rows"
        )));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(row) => Ok(row),
            _ => Err(CubesError::Backend(format!(
                "row {i} of fact table '{fact}' is not an object"
            ))),
        })
        .collect()
}

fn mapped(mappings: Option<&Map<String, Value>>, logical: &str, default: &str) -> String {
    mappings
        .and_then(|m| m.get(logical))
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn item_name(item: &Value) -> Option<&str> {
    match item {
        Value::String(s) => Some(s.as_str()),
        _ => item.get("name").and_then(Value::as_str),
    }
}

pub(crate) fn measure_columns(cube: &Value) -> Vec<Column> {
    let mappings = cube.get("mappings").and_then(Value::as_object);
    cube.get("measures")
        .and_then(Value::as_array)
        .map(|ms| ms.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(item_name)
        .map(|name| Column {
            logical: name.to_string(),
            physical: mapped(mappings, name, name),
        })
        .collect()
}

/// Attribute columns of the given dimensions, in level order.
///
/// A dimension without levels has one attribute named after it; a level
/// without attributes has one named after the level.
pub(crate) fn attribute_columns(cube: &Value, dimensions: &[Value]) -> Vec<Column> {
    let mappings = cube.get("mappings").and_then(Value::as_object);
    let mut out = Vec::new();

    for dim in dimensions {
        let Some(dim_name) = item_name(dim) else {
            continue;
        };
        let levels = dim
            .get("levels")
            .and_then(Value::as_array)
            .filter(|ls| !ls.is_empty());

        let mut attributes: Vec<&str> = Vec::new();
        match levels {
            None => attributes.push(dim_name),
            Some(levels) => {
                for level in levels {
                    let Some(level_name) = item_name(level) else {
                        continue;
                    };
                    let attrs: Vec<&str> = level
                        .get("attributes")
                        .and_then(Value::as_array)
                        .map(|a| a.iter().filter_map(item_name).collect())
                        .unwrap_or_default();
                    if attrs.is_empty() {
                        attributes.push(level_name);
                    } else {
                        attributes.extend(attrs);
                    }
                }
            }
        }

        for attr in attributes {
            let logical = if attr == dim_name {
                dim_name.to_string()
            } else {
                format!("{dim_name}.{attr}")
            };
            let physical = mapped(mappings, &logical, attr);
            out.push(Column { logical, physical });
        }
    }
    out
}
