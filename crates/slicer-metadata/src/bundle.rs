//! Model bundles: a directory with `model.json` plus one file per dimension
//! (`dim_<name>.json`) and per cube (`cube_<name>.json`).

use crate::json::to_json_pretty;
use camino::Utf8Path;
use serde_json::{Map, Value};
use slicer_types::CubesError;
use std::collections::BTreeSet;
use tracing::{debug, info};
use walkdir::WalkDir;

const MODEL_FILE: &str = "model.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    Dimension,
    Cube,
}

impl Part {
    fn key(self) -> &'static str {
        match self {
            Part::Dimension => "dimensions",
            Part::Cube => "cubes",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Part::Dimension => "dimension",
            Part::Cube => "cube",
        }
    }

    fn file_name(self, name: &str) -> String {
        match self {
            Part::Dimension => format!("dim_{name}.json"),
            Part::Cube => format!("cube_{name}.json"),
        }
    }

    fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".json")?;
        if stem.starts_with("dim_") || stem.starts_with("dimension_") {
            Some(Part::Dimension)
        } else if stem.starts_with("cube_") {
            Some(Part::Cube)
        } else {
            None
        }
    }
}

/// Read a bundle directory into a single model document.
///
/// Part files are merged in file name order after the lists already present
/// in `model.json`, which may be absent. Every part must carry a `name`;
/// duplicates are an error.
pub fn read_model_metadata_bundle(path: &Utf8Path) -> Result<Value, CubesError> {
    if !path.is_dir() {
        return Err(CubesError::model_load(path.as_str(), "not a directory"));
    }

    let model_path = path.join(MODEL_FILE);
    let mut model = if model_path.is_file() {
        match read_json(&model_path)? {
            Value::Object(map) => map,
            _ => {
                return Err(CubesError::model_load(
                    model_path.as_str(),
                    "model.json must contain a JSON object",
                ));
            }
        }
    } else {
        Map::new()
    };

    let mut seen: [BTreeSet<String>; 2] = [BTreeSet::new(), BTreeSet::new()];
    for part in [Part::Dimension, Part::Cube] {
        if let Some(Value::Array(items)) = model.get(part.key()) {
            for item in items {
                if let Some(name) = item.get("name").and_then(Value::as_str) {
                    seen[part as usize].insert(name.to_string());
                }
            }
        }
    }

    let entries = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in entries {
        let entry = entry.map_err(|e| CubesError::model_load(path.as_str(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(part) = Part::from_file_name(file_name) else {
            continue;
        };

        let file_path = path.join(file_name);
        let value = read_json(&file_path)?;
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                CubesError::Model(format!("{} file '{file_path}' has no name", part.noun()))
            })?
            .to_string();
        if !seen[part as usize].insert(name.clone()) {
            return Err(CubesError::Model(format!(
                "{} '{name}' is defined more than once in bundle '{path}'",
                part.noun()
            )));
        }

        debug!(file = %file_path, part = part.noun(), %name, "bundle part");
        let list = model
            .entry(part.key())
            .or_insert_with(|| Value::Array(Vec::new()));
        match list {
            Value::Array(items) => items.push(value),
            _ => {
                return Err(CubesError::Model(format!(
                    "'{}' in model.json must be a list",
                    part.key()
                )));
            }
        }
    }

    Ok(Value::Object(model))
}

/// Write a model document as a bundle directory.
///
/// An existing target is replaced only when `replace` is set and the target is
/// itself a bundle. All checks run before anything on disk changes.
pub fn write_model_metadata_bundle(
    path: &Utf8Path,
    metadata: &Value,
    replace: bool,
) -> Result<(), CubesError> {
    let Some(map) = metadata.as_object() else {
        return Err(CubesError::Argument(
            "model metadata must be a JSON object".to_string(),
        ));
    };

    let mut base = map.clone();
    let mut files: Vec<(String, Value)> = Vec::new();
    for part in [Part::Dimension, Part::Cube] {
        for item in take_list(&mut base, part)? {
            let item = match item {
                Value::String(name) => {
                    let mut obj = Map::new();
                    obj.insert("name".to_string(), Value::String(name));
                    Value::Object(obj)
                }
                other => other,
            };
            let name = part_file_name(&item, part)?;
            if files.iter().any(|(f, _)| *f == name) {
                return Err(CubesError::Model(format!(
                    "{} file '{name}' would be written twice",
                    part.noun()
                )));
            }
            files.push((name, item));
        }
    }

    let mut rendered = Vec::with_capacity(files.len() + 1);
    for (name, value) in &files {
        rendered.push((path.join(name), to_json_pretty(value)?));
    }
    rendered.push((path.join(MODEL_FILE), to_json_pretty(&Value::Object(base))?));

    prepare_target(path, replace)?;
    std::fs::create_dir_all(path).map_err(|e| CubesError::io(path, e))?;
    for (file, text) in rendered {
        std::fs::write(&file, text).map_err(|e| CubesError::io(&file, e))?;
    }
    info!(%path, parts = files.len(), "wrote model bundle");
    Ok(())
}

fn take_list(model: &mut Map<String, Value>, part: Part) -> Result<Vec<Value>, CubesError> {
    match model.remove(part.key()) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(CubesError::Model(format!("'{}' must be a list", part.key()))),
    }
}

fn part_file_name(item: &Value, part: Part) -> Result<String, CubesError> {
    let Some(name) = item.get("name").and_then(Value::as_str) else {
        return Err(CubesError::Model(format!(
            "{} without a name can not be written to a bundle",
            part.noun()
        )));
    };
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CubesError::Model(format!(
            "{} name '{name}' can not be used as a file name",
            part.noun()
        )));
    }
    Ok(part.file_name(name))
}

fn prepare_target(path: &Utf8Path, replace: bool) -> Result<(), CubesError> {
    if !path.exists() {
        return Ok(());
    }
    if !path.is_dir() {
        return Err(CubesError::Argument(
            "Target exists and is a file, can not replace".to_string(),
        ));
    }
    if !path.join(MODEL_FILE).is_file() {
        return Err(CubesError::Argument(
            "Target is not a model directory, can not replace.".to_string(),
        ));
    }
    if !replace {
        return Err(CubesError::Argument(
            "Target already exists. Remove it or use --force.".to_string(),
        ));
    }
    debug!(%path, "removing existing bundle");
    std::fs::remove_dir_all(path).map_err(|e| CubesError::io(path, e))
}

fn read_json(path: &Utf8Path) -> Result<Value, CubesError> {
    let text = std::fs::read_to_string(path).map_err(|e| CubesError::model_load(path.as_str(), e))?;
    serde_json::from_str(&text)
        .map_err(|e| CubesError::model_load(path.as_str(), format!("invalid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use serde_json::json;

    fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 temp dir");
        (tmp, path)
    }

    fn sample() -> Value {
        json!({
            "name": "shop",
            "cubes": [{"name": "sales", "dimensions": ["date"], "measures": [{"name": "amount"}]}],
            "dimensions": [{"name": "date", "levels": [{"name": "year"}]}, "region"]
        })
    }

    #[test]
    fn writes_one_file_per_part() {
        let (_tmp, root) = utf8_tempdir();
        let target = root.join("shop.cubesmodel");
        write_model_metadata_bundle(&target, &sample(), false).expect("write");

        assert!(target.join("model.json").is_file());
        assert!(target.join("cube_sales.json").is_file());
        assert!(target.join("dim_date.json").is_file());
        assert!(target.join("dim_region.json").is_file());

        let model: Value =
            serde_json::from_str(&std::fs::read_to_string(target.join("model.json")).expect("read"))
                .expect("parse");
        assert_eq!(model, json!({"name": "shop"}));
    }

    #[test]
    fn bundle_reads_back_into_one_document() {
        let (_tmp, root) = utf8_tempdir();
        let target = root.join("shop");
        write_model_metadata_bundle(&target, &sample(), false).expect("write");

        let model = read_model_metadata_bundle(&target).expect("read");
        assert_eq!(model["name"], "shop");
        let dims: Vec<&str> = model["dimensions"]
            .as_array()
            .expect("dimensions")
            .iter()
            .filter_map(|d| d["name"].as_str())
            .collect();
        assert_eq!(dims, vec!["date", "region"]);
        assert_eq!(model["cubes"][0]["name"], "sales");
    }

    #[test]
    fn reader_accepts_long_dimension_prefix() {
        let (_tmp, root) = utf8_tempdir();
        std::fs::write(root.join("model.json"), r#"{"name": "m"}"#).expect("write");
        std::fs::write(root.join("dimension_store.json"), r#"{"name": "store"}"#).expect("write");
        std::fs::write(root.join("notes.txt"), "ignored").expect("write");

        let model = read_model_metadata_bundle(&root).expect("read");
        assert_eq!(model["dimensions"], json!([{"name": "store"}]));
        assert!(model.get("cubes").is_none());
    }

    #[test]
    fn reader_rejects_duplicates_and_nameless_parts() {
        let (_tmp, root) = utf8_tempdir();
        std::fs::write(root.join("model.json"), r#"{"dimensions": [{"name": "d"}]}"#)
            .expect("write");
        std::fs::write(root.join("dim_d.json"), r#"{"name": "d"}"#).expect("write");
        let err = read_model_metadata_bundle(&root).expect_err("duplicate");
        assert!(err.to_string().contains("more than once"));

        std::fs::remove_file(root.join("dim_d.json")).expect("remove");
        std::fs::write(root.join("cube_x.json"), r#"{"fact": "x"}"#).expect("write");
        let err = read_model_metadata_bundle(&root).expect_err("nameless");
        assert!(err.to_string().contains("has no name"));
    }

    #[test]
    fn model_file_is_optional() {
        let (_tmp, root) = utf8_tempdir();
        std::fs::write(root.join("cube_sales.json"), r#"{"name": "sales"}"#).expect("write");

        let model = read_model_metadata_bundle(&root).expect("read");
        assert_eq!(model, json!({"cubes": [{"name": "sales"}]}));

        let err = read_model_metadata_bundle(&root.join("missing")).expect_err("no dir");
        assert_eq!(err.kind(), "ModelLoadError");
    }

    #[test]
    fn refuses_to_replace_a_file() {
        let (_tmp, root) = utf8_tempdir();
        let target = root.join("model");
        std::fs::write(&target, "keep").expect("write");

        let err = write_model_metadata_bundle(&target, &sample(), true).expect_err("file");
        assert_eq!(err.to_string(), "Target exists and is a file, can not replace");
        assert_eq!(std::fs::read_to_string(&target).expect("read"), "keep");
    }

    #[test]
    fn refuses_to_replace_a_non_bundle_directory_even_with_force() {
        let (_tmp, root) = utf8_tempdir();
        std::fs::write(root.join("precious.txt"), "keep").expect("write");

        let err = write_model_metadata_bundle(&root, &sample(), true).expect_err("not a bundle");
        assert_eq!(
            err.to_string(),
            "Target is not a model directory, can not replace."
        );
        assert!(root.join("precious.txt").is_file());
        assert!(!root.join("model.json").exists());
    }

    #[test]
    fn existing_bundle_needs_force() {
        let (_tmp, root) = utf8_tempdir();
        let target = root.join("b");
        write_model_metadata_bundle(&target, &sample(), false).expect("first write");

        let err = write_model_metadata_bundle(&target, &json!({"name": "other"}), false)
            .expect_err("exists");
        assert_eq!(
            err.to_string(),
            "Target already exists. Remove it or use --force."
        );

        write_model_metadata_bundle(&target, &json!({"name": "other"}), true).expect("replace");
        assert!(!target.join("cube_sales.json").exists());
        let model = read_model_metadata_bundle(&target).expect("read");
        assert_eq!(model, json!({"name": "other"}));
    }

    #[test]
    fn unnamed_part_fails_before_touching_disk() {
        let (_tmp, root) = utf8_tempdir();
        let target = root.join("out");
        let err = write_model_metadata_bundle(&target, &json!({"cubes": [{"fact": "f"}]}), false)
            .expect_err("unnamed");
        assert!(err.to_string().contains("without a name"));
        assert!(!target.exists());
    }
}
