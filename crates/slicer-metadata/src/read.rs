use crate::bundle::read_model_metadata_bundle;
use camino::Utf8Path;
use serde_json::Value;
use slicer_types::{CubesError, is_url};
use tracing::debug;

/// Read model metadata from a reference: an `http(s)://` URL, a bundle
/// directory, or a JSON file.
pub fn read_model_metadata(reference: &str) -> Result<Value, CubesError> {
    if is_url(reference) {
        debug!(url = reference, "fetching model metadata");
        return fetch(reference);
    }

    let path = Utf8Path::new(reference);
    if path.is_dir() {
        debug!(%path, "reading model bundle");
        return read_model_metadata_bundle(path);
    }

    debug!(%path, "reading model file");
    let text = std::fs::read_to_string(path).map_err(|e| CubesError::model_load(reference, e))?;
    serde_json::from_str(&text)
        .map_err(|e| CubesError::model_load(reference, format!("invalid JSON: {e}")))
}

fn fetch(url: &str) -> Result<Value, CubesError> {
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| CubesError::model_load(url, e))?;
    response
        .json::<Value>()
        .map_err(|e| CubesError::model_load(url, format!("invalid JSON: {e}")))
}
