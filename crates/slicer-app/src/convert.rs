//! The `model convert` use case.

use camino::Utf8PathBuf;
use slicer_types::CubesError;
use std::io::Write;
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelFormat {
    #[default]
    Json,
    Bundle,
}

impl ModelFormat {
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "json" => Some(ModelFormat::Json),
            "bundle" => Some(ModelFormat::Bundle),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConvertInput {
    pub model: String,
    pub format: ModelFormat,
    pub target: Option<Utf8PathBuf>,
    /// Replace an existing bundle.
    pub force: bool,
}

/// Re-serialize a model. JSON without a target goes to `out`.
pub fn run_convert(input: &ConvertInput, out: &mut dyn Write) -> anyhow::Result<()> {
    let model = slicer_metadata::read_model_metadata(&input.model)?;

    match (input.format, &input.target) {
        (ModelFormat::Json, None) => {
            out.write_all(slicer_metadata::to_json_pretty(&model)?.as_bytes())?;
        }
        (ModelFormat::Json, Some(path)) => {
            let text = slicer_metadata::to_json_pretty(&model)?;
            std::fs::write(path, text).map_err(|e| CubesError::io(path, e))?;
            info!(%path, "model written");
        }
        (ModelFormat::Bundle, Some(path)) => {
            slicer_metadata::write_model_metadata_bundle(path, &model, input.force)?;
        }
        (ModelFormat::Bundle, None) => {
            return Err(CubesError::Argument(
                "the bundle format requires a target directory".to_string(),
            )
            .into());
        }
    }
    Ok(())
}
