//! Commands that hand control to an optional component: `serve`, `model edit`
//! and `ddl`.

use crate::capabilities::{Capabilities, DdlOptions};
use camino::{Utf8Path, Utf8PathBuf};
use slicer_settings::Overrides;
use slicer_types::CubesError;
use std::io::Write;
use tracing::info;

const DEFAULT_DDL_BACKEND: &str = "sql";
const DEFAULT_EDITOR_PORT: u16 = 5000;

#[derive(Clone, Debug, Default)]
pub struct ServeInput {
    pub config: Utf8PathBuf,
    pub debug: bool,
    pub visualizer: Option<String>,
}

pub fn run_serve(caps: &Capabilities, input: &ServeInput) -> anyhow::Result<()> {
    let launcher = caps.server()?;
    let resolved = slicer_workspace::read_config(
        &input.config,
        Overrides {
            visualizer: input.visualizer.clone(),
            debug: input.debug,
        },
    )?;

    if let Some(path) = &resolved.server.pid_file {
        write_pid_file(path)?;
    }

    info!(
        host = %resolved.server.host,
        port = resolved.server.port,
        "starting server"
    );
    launcher.run(&resolved.server, &input.config)
}

fn write_pid_file(path: &Utf8Path) -> Result<(), CubesError> {
    std::fs::write(path, format!("{}\n", std::process::id())).map_err(|_| {
        CubesError::Configuration(format!(
            "Unable to write PID file '{path}'. Check the directory existence or permissions."
        ))
    })
}

#[derive(Clone, Debug, Default)]
pub struct EditInput {
    pub model: String,
    pub target: Option<Utf8PathBuf>,
    pub port: Option<u16>,
}

pub fn run_edit(caps: &Capabilities, input: &EditInput) -> anyhow::Result<()> {
    let editor = caps.model_editor()?;
    editor.edit(
        &input.model,
        input.target.as_deref(),
        input.port.unwrap_or(DEFAULT_EDITOR_PORT),
    )
}

#[derive(Clone, Debug, Default)]
pub struct DdlInput {
    pub url: String,
    pub model: String,
    pub backend: Option<String>,
    pub options: DdlOptions,
}

/// Generate DDL with the named backend, `sql` by default.
pub fn run_ddl(caps: &Capabilities, input: &DdlInput, out: &mut dyn Write) -> anyhow::Result<()> {
    let model = slicer_metadata::read_model_metadata(&input.model)?;
    let backend = input.backend.as_deref().unwrap_or(DEFAULT_DDL_BACKEND);
    let generator = caps.ddl_backend(backend)?;

    let ddl = generator.generate(&input.url, &model, &input.options)?;
    writeln!(out, "{ddl}")?;
    Ok(())
}
