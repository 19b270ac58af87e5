//! Optional components, resolved once at startup.
//!
//! Commands that need a component this build does not have fail with
//! `CubesError::MissingPackage`.

use camino::Utf8Path;
use serde_json::Value;
use slicer_settings::ServerSettings;
use slicer_types::CubesError;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Runs the HTTP query server until it stops.
pub trait ServerLauncher {
    fn run(&self, settings: &ServerSettings, config: &Utf8Path) -> anyhow::Result<()>;
}

/// Interactive model editor.
pub trait ModelEditor {
    fn edit(&self, model: &str, target: Option<&Utf8Path>, port: u16) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DdlOptions {
    pub dimension_prefix: Option<String>,
    pub dimension_suffix: Option<String>,
    pub fact_prefix: Option<String>,
    pub fact_suffix: Option<String>,
}

/// Produces schema DDL for a model against a database URL.
pub trait DdlGenerator {
    fn generate(&self, url: &str, model: &Value, options: &DdlOptions) -> Result<String, CubesError>;
}

#[derive(Clone, Default)]
pub struct Capabilities {
    pub server: Option<Arc<dyn ServerLauncher>>,
    pub model_editor: Option<Arc<dyn ModelEditor>>,
    /// DDL generators by backend name.
    pub ddl_backends: BTreeMap<String, Arc<dyn DdlGenerator>>,
}

impl Capabilities {
    /// Components compiled into this build. None are bundled yet.
    pub fn detect() -> Self {
        Self::default()
    }

    pub fn server(&self) -> Result<&dyn ServerLauncher, CubesError> {
        self.server
            .as_deref()
            .ok_or_else(|| CubesError::missing_package("slicer server", "to run the HTTP server"))
    }

    pub fn model_editor(&self) -> Result<&dyn ModelEditor, CubesError> {
        self.model_editor
            .as_deref()
            .ok_or_else(|| CubesError::missing_package("cubes modeler", "to edit the model"))
    }

    pub fn ddl_backend(&self, name: &str) -> Result<&dyn DdlGenerator, CubesError> {
        self.ddl_backends.get(name).map(Arc::as_ref).ok_or_else(|| {
            CubesError::missing_package(&format!("{name} backend"), "to generate DDL")
        })
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("server", &self.server.is_some())
            .field("model_editor", &self.model_editor.is_some())
            .field("ddl_backends", &self.ddl_backends.keys().collect::<Vec<_>>())
            .finish()
    }
}
