use crate::model::{SlicerConfigV1, StoreSection};
use camino::{Utf8Path, Utf8PathBuf};
use slicer_types::ids::DEFAULT_STORE;
use slicer_types::is_url;
use std::collections::BTreeMap;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub visualizer: Option<String>,
    pub debug: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// Fact tables as JSON files in a directory.
    Json,
    /// A remote slicer server.
    Slicer,
    /// Kept verbatim; fails when a browser is requested.
    Other(String),
}

impl StoreKind {
    fn parse(v: &str) -> Self {
        match v {
            "json" => StoreKind::Json,
            "slicer" => StoreKind::Slicer,
            other => StoreKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StoreKind::Json => "json",
            StoreKind::Slicer => "slicer",
            StoreKind::Other(s) => s,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreSpec {
    pub name: String,
    pub kind: StoreKind,
    pub path: Option<Utf8PathBuf>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveWorkspace {
    pub root: Utf8PathBuf,
    /// Model references, relative paths already resolved.
    pub models: Vec<String>,
    pub stores: BTreeMap<String, StoreSpec>,
    pub options: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub pid_file: Option<Utf8PathBuf>,
    pub visualizer: Option<String>,
    pub debug: bool,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub workspace: EffectiveWorkspace,
    pub server: ServerSettings,
}

pub fn resolve_config(
    cfg: SlicerConfigV1,
    base_dir: &Utf8Path,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let root = match cfg.workspace.root_directory.as_deref() {
        Some(dir) => base_dir.join(dir),
        None => base_dir.to_path_buf(),
    };
    let models_dir = match cfg.workspace.models_directory.as_deref() {
        Some(dir) => root.join(dir),
        None => root.clone(),
    };

    let models = cfg
        .workspace
        .models
        .iter()
        .map(|m| {
            if is_url(m) {
                m.clone()
            } else {
                models_dir.join(m).into_string()
            }
        })
        .collect();

    let mut stores = BTreeMap::new();
    if let Some(default) = &cfg.store {
        stores.insert(
            DEFAULT_STORE.to_string(),
            resolve_store(DEFAULT_STORE, default, &root)?,
        );
    }
    for (name, section) in &cfg.stores {
        if stores.contains_key(name) {
            anyhow::bail!("store '{name}' is defined twice ([store] and [stores.{name}])");
        }
        stores.insert(name.clone(), resolve_store(name, section, &root)?);
    }

    let mut options = BTreeMap::new();
    if let Some(prefix) = cfg.workspace.denormalized_view_prefix {
        options.insert("denormalized_view_prefix".to_string(), prefix);
    }
    if let Some(schema) = cfg.workspace.denormalized_view_schema {
        options.insert("denormalized_view_schema".to_string(), schema);
    }

    let server = ServerSettings {
        host: cfg
            .server
            .host
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: cfg.server.port.unwrap_or(DEFAULT_PORT),
        pid_file: cfg.server.pid_file.map(|p| root.join(p)),
        visualizer: overrides.visualizer.or(cfg.server.visualizer),
        debug: overrides.debug,
    };

    Ok(ResolvedConfig {
        workspace: EffectiveWorkspace {
            root,
            models,
            stores,
            options,
        },
        server,
    })
}

fn resolve_store(name: &str, section: &StoreSection, root: &Utf8Path) -> anyhow::Result<StoreSpec> {
    let kind = match section.store_type.as_deref() {
        Some(t) => StoreKind::parse(t),
        None => anyhow::bail!("store '{name}' has no type"),
    };

    match kind {
        StoreKind::Json if section.path.is_none() => {
            anyhow::bail!("json store '{name}' requires a path")
        }
        StoreKind::Slicer if section.url.is_none() => {
            anyhow::bail!("slicer store '{name}' requires a url")
        }
        _ => {}
    }

    Ok(StoreSpec {
        name: name.to_string(),
        kind,
        path: section.path.as_deref().map(|p| root.join(p)),
        url: section.url.clone(),
    })
}
