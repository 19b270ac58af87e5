//! Filesystem workspace: reads `slicer.toml`, loads the configured models and
//! resolves cubes to browsers and stores.
//!
//! This crate does filesystem IO (and HTTP, through model references that are
//! URLs). It does not print anything.

#![forbid(unsafe_code)]

mod facts;
mod json_store;
mod remote;

use camino::Utf8Path;
use serde_json::{Map, Value};
use slicer_domain::{Browser, Cube, Store, Workspace};
use slicer_settings::{EffectiveWorkspace, Overrides, ResolvedConfig, StoreKind, StoreSpec};
use slicer_types::CubesError;
use slicer_types::ids::DEFAULT_STORE;
use std::collections::BTreeMap;
use tracing::debug;

use json_store::{JsonBrowser, JsonStore};
use remote::{SlicerBrowser, UnsupportedStore};

/// Read and resolve a config file. Relative paths resolve against its directory.
pub fn read_config(path: &Utf8Path, overrides: Overrides) -> Result<ResolvedConfig, CubesError> {
    let text = std::fs::read_to_string(path).map_err(|e| CubesError::io(path, e))?;
    let cfg = slicer_settings::parse_config_toml(&text)
        .map_err(|e| CubesError::Configuration(format!("{path}: {e:#}")))?;
    let base = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    slicer_settings::resolve_config(cfg, base, overrides)
        .map_err(|e| CubesError::Configuration(format!("{path}: {e:#}")))
}

#[derive(Debug)]
pub struct FsWorkspace {
    config: EffectiveWorkspace,
    /// Registration order.
    cubes: Vec<Cube>,
    /// Cube name to the model dimensions it references.
    dimensions: BTreeMap<String, Vec<Value>>,
    /// Cubes referring to dimensions their model does not define, with the
    /// reason. Reported when the cube is requested.
    unresolved: BTreeMap<String, String>,
}

impl FsWorkspace {
    pub fn open(config_path: &Utf8Path) -> Result<Self, CubesError> {
        let resolved = read_config(config_path, Overrides::default())?;
        Self::from_config(resolved.workspace)
    }

    /// Load every configured model, in configuration order.
    pub fn from_config(config: EffectiveWorkspace) -> Result<Self, CubesError> {
        let mut ws = FsWorkspace {
            config,
            cubes: Vec::new(),
            dimensions: BTreeMap::new(),
            unresolved: BTreeMap::new(),
        };
        for reference in ws.config.models.clone() {
            debug!(model = %reference, "loading model");
            let model = slicer_metadata::read_model_metadata(&reference)?;
            ws.register_model(&reference, &model)?;
        }
        debug!(cubes = ws.cubes.len(), stores = ws.config.stores.len(), "workspace ready");
        Ok(ws)
    }

    fn register_model(&mut self, reference: &str, model: &Value) -> Result<(), CubesError> {
        let Some(model) = model.as_object() else {
            return Err(CubesError::Model(format!(
                "model '{reference}' is not a JSON object"
            )));
        };
        let model_store = model.get("store").and_then(Value::as_str);
        let dimensions = model_dimensions(reference, model)?;

        let cubes = match model.get("cubes") {
            None => return Ok(()),
            Some(Value::Array(cubes)) => cubes,
            Some(_) => {
                return Err(CubesError::Model(format!(
                    "'cubes' in model '{reference}' must be a list"
                )));
            }
        };

        for cube in cubes {
            let Some(name) = cube.get("name").and_then(Value::as_str) else {
                return Err(CubesError::Model(format!(
                    "cube without a name in model '{reference}'"
                )));
            };
            if self.cubes.iter().any(|c| c.name == name) {
                return Err(CubesError::Model(format!(
                    "cube '{name}' is defined more than once"
                )));
            }

            let mut used = Vec::new();
            for dim_ref in cube
                .get("dimensions")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default()
            {
                let dim_name = match dim_ref {
                    Value::String(s) => s.as_str(),
                    other => other.get("name").and_then(Value::as_str).unwrap_or_default(),
                };
                match dimensions.get(dim_name) {
                    Some(dim) => used.push(dim.clone()),
                    None => {
                        debug!(cube = name, dimension = dim_name, "unknown dimension");
                        self.unresolved.entry(name.to_string()).or_insert_with(|| {
                            format!("cube '{name}' refers to unknown dimension '{dim_name}'")
                        });
                    }
                }
            }

            let datastore = cube
                .get("store")
                .and_then(Value::as_str)
                .or(model_store)
                .unwrap_or(DEFAULT_STORE)
                .to_string();
            debug!(cube = name, %datastore, model = reference, "cube registered");

            self.dimensions.insert(name.to_string(), used);
            self.cubes.push(Cube {
                name: name.to_string(),
                datastore,
                metadata: cube.clone(),
            });
        }
        Ok(())
    }

    fn store_spec(&self, name: &str) -> Result<&StoreSpec, CubesError> {
        self.config
            .stores
            .get(name)
            .ok_or_else(|| CubesError::NoSuchStore(name.to_string()))
    }
}

fn model_dimensions(
    reference: &str,
    model: &Map<String, Value>,
) -> Result<BTreeMap<String, Value>, CubesError> {
    let mut out = BTreeMap::new();
    let items = match model.get("dimensions") {
        None => return Ok(out),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(CubesError::Model(format!(
                "'dimensions' in model '{reference}' must be a list"
            )));
        }
    };
    for item in items {
        let (name, dim) = match item {
            Value::String(s) => {
                let mut obj = Map::new();
                obj.insert("name".to_string(), Value::String(s.clone()));
                (s.clone(), Value::Object(obj))
            }
            other => match other.get("name").and_then(Value::as_str) {
                Some(n) => (n.to_string(), other.clone()),
                None => {
                    return Err(CubesError::Model(format!(
                        "dimension without a name in model '{reference}'"
                    )));
                }
            },
        };
        out.insert(name, dim);
    }
    Ok(out)
}

impl Workspace for FsWorkspace {
    fn list_cubes(&self) -> Vec<String> {
        self.cubes.iter().map(|c| c.name.clone()).collect()
    }

    fn cube(&self, name: &str) -> Result<Cube, CubesError> {
        let cube = self
            .cubes
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CubesError::NoSuchCube(name.to_string()))?;
        if let Some(reason) = self.unresolved.get(name) {
            return Err(CubesError::Model(reason.clone()));
        }
        Ok(cube.clone())
    }

    fn browser(&self, cube: &str) -> Result<Box<dyn Browser + '_>, CubesError> {
        let cube = self.cube(cube)?;
        let spec = self.store_spec(&cube.datastore)?;
        debug!(cube = %cube.name, store = %spec.name, kind = spec.kind.as_str(), "resolving browser");
        match &spec.kind {
            StoreKind::Json => match &spec.path {
                Some(dir) => Ok(Box::new(JsonBrowser {
                    dir: dir.clone(),
                    cube,
                })),
                None => Err(CubesError::Configuration(format!(
                    "json store '{}' has no path",
                    spec.name
                ))),
            },
            StoreKind::Slicer => Ok(Box::new(SlicerBrowser {
                url: spec.url.clone().unwrap_or_default(),
            })),
            StoreKind::Other(kind) => Err(CubesError::Configuration(format!(
                "unknown store type '{kind}' of store '{}'",
                spec.name
            ))),
        }
    }

    fn store(&self, name: &str) -> Result<Box<dyn Store + '_>, CubesError> {
        let spec = self.store_spec(name)?;
        match (&spec.kind, &spec.path) {
            (StoreKind::Json, Some(dir)) => Ok(Box::new(JsonStore {
                name: spec.name.clone(),
                dir: dir.clone(),
                dimensions: &self.dimensions,
            })),
            (kind, _) => Ok(Box::new(UnsupportedStore {
                name: spec.name.clone(),
                kind: kind.as_str().to_string(),
            })),
        }
    }

    fn option(&self, name: &str) -> Option<String> {
        self.config.options.get(name).cloned()
    }
}
