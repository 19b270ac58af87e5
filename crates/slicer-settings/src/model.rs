use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `slicer.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlicerConfigV1 {
    #[serde(default)]
    pub workspace: WorkspaceSection,

    /// The store named `default`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreSection>,

    /// Additional named stores.
    #[serde(default)]
    pub stores: BTreeMap<String, StoreSection>,

    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceSection {
    /// Base for relative paths, itself relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_directory: Option<String>,

    /// Base for relative model references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models_directory: Option<String>,

    /// Model references: files, bundle directories or URLs. Order is kept.
    #[serde(default)]
    pub models: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denormalized_view_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denormalized_view_schema: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Backend type: `json`, `slicer`, or anything a backend registers.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub store_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualizer: Option<String>,
}
