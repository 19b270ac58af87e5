//! Config parsing and workspace resolution.
//!
//! This crate is intentionally IO-free: it parses configuration provided as a string and
//! resolves relative paths against a base directory supplied by the caller.

#![forbid(unsafe_code)]

mod model;
mod resolve;

use camino::Utf8Path;

pub use model::{ServerSection, SlicerConfigV1, StoreSection, WorkspaceSection};
pub use resolve::{
    EffectiveWorkspace, Overrides, ResolvedConfig, ServerSettings, StoreKind, StoreSpec,
};

/// Parse `slicer.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SlicerConfigV1> {
    let cfg: SlicerConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective workspace and server settings.
///
/// `base_dir` is the directory containing the config file.
pub fn resolve_config(
    cfg: SlicerConfigV1,
    base_dir: &Utf8Path,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, base_dir, overrides)
}
