//! Model metadata adapters: read models from files, bundle directories and URLs,
//! and write them back as JSON documents or bundles.
//!
//! This crate does filesystem and network IO. It does not validate models; see
//! `slicer-domain` for that.

#![forbid(unsafe_code)]

mod bundle;
mod json;
mod read;

pub use bundle::{read_model_metadata_bundle, write_model_metadata_bundle};
pub use json::to_json_pretty;
pub use read::read_model_metadata;
