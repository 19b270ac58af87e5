//! Collaborator seams for running cubes against their backing stores.
//!
//! Implementations live in adapter crates; use cases only see these traits.

use serde_json::Value;
use slicer_types::{CubesError, SmokeTestError};

/// A cube as registered in a workspace.
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    pub name: String,
    /// Name of the store the cube's facts live in.
    pub datastore: String,
    /// The cube's model metadata.
    pub metadata: Value,
}

/// Query engine bound to one cube and its store.
pub trait Browser {
    /// Exercise the backend. The result value of the query is not kept.
    fn test(&self, aggregate: bool) -> Result<(), SmokeTestError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenormalizeOptions {
    pub view_name: String,
    pub schema: Option<String>,
    pub materialize: bool,
    pub replace: bool,
    pub create_index: bool,
}

pub trait Store {
    fn create_denormalized_view(
        &self,
        cube: &Cube,
        options: &DenormalizeOptions,
    ) -> Result<(), CubesError>;
}

pub trait Workspace {
    /// Cube names in model order, then definition order.
    fn list_cubes(&self) -> Vec<String>;

    fn cube(&self, name: &str) -> Result<Cube, CubesError>;

    fn browser(&self, cube: &str) -> Result<Box<dyn Browser + '_>, CubesError>;

    fn store(&self, name: &str) -> Result<Box<dyn Store + '_>, CubesError>;

    /// Workspace option by name, e.g. `denormalized_view_prefix`.
    fn option(&self, _name: &str) -> Option<String> {
        None
    }
}
