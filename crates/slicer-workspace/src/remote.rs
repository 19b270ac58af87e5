//! Stores without local data: a remote slicer server, and any store type
//! that has no denormalization support here.

use slicer_domain::{Browser, Cube, DenormalizeOptions, Store};
use slicer_types::{CubesError, SmokeTestError};

/// Browser over a remote slicer server. It has no smoke test.
pub(crate) struct SlicerBrowser {
    pub url: String,
}

impl Browser for SlicerBrowser {
    fn test(&self, _aggregate: bool) -> Result<(), SmokeTestError> {
        tracing::debug!(url = %self.url, "remote slicer store has no smoke test");
        Err(SmokeTestError::NotImplemented)
    }
}

pub(crate) struct UnsupportedStore {
    pub name: String,
    pub kind: String,
}

impl Store for UnsupportedStore {
    fn create_denormalized_view(
        &self,
        _cube: &Cube,
        _options: &DenormalizeOptions,
    ) -> Result<(), CubesError> {
        Err(CubesError::NotSupported(format!(
            "store '{}' of type '{}' does not support denormalized views",
            self.name, self.kind
        )))
    }
}
