//! Domain error taxonomy.
//!
//! Every domain error exposes a stable `kind()` used in reports; callers never
//! need to inspect the concrete type to display it.

use crate::ids;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CubesError {
    #[error("unable to load model '{reference}': {reason}")]
    ModelLoad { reference: String, reason: String },

    #[error("{0}")]
    Model(String),

    #[error("unknown cube '{0}'")]
    NoSuchCube(String),

    #[error("unknown store '{0}'")]
    NoSuchStore(String),

    #[error("{0}")]
    Backend(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Argument(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("{package} is required {purpose}")]
    MissingPackage { package: String, purpose: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CubesError {
    pub fn kind(&self) -> &'static str {
        match self {
            CubesError::ModelLoad { .. } => ids::KIND_MODEL_LOAD,
            CubesError::Model(_) => ids::KIND_MODEL,
            CubesError::NoSuchCube(_) => ids::KIND_NO_SUCH_CUBE,
            CubesError::NoSuchStore(_) => ids::KIND_NO_SUCH_STORE,
            CubesError::Backend(_) => ids::KIND_BACKEND,
            CubesError::Configuration(_) => ids::KIND_CONFIGURATION,
            CubesError::Argument(_) => ids::KIND_ARGUMENT,
            CubesError::NotSupported(_) => ids::KIND_NOT_SUPPORTED,
            CubesError::MissingPackage { .. } => ids::KIND_MISSING_PACKAGE,
            CubesError::Io { .. } => ids::KIND_IO,
        }
    }

    pub fn model_load(reference: &str, reason: impl ToString) -> Self {
        CubesError::ModelLoad {
            reference: reference.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl ToString, source: std::io::Error) -> Self {
        CubesError::Io {
            path: path.to_string(),
            source,
        }
    }

    pub fn missing_package(package: &str, purpose: &str) -> Self {
        CubesError::MissingPackage {
            package: package.to_string(),
            purpose: purpose.to_string(),
        }
    }
}

/// Result of a browser smoke test that did not complete.
#[derive(Debug, Error)]
pub enum SmokeTestError {
    /// The backend has no smoke test. Not a failure.
    #[error("smoke test is not implemented for this backend")]
    NotImplemented,

    /// Expected, per-cube failure.
    #[error(transparent)]
    Domain(#[from] CubesError),

    /// Anything else; aborts the whole run.
    #[error(transparent)]
    Unexpected(Box<dyn std::error::Error + Send + Sync>),
}
