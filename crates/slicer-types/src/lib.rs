//! Stable DTOs and IDs used across the slicer workspace.
//!
//! This crate is intentionally boring:
//! - validation findings, severities and scopes
//! - verdicts and the validation receipt
//! - per-cube test outcomes
//! - the typed error taxonomy and exit statuses

#![forbid(unsafe_code)]

pub mod error;
pub mod exit;
pub mod finding;
pub mod ids;
pub mod outcome;
pub mod receipt;
pub mod reference;

pub use error::{CubesError, SmokeTestError};
pub use exit::ExitStatus;
pub use finding::{Scope, Severity, ValidationFinding};
pub use outcome::{CubeTestError, CubeTestOutcome, CubeTestStatus, TestSummary};
pub use receipt::{SCHEMA_VALIDATION_V1, ToolMeta, ValidationCounts, ValidationReceipt, Verdict};
pub use reference::is_url;
