use crate::ValidationFinding;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the validation receipt.
pub const SCHEMA_VALIDATION_V1: &str = "slicer.validation.v1";

/// Summary judgment of a validated model. A pure function of the counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Unusable,
    NotRecommended,
    UsableWithDefaults,
    Usable,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Unusable => "model can not be used",
            Verdict::NotRecommended => "not recommended to use the model, some issues might emerge",
            Verdict::UsableWithDefaults => {
                "model can be used, make sure that the defaults reflect reality"
            }
            Verdict::Usable => "model can be used",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCounts {
    pub error: u32,
    pub warning: u32,
    pub default: u32,
}

impl ValidationCounts {
    pub fn total(&self) -> u32 {
        self.error + self.warning + self.default
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Machine-readable record of one validation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReceipt {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Model reference as given on the command line.
    pub model: String,
    pub verdict: Verdict,
    pub counts: ValidationCounts,
    /// All findings, independent of display flags.
    pub findings: Vec<ValidationFinding>,
}
