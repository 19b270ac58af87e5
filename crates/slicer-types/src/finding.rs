use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a validation finding.
///
/// `Default` means a default value was substituted for a missing one; the model
/// still works, but possibly not the way the author intended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Default,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Default => "default",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of model element a finding concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Model,
    Cube,
    Dimension,
    Level,
    Attribute,
    Hierarchy,
    Measure,
    Aggregate,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Model => "model",
            Scope::Cube => "cube",
            Scope::Dimension => "dimension",
            Scope::Level => "level",
            Scope::Attribute => "attribute",
            Scope::Hierarchy => "hierarchy",
            Scope::Measure => "measure",
            Scope::Aggregate => "aggregate",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One issue surfaced while checking a model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFinding {
    pub severity: Severity,
    pub scope: Scope,

    /// Name of the element the finding concerns, when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    /// Property of that element at fault.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,

    pub message: String,
}

impl ValidationFinding {
    pub fn new(severity: Severity, scope: Scope, message: impl Into<String>) -> Self {
        Self {
            severity,
            scope,
            object_name: None,
            property_name: None,
            message: message.into(),
        }
    }

    pub fn error(scope: Scope, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, scope, message)
    }

    pub fn warning(scope: Scope, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, scope, message)
    }

    pub fn default_used(scope: Scope, message: impl Into<String>) -> Self {
        Self::new(Severity::Default, scope, message)
    }

    pub fn object(mut self, name: Option<&str>) -> Self {
        self.object_name = name.map(str::to_string);
        self
    }

    pub fn property(mut self, name: &str) -> Self {
        self.property_name = Some(name.to_string());
        self
    }
}
