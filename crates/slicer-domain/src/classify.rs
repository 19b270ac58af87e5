//! Severity classification and scope rendering for validation findings.

use slicer_types::{Scope, Severity, ValidationFinding};

/// Which non-error findings are printed. Errors are always printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_warnings: bool,
    pub show_defaults: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_warnings: true,
            show_defaults: false,
        }
    }
}

/// A finding as seen by the aggregator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    pub severity: Severity,
    pub shown: bool,
    pub scope: String,
}

pub fn classify(finding: &ValidationFinding, opts: DisplayOptions) -> Classified {
    let shown = match finding.severity {
        Severity::Error => true,
        Severity::Warning => opts.show_warnings,
        Severity::Default => opts.show_defaults,
    };

    Classified {
        severity: finding.severity,
        shown,
        scope: render_scope(finding),
    }
}

/// Human readable location of a finding, e.g. `cube 'sales' property 'fact'`.
pub fn render_scope(finding: &ValidationFinding) -> String {
    let mut out = if finding.scope == Scope::Model {
        "model".to_string()
    } else {
        match &finding.object_name {
            Some(name) => format!("{} '{}'", finding.scope, name),
            None => format!("unknown {}", finding.scope),
        }
    };

    if let Some(property) = &finding.property_name {
        out.push_str(&format!(" property '{property}'"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_scope_ignores_object_name() {
        let f = ValidationFinding::error(Scope::Model, "dup").object(Some("sales"));
        assert_eq!(render_scope(&f), "model");
    }

    #[test]
    fn named_and_unknown_objects() {
        let named = ValidationFinding::error(Scope::Cube, "x").object(Some("sales"));
        assert_eq!(render_scope(&named), "cube 'sales'");

        let unnamed = ValidationFinding::error(Scope::Dimension, "x");
        assert_eq!(render_scope(&unnamed), "unknown dimension");
    }

    #[test]
    fn property_is_appended_to_every_scope() {
        let f = ValidationFinding::default_used(Scope::Cube, "x")
            .object(Some("sales"))
            .property("fact");
        assert_eq!(render_scope(&f), "cube 'sales' property 'fact'");

        let m = ValidationFinding::error(Scope::Model, "x").property("cubes");
        assert_eq!(render_scope(&m), "model property 'cubes'");

        let u = ValidationFinding::error(Scope::Level, "x").property("key");
        assert_eq!(render_scope(&u), "unknown level property 'key'");
    }

    #[test]
    fn display_flags_gate_non_errors_only() {
        let hide_all = DisplayOptions {
            show_warnings: false,
            show_defaults: false,
        };
        let error = ValidationFinding::error(Scope::Model, "e");
        let warning = ValidationFinding::warning(Scope::Model, "w");
        let default = ValidationFinding::default_used(Scope::Model, "d");

        assert!(classify(&error, hide_all).shown);
        assert!(!classify(&warning, hide_all).shown);
        assert!(!classify(&default, hide_all).shown);

        let show_all = DisplayOptions {
            show_warnings: true,
            show_defaults: true,
        };
        assert!(classify(&warning, show_all).shown);
        assert!(classify(&default, show_all).shown);
    }

    #[test]
    fn default_options_show_warnings_but_not_defaults() {
        let opts = DisplayOptions::default();
        assert!(opts.show_warnings);
        assert!(!opts.show_defaults);
    }
}
