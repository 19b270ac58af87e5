use crate::checks;
use crate::classify::{DisplayOptions, classify};
use crate::report::{ShownFinding, ValidationReport, compute_verdict};
use serde_json::Value;
use slicer_types::{Severity, ValidationCounts, ValidationFinding};

/// Check a model metadata document. Findings are returned in document order.
pub fn validate_model(model: &Value) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();
    checks::run_all(model, &mut findings);
    findings
}

/// Fold findings into counts, a verdict and the displayed lines.
///
/// Input order is kept: findings may refer to each other contextually.
pub fn aggregate(findings: &[ValidationFinding], opts: DisplayOptions) -> ValidationReport {
    let mut counts = ValidationCounts::default();
    let mut shown = Vec::new();

    for finding in findings {
        let classified = classify(finding, opts);
        match classified.severity {
            Severity::Error => counts.error += 1,
            Severity::Warning => counts.warning += 1,
            Severity::Default => counts.default += 1,
        }
        if classified.shown {
            shown.push(ShownFinding {
                severity: classified.severity,
                scope: classified.scope,
                message: finding.message.clone(),
            });
        }
    }

    ValidationReport {
        verdict: compute_verdict(&counts),
        counts,
        shown,
    }
}
