use slicer_types::{Severity, ValidationCounts, Verdict};

/// A finding selected for display, with its scope already rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShownFinding {
    pub severity: Severity,
    pub scope: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub counts: ValidationCounts,
    pub verdict: Verdict,
    /// Displayed findings in input order.
    pub shown: Vec<ShownFinding>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.counts.error > 0
    }
}

/// Verdict decision table; first matching row wins.
pub fn compute_verdict(counts: &ValidationCounts) -> Verdict {
    if counts.error > 0 {
        Verdict::Unusable
    } else if counts.warning > 0 {
        Verdict::NotRecommended
    } else if counts.default > 0 {
        Verdict::UsableWithDefaults
    } else {
        Verdict::Usable
    }
}
