use slicer_domain::{ShownFinding, ValidationReport};

/// Written after the model is read; the trailing blank line is part of it.
pub const VALIDATING_LINE: &str = "Validating model...\n\n";

pub fn render_reading(model: &str) -> String {
    format!("Reading model {model}\n")
}

/// `<SEVERITY> in <scope>: <message>`
pub fn render_finding(finding: &ShownFinding) -> String {
    format!(
        "{} in {}: {}\n",
        finding.severity.as_str().to_uppercase(),
        finding.scope,
        finding.message
    )
}

pub fn render_validation_summary(report: &ValidationReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("Defaults used  {}\n", report.counts.default));
    out.push_str(&format!("Warning        {}\n", report.counts.warning));
    out.push_str(&format!("Errors         {}\n", report.counts.error));
    out.push_str(&format!("Summary        {}\n", report.verdict.message()));
    out
}

/// Shown findings in order, then the summary block.
pub fn render_validation_report(report: &ValidationReport) -> String {
    let mut out: String = report.shown.iter().map(render_finding).collect();
    out.push_str(&render_validation_summary(report));
    out
}
