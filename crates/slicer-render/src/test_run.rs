use slicer_types::{CubeTestOutcome, CubeTestStatus, TestSummary};
use slicer_types::ids::TEST_PASSED_LINE;

/// Written before the cube is exercised, so a crash shows which cube it was.
pub fn render_test_prefix(cube: &str) -> String {
    format!("testing {cube}: ")
}

pub fn render_test_status(status: CubeTestStatus) -> String {
    format!("{}\n", status.token())
}

/// `<cube>: <kind> - <message>`
pub fn render_test_error(outcome: &CubeTestOutcome) -> String {
    match &outcome.error {
        Some(e) => format!("{}: {} - {}\n", outcome.cube, e.kind, e.message),
        None => format!("{}: {}\n", outcome.cube, outcome.status.token()),
    }
}

pub fn render_test_summary(summary: &TestSummary) -> String {
    let mut out = format!("\ntested {} cubes\n", summary.tested);
    let errors: Vec<&CubeTestOutcome> = summary.errors().collect();
    if errors.is_empty() {
        out.push_str(TEST_PASSED_LINE);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("{} ERRORS:\n", errors.len()));
    for outcome in errors {
        out.push_str(&render_test_error(outcome));
    }
    out
}
