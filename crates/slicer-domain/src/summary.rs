use slicer_types::{CubeTestOutcome, CubeTestStatus, TestSummary};

/// Fold per-cube outcomes into a summary. Skipped cubes and cubes without a
/// browser were never exercised and do not count as tested.
pub fn summarize(outcomes: Vec<CubeTestOutcome>) -> TestSummary {
    let tested = outcomes
        .iter()
        .filter(|o| {
            matches!(
                o.status,
                CubeTestStatus::Passed | CubeTestStatus::PassedNoTest | CubeTestStatus::TestedError
            )
        })
        .count() as u32;

    TestSummary { tested, outcomes }
}
