//! The `test` use case: exercise each selected cube against its store.

use anyhow::Context;
use camino::Utf8PathBuf;
use slicer_domain::{StoreFilter, Workspace, summarize};
use slicer_types::{CubeTestOutcome, CubeTestStatus, SmokeTestError, TestSummary};
use std::io::Write;
use tracing::{debug, info};

#[derive(Clone, Debug, Default)]
pub struct TestInput {
    pub config: Utf8PathBuf,
    /// Cubes to test, in order. Empty means every cube in the workspace.
    pub cubes: Vec<String>,
    pub aggregate: bool,
    pub exclude_stores: Vec<String>,
    pub include_stores: Vec<String>,
}

/// Open the configured workspace and run the test loop.
pub fn run_test_command(input: &TestInput, out: &mut dyn Write) -> anyhow::Result<TestSummary> {
    let workspace = slicer_workspace::FsWorkspace::open(&input.config)?;
    let filter = StoreFilter::new(&input.exclude_stores, &input.include_stores);
    run_test(&workspace, &input.cubes, &filter, input.aggregate, out)
}

/// Test cubes one at a time, in order.
///
/// Browser resolution failures and domain test failures are recorded per cube.
/// A missing cube or an unexpected test failure aborts the run.
pub fn run_test(
    workspace: &dyn Workspace,
    cubes: &[String],
    filter: &StoreFilter,
    aggregate: bool,
    out: &mut dyn Write,
) -> anyhow::Result<TestSummary> {
    let names = if cubes.is_empty() {
        workspace.list_cubes()
    } else {
        cubes.to_vec()
    };
    info!(cubes = names.len(), aggregate, "testing cubes");

    let mut outcomes = Vec::with_capacity(names.len());
    for name in &names {
        let cube = workspace.cube(name)?;

        out.write_all(slicer_render::render_test_prefix(name).as_bytes())?;
        out.flush()?;

        let outcome = if !filter.is_eligible(&cube.datastore) {
            debug!(cube = %name, store = %cube.datastore, "store filtered out");
            CubeTestOutcome::ok(name, CubeTestStatus::Skipped)
        } else {
            match workspace.browser(name) {
                Err(e) => CubeTestOutcome::failed(
                    name,
                    CubeTestStatus::NoBrowserError,
                    e.kind(),
                    e.to_string(),
                ),
                Ok(browser) => match browser.test(aggregate) {
                    Ok(()) => CubeTestOutcome::ok(name, CubeTestStatus::Passed),
                    Err(SmokeTestError::NotImplemented) => {
                        CubeTestOutcome::ok(name, CubeTestStatus::PassedNoTest)
                    }
                    Err(SmokeTestError::Domain(e)) => CubeTestOutcome::failed(
                        name,
                        CubeTestStatus::TestedError,
                        e.kind(),
                        e.to_string(),
                    ),
                    Err(SmokeTestError::Unexpected(e)) => {
                        out.write_all(b"\n")?;
                        return Err(anyhow::anyhow!(e))
                            .with_context(|| format!("testing cube '{name}'"));
                    }
                },
            }
        };

        out.write_all(slicer_render::render_test_status(outcome.status).as_bytes())?;
        outcomes.push(outcome);
    }

    let summary = summarize(outcomes);
    out.write_all(slicer_render::render_test_summary(&summary).as_bytes())?;
    info!(tested = summary.tested, errors = summary.error_count(), "test run finished");
    Ok(summary)
}
