use crate::ids;
use serde::{Deserialize, Serialize};

/// Terminal state of one cube in a test run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeTestStatus {
    /// Datastore filtered out; not exercised.
    Skipped,
    /// No browser could be resolved for the cube.
    NoBrowserError,
    /// The backend has no smoke test.
    PassedNoTest,
    Passed,
    TestedError,
}

impl CubeTestStatus {
    /// Token written right after `testing <cube>: `.
    pub fn token(self) -> &'static str {
        match self {
            CubeTestStatus::Skipped => ids::TOKEN_SKIPPED,
            CubeTestStatus::NoBrowserError => ids::TOKEN_BROWSER_ERROR,
            CubeTestStatus::PassedNoTest => ids::TOKEN_PASSED_NO_TEST,
            CubeTestStatus::Passed => ids::TOKEN_PASSED,
            CubeTestStatus::TestedError => ids::TOKEN_TESTED_ERROR,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(
            self,
            CubeTestStatus::NoBrowserError | CubeTestStatus::TestedError
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeTestError {
    pub kind: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeTestOutcome {
    pub cube: String,
    pub status: CubeTestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CubeTestError>,
}

impl CubeTestOutcome {
    pub fn ok(cube: &str, status: CubeTestStatus) -> Self {
        Self {
            cube: cube.to_string(),
            status,
            error: None,
        }
    }

    pub fn failed(cube: &str, status: CubeTestStatus, kind: &str, message: String) -> Self {
        Self {
            cube: cube.to_string(),
            status,
            error: Some(CubeTestError {
                kind: kind.to_string(),
                message,
            }),
        }
    }
}

/// Folded result of a test run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSummary {
    /// Cubes actually exercised (skipped and browser failures excluded).
    pub tested: u32,
    /// Every outcome, in selection order.
    pub outcomes: Vec<CubeTestOutcome>,
}

impl TestSummary {
    pub fn errors(&self) -> impl Iterator<Item = &CubeTestOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }
}
