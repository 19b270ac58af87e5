//! Pure model validation and test bookkeeping (no IO).
//!
//! Input: a model metadata document, or per-cube outcomes produced elsewhere.
//! Output: findings, counts, verdicts and summaries.

#![forbid(unsafe_code)]

pub mod checks;
pub mod classify;
pub mod filter;
pub mod report;
pub mod summary;
pub mod workspace;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use classify::{DisplayOptions, classify, render_scope};
pub use engine::{aggregate, validate_model};
pub use filter::StoreFilter;
pub use report::{ShownFinding, ValidationReport, compute_verdict};
pub use summary::summarize;
pub use workspace::{Browser, Cube, DenormalizeOptions, Store, Workspace};
