//! Text renderers for validation and test reports.
//!
//! Every function returns a `String` ending in a newline (or the partial
//! `testing <cube>: ` prefix); callers decide where it goes.

#![forbid(unsafe_code)]

mod test_run;
mod validation;

pub use test_run::{render_test_error, render_test_prefix, render_test_status, render_test_summary};
pub use validation::{
    VALIDATING_LINE, render_finding, render_reading, render_validation_report,
    render_validation_summary,
};
