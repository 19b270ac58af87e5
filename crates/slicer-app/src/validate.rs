//! The `model validate` use case: read a model, validate it and report.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use slicer_domain::{DisplayOptions, ValidationReport};
use slicer_types::{
    ExitStatus, SCHEMA_VALIDATION_V1, ToolMeta, ValidationReceipt,
};
use std::io::Write;
use time::OffsetDateTime;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct ValidateInput {
    /// Model reference: file, bundle directory or URL.
    pub model: String,
    pub display: DisplayOptions,
    /// Where to write the JSON receipt, if anywhere.
    pub report_out: Option<Utf8PathBuf>,
}

#[derive(Clone, Debug)]
pub struct ValidateOutput {
    pub report: ValidationReport,
    pub receipt: ValidationReceipt,
}

/// Validate a model, writing the text report to `out` as it goes.
pub fn run_validate(input: &ValidateInput, out: &mut dyn Write) -> anyhow::Result<ValidateOutput> {
    let started_at = OffsetDateTime::now_utc();

    out.write_all(slicer_render::render_reading(&input.model).as_bytes())?;
    let model = slicer_metadata::read_model_metadata(&input.model)?;

    out.write_all(slicer_render::VALIDATING_LINE.as_bytes())?;
    let findings = slicer_domain::validate_model(&model);
    debug!(findings = findings.len(), "model validated");

    let report = slicer_domain::aggregate(&findings, input.display);
    out.write_all(slicer_render::render_validation_report(&report).as_bytes())?;

    let receipt = ValidationReceipt {
        schema: SCHEMA_VALIDATION_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        model: input.model.clone(),
        verdict: report.verdict,
        counts: report.counts,
        findings,
    };

    if let Some(path) = &input.report_out {
        write_receipt(path, &receipt)?;
        info!(%path, "validation receipt written");
    }

    Ok(ValidateOutput { report, receipt })
}

/// Any error finding fails the command.
pub fn validation_exit_status(report: &ValidationReport) -> ExitStatus {
    if report.has_errors() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}

pub fn serialize_receipt(receipt: &ValidationReceipt) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(receipt).context("serialize validation receipt")?;
    data.push(b'\n');
    Ok(data)
}

pub fn write_receipt(path: &Utf8Path, receipt: &ValidationReceipt) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_receipt(receipt)?;
    std::fs::write(path, data).with_context(|| format!("write receipt: {path}"))?;
    Ok(())
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "slicer".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
