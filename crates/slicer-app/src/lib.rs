//! Use case orchestration for slicer.
//!
//! This crate coordinates the domain, metadata, workspace and render layers.
//! The CLI crate depends on this; it only parses arguments and exits.

#![forbid(unsafe_code)]

mod capabilities;
mod commands;
mod convert;
mod denormalize;
mod server;
mod test_run;
mod validate;

pub use capabilities::{Capabilities, DdlGenerator, DdlOptions, ModelEditor, ServerLauncher};
pub use commands::{CommandRequest, CommandTable, Handler, dispatch, handler};
pub use convert::{ConvertInput, ModelFormat, run_convert};
pub use denormalize::{DenormalizeInput, run_denormalize, run_denormalize_command};
pub use server::{DdlInput, EditInput, ServeInput, run_ddl, run_edit, run_serve};
pub use test_run::{TestInput, run_test, run_test_command};
pub use validate::{
    ValidateInput, ValidateOutput, run_validate, serialize_receipt, validation_exit_status,
    write_receipt,
};
