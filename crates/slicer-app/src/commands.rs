//! Command registry and dispatch.
//!
//! The table is built once from the resolved capabilities and never changes
//! afterwards. `dispatch` turns a handler result into an exit code; it is the
//! only place where errors become process statuses.

use crate::capabilities::Capabilities;
use crate::convert::{ConvertInput, run_convert};
use crate::denormalize::{DenormalizeInput, run_denormalize_command};
use crate::server::{DdlInput, EditInput, ServeInput, run_ddl, run_edit, run_serve};
use crate::test_run::{TestInput, run_test_command};
use crate::validate::{ValidateInput, run_validate, validation_exit_status};
use slicer_types::{CubesError, ExitStatus, ids};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::debug;

/// A parsed command line.
#[derive(Clone, Debug)]
pub enum CommandRequest {
    ModelValidate(ValidateInput),
    ModelConvert(ConvertInput),
    ModelEdit(EditInput),
    Serve(ServeInput),
    Test(TestInput),
    Denormalize(DenormalizeInput),
    Ddl(DdlInput),
}

impl CommandRequest {
    pub fn name(&self) -> &'static str {
        match self {
            CommandRequest::ModelValidate(_) => ids::CMD_MODEL_VALIDATE,
            CommandRequest::ModelConvert(_) => ids::CMD_MODEL_CONVERT,
            CommandRequest::ModelEdit(_) => ids::CMD_MODEL_EDIT,
            CommandRequest::Serve(_) => ids::CMD_SERVE,
            CommandRequest::Test(_) => ids::CMD_TEST,
            CommandRequest::Denormalize(_) => ids::CMD_DENORMALIZE,
            CommandRequest::Ddl(_) => ids::CMD_DDL,
        }
    }
}

pub type Handler = Box<dyn Fn(CommandRequest, &mut dyn Write) -> anyhow::Result<ExitStatus>>;

/// Box a closure as a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(CommandRequest, &mut dyn Write) -> anyhow::Result<ExitStatus> + 'static,
{
    Box::new(f)
}

pub struct CommandTable {
    handlers: BTreeMap<&'static str, Handler>,
}

impl CommandTable {
    pub fn new(caps: &Capabilities) -> Self {
        let mut table = CommandTable {
            handlers: BTreeMap::new(),
        };

        table.register(
            ids::CMD_MODEL_VALIDATE,
            handler(|req, out| match req {
                CommandRequest::ModelValidate(input) => {
                    let output = run_validate(&input, out)?;
                    Ok(validation_exit_status(&output.report))
                }
                other => mismatched(ids::CMD_MODEL_VALIDATE, &other),
            }),
        );
        table.register(
            ids::CMD_MODEL_CONVERT,
            handler(|req, out| match req {
                CommandRequest::ModelConvert(input) => {
                    run_convert(&input, out)?;
                    Ok(ExitStatus::Success)
                }
                other => mismatched(ids::CMD_MODEL_CONVERT, &other),
            }),
        );
        // Failed cubes are reported but do not change the exit status.
        table.register(
            ids::CMD_TEST,
            handler(|req, out| match req {
                CommandRequest::Test(input) => {
                    run_test_command(&input, out)?;
                    Ok(ExitStatus::Success)
                }
                other => mismatched(ids::CMD_TEST, &other),
            }),
        );
        table.register(
            ids::CMD_DENORMALIZE,
            handler(|req, out| match req {
                CommandRequest::Denormalize(input) => {
                    run_denormalize_command(&input, out)?;
                    Ok(ExitStatus::Success)
                }
                other => mismatched(ids::CMD_DENORMALIZE, &other),
            }),
        );

        let c = caps.clone();
        table.register(
            ids::CMD_DDL,
            handler(move |req, out| match req {
                CommandRequest::Ddl(input) => {
                    run_ddl(&c, &input, out)?;
                    Ok(ExitStatus::Success)
                }
                other => mismatched(ids::CMD_DDL, &other),
            }),
        );
        let c = caps.clone();
        table.register(
            ids::CMD_SERVE,
            handler(move |req, _out| match req {
                CommandRequest::Serve(input) => {
                    run_serve(&c, &input)?;
                    Ok(ExitStatus::Success)
                }
                other => mismatched(ids::CMD_SERVE, &other),
            }),
        );
        let c = caps.clone();
        table.register(
            ids::CMD_MODEL_EDIT,
            handler(move |req, _out| match req {
                CommandRequest::ModelEdit(input) => {
                    run_edit(&c, &input)?;
                    Ok(ExitStatus::Success)
                }
                other => mismatched(ids::CMD_MODEL_EDIT, &other),
            }),
        );

        table
    }

    /// Registering a name again replaces the earlier handler.
    fn register(&mut self, name: &'static str, handler: Handler) {
        if self.handlers.insert(name, handler).is_some() {
            debug!(command = name, "command handler replaced");
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }
}

fn mismatched(name: &str, req: &CommandRequest) -> anyhow::Result<ExitStatus> {
    anyhow::bail!(
        "command '{name}' was given arguments for '{}'",
        req.name()
    )
}

/// Run a command and map its result to an exit code.
///
/// `debug` prints the full error chain instead of the one-line message.
pub fn dispatch(
    table: &CommandTable,
    request: CommandRequest,
    out: &mut dyn Write,
    err: &mut dyn Write,
    debug: bool,
) -> i32 {
    let name = request.name();
    let Some(handler) = table.get(name) else {
        let _ = writeln!(err, "slicer error: unknown command '{name}'");
        return ExitStatus::Failure.code();
    };

    let result = handler(request, &mut *out);
    let _ = out.flush();
    match result {
        Ok(status) => status.code(),
        Err(e) => report_error(&e, err, debug).code(),
    }
}

fn report_error(e: &anyhow::Error, err: &mut dyn Write, debug: bool) -> ExitStatus {
    let domain = e.downcast_ref::<CubesError>();
    let status = match domain {
        Some(CubesError::MissingPackage { .. }) => ExitStatus::MissingPackage,
        _ => ExitStatus::Failure,
    };

    let _ = if debug {
        writeln!(err, "{e:?}")
    } else {
        match domain {
            Some(d @ CubesError::MissingPackage { .. }) => {
                writeln!(err, "MISSING PACKAGE ERROR: {d}")
            }
            Some(d) => writeln!(err, "ERROR: {d}"),
            None => writeln!(err, "slicer error: {e:#}"),
        }
    };
    status
}
