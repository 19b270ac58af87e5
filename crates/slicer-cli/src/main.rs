//! CLI entry point for slicer.
//!
//! This module is intentionally thin: it parses arguments, sets up logging and
//! exits. All command logic lives in the `slicer-app` crate.

use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser, Subcommand};
use slicer_app::{
    Capabilities, CommandRequest, CommandTable, ConvertInput, DdlInput, DdlOptions,
    DenormalizeInput, EditInput, ModelFormat, ServeInput, TestInput, ValidateInput, dispatch,
};
use slicer_domain::DisplayOptions;

#[derive(Parser, Debug)]
#[command(
    name = "slicer",
    version,
    about = "Validate, convert and test OLAP models and workspaces"
)]
struct Cli {
    /// Print the full error chain instead of a one-line message.
    #[arg(long, global = true)]
    cubes_debug: bool,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Logical model validation and conversion.
    Model {
        #[command(subcommand)]
        cmd: ModelCommands,
    },

    /// Run the slicer HTTP server.
    Serve {
        /// Workspace configuration file.
        config: Utf8PathBuf,

        /// Run the server in debug mode.
        #[arg(long)]
        debug: bool,

        /// Visualizer URL, or 'default' for the built-in one.
        #[arg(long)]
        visualizer: Option<String>,
    },

    /// Test the workspace cubes against their stores.
    Test {
        /// Workspace configuration file.
        config: Utf8PathBuf,

        /// Cubes to test; all cubes when omitted.
        cubes: Vec<String>,

        /// Also aggregate the whole cube.
        #[arg(long)]
        aggregate: bool,

        /// Skip cubes in this store. Repeatable.
        #[arg(short = 'E', long = "exclude-store")]
        exclude_stores: Vec<String>,

        /// Only test cubes in this store. Repeatable.
        #[arg(long = "store")]
        include_stores: Vec<String>,
    },

    /// Create denormalized views of cubes in their stores.
    Denormalize {
        /// Workspace configuration file.
        config: Utf8PathBuf,

        /// View name prefix (overrides the workspace option).
        #[arg(short, long)]
        prefix: Option<String>,

        /// Target view schema (overrides the workspace option).
        #[arg(short, long)]
        schema: Option<String>,

        /// Replace existing views.
        #[arg(short = 'f', long = "force")]
        replace: bool,

        /// Create a materialized view (table).
        #[arg(short, long)]
        materialize: bool,

        /// Create indexes for key attributes.
        #[arg(short, long)]
        index: bool,

        /// Cube to denormalize. Repeatable; all cubes when omitted.
        #[arg(short = 'c', long = "cube")]
        cubes: Vec<String>,
    },

    /// Generate star schema DDL for a model.
    Ddl {
        /// Database connection URL.
        url: String,

        /// Model reference: file, bundle directory or URL.
        model: String,

        #[arg(long)]
        dimension_prefix: Option<String>,

        #[arg(long)]
        dimension_suffix: Option<String>,

        #[arg(long)]
        fact_prefix: Option<String>,

        #[arg(long)]
        fact_suffix: Option<String>,

        /// DDL backend name (default: sql).
        #[arg(long)]
        backend: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ModelCommands {
    /// Validate a model and print the validation report.
    Validate {
        /// Model reference: file, bundle directory or URL.
        model: String,

        /// Show findings where defaults were used.
        #[arg(short = 'd', long = "defaults")]
        show_defaults: bool,

        /// Hide warnings.
        #[arg(long)]
        no_warnings: bool,

        /// Also write a JSON receipt of the validation.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Convert a model to JSON or to a bundle directory.
    Convert {
        /// Model reference: file, bundle directory or URL.
        model: String,

        /// Output path; JSON goes to stdout when omitted.
        target: Option<Utf8PathBuf>,

        /// Output format (json|bundle).
        #[arg(long, default_value = "json", value_parser = parse_model_format)]
        format: ModelFormat,

        /// Replace an existing bundle.
        #[arg(long)]
        force: bool,
    },

    /// Edit a model interactively.
    Edit {
        /// Model reference.
        model: String,

        /// Where to save the edited model.
        target: Option<Utf8PathBuf>,

        /// Editor port (default 5000).
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() {
    let cli = Cli::parse();
    let code = run(cli);
    std::process::exit(code);
}

fn run(cli: Cli) -> i32 {
    if let Err(err) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("slicer error: {err:#}");
        return 1;
    }

    let Some(cmd) = cli.cmd else {
        let _ = Cli::command().print_help();
        println!();
        return 0;
    };

    let caps = Capabilities::detect();
    tracing::debug!(?caps, "capabilities");
    let table = CommandTable::new(&caps);

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr();
    dispatch(&table, into_request(cmd), &mut out, &mut err, cli.cubes_debug)
}

fn into_request(cmd: Commands) -> CommandRequest {
    match cmd {
        Commands::Model { cmd } => match cmd {
            ModelCommands::Validate {
                model,
                show_defaults,
                no_warnings,
                report_out,
            } => CommandRequest::ModelValidate(ValidateInput {
                model,
                display: DisplayOptions {
                    show_warnings: !no_warnings,
                    show_defaults,
                },
                report_out,
            }),
            ModelCommands::Convert {
                model,
                target,
                format,
                force,
            } => CommandRequest::ModelConvert(ConvertInput {
                model,
                format,
                target,
                force,
            }),
            ModelCommands::Edit {
                model,
                target,
                port,
            } => CommandRequest::ModelEdit(EditInput {
                model,
                target,
                port,
            }),
        },
        Commands::Serve {
            config,
            debug,
            visualizer,
        } => CommandRequest::Serve(ServeInput {
            config,
            debug,
            visualizer,
        }),
        Commands::Test {
            config,
            cubes,
            aggregate,
            exclude_stores,
            include_stores,
        } => CommandRequest::Test(TestInput {
            config,
            cubes,
            aggregate,
            exclude_stores,
            include_stores,
        }),
        Commands::Denormalize {
            config,
            prefix,
            schema,
            replace,
            materialize,
            index,
            cubes,
        } => CommandRequest::Denormalize(DenormalizeInput {
            config,
            cubes,
            prefix,
            schema,
            replace,
            materialize,
            index,
        }),
        Commands::Ddl {
            url,
            model,
            dimension_prefix,
            dimension_suffix,
            fact_prefix,
            fact_suffix,
            backend,
        } => CommandRequest::Ddl(DdlInput {
            url,
            model,
            backend,
            options: DdlOptions {
                dimension_prefix,
                dimension_suffix,
                fact_prefix,
                fact_suffix,
            },
        }),
    }
}

fn parse_model_format(v: &str) -> Result<ModelFormat, String> {
    ModelFormat::parse(v).ok_or_else(|| format!("unknown model format '{v}' (expected json|bundle)"))
}

/// `SLICER_LOG` wins over `-q`/`-v`. Logs go to stderr; stdout carries reports.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SLICER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
