//! archgate CLI: architecture conformance checks over type metadata.
//!
//! Loads a catalog snapshot and a rule file, evaluates the rules, and maps
//! the outcome to an exit code: 0 all rules passed, 1 a rule failed,
//! 2 usage or data error. See `archgate --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter: Box<dyn archgate_output::OutputFormatter> = if cli.json {
        Box::new(archgate_output::json::JsonFormatter)
    } else {
        Box::new(archgate_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Init => commands::init::run(cli.verbose),
        Commands::Check {
            catalog,
            rules,
            strict,
        } => commands::check::run(&*formatter, cli.verbose, catalog, rules, strict),
        Commands::Types { namespace, catalog } => {
            commands::types::run(&*formatter, catalog, namespace)
        }
        Commands::Deps { type_name, catalog } => {
            commands::deps::run(&*formatter, catalog, type_name)
        }
        Commands::Cycles { catalog } => commands::cycles::run(&*formatter, catalog),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins when set; otherwise `--verbose` turns on debug output
/// for the archgate crates.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "archgate_core=debug,archgate_enforce=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
