//! # enumatch CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use enumatch_cli::check::{run_check, CheckArgs};
use enumatch_cli::forall::{run_forall, ForallArgs};
use enumatch_cli::list::{run_list, ListArgs};

/// enumatch — exhaustive case mappings over declared enumerations.
///
/// Completes partial mappings from enumeration members to values, filling
/// gaps from the `...` default, and reports every member left uncovered.
#[derive(Parser, Debug)]
#[command(name = "enumatch", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Enumeration file (JSON or YAML).
    #[arg(long, global = true, default_value = "enums.yaml")]
    enums: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Complete a case document, or report the members it misses.
    Check(CheckArgs),

    /// Map every member of an enumeration to one value.
    Forall(ForallArgs),

    /// List declared enumerations.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(enums = %cli.enums.display(), "enumatch starting");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, &cli.enums),
        Commands::Forall(args) => run_forall(&args, &cli.enums),
        Commands::List(args) => run_list(&args, &cli.enums),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
