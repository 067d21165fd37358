//! # Check Subcommand
//!
//! Completes a case document against the declared enumerations and prints
//! the total mapping as JSON.
//!
//! ```bash
//! enumatch --enums enums.yaml check cases.json
//! enumatch --enums enums.yaml check cases.yaml --enum Color --strict
//! ```
//!
//! Exit codes: `0` when the cases are exhaustive, `2` when a well-formed
//! case mapping leaves members uncovered (or has unknown keys under
//! `--strict`), `1` for any other failure, malformed case documents included.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Map, Value};

use enumatch_core::{MatchError, MatchOptions, Strictness};

use crate::config::{load_cases, load_enums, Loaded};

/// Exit code for a well-formed case mapping that fails exhaustiveness.
pub const EXIT_MATCH_FAILED: u8 = 2;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Case document (JSON or YAML) keyed by `Enum.member` and `...`.
    pub cases: PathBuf,

    /// Match against this enumeration instead of inferring it from the
    /// first key.
    #[arg(long = "enum", value_name = "NAME")]
    pub enumeration: Option<String>,

    /// Reject keys that are not members of the enumeration.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, enums: &Path) -> Result<u8> {
    let loaded = load_enums(enums)?;
    let cases = load_cases(&args.cases)?;

    match check(&loaded, &cases, args) {
        Ok(total) => {
            println!("{}", serde_json::to_string_pretty(&total)?);
            Ok(0)
        }
        Err(MatchError::ValueConstraint(e)) => {
            eprintln!("{}: {e}", args.cases.display());
            Ok(EXIT_MATCH_FAILED)
        }
        Err(MatchError::Registry(e)) => Err(e.into()),
        Err(e) => {
            Err(e).with_context(|| format!("invalid case document: {}", args.cases.display()))
        }
    }
}

fn check(
    loaded: &Loaded,
    cases: &Value,
    args: &CheckArgs,
) -> Result<Map<String, Value>, MatchError> {
    let options = if args.strict {
        MatchOptions {
            strictness: Strictness::Strict,
        }
    } else {
        loaded.options
    };

    match &args.enumeration {
        Some(name) => loaded.registry.match_value_as(name, cases, &options),
        None => loaded.registry.match_value_with(cases, &options),
    }
}
