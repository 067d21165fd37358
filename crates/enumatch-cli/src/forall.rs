//! # Forall Subcommand
//!
//! Prints a mapping from every member of one enumeration to a single value,
//! handy as the default branch of a nested case document.
//!
//! ```bash
//! enumatch --enums enums.yaml forall Color '"n/a"'
//! enumatch --enums enums.yaml forall Color n/a      # plain strings need no quotes
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use crate::config::load_enums;

/// Arguments for the forall subcommand.
#[derive(Args, Debug)]
pub struct ForallArgs {
    /// Enumeration to cover.
    #[arg(value_name = "ENUM")]
    pub enumeration: String,

    /// Value for every member: JSON, or a plain string if it does not parse.
    pub value: String,
}

/// Execute the forall subcommand.
pub fn run_forall(args: &ForallArgs, enums: &Path) -> Result<u8> {
    let loaded = load_enums(enums)?;
    let map = loaded
        .registry
        .forall_enum(&args.enumeration, parse_value(&args.value))?;
    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(0)
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
