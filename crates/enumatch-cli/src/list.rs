//! # List Subcommand
//!
//! Prints every declared enumeration with its members in declaration order.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use enumatch_core::Registry;

use crate::config::load_enums;

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print qualified member keys (`Enum.member`) instead of bare names.
    #[arg(long)]
    pub qualified: bool,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, enums: &Path) -> Result<u8> {
    let loaded = load_enums(enums)?;
    for line in render(&loaded.registry, args.qualified) {
        println!("{line}");
    }
    Ok(0)
}

fn render(registry: &Registry, qualified: bool) -> Vec<String> {
    registry
        .enumerations()
        .map(|decl| {
            let members = if qualified {
                decl.qualified_members().collect::<Vec<_>>()
            } else {
                decl.members.clone()
            };
            format!("{}: {}", decl.name, members.join(", "))
        })
        .collect()
}
