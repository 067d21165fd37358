//! # enumatch-cli — Exhaustiveness Checks From the Command Line
//!
//! Provides the `enumatch` binary: declared enumerations come from a
//! JSON/YAML file, case documents from JSON/YAML files, and results are
//! printed as JSON.
//!
//! ## Subcommands
//!
//! - `enumatch check` — complete a case document or report what is missing.
//! - `enumatch forall` — broadcast one value over an enumeration.
//! - `enumatch list` — show declared enumerations.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers delegate to
//!   `enumatch-core` and contain no matching logic.

pub mod check;
pub mod config;
pub mod forall;
pub mod list;
