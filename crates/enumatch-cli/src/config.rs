//! # Enumeration Files and Case Documents
//!
//! Loads the enumeration file named by `--enums` and the case documents
//! handed to `check`. Both may be JSON or YAML; the format is picked from
//! the file extension (`.json` is JSON, anything else is YAML, which also
//! accepts JSON).
//!
//! ```yaml
//! enums:
//!   - name: Color
//!     members: [red, green, blue]
//! options:
//!   strictness: strict
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use enumatch_core::{EnumDecl, MatchOptions, Registry};

/// Contents of an enumeration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumFile {
    #[serde(default)]
    pub enums: Vec<EnumDecl>,
    #[serde(default)]
    pub options: MatchOptions,
}

/// A validated enumeration file, ready for matching.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub registry: Registry,
    pub options: MatchOptions,
}

impl EnumFile {
    /// Validate declarations into a registry.
    pub fn into_loaded(self) -> Result<Loaded> {
        let registry = Registry::from_decls(self.enums)?;
        Ok(Loaded {
            registry,
            options: self.options,
        })
    }
}

/// Read and validate an enumeration file.
pub fn load_enums(path: &Path) -> Result<Loaded> {
    let file: EnumFile = read_structured(path)?;
    let loaded = file
        .into_loaded()
        .with_context(|| format!("invalid enumeration file: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        enumerations = loaded.registry.len(),
        "loaded enumeration file"
    );
    Ok(loaded)
}

/// Read a case document as a JSON value, keeping key order.
pub fn load_cases(path: &Path) -> Result<Value> {
    read_structured(path)
}

fn read_structured<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))
    } else {
        serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse YAML: {}", path.display()))
    }
}
