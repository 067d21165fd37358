//! # Match Options
//!
//! Configuration shared by the typed and dynamic match entry points. The
//! defaults reproduce the permissive contract: keys outside the reference
//! enumeration are ignored.

use serde::{Deserialize, Serialize};

/// How keys outside the reference enumeration are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Unknown keys are skipped.
    #[default]
    Permissive,
    /// Unknown keys fail the match with `ValueConstraintError::UnknownKeys`.
    Strict,
}

/// Options for a single match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
    pub strictness: Strictness,
}

impl MatchOptions {
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}
