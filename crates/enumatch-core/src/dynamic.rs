//! # Dynamic Matching — Cases as JSON Documents
//!
//! Runtime counterpart of [`match_cases`](crate::match_cases) for case
//! mappings that arrive as data. Keys are qualified member keys
//! (`Color.red`) or [`DEFAULT_MARKER`]; the reference enumeration is
//! inferred from the first key of the document, so object key order
//! matters and `serde_json` is built with `preserve_order`.
//!
//! ```
//! use enumatch_core::{EnumDecl, Registry};
//! use serde_json::json;
//!
//! let side = EnumDecl::new("Side", ["left", "right"]).unwrap();
//! let registry = Registry::from_decls([side]).unwrap();
//! let total = registry
//!     .match_value(&json!({"Side.left": "Go left", "...": "Go right"}))
//!     .unwrap();
//! assert_eq!(total["Side.right"], "Go right");
//! ```

use serde_json::{Map, Value};

use crate::error::{MatchError, RegistryError, TypeArgumentError, ValueConstraintError};
use crate::options::MatchOptions;
use crate::registry::{EnumDecl, Registry};

/// Key standing for every member without an explicit entry.
pub const DEFAULT_MARKER: &str = "...";

impl Registry {
    /// Complete a case document, inferring the enumeration from its first key.
    ///
    /// # Errors
    ///
    /// - `TypeArgumentError::NotAMapping` if `cases` is not a JSON object.
    /// - `TypeArgumentError::EmptyCases` if the object has no keys.
    /// - `TypeArgumentError::NotAnEnumMember` if the first key is not a
    ///   declared member (the default marker included).
    /// - `ValueConstraintError::MissingPossibilities` if members are
    ///   missing and there is no default.
    pub fn match_value(&self, cases: &Value) -> Result<Map<String, Value>, MatchError> {
        self.match_value_with(cases, &MatchOptions::default())
    }

    /// [`match_value`](Self::match_value) with explicit options.
    pub fn match_value_with(
        &self,
        cases: &Value,
        options: &MatchOptions,
    ) -> Result<Map<String, Value>, MatchError> {
        let map = as_mapping(cases)?;
        let first = map.keys().next().ok_or(TypeArgumentError::EmptyCases)?;
        let (decl, _) = self
            .resolve_key(first)
            .ok_or_else(|| TypeArgumentError::NotAnEnumMember { key: first.clone() })?;
        tracing::trace!(enumeration = %decl.name, key = %first, "inferred reference enumeration");
        complete(decl, map, options)
    }

    /// Complete a case document against a named enumeration.
    ///
    /// No key is inspected to pick the enumeration, so an empty document or
    /// one holding only the default marker is accepted.
    ///
    /// # Errors
    ///
    /// `RegistryError::UnknownEnumeration` for an undeclared name, then the
    /// same errors as [`match_value`](Self::match_value) except the two that
    /// concern the first key.
    pub fn match_value_as(
        &self,
        enumeration: &str,
        cases: &Value,
        options: &MatchOptions,
    ) -> Result<Map<String, Value>, MatchError> {
        let decl = self
            .get(enumeration)
            .ok_or_else(|| RegistryError::UnknownEnumeration(enumeration.to_string()))?;
        let map = as_mapping(cases)?;
        complete(decl, map, options)
    }

    /// Map every member of a declared enumeration to `value`.
    pub fn forall_enum(
        &self,
        enumeration: &str,
        value: Value,
    ) -> Result<Map<String, Value>, RegistryError> {
        let decl = self
            .get(enumeration)
            .ok_or_else(|| RegistryError::UnknownEnumeration(enumeration.to_string()))?;
        Ok(forall_value(decl.qualified_members(), value))
    }
}

/// Map every key yielded by `members` to a clone of `value`.
///
/// No key is validated. A repeated key keeps its first position.
pub fn forall_value<S: Into<String>>(
    members: impl IntoIterator<Item = S>,
    value: Value,
) -> Map<String, Value> {
    members
        .into_iter()
        .map(|m| (m.into(), value.clone()))
        .collect()
}

fn as_mapping(cases: &Value) -> Result<&Map<String, Value>, TypeArgumentError> {
    match cases {
        Value::Object(map) => Ok(map),
        other => Err(TypeArgumentError::NotAMapping {
            found: json_kind(other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn complete(
    decl: &EnumDecl,
    cases: &Map<String, Value>,
    options: &MatchOptions,
) -> Result<Map<String, Value>, MatchError> {
    let default = cases.get(DEFAULT_MARKER);
    let mut total = Map::with_capacity(decl.members.len());
    let mut missing = Vec::new();

    for key in decl.qualified_members() {
        match cases.get(&key).or(default) {
            Some(value) => {
                total.insert(key, value.clone());
            }
            None => missing.push(key),
        }
    }

    if !missing.is_empty() {
        return Err(ValueConstraintError::MissingPossibilities { missing }.into());
    }

    let unknown: Vec<String> = cases
        .keys()
        .filter(|k| k.as_str() != DEFAULT_MARKER && !total.contains_key(k.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        if options.is_strict() {
            return Err(ValueConstraintError::UnknownKeys { keys: unknown }.into());
        }
        tracing::debug!(
            enumeration = %decl.name,
            keys = ?unknown,
            "ignoring case keys outside the enumeration"
        );
    }

    Ok(total)
}
