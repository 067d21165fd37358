//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types returned by matching and by enumeration
//! registration. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! ## Design
//!
//! - `TypeArgumentError` signals a structurally wrong argument: a case
//!   document that is not a mapping, or whose reference key is not an
//!   enumeration member. Only the dynamic layer can produce it.
//! - `ValueConstraintError` signals a well-formed case mapping that does not
//!   cover every member. The message lists every missing member, in
//!   declaration order, so all omissions can be fixed in one pass.
//! - `MatchError` is what the match entry points return.

use thiserror::Error;

/// Top-level error returned by every match entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The cases argument is structurally wrong.
    #[error(transparent)]
    TypeArgument(#[from] TypeArgumentError),

    /// The cases argument does not satisfy exhaustiveness.
    #[error(transparent)]
    ValueConstraint(#[from] ValueConstraintError),

    /// The explicitly named reference enumeration is not registered.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl MatchError {
    /// Members reported missing, if this is a missing-possibilities error.
    pub fn missing(&self) -> Option<&[String]> {
        match self {
            Self::ValueConstraint(ValueConstraintError::MissingPossibilities { missing }) => {
                Some(missing.as_slice())
            }
            _ => None,
        }
    }
}

/// A structurally invalid cases argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeArgumentError {
    /// The cases document is not a key-value mapping.
    #[error("expecting a mapping, found {found}")]
    NotAMapping {
        /// JSON kind of the rejected value (`array`, `string`, ...).
        found: &'static str,
    },

    /// The cases mapping has no key to infer the reference enumeration from.
    #[error("expecting at least one case")]
    EmptyCases,

    /// The first key does not name a member of any registered enumeration.
    #[error("the first key of the given mapping must be an enum member, found `{key}`")]
    NotAnEnumMember {
        /// The offending key.
        key: String,
    },
}

/// A well-formed cases mapping that fails the exhaustiveness check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueConstraintError {
    /// Members absent from the cases with no default to fill them.
    #[error("missing possibilities: {}", .missing.join(", "))]
    MissingPossibilities {
        /// Qualified member names, in declaration order.
        missing: Vec<String>,
    },

    /// Keys outside the reference enumeration, rejected in strict mode.
    #[error("unknown case keys: {}", .keys.join(", "))]
    UnknownKeys {
        /// The rejected keys, in input order.
        keys: Vec<String>,
    },
}

/// Error while declaring or looking up runtime enumerations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Enumeration and member names must be identifiers.
    #[error("invalid {what} name: {name:?}")]
    InvalidName {
        /// `"enumeration"` or `"member"`.
        what: &'static str,
        /// The rejected name.
        name: String,
    },

    /// An enumeration with this name is already declared.
    #[error("enumeration {0} is declared twice")]
    DuplicateEnumeration(String),

    /// A member occurs twice in one declaration.
    #[error("member {member} is declared twice in enumeration {enumeration}")]
    DuplicateMember {
        /// The enumeration being declared.
        enumeration: String,
        /// The repeated member.
        member: String,
    },

    /// No enumeration with this name is declared.
    #[error("unknown enumeration: {0}")]
    UnknownEnumeration(String),
}
