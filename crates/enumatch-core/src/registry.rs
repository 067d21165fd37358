//! # Registry — Enumerations Declared at Runtime
//!
//! The dynamic layer cannot rely on a Rust type to name the reference
//! enumeration, so enumerations are declared by tag into a [`Registry`].
//! A member is addressed by its qualified key, `<Enum>.<member>`, the same
//! text that [`Enumeration::qualified_name`] produces for typed members.
//!
//! ## Invariants
//!
//! - Enumeration and member names are identifiers, so a qualified key
//!   splits unambiguously at its first `.` and can never equal the default
//!   marker `...`.
//! - Members of one declaration are distinct; enumeration names are
//!   distinct within a registry.
//! - Declarations are never modified once registered.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::enumeration::Enumeration;
use crate::error::RegistryError;

/// An enumeration declared at runtime: a tag and its ordered members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDecl {
    pub name: String,
    pub members: Vec<String>,
}

impl EnumDecl {
    /// Build a validated declaration.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidName` for a non-identifier name and
    /// `RegistryError::DuplicateMember` for a repeated member.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        members: impl IntoIterator<Item = S>,
    ) -> Result<Self, RegistryError> {
        let decl = Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        };
        decl.validate()?;
        Ok(decl)
    }

    /// Declaration mirroring a typed enumeration.
    pub fn of<E: Enumeration>() -> Self {
        Self {
            name: E::NAME.to_string(),
            members: E::members()
                .iter()
                .map(|m| m.member_name().to_string())
                .collect(),
        }
    }

    /// Check the naming and uniqueness invariants.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if !is_identifier(&self.name) {
            return Err(RegistryError::InvalidName {
                what: "enumeration",
                name: self.name.clone(),
            });
        }
        let mut seen = HashSet::with_capacity(self.members.len());
        for member in &self.members {
            if !is_identifier(member) {
                return Err(RegistryError::InvalidName {
                    what: "member",
                    name: member.clone(),
                });
            }
            if !seen.insert(member.as_str()) {
                return Err(RegistryError::DuplicateMember {
                    enumeration: self.name.clone(),
                    member: member.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }

    /// Qualified key of `member`, whether or not it is declared.
    pub fn qualified(&self, member: &str) -> String {
        format!("{}.{}", self.name, member)
    }

    /// Qualified keys of every member, in declaration order.
    pub fn qualified_members(&self) -> impl Iterator<Item = String> + '_ {
        self.members.iter().map(|m| self.qualified(m))
    }
}

/// A set of runtime enumerations, looked up by name or by qualified key.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    decls: Vec<EnumDecl>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from declarations, in order.
    pub fn from_decls(decls: impl IntoIterator<Item = EnumDecl>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for decl in decls {
            registry.declare(decl)?;
        }
        Ok(registry)
    }

    /// Register a validated declaration.
    ///
    /// # Errors
    ///
    /// Fails if the declaration is invalid or its name is already taken.
    pub fn declare(&mut self, decl: EnumDecl) -> Result<(), RegistryError> {
        decl.validate()?;
        if self.by_name.contains_key(&decl.name) {
            return Err(RegistryError::DuplicateEnumeration(decl.name));
        }
        tracing::trace!(
            enumeration = %decl.name,
            members = decl.members.len(),
            "declared enumeration"
        );
        self.by_name.insert(decl.name.clone(), self.decls.len());
        self.decls.push(decl);
        Ok(())
    }

    /// Register the members of a typed enumeration.
    pub fn register<E: Enumeration>(&mut self) -> Result<(), RegistryError> {
        self.declare(EnumDecl::of::<E>())
    }

    pub fn get(&self, name: &str) -> Option<&EnumDecl> {
        self.by_name.get(name).map(|&i| &self.decls[i])
    }

    /// Declarations in registration order.
    pub fn enumerations(&self) -> impl Iterator<Item = &EnumDecl> + '_ {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Split a qualified key into its declaration and member name.
    ///
    /// Returns `None` unless the key names a declared member.
    pub fn resolve_key<'k>(&self, key: &'k str) -> Option<(&EnumDecl, &'k str)> {
        let (name, member) = key.split_once('.')?;
        let decl = self.get(name)?;
        decl.contains(member).then_some((decl, member))
    }

    /// Qualified key for a declared member.
    pub fn member_key(&self, enumeration: &str, member: &str) -> Option<String> {
        let decl = self.get(enumeration)?;
        decl.contains(member).then(|| decl.qualified(member))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
