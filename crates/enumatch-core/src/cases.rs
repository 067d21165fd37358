//! # Cases — Partial Mappings With an Optional Default
//!
//! A [`Cases`] value is the input of [`match_cases`](crate::match_cases):
//! explicit values for some members, plus an optional default that stands
//! in for every member left out. Keys are [`Case`]s, so the default marker
//! is a key like any other:
//!
//! ```
//! use enumatch_core::{enumeration, Case, Cases};
//!
//! enumeration! {
//!     pub enum Side {
//!         Left => "left",
//!         Right => "right",
//!     }
//! }
//!
//! let mut cases: Cases<Side, &str> = Cases::new();
//! cases.insert(Side::Left, "Go left");
//! cases.insert(Case::Default, "Go right");
//! assert_eq!(cases.len(), 2);
//! ```

use crate::enumeration::Enumeration;
use crate::member_map::MemberMap;

/// A case-mapping key: one member, or the default marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case<E> {
    /// An explicit member.
    Member(E),
    /// Fallback for every member without an explicit entry.
    Default,
}

impl<E: Enumeration> From<E> for Case<E> {
    fn from(member: E) -> Self {
        Self::Member(member)
    }
}

/// A partial mapping from members to values, with an optional default.
///
/// Inserting a key that is already present replaces its value. The input
/// of a match is never modified by matching.
#[derive(Debug, Clone)]
pub struct Cases<E, V> {
    explicit: MemberMap<E, V>,
    default: Option<V>,
}

impl<E: Enumeration, V> Cases<E, V> {
    pub fn new() -> Self {
        Self {
            explicit: MemberMap::new(),
            default: None,
        }
    }

    /// Insert a value under a member or the default marker, returning the
    /// value it replaces.
    pub fn insert(&mut self, key: impl Into<Case<E>>, value: V) -> Option<V> {
        match key.into() {
            Case::Member(member) => self.insert_member(member, value),
            Case::Default => self.set_default(value),
        }
    }

    pub fn insert_member(&mut self, member: E, value: V) -> Option<V> {
        self.explicit.insert(member, value)
    }

    pub fn set_default(&mut self, value: V) -> Option<V> {
        self.default.replace(value)
    }

    /// Builder form of [`insert_member`](Self::insert_member).
    pub fn case(mut self, member: E, value: V) -> Self {
        self.insert_member(member, value);
        self
    }

    /// Builder form of [`set_default`](Self::set_default).
    pub fn otherwise(mut self, value: V) -> Self {
        self.set_default(value);
        self
    }

    pub fn get(&self, key: &Case<E>) -> Option<&V> {
        match key {
            Case::Member(member) => self.explicit.get(member),
            Case::Default => self.default.as_ref(),
        }
    }

    pub fn contains(&self, key: &Case<E>) -> bool {
        self.get(key).is_some()
    }

    /// Explicit member entries, in insertion order.
    pub fn explicit(&self) -> &MemberMap<E, V> {
        &self.explicit
    }

    pub fn default_value(&self) -> Option<&V> {
        self.default.as_ref()
    }

    /// Number of keys, the default marker included.
    pub fn len(&self) -> usize {
        self.explicit.len() + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys: explicit members in insertion order, then the default marker.
    pub fn keys(&self) -> impl Iterator<Item = Case<E>> + '_ {
        self.explicit
            .keys()
            .map(Case::Member)
            .chain(self.default.as_ref().map(|_| Case::Default))
    }
}

impl<E: Enumeration, V> Default for Cases<E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Enumeration, V> From<MemberMap<E, V>> for Cases<E, V> {
    fn from(explicit: MemberMap<E, V>) -> Self {
        Self {
            explicit,
            default: None,
        }
    }
}

impl<E: Enumeration, V> FromIterator<(Case<E>, V)> for Cases<E, V> {
    fn from_iter<I: IntoIterator<Item = (Case<E>, V)>>(iter: I) -> Self {
        let mut cases = Self::new();
        cases.extend(iter);
        cases
    }
}

impl<E: Enumeration, V> Extend<(Case<E>, V)> for Cases<E, V> {
    fn extend<I: IntoIterator<Item = (Case<E>, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Build a [`Cases`] from `member => value` arms; `_` is the default.
///
/// ```
/// use enumatch_core::{cases, enumeration, match_cases};
///
/// enumeration! {
///     pub enum Side {
///         Left => "left",
///         Right => "right",
///     }
/// }
///
/// let directions = match_cases(&cases! {
///     Side::Left => "Go left",
///     _ => "Go right",
/// })
/// .unwrap();
/// assert_eq!(directions[&Side::Right], "Go right");
/// ```
#[macro_export]
macro_rules! cases {
    (@arms $cases:ident;) => {};
    (@arms $cases:ident; _ => $value:expr $(, $($rest:tt)*)?) => {
        $cases.set_default($value);
        $( $crate::cases!(@arms $cases; $($rest)*); )?
    };
    (@arms $cases:ident; $member:expr => $value:expr $(, $($rest:tt)*)?) => {
        $cases.insert_member($member, $value);
        $( $crate::cases!(@arms $cases; $($rest)*); )?
    };
    ($($arms:tt)*) => {{
        #[allow(unused_mut)]
        let mut cases = $crate::Cases::new();
        $crate::cases!(@arms cases; $($arms)*);
        cases
    }};
}
