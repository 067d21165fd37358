//! # Enumerations — Closed, Ordered Member Sets
//!
//! An [`Enumeration`] is a type with a finite list of distinct members in
//! declaration order. Matching uses that list as the reference set: a case
//! mapping is exhaustive when it covers every entry of
//! [`Enumeration::members()`].
//!
//! Most enumerations are declared with [`enumeration!`](crate::enumeration),
//! which generates the enum, the trait impl and a `Display` that renders the
//! qualified member name (`Color.red`).

use std::fmt::Debug;
use std::hash::Hash;

/// A finite enumeration type whose members can be listed in order.
///
/// # Invariants
///
/// - `members()` has no duplicates and its order never changes.
/// - `member_name()` is unique per member and is an identifier.
pub trait Enumeration: Copy + Eq + Hash + Debug + 'static {
    /// Type name used as the prefix of qualified member names.
    const NAME: &'static str;

    /// Every member, in declaration order.
    fn members() -> &'static [Self];

    /// Unqualified name of this member, e.g. `red`.
    fn member_name(&self) -> &'static str;

    /// Qualified name of this member, e.g. `Color.red`.
    fn qualified_name(&self) -> String {
        format!("{}.{}", Self::NAME, self.member_name())
    }

    /// Number of members.
    fn count() -> usize {
        Self::members().len()
    }

    /// Declaration index of this member.
    ///
    /// `None` only for values a hand-written impl leaves out of `members()`.
    fn position(&self) -> Option<usize> {
        Self::members().iter().position(|m| m == self)
    }

    /// Look up a member by its unqualified name.
    fn from_member_name(name: &str) -> Option<Self> {
        Self::members()
            .iter()
            .copied()
            .find(|m| m.member_name() == name)
    }
}

/// Declare a fieldless enum and implement [`Enumeration`] for it.
///
/// Each variant is paired with its member name. The generated type derives
/// `Debug, Clone, Copy, PartialEq, Eq, Hash` and displays as its qualified
/// name.
///
/// ```
/// use enumatch_core::{enumeration, Enumeration};
///
/// enumeration! {
///     /// Compass sides.
///     pub enum Side {
///         Left => "left",
///         Right => "right",
///     }
/// }
///
/// assert_eq!(Side::members(), &[Side::Left, Side::Right]);
/// assert_eq!(Side::Right.to_string(), "Side.right");
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $crate::Enumeration for $name {
            const NAME: &'static str = stringify!($name);

            fn members() -> &'static [Self] {
                &[$( Self::$variant, )*]
            }

            fn member_name(&self) -> &'static str {
                match *self {
                    $( Self::$variant => $label, )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "{}.{}",
                    <Self as $crate::Enumeration>::NAME,
                    <Self as $crate::Enumeration>::member_name(self),
                )
            }
        }
    };
}
