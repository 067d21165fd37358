//! # enumatch-core — Runtime Exhaustiveness for Enumerations
//!
//! Given an enumeration and a mapping from some of its members to values,
//! produce a total mapping covering every member, or report precisely which
//! members are missing.
//!
//! ## Layers
//!
//! 1. **Typed.** The enumeration is a Rust type implementing
//!    [`Enumeration`]. [`match_cases`] completes a [`Cases`] into a
//!    [`MemberMap`]; [`forall`] broadcasts one value over members.
//!
//! 2. **Dynamic.** Enumerations are declared at runtime in a [`Registry`]
//!    and cases are JSON documents keyed by qualified member names. The
//!    reference enumeration is inferred from the first key, which is the
//!    only place a [`TypeArgumentError`] can arise.
//!
//! ```
//! use enumatch_core::{cases, enumeration, match_cases, MatchError};
//!
//! enumeration! {
//!     pub enum Side {
//!         Left => "left",
//!         Right => "right",
//!     }
//! }
//!
//! let full = match_cases(&cases! { Side::Left => "Go left", Side::Right => "Go right" }).unwrap();
//! assert_eq!(full[&Side::Right], "Go right");
//!
//! let err: MatchError = match_cases(&cases! { Side::Left => "Go left" }).unwrap_err();
//! assert_eq!(err.to_string(), "missing possibilities: Side.right");
//! ```
//!
//! ## Crate Policy
//!
//! - No I/O and no shared state; every call is a pure function of its
//!   arguments.
//! - No `panic!()` or `.unwrap()` outside tests, except `MemberMap`'s
//!   `Index` impl, which panics on an absent member like `HashMap` does.
//! - Errors are returned, never logged; tracing events are `debug` or
//!   `trace` only.

pub mod cases;
pub mod dynamic;
pub mod enumeration;
pub mod error;
pub mod matcher;
pub mod member_map;
pub mod options;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use cases::{Case, Cases};
pub use dynamic::{forall_value, DEFAULT_MARKER};
pub use enumeration::Enumeration;
pub use error::{MatchError, RegistryError, TypeArgumentError, ValueConstraintError};
pub use matcher::{forall, forall_members, match_cases, match_cases_with};
pub use member_map::MemberMap;
pub use options::{MatchOptions, Strictness};
pub use registry::{EnumDecl, Registry};
