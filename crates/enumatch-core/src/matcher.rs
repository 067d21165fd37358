//! # Matcher — Exhaustive Completion of Typed Cases
//!
//! [`match_cases`] turns a partial [`Cases`] into a [`MemberMap`] holding
//! exactly one entry per member of `E`, or fails with every missing member.
//! The enumeration is the type parameter, so there is no structural failure
//! mode here: only the completeness check runs at runtime.
//!
//! ## Algorithm
//!
//! For each member of `E` in declaration order:
//!
//! 1. an explicit entry is copied;
//! 2. otherwise the default, if any, is copied;
//! 3. otherwise the member is recorded as missing.
//!
//! Any missing member fails the whole match. Explicit keys that are not
//! members of `E` (possible only with hand-written [`Enumeration`] impls)
//! are ignored unless [`Strictness::Strict`](crate::Strictness) is set.

use crate::cases::Cases;
use crate::enumeration::Enumeration;
use crate::error::{MatchError, ValueConstraintError};
use crate::member_map::MemberMap;
use crate::options::MatchOptions;

/// Complete `cases` into a total mapping over `E`, with default options.
///
/// # Errors
///
/// Returns `ValueConstraintError::MissingPossibilities` listing every member
/// that has neither an explicit entry nor a default.
pub fn match_cases<E: Enumeration, V: Clone>(
    cases: &Cases<E, V>,
) -> Result<MemberMap<E, V>, MatchError> {
    match_cases_with(cases, &MatchOptions::default())
}

/// Complete `cases` into a total mapping over `E`.
///
/// # Errors
///
/// Returns `ValueConstraintError::MissingPossibilities` as [`match_cases`]
/// does, and `ValueConstraintError::UnknownKeys` in strict mode when an
/// explicit key is not listed in `E::members()`.
pub fn match_cases_with<E: Enumeration, V: Clone>(
    cases: &Cases<E, V>,
    options: &MatchOptions,
) -> Result<MemberMap<E, V>, MatchError> {
    let members = E::members();
    let mut total = MemberMap::with_capacity(members.len());
    let mut missing = Vec::new();
    let mut defaulted = 0usize;

    for member in members {
        if let Some(value) = cases.explicit().get(member) {
            total.insert(*member, value.clone());
        } else if let Some(value) = cases.default_value() {
            total.insert(*member, value.clone());
            defaulted += 1;
        } else {
            missing.push(member.qualified_name());
        }
    }

    if !missing.is_empty() {
        return Err(ValueConstraintError::MissingPossibilities { missing }.into());
    }

    // Every member is in `total` now, so anything else is foreign.
    let unknown: Vec<String> = cases
        .explicit()
        .keys()
        .filter(|key| !total.contains_key(key))
        .map(|key| key.qualified_name())
        .collect();
    if !unknown.is_empty() {
        if options.is_strict() {
            return Err(ValueConstraintError::UnknownKeys { keys: unknown }.into());
        }
        tracing::debug!(
            enumeration = E::NAME,
            keys = ?unknown,
            "ignoring case keys outside the enumeration"
        );
    }

    tracing::trace!(
        enumeration = E::NAME,
        members = members.len(),
        defaulted,
        "cases matched"
    );
    Ok(total)
}

/// Map every member yielded by `members` to a clone of `value`.
///
/// `members` may be any subset of an enumeration, in any order; the result
/// follows that order. A repeated member keeps its first position. Never
/// fails.
pub fn forall<E: Enumeration, V: Clone>(
    members: impl IntoIterator<Item = E>,
    value: V,
) -> MemberMap<E, V> {
    members.into_iter().map(|m| (m, value.clone())).collect()
}

/// Map every member of `E` to a clone of `value`.
pub fn forall_members<E: Enumeration, V: Clone>(value: V) -> MemberMap<E, V> {
    forall(E::members().iter().copied(), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Strictness;

    crate::enumeration! {
        enum Side {
            Left => "left",
            Right => "right",
        }
    }

    crate::enumeration! {
        enum Color {
            Red => "red",
            Green => "green",
            Blue => "blue",
        }
    }

    crate::enumeration! {
        enum Nothing {}
    }

    /// Hand-written impl whose member list leaves out `Holiday`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Day {
        Workday,
        Weekend,
        Holiday,
    }

    impl Enumeration for Day {
        const NAME: &'static str = "Day";

        fn members() -> &'static [Self] {
            &[Self::Workday, Self::Weekend]
        }

        fn member_name(&self) -> &'static str {
            match self {
                Self::Workday => "workday",
                Self::Weekend => "weekend",
                Self::Holiday => "holiday",
            }
        }
    }

    #[test]
    fn side_all_cases() {
        let cases = Cases::new()
            .case(Side::Left, "Go left")
            .case(Side::Right, "Go right");
        let result = match_cases(&cases).unwrap();
        assert_eq!(result[&Side::Left], "Go left");
        assert_eq!(result[&Side::Right], "Go right");
        assert!(result.is_total());
    }

    #[test]
    fn side_default() {
        let cases = Cases::new().case(Side::Left, "Go left").otherwise("Go right");
        let result = match_cases(&cases).unwrap();
        assert_eq!(result[&Side::Right], "Go right");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn side_missing_right() {
        let cases = Cases::new().case(Side::Left, "Go left");
        let err = match_cases(&cases).unwrap_err();
        assert_eq!(err.to_string(), "missing possibilities: Side.right");
    }

    #[test]
    fn color_tuples() {
        let cases = Cases::new()
            .case(Color::Red, (255, 0, 0))
            .case(Color::Green, (0, 255, 0))
            .case(Color::Blue, (0, 0, 255));
        let result = match_cases(&cases).unwrap();
        assert_eq!(result[&Color::Red], (255, 0, 0));
        assert_eq!(result[&Color::Green], (0, 255, 0));
        assert_eq!(result[&Color::Blue], (0, 0, 255));
    }

    #[test]
    fn missing_members_listed_in_declaration_order() {
        let cases = Cases::new().case(Color::Green, 1);
        let err = match_cases(&cases).unwrap_err();
        assert_eq!(
            err.missing(),
            Some(&["Color.red".to_string(), "Color.blue".to_string()][..])
        );
    }

    #[test]
    fn result_follows_declaration_order() {
        let cases = Cases::new()
            .case(Color::Blue, 'b')
            .otherwise('x')
            .case(Color::Red, 'r');
        let result = match_cases(&cases).unwrap();
        assert_eq!(
            result.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            vec![(Color::Red, 'r'), (Color::Green, 'x'), (Color::Blue, 'b')]
        );
    }

    #[test]
    fn input_is_not_modified() {
        let cases = Cases::new().case(Color::Red, 1).otherwise(0);
        let before = cases.clone();
        let _ = match_cases(&cases).unwrap();
        assert_eq!(cases.explicit(), before.explicit());
        assert_eq!(cases.default_value(), before.default_value());
    }

    #[test]
    fn zero_member_enumeration_yields_empty_result() {
        let default_only: Cases<Nothing, i32> = Cases::new().otherwise(1);
        assert!(match_cases(&default_only).unwrap().is_empty());

        let empty: Cases<Nothing, i32> = Cases::new();
        assert!(match_cases(&empty).unwrap().is_empty());
    }

    #[test]
    fn default_only_covers_everything() {
        let cases: Cases<Color, &str> = Cases::new().otherwise("any");
        let result = match_cases(&cases).unwrap();
        assert!(result.values().all(|v| *v == "any"));
        assert!(result.is_total());
    }

    #[test]
    fn unlisted_key_ignored_when_permissive() {
        let cases = Cases::new()
            .case(Day::Workday, 8)
            .case(Day::Weekend, 0)
            .case(Day::Holiday, 0);
        let result = match_cases(&cases).unwrap();
        assert_eq!(result.len(), 2);
        assert!(!result.contains_key(&Day::Holiday));
    }

    #[test]
    fn unlisted_key_rejected_when_strict() {
        let cases = Cases::new().case(Day::Holiday, 0).otherwise(8);
        let options = MatchOptions {
            strictness: Strictness::Strict,
        };
        let err = match_cases_with(&cases, &options).unwrap_err();
        assert_eq!(err.to_string(), "unknown case keys: Day.holiday");
    }

    #[test]
    fn missing_reported_before_unknown() {
        let cases = Cases::new().case(Day::Holiday, 0);
        let err = match_cases_with(&cases, &MatchOptions::strict()).unwrap_err();
        assert!(err.missing().is_some());
    }

    #[test]
    fn forall_subset_in_given_order() {
        let map = forall([Color::Blue, Color::Red], "x");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![Color::Blue, Color::Red]);
        assert!(!map.is_total());
    }

    #[test]
    fn forall_duplicates_collapse() {
        let map = forall([Side::Left, Side::Right, Side::Left], 7);
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![Side::Left, Side::Right]);
    }

    #[test]
    fn forall_results_are_independent() {
        let mut a = forall_members::<Color, _>(vec![1]);
        let b = forall_members::<Color, _>(vec![1]);
        assert_eq!(a, b);
        a.get_mut(&Color::Red).unwrap().push(2);
        assert_ne!(a, b);
        assert_eq!(b[&Color::Red], vec![1]);
    }

    #[test]
    fn nested_match_with_forall_default() {
        let red_row =
            match_cases(&Cases::new().case(Color::Green, "yellow").otherwise("red")).unwrap();
        let table = match_cases(
            &Cases::new()
                .case(Color::Red, red_row)
                .otherwise(forall_members::<Color, _>("n/a")),
        )
        .unwrap();
        assert_eq!(table[&Color::Red][&Color::Green], "yellow");
        assert_eq!(table[&Color::Red][&Color::Blue], "red");
        assert_eq!(table[&Color::Blue][&Color::Green], "n/a");
    }
}
