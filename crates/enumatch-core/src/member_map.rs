//! # Member Map — Ordered Mapping Keyed by Enumeration Members
//!
//! `MemberMap<E, V>` is the result type of both [`match_cases`] and
//! [`forall`]. Entries keep their insertion order; a successful match
//! inserts members in declaration order, so iteration follows the
//! enumeration.
//!
//! Equality is map equality: two maps are equal when they hold the same
//! members with equal values, whatever the entry order.
//!
//! [`match_cases`]: crate::match_cases
//! [`forall`]: crate::forall

use std::collections::HashMap;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::enumeration::Enumeration;

/// An insertion-ordered mapping from enumeration members to values.
#[derive(Debug, Clone)]
pub struct MemberMap<E, V> {
    entries: Vec<(E, V)>,
    index: HashMap<E, usize>,
}

impl<E: Enumeration, V> MemberMap<E, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty map with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the previous one for this member.
    ///
    /// A replaced member keeps its original position.
    pub fn insert(&mut self, member: E, value: V) -> Option<V> {
        if let Some(&i) = self.index.get(&member) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        self.index.insert(member, self.entries.len());
        self.entries.push((member, value));
        None
    }

    pub fn get(&self, member: &E) -> Option<&V> {
        self.index.get(member).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, member: &E) -> Option<&mut V> {
        let i = *self.index.get(member)?;
        Some(&mut self.entries[i].1)
    }

    pub fn contains_key(&self, member: &E) -> bool {
        self.index.contains_key(member)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Members in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = E> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// Whether the map holds exactly the members of `E`, no more, no fewer.
    pub fn is_total(&self) -> bool {
        self.len() == E::count() && E::members().iter().all(|m| self.contains_key(m))
    }

    /// Transform every value, keeping members and order.
    pub fn map_values<W>(self, mut f: impl FnMut(V) -> W) -> MemberMap<E, W> {
        MemberMap {
            entries: self.entries.into_iter().map(|(k, v)| (k, f(v))).collect(),
            index: self.index,
        }
    }

    /// Drop the ordering and return a plain `HashMap`.
    pub fn into_hash_map(self) -> HashMap<E, V> {
        self.entries.into_iter().collect()
    }
}

impl<E: Enumeration, V> Default for MemberMap<E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Enumeration, V: PartialEq> PartialEq for MemberMap<E, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|w| v == w))
    }
}

impl<E: Enumeration, V: Eq> Eq for MemberMap<E, V> {}

impl<E: Enumeration, V> Index<&E> for MemberMap<E, V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `member` has no entry. After a successful match every
    /// member of the enumeration has one.
    fn index(&self, member: &E) -> &V {
        match self.get(member) {
            Some(v) => v,
            None => panic!("no entry for {}", member.qualified_name()),
        }
    }
}

impl<E: Enumeration, V> FromIterator<(E, V)> for MemberMap<E, V> {
    /// Later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (E, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<E: Enumeration, V> Extend<(E, V)> for MemberMap<E, V> {
    fn extend<I: IntoIterator<Item = (E, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<E, V> IntoIterator for MemberMap<E, V> {
    type Item = (E, V);
    type IntoIter = std::vec::IntoIter<(E, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serializes as a map from qualified member names to values, in entry order.
impl<E: Enumeration, V: Serialize> Serialize for MemberMap<E, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(&k.qualified_name(), v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::enumeration! {
        enum Color {
            Red => "red",
            Green => "green",
            Blue => "blue",
        }
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut map = MemberMap::new();
        assert_eq!(map.insert(Color::Green, 1), None);
        assert_eq!(map.insert(Color::Red, 2), None);
        assert_eq!(map.insert(Color::Green, 3), Some(1));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![Color::Green, Color::Red]);
        assert_eq!(map[&Color::Green], 3);
    }

    #[test]
    fn is_total_requires_every_member() {
        let mut map: MemberMap<Color, u8> = [(Color::Red, 0), (Color::Green, 0)]
            .into_iter()
            .collect();
        assert!(!map.is_total());
        map.insert(Color::Blue, 0);
        assert!(map.is_total());
    }

    #[test]
    fn equality_ignores_order() {
        let a: MemberMap<Color, i32> = [(Color::Red, 1), (Color::Blue, 2)].into_iter().collect();
        let b: MemberMap<Color, i32> = [(Color::Blue, 2), (Color::Red, 1)].into_iter().collect();
        let c: MemberMap<Color, i32> = [(Color::Blue, 2), (Color::Red, 9)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn get_mut_and_values_mut() {
        let mut map: MemberMap<Color, i32> =
            [(Color::Red, 1), (Color::Green, 2)].into_iter().collect();
        *map.get_mut(&Color::Red).unwrap() += 10;
        for v in map.values_mut() {
            *v *= 2;
        }
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![22, 4]);
        assert!(map.get_mut(&Color::Blue).is_none());
    }

    #[test]
    fn map_values_keeps_order() {
        let map: MemberMap<Color, i32> = [(Color::Blue, 1), (Color::Red, 2)].into_iter().collect();
        let strings = map.map_values(|v| v.to_string());
        assert_eq!(strings[&Color::Red], "2");
        assert_eq!(strings.keys().collect::<Vec<_>>(), vec![Color::Blue, Color::Red]);
    }

    #[test]
    #[should_panic(expected = "no entry for Color.blue")]
    fn index_panics_on_absent_member() {
        let map: MemberMap<Color, i32> = [(Color::Red, 1)].into_iter().collect();
        let _ = map[&Color::Blue];
    }

    #[test]
    fn serializes_qualified_names_in_order() {
        let map: MemberMap<Color, &str> =
            [(Color::Green, "g"), (Color::Red, "r")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Color.green":"g","Color.red":"r"}"#);
    }

    #[test]
    fn into_hash_map_keeps_entries() {
        let map: MemberMap<Color, i32> = [(Color::Red, 1), (Color::Blue, 3)].into_iter().collect();
        let hash = map.into_hash_map();
        assert_eq!(hash.len(), 2);
        assert_eq!(hash[&Color::Blue], 3);
    }
}
