use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;

/// Capability for a descriptor element to derive its own identity key.
///
/// Keyed collections require this at the type level, so a value without a
/// derivable identity cannot be inserted in the first place.
pub trait Keyed {
    type Key: Hash + Eq + Clone;

    fn key(&self) -> Self::Key;
}

/// An insertion-ordered map presented as a collection of values, keyed by
/// each value's derived identity.
///
/// Inserting a value whose key is already present overwrites the previous
/// value and keeps the key's original position; no uniqueness is enforced
/// beyond last-write-wins. Both the collection view ([`iter`](Self::iter))
/// and the map view ([`as_map`](Self::as_map)) read the same backing store.
#[derive(Clone, Debug)]
pub struct KeyedCollection<V: Keyed> {
    map: IndexMap<V::Key, V>,
}

impl<V: Keyed> KeyedCollection<V> {
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Inserts the value under its derived key, returning the value it
    /// displaced if the key was already present.
    pub fn push(&mut self, value: V) -> Option<V> {
        self.map.insert(value.key(), value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// The live backing map; mutations through it are visible through the
    /// collection view and vice versa.
    pub fn as_map(&self) -> &IndexMap<V::Key, V> {
        &self.map
    }

    pub fn as_map_mut(&mut self) -> &mut IndexMap<V::Key, V> {
        &mut self.map
    }
}

impl<V: Keyed> Default for KeyedCollection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Keyed + PartialEq> PartialEq for KeyedCollection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<V: Keyed> Extend<V> for KeyedCollection<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<V: Keyed> FromIterator<V> for KeyedCollection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<'a, V: Keyed> IntoIterator for &'a KeyedCollection<V> {
    type Item = &'a V;
    type IntoIter = indexmap::map::Values<'a, V::Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.values()
    }
}

impl<V: Keyed> IntoIterator for KeyedCollection<V> {
    type Item = V;
    type IntoIter = indexmap::map::IntoValues<V::Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Entry {
        name: &'static str,
        value: u32,
    }

    impl Keyed for Entry {
        type Key = &'static str;

        fn key(&self) -> &'static str {
            self.name
        }
    }

    #[test]
    fn last_write_wins() {
        let mut entries = KeyedCollection::new();
        entries.push(Entry { name: "a", value: 1 });
        let displaced = entries.push(Entry { name: "a", value: 2 });

        assert_eq!(displaced, Some(Entry { name: "a", value: 1 }));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.as_map().get("a"), Some(&Entry { name: "a", value: 2 }));
    }

    #[test]
    fn preserves_insertion_order() {
        let mut entries = KeyedCollection::new();
        entries.push(Entry { name: "b", value: 1 });
        entries.push(Entry { name: "a", value: 2 });
        entries.push(Entry { name: "c", value: 3 });

        let names: Vec<_> = entries.iter().map(|e| e.name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn overwritten_key_keeps_its_position() {
        let mut entries = KeyedCollection::new();
        entries.push(Entry { name: "b", value: 1 });
        entries.push(Entry { name: "a", value: 2 });
        entries.push(Entry { name: "b", value: 9 });

        let names: Vec<_> = entries.iter().map(|e| (e.name, e.value)).collect();
        assert_eq!(names, [("b", 9), ("a", 2)]);
    }

    #[test]
    fn map_and_collection_views_share_state() {
        let mut entries = KeyedCollection::new();
        entries.push(Entry { name: "a", value: 1 });
        entries.as_map_mut().insert("x", Entry { name: "x", value: 7 });

        assert_eq!(entries.len(), 2);
        assert!(entries.contains_key("x"));

        entries.clear();
        assert!(entries.is_empty());
        assert!(entries.as_map().is_empty());
    }
}
