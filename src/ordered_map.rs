//! Insertion-ordered map with lazily deleted slots
//!
//! Entries live in an append-only vector; a hash index maps each live key to
//! the slot holding its current value. Deleting a key only drops it from the
//! index, and re-setting a key appends a fresh slot, so a slot is live
//! exactly when the index still points at it. Iteration checks every slot
//! against the index and skips the stale ones.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A map that iterates in insertion order
///
/// Setting an existing key moves it to the end of the iteration order.
#[derive(Clone, Debug)]
pub struct OrderedMap<K, V> {
    /// key → index of its live slot in `entries`
    lookup: HashMap<K, usize>,
    /// Append-only; values of stale slots are released eagerly
    entries: Vec<(K, Option<V>)>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty map
    pub fn new() -> Self {
        OrderedMap {
            lookup: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Insert `value` under `key`, placing it last in iteration order
    pub fn set(&mut self, key: K, value: V) {
        self.delete(&key);
        self.lookup.insert(key.clone(), self.entries.len());
        self.entries.push((key, Some(value)));
    }

    /// Get the current value for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.lookup.get(key)?;
        self.entries[index].1.as_ref()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup.contains_key(key)
    }

    /// Forget `key`. The backing slot is left in place.
    pub fn delete<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key);
    }

    /// Forget `key` and hand back its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.lookup.remove(key)?;
        self.entries[index].1.take()
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Iterate live entries in insertion order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            lookup: &self.lookup,
            entries: self.entries.iter().enumerate(),
        }
    }

    /// Consume the map, yielding live values in insertion order
    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.into_iter().map(|(_, value)| value)
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Later duplicates of a key replace earlier ones
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

/// Borrowing iterator over live entries
pub struct Iter<'a, K, V> {
    lookup: &'a HashMap<K, usize>,
    entries: std::iter::Enumerate<std::slice::Iter<'a, (K, Option<V>)>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Hash + Eq,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, (key, value)) in self.entries.by_ref() {
            if self.lookup.get(key) != Some(&index) {
                continue;
            }
            if let Some(value) = value {
                return Some((key, value));
            }
        }
        None
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator over live entries
pub struct IntoIter<K, V> {
    lookup: HashMap<K, usize>,
    entries: std::iter::Enumerate<std::vec::IntoIter<(K, Option<V>)>>,
}

impl<K, V> Iterator for IntoIter<K, V>
where
    K: Hash + Eq,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, (key, value)) in self.entries.by_ref() {
            if self.lookup.get(&key) != Some(&index) {
                continue;
            }
            if let Some(value) = value {
                return Some((key, value));
            }
        }
        None
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            lookup: self.lookup,
            entries: self.entries.into_iter().enumerate(),
        }
    }
}
