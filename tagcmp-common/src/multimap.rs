//! Insertion-ordered multi-map
//!
//! Maps each key to a growable bucket of values. The bucket decides what
//! "adding" means: an [`IndexSet`] collapses duplicates, a [`Vec`] keeps them.
//! Keys and values both iterate in the order they were first inserted, which
//! keeps rendered reports reproducible.

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::hash::Hash;
use std::marker::PhantomData;

/// Value container held under each multi-map key
pub trait Bucket<V>: Default {
    /// Add a value to the bucket
    fn add(&mut self, value: V);

    /// Number of values currently held
    fn count(&self) -> usize;
}

impl<V: Hash + Eq> Bucket<V> for IndexSet<V> {
    fn add(&mut self, value: V) {
        self.insert(value);
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<V> Bucket<V> for Vec<V> {
    fn add(&mut self, value: V) {
        self.push(value);
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// Key → bucket mapping that creates buckets on first insert
#[derive(Debug, Clone)]
pub struct MultiMap<K, V, B = IndexSet<V>> {
    entries: IndexMap<K, B>,
    _value: PhantomData<V>,
}

/// Multi-map whose buckets are insertion-ordered sets
pub type SetMultiMap<K, V> = MultiMap<K, V, IndexSet<V>>;

/// Multi-map whose buckets are lists (duplicates kept)
pub type ListMultiMap<K, V> = MultiMap<K, V, Vec<V>>;

impl<K, V, B> Default for MultiMap<K, V, B> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            _value: PhantomData,
        }
    }
}

impl<K: Hash + Eq, V, B: Bucket<V>> MultiMap<K, V, B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the bucket for `key`, creating the bucket if needed
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().add(value);
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&B>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of values held across all buckets
    pub fn value_count(&self) -> usize {
        self.entries.values().map(<B as Bucket<V>>::count).sum()
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, B> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, K, B> {
        self.entries.keys()
    }
}

/// Key order matters for equality; bucket equality is the bucket's own.
impl<K: PartialEq, V, B: PartialEq> PartialEq for MultiMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<'a, K, V, B> IntoIterator for &'a MultiMap<K, V, B> {
    type Item = (&'a K, &'a B);
    type IntoIter = indexmap::map::Iter<'a, K, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Serialize, V, B: Serialize> Serialize for MultiMap<K, V, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
