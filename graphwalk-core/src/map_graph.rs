//! Map-shaped graphs: `key -> ordered neighbor keys`.
//!
//! A key that appears only as a neighbor (never as a map key) is an
//! undeclared node. The walk can step onto it but never marks or expands it.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::common::GraphTraversal;

/// What the traversal engine needs from a key-indexed adjacency map.
pub trait AdjacencyMap {
    type Key: Eq + Hash;

    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Neighbor keys of a declared key, `None` for undeclared keys.
    fn neighbor_keys(&self, key: &Self::Key) -> Option<&[Self::Key]>;

    /// The map's own copy of `key`, if declared.
    fn declared_key(&self, key: &Self::Key) -> Option<&Self::Key>;

    fn keys(&self) -> impl Iterator<Item = &Self::Key> + '_;

    fn key_count(&self) -> usize;
}

impl<K, S> AdjacencyMap for HashMap<K, Vec<K>, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn neighbor_keys(&self, key: &K) -> Option<&[K]> {
        self.get(key).map(Vec::as_slice)
    }

    fn declared_key(&self, key: &K) -> Option<&K> {
        self.get_key_value(key).map(|(k, _)| k)
    }

    fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        HashMap::keys(self)
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}

impl<K> AdjacencyMap for BTreeMap<K, Vec<K>>
where
    K: Ord + Hash,
{
    type Key = K;

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn neighbor_keys(&self, key: &K) -> Option<&[K]> {
        self.get(key).map(Vec::as_slice)
    }

    fn declared_key(&self, key: &K) -> Option<&K> {
        self.get_key_value(key).map(|(k, _)| k)
    }

    fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        BTreeMap::keys(self)
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}

/// Borrowed view of an [`AdjacencyMap`] that the traversal engine can walk.
///
/// Nodes are `&K`, so visited membership is key equality.
pub struct MapGraph<'g, M: ?Sized> {
    map: &'g M,
}

impl<M: ?Sized> Clone for MapGraph<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for MapGraph<'_, M> {}

impl<'g, M: AdjacencyMap + ?Sized> MapGraph<'g, M> {
    pub fn new(map: &'g M) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &'g M {
        self.map
    }
}

impl<'g, M> GraphTraversal for MapGraph<'g, M>
where
    M: AdjacencyMap + ?Sized,
    M::Key: 'g,
{
    type Node = &'g M::Key;

    fn neighbors(&self, node: &'g M::Key) -> Vec<&'g M::Key> {
        let map: &'g M = self.map;
        map.neighbor_keys(node)
            .map(|keys| keys.iter().collect())
            .unwrap_or_default()
    }

    fn contains_node(&self, node: &'g M::Key) -> bool {
        self.map.contains_key(node)
    }
}
