//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for the DP cache.
///
/// # Contract
///
/// - `get` returns `None` for an index that was never stored
/// - `get_or_insert` only calls `compute` when the index is not stored yet
pub trait Backend<I, K> {
    fn get(&self, index: &I) -> Option<&K>;

    fn get_or_insert(&mut self, index: I, compute: impl FnOnce() -> K) -> &K;
}

/// A Vec-based backend for usize indices.
///
/// Efficient for dense indices starting from 0. The Vec grows to fit new indices.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index).and_then(Option::as_ref)
    }

    fn get_or_insert(&mut self, index: usize, compute: impl FnOnce() -> K) -> &K {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index].get_or_insert_with(compute)
    }
}

/// A HashMap-based backend for sparse or non-integer indices.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert(&mut self, index: I, compute: impl FnOnce() -> K) -> &K {
        self.data.entry(index).or_insert_with(compute)
    }
}
