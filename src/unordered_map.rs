//! Hash map wrapper with the two lookups of a subscript operator: one that
//! inserts a default on a miss and one that reports the miss.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Index;

use crate::error::ContainerError;

#[derive(Debug)]
pub struct UnorderedMap<K, V> {
    inner: HashMap<K, V>,
}

impl<K: Eq + Hash, V> UnorderedMap<K, V> {
    pub fn new() -> Self {
        UnorderedMap {
            inner: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Returns the value for `key`, inserting `V::default()` first if absent.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.inner.entry(key).or_default()
    }

    /// Read-only lookup; a missing key is `OutOfRange` and nothing is inserted.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, ContainerError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.inner
            .get(key)
            .ok_or_else(|| ContainerError::missing_key(key))
    }
}

impl<K: Eq + Hash, V> Default for UnorderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, Q, V> Index<&Q> for UnorderedMap<K, V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        &self.inner[key]
    }
}
