//! # Pool Model
//!
//! A [`Pool`] collects the endpoints of one `/24` network. [`PoolMap`] keeps
//! pools in the order their network was first seen, which is what makes the
//! rendered report deterministic.

use std::collections::HashMap;

use crate::network::endpoint::Endpoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    /// Network key, formatted `a.b.c.0/24`.
    pub network: String,
    pub endpoints: Vec<Endpoint>,
}

impl Pool {
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            endpoints: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// Pools in first-insertion order of their network key.
#[derive(Debug, Default, Clone)]
pub struct PoolMap {
    pools: Vec<Pool>,
    index: HashMap<String, usize>,
}

impl PoolMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `endpoint` to the pool for `network`, creating the pool at
    /// the end of the map if the key is new.
    pub fn insert(&mut self, network: String, endpoint: Endpoint) {
        let idx = match self.index.get(&network) {
            Some(&idx) => idx,
            None => {
                let idx = self.pools.len();
                self.pools.push(Pool::new(network.clone()));
                self.index.insert(network, idx);
                idx
            }
        };

        self.pools[idx].endpoints.push(endpoint);
    }

    pub fn get(&self, network: &str) -> Option<&Pool> {
        self.index.get(network).map(|&idx| &self.pools[idx])
    }

    /// Number of distinct networks.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Total endpoints across every pool.
    pub fn endpoint_count(&self) -> usize {
        self.pools.iter().map(Pool::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pool> {
        self.pools.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pools.iter().map(|pool| pool.network.as_str())
    }
}

impl<'a> IntoIterator for &'a PoolMap {
    type Item = &'a Pool;
    type IntoIter = std::slice::Iter<'a, Pool>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
