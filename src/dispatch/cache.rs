//! Bounded, FIFO-evicted memoization of resolved kernel maps.

use std::collections::HashMap;

use super::DispatchKey;
use crate::ops::{BackendTag, Operation};

const CAPACITY: usize = 16;

pub type KernelMap = HashMap<Operation, BackendTag>;

#[derive(Default)]
pub struct KernelMapCache {
    entries: HashMap<(usize, DispatchKey), KernelMap>,
    insertion_order: std::collections::VecDeque<(usize, DispatchKey)>,
}

impl KernelMapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, n_qubits: usize, key: DispatchKey) -> Option<&KernelMap> {
        self.entries.get(&(n_qubits, key))
    }

    pub fn insert(&mut self, n_qubits: usize, key: DispatchKey, map: KernelMap) {
        let cache_key = (n_qubits, key);
        if self.entries.insert(cache_key, map).is_some() {
            return;
        }
        self.insertion_order.push_back(cache_key);
        if self.insertion_order.len() > CAPACITY {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dispatch::{CPUMemoryModel, Threading},
        ops::GateOp,
    };

    fn key() -> DispatchKey {
        DispatchKey::new(Threading::SingleThread, CPUMemoryModel::Unaligned)
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut cache = KernelMapCache::new();
        for n in 0..CAPACITY + 4 {
            let mut map = KernelMap::new();
            map.insert(Operation::Gate(GateOp::PauliX), BackendTag::LM);
            cache.insert(n, key(), map);
        }
        assert_eq!(cache.len(), CAPACITY);
        assert!(cache.get(0, key()).is_none());
        assert!(cache.get(CAPACITY + 3, key()).is_some());
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = KernelMapCache::new();
        cache.insert(0, key(), KernelMap::new());
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
