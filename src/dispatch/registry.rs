//! The `kernel_map` query: resolves a `BackendTag` for every known
//! operation at a given `(n_qubits, threading, memory_model)`, consulting
//! (and populating) the bounded cache.

use super::{cache::KernelMap, CPUMemoryModel, DispatchKey, Threading, REGISTRY};
use crate::{
    error::{CoreError, CoreResult},
    ops::all_operations,
};

/// Resolves the backend chosen for every operation at `n_qubits` under the
/// given dispatch key. Memoized: repeated calls with the same arguments
/// return the cached map until the next `assign`/`remove` invalidates it.
pub fn kernel_map(n_qubits: usize, threading: Threading, memory_model: CPUMemoryModel) -> CoreResult<KernelMap> {
    let key = DispatchKey::new(threading, memory_model);
    let mut registry = REGISTRY.lock().unwrap();

    if let Some(cached) = registry.cache.get(n_qubits, key) {
        return Ok(cached.clone());
    }

    let mut map = KernelMap::new();
    for op in all_operations() {
        let kernel = registry
            .priority_set(op, key)
            .and_then(|set| set.resolve(n_qubits))
            .ok_or(CoreError::NoKernelForQubitCount { n_qubits })?;
        map.insert(op, kernel);
    }

    registry.cache.insert(n_qubits, key, map.clone());
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dispatch::{assign, DispatchInterval},
        ops::{BackendTag, GateOp, Operation},
    };

    #[test]
    fn default_policy_falls_back_to_lm_everywhere() {
        let map = kernel_map(5, Threading::SingleThread, CPUMemoryModel::Unaligned).unwrap();
        assert_eq!(map.get(&Operation::Gate(GateOp::PauliX)), Some(&BackendTag::LM));
    }

    #[test]
    fn override_is_visible_only_within_its_interval() {
        assign(
            GateOp::PauliZ,
            Threading::SingleThread,
            CPUMemoryModel::Aligned512,
            7,
            DispatchInterval::new(3, usize::MAX),
            BackendTag::AVX512,
        )
        .unwrap();

        let low = kernel_map(2, Threading::SingleThread, CPUMemoryModel::Aligned512).unwrap();
        let high = kernel_map(4, Threading::SingleThread, CPUMemoryModel::Aligned512).unwrap();
        assert_eq!(low.get(&Operation::Gate(GateOp::PauliZ)), Some(&BackendTag::LM));
        assert_eq!(high.get(&Operation::Gate(GateOp::PauliZ)), Some(&BackendTag::AVX512));
    }
}
