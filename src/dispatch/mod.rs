//! Process-wide kernel-selection registry: a priority-ranked,
//! interval-indexed map from `(Operation, Threading, CPUMemoryModel)` to a
//! `BackendTag`, memoized by a small FIFO cache.

mod cache;
mod policy;
mod registry;

pub use registry::kernel_map;

use std::sync::Mutex;

use lazy_static::lazy_static;

use crate::{
    error::{CoreError, CoreResult},
    ops::{BackendTag, Operation},
};

/// Whether a kernel call may fan the outer loop out across worker threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Threading {
    SingleThread,
    MultiThread,
}

/// The minimal guaranteed alignment of the caller's amplitude buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CPUMemoryModel {
    Unaligned,
    Aligned256,
    Aligned512,
}

/// `(threading, memory_model)` packed as `dispatch_key = (threading_index
/// << 16) | memory_model_index`, per the stable wire format external
/// drivers may serialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DispatchKey {
    pub threading: Threading,
    pub memory_model: CPUMemoryModel,
}

impl DispatchKey {
    pub fn new(threading: Threading, memory_model: CPUMemoryModel) -> Self {
        Self { threading, memory_model }
    }

    pub fn packed(self) -> u32 {
        let t = match self.threading {
            Threading::SingleThread => 0u32,
            Threading::MultiThread => 1,
        };
        let m = match self.memory_model {
            CPUMemoryModel::Unaligned => 0u32,
            CPUMemoryModel::Aligned256 => 1,
            CPUMemoryModel::Aligned512 => 2,
        };
        (t << 16) | m
    }

    fn all() -> [DispatchKey; 6] {
        use CPUMemoryModel::*;
        use Threading::*;
        [
            DispatchKey::new(SingleThread, Unaligned),
            DispatchKey::new(SingleThread, Aligned256),
            DispatchKey::new(SingleThread, Aligned512),
            DispatchKey::new(MultiThread, Unaligned),
            DispatchKey::new(MultiThread, Aligned256),
            DispatchKey::new(MultiThread, Aligned512),
        ]
    }
}

/// Which backends each memory model permits. SIMD backends are restricted
/// to their matching alignment class; LM and PI are always permitted.
fn is_allowed(memory_model: CPUMemoryModel, kernel: BackendTag) -> bool {
    match (memory_model, kernel) {
        (_, BackendTag::LM) | (_, BackendTag::PI) | (_, BackendTag::ParallelLM) => true,
        (CPUMemoryModel::Aligned256, BackendTag::AVX2) => true,
        (CPUMemoryModel::Aligned512, BackendTag::AVX2) => true,
        (CPUMemoryModel::Aligned512, BackendTag::AVX512) => true,
        _ => false,
    }
}

/// An inclusive, non-empty integer interval of qubit counts `[lo, hi]`.
/// `hi = usize::MAX` represents the open-ended `[lo, ∞)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DispatchInterval {
    pub lo: usize,
    pub hi: usize,
}

impl DispatchInterval {
    pub fn new(lo: usize, hi: usize) -> Self {
        assert!(lo <= hi, "empty dispatch interval [{lo}, {hi}]");
        Self { lo, hi }
    }

    pub fn unbounded_from(lo: usize) -> Self {
        Self { lo, hi: usize::MAX }
    }

    pub fn contains(&self, n_qubits: usize) -> bool {
        self.lo <= n_qubits && n_qubits <= self.hi
    }

    fn overlaps(&self, other: &DispatchInterval) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

/// One entry of a priority set: the backend chosen for `interval`, at
/// `priority`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchElement {
    pub priority: u32,
    pub interval: DispatchInterval,
    pub kernel: BackendTag,
}

/// Per-`(operation, dispatch key)` collection of dispatch elements,
/// maintained in decreasing priority order. Within one priority level all
/// intervals are pairwise disjoint.
#[derive(Clone, Debug, Default)]
pub struct PrioritySet {
    elements: Vec<DispatchElement>,
}

impl PrioritySet {
    fn insert(&mut self, element: DispatchElement) -> CoreResult {
        for existing in &self.elements {
            if existing.priority == element.priority
                && existing.interval.overlaps(&element.interval)
            {
                return Err(CoreError::IntervalConflict {
                    priority: element.priority,
                    new: element.interval,
                });
            }
        }
        self.elements.push(element);
        self.elements.sort_by(|a, b| b.priority.cmp(&a.priority));
        Ok(())
    }

    fn remove_priority(&mut self, priority: u32) -> CoreResult {
        let before = self.elements.len();
        self.elements.retain(|e| e.priority != priority);
        if self.elements.len() == before {
            return Err(CoreError::KeyNotFound {
                threading: Threading::SingleThread,
                memory_model: CPUMemoryModel::Unaligned,
                priority,
            });
        }
        Ok(())
    }

    fn resolve(&self, n_qubits: usize) -> Option<BackendTag> {
        self.elements
            .iter()
            .find(|e| e.interval.contains(n_qubits))
            .map(|e| e.kernel)
    }
}

pub(crate) struct Registry {
    table: std::collections::HashMap<(Operation, DispatchKey), PrioritySet>,
    cache: cache::KernelMapCache,
}

impl Registry {
    fn new() -> Self {
        let mut registry = Self { table: Default::default(), cache: cache::KernelMapCache::new() };
        policy::install_defaults(&mut registry);
        registry
    }

    fn priority_set_mut(&mut self, op: Operation, key: DispatchKey) -> &mut PrioritySet {
        self.table.entry((op, key)).or_default()
    }

    fn priority_set(&self, op: Operation, key: DispatchKey) -> Option<&PrioritySet> {
        self.table.get(&(op, key))
    }
}

lazy_static! {
    static ref REGISTRY: Mutex<Registry> = Mutex::new(Registry::new());
}

fn assign_one(
    op: Operation,
    key: DispatchKey,
    priority: u32,
    interval: DispatchInterval,
    kernel: BackendTag,
) -> CoreResult {
    if !is_allowed(key.memory_model, kernel) {
        return Err(CoreError::KernelNotAllowed { kernel, memory_model: key.memory_model });
    }
    let mut registry = REGISTRY.lock().unwrap();
    registry
        .priority_set_mut(op, key)
        .insert(DispatchElement { priority, interval, kernel })?;
    registry.cache.clear();
    Ok(())
}

/// Assigns a backend to an operation at an exact `(threading, memory_model)`
/// and priority.
pub fn assign(
    op: impl Into<Operation>,
    threading: Threading,
    memory_model: CPUMemoryModel,
    priority: u32,
    interval: DispatchInterval,
    kernel: BackendTag,
) -> CoreResult {
    assign_one(op.into(), DispatchKey::new(threading, memory_model), priority, interval, kernel)
}

/// Shorthand: applies to every `Threading` value at priority 1.
pub fn assign_all_threading(
    op: impl Into<Operation>,
    memory_model: CPUMemoryModel,
    interval: DispatchInterval,
    kernel: BackendTag,
) -> CoreResult {
    let op = op.into();
    for threading in [Threading::SingleThread, Threading::MultiThread] {
        assign_one(op, DispatchKey::new(threading, memory_model), 1, interval, kernel)?;
    }
    Ok(())
}

/// Shorthand: applies to every `CPUMemoryModel` value at priority 2.
pub fn assign_all_memory_models(
    op: impl Into<Operation>,
    threading: Threading,
    interval: DispatchInterval,
    kernel: BackendTag,
) -> CoreResult {
    let op = op.into();
    for memory_model in [CPUMemoryModel::Unaligned, CPUMemoryModel::Aligned256, CPUMemoryModel::Aligned512] {
        assign_one(op, DispatchKey::new(threading, memory_model), 2, interval, kernel)?;
    }
    Ok(())
}

/// Shorthand: applies to every `(Threading, CPUMemoryModel)` pair at
/// priority 0.
pub fn assign_all(op: impl Into<Operation>, interval: DispatchInterval, kernel: BackendTag) -> CoreResult {
    let op = op.into();
    for key in DispatchKey::all() {
        assign_one(op, key, 0, interval, kernel)?;
    }
    Ok(())
}

/// Erases every dispatch element at an exact `(threading, memory_model,
/// priority)`.
pub fn remove(
    op: impl Into<Operation>,
    threading: Threading,
    memory_model: CPUMemoryModel,
    priority: u32,
) -> CoreResult {
    let op = op.into();
    let key = DispatchKey::new(threading, memory_model);
    let mut registry = REGISTRY.lock().unwrap();
    let result = match registry.table.get_mut(&(op, key)) {
        Some(set) => set.remove_priority(priority),
        None => Err(CoreError::KeyNotFound { threading, memory_model, priority }),
    };
    if result.is_ok() {
        registry.cache.clear();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::GateOp;

    #[test]
    fn dispatch_key_packs_distinct_values() {
        let a = DispatchKey::new(Threading::SingleThread, CPUMemoryModel::Unaligned).packed();
        let b = DispatchKey::new(Threading::MultiThread, CPUMemoryModel::Aligned512).packed();
        assert_ne!(a, b);
    }

    #[test]
    fn priority_set_resolves_highest_priority_first() {
        let mut set = PrioritySet::default();
        set.insert(DispatchElement {
            priority: 0,
            interval: DispatchInterval::unbounded_from(0),
            kernel: BackendTag::LM,
        })
        .unwrap();
        set.insert(DispatchElement {
            priority: 5,
            interval: DispatchInterval::new(3, 8),
            kernel: BackendTag::AVX512,
        })
        .unwrap();
        assert_eq!(set.resolve(2), Some(BackendTag::LM));
        assert_eq!(set.resolve(4), Some(BackendTag::AVX512));
    }

    #[test]
    fn overlapping_same_priority_interval_conflicts() {
        let mut set = PrioritySet::default();
        set.insert(DispatchElement {
            priority: 1,
            interval: DispatchInterval::new(0, 5),
            kernel: BackendTag::LM,
        })
        .unwrap();
        let err = set
            .insert(DispatchElement {
                priority: 1,
                interval: DispatchInterval::new(4, 10),
                kernel: BackendTag::PI,
            })
            .unwrap_err();
        assert!(matches!(err, CoreError::IntervalConflict { .. }));
    }

    #[test]
    fn assign_rejects_unsupported_alignment() {
        let err = assign(
            GateOp::Hadamard,
            Threading::SingleThread,
            CPUMemoryModel::Unaligned,
            9,
            DispatchInterval::new(0, 4),
            BackendTag::AVX512,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::KernelNotAllowed { .. }));
    }
}
