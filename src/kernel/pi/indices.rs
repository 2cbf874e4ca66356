//! `GateIndices`: the precomputed index table the PI backend trades memory
//! for. Built once per call from an operand's wire list, it holds the full
//! `2^k` "inner" (operand-local) index template plus every `2^(n-k)`
//! "outer" (external) offset a gather/scatter needs to walk in lexicographic
//! order — the memoryless backend in [`crate::kernel::lm`] derives the same
//! indices on the fly instead of storing them.

use crate::math::parity::scatter_index;

pub struct GateIndices {
    /// `inner[p]` is the local scatter pattern for the `p`-th basis state
    /// of the `2^k`-dimensional operand subspace (always `0..2^k` in order,
    /// kept explicit for symmetry with `outer`).
    pub inner: Vec<usize>,
    /// Every external offset: stepping `outer` through these and adding an
    /// `inner` pattern via [`scatter_index`] reaches one full-buffer index.
    pub outer: Vec<usize>,
    pub wires: Vec<usize>,
    pub n_qubits: usize,
}

impl GateIndices {
    pub fn new(wires: &[usize], n_qubits: usize) -> Self {
        let k = wires.len();
        let dim = 1usize << k;
        let inner = (0..dim).collect();
        let outer = (0..(1usize << n_qubits)).step_by(dim).collect();
        Self { inner, outer, wires: wires.to_vec(), n_qubits }
    }

    /// Full-buffer index for outer offset `outer` and inner pattern `p`.
    #[inline]
    pub fn full_index(&self, outer: usize, p: usize) -> usize {
        scatter_index(outer, self.inner[p], &self.wires, self.n_qubits)
    }

    pub fn dim(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_offsets_count_matches_external_dimension() {
        let gi = GateIndices::new(&[1], 3);
        assert_eq!(gi.outer.len(), 1 << (3 - 1));
        assert_eq!(gi.dim(), 2);
    }

    #[test]
    fn full_index_covers_every_buffer_slot_exactly_once() {
        let n = 3;
        let gi = GateIndices::new(&[0, 2], n);
        let mut seen = vec![false; 1 << n];
        for &outer in &gi.outer {
            for p in 0..gi.dim() {
                let idx = gi.full_index(outer, p);
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
        assert!(seen.into_iter().all(|b| b));
    }
}
