//! PI's dense-matrix kernel: identical arithmetic to
//! [`crate::kernel::lm::matrix`], but walks a precomputed [`GateIndices`]
//! table instead of recomputing `scatter_index` for every inner position.

use super::indices::GateIndices;
use crate::math::{Precision, C};

pub fn apply_multi_qubit_op<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    matrix: &[C<P>],
    wires: &[usize],
    inverse: bool,
) {
    let gi = GateIndices::new(wires, n_qubits);
    let dim = gi.dim();
    debug_assert_eq!(matrix.len(), dim * dim);

    let mut scratch = vec![C::new(P::zero(), P::zero()); dim];
    for &outer in &gi.outer {
        for (p, slot) in scratch.iter_mut().enumerate() {
            *slot = buf[gi.full_index(outer, p)];
        }
        for i in 0..dim {
            let mut acc = C::new(P::zero(), P::zero());
            for (j, amp) in scratch.iter().enumerate() {
                let entry = if inverse { matrix[j * dim + i].conj() } else { matrix[i * dim + j] };
                acc = acc + entry * *amp;
            }
            buf[gi.full_index(outer, i)] = acc;
        }
    }
}

pub fn apply_single_qubit_op<P: Precision>(buf: &mut [C<P>], n_qubits: usize, matrix: &[C<P>; 4], wires: &[usize], inverse: bool) {
    apply_multi_qubit_op(buf, n_qubits, matrix.as_slice(), wires, inverse);
}

pub fn apply_two_qubit_op<P: Precision>(buf: &mut [C<P>], n_qubits: usize, matrix: &[C<P>; 16], wires: &[usize], inverse: bool) {
    apply_multi_qubit_op(buf, n_qubits, matrix.as_slice(), wires, inverse);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_memoryless_kernel() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let h = [C::new(s, 0.0), C::new(s, 0.0), C::new(s, 0.0), C::new(-s, 0.0)];
        let mut via_pi = vec![C::<f64>::new(0.3, 0.1), C::new(-0.2, 0.4), C::new(0.1, -0.1), C::new(0.6, 0.0)];
        let mut via_lm = via_pi.clone();
        apply_single_qubit_op(&mut via_pi, 2, &h, &[1], false);
        crate::kernel::lm::matrix::apply_single_qubit_op(&mut via_lm, 2, &h, &[1], false);
        assert_eq!(via_pi, via_lm);
    }
}
