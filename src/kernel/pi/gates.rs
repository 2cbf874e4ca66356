//! The gate-specific PI kernels: the subset of gates favored by the default
//! dispatch policy (see `crate::dispatch::policy`) gets a precomputed-index
//! kernel of its own rather than routing through the generic matrix path.

use super::indices::GateIndices;
use crate::math::{consts::frac_1_sqrt_2, Precision, C};

pub fn apply_hadamard<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    let gi = GateIndices::new(wires, n_qubits);
    let s = frac_1_sqrt_2::<P>();
    for &outer in &gi.outer {
        let i0 = gi.full_index(outer, 0);
        let i1 = gi.full_index(outer, 1);
        let a = buf[i0];
        let b = buf[i1];
        buf[i0] = (a + b).scale(s);
        buf[i1] = (a - b).scale(s);
    }
}

pub fn apply_swap<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    let gi = GateIndices::new(wires, n_qubits);
    for &outer in &gi.outer {
        let i01 = gi.full_index(outer, 0b01);
        let i10 = gi.full_index(outer, 0b10);
        buf.swap(i01, i10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hadamard_matches_the_memoryless_kernel() {
        let mut via_pi = vec![C::<f64>::new(1.0, 0.0), C::new(0.0, 0.0)];
        let mut via_lm = via_pi.clone();
        apply_hadamard(&mut via_pi, 1, &[0], false);
        crate::kernel::lm::pauli::apply_hadamard(&mut via_lm, 1, &[0], false);
        for (a, b) in via_pi.iter().zip(&via_lm) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!((a.im - b.im).abs() < 1e-12);
        }
    }

    #[test]
    fn swap_exchanges_the_mixed_amplitudes() {
        let mut buf = vec![C::<f64>::new(1.0, 0.0), C::new(2.0, 0.0), C::new(3.0, 0.0), C::new(4.0, 0.0)];
        apply_swap(&mut buf, 2, &[0, 1], false);
        assert_eq!(buf, vec![C::new(1.0, 0.0), C::new(3.0, 0.0), C::new(2.0, 0.0), C::new(4.0, 0.0)]);
    }
}
