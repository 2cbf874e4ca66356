//! ParallelLM: the single-wire subset of the memoryless backend, fanned out
//! across a rayon thread pool. A single-wire operation never touches two
//! amplitudes outside the same `2^(r+1)`-sized contiguous block (`r` the
//! reverse-wire index), so the buffer splits into disjoint, lock-free
//! chunks that `rayon::par_chunks_mut` can hand to separate workers without
//! any unsafe aliasing.

use rayon::prelude::*;

use crate::math::{consts::frac_1_sqrt_2, parity::reverse_wire, Precision, C};

fn block_and_half(n_qubits: usize, wire: usize) -> (usize, usize) {
    let r = reverse_wire(wire, n_qubits);
    (1usize << (r + 1), 1usize << r)
}

/// Splits `buf` into the `2^(r+1)`-sized chunks a single-wire gate acts on
/// and hands each `(lower_half, upper_half)` pair to `f` in parallel.
fn for_each_block<P, F>(buf: &mut [C<P>], n_qubits: usize, wire: usize, f: F)
where
    P: Precision,
    F: Fn(&mut [C<P>], &mut [C<P>]) + Sync + Send,
{
    let (block, half) = block_and_half(n_qubits, wire);
    buf.par_chunks_mut(block).for_each(|chunk| {
        let (lower, upper) = chunk.split_at_mut(half);
        f(lower, upper);
    });
}

pub fn apply_pauli_x<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    for_each_block(buf, n_qubits, wires[0], |lower, upper| {
        for (a, b) in lower.iter_mut().zip(upper.iter_mut()) {
            std::mem::swap(a, b);
        }
    });
}

pub fn apply_pauli_y<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    for_each_block(buf, n_qubits, wires[0], |lower, upper| {
        for (a, b) in lower.iter_mut().zip(upper.iter_mut()) {
            let (av, bv) = (*a, *b);
            *a = C::new(bv.im, -bv.re);
            *b = C::new(-av.im, av.re);
        }
    });
}

pub fn apply_pauli_z<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    for_each_block(buf, n_qubits, wires[0], |_lower, upper| {
        for b in upper.iter_mut() {
            *b = -*b;
        }
    });
}

pub fn apply_hadamard<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    let s = frac_1_sqrt_2::<P>();
    for_each_block(buf, n_qubits, wires[0], |lower, upper| {
        for (a, b) in lower.iter_mut().zip(upper.iter_mut()) {
            let (av, bv) = (*a, *b);
            *a = (av + bv).scale(s);
            *b = (av - bv).scale(s);
        }
    });
}

pub fn apply_phase_shift<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, phi: P) {
    let phi = if inverse { -phi } else { phi };
    let phase = C::new(phi.cos(), phi.sin());
    for_each_block(buf, n_qubits, wires[0], |_lower, upper| {
        for b in upper.iter_mut() {
            *b = *b * phase;
        }
    });
}

pub fn apply_rz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    let two = P::one() + P::one();
    let h = theta / two;
    let h = if inverse { -h } else { h };
    let (lo, hi) = (C::new(h.cos(), -h.sin()), C::new(h.cos(), h.sin()));
    for_each_block(buf, n_qubits, wires[0], |lower, upper| {
        for a in lower.iter_mut() {
            *a = *a * lo;
        }
        for b in upper.iter_mut() {
            *b = *b * hi;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn psi(n: usize) -> Vec<C<f64>> {
        vec![C::new(0.0, 0.0); 1 << n]
    }

    #[test]
    fn pauli_x_matches_scalar_kernel() {
        let mut parallel = psi(4);
        for (i, amp) in parallel.iter_mut().enumerate() {
            *amp = C::new(0.1 * i as f64, -0.05 * i as f64);
        }
        let mut scalar = parallel.clone();
        apply_pauli_x(&mut parallel, 4, &[2], false);
        super::super::pauli::apply_pauli_x(&mut scalar, 4, &[2], false);
        assert_eq!(parallel, scalar);
    }

    #[test]
    fn hadamard_matches_scalar_kernel_on_every_wire() {
        for wire in 0..3 {
            let mut parallel = psi(3);
            for (i, amp) in parallel.iter_mut().enumerate() {
                *amp = C::new(0.2 * i as f64 + 0.1, 0.1 * i as f64);
            }
            let mut scalar = parallel.clone();
            apply_hadamard(&mut parallel, 3, &[wire], false);
            super::super::pauli::apply_hadamard(&mut scalar, 3, &[wire], false);
            for (a, b) in parallel.iter().zip(&scalar) {
                assert!((a.re - b.re).abs() < 1e-12);
                assert!((a.im - b.im).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn rz_matches_scalar_kernel() {
        let mut parallel = psi(3);
        for (i, amp) in parallel.iter_mut().enumerate() {
            *amp = C::new(0.3 * i as f64, 0.0);
        }
        let mut scalar = parallel.clone();
        apply_rz(&mut parallel, 3, &[1], false, 0.42);
        super::super::rotation::apply_rz(&mut scalar, 3, &[1], false, 0.42);
        for (a, b) in parallel.iter().zip(&scalar) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!((a.im - b.im).abs() < 1e-12);
        }
    }
}
