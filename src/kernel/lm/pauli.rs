//! Non-parametric single- and multi-wire gates: pure index permutations or
//! sign flips, no floating-point multiplication beyond Hadamard's `1/√2`.

use crate::math::{
    consts::frac_1_sqrt_2,
    parity::{iter_two_wire, rev_wire_parity, scatter_index},
    Precision, C,
};

pub fn apply_identity<P: Precision>(_buf: &mut [C<P>], _n_qubits: usize, _wires: &[usize], _inverse: bool) {}

pub fn apply_pauli_x<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (i0, i1) = p.indices(k, r);
        buf.swap(i0, i1);
    }
}

pub fn apply_pauli_y<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (i0, i1) = p.indices(k, r);
        // iY|0> = i|1>, iY|1> = -i|0>: swap re/im with one sign flip instead
        // of a full complex multiplication.
        let a = buf[i0];
        let b = buf[i1];
        buf[i0] = C::new(b.im, -b.re);
        buf[i1] = C::new(-a.im, a.re);
    }
}

pub fn apply_pauli_z<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (_i0, i1) = p.indices(k, r);
        buf[i1] = -buf[i1];
    }
}

pub fn apply_hadamard<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    let s = frac_1_sqrt_2::<P>();
    for k in 0..(1usize << (n_qubits - 1)) {
        let (i0, i1) = p.indices(k, r);
        let a = buf[i0];
        let b = buf[i1];
        buf[i0] = (a + b).scale(s);
        buf[i1] = (a - b).scale(s);
    }
}

pub fn apply_s<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool) {
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (_i0, i1) = p.indices(k, r);
        let a = buf[i1];
        buf[i1] = if inverse { C::new(a.im, -a.re) } else { C::new(-a.im, a.re) };
    }
}

pub fn apply_t<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool) {
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    let angle = P::from_f64(std::f64::consts::FRAC_PI_4);
    let angle = if inverse { -angle } else { angle };
    let phase = C::new(angle.cos(), angle.sin());
    for k in 0..(1usize << (n_qubits - 1)) {
        let (_i0, i1) = p.indices(k, r);
        buf[i1] = buf[i1] * phase;
    }
}

pub fn apply_swap<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    for (_i00, i01, i10, _i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        buf.swap(i01, i10);
    }
}

pub fn apply_cnot<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    for (_i00, _i01, i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        buf.swap(i10, i11);
    }
}

pub fn apply_cy<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    for (_i00, _i01, i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        let a = buf[i10];
        let b = buf[i11];
        buf[i10] = C::new(b.im, b.re.neg());
        buf[i11] = C::new(a.im.neg(), a.re);
    }
}

pub fn apply_cz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    for (_i00, _i01, _i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        buf[i11] = -buf[i11];
    }
}

/// Multi-wire controlled permutation shared by Toffoli and CSWAP: every
/// basis state with all control bits set has its two "active" local
/// patterns swapped; everything else is untouched.
fn controlled_permutation<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    active_lo: usize,
    active_hi: usize,
) {
    let k = wires.len();
    let dim = 1usize << k;
    for outer in (0..(1usize << n_qubits)).step_by(dim) {
        let i_lo = scatter_index(outer, active_lo, wires, n_qubits);
        let i_hi = scatter_index(outer, active_hi, wires, n_qubits);
        buf.swap(i_lo, i_hi);
    }
}

pub fn apply_toffoli<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    // wires = [control0, control1, target]; both controls set, target toggled.
    controlled_permutation(buf, n_qubits, wires, 0b110, 0b111);
}

pub fn apply_cswap<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], _inverse: bool) {
    // wires = [control, target0, target1]; control set, targets swapped.
    controlled_permutation(buf, n_qubits, wires, 0b101, 0b110);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn psi(n: usize) -> Vec<C<f64>> {
        vec![C::new(0.0, 0.0); 1 << n]
    }

    #[test]
    fn hadamard_on_zero_state() {
        let mut buf = psi(1);
        buf[0] = C::new(1.0, 0.0);
        apply_hadamard(&mut buf, 1, &[0], false);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert!((buf[0].re - s).abs() < 1e-12);
        assert!((buf[1].re - s).abs() < 1e-12);
    }

    #[test]
    fn cnot_flips_target_when_control_set() {
        let mut buf = psi(2);
        buf[0] = C::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        buf[2] = C::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        apply_cnot(&mut buf, 2, &[0, 1], false);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert!((buf[0].re - s).abs() < 1e-12);
        assert!((buf[3].re - s).abs() < 1e-12);
        assert!(buf[1].norm() < 1e-12);
        assert!(buf[2].norm() < 1e-12);
    }

    #[test]
    fn cz_negates_only_both_set_amplitude() {
        let mut buf = vec![C::new(0.5, 0.0); 4];
        apply_cz(&mut buf, 2, &[0, 1], false);
        assert_eq!(buf, vec![C::new(0.5, 0.0), C::new(0.5, 0.0), C::new(0.5, 0.0), C::new(-0.5, 0.0)]);
    }

    #[test]
    fn toffoli_maps_111_to_110() {
        let mut buf = psi(3);
        buf[7] = C::new(1.0, 0.0);
        apply_toffoli(&mut buf, 3, &[0, 1, 2], false);
        assert_eq!(buf[6], C::new(1.0, 0.0));
        assert_eq!(buf[7], C::new(0.0, 0.0));
    }

    #[test]
    fn pauli_x_is_involution() {
        let mut buf = psi(2);
        buf[1] = C::new(0.3, 0.4);
        buf[3] = C::new(0.1, -0.2);
        let original = buf.clone();
        apply_pauli_x(&mut buf, 2, &[1], false);
        apply_pauli_x(&mut buf, 2, &[1], false);
        assert_eq!(buf, original);
    }

    #[test]
    fn pauli_y_squares_to_identity() {
        let mut buf = psi(1);
        buf[0] = C::new(0.6, 0.2);
        buf[1] = C::new(-0.1, 0.3);
        let original = buf.clone();
        apply_pauli_y(&mut buf, 1, &[0], false);
        apply_pauli_y(&mut buf, 1, &[0], false);
        for (a, b) in buf.iter().zip(&original) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!((a.im - b.im).abs() < 1e-12);
        }
    }
}
