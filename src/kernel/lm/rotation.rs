//! Parameterized single-wire rotations and their controlled variants.

use crate::math::{
    parity::{iter_two_wire, rev_wire_parity},
    Precision, C,
};

fn half<P: Precision>(theta: P) -> P {
    theta / (P::one() + P::one())
}

pub fn apply_rx<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    let theta = if inverse { -theta } else { theta };
    let (c, s) = (half(theta).cos(), half(theta).sin());
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (i0, i1) = p.indices(k, r);
        let a = buf[i0];
        let b = buf[i1];
        buf[i0] = a.scale(c) + C::new(b.im, -b.re).scale(s);
        buf[i1] = C::new(a.im, -a.re).scale(s) + b.scale(c);
    }
}

pub fn apply_ry<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    let theta = if inverse { -theta } else { theta };
    let (c, s) = (half(theta).cos(), half(theta).sin());
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (i0, i1) = p.indices(k, r);
        let a = buf[i0];
        let b = buf[i1];
        buf[i0] = a.scale(c) - b.scale(s);
        buf[i1] = a.scale(s) + b.scale(c);
    }
}

pub fn apply_rz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    let theta = if inverse { -theta } else { theta };
    let h = half(theta);
    let shift0 = C::new(h.cos(), -h.sin());
    let shift1 = C::new(h.cos(), h.sin());
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (i0, i1) = p.indices(k, r);
        buf[i0] = buf[i0] * shift0;
        buf[i1] = buf[i1] * shift1;
    }
}

pub fn apply_phase_shift<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    let theta = if inverse { -theta } else { theta };
    let phase = C::new(theta.cos(), theta.sin());
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (_i0, i1) = p.indices(k, r);
        buf[i1] = buf[i1] * phase;
    }
}

/// `Rot(phi, theta, omega)`'s compose matrix, shared by the uncontrolled
/// and controlled (`CRot`) kernels. `inverse` negates and reverses the
/// angle triple per the adjoint convention.
fn rot_matrix<P: Precision>(phi: P, theta: P, omega: P, inverse: bool) -> [C<P>; 4] {
    let (phi, theta, omega) = if inverse { (-omega, -theta, -phi) } else { (phi, theta, omega) };
    let (c, s) = (half(theta).cos(), half(theta).sin());
    let plus = (phi + omega) / (P::one() + P::one());
    let minus = (phi - omega) / (P::one() + P::one());
    [
        C::new(plus.cos(), -plus.sin()).scale(c),
        -C::new(minus.cos(), minus.sin()).scale(s),
        C::new(minus.cos(), -minus.sin()).scale(s),
        C::new(plus.cos(), plus.sin()).scale(c),
    ]
}

pub fn apply_rot<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    inverse: bool,
    phi: P,
    theta: P,
    omega: P,
) {
    let m = rot_matrix(phi, theta, omega, inverse);
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (i0, i1) = p.indices(k, r);
        let a = buf[i0];
        let b = buf[i1];
        buf[i0] = m[0] * a + m[1] * b;
        buf[i1] = m[2] * a + m[3] * b;
    }
}

pub fn apply_crx<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    let theta = if inverse { -theta } else { theta };
    let (c, s) = (half(theta).cos(), half(theta).sin());
    for (_i00, _i01, i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        let a = buf[i10];
        let b = buf[i11];
        buf[i10] = a.scale(c) + C::new(b.im, -b.re).scale(s);
        buf[i11] = C::new(a.im, -a.re).scale(s) + b.scale(c);
    }
}

pub fn apply_cry<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    let theta = if inverse { -theta } else { theta };
    let (c, s) = (half(theta).cos(), half(theta).sin());
    for (_i00, _i01, i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        let a = buf[i10];
        let b = buf[i11];
        buf[i10] = a.scale(c) - b.scale(s);
        buf[i11] = a.scale(s) + b.scale(c);
    }
}

pub fn apply_crz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    let theta = if inverse { -theta } else { theta };
    let h = half(theta);
    let shift0 = C::new(h.cos(), -h.sin());
    let shift1 = C::new(h.cos(), h.sin());
    for (_i00, _i01, i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        buf[i10] = buf[i10] * shift0;
        buf[i11] = buf[i11] * shift1;
    }
}

pub fn apply_controlled_phase_shift<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    inverse: bool,
    theta: P,
) {
    let theta = if inverse { -theta } else { theta };
    let phase = C::new(theta.cos(), theta.sin());
    for (_i00, _i01, _i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        buf[i11] = buf[i11] * phase;
    }
}

pub fn apply_crot<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    inverse: bool,
    phi: P,
    theta: P,
    omega: P,
) {
    let m = rot_matrix(phi, theta, omega, inverse);
    for (_i00, _i01, i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        let a = buf[i10];
        let b = buf[i11];
        buf[i10] = m[0] * a + m[1] * b;
        buf[i11] = m[2] * a + m[3] * b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rz_then_its_inverse_is_identity() {
        let mut buf = vec![C::<f64>::new(0.6, 0.1), C::new(-0.2, 0.3)];
        let original = buf.clone();
        apply_rz(&mut buf, 1, &[0], false, 0.77);
        apply_rz(&mut buf, 1, &[0], true, 0.77);
        for (a, b) in buf.iter().zip(&original) {
            assert!((a.re - b.re).abs() < 1e-10);
            assert!((a.im - b.im).abs() < 1e-10);
        }
    }

    #[test]
    fn rx_pi_matches_pauli_x_up_to_global_phase() {
        let mut buf = vec![C::<f64>::new(1.0, 0.0), C::new(0.0, 0.0)];
        apply_rx(&mut buf, 1, &[0], false, std::f64::consts::PI);
        // RX(pi)|0> = -i|1>
        assert!(buf[0].norm() < 1e-10);
        assert!((buf[1].im + 1.0).abs() < 1e-10);
    }

    #[test]
    fn crz_leaves_control_off_branch_untouched() {
        let mut buf = vec![C::<f64>::new(0.5, 0.0); 4];
        let before = buf.clone();
        apply_crz(&mut buf, 2, &[0, 1], false, 1.3);
        assert_eq!(buf[0], before[0]);
        assert_eq!(buf[1], before[1]);
    }
}
