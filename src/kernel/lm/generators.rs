//! Generator kernels that aren't simple reuse of an uncontrolled gate's
//! kernel: the phase-family generators (which zero the amplitudes the
//! generator doesn't act on) and the controlled single-wire rotations.

use crate::math::{
    parity::{iter_two_wire, rev_wire_parity},
    Precision, C,
};

fn zero<P: Precision>() -> C<P> {
    C::new(P::zero(), P::zero())
}

/// Generator of `PhaseShift`: zero `i0`, leave `i1` unchanged, scale `+1.0`.
pub fn generator_phase_shift<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> P {
    let r = crate::math::parity::reverse_wire(wires[0], n_qubits);
    let p = rev_wire_parity(r, n_qubits);
    for k in 0..(1usize << (n_qubits - 1)) {
        let (i0, _i1) = p.indices(k, r);
        buf[i0] = zero();
    }
    P::one()
}

/// Generator of `ControlledPhaseShift`: zero `i00, i01, i10`, leave `i11`
/// unchanged, scale `+1.0`.
pub fn generator_controlled_phase_shift<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> P {
    for (i00, i01, i10, _i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        buf[i00] = zero();
        buf[i01] = zero();
        buf[i10] = zero();
    }
    P::one()
}

/// Generators of `CRX`/`CRY`/`CRZ`: zero the control-off branch, then
/// mutate the control-on branch exactly as the uncontrolled generator
/// would. Scale `-0.5`.
pub fn generator_crx<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> P {
    for (i00, i01, i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        buf[i00] = zero();
        buf[i01] = zero();
        buf.swap(i10, i11);
    }
    P::from_f64(-0.5)
}

pub fn generator_cry<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> P {
    for (i00, i01, i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        buf[i00] = zero();
        buf[i01] = zero();
        let (a, b) = (buf[i10], buf[i11]);
        buf[i10] = C::new(b.im, -b.re);
        buf[i11] = C::new(-a.im, a.re);
    }
    P::from_f64(-0.5)
}

pub fn generator_crz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> P {
    for (i00, i01, i10, i11) in iter_two_wire(n_qubits, wires[0], wires[1]) {
        buf[i00] = zero();
        buf[i01] = zero();
        buf[i11] = -buf[i11];
        let _ = i10;
    }
    P::from_f64(-0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_shift_generator_zeroes_i0_only() {
        let mut buf = vec![C::<f64>::new(0.3, 0.1), C::new(0.4, -0.2)];
        let scale = generator_phase_shift(&mut buf, 1, &[0]);
        assert_eq!(buf[0], C::new(0.0, 0.0));
        assert_eq!(buf[1], C::new(0.4, -0.2));
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn crz_generator_zeroes_control_off_branch() {
        let mut buf = vec![C::<f64>::new(0.3, 0.1); 4];
        let scale = generator_crz(&mut buf, 2, &[0, 1]);
        assert_eq!(buf[0], C::new(0.0, 0.0));
        assert_eq!(buf[1], C::new(0.0, 0.0));
        assert_eq!(scale, -0.5);
    }

    /// The control-on branch of CRX's generator must match the uncontrolled
    /// RX generator's action (PauliX), not PauliY.
    #[test]
    fn crx_generator_matches_pauli_x_on_active_branch() {
        let mut via_crx = vec![C::<f64>::new(0.3, 0.1), C::new(-0.2, 0.4), C::new(0.1, -0.1), C::new(0.6, 0.0)];
        let mut via_pauli_x = vec![via_crx[2], via_crx[3]];
        let scale = generator_crx(&mut via_crx, 2, &[0, 1]);
        crate::kernel::lm::pauli::apply_pauli_x(&mut via_pauli_x, 1, &[0], false);
        assert_eq!(via_crx[2], via_pauli_x[0]);
        assert_eq!(via_crx[3], via_pauli_x[1]);
        assert_eq!(scale, -0.5);
    }

    /// The control-on branch of CRY's generator must match the uncontrolled
    /// RY generator's action (PauliY), not `-iY`.
    #[test]
    fn cry_generator_matches_pauli_y_on_active_branch() {
        let mut via_cry = vec![C::<f64>::new(0.3, 0.1), C::new(-0.2, 0.4), C::new(0.1, -0.1), C::new(0.6, 0.0)];
        let mut via_pauli_y = vec![via_cry[2], via_cry[3]];
        let scale = generator_cry(&mut via_cry, 2, &[0, 1]);
        crate::kernel::lm::pauli::apply_pauli_y(&mut via_pauli_y, 1, &[0], false);
        assert_eq!(via_cry[2], via_pauli_y[0]);
        assert_eq!(via_cry[3], via_pauli_y[1]);
        assert_eq!(scale, -0.5);
    }
}
