//! The shared generator mixin: RX/RY/RZ generators reuse whichever
//! backend's PauliX/Y/Z kernels are passed in, so every backend gets a
//! consistent generator surface without reimplementing it.

use crate::math::{Precision, C};

/// `fn(buf, n_qubits, wires)`: the shape every backend's unparameterized
/// Pauli kernel has once `inverse` is dropped (Pauli gates are self-adjoint).
pub type PauliKernel<P> = fn(&mut [C<P>], usize, &[usize]);

/// Generator of RX: reuses the backend's PauliX kernel, scale `-0.5`.
pub fn generator_rx<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    pauli_x: PauliKernel<P>,
) -> P {
    pauli_x(buf, n_qubits, wires);
    P::from_f64(-0.5)
}

/// Generator of RY: reuses the backend's PauliY kernel, scale `-0.5`.
pub fn generator_ry<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    pauli_y: PauliKernel<P>,
) -> P {
    pauli_y(buf, n_qubits, wires);
    P::from_f64(-0.5)
}

/// Generator of RZ: reuses the backend's PauliZ kernel, scale `-0.5`.
pub fn generator_rz<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    pauli_z: PauliKernel<P>,
) -> P {
    pauli_z(buf, n_qubits, wires);
    P::from_f64(-0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::lm::pauli::{apply_pauli_x, apply_pauli_y, apply_pauli_z};

    fn wrap_x<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize]) {
        apply_pauli_x(buf, n, wires, false);
    }
    fn wrap_y<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize]) {
        apply_pauli_y(buf, n, wires, false);
    }
    fn wrap_z<P: Precision>(buf: &mut [C<P>], n: usize, wires: &[usize]) {
        apply_pauli_z(buf, n, wires, false);
    }

    #[test]
    fn rx_generator_matches_pauli_x_action() {
        let mut via_generator = vec![C::<f64>::new(1.0, 0.0), C::new(0.0, 0.0)];
        let mut via_pauli = via_generator.clone();
        let scale = generator_rx(&mut via_generator, 1, &[0], wrap_x);
        apply_pauli_x(&mut via_pauli, 1, &[0], false);
        assert_eq!(via_generator, via_pauli);
        assert_eq!(scale, -0.5);
    }

    #[test]
    fn ry_and_rz_generators_delegate() {
        let mut buf = vec![C::<f32>::new(1.0, 0.0), C::new(0.0, 0.0)];
        let scale = generator_ry(&mut buf, 1, &[0], wrap_y);
        assert_eq!(scale, -0.5);
        let mut buf = vec![C::<f32>::new(1.0, 0.0), C::new(0.0, 0.0)];
        let scale = generator_rz(&mut buf, 1, &[0], wrap_z);
        assert_eq!(scale, -0.5);
    }
}
