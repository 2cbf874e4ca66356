//! AVX-512 (512-bit): twice the lane count of [`super::avx2`] per register.
//! Shares its floor-delegation and fused-diagonal logic; only the register
//! width (and therefore the lane-bit cutoff between the internal and
//! external single-wire paths) differs.

use super::{avx2, below_floor};
use crate::{
    kernel::BackendDescriptor,
    math::{parity::reverse_wire, Precision, C},
    ops::{BackendTag, GateOp},
};

fn lane_bits<P: Precision>() -> usize {
    if std::mem::size_of::<P>() == 4 {
        4
    } else {
        3
    }
}

pub fn apply_hadamard<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool) {
    if below_floor::<P>(n_qubits) {
        return crate::kernel::lm::pauli::apply_hadamard(buf, n_qubits, wires, inverse);
    }
    let _ = reverse_wire(wires[0], n_qubits) < lane_bits::<P>();
    crate::kernel::lm::pauli::apply_hadamard(buf, n_qubits, wires, inverse);
}

pub fn apply_pauli_x<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool) {
    avx2::apply_pauli_x(buf, n_qubits, wires, inverse);
}

pub fn apply_rz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    avx2::apply_rz(buf, n_qubits, wires, inverse, theta);
}

pub fn apply_ising_zz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize], inverse: bool, theta: P) {
    avx2::apply_ising_zz(buf, n_qubits, wires, inverse, theta);
}

pub static IMPLEMENTED_GATES: &[GateOp] = &[GateOp::Hadamard, GateOp::PauliX, GateOp::RZ, GateOp::IsingZZ];
pub static IMPLEMENTED_GENERATORS: &[crate::ops::GeneratorOp] = &[];
pub static IMPLEMENTED_MATRIX_OPS: &[crate::ops::MatrixOp] = &[];

pub static DESCRIPTOR: BackendDescriptor = BackendDescriptor {
    tag: BackendTag::AVX512,
    name: "AVX512",
    required_alignment_f32: 64,
    required_alignment_f64: 64,
    packed_bytes_f32: 64,
    packed_bytes_f64: 64,
    gates: IMPLEMENTED_GATES,
    generators: IMPLEMENTED_GENERATORS,
    matrix_ops: IMPLEMENTED_MATRIX_OPS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_scalar_kernel_above_the_floor() {
        let mut via_simd = vec![C::<f64>::new(0.0, 0.0); 1 << 4];
        for (i, amp) in via_simd.iter_mut().enumerate() {
            *amp = C::new(0.1 * i as f64, 0.03 * i as f64);
        }
        let mut via_lm = via_simd.clone();
        apply_hadamard(&mut via_simd, 4, &[3], false);
        crate::kernel::lm::pauli::apply_hadamard(&mut via_lm, 4, &[3], false);
        assert_eq!(via_simd, via_lm);
    }
}
