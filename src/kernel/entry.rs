//! Checked kernel entry points.
//!
//! Every other function in [`crate::kernel::lm`]/`pi`/`simd` is a bare index
//! computation: it trusts its caller for wire range, arity, distinctness,
//! and buffer length, and indexes straight into the buffer. That is the
//! right shape for the hot inner loop, but it means an out-of-range wire is
//! undefined behavior rather than a reported error. This module is the
//! validating front door: one `apply_<GateName>`/`apply_generator_<Name>`
//! per operation, matching the LM backend's signatures plus a `CoreResult`,
//! which checks `wires`/`buf.len()` against `n_qubits` before delegating to
//! the LM kernel (LM is the one backend every operation is implemented on;
//! a caller chasing a faster backend resolves one via
//! [`crate::dispatch::kernel_map`] and calls it directly, bypassing this
//! layer the same way the LM kernels themselves do).

use crate::{
    error::{check_buffer_len, check_wires, CoreResult},
    kernel::{generator_mixin, lm},
    math::{Precision, C},
    ops::{GateOp, GeneratorOp, MatrixOp},
};

fn validate(buf_len: usize, n_qubits: usize, wires: &[usize], arity: usize) -> CoreResult {
    check_buffer_len(buf_len, n_qubits)?;
    check_wires(wires, arity, n_qubits)
}

macro_rules! gate0 {
    ($entry:ident, $lm_fn:path, $arity:expr) => {
        pub fn $entry<P: Precision>(
            buf: &mut [C<P>],
            n_qubits: usize,
            wires: &[usize],
            inverse: bool,
        ) -> CoreResult {
            validate(buf.len(), n_qubits, wires, $arity)?;
            $lm_fn(buf, n_qubits, wires, inverse);
            Ok(())
        }
    };
}

macro_rules! gate1 {
    ($entry:ident, $lm_fn:path, $arity:expr) => {
        pub fn $entry<P: Precision>(
            buf: &mut [C<P>],
            n_qubits: usize,
            wires: &[usize],
            inverse: bool,
            theta: P,
        ) -> CoreResult {
            validate(buf.len(), n_qubits, wires, $arity)?;
            $lm_fn(buf, n_qubits, wires, inverse, theta);
            Ok(())
        }
    };
}

macro_rules! gate3 {
    ($entry:ident, $lm_fn:path, $arity:expr) => {
        pub fn $entry<P: Precision>(
            buf: &mut [C<P>],
            n_qubits: usize,
            wires: &[usize],
            inverse: bool,
            phi: P,
            theta: P,
            omega: P,
        ) -> CoreResult {
            validate(buf.len(), n_qubits, wires, $arity)?;
            $lm_fn(buf, n_qubits, wires, inverse, phi, theta, omega);
            Ok(())
        }
    };
}

macro_rules! generator0 {
    ($entry:ident, $lm_fn:path, $arity:expr) => {
        pub fn $entry<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> CoreResult<P> {
            validate(buf.len(), n_qubits, wires, $arity)?;
            Ok($lm_fn(buf, n_qubits, wires))
        }
    };
}

// Non-parametric single-wire gates.
gate0!(apply_identity, lm::pauli::apply_identity, 1);
gate0!(apply_pauli_x, lm::pauli::apply_pauli_x, 1);
gate0!(apply_pauli_y, lm::pauli::apply_pauli_y, 1);
gate0!(apply_pauli_z, lm::pauli::apply_pauli_z, 1);
gate0!(apply_hadamard, lm::pauli::apply_hadamard, 1);
gate0!(apply_s, lm::pauli::apply_s, 1);
gate0!(apply_t, lm::pauli::apply_t, 1);

// Parametric single-wire rotations.
gate1!(apply_rx, lm::rotation::apply_rx, 1);
gate1!(apply_ry, lm::rotation::apply_ry, 1);
gate1!(apply_rz, lm::rotation::apply_rz, 1);
gate1!(apply_phase_shift, lm::rotation::apply_phase_shift, 1);
gate3!(apply_rot, lm::rotation::apply_rot, 1);

// Non-parametric two-wire gates.
gate0!(apply_cnot, lm::pauli::apply_cnot, 2);
gate0!(apply_cy, lm::pauli::apply_cy, 2);
gate0!(apply_cz, lm::pauli::apply_cz, 2);
gate0!(apply_swap, lm::pauli::apply_swap, 2);

// Parametric two-wire gates.
gate1!(apply_controlled_phase_shift, lm::rotation::apply_controlled_phase_shift, 2);
gate1!(apply_crx, lm::rotation::apply_crx, 2);
gate1!(apply_cry, lm::rotation::apply_cry, 2);
gate1!(apply_crz, lm::rotation::apply_crz, 2);
gate1!(apply_ising_xx, lm::ising::apply_ising_xx, 2);
gate1!(apply_ising_xy, lm::ising::apply_ising_xy, 2);
gate1!(apply_ising_yy, lm::ising::apply_ising_yy, 2);
gate1!(apply_ising_zz, lm::ising::apply_ising_zz, 2);
gate1!(apply_single_excitation, lm::excitation::apply_single_excitation, 2);
gate1!(apply_single_excitation_minus, lm::excitation::apply_single_excitation_minus, 2);
gate1!(apply_single_excitation_plus, lm::excitation::apply_single_excitation_plus, 2);
gate3!(apply_crot, lm::rotation::apply_crot, 2);

// Multi-wire gates.
gate0!(apply_toffoli, lm::pauli::apply_toffoli, 3);
gate0!(apply_cswap, lm::pauli::apply_cswap, 3);
gate1!(apply_double_excitation, lm::excitation::apply_double_excitation, 4);
gate1!(apply_double_excitation_minus, lm::excitation::apply_double_excitation_minus, 4);
gate1!(apply_double_excitation_plus, lm::excitation::apply_double_excitation_plus, 4);

/// `MultiRZ` is variadic: its arity is whatever `wires` it was called with,
/// so validation only checks range and distinctness, not a fixed count.
pub fn apply_multi_rz<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    wires: &[usize],
    inverse: bool,
    theta: P,
) -> CoreResult {
    validate(buf.len(), n_qubits, wires, wires.len())?;
    lm::multi_rz::apply_multi_rz(buf, n_qubits, wires, inverse, theta);
    Ok(())
}

fn pauli_x_for_generator<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) {
    lm::pauli::apply_pauli_x(buf, n_qubits, wires, false);
}

fn pauli_y_for_generator<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) {
    lm::pauli::apply_pauli_y(buf, n_qubits, wires, false);
}

fn pauli_z_for_generator<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) {
    lm::pauli::apply_pauli_z(buf, n_qubits, wires, false);
}

pub fn apply_generator_rx<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> CoreResult<P> {
    validate(buf.len(), n_qubits, wires, 1)?;
    Ok(generator_mixin::generator_rx(buf, n_qubits, wires, pauli_x_for_generator))
}

pub fn apply_generator_ry<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> CoreResult<P> {
    validate(buf.len(), n_qubits, wires, 1)?;
    Ok(generator_mixin::generator_ry(buf, n_qubits, wires, pauli_y_for_generator))
}

pub fn apply_generator_rz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> CoreResult<P> {
    validate(buf.len(), n_qubits, wires, 1)?;
    Ok(generator_mixin::generator_rz(buf, n_qubits, wires, pauli_z_for_generator))
}

generator0!(apply_generator_phase_shift, lm::generators::generator_phase_shift, 1);
generator0!(apply_generator_controlled_phase_shift, lm::generators::generator_controlled_phase_shift, 2);
generator0!(apply_generator_crx, lm::generators::generator_crx, 2);
generator0!(apply_generator_cry, lm::generators::generator_cry, 2);
generator0!(apply_generator_crz, lm::generators::generator_crz, 2);
generator0!(apply_generator_ising_xx, lm::ising::generator_ising_xx, 2);
generator0!(apply_generator_ising_xy, lm::ising::generator_ising_xy, 2);
generator0!(apply_generator_ising_yy, lm::ising::generator_ising_yy, 2);
generator0!(apply_generator_ising_zz, lm::ising::generator_ising_zz, 2);
generator0!(apply_generator_single_excitation, lm::excitation::generator_single_excitation, 2);
generator0!(apply_generator_single_excitation_minus, lm::excitation::generator_single_excitation_minus, 2);
generator0!(apply_generator_single_excitation_plus, lm::excitation::generator_single_excitation_plus, 2);
generator0!(apply_generator_double_excitation, lm::excitation::generator_double_excitation, 4);
generator0!(apply_generator_double_excitation_minus, lm::excitation::generator_double_excitation_minus, 4);
generator0!(apply_generator_double_excitation_plus, lm::excitation::generator_double_excitation_plus, 4);

/// `MultiRZ`'s generator is likewise variadic.
pub fn apply_generator_multi_rz<P: Precision>(buf: &mut [C<P>], n_qubits: usize, wires: &[usize]) -> CoreResult<P> {
    validate(buf.len(), n_qubits, wires, wires.len())?;
    Ok(lm::multi_rz::generator_multi_rz(buf, n_qubits, wires))
}

pub fn apply_single_qubit_op<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    matrix: &[C<P>; 4],
    wires: &[usize],
    inverse: bool,
) -> CoreResult {
    validate(buf.len(), n_qubits, wires, MatrixOp::SingleQubitOp.fixed_k().unwrap())?;
    lm::matrix::apply_single_qubit_op(buf, n_qubits, matrix, wires, inverse);
    Ok(())
}

pub fn apply_two_qubit_op<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    matrix: &[C<P>; 16],
    wires: &[usize],
    inverse: bool,
) -> CoreResult {
    validate(buf.len(), n_qubits, wires, MatrixOp::TwoQubitOp.fixed_k().unwrap())?;
    lm::matrix::apply_two_qubit_op(buf, n_qubits, matrix, wires, inverse);
    Ok(())
}

/// `MultiQubitOp`'s operand size is whatever `wires` it was called with.
pub fn apply_multi_qubit_op<P: Precision>(
    buf: &mut [C<P>],
    n_qubits: usize,
    matrix: &[C<P>],
    wires: &[usize],
    inverse: bool,
) -> CoreResult {
    validate(buf.len(), n_qubits, wires, wires.len())?;
    lm::matrix::apply_multi_qubit_op(buf, n_qubits, matrix, wires, inverse);
    Ok(())
}

/// Looks up the wire arity an entry point will validate against, for
/// callers building their own dispatch on top of [`crate::ops::Operation`].
pub fn expected_arity(op: impl Into<crate::ops::Operation>, wires_len: usize) -> usize {
    use crate::ops::Operation;
    match op.into() {
        Operation::Gate(GateOp::MultiRZ) => wires_len,
        Operation::Gate(g) => g.arity(),
        Operation::Generator(GeneratorOp::MultiRZ) => wires_len,
        Operation::Generator(g) => g.arity(),
        Operation::Matrix(m) => m.fixed_k().unwrap_or(wires_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_wire_is_reported_instead_of_indexing() {
        let mut buf = vec![C::<f64>::new(1.0, 0.0), C::new(0.0, 0.0)];
        let err = apply_pauli_x(&mut buf, 1, &[3], false).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::InvalidArgument(crate::error::InvalidArgument::WireOutOfRange { .. })
        ));
    }

    #[test]
    fn wrong_arity_is_reported() {
        let mut buf = vec![C::<f64>::new(1.0, 0.0); 4];
        let err = apply_cnot(&mut buf, 2, &[0], false).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::InvalidArgument(crate::error::InvalidArgument::WrongArity { .. })
        ));
    }

    #[test]
    fn duplicate_wire_is_reported() {
        let mut buf = vec![C::<f64>::new(1.0, 0.0); 4];
        let err = apply_swap(&mut buf, 2, &[0, 0], false).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::InvalidArgument(crate::error::InvalidArgument::DuplicateWire { .. })
        ));
    }

    #[test]
    fn mismatched_buffer_length_is_reported() {
        let mut buf = vec![C::<f64>::new(1.0, 0.0); 3];
        let err = apply_hadamard(&mut buf, 2, &[0], false).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::InvalidArgument(crate::error::InvalidArgument::BufferLenMismatch { .. })
        ));
    }

    #[test]
    fn valid_call_delegates_and_matches_the_unchecked_kernel() {
        let mut via_entry = vec![C::<f64>::new(1.0, 0.0), C::new(0.0, 0.0)];
        let mut via_lm = via_entry.clone();
        apply_hadamard(&mut via_entry, 1, &[0], false).unwrap();
        lm::pauli::apply_hadamard(&mut via_lm, 1, &[0], false);
        assert_eq!(via_entry, via_lm);
    }

    #[test]
    fn generator_entry_point_validates_before_mutating_scale() {
        let mut buf = vec![C::<f64>::new(1.0, 0.0), C::new(0.0, 0.0)];
        let err = apply_generator_rx(&mut buf, 1, &[5]).unwrap_err();
        assert!(matches!(err, crate::error::CoreError::InvalidArgument(_)));
    }

    #[test]
    fn matrix_entry_point_validates_wires() {
        let zero = C::new(0.0, 0.0);
        let one = C::new(1.0, 0.0);
        let id = [one, zero, zero, one];
        let mut buf = vec![C::<f64>::new(1.0, 0.0), C::new(0.0, 0.0)];
        let err = apply_single_qubit_op(&mut buf, 1, &id, &[0, 1], false).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::InvalidArgument(crate::error::InvalidArgument::WrongArity { .. })
        ));
    }

    #[test]
    fn multi_rz_accepts_any_distinct_in_range_wire_set() {
        let mut buf = vec![C::<f64>::new(1.0, 0.0); 8];
        apply_multi_rz(&mut buf, 3, &[0, 2], false, 0.5).unwrap();
        let err = apply_multi_rz(&mut buf, 3, &[0, 9], false, 0.5).unwrap_err();
        assert!(matches!(err, crate::error::CoreError::InvalidArgument(_)));
    }
}
