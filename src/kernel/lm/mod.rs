//! LM: the memoryless bit-arithmetic backend. Every kernel derives its
//! amplitude indices on the fly from the reverse-wire parity masks in
//! [`crate::math::parity`]; nothing here is precomputed or cached.

pub mod excitation;
pub mod generators;
pub mod ising;
pub mod matrix;
pub mod multi_rz;
pub mod pauli;
pub mod rotation;

#[cfg(feature = "multi-thread")]
pub mod parallel;

use crate::{
    kernel::BackendDescriptor,
    ops::{BackendTag, GateOp, GeneratorOp, MatrixOp},
};

pub static IMPLEMENTED_GATES: &[GateOp] = crate::ops::ALL_GATES;
pub static IMPLEMENTED_GENERATORS: &[GeneratorOp] = crate::ops::ALL_GENERATORS;
pub static IMPLEMENTED_MATRIX_OPS: &[MatrixOp] = crate::ops::ALL_MATRIX_OPS;

pub static DESCRIPTOR: BackendDescriptor = BackendDescriptor {
    tag: BackendTag::LM,
    name: "LM",
    required_alignment_f32: 1,
    required_alignment_f64: 1,
    packed_bytes_f32: 4,
    packed_bytes_f64: 8,
    gates: IMPLEMENTED_GATES,
    generators: IMPLEMENTED_GENERATORS,
    matrix_ops: IMPLEMENTED_MATRIX_OPS,
};

pub static PARALLEL_DESCRIPTOR: BackendDescriptor = BackendDescriptor {
    tag: BackendTag::ParallelLM,
    name: "ParallelLM",
    required_alignment_f32: 1,
    required_alignment_f64: 1,
    packed_bytes_f32: 4,
    packed_bytes_f64: 8,
    gates: IMPLEMENTED_GATES,
    generators: IMPLEMENTED_GENERATORS,
    matrix_ops: IMPLEMENTED_MATRIX_OPS,
};
