//! PI: the precomputed-index backend. Trades the memory for a [`GateIndices`]
//! table against the per-call bit arithmetic [`crate::kernel::lm`] performs,
//! which pays off once the outer loop runs enough iterations to amortize the
//! table build — the dispatch policy in `crate::dispatch::policy` favors it
//! for exactly that regime.

pub mod gates;
pub mod indices;
pub mod matrix;

pub use indices::GateIndices;

use crate::{
    kernel::BackendDescriptor,
    ops::{BackendTag, GateOp, MatrixOp},
};

pub static IMPLEMENTED_GATES: &[GateOp] = &[GateOp::Hadamard, GateOp::SWAP];
pub static IMPLEMENTED_GENERATORS: &[crate::ops::GeneratorOp] = &[];
pub static IMPLEMENTED_MATRIX_OPS: &[MatrixOp] = crate::ops::ALL_MATRIX_OPS;

pub static DESCRIPTOR: BackendDescriptor = BackendDescriptor {
    tag: BackendTag::PI,
    name: "PI",
    required_alignment_f32: 1,
    required_alignment_f64: 1,
    packed_bytes_f32: 4,
    packed_bytes_f64: 8,
    gates: IMPLEMENTED_GATES,
    generators: IMPLEMENTED_GENERATORS,
    matrix_ops: IMPLEMENTED_MATRIX_OPS,
};
