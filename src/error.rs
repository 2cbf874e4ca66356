//! Error kinds surfaced by the kernel and dispatch layers.
//!
//! Every variant is a programming-error signal: kernels and the registry
//! never retry internally, and the call that produced the error has no
//! effect on the buffer or the registry it touched.

use crate::{
    dispatch::{CPUMemoryModel, DispatchInterval, Threading},
    ops::BackendTag,
};

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(InvalidArgument),

    #[error("kernel {kernel:?} is not allowed under memory model {memory_model:?}")]
    KernelNotAllowed {
        kernel: BackendTag,
        memory_model: CPUMemoryModel,
    },

    #[error("interval {new:?} at priority {priority} conflicts with an existing assignment")]
    IntervalConflict {
        priority: u32,
        new: DispatchInterval,
    },

    #[error("no dispatch record at ({threading:?}, {memory_model:?}, priority {priority})")]
    KeyNotFound {
        threading: Threading,
        memory_model: CPUMemoryModel,
        priority: u32,
    },

    #[error("no kernel covers qubit count {n_qubits} for this operation")]
    NoKernelForQubitCount { n_qubits: usize },

    #[error("backend {kernel:?} does not implement this operation")]
    Unsupported { kernel: BackendTag },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    WireOutOfRange { wire: usize, n_qubits: usize },
    DuplicateWire { wire: usize },
    WrongArity { expected: usize, got: usize },
    BufferLenMismatch { expected: usize, got: usize },
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidArgument::WireOutOfRange { wire, n_qubits } => {
                write!(f, "wire {wire} is out of range for {n_qubits} qubits")
            }
            InvalidArgument::DuplicateWire { wire } => {
                write!(f, "wire {wire} appears more than once")
            }
            InvalidArgument::WrongArity { expected, got } => {
                write!(f, "expected {expected} wires, got {got}")
            }
            InvalidArgument::BufferLenMismatch { expected, got } => {
                write!(f, "buffer length {got} does not match 2^n = {expected}")
            }
        }
    }
}

pub type CoreResult<T = ()> = Result<T, CoreError>;

/// Checks the common kernel-entry preconditions.
pub fn check_wires(wires: &[usize], arity: usize, n_qubits: usize) -> CoreResult {
    if wires.len() != arity {
        return Err(CoreError::InvalidArgument(InvalidArgument::WrongArity {
            expected: arity,
            got: wires.len(),
        }));
    }
    for (i, &w) in wires.iter().enumerate() {
        if w >= n_qubits {
            return Err(CoreError::InvalidArgument(InvalidArgument::WireOutOfRange {
                wire: w,
                n_qubits,
            }));
        }
        if wires[..i].contains(&w) {
            return Err(CoreError::InvalidArgument(InvalidArgument::DuplicateWire {
                wire: w,
            }));
        }
    }
    Ok(())
}

pub fn check_buffer_len(buf_len: usize, n_qubits: usize) -> CoreResult {
    let expected = 1usize << n_qubits;
    if buf_len != expected {
        return Err(CoreError::InvalidArgument(InvalidArgument::BufferLenMismatch {
            expected,
            got: buf_len,
        }));
    }
    Ok(())
}
