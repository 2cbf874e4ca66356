//! Operation tags: the three disjoint enumerations that name every gate,
//! generator, and dense-matrix entry point the core implements, plus the
//! `BackendTag` that names every kernel backend.

use std::fmt;

/// Every supported unitary gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum GateOp {
    Identity,
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    S,
    T,
    RX,
    RY,
    RZ,
    PhaseShift,
    Rot,
    CNOT,
    CY,
    CZ,
    SWAP,
    ControlledPhaseShift,
    CRX,
    CRY,
    CRZ,
    CRot,
    IsingXX,
    IsingXY,
    IsingYY,
    IsingZZ,
    SingleExcitation,
    SingleExcitationMinus,
    SingleExcitationPlus,
    DoubleExcitation,
    DoubleExcitationMinus,
    DoubleExcitationPlus,
    Toffoli,
    CSWAP,
    MultiRZ,
}

/// Every gate that exposes a generator (used by parameter-shift / adjoint
/// differentiation drivers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum GeneratorOp {
    RX,
    RY,
    RZ,
    PhaseShift,
    ControlledPhaseShift,
    CRX,
    CRY,
    CRZ,
    IsingXX,
    IsingXY,
    IsingYY,
    IsingZZ,
    SingleExcitation,
    SingleExcitationMinus,
    SingleExcitationPlus,
    DoubleExcitation,
    DoubleExcitationMinus,
    DoubleExcitationPlus,
    MultiRZ,
}

/// Dense-matrix application entry points, grouped by operand size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatrixOp {
    SingleQubitOp,
    TwoQubitOp,
    MultiQubitOp,
}

/// Every operation the registry can route, folded into one key space so a
/// single `PrioritySet` table serves gates, generators, and matrix ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Gate(GateOp),
    Generator(GeneratorOp),
    Matrix(MatrixOp),
}

impl From<GateOp> for Operation {
    fn from(op: GateOp) -> Self {
        Operation::Gate(op)
    }
}

impl From<GeneratorOp> for Operation {
    fn from(op: GeneratorOp) -> Self {
        Operation::Generator(op)
    }
}

impl From<MatrixOp> for Operation {
    fn from(op: MatrixOp) -> Self {
        Operation::Matrix(op)
    }
}

/// Identity tag of a kernel backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BackendTag {
    LM,
    PI,
    AVX2,
    AVX512,
    ParallelLM,
}

impl fmt::Display for BackendTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendTag::LM => "LM",
            BackendTag::PI => "PI",
            BackendTag::AVX2 => "AVX2",
            BackendTag::AVX512 => "AVX512",
            BackendTag::ParallelLM => "ParallelLM",
        };
        f.write_str(name)
    }
}

impl GateOp {
    /// Number of wires this gate acts on.
    pub const fn arity(self) -> usize {
        use GateOp::*;
        match self {
            Identity | PauliX | PauliY | PauliZ | Hadamard | S | T | RX | RY | RZ
            | PhaseShift | Rot => 1,
            CNOT | CY | CZ | SWAP | ControlledPhaseShift | CRX | CRY | CRZ | CRot | IsingXX
            | IsingXY | IsingYY | IsingZZ | SingleExcitation | SingleExcitationMinus
            | SingleExcitationPlus => 2,
            DoubleExcitation | DoubleExcitationMinus | DoubleExcitationPlus => 4,
            Toffoli | CSWAP => 3,
            MultiRZ => 0, // variadic: arity is wires.len() itself.
        }
    }

    /// The generator this gate exposes, if any.
    pub const fn generator(self) -> Option<GeneratorOp> {
        use GateOp::*;
        Some(match self {
            RX => GeneratorOp::RX,
            RY => GeneratorOp::RY,
            RZ => GeneratorOp::RZ,
            PhaseShift => GeneratorOp::PhaseShift,
            ControlledPhaseShift => GeneratorOp::ControlledPhaseShift,
            CRX => GeneratorOp::CRX,
            CRY => GeneratorOp::CRY,
            CRZ => GeneratorOp::CRZ,
            IsingXX => GeneratorOp::IsingXX,
            IsingXY => GeneratorOp::IsingXY,
            IsingYY => GeneratorOp::IsingYY,
            IsingZZ => GeneratorOp::IsingZZ,
            SingleExcitation => GeneratorOp::SingleExcitation,
            SingleExcitationMinus => GeneratorOp::SingleExcitationMinus,
            SingleExcitationPlus => GeneratorOp::SingleExcitationPlus,
            DoubleExcitation => GeneratorOp::DoubleExcitation,
            DoubleExcitationMinus => GeneratorOp::DoubleExcitationMinus,
            DoubleExcitationPlus => GeneratorOp::DoubleExcitationPlus,
            MultiRZ => GeneratorOp::MultiRZ,
            _ => return None,
        })
    }
}

impl GeneratorOp {
    pub const fn arity(self) -> usize {
        use GeneratorOp::*;
        match self {
            RX | RY | RZ | PhaseShift => 1,
            ControlledPhaseShift | CRX | CRY | CRZ | IsingXX | IsingXY | IsingYY | IsingZZ
            | SingleExcitation | SingleExcitationMinus | SingleExcitationPlus => 2,
            DoubleExcitation | DoubleExcitationMinus | DoubleExcitationPlus => 4,
            MultiRZ => 0,
        }
    }
}

impl MatrixOp {
    /// Number of qubits a matrix operand of this kind acts on, when fixed.
    pub const fn fixed_k(self) -> Option<usize> {
        match self {
            MatrixOp::SingleQubitOp => Some(1),
            MatrixOp::TwoQubitOp => Some(2),
            MatrixOp::MultiQubitOp => None,
        }
    }
}

/// Canonical iteration order over every `GateOp` variant, used to build
/// default dispatch policy and exhaustive test fixtures.
pub const ALL_GATES: &[GateOp] = &[
    GateOp::Identity,
    GateOp::PauliX,
    GateOp::PauliY,
    GateOp::PauliZ,
    GateOp::Hadamard,
    GateOp::S,
    GateOp::T,
    GateOp::RX,
    GateOp::RY,
    GateOp::RZ,
    GateOp::PhaseShift,
    GateOp::Rot,
    GateOp::CNOT,
    GateOp::CY,
    GateOp::CZ,
    GateOp::SWAP,
    GateOp::ControlledPhaseShift,
    GateOp::CRX,
    GateOp::CRY,
    GateOp::CRZ,
    GateOp::CRot,
    GateOp::IsingXX,
    GateOp::IsingXY,
    GateOp::IsingYY,
    GateOp::IsingZZ,
    GateOp::SingleExcitation,
    GateOp::SingleExcitationMinus,
    GateOp::SingleExcitationPlus,
    GateOp::DoubleExcitation,
    GateOp::DoubleExcitationMinus,
    GateOp::DoubleExcitationPlus,
    GateOp::Toffoli,
    GateOp::CSWAP,
    GateOp::MultiRZ,
];

pub const ALL_GENERATORS: &[GeneratorOp] = &[
    GeneratorOp::RX,
    GeneratorOp::RY,
    GeneratorOp::RZ,
    GeneratorOp::PhaseShift,
    GeneratorOp::ControlledPhaseShift,
    GeneratorOp::CRX,
    GeneratorOp::CRY,
    GeneratorOp::CRZ,
    GeneratorOp::IsingXX,
    GeneratorOp::IsingXY,
    GeneratorOp::IsingYY,
    GeneratorOp::IsingZZ,
    GeneratorOp::SingleExcitation,
    GeneratorOp::SingleExcitationMinus,
    GeneratorOp::SingleExcitationPlus,
    GeneratorOp::DoubleExcitation,
    GeneratorOp::DoubleExcitationMinus,
    GeneratorOp::DoubleExcitationPlus,
    GeneratorOp::MultiRZ,
];

pub const ALL_MATRIX_OPS: &[MatrixOp] =
    &[MatrixOp::SingleQubitOp, MatrixOp::TwoQubitOp, MatrixOp::MultiQubitOp];

pub const ALL_OPERATIONS_LEN: usize = ALL_GATES.len() + ALL_GENERATORS.len() + ALL_MATRIX_OPS.len();

/// Every `Operation`, gates first, then generators, then matrix ops.
pub fn all_operations() -> impl Iterator<Item = Operation> {
    ALL_GATES
        .iter()
        .copied()
        .map(Operation::from)
        .chain(ALL_GENERATORS.iter().copied().map(Operation::from))
        .chain(ALL_MATRIX_OPS.iter().copied().map(Operation::from))
}
