//! Optional SIMD-register-width specializations. Gated behind the `simd`
//! feature: a build without it falls back to [`crate::kernel::lm`] entirely
//! (see the `Avx2Marker`/`Avx512Marker` descriptor lookups in
//! [`crate::kernel::descriptor`]).
//!
//! Only a representative gate subset gets a dedicated kernel here — every
//! other operation routed to an AVX backend is expected to fall through to
//! the floor-delegation path in [`below_floor`] and run on LM instead.

pub mod avx2;
pub mod avx512;

use crate::math::Precision;

/// `n_qubits` below this must delegate to scalar LM (binary32: 3, binary64:
/// 2 — binary64 packs fewer complex lanes per register, so the internal
/// lane-permutation path needs fewer wires to become profitable).
pub fn simd_floor<P: Precision>() -> usize {
    if std::mem::size_of::<P>() == 4 {
        3
    } else {
        2
    }
}

pub fn below_floor<P: Precision>(n_qubits: usize) -> bool {
    n_qubits < simd_floor::<P>()
}
