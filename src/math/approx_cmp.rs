//! Tolerance-aware comparisons for amplitude and probability checks,
//! generalized over both supported precisions.

use super::Precision;

#[cfg(feature = "float-cmp")]
use super::C;

#[cfg(feature = "float-cmp")]
const ULPS: i64 = 4;

#[cfg(feature = "float-cmp")]
pub fn approx_eq_real<P: Precision>(x: P, y: P) -> bool {
    float_cmp::approx_eq!(f64, x.to_f64(), y.to_f64(), ulps = ULPS)
}

#[cfg(feature = "float-cmp")]
pub fn approx_eq_complex<P: Precision>(a: C<P>, b: C<P>) -> bool {
    float_cmp::approx_eq!(f64, a.re.to_f64(), b.re.to_f64(), ulps = ULPS)
        && float_cmp::approx_eq!(f64, a.im.to_f64(), b.im.to_f64(), ulps = ULPS)
}

/// Tolerance for unitarity/norm-preservation checks on an `n`-qubit state:
/// `10 * eps * 2^(n/2)`, scaling with the accumulated rounding error of a
/// dense statevector of that size.
pub fn unitarity_tolerance<P: Precision>(n_qubits: usize) -> f64 {
    10.0 * P::EPSILON.to_f64() * 2f64.powf(n_qubits as f64 / 2.0)
}

/// Tolerance for cross-backend equivalence checks.
pub fn backend_equivalence_tolerance<P: Precision>() -> f64 {
    100.0 * P::EPSILON.to_f64()
}

pub fn within_tolerance(actual: f64, tol: f64) -> bool {
    actual <= tol
}
