//! Index algebra and the floating-point precision abstraction.
//!
//! Everything here is a pure function of its arguments; nothing in this
//! module allocates or holds state.

pub mod approx_cmp;
pub mod parity;

mod precision;
pub use precision::Precision;

/// A complex amplitude in the chosen precision.
pub type C<P> = num_complex::Complex<P>;

/// Alignment class of a statevector buffer. The core reads this but never
/// allocates or aligns memory itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    Unaligned,
    Aligned256,
    Aligned512,
}

pub(crate) mod consts {
    #[inline]
    pub fn frac_1_sqrt_2<P: super::Precision>() -> P {
        P::from_f64(std::f64::consts::FRAC_1_SQRT_2)
    }
}
