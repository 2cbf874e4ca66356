//! The two supported floating precisions, binary32 and binary64.

use num_traits::Float;

use crate::math::C;

/// Sealed trait over `f32`/`f64`. Supertraited on [`num_traits::Float`] so
/// every arithmetic op `Complex<P>` needs (`+`, `-`, `*`, `.scale()`,
/// unary `-`) is available generically, not just for the concrete types.
pub trait Precision:
    Float + std::fmt::Debug + Default + Send + Sync + 'static + crate::sealed::Seal
{
    const EPSILON: Self;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;

    /// Size, in bytes, of one `Complex<Self>` value.
    fn complex_size() -> usize {
        std::mem::size_of::<C<Self>>()
    }
}

impl crate::sealed::Seal for f32 {}
impl crate::sealed::Seal for f64 {}

macro_rules! impl_precision {
    ($ty:ty) => {
        impl Precision for $ty {
            const EPSILON: Self = <$ty>::EPSILON;

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $ty
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_precision!(f32);
impl_precision!(f64);
