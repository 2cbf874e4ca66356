//! Per-backend capability records and the tag-to-descriptor dispatch.

use crate::ops::{BackendTag, GateOp, GeneratorOp, MatrixOp};

/// Immutable per-backend capability record: everything the registry and
/// callers need to know about a backend without instantiating it.
pub struct BackendDescriptor {
    pub tag: BackendTag,
    pub name: &'static str,
    pub required_alignment_f32: usize,
    pub required_alignment_f64: usize,
    pub packed_bytes_f32: usize,
    pub packed_bytes_f64: usize,
    pub gates: &'static [GateOp],
    pub generators: &'static [GeneratorOp],
    pub matrix_ops: &'static [MatrixOp],
}

impl BackendDescriptor {
    pub fn implements_gate(&self, op: GateOp) -> bool {
        self.gates.contains(&op)
    }

    pub fn implements_generator(&self, op: GeneratorOp) -> bool {
        self.generators.contains(&op)
    }

    pub fn implements_matrix_op(&self, op: MatrixOp) -> bool {
        self.matrix_ops.contains(&op)
    }
}

#[enum_dispatch::enum_dispatch(BackendMarkerDispatch)]
pub trait BackendMarker: crate::sealed::Seal {
    fn descriptor(&self) -> &'static BackendDescriptor;
}

#[derive(Clone, Copy)]
pub struct Lm;
#[derive(Clone, Copy)]
pub struct Pi;
#[derive(Clone, Copy)]
pub struct ParallelLm;
#[derive(Clone, Copy)]
pub struct Avx2Marker;
#[derive(Clone, Copy)]
pub struct Avx512Marker;

impl crate::sealed::Seal for Lm {}
impl crate::sealed::Seal for Pi {}
impl crate::sealed::Seal for ParallelLm {}
impl crate::sealed::Seal for Avx2Marker {}
impl crate::sealed::Seal for Avx512Marker {}

impl BackendMarker for Lm {
    fn descriptor(&self) -> &'static BackendDescriptor {
        &crate::kernel::lm::DESCRIPTOR
    }
}

impl BackendMarker for Pi {
    fn descriptor(&self) -> &'static BackendDescriptor {
        &crate::kernel::pi::DESCRIPTOR
    }
}

impl BackendMarker for ParallelLm {
    fn descriptor(&self) -> &'static BackendDescriptor {
        &crate::kernel::lm::PARALLEL_DESCRIPTOR
    }
}

impl BackendMarker for Avx2Marker {
    fn descriptor(&self) -> &'static BackendDescriptor {
        #[cfg(feature = "simd")]
        {
            &crate::kernel::simd::avx2::DESCRIPTOR
        }
        #[cfg(not(feature = "simd"))]
        {
            &crate::kernel::lm::DESCRIPTOR
        }
    }
}

impl BackendMarker for Avx512Marker {
    fn descriptor(&self) -> &'static BackendDescriptor {
        #[cfg(feature = "simd")]
        {
            &crate::kernel::simd::avx512::DESCRIPTOR
        }
        #[cfg(not(feature = "simd"))]
        {
            &crate::kernel::lm::DESCRIPTOR
        }
    }
}

#[enum_dispatch::enum_dispatch]
#[derive(Clone, Copy)]
pub enum BackendMarkerDispatch {
    Lm,
    Pi,
    ParallelLm,
    Avx2Marker,
    Avx512Marker,
}

impl crate::sealed::Seal for BackendMarkerDispatch {}

/// Looks up the descriptor for a `BackendTag`.
pub fn descriptor_for(tag: BackendTag) -> &'static BackendDescriptor {
    let marker: BackendMarkerDispatch = match tag {
        BackendTag::LM => Lm.into(),
        BackendTag::PI => Pi.into(),
        BackendTag::ParallelLM => ParallelLm.into(),
        BackendTag::AVX2 => Avx2Marker.into(),
        BackendTag::AVX512 => Avx512Marker.into(),
    };
    marker.descriptor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_resolves_a_descriptor_with_matching_tag() {
        for tag in [
            BackendTag::LM,
            BackendTag::PI,
            BackendTag::ParallelLM,
            BackendTag::AVX2,
            BackendTag::AVX512,
        ] {
            assert_eq!(descriptor_for(tag).tag, tag);
        }
    }
}
