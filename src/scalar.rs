// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floating-point scalar capability.

use core::fmt::Debug;

use num_traits::{Float, FloatConst, NumCast};

mod sealed {
    /// A [sealed trait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/)
    /// which stops [`super::Real`] from being implemented outside planar. The
    /// literal conversion in `Real::cast` is only lossless enough for the
    /// primitive float types.
    pub trait RealSealed {}
}

/// A real-number scalar: everything curve and measurement code needs.
///
/// This is the strongest capability bound in the crate. Translation, dot and
/// cross products, and bounding boxes are available with weaker bounds, so
/// integer points can still be moved around; lengths, angles, intersections
/// and curves require `Real`.
///
/// Implemented for `f32` and `f64`.
pub trait Real: Float + FloatConst + Default + Debug + sealed::RealSealed {
    /// Convert an `f64` constant into this scalar type.
    ///
    /// Used for literal constants such as `0.5` inside generic code.
    fn cast(v: f64) -> Self;

    /// One half.
    #[inline]
    fn half() -> Self {
        Self::cast(0.5)
    }

    /// Two.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Convert a count, such as a number of subdivisions.
    #[inline]
    fn from_usize(n: usize) -> Self {
        <Self as NumCast>::from(n).unwrap_or_else(Self::infinity)
    }
}

/// Implements [`Real`] for the primitive float types.
macro_rules! impl_real {
    ($($ty:ty => |$v:ident| $conv:expr;)+) => {
        $(
            impl sealed::RealSealed for $ty {}

            impl Real for $ty {
                #[inline(always)]
                fn cast($v: f64) -> $ty {
                    $conv
                }
            }
        )+
    };
}

impl_real! {
    f32 => |v| {
        #[allow(clippy::cast_possible_truncation)]
        let v = v as f32;
        v
    };
    f64 => |v| v;
}
