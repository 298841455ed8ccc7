// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine transforms.

use core::ops::{Mul, MulAssign};

use crate::{Point, Real, Vec2};

/// A 2D affine transform.
///
/// The coefficients `[a, b, c, d, e, f]` describe the matrix
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
///
/// Applied to a [`Point`] the translation is included; applied to a
/// [`Vec2`] only the linear part is.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine<S>([S; 6]);

impl<S: Real> Affine<S> {
    /// Construct an affine transform from coefficients.
    #[inline]
    pub const fn new(c: [S; 6]) -> Self {
        Affine(c)
    }

    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Affine::scale(S::one())
    }

    /// An affine transform representing uniform scaling.
    #[inline]
    pub fn scale(s: S) -> Self {
        Affine::scale_non_uniform(s, s)
    }

    /// An affine transform representing non-uniform scaling
    /// with different scale values for x and y
    #[inline]
    pub fn scale_non_uniform(s_x: S, s_y: S) -> Self {
        let z = S::zero();
        Affine([s_x, z, z, s_y, z, z])
    }

    /// An affine transform representing rotation.
    ///
    /// The angle, `th`, is expressed in radians. Positive angles rotate from
    /// the x axis towards the y axis.
    #[inline]
    pub fn rotate(th: S) -> Self {
        let (s, c) = th.sin_cos();
        let z = S::zero();
        Affine([c, s, -s, c, z, z])
    }

    /// An affine transform representing translation.
    #[inline]
    pub fn translate<V: Into<Vec2<S>>>(p: V) -> Self {
        let p = p.into();
        let (o, z) = (S::one(), S::zero());
        Affine([o, z, z, o, p.x, p.y])
    }

    /// Get the coefficients of the transform.
    #[inline]
    pub fn as_coeffs(self) -> [S; 6] {
        self.0
    }

    /// Compute the determinant of this transform.
    #[inline]
    pub fn determinant(self) -> S {
        self.0[0] * self.0[3] - self.0[1] * self.0[2]
    }

    /// Compute the inverse transform.
    ///
    /// Produces NaN values when the determinant is zero.
    #[must_use]
    pub fn inverse(self) -> Self {
        let inv_det = self.determinant().recip();
        Affine([
            inv_det * self.0[3],
            -inv_det * self.0[1],
            -inv_det * self.0[2],
            inv_det * self.0[0],
            inv_det * (self.0[2] * self.0[5] - self.0[3] * self.0[4]),
            inv_det * (self.0[1] * self.0[4] - self.0[0] * self.0[5]),
        ])
    }
}

impl<S: Real> Default for Affine<S> {
    #[inline]
    fn default() -> Self {
        Affine::identity()
    }
}

impl<S: Real> Mul<Point<S>> for Affine<S> {
    type Output = Point<S>;

    #[inline]
    fn mul(self, other: Point<S>) -> Point<S> {
        Point::new(
            self.0[0] * other.x + self.0[2] * other.y + self.0[4],
            self.0[1] * other.x + self.0[3] * other.y + self.0[5],
        )
    }
}

impl<S: Real> Mul<Vec2<S>> for Affine<S> {
    type Output = Vec2<S>;

    #[inline]
    fn mul(self, other: Vec2<S>) -> Vec2<S> {
        Vec2::new(
            self.0[0] * other.x + self.0[2] * other.y,
            self.0[1] * other.x + self.0[3] * other.y,
        )
    }
}

impl<S: Real> Mul for Affine<S> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Affine([
            self.0[0] * other.0[0] + self.0[2] * other.0[1],
            self.0[1] * other.0[0] + self.0[3] * other.0[1],
            self.0[0] * other.0[2] + self.0[2] * other.0[3],
            self.0[1] * other.0[2] + self.0[3] * other.0[3],
            self.0[0] * other.0[4] + self.0[2] * other.0[5] + self.0[4],
            self.0[1] * other.0[4] + self.0[3] * other.0[5] + self.0[5],
        ])
    }
}

impl<S: Real> MulAssign for Affine<S> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = self.mul(other);
    }
}
