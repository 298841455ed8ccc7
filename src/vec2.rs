// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 2D vector.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Num, Zero};

use crate::{Point, Real, Size};

/// A 2D vector.
///
/// This is intended primarily for a vector in the mathematical sense,
/// but it can be interpreted as a translation or a direction, and converted
/// to and from a point (vector relative to the origin) and size.
///
/// The zero vector is a valid value. Shapes that use a `Vec2` as a direction
/// treat it as degenerate, see [`Vec2::is_degenerate`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<S> {
    /// The x-coordinate.
    pub x: S,
    /// The y-coordinate.
    pub y: S,
}

impl<S> Vec2<S> {
    /// Create a new vector.
    #[inline(always)]
    pub const fn new(x: S, y: S) -> Self {
        Vec2 { x, y }
    }

    /// Convert this vector into a `Point`.
    #[inline(always)]
    pub fn to_point(self) -> Point<S> {
        Point::new(self.x, self.y)
    }

    /// Convert this vector into a `Size`.
    #[inline(always)]
    pub fn to_size(self) -> Size<S> {
        Size::new(self.x, self.y)
    }

    /// Convert the coordinates to another scalar type.
    ///
    /// ```
    /// use planar::Vec2;
    /// let v = Vec2::new(3_i32, -4).map(f64::from);
    /// assert_eq!(v, Vec2::new(3.0, -4.0));
    /// ```
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Vec2<T> {
        Vec2::new(f(self.x), f(self.y))
    }
}

impl<S: Copy> Vec2<S> {
    /// Create a `Vec2` with the same value for x and y.
    #[inline]
    pub const fn splat(v: S) -> Self {
        Vec2 { x: v, y: v }
    }
}

impl<S: Zero> Vec2<S> {
    /// The vector (0, 0).
    #[inline]
    pub fn zero() -> Self {
        Vec2::new(S::zero(), S::zero())
    }
}

impl<S: Num + Copy> Vec2<S> {
    /// Dot product of two vectors.
    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y
    }

    /// Cross product of two vectors.
    ///
    /// This is signed so that (1, 0) × (0, 1) = 1.
    #[inline]
    pub fn cross(self, other: Self) -> S {
        self.x * other.y - self.y * other.x
    }

    /// Magnitude squared of vector.
    #[inline]
    pub fn hypot2(self) -> S {
        self.dot(self)
    }
}

impl<S: Neg<Output = S>> Vec2<S> {
    /// The vector rotated by a quarter turn, from the x axis towards the
    /// y axis.
    #[inline]
    pub fn turn_90(self) -> Self {
        Vec2::new(-self.y, self.x)
    }
}

impl<S: Real> Vec2<S> {
    /// Magnitude of vector.
    #[inline]
    pub fn hypot(self) -> S {
        self.x.hypot(self.y)
    }

    /// Angle of vector.
    ///
    /// If the vector is interpreted as a complex number, this is the argument.
    /// The angle is expressed in radians.
    #[inline]
    pub fn atan2(self) -> S {
        self.y.atan2(self.x)
    }

    /// A unit vector of the given angle.
    ///
    /// With `th` at zero, the result is the positive X unit vector, and
    /// at π/2, it is the positive Y unit vector. The angle is expressed
    /// in radians.
    #[inline]
    pub fn from_angle(th: S) -> Self {
        let (sin, cos) = th.sin_cos();
        Vec2::new(cos, sin)
    }

    /// Linearly interpolate between two vectors.
    ///
    /// The result is exactly `self` at `t = 0` and exactly `other` at `t = 1`.
    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        let mt = S::one() - t;
        Vec2::new(self.x * mt + other.x * t, self.y * mt + other.y * t)
    }

    /// Returns a vector of magnitude 1.0 with the same angle as `self`; i.e.
    /// a unit/direction vector.
    ///
    /// This produces `NaN` values when the magnitude is `0`.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.hypot()
    }

    /// Rotate by a precomputed cosine/sine pair.
    ///
    /// This is the rotation primitive used by every rotated shape.
    #[inline]
    pub fn rotate_by(self, cos: S, sin: S) -> Self {
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotate by `th` radians, from the x axis towards the y axis.
    #[inline]
    pub fn rotate(self, th: S) -> Self {
        let (sin, cos) = th.sin_cos();
        self.rotate_by(cos, sin)
    }

    /// Whether this vector is too short to serve as a direction.
    ///
    /// True when the magnitude is at most the scalar's epsilon.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.hypot2() <= S::epsilon() * S::epsilon()
    }

    /// Is this vector finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Is this vector NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl<S> From<(S, S)> for Vec2<S> {
    #[inline(always)]
    fn from(v: (S, S)) -> Self {
        Vec2 { x: v.0, y: v.1 }
    }
}

impl<S> From<Vec2<S>> for (S, S) {
    #[inline(always)]
    fn from(v: Vec2<S>) -> (S, S) {
        (v.x, v.y)
    }
}

impl<S: Add<Output = S>> Add for Vec2<S> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl<S: Copy + Add<Output = S>> AddAssign for Vec2<S> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<S: Sub<Output = S>> Sub for Vec2<S> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<S: Copy + Sub<Output = S>> SubAssign for Vec2<S> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<S: Copy + Mul<Output = S>> Mul<S> for Vec2<S> {
    type Output = Self;

    #[inline]
    fn mul(self, other: S) -> Self {
        Vec2::new(self.x * other, self.y * other)
    }
}

impl<S: Copy + Mul<Output = S>> MulAssign<S> for Vec2<S> {
    #[inline]
    fn mul_assign(&mut self, other: S) {
        *self = *self * other;
    }
}

impl<S: Copy + Div<Output = S>> Div<S> for Vec2<S> {
    type Output = Self;

    /// Note: division by a scalar is implemented by dividing each component,
    /// so integer vectors truncate per component.
    #[inline]
    fn div(self, other: S) -> Self {
        Vec2::new(self.x / other, self.y / other)
    }
}

impl<S: Copy + Div<Output = S>> DivAssign<S> for Vec2<S> {
    #[inline]
    fn div_assign(&mut self, other: S) {
        *self = *self / other;
    }
}

impl<S: Neg<Output = S>> Neg for Vec2<S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vec2::new(-self.x, -self.y)
    }
}

/// Scalar-on-the-left multiplication for the primitive number types.
macro_rules! impl_scalar_mul {
    ($($ty:ty),+) => {
        $(
            impl Mul<Vec2<$ty>> for $ty {
                type Output = Vec2<$ty>;

                #[inline]
                fn mul(self, other: Vec2<$ty>) -> Vec2<$ty> {
                    other * self
                }
            }
        )+
    };
}

impl_scalar_mul!(f32, f64, i32, i64);

impl<S: fmt::Display> fmt::Display for Vec2<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "𝐯=(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl<S> From<Vec2<S>> for mint::Vector2<S> {
    #[inline]
    fn from(v: Vec2<S>) -> mint::Vector2<S> {
        mint::Vector2 { x: v.x, y: v.y }
    }
}

#[cfg(feature = "mint")]
impl<S> From<mint::Vector2<S>> for Vec2<S> {
    #[inline]
    fn from(v: mint::Vector2<S>) -> Vec2<S> {
        Vec2 { x: v.x, y: v.y }
    }
}
