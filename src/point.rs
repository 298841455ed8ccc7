// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::{Num, Zero};

use crate::{Real, Vec2};

/// A 2D point.
///
/// This type represents a point in 2D space. It has the same layout as
/// [`Vec2`], but its meaning is different: `Vec2` represents a change in
/// location (for example velocity or a direction).
///
/// In general, `planar` overloads math operators where it makes sense, for
/// example implementing `Add<Vec2>` for `Point`, while `Sub<Point>` for
/// `Point` produces the displacement between them.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<S> {
    /// The x coordinate.
    pub x: S,
    /// The y coordinate.
    pub y: S,
}

impl<S> Point<S> {
    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline(always)]
    pub const fn new(x: S, y: S) -> Self {
        Point { x, y }
    }

    /// Convert this point into a `Vec2`.
    #[inline(always)]
    pub fn to_vec2(self) -> Vec2<S> {
        Vec2::new(self.x, self.y)
    }

    /// Convert the coordinates to another scalar type.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Point<T> {
        Point::new(f(self.x), f(self.y))
    }
}

impl<S: Zero> Point<S> {
    /// The point at the origin; (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Point::new(S::zero(), S::zero())
    }
}

impl<S: Num + Copy> Point<S> {
    /// Squared Euclidean distance.
    #[inline]
    pub fn distance_squared(self, other: Self) -> S {
        (self - other).hypot2()
    }
}

impl<S: Real> Point<S> {
    /// Linearly interpolate between two points.
    ///
    /// The result is exactly `self` at `t = 0` and exactly `other` at `t = 1`.
    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        self.to_vec2().lerp(other.to_vec2(), t).to_point()
    }

    /// Determine the midpoint of two points.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Point::new(
            S::half() * (self.x + other.x),
            S::half() * (self.y + other.y),
        )
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Self) -> S {
        (self - other).hypot()
    }

    /// Whether two points are within `tolerance` of each other.
    #[inline]
    pub fn is_near(self, other: Self, tolerance: S) -> bool {
        self.distance_squared(other) <= tolerance * tolerance
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Is this point NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl<S> From<(S, S)> for Point<S> {
    #[inline(always)]
    fn from(v: (S, S)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

impl<S> From<Point<S>> for (S, S) {
    #[inline(always)]
    fn from(v: Point<S>) -> (S, S) {
        (v.x, v.y)
    }
}

impl<S: Add<Output = S>> Add<Vec2<S>> for Point<S> {
    type Output = Self;

    #[inline]
    fn add(self, other: Vec2<S>) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl<S: Copy + Add<Output = S>> AddAssign<Vec2<S>> for Point<S> {
    #[inline]
    fn add_assign(&mut self, other: Vec2<S>) {
        *self = *self + other;
    }
}

impl<S: Sub<Output = S>> Sub<Vec2<S>> for Point<S> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Vec2<S>) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl<S: Copy + Sub<Output = S>> SubAssign<Vec2<S>> for Point<S> {
    #[inline]
    fn sub_assign(&mut self, other: Vec2<S>) {
        *self = *self - other;
    }
}

impl<S: Add<Output = S>> Add<(S, S)> for Point<S> {
    type Output = Self;

    #[inline]
    fn add(self, (x, y): (S, S)) -> Self {
        Point::new(self.x + x, self.y + y)
    }
}

impl<S: Sub<Output = S>> Sub<(S, S)> for Point<S> {
    type Output = Self;

    #[inline]
    fn sub(self, (x, y): (S, S)) -> Self {
        Point::new(self.x - x, self.y - y)
    }
}

impl<S: Sub<Output = S>> Sub for Point<S> {
    type Output = Vec2<S>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<S> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<S: fmt::Debug> fmt::Debug for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<S: fmt::Display> fmt::Display for Point<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl<S> From<Point<S>> for mint::Point2<S> {
    #[inline]
    fn from(p: Point<S>) -> mint::Point2<S> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl<S> From<mint::Point2<S>> for Point<S> {
    #[inline]
    fn from(p: mint::Point2<S>) -> Point<S> {
        Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        assert_eq!(
            Point::new(0., 0.) - Vec2::new(10., 0.),
            Point::new(-10., 0.)
        );
        assert_eq!(
            Point::new(0., 0.) - Point::new(-5., 101.),
            Vec2::new(5., -101.)
        );
    }

    #[test]
    fn integer_translation() {
        let mut p: Point<i32> = Point::new(1, 2);
        assert_eq!(p + Vec2::new(3, 4), Point::new(4, 6));
        p -= Vec2::new(1, 1);
        assert_eq!(p, Point::new(0, 1));
        assert_eq!(Point::new(7, 7) - p, Vec2::new(7, 6));
        assert_eq!(p.distance_squared(Point::new(3, 5)), 25);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn distance() {
        let p1 = Point::new(0., 10.);
        let p2 = Point::new(0., 5.);
        assert_eq!(p1.distance(p2), 5.);

        let p1 = Point::new(-11., 1.);
        let p2 = Point::new(-7., -2.);
        assert_eq!(p1.distance(p2), 5.);
    }

    #[test]
    fn midpoint_and_lerp() {
        let a = Point::new(0.1, 0.2);
        let b = Point::new(0.7, -0.4);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert!(a.midpoint(b).is_near(Point::new(0.4, -0.1), 1e-12));
    }

    #[test]
    fn display() {
        let p = Point::new(0.12345, 9.87654);
        assert_eq!(format!("{}", p), "(0.12345, 9.87654)");

        let p = Point::new(0.12345, 9.87654);
        assert_eq!(format!("{:.2}", p), "(0.12, 9.88)");
    }

    #[test]
    fn map_scalar() {
        let p = Point::new(1.5_f64, -2.25);
        let q: Point<f32> = p.map(|v| v as f32);
        assert_eq!(q, Point::new(1.5_f32, -2.25));
    }
}
