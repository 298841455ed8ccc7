// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rays, lines bounded on one side.

use core::ops::Mul;

use crate::common::project_param;
use crate::{Affine, Line, Point, Real, Vec2};

/// A half-line starting at `origin` and running along `direction`.
///
/// As with [`Line`], a zero direction is allowed and detected by queries.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray<S> {
    /// The start of the ray.
    pub origin: Point<S>,
    /// The direction the ray travels in.
    pub direction: Vec2<S>,
}

impl<S> Ray<S> {
    /// Create a new ray.
    #[inline]
    pub const fn new(origin: Point<S>, direction: Vec2<S>) -> Self {
        Ray { origin, direction }
    }

    /// Convert the coordinates to another scalar type.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Ray<T> {
        Ray::new(self.origin.map(&mut f), self.direction.map(f))
    }

    /// The infinite line carrying this ray.
    #[inline]
    pub fn to_line(self) -> Line<S> {
        Line::new(self.origin, self.direction)
    }
}

impl<S: Real> Ray<S> {
    /// The point at parameter `t`, `origin + t·direction`.
    ///
    /// Only non-negative `t` lies on the ray; this does not check.
    #[inline]
    pub fn point(&self, t: S) -> Point<S> {
        self.origin + self.direction * t
    }

    /// The point on the ray nearest to `pt`.
    ///
    /// Points behind the origin map to the origin, as does everything when
    /// the direction is zero.
    pub fn closest_point(&self, pt: Point<S>) -> Point<S> {
        match project_param(self.origin, self.direction, pt) {
            Some(t) if t > S::zero() => self.point(t),
            _ => self.origin,
        }
    }

    /// Distance from `pt` to the nearest point of the ray.
    #[inline]
    pub fn distance(&self, pt: Point<S>) -> S {
        pt.distance(self.closest_point(pt))
    }

    /// The orthogonal projection of `pt` onto the carrier line.
    ///
    /// Unlike [`Ray::closest_point`], the result may lie behind the origin.
    /// Returns `None` when the direction is zero.
    #[inline]
    pub fn projection(&self, pt: Point<S>) -> Option<Point<S>> {
        self.to_line().projection(pt)
    }
}

impl<S: Real> Mul<Ray<S>> for Affine<S> {
    type Output = Ray<S>;

    #[inline]
    fn mul(self, other: Ray<S>) -> Ray<S> {
        Ray::new(self * other.origin, self * other.direction)
    }
}
