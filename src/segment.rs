// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments.

use core::ops::{Mul, Sub};

use crate::{Affine, Line, Point, Ray, Real, Rect, Vec2};

/// A single line segment from `start` to `end`.
///
/// A segment whose ends coincide is valid and has zero length.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<S> {
    /// The segment's start point.
    pub start: Point<S>,
    /// The segment's end point.
    pub end: Point<S>,
}

impl<S> Segment<S> {
    /// Create a new line segment.
    #[inline]
    pub fn new(start: impl Into<Point<S>>, end: impl Into<Point<S>>) -> Self {
        Segment {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Convert the coordinates to another scalar type.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Segment<T> {
        Segment {
            start: self.start.map(&mut f),
            end: self.end.map(f),
        }
    }

    /// The same segment, traversed from `end` to `start`.
    #[inline]
    #[must_use]
    pub fn reversed(self) -> Self {
        Segment {
            start: self.end,
            end: self.start,
        }
    }
}

impl<S: Copy + Sub<Output = S>> Segment<S> {
    /// The displacement from `start` to `end`.
    #[inline]
    pub fn vector(&self) -> Vec2<S> {
        self.end - self.start
    }

    /// The infinite line carrying this segment, directed from `start` to
    /// `end`.
    #[inline]
    pub fn to_line(&self) -> Line<S> {
        Line::new(self.start, self.vector())
    }

    /// The ray from `start` through `end`.
    #[inline]
    pub fn to_ray(&self) -> Ray<S> {
        Ray::new(self.start, self.vector())
    }
}

impl<S: Copy + PartialOrd> Segment<S> {
    /// The smallest rectangle enclosing the segment.
    #[inline]
    pub fn bounding_box(&self) -> Rect<S> {
        Rect::from_points(self.start, self.end)
    }
}

impl<S: Real> Segment<S> {
    /// The point at parameter `t`.
    ///
    /// Exact at the ends: `point(0)` is `start` and `point(1)` is `end`.
    #[inline]
    pub fn point(&self, t: S) -> Point<S> {
        self.start.lerp(self.end, t)
    }

    /// The length of the segment.
    #[inline]
    pub fn length(&self) -> S {
        self.vector().hypot()
    }

    /// The midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point<S> {
        self.start.midpoint(self.end)
    }

    /// The parameter of the point nearest to `pt`, and the squared distance
    /// to it.
    ///
    /// A zero-length segment reports parameter zero.
    pub fn nearest(&self, pt: Point<S>) -> (S, S) {
        let d = self.vector();
        let dotp = d.dot(pt - self.start);
        let d_squared = d.dot(d);
        if dotp <= S::zero() {
            (S::zero(), (pt - self.start).hypot2())
        } else if dotp >= d_squared {
            (S::one(), (pt - self.end).hypot2())
        } else {
            let t = dotp / d_squared;
            let dist = (pt - self.point(t)).hypot2();
            (t, dist)
        }
    }

    /// The point on the segment nearest to `pt`.
    #[inline]
    pub fn closest_point(&self, pt: Point<S>) -> Point<S> {
        self.point(self.nearest(pt).0)
    }

    /// Distance from `pt` to the nearest point of the segment.
    #[inline]
    pub fn distance(&self, pt: Point<S>) -> S {
        self.nearest(pt).1.sqrt()
    }

    /// The orthogonal projection of `pt` onto the carrier line.
    ///
    /// The result may lie outside the segment. Returns `None` for a
    /// zero-length segment.
    #[inline]
    pub fn projection(&self, pt: Point<S>) -> Option<Point<S>> {
        self.to_line().projection(pt)
    }
}

impl<S> From<(Point<S>, Point<S>)> for Segment<S> {
    #[inline]
    fn from((start, end): (Point<S>, Point<S>)) -> Self {
        Segment { start, end }
    }
}

impl<S: Real> Mul<Segment<S>> for Affine<S> {
    type Output = Segment<S>;

    #[inline]
    fn mul(self, other: Segment<S>) -> Segment<S> {
        Segment {
            start: self * other.start,
            end: self * other.end,
        }
    }
}
