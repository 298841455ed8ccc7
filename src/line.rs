// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite lines.

use core::ops::{Mul, Sub};

use crate::common::{is_near_zero, project_param};
use crate::{Affine, Point, Real, Vec2};

/// An infinite line through `point`, running along `direction`.
///
/// A zero `direction` is allowed; queries that need a direction detect it and
/// return `None` (or an empty result).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<S> {
    /// A point on the line.
    pub point: Point<S>,
    /// The direction of the line.
    pub direction: Vec2<S>,
}

impl<S> Line<S> {
    /// Create a new line from a point and a direction.
    #[inline]
    pub const fn new(point: Point<S>, direction: Vec2<S>) -> Self {
        Line { point, direction }
    }

    /// Convert the coordinates to another scalar type.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Line<T> {
        Line::new(self.point.map(&mut f), self.direction.map(f))
    }
}

impl<S: Copy + Sub<Output = S>> Line<S> {
    /// The line through two points, directed from `p0` to `p1`.
    #[inline]
    pub fn through(p0: Point<S>, p1: Point<S>) -> Self {
        Line::new(p0, p1 - p0)
    }
}

impl<S: Real> Line<S> {
    /// The point at parameter `t`, `point + t·direction`.
    #[inline]
    pub fn point(&self, t: S) -> Point<S> {
        self.point + self.direction * t
    }

    /// A normal of the line: the direction turned a quarter turn, with the
    /// same length.
    #[inline]
    pub fn normal(&self) -> Vec2<S> {
        self.direction.turn_90()
    }

    /// Perpendicular distance from `pt` to the line.
    ///
    /// Returns `None` when the direction is zero.
    pub fn distance(&self, pt: Point<S>) -> Option<S> {
        if self.direction.is_degenerate() {
            log::trace!("distance to a line without direction");
            return None;
        }
        Some(self.direction.cross(pt - self.point).abs() / self.direction.hypot())
    }

    /// The orthogonal projection of `pt` onto the line.
    ///
    /// Returns `None` when the direction is zero.
    pub fn projection(&self, pt: Point<S>) -> Option<Point<S>> {
        project_param(self.point, self.direction, pt).map(|t| self.point(t))
    }

    /// The mirror image of `pt` across the line.
    ///
    /// Returns `None` when the direction is zero.
    ///
    /// ```
    /// use planar::{Line, Point, Vec2};
    /// let diagonal = Line::new(Point::new(0.0, 0.0), Vec2::new(1.0, 1.0));
    /// assert_eq!(diagonal.reflection(Point::new(2.0, 0.0)), Some(Point::new(0.0, 2.0)));
    /// ```
    pub fn reflection(&self, pt: Point<S>) -> Option<Point<S>> {
        let foot = self.projection(pt)?;
        Some(foot + (foot - pt))
    }

    /// Whether `pt` lies on the line, within the scalar's epsilon relative to
    /// the size of the coordinates involved.
    ///
    /// Always false for a line without direction.
    pub fn contains(&self, pt: Point<S>) -> bool {
        if self.direction.is_degenerate() {
            return false;
        }
        let offset = pt - self.point;
        let scale = self.direction.hypot() * offset.hypot().max(S::one());
        self.direction.cross(offset).abs() <= S::epsilon() * scale
    }

    /// Whether the two lines run in the same or opposite directions.
    ///
    /// Uses the same test as intersection, so two lines are parallel exactly
    /// when their intersection is `None`.
    #[inline]
    pub fn is_parallel(&self, other: &Self) -> bool {
        is_near_zero(self.direction.cross(other.direction))
    }
}

impl<S: Real> Mul<Line<S>> for Affine<S> {
    type Output = Line<S>;

    #[inline]
    fn mul(self, other: Line<S>) -> Line<S> {
        Line::new(self * other.point, self * other.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_and_projection() {
        let line = Line::new(Point::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        assert_eq!(line.distance(Point::new(5.0, 4.0)), Some(3.0));
        assert_eq!(line.projection(Point::new(5.0, 4.0)), Some(Point::new(5.0, 1.0)));
        assert_eq!(line.reflection(Point::new(5.0, 4.0)), Some(Point::new(5.0, -2.0)));
        assert_eq!(line.normal(), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn zero_direction() {
        let line = Line::new(Point::new(1.0, 1.0), Vec2::new(0.0, 0.0));
        assert_eq!(line.distance(Point::new(0.0, 0.0)), None);
        assert_eq!(line.projection(Point::new(0.0, 0.0)), None);
        assert_eq!(line.reflection(Point::new(0.0, 0.0)), None);
        assert!(!line.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn containment_and_parallelism() {
        let a = Line::through(Point::new(0.0, 0.0), Point::new(2.0, 1.0));
        assert!(a.contains(Point::new(4.0, 2.0)));
        assert!(a.contains(a.point(-7.5)));
        assert!(!a.contains(Point::new(4.0, 2.1)));
        let b = Line::new(Point::new(0.0, 5.0), Vec2::new(-4.0, -2.0));
        assert!(a.is_parallel(&b));
        assert!(!a.is_parallel(&Line::new(Point::new(0.0, 0.0), Vec2::new(1.0, 0.0))));
    }

    #[test]
    fn transformed() {
        let line = Line::new(Point::new(1.0, 0.0), Vec2::new(1.0, 0.0));
        let moved = Affine::translate((0.0, 2.0)) * line;
        assert_eq!(moved, Line::new(Point::new(1.0, 2.0), Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn map_to_f32() {
        let line = Line::new(Point::new(1.0_f64, 2.0), Vec2::new(0.5, 0.25));
        let mapped = line.map(|v| v as f32);
        assert_eq!(mapped.direction, Vec2::new(0.5_f32, 0.25));
    }
}
