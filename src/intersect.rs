// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection of straight primitives.
//!
//! Lines, rays and segments share one solver. Each operand contributes a
//! carrier (a point and a direction) and a rule for which parameters along
//! that carrier belong to it; the pair intersects when the solved parameters
//! are valid for both.

use crate::common::{clamp_unit, in_half_line, in_unit_interval, solve_parametric};
use crate::{Line, Point, Ray, Real, Segment, Vec2};

/// Intersection with another primitive.
///
/// The output type depends on the pairing: straight primitives meet in at
/// most one point (`Option<Point>`), a straight primitive and a conic in up
/// to two (`ArrayVec<Point, 2>`), and a polygon in any number (`Vec<Point>`).
///
/// Parallel and coincident straight primitives both report `None`.
///
/// ```
/// use planar::{Intersection, Line, Point, Ray, Vec2};
///
/// let line = Line::new(Point::new(0.0, 1.0), Vec2::new(1.0, 0.0));
/// let ray = Ray::new(Point::new(3.0, 0.0), Vec2::new(0.0, 2.0));
/// assert_eq!(line.intersection(&ray), Some(Point::new(3.0, 1.0)));
///
/// let behind = Ray::new(Point::new(3.0, 0.0), Vec2::new(0.0, -2.0));
/// assert_eq!(line.intersection(&behind), None);
/// ```
pub trait Intersection<Rhs: ?Sized = Self> {
    /// The intersection points, in whatever container fits the pairing.
    type Output;

    /// Compute the intersection of `self` and `other`.
    fn intersection(&self, other: &Rhs) -> Self::Output;
}

/// A straight primitive seen as a parametric carrier `origin + t·direction`.
pub(crate) trait Carrier<S: Real> {
    /// The point at parameter zero.
    fn origin(&self) -> Point<S>;

    /// The direction, the displacement per unit parameter.
    fn direction(&self) -> Vec2<S>;

    /// Whether parameter `t` is part of this primitive.
    fn accepts(t: S) -> bool;

    /// The point at an accepted parameter.
    fn at(&self, t: S) -> Point<S>;
}

impl<S: Real> Carrier<S> for Line<S> {
    #[inline]
    fn origin(&self) -> Point<S> {
        self.point
    }

    #[inline]
    fn direction(&self) -> Vec2<S> {
        self.direction
    }

    #[inline]
    fn accepts(_t: S) -> bool {
        true
    }

    #[inline]
    fn at(&self, t: S) -> Point<S> {
        self.point(t)
    }
}

impl<S: Real> Carrier<S> for Ray<S> {
    #[inline]
    fn origin(&self) -> Point<S> {
        self.origin
    }

    #[inline]
    fn direction(&self) -> Vec2<S> {
        self.direction
    }

    #[inline]
    fn accepts(t: S) -> bool {
        in_half_line(t)
    }

    #[inline]
    fn at(&self, t: S) -> Point<S> {
        self.point(t.max(S::zero()))
    }
}

impl<S: Real> Carrier<S> for Segment<S> {
    #[inline]
    fn origin(&self) -> Point<S> {
        self.start
    }

    #[inline]
    fn direction(&self) -> Vec2<S> {
        self.vector()
    }

    #[inline]
    fn accepts(t: S) -> bool {
        in_unit_interval(t)
    }

    #[inline]
    fn at(&self, t: S) -> Point<S> {
        self.point(clamp_unit(t))
    }
}

/// Intersect two straight primitives, evaluating the point on `a`.
pub(crate) fn intersect_carriers<S, A, B>(a: &A, b: &B) -> Option<Point<S>>
where
    S: Real,
    A: Carrier<S>,
    B: Carrier<S>,
{
    let (t, u) = solve_parametric(a.origin(), a.direction(), b.origin(), b.direction())?;
    if A::accepts(t) && B::accepts(u) {
        Some(a.at(t))
    } else {
        log::trace!("carriers cross outside the valid parameter range");
        None
    }
}

macro_rules! impl_straight_intersections {
    ($($a:ident x $b:ident),+ $(,)?) => {
        $(
            impl<S: Real> Intersection<$b<S>> for $a<S> {
                type Output = Option<Point<S>>;

                #[inline]
                fn intersection(&self, other: &$b<S>) -> Option<Point<S>> {
                    intersect_carriers(self, other)
                }
            }
        )+
    };
}

impl_straight_intersections! {
    Line x Line,
    Line x Ray,
    Line x Segment,
    Ray x Line,
    Ray x Ray,
    Ray x Segment,
    Segment x Line,
    Segment x Ray,
    Segment x Segment,
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn assert_near(p0: Point<f64>, p1: Point<f64>) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    #[test]
    fn crossing_segments() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
        let b = Segment::new(Point::new(0.0, 4.0), Point::new(4.0, 0.0));
        assert_eq!(a.intersection(&b), Some(Point::new(2.0, 2.0)));
        assert_eq!(b.intersection(&a), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn segments_sharing_an_endpoint() {
        let shared = Point::new(1.5, -2.25);
        let a = Segment::new(Point::new(-3.0, 7.0), shared);
        let b = Segment::new(shared, Point::new(10.0, 0.125));
        assert_eq!(a.intersection(&b), Some(shared));
        assert_eq!(b.intersection(&a), Some(shared));
    }

    #[test]
    fn segments_that_miss() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Segment::new(Point::new(3.0, 0.0), Point::new(0.0, 3.0));
        assert_eq!(a.intersection(&b), None);
        let line = a.to_line();
        assert_near(line.intersection(&b).unwrap(), Point::new(1.5, 1.5));
    }

    #[test]
    fn parallel_and_coincident_are_none() {
        let a = Line::new(Point::new(0.0, 0.0), Vec2::new(1.0, 2.0));
        let b = Line::new(Point::new(1.0, 0.0), Vec2::new(-2.0, -4.0));
        assert_eq!(a.intersection(&b), None);
        let c = Line::new(Point::new(1.0, 2.0), Vec2::new(3.0, 6.0));
        assert_eq!(a.intersection(&c), None, "coincident lines");
        let zero = Line::new(Point::new(0.0, 0.0), Vec2::new(0.0, 0.0));
        assert_eq!(a.intersection(&zero), None);
    }

    #[test]
    fn rays_respect_their_origin() {
        let ray = Ray::new(Point::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let ahead = Segment::new(Point::new(2.0, -1.0), Point::new(2.0, 1.0));
        let behind = Segment::new(Point::new(-2.0, -1.0), Point::new(-2.0, 1.0));
        assert_eq!(ray.intersection(&ahead), Some(Point::new(2.0, 0.0)));
        assert_eq!(ahead.intersection(&ray), Some(Point::new(2.0, 0.0)));
        assert_eq!(ray.intersection(&behind), None);

        let other = Ray::new(Point::new(0.0, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(ray.intersection(&other), Some(Point::new(0.0, 0.0)));
        let away = Ray::new(Point::new(1.0, 1.0), Vec2::new(0.0, 1.0));
        assert_eq!(ray.intersection(&away), None);
    }

    #[test]
    fn line_intersection_is_symmetric() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let mut pt = || -> Point<f64> {
                Point::new(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                )
            };
            let a = Line::through(pt(), pt());
            let b = Line::through(pt(), pt());
            if a.direction.cross(b.direction).abs() < 1e-3 {
                continue;
            }
            let ab = a.intersection(&b).unwrap();
            let ba = b.intersection(&a).unwrap();
            assert!(
                (ab - ba).hypot() <= 1e-6 * (1.0 + ab.to_vec2().hypot()),
                "{ab:?} != {ba:?}"
            );
        }
    }

    #[test]
    fn single_precision() {
        let a = Segment::new(Point::new(0.0_f32, 0.0), Point::new(2.0, 0.0));
        let b = Segment::new(Point::new(1.0_f32, -1.0), Point::new(1.0, 1.0));
        assert_eq!(a.intersection(&b), Some(Point::new(1.0_f32, 0.0)));
    }
}
