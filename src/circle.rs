// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::common::{clamp_unit, in_half_line, in_unit_interval};
use crate::{Arc, Ellipse, Intersection, Line, Point, Ray, Real, Rect, Segment, Shape, Vec2};

/// A circle.
///
/// A zero radius is valid; the circle is then a single point.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle<S> {
    /// The center.
    pub center: Point<S>,
    /// The radius.
    pub radius: S,
}

impl<S> Circle<S> {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point<S>>, radius: S) -> Self {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Convert the coordinates to another scalar type.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Circle<T> {
        Circle {
            center: self.center.map(&mut f),
            radius: f(self.radius),
        }
    }
}

impl<S: Real> Circle<S> {
    /// The diameter.
    #[inline]
    pub fn diameter(&self) -> S {
        S::two() * self.radius
    }

    /// The area, `πr²`.
    #[inline]
    pub fn area(&self) -> S {
        S::PI() * self.radius * self.radius
    }

    /// The circumference, `2πr`.
    #[inline]
    pub fn perimeter(&self) -> S {
        (S::TAU() * self.radius).abs()
    }

    /// Whether `pt` lies inside the circle, boundary included.
    ///
    /// The boundary is widened by a few epsilons of the squared coordinate
    /// magnitude, so points computed on the circle test as inside.
    #[inline]
    pub fn contains(&self, pt: Point<S>) -> bool {
        let extent = self.center.x.abs() + self.center.y.abs() + self.radius.abs();
        let tolerance = S::cast(4.0) * S::epsilon() * (extent * extent).max(S::one());
        (pt - self.center).hypot2() - self.radius * self.radius <= tolerance
    }

    /// The smallest rectangle that encloses the circle.
    #[inline]
    pub fn bounding_box(&self) -> Rect<S> {
        let r = self.radius.abs();
        let Point { x, y } = self.center;
        Rect::new(x - r, y - r, x + r, y + r)
    }

    /// The point on the circle at `angle` radians.
    #[inline]
    pub fn point(&self, angle: S) -> Point<S> {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    /// The derivative of [`Circle::point`] with respect to the angle.
    ///
    /// Its length is the radius; it points counter-clockwise in a y-up space.
    #[inline]
    pub fn tangent(&self, angle: S) -> Vec2<S> {
        Vec2::from_angle(angle).turn_90() * self.radius
    }

    /// The full circle as an arc, starting at angle zero.
    #[inline]
    pub fn to_arc(&self) -> Arc<S> {
        Arc::new(self.center, self.radius, S::zero(), S::TAU())
    }

    /// The circle as an ellipse with equal semi-axes.
    #[inline]
    pub fn to_ellipse(&self) -> Ellipse<S> {
        Ellipse::new(self.center, self.radius, self.radius, S::zero())
    }

    /// Intersection points with an infinite line.
    ///
    /// Returns zero, one (tangent) or two points, ordered along the line's
    /// direction. A line without direction has no intersections.
    pub fn intersections(&self, line: &Line<S>) -> ArrayVec<Point<S>, 2> {
        line_params(self.center, self.radius, line.point, line.direction)
            .into_iter()
            .map(|t| line.point(t))
            .collect()
    }

    /// Intersection points with a ray, ordered from the origin outwards.
    pub fn intersections_ray(&self, ray: &Ray<S>) -> ArrayVec<Point<S>, 2> {
        line_params(self.center, self.radius, ray.origin, ray.direction)
            .into_iter()
            .filter(|t| in_half_line(*t))
            .map(|t| ray.point(t.max(S::zero())))
            .collect()
    }

    /// Intersection points with a segment, ordered from its start.
    pub fn intersections_segment(&self, segment: &Segment<S>) -> ArrayVec<Point<S>, 2> {
        line_params(self.center, self.radius, segment.start, segment.vector())
            .into_iter()
            .filter(|t| in_unit_interval(*t))
            .map(|t| segment.point(clamp_unit(t)))
            .collect()
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

/// Parameters `t` where `p0 + t·d` meets the circle, ascending.
///
/// Substitutes the line into `|p − c|² = r²`, giving `a t² + 2h t + k = 0`.
/// A discriminant within epsilon of zero, relative to its terms, is a
/// tangent and yields one parameter.
pub(crate) fn line_params<S: Real>(
    center: Point<S>,
    radius: S,
    p0: Point<S>,
    d: Vec2<S>,
) -> ArrayVec<S, 2> {
    let mut result = ArrayVec::new();
    if d.is_degenerate() {
        log::trace!("line without direction cannot cross a circle");
        return result;
    }
    let w = p0 - center;
    let a = d.hypot2();
    let h = d.dot(w);
    let k = w.hypot2() - radius * radius;
    let disc = h * h - a * k;
    if disc.abs() <= S::epsilon() * (h * h).max(a * k.abs()) {
        result.push(-h / a);
        return result;
    }
    if disc < S::zero() {
        return result;
    }
    // Avoid cancellation between -h and the root of the discriminant.
    let q = -(h + disc.sqrt().copysign(h));
    let (t0, t1) = (q / a, k / q);
    if t0 <= t1 {
        result.push(t0);
        result.push(t1);
    } else {
        result.push(t1);
        result.push(t0);
    }
    result
}

impl<S: Real> Shape<S> for Circle<S> {
    #[inline]
    fn area(&self) -> S {
        Circle::area(self)
    }

    #[inline]
    fn perimeter(&self) -> S {
        Circle::perimeter(self)
    }

    #[inline]
    fn contains(&self, pt: Point<S>) -> bool {
        Circle::contains(self, pt)
    }

    #[inline]
    fn bounding_box(&self) -> Rect<S> {
        Circle::bounding_box(self)
    }
}

macro_rules! impl_circle_intersections {
    ($($other:ident => $method:ident),+ $(,)?) => {
        $(
            impl<S: Real> Intersection<$other<S>> for Circle<S> {
                type Output = ArrayVec<Point<S>, 2>;

                #[inline]
                fn intersection(&self, other: &$other<S>) -> Self::Output {
                    self.$method(other)
                }
            }

            impl<S: Real> Intersection<Circle<S>> for $other<S> {
                type Output = ArrayVec<Point<S>, 2>;

                #[inline]
                fn intersection(&self, other: &Circle<S>) -> Self::Output {
                    other.$method(self)
                }
            }
        )+
    };
}

impl_circle_intersections! {
    Line => intersections,
    Ray => intersections_ray,
    Segment => intersections_segment,
}

impl<S: Copy + Add<Output = S>> Add<Vec2<S>> for Circle<S> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<S>) -> Self {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl<S: Copy + Sub<Output = S>> Sub<Vec2<S>> for Circle<S> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<S>) -> Self {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{PI, SQRT_2};

    use super::*;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-7, "{x} != {y}");
    }

    fn assert_near(p0: Point<f64>, p1: Point<f64>) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    #[test]
    fn diagonal_ray_from_center() {
        let circle = Circle::new((0.0, 0.0), 5.0);
        let ray = Ray::new(Point::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let hits = circle.intersections_ray(&ray);
        assert_eq!(hits.len(), 1);
        let expected = 5.0 / SQRT_2;
        assert_near(hits[0], Point::new(expected, expected));
        assert_eq!(ray.intersection(&circle), hits);
    }

    #[test]
    fn secant_line_is_ordered() {
        let circle = Circle::new((1.0, 1.0), 2.0);
        let line = Line::new(Point::new(10.0, 1.0), Vec2::new(-1.0, 0.0));
        let hits = circle.intersections(&line);
        assert_eq!(hits.len(), 2);
        assert_near(hits[0], Point::new(3.0, 1.0));
        assert_near(hits[1], Point::new(-1.0, 1.0));
    }

    #[test]
    fn tangent_and_miss() {
        let circle = Circle::new((0.0, 0.0), 1.0);
        let tangent = Line::new(Point::new(-3.0, 1.0), Vec2::new(1.0, 0.0));
        let hits = circle.intersections(&tangent);
        assert_eq!(hits.len(), 1, "tangent line touches once");
        assert_near(hits[0], Point::new(0.0, 1.0));

        let miss = Line::new(Point::new(-3.0, 1.5), Vec2::new(1.0, 0.0));
        assert!(circle.intersections(&miss).is_empty());

        let no_direction = Line::new(Point::new(0.0, 0.0), Vec2::new(0.0, 0.0));
        assert!(circle.intersections(&no_direction).is_empty());
    }

    #[test]
    fn segment_hits() {
        let circle = Circle::new((0.0, 0.0), 2.0);
        let inside = Segment::new((-1.0, 0.0), (1.0, 0.0));
        assert!(circle.intersections_segment(&inside).is_empty());
        let half = Segment::new((0.0, 0.0), (0.0, 5.0));
        let hits = half.intersection(&circle);
        assert_eq!(hits.len(), 1);
        assert_near(hits[0], Point::new(0.0, 2.0));
        let through = Segment::new((-4.0, 0.0), (4.0, 0.0));
        let hits = circle.intersection(&through);
        assert_eq!(hits.len(), 2);
        assert_near(hits[0], Point::new(-2.0, 0.0));
        assert_near(hits[1], Point::new(2.0, 0.0));
    }

    #[test]
    fn boundary_points_are_contained() {
        let circle = Circle::new((3.0, -2.0), 7.5);
        for i in 0..64 {
            let angle = f64::from(i) * PI / 32.0;
            let p = circle.point(angle);
            assert!(circle.contains(p), "boundary point at {angle} not contained");
        }
        assert!(circle.contains(circle.center));
        assert!(!circle.contains(Point::new(3.0, 5.6)));
        let point_circle = Circle::new((1.0, 1.0), 0.0);
        assert!(point_circle.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn measurements() {
        let circle = Circle::new((1.0, 2.0), 3.0);
        assert_approx_eq(circle.area(), 9.0 * PI);
        assert_approx_eq(circle.perimeter(), 6.0 * PI);
        assert_eq!(circle.diameter(), 6.0);
        assert_eq!(circle.bounding_box(), Rect::new(-2.0, -1.0, 4.0, 5.0));
        let t = circle.tangent(0.0);
        assert_near(t.to_point(), Point::new(0.0, 3.0));
        assert_approx_eq(circle.to_arc().length(), circle.perimeter());
        assert_approx_eq(circle.to_ellipse().area(), circle.area());
        assert_eq!(circle + Vec2::new(1.0, 1.0), Circle::new((2.0, 3.0), 3.0));
    }
}
