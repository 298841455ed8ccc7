// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of ellipse shape.

use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::circle::line_params;
use crate::common::{clamp_unit, in_half_line, in_unit_interval};
use crate::{Circle, Intersection, Line, Point, Ray, Real, Rect, Segment, Shape, Vec2};

/// An ellipse.
///
/// Stored as a center, the two semi-axes and the rotation of the major axis
/// away from the x axis, in radians. The constructor keeps
/// `semi_major >= semi_minor >= 0`, which the focal quantities rely on.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ellipse<S> {
    center: Point<S>,
    semi_major: S,
    semi_minor: S,
    rotation: S,
}

impl<S> Ellipse<S> {
    /// Convert the coordinates to another scalar type.
    ///
    /// The rotation is mapped too, so `f` should preserve angles as well as
    /// lengths.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Ellipse<T> {
        Ellipse {
            center: self.center.map(&mut f),
            semi_major: f(self.semi_major),
            semi_minor: f(self.semi_minor),
            rotation: f(self.rotation),
        }
    }
}

/// Deserialized axes go through [`Ellipse::new`], so the axis order holds.
#[cfg(feature = "serde")]
impl<'de, S: Real + serde::Deserialize<'de>> serde::Deserialize<'de> for Ellipse<S> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Ellipse")]
        struct Fields<S> {
            center: Point<S>,
            semi_major: S,
            semi_minor: S,
            rotation: S,
        }

        let f = <Fields<S> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Ellipse::new(f.center, f.semi_major, f.semi_minor, f.rotation))
    }
}

impl<S: Copy> Ellipse<S> {
    /// The center point.
    #[inline]
    pub fn center(&self) -> Point<S> {
        self.center
    }

    /// The semi-major axis, never shorter than the semi-minor one.
    #[inline]
    pub fn semi_major(&self) -> S {
        self.semi_major
    }

    /// The semi-minor axis.
    #[inline]
    pub fn semi_minor(&self) -> S {
        self.semi_minor
    }

    /// The angle from the x axis to the major axis, in radians.
    #[inline]
    pub fn rotation(&self) -> S {
        self.rotation
    }
}

impl<S: Real> Ellipse<S> {
    /// A new ellipse from center, semi-axes and rotation.
    ///
    /// Negative semi-axes are replaced by their absolute values. When
    /// `semi_minor` is the longer one the axes are swapped and the rotation
    /// advanced by a quarter turn, which describes the same ellipse.
    ///
    /// ```
    /// use planar::{Ellipse, Point};
    /// let e = Ellipse::new(Point::new(0.0, 0.0), 1.0, 2.0, 0.0);
    /// assert_eq!(e.semi_major(), 2.0);
    /// assert_eq!(e.semi_minor(), 1.0);
    /// assert_eq!(e.rotation(), std::f64::consts::FRAC_PI_2);
    /// ```
    pub fn new(center: impl Into<Point<S>>, semi_major: S, semi_minor: S, rotation: S) -> Self {
        let (a, b) = (semi_major.abs(), semi_minor.abs());
        let (semi_major, semi_minor, rotation) = if b > a {
            (b, a, rotation + S::FRAC_PI_2())
        } else {
            (a, b, rotation)
        };
        Ellipse {
            center: center.into(),
            semi_major,
            semi_minor,
            rotation,
        }
    }

    /// Returns the largest axis-aligned ellipse that fits inside this
    /// [`Rect`].
    #[inline]
    pub fn from_rect(rect: Rect<S>) -> Self {
        let half = rect.size().to_vec2() * S::half();
        Ellipse::new(rect.center(), half.x, half.y, S::zero())
    }

    /// The same ellipse with a new center.
    #[inline]
    #[must_use]
    pub fn with_center(self, center: Point<S>) -> Self {
        Ellipse { center, ..self }
    }

    /// The same ellipse with a new rotation.
    #[inline]
    #[must_use]
    pub fn with_rotation(self, rotation: S) -> Self {
        Ellipse { rotation, ..self }
    }

    /// The area, `πab`.
    #[inline]
    pub fn area(&self) -> S {
        S::PI() * self.semi_major * self.semi_minor
    }

    /// The circumference, by Ramanujan's second approximation.
    ///
    /// Exact for circles. The relative error is below 1e-9 while the axis
    /// ratio stays under 2, near 1e-6 at a ratio of 5 and 4e-4 for a flat
    /// ellipse.
    pub fn perimeter(&self) -> S {
        let (a, b) = (self.semi_major, self.semi_minor);
        let sum = a + b;
        if sum == S::zero() {
            return S::zero();
        }
        let ratio = (a - b) / sum;
        let h = ratio * ratio;
        let three = S::cast(3.0);
        let correction = three * h / (S::cast(10.0) + (S::cast(4.0) - three * h).sqrt());
        S::PI() * sum * (S::one() + correction)
    }

    /// The eccentricity, from zero for a circle towards one for a flat
    /// ellipse.
    ///
    /// A point-sized ellipse reports zero.
    pub fn eccentricity(&self) -> S {
        if self.semi_major == S::zero() {
            return S::zero();
        }
        let ratio = self.semi_minor / self.semi_major;
        (S::one() - ratio * ratio).max(S::zero()).sqrt()
    }

    /// Distance from the center to either focus, `√(a² − b²)`.
    #[inline]
    pub fn focal_distance(&self) -> S {
        let (a, b) = (self.semi_major, self.semi_minor);
        ((a - b) * (a + b)).max(S::zero()).sqrt()
    }

    /// The two foci, on the major axis, the negative side first.
    pub fn foci(&self) -> (Point<S>, Point<S>) {
        let offset = Vec2::from_angle(self.rotation) * self.focal_distance();
        (self.center - offset, self.center + offset)
    }

    /// The point at parameter `t`, the eccentric anomaly in radians.
    pub fn point(&self, t: S) -> Point<S> {
        let (sin, cos) = t.sin_cos();
        let local = Vec2::new(self.semi_major * cos, self.semi_minor * sin);
        self.center + local.rotate(self.rotation)
    }

    /// The derivative of [`Ellipse::point`] with respect to `t`.
    pub fn tangent(&self, t: S) -> Vec2<S> {
        let (sin, cos) = t.sin_cos();
        Vec2::new(-self.semi_major * sin, self.semi_minor * cos).rotate(self.rotation)
    }

    /// Express `pt` in the ellipse's own frame: centred, major axis along x.
    #[inline]
    fn to_local(&self, pt: Point<S>) -> Vec2<S> {
        let (sin, cos) = self.rotation.sin_cos();
        (pt - self.center).rotate_by(cos, -sin)
    }

    /// Whether `pt` lies inside the ellipse, boundary included.
    ///
    /// Evaluates `(x/a)² + (y/b)² <= 1` in the local frame, multiplied out
    /// so that a zero semi-axis does not divide by zero.
    pub fn contains(&self, pt: Point<S>) -> bool {
        let (a, b) = (self.semi_major, self.semi_minor);
        let local = self.to_local(pt);
        let extent = self.center.x.abs() + self.center.y.abs() + a;
        let slack = S::cast(4.0) * S::epsilon();
        if local.x.abs() > a + slack * extent || local.y.abs() > b + slack * extent {
            return false;
        }
        let (xb, ya, ab) = (local.x * b, local.y * a, a * b);
        xb * xb + ya * ya - ab * ab <= slack * ab * ((a + b) * extent + ab)
    }

    /// The smallest rectangle that encloses the ellipse.
    pub fn bounding_box(&self) -> Rect<S> {
        let (a, b) = (self.semi_major, self.semi_minor);
        let (sin, cos) = self.rotation.sin_cos();
        let half_width = (a * a * cos * cos + b * b * sin * sin).sqrt();
        let half_height = (a * a * sin * sin + b * b * cos * cos).sqrt();
        let Point { x, y } = self.center;
        Rect::new(x - half_width, y - half_height, x + half_width, y + half_height)
    }

    /// Parameters along `p0 + t·d` where it meets the ellipse.
    ///
    /// The line is mapped into the frame where the ellipse is the unit
    /// circle, which leaves the parameters unchanged.
    fn line_params(&self, p0: Point<S>, d: Vec2<S>) -> ArrayVec<S, 2> {
        let (a, b) = (self.semi_major, self.semi_minor);
        if a == S::zero() || b == S::zero() {
            log::trace!("ellipse without area has no line intersections");
            return ArrayVec::new();
        }
        let scale = |v: Vec2<S>| Vec2::new(v.x / a, v.y / b);
        let origin = scale(self.to_local(p0)).to_point();
        let (sin, cos) = self.rotation.sin_cos();
        let direction = scale(d.rotate_by(cos, -sin));
        line_params(Point::origin(), S::one(), origin, direction)
    }

    /// Intersection points with an infinite line, ordered along its
    /// direction.
    pub fn intersections(&self, line: &Line<S>) -> ArrayVec<Point<S>, 2> {
        self.line_params(line.point, line.direction)
            .into_iter()
            .map(|t| line.point(t))
            .collect()
    }

    /// Intersection points with a ray, ordered from the origin outwards.
    pub fn intersections_ray(&self, ray: &Ray<S>) -> ArrayVec<Point<S>, 2> {
        self.line_params(ray.origin, ray.direction)
            .into_iter()
            .filter(|t| in_half_line(*t))
            .map(|t| ray.point(t.max(S::zero())))
            .collect()
    }

    /// Intersection points with a segment, ordered from its start.
    pub fn intersections_segment(&self, segment: &Segment<S>) -> ArrayVec<Point<S>, 2> {
        self.line_params(segment.start, segment.vector())
            .into_iter()
            .filter(|t| in_unit_interval(*t))
            .map(|t| segment.point(clamp_unit(t)))
            .collect()
    }

    /// Is this ellipse finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.semi_major.is_finite()
            && self.semi_minor.is_finite()
            && self.rotation.is_finite()
    }
}

impl<S: Real> From<Circle<S>> for Ellipse<S> {
    #[inline]
    fn from(circle: Circle<S>) -> Self {
        circle.to_ellipse()
    }
}

impl<S: Real> Shape<S> for Ellipse<S> {
    #[inline]
    fn area(&self) -> S {
        Ellipse::area(self)
    }

    #[inline]
    fn perimeter(&self) -> S {
        Ellipse::perimeter(self)
    }

    #[inline]
    fn contains(&self, pt: Point<S>) -> bool {
        Ellipse::contains(self, pt)
    }

    #[inline]
    fn bounding_box(&self) -> Rect<S> {
        Ellipse::bounding_box(self)
    }
}

macro_rules! impl_ellipse_intersections {
    ($($other:ident => $method:ident),+ $(,)?) => {
        $(
            impl<S: Real> Intersection<$other<S>> for Ellipse<S> {
                type Output = ArrayVec<Point<S>, 2>;

                #[inline]
                fn intersection(&self, other: &$other<S>) -> Self::Output {
                    self.$method(other)
                }
            }

            impl<S: Real> Intersection<Ellipse<S>> for $other<S> {
                type Output = ArrayVec<Point<S>, 2>;

                #[inline]
                fn intersection(&self, other: &Ellipse<S>) -> Self::Output {
                    other.$method(self)
                }
            }
        )+
    };
}

impl_ellipse_intersections! {
    Line => intersections,
    Ray => intersections_ray,
    Segment => intersections_segment,
}

impl<S: Copy + Add<Output = S>> Add<Vec2<S>> for Ellipse<S> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<S>) -> Self {
        Ellipse {
            center: self.center + v,
            ..self
        }
    }
}

impl<S: Copy + Sub<Output = S>> Sub<Vec2<S>> for Ellipse<S> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<S>) -> Self {
        Ellipse {
            center: self.center - v,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-7, "{x} != {y}");
    }

    fn assert_near(p0: Point<f64>, p1: Point<f64>) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    fn assert_rect_near(r0: Rect<f64>, r1: Rect<f64>) {
        assert_near(r0.origin(), r1.origin());
        assert_near(Point::new(r0.x1, r0.y1), Point::new(r1.x1, r1.y1));
    }

    #[test]
    fn equal_axes_behave_like_a_circle() {
        let r = 2.5;
        let e = Ellipse::new((1.0, -3.0), r, r, 0.3);
        let circle = Circle::new((1.0, -3.0), r);
        assert_approx_eq(e.area(), PI * r * r);
        assert_approx_eq(e.eccentricity(), 0.0);
        assert_approx_eq(e.focal_distance(), 0.0);
        assert_rect_near(e.bounding_box(), circle.bounding_box());
        assert_approx_eq(e.perimeter(), circle.perimeter());
    }

    #[test]
    fn axes_are_reordered() {
        let tall = Ellipse::new((0.0, 0.0), 3.0, -5.0, 0.0);
        assert_eq!(tall.semi_major(), 5.0);
        assert_eq!(tall.semi_minor(), 3.0);
        assert_eq!(tall.rotation(), FRAC_PI_2);
        // Still the ellipse that is 6 wide and 10 tall.
        assert_rect_near(tall.bounding_box(), Rect::new(-3.0, -5.0, 3.0, 5.0));
        assert!(tall.contains(Point::new(0.0, 4.9)));
        assert!(!tall.contains(Point::new(4.9, 0.0)));
        assert_approx_eq(tall.focal_distance(), 4.0);
        let (f0, f1) = tall.foci();
        assert_near(f0, Point::new(0.0, -4.0));
        assert_near(f1, Point::new(0.0, 4.0));
    }

    #[test]
    fn ramanujan_perimeter() {
        let e = Ellipse::new((0.0, 0.0), 5.0, 3.0, 0.0);
        // Reference value by numerical integration of the elliptic integral.
        let exact: f64 = 25.526998863397868;
        assert!(
            (e.perimeter() - exact).abs() / exact < 1e-9,
            "perimeter {} too far from {exact}",
            e.perimeter()
        );
        assert_approx_eq(e.eccentricity(), 0.8);
    }

    #[test]
    fn boundary_points_are_contained() {
        let e = Ellipse::new((1.0, 2.0), 5.0, 3.0, 0.7);
        for i in 0..64 {
            let t = f64::from(i) * PI / 32.0;
            let p = e.point(t);
            assert!(e.contains(p), "boundary point at {t} not contained");
            let outside = p + (p - e.center()) * 0.01;
            assert!(!e.contains(outside), "{outside:?} should be outside");
        }
        assert!(e.contains(e.center()));
    }

    #[test]
    fn flat_ellipse_containment() {
        let flat = Ellipse::new((0.0, 0.0), 2.0, 0.0, 0.0);
        assert!(flat.contains(Point::new(1.0, 0.0)));
        assert!(!flat.contains(Point::new(3.0, 0.0)));
        assert!(!flat.contains(Point::new(1.0, 0.5)));
        let vertical = Line::new(Point::new(0.0, -1.0), Vec2::new(0.0, 1.0));
        assert!(flat.intersections(&vertical).is_empty());
    }

    #[test]
    fn tangent_is_derivative() {
        let e = Ellipse::new((0.5, 0.5), 4.0, 1.0, 0.4);
        let t = 1.1;
        let h = 1e-6;
        let numeric = (e.point(t + h) - e.point(t - h)) / (2.0 * h);
        assert!((numeric - e.tangent(t)).hypot() < 1e-6);
    }

    #[test]
    fn rotated_bounding_box() {
        let e = Ellipse::new((0.0, 0.0), 2.0, 1.0, FRAC_PI_2);
        assert_rect_near(e.bounding_box(), Rect::new(-1.0, -2.0, 1.0, 2.0));
        let e = Ellipse::new((0.0, 0.0), 2.0, 1.0, PI / 4.0);
        let half = 2.5_f64.sqrt();
        assert_rect_near(e.bounding_box(), Rect::new(-half, -half, half, half));
    }

    #[test]
    fn line_and_ray_intersections() {
        let e = Ellipse::new((0.0, 0.0), 2.0, 1.0, 0.0);
        let axis = Line::new(Point::new(-5.0, 0.0), Vec2::new(1.0, 0.0));
        let hits = e.intersections(&axis);
        assert_eq!(hits.len(), 2);
        assert_near(hits[0], Point::new(-2.0, 0.0));
        assert_near(hits[1], Point::new(2.0, 0.0));

        let rotated = e.with_rotation(FRAC_PI_2);
        let ray = Ray::new(Point::new(0.0, 0.0), Vec2::new(0.0, 3.0));
        let hits = ray.intersection(&rotated);
        assert_eq!(hits.len(), 1);
        assert_near(hits[0], Point::new(0.0, 2.0));

        let tangent = Line::new(Point::new(7.0, 1.0), Vec2::new(-2.0, 0.0));
        let hits = e.intersection(&tangent);
        assert_eq!(hits.len(), 1);
        assert_near(hits[0], Point::new(0.0, 1.0));

        let chord = Segment::new((0.0, 0.0), (0.0, 0.5));
        assert!(e.intersections_segment(&chord).is_empty());
    }

    #[test]
    fn from_rect_fits_inside() {
        let e = Ellipse::from_rect(Rect::new(0.0, 0.0, 4.0, 10.0));
        assert_eq!(e.center(), Point::new(2.0, 5.0));
        assert_eq!(e.semi_major(), 5.0);
        assert_rect_near(e.bounding_box(), Rect::new(0.0, 0.0, 4.0, 10.0));
    }
}
