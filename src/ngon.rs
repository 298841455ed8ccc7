// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygons with a fixed number of vertices.

use alloc::vec::Vec;
use core::ops::{Add, Mul, Sub};

use crate::intersect::{intersect_carriers, Carrier};
use crate::{Affine, Intersection, Line, Path, Point, Ray, Real, Rect, Segment, Shape, Vec2};

/// A closed polygon with `N` vertices.
///
/// The last vertex connects back to the first, so an `Ngon` has `N` edges.
/// Any vertex order and self-intersecting outlines are accepted;
/// containment uses the even-odd rule.
///
/// ```
/// use planar::{Point, Triangle};
///
/// let t = Triangle::new([
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(0.0, 3.0),
/// ]);
/// assert_eq!(t.area(), 6.0);
/// assert_eq!(t.perimeter(), 12.0);
/// assert!(t.contains(Point::new(1.0, 1.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ngon<S, const N: usize> {
    vertices: [Point<S>; N],
}

/// A triangle.
pub type Triangle<S> = Ngon<S, 3>;

/// A quadrilateral.
pub type Quad<S> = Ngon<S, 4>;

impl<S, const N: usize> Ngon<S, N> {
    /// A polygon through the given vertices, in order.
    #[inline]
    pub const fn new(vertices: [Point<S>; N]) -> Self {
        Ngon { vertices }
    }

    /// The vertices, in order.
    #[inline]
    pub fn vertices(&self) -> &[Point<S>; N] {
        &self.vertices
    }

    /// Convert the coordinates to another scalar type.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Ngon<T, N> {
        Ngon {
            vertices: self.vertices.map(|p| p.map(&mut f)),
        }
    }
}

impl<S: Copy, const N: usize> Ngon<S, N> {
    /// The edges, from each vertex to the next; the last edge closes the
    /// polygon.
    pub fn edges(&self) -> [Segment<S>; N] {
        let v = &self.vertices;
        core::array::from_fn(|i| Segment::new(v[i], v[(i + 1) % N]))
    }
}

impl<S: Real, const N: usize> Ngon<S, N> {
    /// Total length of the edges.
    pub fn perimeter(&self) -> S {
        self.edges()
            .iter()
            .fold(S::zero(), |acc, edge| acc + edge.length())
    }

    /// Signed area by the shoelace formula.
    ///
    /// Positive when the vertices run from the x axis towards the y axis.
    pub fn signed_area(&self) -> S {
        let twice = self
            .edges()
            .iter()
            .fold(S::zero(), |acc, e| acc + e.start.to_vec2().cross(e.end.to_vec2()));
        twice * S::half()
    }

    /// The enclosed area, regardless of vertex order.
    #[inline]
    pub fn area(&self) -> S {
        self.signed_area().abs()
    }

    /// The mean of the vertices.
    ///
    /// NaN for a polygon without vertices.
    pub fn centroid(&self) -> Point<S> {
        let sum = self
            .vertices
            .iter()
            .fold(Vec2::zero(), |acc, p| acc + p.to_vec2());
        (sum / S::from_usize(N)).to_point()
    }

    /// The smallest rectangle enclosing every vertex.
    ///
    /// A polygon without vertices reports the zero rectangle.
    pub fn bounding_box(&self) -> Rect<S> {
        Rect::from_points_iter(self.vertices).unwrap_or_default()
    }

    /// Whether `pt` lies inside the polygon by the even-odd rule.
    ///
    /// Points on an edge, within a few epsilons of the coordinate magnitude,
    /// count as inside.
    pub fn contains(&self, pt: Point<S>) -> bool {
        let edges = self.edges();
        let tolerance = S::cast(4.0) * S::epsilon() * (pt.x.abs() + pt.y.abs()).max(S::one());
        if edges.iter().any(|e| e.distance(pt) <= tolerance) {
            return true;
        }
        let mut inside = false;
        for Segment { start: a, end: b } in edges {
            if (a.y > pt.y) != (b.y > pt.y) {
                let x = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if pt.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// The polygon as a closed path of line segments.
    ///
    /// Returns `None` for fewer than three vertices.
    #[inline]
    pub fn to_path(&self) -> Option<Path<S>> {
        Path::polygon(&self.vertices)
    }

    /// Every crossing of a straight primitive with the edges, in edge order.
    ///
    /// A crossing through a vertex is reported once for each edge meeting
    /// there.
    pub(crate) fn crossings<C: Carrier<S>>(&self, carrier: &C) -> Vec<Point<S>> {
        self.edges()
            .iter()
            .filter_map(|edge| intersect_carriers(carrier, edge))
            .collect()
    }
}

impl<S: Real> Line<S> {
    /// Every point where the line crosses an edge of `ngon`, in edge order.
    ///
    /// Points are not deduplicated: a crossing at a vertex appears once per
    /// edge.
    #[inline]
    pub fn intersections<const N: usize>(&self, ngon: &Ngon<S, N>) -> Vec<Point<S>> {
        ngon.crossings(self)
    }
}

impl<S: Real> Ray<S> {
    /// Every point where the ray crosses an edge of `ngon`, in edge order.
    #[inline]
    pub fn intersections<const N: usize>(&self, ngon: &Ngon<S, N>) -> Vec<Point<S>> {
        ngon.crossings(self)
    }
}

impl<S: Real> Segment<S> {
    /// Every point where the segment crosses an edge of `ngon`, in edge
    /// order.
    #[inline]
    pub fn intersections<const N: usize>(&self, ngon: &Ngon<S, N>) -> Vec<Point<S>> {
        ngon.crossings(self)
    }
}

macro_rules! impl_ngon_intersections {
    ($($other:ident),+ $(,)?) => {
        $(
            impl<S: Real, const N: usize> Intersection<Ngon<S, N>> for $other<S> {
                type Output = Vec<Point<S>>;

                #[inline]
                fn intersection(&self, other: &Ngon<S, N>) -> Self::Output {
                    other.crossings(self)
                }
            }

            impl<S: Real, const N: usize> Intersection<$other<S>> for Ngon<S, N> {
                type Output = Vec<Point<S>>;

                #[inline]
                fn intersection(&self, other: &$other<S>) -> Self::Output {
                    self.crossings(other)
                }
            }
        )+
    };
}

impl_ngon_intersections!(Line, Ray, Segment);

impl<S: Real, const N: usize> Shape<S> for Ngon<S, N> {
    #[inline]
    fn area(&self) -> S {
        Ngon::area(self)
    }

    #[inline]
    fn perimeter(&self) -> S {
        Ngon::perimeter(self)
    }

    #[inline]
    fn contains(&self, pt: Point<S>) -> bool {
        Ngon::contains(self, pt)
    }

    #[inline]
    fn bounding_box(&self) -> Rect<S> {
        Ngon::bounding_box(self)
    }
}

impl<S: Copy + Add<Output = S>, const N: usize> Add<Vec2<S>> for Ngon<S, N> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<S>) -> Self {
        Ngon {
            vertices: self.vertices.map(|p| p + v),
        }
    }
}

impl<S: Copy + Sub<Output = S>, const N: usize> Sub<Vec2<S>> for Ngon<S, N> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<S>) -> Self {
        Ngon {
            vertices: self.vertices.map(|p| p - v),
        }
    }
}

impl<S: Real, const N: usize> Mul<Ngon<S, N>> for Affine<S> {
    type Output = Ngon<S, N>;

    #[inline]
    fn mul(self, other: Ngon<S, N>) -> Ngon<S, N> {
        Ngon {
            vertices: other.vertices.map(|p| self * p),
        }
    }
}

impl<S, const N: usize> From<[Point<S>; N]> for Ngon<S, N> {
    #[inline]
    fn from(vertices: [Point<S>; N]) -> Self {
        Ngon { vertices }
    }
}

// Serde's derive does not cover arrays of generic length, so the vertices
// are written as a plain sequence.
#[cfg(feature = "serde")]
impl<S: serde::Serialize, const N: usize> serde::Serialize for Ngon<S, N> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.vertices.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: serde::Deserialize<'de>, const N: usize> serde::Deserialize<'de> for Ngon<S, N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let points = <Vec<Point<S>> as serde::Deserialize>::deserialize(deserializer)?;
        let len = points.len();
        let vertices: [Point<S>; N] = points
            .try_into()
            .map_err(|_| serde::de::Error::invalid_length(len, &"one entry per vertex"))?;
        Ok(Ngon { vertices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Quad<f64> {
        Quad::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn edges_wrap_around() {
        let edges = unit_square().edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], Segment::new((0.0, 0.0), (1.0, 0.0)));
        assert_eq!(edges[3], Segment::new((0.0, 1.0), (0.0, 0.0)));
    }

    #[test]
    fn measurements() {
        let square = unit_square();
        assert_eq!(square.signed_area(), 1.0);
        assert_eq!(square.area(), 1.0);
        assert_eq!(square.perimeter(), 4.0);
        assert_eq!(square.centroid(), Point::new(0.5, 0.5));
        assert_eq!(square.bounding_box(), Rect::new(0.0, 0.0, 1.0, 1.0));

        let clockwise = Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 0.0),
        ]);
        assert_eq!(clockwise.signed_area(), -6.0);
        assert_eq!(clockwise.area(), 6.0);
    }

    #[test]
    fn even_odd_containment() {
        let square = unit_square();
        assert!(square.contains(Point::new(0.5, 0.5)));
        assert!(!square.contains(Point::new(1.5, 0.5)));
        assert!(square.contains(Point::new(1.0, 0.5)), "edge points are inside");
        assert!(square.contains(Point::new(1.0, 1.0)), "vertices are inside");

        // A bow tie: the two lobes are inside, beyond the crossing is not.
        let bow = Quad::new([
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
        ]);
        assert!(bow.contains(Point::new(0.3, 1.0)));
        assert!(bow.contains(Point::new(1.7, 1.0)));
        assert!(!bow.contains(Point::new(1.0, 0.2)));
    }

    #[test]
    fn line_crossings_in_edge_order() {
        let square = unit_square();
        let line = Line::new(Point::new(-1.0, 0.5), Vec2::new(1.0, 0.0));
        let hits = line.intersections(&square);
        assert_eq!(hits, vec![Point::new(1.0, 0.5), Point::new(0.0, 0.5)]);
        assert_eq!(square.intersection(&line), hits);
    }

    #[test]
    fn vertex_hits_are_not_deduplicated() {
        let square = unit_square();
        let ray = Ray::new(Point::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let hits = ray.intersections(&square);
        assert_eq!(hits.len(), 4);
        assert_eq!(hits[0], Point::new(0.0, 0.0));
        assert_eq!(hits[3], Point::new(0.0, 0.0));

        let short = Segment::new((0.5, 0.5), (0.5, 3.0));
        assert_eq!(short.intersection(&square), vec![Point::new(0.5, 1.0)]);
        let inside = Segment::new((0.25, 0.5), (0.75, 0.5));
        assert!(inside.intersections(&square).is_empty());
    }

    #[test]
    fn to_path() {
        let path = unit_square().to_path().unwrap();
        assert_eq!(path.segment_count(), 3);
        assert_eq!(path.length(), 4.0);
        let degenerate = Ngon::new([Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(degenerate.to_path().is_none());
    }

    #[test]
    fn affine_keeps_area_under_rotation() {
        let turned = Affine::rotate(0.7) * unit_square();
        assert!((turned.area() - 1.0).abs() < 1e-12);
        let doubled = Affine::scale(2.0) * unit_square();
        assert_eq!(doubled.area(), 4.0);
    }

    #[test]
    fn translation() {
        let moved = unit_square() + Vec2::new(2.0, 3.0);
        assert_eq!(moved.vertices()[2], Point::new(3.0, 4.0));
        assert_eq!(moved.area(), 1.0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{Point, Quad, Triangle};

    #[test]
    fn vertex_count_must_match() {
        let tri = Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ]);
        let json = serde_json::to_string(&tri).unwrap();
        let back: Triangle<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tri);
        assert!(serde_json::from_str::<Quad<f64>>(&json).is_err());
    }
}
