// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier curves of any degree.

use core::ops::Mul;

use arrayvec::ArrayVec;
use smallvec::{smallvec, SmallVec};

use crate::common::solve_quadratic;
use crate::{Affine, Point, Real, Rect, Segment, Vec2};

/// Number of chords used by [`Bezier::length`].
pub const DEFAULT_LENGTH_SEGMENTS: usize = 100;

/// A Bézier curve with one or more control points.
///
/// The degree is one less than the number of control points; up to cubic
/// the points are stored inline.
///
/// ```
/// use planar::{Bezier, Point};
///
/// let quad = Bezier::quadratic(
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 2.0),
///     Point::new(2.0, 0.0),
/// );
/// assert_eq!(quad.degree(), 2);
/// assert_eq!(quad.point(0.5), Point::new(1.0, 1.0));
/// let bbox = quad.bounding_box();
/// assert_eq!((bbox.y0, bbox.y1), (0.0, 1.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bezier<S> {
    points: SmallVec<[Point<S>; 4]>,
}

impl<S> Bezier<S> {
    /// Create a curve from its control points.
    ///
    /// Returns `None` when there are no points.
    pub fn new(points: impl IntoIterator<Item = Point<S>>) -> Option<Self> {
        let points: SmallVec<[Point<S>; 4]> = points.into_iter().collect();
        if points.is_empty() {
            log::trace!("a Bézier curve needs at least one control point");
            return None;
        }
        Some(Bezier { points })
    }

    /// A straight curve of degree one.
    #[inline]
    pub fn linear(p0: Point<S>, p1: Point<S>) -> Self {
        Bezier {
            points: smallvec![p0, p1],
        }
    }

    /// A quadratic curve.
    #[inline]
    pub fn quadratic(p0: Point<S>, p1: Point<S>, p2: Point<S>) -> Self {
        Bezier {
            points: smallvec![p0, p1, p2],
        }
    }

    /// A cubic curve.
    #[inline]
    pub fn cubic(p0: Point<S>, p1: Point<S>, p2: Point<S>, p3: Point<S>) -> Self {
        Bezier {
            points: smallvec![p0, p1, p2, p3],
        }
    }

    /// The control points, at least one.
    #[inline]
    pub fn points(&self) -> &[Point<S>] {
        &self.points
    }

    /// The degree of the curve.
    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Convert the coordinates to another scalar type.
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Bezier<T> {
        Bezier {
            points: self.points.into_iter().map(|p| p.map(&mut f)).collect(),
        }
    }

    /// The same curve traversed backwards.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }
}

#[cfg(feature = "serde")]
impl<'de, S: serde::Deserialize<'de>> serde::Deserialize<'de> for Bezier<S> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Bezier")]
        struct Fields<S> {
            points: SmallVec<[Point<S>; 4]>,
        }

        let fields = <Fields<S> as serde::Deserialize>::deserialize(deserializer)?;
        Bezier::new(fields.points)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one control point"))
    }
}

impl<S: Copy> Bezier<S> {
    /// The first control point, where the curve starts.
    #[inline]
    pub fn start(&self) -> Point<S> {
        self.points[0]
    }

    /// The last control point, where the curve ends.
    #[inline]
    pub fn end(&self) -> Point<S> {
        self.points[self.points.len() - 1]
    }
}

impl<S: Copy + PartialOrd> Bezier<S> {
    /// The bounding box of the control points.
    ///
    /// Always encloses the curve, but is usually larger than the tight box.
    pub fn bounding_box_conservative(&self) -> Rect<S> {
        self.points[1..]
            .iter()
            .fold(Rect::from_point(self.start()), |bbox, p| bbox.union_pt(*p))
    }
}

impl<S: Real> Bezier<S> {
    /// Evaluate the curve at parameter `t` by de Casteljau's algorithm.
    ///
    /// Exact at the ends: `point(0)` is the first control point and
    /// `point(1)` the last.
    pub fn point(&self, t: S) -> Point<S> {
        let mut scratch = self.points.clone();
        for level in (1..scratch.len()).rev() {
            for i in 0..level {
                scratch[i] = scratch[i].lerp(scratch[i + 1], t);
            }
        }
        scratch[0]
    }

    /// The hodograph: the derivative curve, one degree lower.
    ///
    /// Its control points are displacement vectors stored as points. The
    /// derivative of a single point is the zero curve.
    pub fn derivative(&self) -> Self {
        let n = self.degree();
        if n == 0 {
            return Bezier {
                points: smallvec![Point::origin()],
            };
        }
        let scale = S::from_usize(n);
        Bezier {
            points: self
                .points
                .windows(2)
                .map(|w| ((w[1] - w[0]) * scale).to_point())
                .collect(),
        }
    }

    /// The derivative at parameter `t`.
    #[inline]
    pub fn tangent(&self, t: S) -> Vec2<S> {
        self.derivative().point(t).to_vec2()
    }

    /// Split the curve at `t` into the parts before and after it.
    pub fn split(&self, t: S) -> (Self, Self) {
        let mut scratch = self.points.clone();
        let mut left: SmallVec<[Point<S>; 4]> = SmallVec::with_capacity(scratch.len());
        let mut right: SmallVec<[Point<S>; 4]> = SmallVec::with_capacity(scratch.len());
        left.push(scratch[0]);
        right.push(scratch[scratch.len() - 1]);
        for level in (1..scratch.len()).rev() {
            for i in 0..level {
                scratch[i] = scratch[i].lerp(scratch[i + 1], t);
            }
            left.push(scratch[0]);
            right.push(scratch[level - 1]);
        }
        right.reverse();
        (Bezier { points: left }, Bezier { points: right })
    }

    /// Approximate arc length using [`DEFAULT_LENGTH_SEGMENTS`] chords.
    #[inline]
    pub fn length(&self) -> S {
        self.length_with(DEFAULT_LENGTH_SEGMENTS)
    }

    /// Approximate arc length by summing `segments` chords over equal
    /// parameter steps.
    ///
    /// Up to rounding the result is at most the true length, and it
    /// converges as `segments` grows. Zero is treated as one. Straight
    /// curves of degree one are measured directly.
    pub fn length_with(&self, segments: usize) -> S {
        if self.degree() == 1 {
            return self.start().distance(self.end());
        }
        let segments = segments.max(1);
        let count = S::from_usize(segments);
        let mut prev = self.start();
        let mut length = S::zero();
        for i in 1..=segments {
            let p = if i == segments {
                self.end()
            } else {
                self.point(S::from_usize(i) / count)
            };
            length = length + prev.distance(p);
            prev = p;
        }
        length
    }

    /// The tight bounding box, for curves up to cubic.
    ///
    /// Coordinate extrema are found from the roots of the derivative. Curves
    /// of higher degree fall back to
    /// [`bounding_box_conservative`](Bezier::bounding_box_conservative).
    pub fn bounding_box(&self) -> Rect<S> {
        if self.degree() > 3 {
            return self.bounding_box_conservative();
        }
        let mut bbox = Rect::from_points(self.start(), self.end());
        for t in self.extrema() {
            bbox = bbox.union_pt(self.point(t));
        }
        bbox
    }

    /// Parameters in `(0, 1)` where either coordinate has a local extremum.
    fn extrema(&self) -> ArrayVec<S, 4> {
        let mut result = ArrayVec::new();
        let axes: [fn(Point<S>) -> S; 2] = [|p| p.x, |p| p.y];
        for axis in axes {
            let v: ArrayVec<S, 4> = self.points.iter().map(|pt| axis(*pt)).collect();
            // Derivative in power basis, divided by the degree: c0 + c1 t + c2 t².
            let roots = match v.len() {
                3 => solve_quadratic(v[1] - v[0], v[0] - S::two() * v[1] + v[2], S::zero()),
                4 => {
                    let a = v[1] - v[0];
                    let b = v[2] - S::two() * v[1] + v[0];
                    let c = v[3] - S::cast(3.0) * (v[2] - v[1]) - v[0];
                    solve_quadratic(a, S::two() * b, c)
                }
                _ => ArrayVec::new(),
            };
            for t in roots {
                if t > S::zero() && t < S::one() {
                    result.push(t);
                }
            }
        }
        result
    }
}

impl<S> From<Segment<S>> for Bezier<S> {
    #[inline]
    fn from(segment: Segment<S>) -> Self {
        Bezier::linear(segment.start, segment.end)
    }
}

impl<S: Real> Mul<Bezier<S>> for Affine<S> {
    type Output = Bezier<S>;

    fn mul(self, other: Bezier<S>) -> Bezier<S> {
        Bezier {
            points: other.points.into_iter().map(|p| self * p).collect(),
        }
    }
}
