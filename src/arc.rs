// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arcs.

use smallvec::SmallVec;

use crate::{Bezier, Circle, Point, Real, Rect, Vec2};

/// A circular arc.
///
/// The arc runs from `start_angle` to `end_angle`, both in radians. The sweep
/// is their difference: positive sweeps run from the x axis towards the
/// y axis, negative ones the other way, and a sweep may exceed a full turn.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc<S> {
    /// The center of the circle the arc lies on.
    pub center: Point<S>,
    /// The radius.
    pub radius: S,
    /// The angle of the start point, in radians.
    pub start_angle: S,
    /// The angle of the end point, in radians.
    pub end_angle: S,
}

impl<S> Arc<S> {
    /// A new arc from its center, radius and the angles of its ends.
    #[inline]
    pub fn new(center: impl Into<Point<S>>, radius: S, start_angle: S, end_angle: S) -> Self {
        Arc {
            center: center.into(),
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Convert the coordinates to another scalar type.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Arc<T> {
        Arc {
            center: self.center.map(&mut f),
            radius: f(self.radius),
            start_angle: f(self.start_angle),
            end_angle: f(self.end_angle),
        }
    }

    /// The same arc traversed from its end to its start.
    #[inline]
    #[must_use]
    pub fn reversed(self) -> Self {
        Arc {
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            ..self
        }
    }
}

impl<S: Real> Arc<S> {
    /// A new arc from a start angle and a signed sweep.
    #[inline]
    pub fn from_sweep(center: impl Into<Point<S>>, radius: S, start_angle: S, sweep: S) -> Self {
        Arc::new(center, radius, start_angle, start_angle + sweep)
    }

    /// The signed angle swept, `end_angle - start_angle`.
    #[inline]
    pub fn sweep(&self) -> S {
        self.end_angle - self.start_angle
    }

    /// The point of the underlying circle at `angle` radians.
    #[inline]
    pub fn point(&self, angle: S) -> Point<S> {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    /// The start point.
    #[inline]
    pub fn start_point(&self) -> Point<S> {
        self.point(self.start_angle)
    }

    /// The end point.
    #[inline]
    pub fn end_point(&self) -> Point<S> {
        self.point(self.end_angle)
    }

    /// The length of the arc, `|sweep|·r`.
    #[inline]
    pub fn length(&self) -> S {
        (self.sweep() * self.radius).abs()
    }

    /// The circle the arc lies on.
    #[inline]
    pub fn circle(&self) -> Circle<S> {
        Circle::new(self.center, self.radius)
    }

    /// The tight bounding box: the end points together with every axis
    /// extreme of the circle that the arc passes.
    pub fn bounding_box(&self) -> Rect<S> {
        if self.sweep().abs() >= S::TAU() {
            return self.circle().bounding_box();
        }
        let mut bbox = Rect::from_points(self.start_point(), self.end_point());
        let lo = self.start_angle.min(self.end_angle);
        let hi = self.start_angle.max(self.end_angle);
        let quarter = S::FRAC_PI_2();
        let mut k = (lo / quarter).ceil();
        // A sweep under a full turn passes at most four axis extremes.
        for _ in 0..4 {
            if k * quarter > hi {
                break;
            }
            let quadrant = ((k % S::cast(4.0)) + S::cast(4.0)) % S::cast(4.0);
            let direction = if quadrant == S::zero() {
                Vec2::new(S::one(), S::zero())
            } else if quadrant == S::one() {
                Vec2::new(S::zero(), S::one())
            } else if quadrant == S::two() {
                Vec2::new(-S::one(), S::zero())
            } else {
                Vec2::new(S::zero(), -S::one())
            };
            bbox = bbox.union_pt(self.center + direction * self.radius);
            k = k + S::one();
        }
        bbox
    }

    /// Approximate the arc with cubic Béziers.
    ///
    /// The sweep is divided into `max(1, ceil(|sweep| / (π/2)))` equal pieces,
    /// each with handles of length `r·4/3·tan(θ/4)` for a piece spanning θ.
    /// The pieces join exactly and the last one ends exactly at
    /// [`Arc::end_point`].
    ///
    /// Sweeps of many turns retrace the circle, and the output grows with
    /// the sweep: four pieces per turn. An infinite or NaN sweep gives a
    /// single piece.
    pub fn to_beziers(&self) -> SmallVec<[Bezier<S>; 4]> {
        let sweep = self.sweep();
        let n = (sweep.abs() / S::FRAC_PI_2())
            .ceil()
            .to_usize()
            .unwrap_or(1)
            .max(1);
        let step = sweep / S::from_usize(n);
        let handle = S::cast(4.0 / 3.0) * (step / S::cast(4.0)).tan() * self.radius;
        let mut result = SmallVec::with_capacity(n);
        let mut angle0 = self.start_angle;
        let mut p0 = self.start_point();
        for i in 1..=n {
            let angle1 = if i == n {
                self.end_angle
            } else {
                self.start_angle + step * S::from_usize(i)
            };
            let p3 = self.point(angle1);
            let p1 = p0 + Vec2::from_angle(angle0).turn_90() * handle;
            let p2 = p3 - Vec2::from_angle(angle1).turn_90() * handle;
            result.push(Bezier::cubic(p0, p1, p2, p3));
            angle0 = angle1;
            p0 = p3;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn assert_near(p0: Point<f64>, p1: Point<f64>) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    fn assert_rect_near(r0: Rect<f64>, r1: Rect<f64>) {
        assert_near(r0.origin(), r1.origin());
        assert_near(Point::new(r0.x1, r0.y1), Point::new(r1.x1, r1.y1));
    }

    #[test]
    fn quarter_turn_handle_length() {
        let arc = Arc::new((0.0, 0.0), 2.0, 0.0, FRAC_PI_2);
        let pieces = arc.to_beziers();
        assert_eq!(pieces.len(), 1);
        let p = pieces[0].points();
        assert_near(p[0], Point::new(2.0, 0.0));
        assert_near(p[3], Point::new(0.0, 2.0));
        let handle = (p[1] - p[0]).hypot();
        assert!((handle - 2.0 * 0.5522847498307936).abs() < 1e-12, "handle {handle}");
    }

    #[test]
    fn piece_count_follows_sweep() {
        let center = Point::new(1.0, 1.0);
        assert_eq!(Arc::from_sweep(center, 1.0, 0.0, 0.0).to_beziers().len(), 1);
        assert_eq!(Arc::from_sweep(center, 1.0, 0.0, 1.0).to_beziers().len(), 1);
        assert_eq!(Arc::from_sweep(center, 1.0, 0.0, PI).to_beziers().len(), 2);
        assert_eq!(Arc::from_sweep(center, 1.0, 0.0, -3.0 * PI).to_beziers().len(), 6);
        let endless = Arc::from_sweep(center, 1.0, 0.0, f64::INFINITY);
        assert_eq!(endless.to_beziers().len(), 1);
    }

    #[test]
    fn pieces_join_and_stay_on_circle() {
        let arc = Arc::from_sweep((3.0, -1.0), 4.0, 0.3, -4.0);
        let pieces = arc.to_beziers();
        assert_eq!(pieces[0].start(), arc.start_point());
        assert_eq!(pieces[pieces.len() - 1].end(), arc.end_point());
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        for piece in &pieces {
            for i in 0..=8 {
                let p = piece.point(f64::from(i) / 8.0);
                let r = p.distance(arc.center);
                assert!((r - 4.0).abs() < 4.0 * 3e-4, "radius {r} off the circle");
            }
        }
    }

    #[test]
    fn length_and_reverse() {
        let arc = Arc::new((0.0, 0.0), 3.0, 1.0, -1.0);
        assert_eq!(arc.sweep(), -2.0);
        assert_eq!(arc.length(), 6.0);
        let rev = arc.reversed();
        assert_eq!(rev.start_point(), arc.end_point());
        assert_eq!(rev.sweep(), 2.0);
    }

    #[test]
    fn tight_bounding_box() {
        // Upper half circle passes the top extreme only.
        let arc = Arc::new((0.0, 0.0), 1.0, 0.0, PI);
        assert_rect_near(arc.bounding_box(), Rect::new(-1.0, 0.0, 1.0, 1.0));

        // Negative sweep through the bottom extreme.
        let arc = Arc::new((0.0, 0.0), 1.0, -PI / 4.0, -3.0 * PI / 4.0);
        let s = 0.5_f64.sqrt();
        assert_rect_near(arc.bounding_box(), Rect::new(-s, -1.0, s, -s));

        // Angles outside [0, 2π) still find the extremes.
        let arc = Arc::new((0.0, 0.0), 1.0, -2.0 * PI - 0.1, -2.0 * PI + 0.1);
        let bbox = arc.bounding_box();
        assert!((bbox.x1 - 1.0).abs() < 1e-12);

        let full = Arc::from_sweep((2.0, 2.0), 1.0, 0.5, 7.0);
        assert_eq!(full.bounding_box(), Rect::new(1.0, 1.0, 3.0, 3.0));
    }

    #[test]
    fn conservative_boxes_cover_tight_box() {
        let arc = Arc::from_sweep((0.0, 0.0), 2.0, 0.2, 2.5);
        let tight = arc.bounding_box();
        for piece in arc.to_beziers() {
            let b = piece.bounding_box_conservative();
            assert!(b.x0 <= b.x1 && b.y0 <= b.y1);
        }
        let hull = arc
            .to_beziers()
            .iter()
            .map(Bezier::bounding_box_conservative)
            .reduce(|a, b| a.union(b))
            .unwrap();
        assert!(hull.x0 <= tight.x0 + 1e-12 && hull.y1 >= tight.y1 - 1e-12);
    }
}
