// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths made of lines, Bézier curves and arcs, possibly with multiple
//! subpaths.

use alloc::vec::Vec;
use core::ops::Mul;

use smallvec::{smallvec, SmallVec};

use crate::{Affine, Arc, Bezier, Point, Real, Rect, Segment, DEFAULT_LENGTH_SEGMENTS};

/// A segment of a path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSeg<S> {
    /// A straight line.
    Line(Segment<S>),
    /// A Bézier curve of any degree.
    Bezier(Bezier<S>),
    /// A circular arc.
    Arc(Arc<S>),
}

impl<S> PathSeg<S> {
    /// Convert the coordinates to another scalar type.
    pub fn map<T>(self, f: impl FnMut(S) -> T) -> PathSeg<T> {
        match self {
            PathSeg::Line(line) => PathSeg::Line(line.map(f)),
            PathSeg::Bezier(bez) => PathSeg::Bezier(bez.map(f)),
            PathSeg::Arc(arc) => PathSeg::Arc(arc.map(f)),
        }
    }
}

impl<S: Real> PathSeg<S> {
    /// The point where the segment starts.
    pub fn start_point(&self) -> Point<S> {
        match self {
            PathSeg::Line(line) => line.start,
            PathSeg::Bezier(bez) => bez.start(),
            PathSeg::Arc(arc) => arc.start_point(),
        }
    }

    /// The point where the segment ends.
    pub fn end_point(&self) -> Point<S> {
        match self {
            PathSeg::Line(line) => line.end,
            PathSeg::Bezier(bez) => bez.end(),
            PathSeg::Arc(arc) => arc.end_point(),
        }
    }

    /// The segment as Bézier curves.
    ///
    /// Lines become one linear curve, arcs one cubic per quarter turn.
    pub fn to_beziers(&self) -> SmallVec<[Bezier<S>; 4]> {
        match self {
            PathSeg::Line(line) => smallvec![Bezier::from(*line)],
            PathSeg::Bezier(bez) => smallvec![bez.clone()],
            PathSeg::Arc(arc) => arc.to_beziers(),
        }
    }

    /// The arc length, sampling curves with the default number of chords.
    #[inline]
    pub fn length(&self) -> S {
        self.length_with(DEFAULT_LENGTH_SEGMENTS)
    }

    /// The arc length, sampling Bézier curves with `segments` chords.
    ///
    /// Lines and arcs are measured exactly.
    pub fn length_with(&self, segments: usize) -> S {
        match self {
            PathSeg::Line(line) => line.length(),
            PathSeg::Bezier(bez) => bez.length_with(segments),
            PathSeg::Arc(arc) => arc.length(),
        }
    }

    /// A rectangle that encloses the segment, not necessarily the smallest.
    ///
    /// Arcs of a full turn or more use the box of their circle.
    pub fn bounding_box_conservative(&self) -> Rect<S> {
        match self {
            PathSeg::Line(line) => line.bounding_box(),
            PathSeg::Bezier(bez) => bez.bounding_box_conservative(),
            PathSeg::Arc(arc) if arc.sweep().abs() >= S::TAU() => arc.circle().bounding_box(),
            PathSeg::Arc(arc) => arc
                .to_beziers()
                .iter()
                .map(Bezier::bounding_box_conservative)
                .fold(Rect::from_point(arc.start_point()), |acc, b| acc.union(b)),
        }
    }
}

impl<S> From<Segment<S>> for PathSeg<S> {
    #[inline]
    fn from(line: Segment<S>) -> Self {
        PathSeg::Line(line)
    }
}

impl<S> From<Bezier<S>> for PathSeg<S> {
    #[inline]
    fn from(bez: Bezier<S>) -> Self {
        PathSeg::Bezier(bez)
    }
}

impl<S> From<Arc<S>> for PathSeg<S> {
    #[inline]
    fn from(arc: Arc<S>) -> Self {
        PathSeg::Arc(arc)
    }
}

/// A connected run of segments starting at one point.
///
/// Each segment is expected to start where the previous one ends. A closed
/// subpath returns to `start` with an implicit straight line when the last
/// segment does not already end there.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subpath<S> {
    /// Where the subpath begins.
    pub start: Point<S>,
    /// The segments, in order.
    pub segments: Vec<PathSeg<S>>,
    /// Whether the subpath returns to `start`.
    pub closed: bool,
}

impl<S> Subpath<S> {
    /// An open subpath at `start`, without segments.
    #[inline]
    pub fn new(start: impl Into<Point<S>>) -> Self {
        Subpath {
            start: start.into(),
            segments: Vec::new(),
            closed: false,
        }
    }

    /// Append a segment.
    #[inline]
    pub fn push(&mut self, seg: impl Into<PathSeg<S>>) {
        self.segments.push(seg.into());
    }

    /// Whether the subpath has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Convert the coordinates to another scalar type.
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Subpath<T> {
        Subpath {
            start: self.start.map(&mut f),
            segments: self.segments.into_iter().map(|s| s.map(&mut f)).collect(),
            closed: self.closed,
        }
    }
}

impl<S: Real> Subpath<S> {
    /// The current point: the end of the last segment, or `start`.
    pub fn end_point(&self) -> Point<S> {
        self.segments.last().map_or(self.start, PathSeg::end_point)
    }

    /// The straight line that closes the subpath, if one is needed.
    fn closing_segment(&self) -> Option<Segment<S>> {
        let end = self.end_point();
        (self.closed && !self.is_empty() && end != self.start)
            .then(|| Segment::new(end, self.start))
    }

    /// The subpath as Bézier curves, including the closing line.
    pub fn to_beziers(&self) -> Vec<Bezier<S>> {
        let mut result: Vec<Bezier<S>> =
            self.segments.iter().flat_map(PathSeg::to_beziers).collect();
        result.extend(self.closing_segment().map(Bezier::from));
        result
    }

    /// The length, with the default Bézier sampling.
    #[inline]
    pub fn length(&self) -> S {
        self.length_with(DEFAULT_LENGTH_SEGMENTS)
    }

    /// The length, sampling Bézier curves with `segments` chords.
    pub fn length_with(&self, segments: usize) -> S {
        let closing = self.closing_segment().map_or(S::zero(), |line| line.length());
        self.segments
            .iter()
            .fold(closing, |acc, seg| acc + seg.length_with(segments))
    }
}

/// A path: a sequence of subpaths.
///
/// Built either from explicit [`Subpath`]s or with the `move_to` / `line_to`
/// style builder methods.
///
/// ```
/// use planar::{Path, Point};
///
/// let mut path = Path::new();
/// path.move_to((0.0, 0.0));
/// path.line_to((3.0, 0.0));
/// path.line_to((3.0, 4.0));
/// path.close();
/// assert_eq!(path.length(), 12.0);
/// assert_eq!(path.to_beziers().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<S> {
    subpaths: Vec<Subpath<S>>,
}

impl<S> Default for Path<S> {
    fn default() -> Self {
        Path::new()
    }
}

impl<S> Path<S> {
    /// Create a new, empty path.
    #[inline]
    pub fn new() -> Self {
        Path {
            subpaths: Vec::new(),
        }
    }

    /// Begin a new subpath at `p`.
    pub fn move_to(&mut self, p: impl Into<Point<S>>) {
        self.subpaths.push(Subpath::new(p));
    }

    /// Append a subpath.
    #[inline]
    pub fn push_subpath(&mut self, subpath: Subpath<S>) {
        self.subpaths.push(subpath);
    }

    /// Close the current subpath, if there is one.
    pub fn close(&mut self) {
        if let Some(last) = self.subpaths.last_mut() {
            last.closed = true;
        }
    }

    /// The subpaths.
    #[inline]
    pub fn subpaths(&self) -> &[Subpath<S>] {
        &self.subpaths
    }

    /// The total number of segments over all subpaths.
    ///
    /// Implicit closing lines are not counted.
    pub fn segment_count(&self) -> usize {
        self.subpaths.iter().map(|s| s.segments.len()).sum()
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(Subpath::is_empty)
    }

    /// Convert the coordinates to another scalar type.
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Path<T> {
        Path {
            subpaths: self.subpaths.into_iter().map(|s| s.map(&mut f)).collect(),
        }
    }
}

impl<S: Real> Path<S> {
    /// A closed path through `vertices`.
    ///
    /// Returns `None` for fewer than three vertices.
    pub fn polygon(vertices: &[Point<S>]) -> Option<Self> {
        if vertices.len() < 3 {
            log::trace!("a polygon needs at least three vertices");
            return None;
        }
        let mut path = Path::polyline(vertices)?;
        path.close();
        Some(path)
    }

    /// An open path through `vertices`.
    ///
    /// Returns `None` for fewer than two vertices.
    pub fn polyline(vertices: &[Point<S>]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        if rest.is_empty() {
            log::trace!("a polyline needs at least two vertices");
            return None;
        }
        let mut path = Path::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        Some(path)
    }

    /// Append a straight line to `p`.
    ///
    /// Without a current point this begins a subpath at `p` instead.
    pub fn line_to(&mut self, p: impl Into<Point<S>>) {
        let p = p.into();
        if self.subpaths.is_empty() {
            log::trace!("line_to without a current point, starting a subpath");
            self.move_to(p);
            return;
        }
        let (subpath, end) = self.current(p);
        subpath.push(Segment::new(end, p));
    }

    /// Append a quadratic Bézier with control point `p1`, ending at `p2`.
    ///
    /// Without a current point the curve starts at `p1`.
    pub fn quad_to(&mut self, p1: impl Into<Point<S>>, p2: impl Into<Point<S>>) {
        let p1 = p1.into();
        let (subpath, p0) = self.current(p1);
        subpath.push(Bezier::quadratic(p0, p1, p2.into()));
    }

    /// Append a cubic Bézier with control points `p1` and `p2`, ending at
    /// `p3`.
    ///
    /// Without a current point the curve starts at `p1`.
    pub fn curve_to(
        &mut self,
        p1: impl Into<Point<S>>,
        p2: impl Into<Point<S>>,
        p3: impl Into<Point<S>>,
    ) {
        let p1 = p1.into();
        let (subpath, p0) = self.current(p1);
        subpath.push(Bezier::cubic(p0, p1, p2.into(), p3.into()));
    }

    /// Append an arc.
    ///
    /// When the arc does not start at the current point, a straight line
    /// connects them first. Without a current point the subpath begins at
    /// the arc's start.
    pub fn arc(&mut self, arc: Arc<S>) {
        let start = arc.start_point();
        let (subpath, end) = self.current(start);
        if end != start {
            subpath.push(Segment::new(end, start));
        }
        subpath.push(arc);
    }

    /// The subpath new segments go to, with the point they start from.
    ///
    /// A closed subpath is finished: drawing after it continues from its
    /// start in a fresh subpath. Without any subpath, one begins at
    /// `fallback`.
    fn current(&mut self, fallback: Point<S>) -> (&mut Subpath<S>, Point<S>) {
        let restart = match self.subpaths.last() {
            None => {
                log::trace!("segment without a current point, starting a subpath");
                Some(fallback)
            }
            Some(last) if last.closed => Some(last.start),
            Some(_) => None,
        };
        if let Some(start) = restart {
            self.subpaths.push(Subpath::new(start));
        }
        let ix = self.subpaths.len() - 1;
        let current = &mut self.subpaths[ix];
        let end = current.end_point();
        (current, end)
    }

    /// The path as Bézier curves, in order, with closing lines.
    pub fn to_beziers(&self) -> Vec<Bezier<S>> {
        self.subpaths.iter().flat_map(Subpath::to_beziers).collect()
    }

    /// A rectangle enclosing every segment, or `None` without segments.
    ///
    /// Unions the control-point boxes of the segments and closing lines, so
    /// it may be larger than the tight box.
    pub fn bounding_box(&self) -> Option<Rect<S>> {
        self.subpaths
            .iter()
            .flat_map(|s| {
                let closing = s.closing_segment().map(|line| line.bounding_box());
                s.segments
                    .iter()
                    .map(PathSeg::bounding_box_conservative)
                    .chain(closing)
            })
            .reduce(|acc, b| acc.union(b))
    }

    /// The total length, with the default Bézier sampling.
    #[inline]
    pub fn length(&self) -> S {
        self.length_with(DEFAULT_LENGTH_SEGMENTS)
    }

    /// The total length, sampling Bézier curves with `segments` chords.
    pub fn length_with(&self, segments: usize) -> S {
        self.subpaths
            .iter()
            .fold(S::zero(), |acc, s| acc + s.length_with(segments))
    }
}

impl<S: Real> Mul<Subpath<S>> for Affine<S> {
    type Output = Subpath<S>;

    /// Arcs become cubic Béziers, since an affine map does not keep them
    /// circular.
    fn mul(self, other: Subpath<S>) -> Subpath<S> {
        let mut segments = Vec::with_capacity(other.segments.len());
        for seg in other.segments {
            match seg {
                PathSeg::Line(line) => segments.push(PathSeg::Line(self * line)),
                PathSeg::Bezier(bez) => segments.push(PathSeg::Bezier(self * bez)),
                PathSeg::Arc(arc) => segments.extend(
                    arc.to_beziers()
                        .into_iter()
                        .map(|bez| PathSeg::Bezier(self * bez)),
                ),
            }
        }
        Subpath {
            start: self * other.start,
            segments,
            closed: other.closed,
        }
    }
}

impl<S: Real> Mul<Path<S>> for Affine<S> {
    type Output = Path<S>;

    fn mul(self, other: Path<S>) -> Path<S> {
        Path {
            subpaths: other.subpaths.into_iter().map(|s| self * s).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use super::*;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn polyline_flattening_keeps_vertices() {
        let vertices = [
            Point::new(0.1, 0.7),
            Point::new(3.3, 4.9),
            Point::new(-2.5, 1e-3),
            Point::new(8.0, 8.0),
        ];
        let path = Path::polyline(&vertices).unwrap();
        let beziers = path.to_beziers();
        assert_eq!(beziers.len(), 3);
        for (bez, pair) in beziers.iter().zip(vertices.windows(2)) {
            assert_eq!(bez.points(), pair);
        }
    }

    #[test]
    fn polygon_closes() {
        let vertices = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let path = Path::polygon(&vertices).unwrap();
        assert_eq!(path.segment_count(), 3);
        assert_eq!(path.length(), 40.0);
        let beziers = path.to_beziers();
        assert_eq!(beziers.len(), 4);
        assert_eq!(beziers[3].points(), &[vertices[3], vertices[0]]);
        assert_eq!(path.bounding_box(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));

        // An explicit return to the start needs no closing line.
        let returning = [vertices[0], vertices[1], vertices[2], vertices[0]];
        let path = Path::polygon(&returning).unwrap();
        assert_eq!(path.to_beziers().len(), 3);

        assert!(Path::polygon(&vertices[..2]).is_none());
        assert!(Path::polyline(&vertices[..1]).is_none());
    }

    #[test]
    fn empty_path() {
        let mut path = Path::<f64>::new();
        assert!(path.is_empty());
        assert_eq!(path.bounding_box(), None);
        assert_eq!(path.length(), 0.0);
        path.move_to((1.0, 1.0));
        assert!(path.is_empty());
        assert_eq!(path.bounding_box(), None);
        assert_eq!(Path::<f64>::default(), Path::new());
    }

    #[test]
    fn drawing_after_close_starts_over() {
        let mut path = Path::new();
        path.move_to((1.0, 1.0));
        path.line_to((2.0, 1.0));
        path.close();
        path.line_to((1.0, 5.0));
        assert_eq!(path.subpaths().len(), 2);
        let second = &path.subpaths()[1];
        assert_eq!(second.start, Point::new(1.0, 1.0));
        assert!(!second.closed);
        assert_eq!(second.end_point(), Point::new(1.0, 5.0));
    }

    #[test]
    fn line_to_without_current_point() {
        let mut path = Path::new();
        path.line_to((3.0, 4.0));
        assert_eq!(path.subpaths().len(), 1);
        assert!(path.is_empty());
        path.line_to((3.0, 0.0));
        assert_eq!(path.length(), 4.0);
    }

    #[test]
    fn curves() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.quad_to((1.0, 2.0), (2.0, 0.0));
        path.curve_to((2.0, 1.0), (3.0, 1.0), (3.0, 0.0));
        assert_eq!(path.segment_count(), 2);
        let beziers = path.to_beziers();
        assert_eq!(beziers[0].degree(), 2);
        assert_eq!(beziers[1].degree(), 3);
        assert_eq!(beziers[1].start(), Point::new(2.0, 0.0));
        let bbox = path.bounding_box().unwrap();
        assert_eq!(bbox, Rect::new(0.0, 0.0, 3.0, 2.0));

        let mut orphan = Path::new();
        orphan.curve_to((1.0, 1.0), (2.0, 1.0), (3.0, 0.0));
        assert_eq!(orphan.subpaths()[0].start, Point::new(1.0, 1.0));
    }

    #[test]
    fn arcs_connect_with_lines() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.arc(Arc::new((-1.0, 0.0), 1.0, 0.0, PI));
        assert_eq!(path.segment_count(), 1, "arc starts at the current point");
        assert_approx_eq(path.length(), PI);

        let mut path = Path::new();
        path.move_to((5.0, 0.0));
        path.arc(Arc::new((-1.0, 0.0), 1.0, 0.0, PI));
        assert_eq!(path.segment_count(), 2);
        assert_approx_eq(path.length(), 5.0 + PI);
        assert_eq!(path.to_beziers().len(), 3);
        let bbox = path.bounding_box().unwrap();
        assert!(bbox.y1 >= 1.0 && bbox.x0 <= -2.0 + 1e-12);
    }

    #[test]
    fn long_arc_bounding_box() {
        let arc = Arc::from_sweep((1.0, 2.0), 3.0, 0.0, 1e15);
        let seg = PathSeg::from(arc);
        assert_eq!(seg.bounding_box_conservative(), Rect::new(-2.0, -1.0, 4.0, 5.0));
        assert_approx_eq(seg.length() / 3e15, 1.0);

        let mut path = Path::new();
        path.arc(arc);
        assert_eq!(path.bounding_box(), Some(Rect::new(-2.0, -1.0, 4.0, 5.0)));
    }

    #[test]
    fn closing_adds_length() {
        let sub = Subpath {
            start: Point::new(0.0, 0.0),
            segments: vec![PathSeg::Line(Segment::new((3.0, 0.0), (3.0, 4.0)))],
            closed: true,
        };
        let mut path = Path::new();
        path.push_subpath(sub);
        // The gap from start to the first segment is not bridged, only the
        // return from the last end.
        assert_eq!(path.length(), 4.0 + 5.0);
    }

    #[test]
    fn closing_line_counts_toward_bounding_box() {
        let sub = Subpath {
            start: Point::new(0.0, 0.0),
            segments: vec![PathSeg::Line(Segment::new((3.0, 0.0), (3.0, 4.0)))],
            closed: true,
        };
        let mut path = Path::new();
        path.push_subpath(sub.clone());
        let expected = Rect::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(path.bounding_box(), Some(expected));
        let flattened = path
            .to_beziers()
            .iter()
            .map(Bezier::bounding_box_conservative)
            .reduce(|acc, b| acc.union(b));
        assert_eq!(flattened, Some(expected));

        let mut open = Path::new();
        open.push_subpath(Subpath { closed: false, ..sub });
        assert_eq!(open.bounding_box(), Some(Rect::new(3.0, 0.0, 3.0, 4.0)));
    }

    #[test]
    fn affine_transforms_every_segment() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 0.0));
        path.arc(Arc::new((0.0, 0.0), 1.0, 0.0, PI / 2.0));
        path.close();
        let moved = Affine::translate((2.0, 3.0)) * path.clone();
        assert_eq!(moved.segment_count(), 2);
        assert_eq!(moved.subpaths()[0].start, Point::new(2.0, 3.0));
        assert!(moved.subpaths()[0].closed);
        assert!(matches!(moved.subpaths()[0].segments[1], PathSeg::Bezier(_)));
        let scaled = Affine::scale(2.0) * path;
        assert_approx_eq(scaled.bounding_box().unwrap().y1, 2.0 * 1.0);
    }

    #[test]
    fn map_to_f32() {
        let path = Path::polygon(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ])
        .unwrap();
        let narrow = path.map(|x| x as f32);
        assert_eq!(narrow.length(), 12.0_f32);
    }
}
