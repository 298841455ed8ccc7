// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle, and the area it covers.

use core::ops::{Add, Mul, Sub};

use crate::common::{partial_max, partial_min};
use crate::{Circle, Point, Real, Size, Vec2};

/// An axis-aligned rectangle.
///
/// Every constructor normalises the corners so that `x0 <= x1` and
/// `y0 <= y1`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<S> {
    /// The minimum x coordinate (left edge).
    pub x0: S,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: S,
    /// The maximum x coordinate (right edge).
    pub x1: S,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: S,
}

impl<S> Rect<S> {
    /// Convert the coordinates to another scalar type.
    ///
    /// The result is not re-normalised.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Rect<T> {
        Rect {
            x0: f(self.x0),
            y0: f(self.y0),
            x1: f(self.x1),
            y1: f(self.y1),
        }
    }
}

impl<S: Copy + PartialOrd> Rect<S> {
    /// A new rectangle from minimum and maximum coordinates.
    ///
    /// Swapped coordinates are put back in order.
    #[inline]
    pub fn new(x0: S, y0: S, x1: S, y1: S) -> Self {
        Rect { x0, y0, x1, y1 }.abs()
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point<S>>, p1: impl Into<Point<S>>) -> Self {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// A degenerate rectangle covering a single point.
    #[inline]
    pub fn from_point(p: Point<S>) -> Self {
        Rect {
            x0: p.x,
            y0: p.y,
            x1: p.x,
            y1: p.y,
        }
    }

    /// The origin of the rectangle.
    ///
    /// This is the top left corner in a y-down space.
    #[inline]
    pub fn origin(&self) -> Point<S> {
        Point::new(self.x0, self.y0)
    }

    /// Take absolute value of width and height.
    ///
    /// The resulting rect has the same extents as the original, but is
    /// guaranteed to have non-negative width and height.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Self {
        let Rect { x0, y0, x1, y1 } = *self;
        Rect {
            x0: partial_min(x0, x1),
            y0: partial_min(y0, y1),
            x1: partial_max(x0, x1),
            y1: partial_max(y0, y1),
        }
    }

    /// The smallest rectangle enclosing two rectangles.
    #[inline]
    #[must_use]
    pub fn union(&self, other: Self) -> Self {
        Rect {
            x0: partial_min(self.x0, other.x0),
            y0: partial_min(self.y0, other.y0),
            x1: partial_max(self.x1, other.x1),
            y1: partial_max(self.y1, other.y1),
        }
    }

    /// Compute the union with one point.
    ///
    /// This method includes the perimeter of zero-area rectangles.
    /// Thus, a succession of `union_pt` operations on a series of
    /// points yields their enclosing rectangle.
    #[must_use]
    pub fn union_pt(&self, pt: Point<S>) -> Self {
        Rect {
            x0: partial_min(self.x0, pt.x),
            y0: partial_min(self.y0, pt.y),
            x1: partial_max(self.x1, pt.x),
            y1: partial_max(self.y1, pt.y),
        }
    }

    /// The enclosing rectangle of a set of points, or `None` when empty.
    pub fn from_points_iter(points: impl IntoIterator<Item = Point<S>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Rect::from_point(points.next()?);
        Some(points.fold(first, |acc, p| acc.union_pt(p)))
    }

    /// Whether `pt` lies inside the rectangle, edges included.
    #[inline]
    pub fn contains(&self, pt: Point<S>) -> bool {
        pt.x >= self.x0 && pt.x <= self.x1 && pt.y >= self.y0 && pt.y <= self.y1
    }
}

impl<S: Copy + PartialOrd + Add<Output = S>> Rect<S> {
    /// A new rectangle from origin and size.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_origin_size(origin: impl Into<Point<S>>, size: impl Into<Size<S>>) -> Self {
        let origin = origin.into();
        Rect::from_points(origin, origin + size.into().to_vec2())
    }
}

impl<S: Copy + Sub<Output = S>> Rect<S> {
    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> S {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> S {
        self.y1 - self.y0
    }

    /// The size of the rectangle.
    #[inline]
    pub fn size(&self) -> Size<S> {
        Size::new(self.width(), self.height())
    }
}

impl<S: Copy + Sub<Output = S> + Mul<Output = S>> Rect<S> {
    /// The area of the rectangle.
    #[inline]
    pub fn area(&self) -> Area<S> {
        Area::new(self.width() * self.height())
    }
}

impl<S: Copy + Add<Output = S> + Sub<Output = S>> Rect<S> {
    /// Expand a rectangle by a constant amount in both directions.
    ///
    /// The logic simply applies the amount in each direction. If rectangle
    /// area or added dimensions are negative, this could give odd results.
    #[must_use]
    pub fn inflate(&self, width: S, height: S) -> Self {
        Rect {
            x0: self.x0 - width,
            y0: self.y0 - height,
            x1: self.x1 + width,
            y1: self.y1 + height,
        }
    }
}

impl<S: Real> Rect<S> {
    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point<S> {
        self.origin().midpoint(Point::new(self.x1, self.y1))
    }
}

impl<S: Copy + PartialOrd> From<(Point<S>, Point<S>)> for Rect<S> {
    fn from(points: (Point<S>, Point<S>)) -> Self {
        Rect::from_points(points.0, points.1)
    }
}

impl<S: Copy + PartialOrd + Add<Output = S>> From<(Point<S>, Size<S>)> for Rect<S> {
    fn from(params: (Point<S>, Size<S>)) -> Self {
        Rect::from_origin_size(params.0, params.1)
    }
}

impl<S: Copy + Add<Output = S>> Add<Vec2<S>> for Rect<S> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<S>) -> Self {
        Rect {
            x0: self.x0 + v.x,
            y0: self.y0 + v.y,
            x1: self.x1 + v.x,
            y1: self.y1 + v.y,
        }
    }
}

impl<S: Copy + Sub<Output = S>> Sub<Vec2<S>> for Rect<S> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<S>) -> Self {
        Rect {
            x0: self.x0 - v.x,
            y0: self.y0 - v.y,
            x1: self.x1 - v.x,
            y1: self.y1 - v.y,
        }
    }
}

/// A measured area, convertible into shapes that cover the same area.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area<S> {
    /// The area.
    pub value: S,
}

/// A square, described only by its side length.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square<S> {
    /// The length of each side.
    pub side: S,
}

impl<S> Area<S> {
    /// Wrap an area value.
    #[inline]
    pub const fn new(value: S) -> Self {
        Area { value }
    }

    /// Convert the value to another scalar type.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Area<T> {
        Area::new(f(self.value))
    }
}

impl<S: Real> Area<S> {
    /// The square with this area.
    #[inline]
    pub fn square(self) -> Square<S> {
        Square {
            side: self.value.sqrt(),
        }
    }

    /// The circle centred at the origin with this area.
    #[inline]
    pub fn circle(self) -> Circle<S> {
        Circle::new(Point::origin(), (self.value / S::PI()).sqrt())
    }
}

impl<S: Copy + Mul<Output = S>> Square<S> {
    /// The area of the square.
    #[inline]
    pub fn area(self) -> Area<S> {
        Area::new(self.side * self.side)
    }
}
