// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for closed shapes.

use crate::{Point, Real, Rect};

/// A generic trait for closed shapes.
///
/// Implemented by [`Circle`](crate::Circle), [`Ellipse`](crate::Ellipse) and
/// [`Ngon`](crate::Ngon). Each of them also offers the same operations as
/// inherent methods, so the trait only needs importing for generic code.
pub trait Shape<S: Real> {
    /// Enclosed area.
    ///
    /// Always non-negative.
    fn area(&self) -> S;

    /// Total length of perimeter.
    fn perimeter(&self) -> S;

    /// Whether `pt` lies inside the shape.
    ///
    /// Points on the boundary count as inside.
    fn contains(&self, pt: Point<S>) -> bool;

    /// The smallest rectangle that encloses the shape.
    fn bounding_box(&self) -> Rect<S>;
}
