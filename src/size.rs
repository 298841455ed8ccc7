// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2d size.

use core::fmt;
use core::ops::Mul;

use crate::Vec2;

/// A 2d size.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<S> {
    /// The width.
    pub width: S,
    /// The height.
    pub height: S,
}

impl<S> Size<S> {
    /// Create a new `Size` with the provided `width` and `height`.
    #[inline]
    pub const fn new(width: S, height: S) -> Self {
        Size { width, height }
    }

    /// Convert this size into a `Vec2`, with `width` mapped to `x` and `height`
    /// mapped to `y`.
    #[inline]
    pub fn to_vec2(self) -> Vec2<S> {
        Vec2::new(self.width, self.height)
    }

    /// Convert the dimensions to another scalar type.
    #[inline]
    pub fn map<T>(self, mut f: impl FnMut(S) -> T) -> Size<T> {
        Size::new(f(self.width), f(self.height))
    }
}

impl<S: Copy + Mul<Output = S>> Size<S> {
    /// The area covered by this size.
    #[inline]
    pub fn area(self) -> S {
        self.width * self.height
    }
}

impl<S: fmt::Debug> fmt::Debug for Size<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}W×{:?}H", self.width, self.height)
    }
}

impl<S: fmt::Display> fmt::Display for Size<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.width, formatter)?;
        write!(formatter, "×")?;
        fmt::Display::fmt(&self.height, formatter)?;
        write!(formatter, ")")
    }
}

impl<S> From<(S, S)> for Size<S> {
    #[inline]
    fn from(v: (S, S)) -> Self {
        Size {
            width: v.0,
            height: v.1,
        }
    }
}

impl<S> From<Size<S>> for (S, S) {
    #[inline]
    fn from(v: Size<S>) -> (S, S) {
        (v.width, v.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let s = Size::new(-0.12345, 9.87654);
        assert_eq!(format!("{}", s), "(-0.12345×9.87654)");

        let s = Size::new(-0.12345, 9.87654);
        assert_eq!(format!("{:+6.2}", s), "( -0.12× +9.88)");
    }

    #[test]
    fn integer_area() {
        let s: Size<u32> = Size::new(12, 5);
        assert_eq!(s.area(), 60);
        assert_eq!(s.to_vec2(), Vec2::new(12, 5));
    }
}
