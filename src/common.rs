// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use arrayvec::ArrayVec;

use crate::{Point, Real, Vec2};

/// Whether `v` is zero within the scalar's machine epsilon.
#[inline]
pub(crate) fn is_near_zero<S: Real>(v: S) -> bool {
    v.abs() <= S::epsilon()
}

/// Whether a segment parameter lies in `[0, 1]`, both ends inclusive.
///
/// The ends are widened by one epsilon so that intersections computed
/// exactly at a shared endpoint are not lost to roundoff.
#[inline]
pub(crate) fn in_unit_interval<S: Real>(t: S) -> bool {
    t >= -S::epsilon() && t <= S::one() + S::epsilon()
}

/// Whether a ray parameter is non-negative, widened by one epsilon.
#[inline]
pub(crate) fn in_half_line<S: Real>(t: S) -> bool {
    t >= -S::epsilon()
}

/// Clamp `t` into `[0, 1]`.
#[inline]
pub(crate) fn clamp_unit<S: Real>(t: S) -> S {
    t.max(S::zero()).min(S::one())
}

/// The smaller of two partially ordered values, preferring `a` when unordered.
#[inline]
pub(crate) fn partial_min<S: PartialOrd>(a: S, b: S) -> S {
    if b < a {
        b
    } else {
        a
    }
}

/// The larger of two partially ordered values, preferring `a` when unordered.
#[inline]
pub(crate) fn partial_max<S: PartialOrd>(a: S, b: S) -> S {
    if b > a {
        b
    } else {
        a
    }
}

/// Solve `p0 + t·d0 = p1 + u·d1` for `(t, u)` with Cramer's rule.
///
/// Returns `None` when the directions are parallel, which includes the
/// coincident case and zero directions: `|d0 × d1|` is at most the scalar's
/// epsilon.
pub(crate) fn solve_parametric<S: Real>(
    p0: Point<S>,
    d0: Vec2<S>,
    p1: Point<S>,
    d1: Vec2<S>,
) -> Option<(S, S)> {
    let cross = d0.cross(d1);
    if is_near_zero(cross) {
        log::trace!("directions are parallel, no unique intersection");
        return None;
    }
    let w = p1 - p0;
    let t = w.cross(d1) / cross;
    let u = w.cross(d0) / cross;
    Some((t, u))
}

/// Parameter of the orthogonal projection of `pt` onto `p0 + t·d`.
///
/// Returns `None` for a degenerate direction.
pub(crate) fn project_param<S: Real>(p0: Point<S>, d: Vec2<S>, pt: Point<S>) -> Option<S> {
    if d.is_degenerate() {
        log::trace!("zero direction, projection undefined");
        return None;
    }
    Some(d.dot(pt - p0) / d.hypot2())
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0.
///
/// This function tries to be quite numerically robust. If the equation
/// is nearly linear, it will return the root ignoring the quadratic term;
/// the other root might be out of representable range. In the degenerate
/// case where all coefficients are zero, so that all values of x satisfy
/// the equation, a single `0.0` is returned.
pub(crate) fn solve_quadratic<S: Real>(c0: S, c1: S, c2: S) -> ArrayVec<S, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        } else if c0 == S::zero() && c1 == S::zero() {
            // Degenerate case
            result.push(S::zero());
        }
        return result;
    }
    let arg = sc1 * sc1 - S::cast(4.0) * sc0;
    let root1 = if !arg.is_finite() {
        // Likely, calculation of sc1 * sc1 overflowed. Find one root
        // using sc1 x + x² = 0, other root as sc0 / root1.
        -sc1
    } else {
        if arg < S::zero() {
            return result;
        } else if arg == S::zero() {
            result.push(-S::half() * sc1);
            return result;
        }
        // See https://math.stackexchange.com/questions/866331
        -S::half() * (sc1 + arg.sqrt().copysign(sc1))
    };
    let root2 = sc0 / root1;
    if root2.is_finite() {
        // Sort just to be friendly and make results deterministic.
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}
