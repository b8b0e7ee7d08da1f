//! Circular angle arithmetic in degrees.
//!
//! Every angle lives on the circle `[0, 360)`. Bearings are measured clockwise
//! from north, so `(0, 1)` seen from the origin is at `0°` and `(1, 0)` at `90°`.
//!
//! Two normalizations exist:
//! - [`normalize`] is *inclusive*: an angle of exactly `360` stays `360`, which lets
//!   an interval end on the full turn.
//! - [`strict_normalize`] maps onto `[0, 360)`, so `360` becomes `0`.
//!
//! Tolerant comparisons use [`tolerance`](crate::float_types::tolerance).
//! NaN propagates through the arithmetic and fails every predicate.

use crate::float_types::{FULL_CIRCLE, HALF_CIRCLE, Real, tolerance};

/// Bearing from `(ax, ay)` to `(bx, by)` in `[0, 360)`.
pub fn bearing(ax: Real, ay: Real, bx: Real, by: Real) -> Real {
    strict_normalize((bx - ax).atan2(by - ay).to_degrees())
}

/// Normalizes into `[0, 360]`, keeping `360` (and any positive multiple of it) at `360`.
pub fn normalize(angle: Real) -> Real {
    if (0.0..=FULL_CIRCLE).contains(&angle) {
        return angle;
    }
    let wrapped = strict_normalize(angle);
    if wrapped == 0.0 && angle > 0.0 {
        FULL_CIRCLE
    } else {
        wrapped
    }
}

/// Normalizes into `[0, 360)`.
pub fn strict_normalize(angle: Real) -> Real {
    let wrapped = angle.rem_euclid(FULL_CIRCLE);
    // rem_euclid of a tiny negative number rounds up to the modulus itself
    if wrapped >= FULL_CIRCLE { 0.0 } else { wrapped }
}

/// Clockwise rotation needed to get from `a` to `b`, in `[0, 360)`.
pub fn difference(a: Real, b: Real) -> Real {
    strict_normalize(b - a)
}

/// True when `a` and `b` denote the same direction within the angle tolerance.
pub fn are_equal(a: Real, b: Real) -> bool {
    let diff = difference(a, b);
    diff <= tolerance() || FULL_CIRCLE - diff <= tolerance()
}

/// Exclusive circular betweenness: `angle` lies strictly inside the clockwise arc
/// from `from` to `to`. An arc with `from == to` is empty.
pub fn is_between(from: Real, angle: Real, to: Real) -> bool {
    let (from, angle, to) = (strict_normalize(from), strict_normalize(angle), strict_normalize(to));
    if from < to {
        from < angle && angle < to
    } else if from > to {
        angle > from || angle < to
    } else {
        false
    }
}

/// Inclusive circular betweenness: `angle` lies on the clockwise arc from `from` to
/// `to`, endpoints included within the angle tolerance. An arc with `from == to` is
/// that single direction.
pub fn is_between_equal(from: Real, angle: Real, to: Real) -> bool {
    if are_equal(from, angle) || are_equal(angle, to) {
        return true;
    }
    let (from, angle, to) = (strict_normalize(from), strict_normalize(angle), strict_normalize(to));
    if from < to {
        from <= angle && angle <= to
    } else if from > to {
        angle >= from || angle <= to
    } else {
        false
    }
}

/// The arc connecting the unordered pair `a`, `b` that is at most half a turn wide,
/// returned clockwise as `(from, to)`.
pub fn enclosing_angles(a: Real, b: Real) -> (Real, Real) {
    let (a, b) = (strict_normalize(a), strict_normalize(b));
    if difference(a, b) <= HALF_CIRCLE { (a, b) } else { (b, a) }
}

/// Merges two clockwise arcs into the smallest arc covering both.
///
/// Returns `None` when the arcs neither touch nor overlap, or when together they
/// wrap the whole circle (the result would not be an arc).
pub fn merge(a_from: Real, a_to: Real, b_from: Real, b_to: Real) -> Option<(Real, Real)> {
    let a_has_b_from = is_between_equal(a_from, b_from, a_to);
    let a_has_b_to = is_between_equal(a_from, b_to, a_to);
    let b_has_a_from = is_between_equal(b_from, a_from, b_to);
    let b_has_a_to = is_between_equal(b_from, a_to, b_to);

    let merged = match (a_has_b_from && a_has_b_to, b_has_a_from && b_has_a_to) {
        (true, true) => {
            if are_equal(a_from, b_from) && are_equal(a_to, b_to) {
                (a_from, a_to)
            } else {
                return None;
            }
        },
        (true, false) => (a_from, a_to),
        (false, true) => (b_from, b_to),
        (false, false) if a_has_b_from => (a_from, b_to),
        (false, false) if b_has_a_from => (b_from, a_to),
        (false, false) => return None,
    };

    Some((strict_normalize(merged.0), strict_normalize(merged.1)))
}
