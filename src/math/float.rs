//! Tolerance-aware comparisons on [`Real`] values.
//!
//! Every predicate compares against [`TOLERANCE`]. Two values closer than the
//! tolerance are equal, and a value within the tolerance of zero has no sign.

use super::{Point2, Real, TOLERANCE};

/// Returns `true` if `value` is within tolerance of zero.
#[inline]
#[must_use]
pub fn is_zero(value: Real) -> bool {
    value.abs() <= TOLERANCE
}

/// Returns `true` if `a` and `b` differ by no more than the tolerance.
#[inline]
#[must_use]
pub fn are_equal(a: Real, b: Real) -> bool {
    (a - b).abs() <= TOLERANCE
}

#[inline]
#[must_use]
pub fn are_not_equal(a: Real, b: Real) -> bool {
    !are_equal(a, b)
}

/// Returns `true` if `a` is greater than `b` by more than the tolerance.
#[inline]
#[must_use]
pub fn is_greater_than(a: Real, b: Real) -> bool {
    a - b > TOLERANCE
}

/// Returns `true` if `a` is lower than `b` by more than the tolerance.
#[inline]
#[must_use]
pub fn is_less_than(a: Real, b: Real) -> bool {
    a - b < -TOLERANCE
}

#[inline]
#[must_use]
pub fn is_greater_or_equal(a: Real, b: Real) -> bool {
    a - b >= -TOLERANCE
}

#[inline]
#[must_use]
pub fn is_less_or_equal(a: Real, b: Real) -> bool {
    a - b <= TOLERANCE
}

/// Returns `true` if `value` is below zero by more than the tolerance.
#[inline]
#[must_use]
pub fn is_negative(value: Real) -> bool {
    is_less_than(value, 0.0)
}

/// Returns `true` if `value` is not negative. Zero counts as positive.
#[inline]
#[must_use]
pub fn is_positive(value: Real) -> bool {
    is_greater_or_equal(value, 0.0)
}

/// Component-wise tolerant equality of two points.
#[inline]
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    are_equal(a.x, b.x) && are_equal(a.y, b.y)
}
