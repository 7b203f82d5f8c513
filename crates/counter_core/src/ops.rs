//! Counter transitions and predicates.

/// Value a counter holds when it is created and after [`reset`].
pub const INITIAL_VALUE: i64 = 0;

/// Returns `value + 1`, wrapping at `i64::MAX`.
#[inline]
pub const fn increment(value: i64) -> i64 {
    value.wrapping_add(1)
}

/// Returns `value - 1`, wrapping at `i64::MIN`.
#[inline]
pub const fn decrement(value: i64) -> i64 {
    value.wrapping_sub(1)
}

/// Returns the initial value regardless of any prior state.
#[inline]
pub const fn reset() -> i64 {
    INITIAL_VALUE
}

/// Returns `value + amount`, wrapping on overflow.
///
/// A negative `amount` moves the value down, so
/// `increment_by(v, -n) == decrement_by(v, n)`.
#[inline]
pub const fn increment_by(value: i64, amount: i64) -> i64 {
    value.wrapping_add(amount)
}

/// Returns `value - amount`, wrapping on overflow.
#[inline]
pub const fn decrement_by(value: i64, amount: i64) -> i64 {
    value.wrapping_sub(amount)
}

/// Whether `value > 0`.
#[inline]
pub const fn is_positive(value: i64) -> bool {
    value > 0
}

/// Whether `value < 0`.
#[inline]
pub const fn is_negative(value: i64) -> bool {
    value < 0
}

/// Whether `value == 0`.
#[inline]
pub const fn is_zero(value: i64) -> bool {
    value == 0
}
