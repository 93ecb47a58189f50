//! Divisibility and parity predicates

use crate::error::{NumberError, NumberResult};

/// Returns true iff `a` divides `b`
///
/// `i64::MIN` divided by `-1` is treated as exact rather than overflowing.
///
/// # Panics
/// Panics when `a` is zero, the same way integer division by zero does.
/// Use [`checked_divides`] where the divisor is not known to be non-zero.
pub fn divides(a: i64, b: i64) -> bool {
    b.wrapping_rem(a) == 0
}

/// Like [`divides`], but reports a zero divisor as an error
pub fn checked_divides(a: i64, b: i64) -> NumberResult<bool> {
    if a == 0 {
        return Err(NumberError::DivisionByZero);
    }
    Ok(divides(a, b))
}

/// Returns true iff `x` is a multiple of two
///
/// The remainder of a negative odd number is `-1`, so negative inputs
/// classify the same way as their absolute value.
pub fn is_even(x: i64) -> bool {
    divides(2, x)
}

pub fn is_odd(x: i64) -> bool {
    !is_even(x)
}

/// Fails with [`NumberError::InvalidArgument`] unless `x` is odd
pub fn verify_is_odd(x: i64) -> NumberResult<()> {
    if !is_odd(x) {
        return Err(NumberError::invalid_argument(format!("{x} is not odd!")));
    }
    Ok(())
}
