//! Factorials and triangular sums
//!
//! Results are `u128`. Every non-negative `i64` has a triangular sum that
//! fits, while factorials overflow past
//! [`MAX_FACTORIAL_INPUT`](crate::constants::limits::MAX_FACTORIAL_INPUT)
//! and are reported as [`NumberError::Overflow`] rather than wrapped.

use crate::error::{NumberError, NumberResult};

/// Iterative product `n * (n - 1) * ... * 1`, with `factorial(0) == 1`
///
/// # Errors
/// * [`NumberError::InvalidArgument`] if `n` is negative
/// * [`NumberError::Overflow`] if the product does not fit in a `u128`
pub fn factorial(n: i64) -> NumberResult<u128> {
    let upper = non_negative("factorial", n)?;

    let mut result: u128 = 1;
    let mut k = upper;
    while k > 0 {
        result = result
            .checked_mul(u128::from(k))
            .ok_or_else(|| NumberError::overflow("factorial", n))?;
        k -= 1;
    }

    Ok(result)
}

/// Sum of `1..=n`, computed in closed form as `n * (n + 1) / 2`
///
/// # Errors
/// * [`NumberError::InvalidArgument`] if `n` is negative
pub fn sum_from_one_to(n: i64) -> NumberResult<u128> {
    let n = u128::from(non_negative("sum_from_one_to", n)?);

    // n < 2^63, so n * (n + 1) < 2^127
    Ok(n * (n + 1) / 2)
}

fn non_negative(operation: &str, n: i64) -> NumberResult<u64> {
    u64::try_from(n).map_err(|_| {
        NumberError::invalid_argument(format!("{operation} requires n >= 0, got {n}"))
    })
}
