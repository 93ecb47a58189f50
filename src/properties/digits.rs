//! Digit-based predicates on the decimal rendering of an integer
//!
//! Both predicates split the rendering at its middle. For a string of length
//! `L` the left half is the first `L / 2` characters and the right half
//! starts at `L / 2 + L % 2`, so the middle character of an odd-length
//! string is a pivot that belongs to neither half.
//!
//! The rendering keeps the sign of negative numbers. The `-` always lands in
//! the left half: [`is_palindrome`] therefore rejects every negative number,
//! and [`is_balanced`] reports it as [`NumberError::InvalidDigit`].

use crate::error::{NumberError, NumberResult};

/// Splits `s` into its left and right halves, dropping the pivot of an
/// odd-length string
///
/// Lengths are counted in characters, so any `&str` splits cleanly.
pub fn split_at_middle(s: &str) -> (&str, &str) {
    let len = s.chars().count();
    let mid = len / 2;
    let rhs_start = mid + len % 2;

    (&s[..byte_offset(s, mid)], &s[byte_offset(s, rhs_start)..])
}

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Sums the decimal digit values of `s`
///
/// # Errors
/// [`NumberError::InvalidDigit`] on the first character that is not `0-9`
pub fn digit_sum(s: &str) -> NumberResult<u32> {
    s.chars().try_fold(0u32, |acc, c| {
        c.to_digit(10)
            .map(|d| acc + d)
            .ok_or_else(|| NumberError::invalid_digit(c, s))
    })
}

/// Returns true iff both halves of `n` have the same digit sum
///
/// ```
/// use numprops::properties::is_balanced;
///
/// assert_eq!(is_balanced(1221), Ok(true));
/// assert_eq!(is_balanced(123), Ok(false));
/// ```
pub fn is_balanced(n: i64) -> NumberResult<bool> {
    let rendered = n.to_string();
    let (lhs, rhs) = split_at_middle(&rendered);

    Ok(digit_sum(lhs)? == digit_sum(rhs)?)
}

/// Returns true iff both halves of `n` read identically
///
/// Note that the halves are compared as written, not mirrored: `1212` is a
/// palindrome under this rule and `1221` is not.
pub fn is_palindrome(n: i64) -> bool {
    let rendered = n.to_string();
    let (lhs, rhs) = split_at_middle(&rendered);

    lhs == rhs
}
