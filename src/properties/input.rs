//! Textual input boundary

use crate::error::{NumberError, NumberResult};

/// Parses a base-10 `i64`, ignoring surrounding whitespace
///
/// Floats, words and values outside the `i64` range are rejected.
pub fn parse_integer(raw: &str) -> NumberResult<i64> {
    raw.trim().parse::<i64>().map_err(|e| {
        NumberError::invalid_argument(format!("Failed to parse integer: '{raw}' ({e})"))
    })
}
