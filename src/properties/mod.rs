//! Pure predicates and arithmetic over integers and their decimal form
//!
//! Nothing in this module keeps state or performs I/O; every function is a
//! deterministic mapping from its input to its output.

pub mod arithmetic;
pub mod digits;
pub mod input;
pub mod parity;

pub use arithmetic::{factorial, sum_from_one_to};
pub use digits::{digit_sum, is_balanced, is_palindrome, split_at_middle};
pub use input::parse_integer;
pub use parity::{checked_divides, divides, is_even, is_odd, verify_is_odd};
