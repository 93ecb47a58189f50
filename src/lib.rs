//! Pure integer predicates and digit utilities
//!
//! The [`properties`] module is the library proper: stateless functions over
//! `i64` values and their decimal renderings. The remaining modules make up
//! the `numprops` command-line driver that evaluates them.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod properties;


pub use error::{NumberError, NumberResult};
