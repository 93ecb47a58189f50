use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::evaluation::Operation;

/// The main configuration structure for numprops
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NumpropsConfig {
    /// Output format used when the command line does not override it
    #[serde(default)]
    pub output: OutputFormat,

    /// Named batches evaluated by `numprops run`
    #[serde(default)]
    #[validate]
    pub batches: Vec<Batch>,
}

/// A list of inputs evaluated by one operation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Batch {
    #[validate(length(min = 1))]
    pub name: String,

    pub operation: Operation,

    #[validate(length(min = 1))]
    pub inputs: Vec<i64>,

    /// Divisor for the `divides` operation (ignored by the others)
    #[serde(default)]
    pub divisor: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
